/*!
 * Prompt templates for catalog translation.
 *
 * The system prompt is fixed apart from the target language name; the
 * source strings travel separately as a JSON array in the user message.
 */

use crate::errors::TranslationError;

/// System prompt template for catalog translation.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    /// The template string with placeholders
    template: String,
}

impl PromptTemplate {
    /// The default system prompt for PO catalog translation.
    pub const CATALOG_TRANSLATOR: &'static str = r#"You are an expert translator specializing in software localization for the Gettext .po file format.
Your task is to translate a list of source strings into {language_name}.
- The user will provide a JSON array of source strings (msgid).
- You MUST return a JSON object with a single key named 'translations' which contains an array of the translated strings.
- The order of the translated strings in the output array must exactly match the order of the source strings in the input array.
- The translation should be accurate, context-aware, and suitable for a user interface.
- Keep the tone natural for the target language.
- Do not return anything other than a valid JSON object with the specified structure."#;

    /// Create a new prompt template.
    pub fn new(template: &str) -> Self {
        Self {
            template: template.to_string(),
        }
    }

    /// Create the default catalog translator template.
    pub fn catalog_translator() -> Self {
        Self::new(Self::CATALOG_TRANSLATOR)
    }

    /// Render the template for a target language.
    pub fn render(&self, language_name: &str) -> String {
        self.template.replace("{language_name}", language_name)
    }
}

impl Default for PromptTemplate {
    fn default() -> Self {
        Self::catalog_translator()
    }
}

/// Encode the source strings as the user message payload
///
/// Non-ASCII text is kept as-is rather than `\u` escaped.
pub fn build_user_payload(sources: &[String]) -> Result<String, TranslationError> {
    serde_json::to_string(sources).map_err(|e| TranslationError::Payload(e.to_string()))
}
