/*!
 * Core translation request logic.
 *
 * All source strings of a catalog go to the model in one request; the
 * answer must be a JSON object whose `translations` array lines up with the
 * sources one to one.
 */

use log::{debug, info};
use serde_json::Value;

use crate::errors::TranslationError;
use crate::providers::Provider;
use crate::providers::openai::{OpenAIRequest, OpenAIResponse, ResponseFormat};
use crate::translation::prompts::{PromptTemplate, build_user_payload};

/// Key of the array in the model's answer
pub const TRANSLATIONS_KEY: &str = "translations";

/// Sampling temperature, kept low so reruns produce the same wording
pub const TRANSLATION_TEMPERATURE: f32 = 0.2;

/// Translates batches of catalog strings through a chat completion provider
#[derive(Debug)]
pub struct CatalogTranslator<P> {
    provider: P,
    model: String,
    template: PromptTemplate,
}

impl<P> CatalogTranslator<P>
where
    P: Provider<Request = OpenAIRequest, Response = OpenAIResponse>,
{
    /// Create a translator using the default prompt
    pub fn new(provider: P, model: impl Into<String>) -> Self {
        Self {
            provider,
            model: model.into(),
            template: PromptTemplate::default(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Build the single request for a batch
    pub fn build_request(&self, sources: &[String], language_name: &str) -> Result<OpenAIRequest, TranslationError> {
        Ok(OpenAIRequest::new(self.model.clone())
            .add_message("system", self.template.render(language_name))
            .add_message("user", build_user_payload(sources)?)
            .response_format(ResponseFormat::json_object())
            .temperature(TRANSLATION_TEMPERATURE))
    }

    /// Translate all sources in one request
    ///
    /// The result has exactly `sources.len()` elements in source order.
    pub async fn translate(&self, sources: &[String], language_name: &str) -> Result<Vec<String>, TranslationError> {
        let request = self.build_request(sources, language_name)?;

        info!("Sending request to AI API...");
        let response = self.provider.complete(request).await?;
        let raw = P::extract_text(&response);
        debug!("Raw AI response: {}", raw);

        let translations = parse_translations(&raw, sources.len())?;
        info!("Received translations from AI.");
        Ok(translations)
    }
}

/// Validate the model's answer and pull out the translations
///
/// Fails when the body is not a JSON object with a `translations` array of
/// strings, or when the array length differs from `expected`.
pub fn parse_translations(raw: &str, expected: usize) -> Result<Vec<String>, TranslationError> {
    let malformed = |reason: String| TranslationError::MalformedResponse {
        reason,
        raw: raw.to_string(),
    };

    let value: Value = serde_json::from_str(raw).map_err(|e| malformed(format!("invalid JSON: {}", e)))?;

    let items = value
        .get(TRANSLATIONS_KEY)
        .and_then(Value::as_array)
        .ok_or_else(|| {
            malformed(format!(
                "AI response JSON is missing '{}' key or it's not a list",
                TRANSLATIONS_KEY
            ))
        })?;

    let translations = items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            item.as_str()
                .map(str::to_string)
                .ok_or_else(|| malformed(format!("translation at index {} is not a string", index)))
        })
        .collect::<Result<Vec<_>, _>>()?;

    if translations.len() != expected {
        return Err(TranslationError::CountMismatch {
            expected,
            received: translations.len(),
        });
    }

    Ok(translations)
}
