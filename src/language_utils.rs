use isolang::Language;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Language utilities for catalog language codes
///
/// Catalog languages are identified by gettext-style codes such as `de`,
/// `pt_BR` or `zh_CN`. This module maps them to the human-readable names
/// used in prompts and in the `Language-Team` header.

// @const: Display names for the catalog languages we ship
static LANGUAGE_NAMES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("ar", "Arabic"),
        ("bg_BG", "Bulgarian"),
        ("bn", "Bengali"),
        ("ca", "Catalan"),
        ("cs", "Czech"),
        ("da", "Danish"),
        ("de", "German"),
        ("el", "Greek"),
        ("en", "English"),
        ("en_GB", "English (United Kingdom)"),
        ("eo", "Esperanto"),
        ("es", "Spanish"),
        ("eu", "Basque"),
        ("fa", "Persian"),
        ("fi", "Finnish"),
        ("fr", "French"),
        ("gl", "Galician"),
        ("he", "Hebrew"),
        ("hi", "Hindi"),
        ("hr", "Croatian"),
        ("hu", "Hungarian"),
        ("it_IT", "Italian"),
        ("ja", "Japanese"),
        ("ka", "Georgian"),
        ("kk", "Kazakh"),
        ("ko_KR", "Korean"),
        ("lt_LT", "Lithuanian"),
        ("lv", "Latvian"),
        ("nb_NO", "Norwegian Bokmål"),
        ("nl_NL", "Dutch"),
        ("pl", "Polish"),
        ("pl_PL", "Polish (Poland)"),
        ("pt_PT", "Portuguese"),
        ("pt_BR", "Portuguese (Brazil)"),
        ("ro", "Romanian"),
        ("ro_MD", "Romanian (Moldova)"),
        ("ru", "Russian"),
        ("sk", "Slovak"),
        ("sr", "Serbian"),
        ("sv", "Swedish"),
        ("th", "Thai"),
        ("tr", "Turkish"),
        ("uk", "Ukrainian"),
        ("vi", "Vietnamese"),
        ("vi_VN", "Vietnamese (Vietnam)"),
        ("zh", "Chinese"),
        ("zh_CN", "Simplified Chinese"),
        ("zh_TW", "Traditional Chinese (Taiwan)"),
    ])
});

/// Get the display name for a language code
///
/// Codes missing from the table are returned unchanged so the prompt still
/// names the language the caller asked for.
pub fn get_language_name(code: &str) -> &str {
    LANGUAGE_NAMES.get(code).copied().unwrap_or(code)
}

/// Check whether the primary subtag of a code is an ISO 639-1 language
///
/// `pt_BR`, `pt-BR` and `pt` all check `pt`.
pub fn is_recognized_language_code(code: &str) -> bool {
    let primary = code
        .split(['_', '-', '@', '.'])
        .next()
        .unwrap_or_default()
        .trim()
        .to_lowercase();

    primary.len() == 2 && Language::from_639_1(&primary).is_some()
}
