use polib::catalog::Catalog;
use polib::message::{Message, MessageView};

use crate::catalog::FUZZY_FLAG;

// @module: Writes validated translations back onto catalog messages

/// Apply translations positionally and clear the review marker
///
/// Message `i` receives translation `i`. Callers pass sequences of equal
/// length; extra items on either side are left alone.
pub fn apply_translations(catalog: &mut Catalog, translations: Vec<String>) {
    let updated: Vec<Message> = catalog
        .messages()
        .zip(translations)
        .map(|(message, translation)| translated_message(message, translation))
        .collect();

    for message in updated {
        catalog.append_or_update(message);
    }
}

/// Copy of `message` carrying `translation`, without the `fuzzy` flag
///
/// Plural messages get the translation as their first form; the other
/// forms are kept.
pub fn translated_message<M>(message: &M, translation: String) -> Message
where
    M: MessageView + ?Sized,
{
    let mut flags = message.flags().clone();
    flags.remove_flag(FUZZY_FLAG);

    let mut builder = if message.is_plural() {
        Message::build_plural()
    } else {
        Message::build_singular()
    };
    builder
        .with_comments(message.comments().to_string())
        .with_source(message.source().to_string())
        .with_flags(flags)
        .with_msgctxt(message.msgctxt().to_string())
        .with_msgid(message.msgid().to_string());

    if message.is_plural() {
        let mut forms = message.msgstr_plural().map(|forms| forms.to_vec()).unwrap_or_default();
        match forms.first_mut() {
            Some(first) => *first = translation,
            None => forms.push(translation),
        }
        builder
            .with_msgid_plural(message.msgid_plural().unwrap_or_default().to_string())
            .with_msgstr_plural(forms);
    } else {
        builder.with_msgstr(translation);
    }

    builder.done()
}
