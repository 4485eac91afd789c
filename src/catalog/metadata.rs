/*!
 * Catalog header refresh.
 *
 * After a successful translation the header is stamped with the revision
 * time, the translating model and the target language. Header fields are
 * held by `polib::metadata::CatalogMetadata`.
 */

use chrono::{DateTime, Local, TimeZone};
use polib::metadata::CatalogMetadata;

use crate::errors::MetadataError;

pub const PROJECT_ID_VERSION: &str = "Project-Id-Version";
pub const PO_REVISION_DATE: &str = "PO-Revision-Date";
pub const LAST_TRANSLATOR: &str = "Last-Translator";
pub const LANGUAGE_TEAM: &str = "Language-Team";
pub const LANGUAGE: &str = "Language";

/// Timestamp layout used by gettext tools, e.g. `2024-05-01 14:03+0200`
pub const REVISION_DATE_FORMAT: &str = "%Y-%m-%d %H:%M%z";

/// Header refresh applied after a successful translation
#[derive(Debug, Clone)]
pub struct MetadataUpdate {
    pub revision_date: String,
    pub last_translator: String,
    pub language_team: String,
    pub language: String,
    pub default_project_id: String,
}

impl MetadataUpdate {
    /// Build the update for a run, stamped with the current local time
    pub fn for_run(model: &str, language_code: &str, language_name: &str, default_project_id: &str) -> Self {
        Self::at(&Local::now(), model, language_code, language_name, default_project_id)
    }

    /// Build the update for a run at a given time
    pub fn at<Tz>(
        now: &DateTime<Tz>,
        model: &str,
        language_code: &str,
        language_name: &str,
        default_project_id: &str,
    ) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        Self {
            revision_date: now.format(REVISION_DATE_FORMAT).to_string(),
            last_translator: format!("AI Translator ({})", model),
            language_team: language_name.to_string(),
            language: language_code.to_string(),
            default_project_id: default_project_id.to_string(),
        }
    }

    /// Apply the update
    ///
    /// Either every field is written or none is.
    pub fn apply(&self, metadata: &mut CatalogMetadata) -> Result<(), MetadataError> {
        let set_project_id = metadata.project_id_version.trim().is_empty();

        let mut changes = vec![
            (PO_REVISION_DATE, &self.revision_date),
            (LAST_TRANSLATOR, &self.last_translator),
            (LANGUAGE_TEAM, &self.language_team),
            (LANGUAGE, &self.language),
        ];
        if set_project_id {
            changes.push((PROJECT_ID_VERSION, &self.default_project_id));
        }

        if let Some((key, value)) = changes.iter().find(|(_, value)| value.contains(['\n', '\r'])) {
            return Err(MetadataError::MultiLineValue {
                key: key.to_string(),
                value: value.to_string(),
            });
        }

        metadata.po_revision_date = self.revision_date.clone();
        metadata.last_translator = self.last_translator.clone();
        metadata.language_team = self.language_team.clone();
        metadata.language = self.language.clone();
        if set_project_id {
            metadata.project_id_version = self.default_project_id.clone();
        }

        Ok(())
    }
}
