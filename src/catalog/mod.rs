/*!
 * Gettext catalog access.
 *
 * Reading and writing `.po` files is done by `polib`. `Catalog` wraps the
 * parsed catalog with the operations the pipeline needs and maps failures
 * onto this crate's error types.
 */

use std::path::Path;

use log::debug;
use polib::catalog::Catalog as PoCatalog;
use polib::message::MessageView;
use polib::metadata::CatalogMetadata;
use polib::po_file;

use crate::errors::{CatalogError, PersistError};
use crate::file_utils::FileManager;

pub mod metadata;

pub use metadata::MetadataUpdate;

/// Flag gettext tools use to mark a translation as needing review
pub const FUZZY_FLAG: &str = "fuzzy";

/// A loaded `.po` catalog
pub struct Catalog {
    inner: PoCatalog,
}

impl Catalog {
    /// Load a catalog from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        FileManager::check_readable(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let inner = po_file::parse(path).map_err(|e| CatalogError::Malformed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let catalog = Self { inner };
        debug!("Loaded {} entries from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    /// Write the catalog to a file, replacing it atomically
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), PersistError> {
        let path = path.as_ref();
        FileManager::write_atomically_with(path, |temp_path| po_file::write(&self.inner, temp_path)).map_err(
            |source| PersistError {
                path: path.to_path_buf(),
                source,
            },
        )
    }

    pub fn len(&self) -> usize {
        self.inner.messages().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Source strings of all entries, in order
    pub fn source_texts(&self) -> Vec<String> {
        self.inner.messages().map(|message| message.msgid().to_string()).collect()
    }

    /// Header fields
    pub fn metadata(&self) -> &CatalogMetadata {
        &self.inner.metadata
    }

    pub fn metadata_mut(&mut self) -> &mut CatalogMetadata {
        &mut self.inner.metadata
    }

    /// The underlying `polib` catalog
    pub fn po(&self) -> &PoCatalog {
        &self.inner
    }

    pub fn po_mut(&mut self) -> &mut PoCatalog {
        &mut self.inner
    }
}
