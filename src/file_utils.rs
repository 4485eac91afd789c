use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;
use tempfile::NamedTempFile;

// @module: File utilities

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @creates: Directory and parents if needed
    pub fn ensure_dir<P: AsRef<Path>>(path: P) -> io::Result<()> {
        let path = path.as_ref();
        if !path.as_os_str().is_empty() && !path.exists() {
            fs::create_dir_all(path)?;
        }
        Ok(())
    }

    /// Fail with the underlying I/O error if a file cannot be opened for reading
    pub fn check_readable<P: AsRef<Path>>(path: P) -> io::Result<()> {
        let path = path.as_ref();
        if path.is_dir() {
            return Err(io::Error::new(io::ErrorKind::InvalidInput, "is a directory"));
        }
        File::open(path).map(|_| ())
    }

    /// Produce a file through a temporary sibling
    ///
    /// `write` receives the temporary path. The target is either fully
    /// replaced or left as it was.
    pub fn write_atomically_with<P, F>(path: P, write: F) -> io::Result<()>
    where
        P: AsRef<Path>,
        F: FnOnce(&Path) -> io::Result<()>,
    {
        let path = path.as_ref();
        let parent = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        Self::ensure_dir(parent)?;

        let temp = NamedTempFile::new_in(parent)?;
        write(temp.path())?;
        File::open(temp.path())?.sync_all()?;
        temp.persist(path).map_err(|e| e.error)?;
        Ok(())
    }

    /// Write a string to a file through a temporary sibling
    pub fn write_atomically<P: AsRef<Path>>(path: P, content: &str) -> io::Result<()> {
        Self::write_atomically_with(path, |temp_path| {
            let mut file = File::create(temp_path)?;
            file.write_all(content.as_bytes())?;
            file.flush()
        })
    }

    /// Create an empty file, truncating any existing content
    pub fn create_empty_file<P: AsRef<Path>>(path: P) -> io::Result<()> {
        Self::write_atomically(path, "")
    }
}
