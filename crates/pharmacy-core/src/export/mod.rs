//! Export of stored collections to JSON and CSV files.
//!
//! Exports produce an [`ExportFile`]; writing it somewhere is the caller's
//! concern.

mod csv;
mod json;

pub use self::csv::*;
pub use self::json::*;

use std::io;
use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};

/// A generated file ready to be saved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportFile {
    /// Suggested file name (no directory part)
    pub filename: String,
    /// MIME type of the contents
    pub content_type: String,
    /// File contents
    pub contents: String,
}

impl ExportFile {
    /// Write the file into `dir` under its suggested name.
    ///
    /// The name must be a bare file name; anything with a directory part
    /// fails with [`io::ErrorKind::InvalidInput`] and nothing is written.
    pub fn write_to_dir<P: AsRef<Path>>(&self, dir: P) -> io::Result<PathBuf> {
        let mut components = Path::new(&self.filename).components();
        if !matches!(
            (components.next(), components.next()),
            (Some(Component::Normal(_)), None)
        ) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("export file name '{}' must not contain a directory", self.filename),
            ));
        }

        let dir = dir.as_ref();
        std::fs::create_dir_all(dir)?;
        let path = dir.join(&self.filename);
        std::fs::write(&path, &self.contents)?;
        Ok(path)
    }
}
