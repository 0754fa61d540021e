use crate::utils::{LocalizationGenError, Result};
use std::path::{Path, PathBuf};

pub struct SourceFileWriter {
    path: PathBuf,
}

impl SourceFileWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates or truncates the target and writes `contents` as UTF-8.
    pub fn write_document(&self, contents: &str) -> Result<usize> {
        std::fs::write(&self.path, contents)
            .map_err(|e| LocalizationGenError::from_output_io(&self.path, e))?;

        tracing::debug!(path = %self.path.display(), bytes = contents.len(), "Wrote generated source");
        Ok(contents.len())
    }

    /// Existing raw contents of the target, or `None` when it does not exist yet.
    pub fn read_existing(&self) -> Result<Option<Vec<u8>>> {
        match std::fs::read(&self.path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(LocalizationGenError::IoError(e)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
