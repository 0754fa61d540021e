use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LocalizationGenError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("Input file unreadable: {}: {source}", .path.display())]
    InputUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Output directory does not exist: {}", .0.display())]
    OutputDirectoryMissing(PathBuf),

    #[error("Output file unwritable: {}: {source}", .path.display())]
    OutputUnwritable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Row {index} has {fields} fields, expected at least 5")]
    ShortRow { index: usize, fields: usize },

    #[error("Input size {size} does not fit in the generated int constant")]
    SizeOverflow { size: u64 },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Generated output is stale: {}", .0.display())]
    OutputStale(PathBuf),
}

pub type Result<T> = std::result::Result<T, LocalizationGenError>;

impl LocalizationGenError {
    pub(crate) fn from_input_io(path: &Path, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => LocalizationGenError::InputNotFound(path.to_path_buf()),
            _ => LocalizationGenError::InputUnreadable {
                path: path.to_path_buf(),
                source: err,
            },
        }
    }

    pub(crate) fn from_output_io(path: &Path, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => {
                LocalizationGenError::OutputDirectoryMissing(path.to_path_buf())
            }
            _ => LocalizationGenError::OutputUnwritable {
                path: path.to_path_buf(),
                source: err,
            },
        }
    }
}
