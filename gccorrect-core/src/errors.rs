use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BinTableError {
    #[error("File {} does not exist or can't be opened", .0.display())]
    SourceNotFound(PathBuf),

    #[error("Malformed row at line {line}: {reason}")]
    MalformedInput { line: usize, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type alias for bin table operations.
pub type Result<T> = std::result::Result<T, BinTableError>;
