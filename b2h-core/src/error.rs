use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Usage error: {0}")]
    Usage(String),

    #[error("{what} \"{}\" does not exist", .path.display())]
    NotFound { what: &'static str, path: PathBuf },

    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Cancelled after {bytes_written} bytes")]
    Cancelled { bytes_written: u64 },
}

// Convenient crate-wide result type
pub type Result<T> = std::result::Result<T, ConvertError>;
