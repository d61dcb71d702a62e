use crate::error::{ConvertError, Result};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConversionStatus {
    Completed,
    Cancelled,
    Failed,
}

/// Outcome of a conversion that got as far as creating the output file.
#[derive(Debug)]
pub struct ConversionResult {
    pub bytes_read: u64,
    /// Data bytes emitted as hex literals.
    pub bytes_written: u64,
    /// Size of the generated header text.
    pub output_len: u64,
    pub output: PathBuf,
    pub identifier: String,
    pub elapsed: Duration,
    pub status: ConversionStatus,
    /// Set when `status` is `Failed`.
    pub failure: Option<std::io::Error>,
}

impl ConversionResult {
    /// `Ok` for a completed conversion, otherwise the matching error.
    pub fn into_outcome(self) -> Result<ConversionResult> {
        match self.status {
            ConversionStatus::Completed => Ok(self),
            ConversionStatus::Cancelled => Err(ConvertError::Cancelled {
                bytes_written: self.bytes_written,
            }),
            ConversionStatus::Failed => Err(ConvertError::Io(
                self.failure
                    .unwrap_or_else(|| std::io::Error::other("conversion failed")),
            )),
        }
    }
}
