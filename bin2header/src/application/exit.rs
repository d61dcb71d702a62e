//! Process exit codes, errno-style.

use b2h_core::ConvertError;
use std::process::ExitCode;

pub const USAGE: u8 = 1;
pub const NOT_FOUND: u8 = 2; // ENOENT
pub const IO: u8 = 5; // EIO
pub const INVALID_STATE: u8 = 22; // EINVAL
pub const CANCELLED: u8 = 125; // ECANCELED

pub fn code_for(err: &ConvertError) -> u8 {
    match err {
        ConvertError::Usage(_) => USAGE,
        ConvertError::NotFound { .. } => NOT_FOUND,
        ConvertError::InvalidState(_) => INVALID_STATE,
        ConvertError::Cancelled { .. } => CANCELLED,
        ConvertError::Io(_) => IO,
    }
}

pub fn exit_for(err: &ConvertError) -> ExitCode {
    ExitCode::from(code_for(err))
}
