#![forbid(unsafe_code)]

pub mod cancel;
pub mod convert;
pub mod domain;
pub mod error;
pub mod naming;
pub mod request;

pub mod codec;

pub mod util {
    pub mod counting;
    pub mod duration;
}

// Re-exports: stable API surface
pub use cancel::{CancellationToken, ChunkObserver};
pub use convert::convert;
pub use domain::{ConversionResult, ConversionStatus};
pub use error::{ConvertError, Result};
pub use request::{ConversionRequest, LineEnding};
