use crate::error::{ConvertError, Result};
use std::path::PathBuf;

/// Read buffer size used when the caller does not pick one (1 MiB).
pub const DEFAULT_CHUNK_SIZE: u64 = 1024 * 1024;
/// Hex values per output row.
pub const DEFAULT_ROW_WIDTH: u64 = 12;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LineEnding {
    #[default]
    Lf,
    Cr,
    CrLf,
}

impl LineEnding {
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::Cr => "\r",
            LineEnding::CrLf => "\r\n",
        }
    }
}

/// One invocation's worth of configuration. Built once, consumed by `convert`.
#[derive(Clone, Debug)]
pub struct ConversionRequest {
    pub input: PathBuf,
    /// Derived from `input` when absent.
    pub output: Option<PathBuf>,
    /// Array identifier; derived from the output file name when absent.
    pub name: Option<String>,
    pub chunk_size: u64,
    /// Bytes to process, 0 means everything after `offset`.
    pub length: u64,
    /// Position at which reading starts.
    pub offset: u64,
    pub eol: LineEnding,
    /// Also declare a `std::vector<char>` alias for C++ consumers.
    pub std_vector: bool,
    pub row_width: u64,
    /// Annotate each row with a comment showing its printable bytes.
    pub data_content: bool,
}

impl ConversionRequest {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: None,
            name: None,
            chunk_size: DEFAULT_CHUNK_SIZE,
            length: 0,
            offset: 0,
            eol: LineEnding::default(),
            std_vector: false,
            row_width: DEFAULT_ROW_WIDTH,
            data_content: false,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.input.as_os_str().is_empty() {
            return Err(ConvertError::Usage("missing input file".into()));
        }
        if self.chunk_size == 0 {
            return Err(ConvertError::Usage("chunk size must be at least 1 byte".into()));
        }
        if self.row_width == 0 {
            return Err(ConvertError::Usage(
                "number of values per row must be at least 1".into(),
            ));
        }
        if let Some(out) = &self.output {
            if out.as_os_str().is_empty() {
                return Err(ConvertError::Usage("output path is empty".into()));
            }
        }
        Ok(())
    }
}
