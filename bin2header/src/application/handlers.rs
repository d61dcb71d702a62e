use b2h_core::util::duration::format_duration;
use b2h_core::{
    CancellationToken, ChunkObserver, ConversionRequest, ConversionResult, ConversionStatus,
    Result, convert,
};
use std::path::PathBuf;
use tracing::{debug, info, warn};

use crate::presentation::cli::Cli;

const APP_NAME: &str = "Binary to Header";

/// Logs chunk progress while a conversion runs.
struct ChunkProgress;

impl ChunkObserver for ChunkProgress {
    fn chunk_written(&mut self, index: u64, count: u64) {
        info!("Writing chunk {index} out of {count} (Ctrl+C to cancel)");
    }
}

pub fn handle_version() {
    println!("{APP_NAME} version {}", env!("CARGO_PKG_VERSION"));
    println!("Copyright (C) bin2header contributors, released under the MIT license");
}

pub fn request_from_args(file: PathBuf, cli: Cli) -> ConversionRequest {
    ConversionRequest {
        output: cli.output,
        name: cli.hname,
        chunk_size: cli.chunk_size,
        length: cli.length,
        offset: cli.offset,
        eol: cli.eol.into(),
        std_vector: cli.stdvector,
        row_width: cli.nb_data,
        data_content: cli.datacontent,
        ..ConversionRequest::new(file)
    }
}

pub fn handle_convert(
    request: ConversionRequest,
    cancel: CancellationToken,
) -> Result<ConversionResult> {
    let result = convert(&request, &cancel, &mut ChunkProgress)?;

    match result.status {
        ConversionStatus::Completed => {
            debug!("Read {} bytes as array {}", result.bytes_read, result.identifier);
            info!("Wrote {} bytes", result.bytes_written);
            info!("Header size: {} bytes", result.output_len);
            info!("Exported to: {}", result.output.display());
            info!("Elapsed: {}", format_duration(result.elapsed));
        }
        ConversionStatus::Cancelled => {
            warn!(
                "Cancelled after {} bytes; incomplete header left at {}",
                result.bytes_written,
                result.output.display()
            );
        }
        ConversionStatus::Failed => {
            warn!(
                "Conversion stopped after {} bytes; incomplete header left at {}",
                result.bytes_written,
                result.output.display()
            );
        }
    }
    result.into_outcome()
}
