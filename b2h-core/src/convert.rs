use crate::cancel::{CancellationToken, ChunkObserver};
use crate::codec::rows::RowEncoder;
use crate::codec::template::{write_closing, write_preamble};
use crate::domain::{ConversionResult, ConversionStatus};
use crate::error::{ConvertError, Result};
use crate::naming::{HeaderNames, derive_output_path, resolve_identifier};
use crate::request::ConversionRequest;
use crate::util::counting::CountingWriter;
use std::fs::{self, File};
use std::io::{BufWriter, ErrorKind, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, warn};

/// Bytes per emitted literal.
const WORD_SIZE: u64 = 1;

/// Byte range and chunking derived from the request and the input size.
struct Plan {
    offset: u64,
    to_process: u64,
    chunk_size: u64,
    chunk_count: u64,
}

enum StreamEnd {
    Completed,
    Cancelled,
}

/// Converts `request.input` into a C header.
///
/// Validation problems are returned as errors before anything is written.
/// Once the output file exists the call always yields a `ConversionResult`:
/// a cancelled or failed stream leaves the partial header on disk and says so
/// in `status`.
pub fn convert(
    request: &ConversionRequest,
    cancel: &CancellationToken,
    observer: &mut dyn ChunkObserver,
) -> Result<ConversionResult> {
    let started = Instant::now();
    request.validate()?;

    let file_size = input_size(&request.input)?;
    let output = request
        .output
        .clone()
        .unwrap_or_else(|| derive_output_path(&request.input));
    check_output(&request.input, &output)?;

    let names = HeaderNames::new(resolve_identifier(request.name.as_deref(), &output));
    let plan = plan(request, file_size)?;

    info!("File size: {file_size} bytes");
    info!("Chunk size: {} bytes", plan.chunk_size);
    if plan.offset > 0 {
        info!("Start from position: {}", plan.offset);
    }
    if request.length > 0 {
        info!("Process maximum {} bytes", request.length);
    }

    let buf_len = usize::try_from(plan.chunk_size.min(plan.to_process).max(1))
        .map_err(|_| ConvertError::Usage("chunk size exceeds addressable memory".into()))?;

    let mut input = File::open(&request.input)?;
    input.seek(SeekFrom::Start(plan.offset))?;
    let mut input = input.take(plan.to_process);

    let mut out = CountingWriter::new(BufWriter::new(File::create(&output)?));
    debug!(output = %output.display(), identifier = %names.identifier, "writing header");

    let eol = request.eol.as_str();
    let mut encoder = RowEncoder::new(plan.to_process, request.row_width, eol, request.data_content);
    let mut bytes_read = 0u64;

    let streamed = (|| -> std::io::Result<StreamEnd> {
        write_preamble(&mut out, &names, eol, request.std_vector)?;

        if cancel.is_cancelled() {
            out.flush()?;
            return Ok(StreamEnd::Cancelled);
        }

        let mut buf = vec![0u8; buf_len];
        for index in 1..=plan.chunk_count {
            let n = fill_chunk(&mut input, &mut buf)?;
            if n == 0 {
                break;
            }
            bytes_read += n as u64;
            encoder.encode(&mut out, &buf[..n])?;
            observer.chunk_written(index, plan.chunk_count);

            if cancel.is_cancelled() {
                out.flush()?;
                return Ok(StreamEnd::Cancelled);
            }
        }

        if !encoder.is_done() {
            warn!(
                "Input ended after {} of {} bytes",
                encoder.written(),
                plan.to_process
            );
        }
        write_closing(&mut out, &names, eol, request.std_vector)?;
        out.flush()?;
        Ok(StreamEnd::Completed)
    })();

    let (status, failure) = match streamed {
        Ok(StreamEnd::Completed) => (ConversionStatus::Completed, None),
        Ok(StreamEnd::Cancelled) => (ConversionStatus::Cancelled, None),
        Err(e) => (ConversionStatus::Failed, Some(e)),
    };

    Ok(ConversionResult {
        bytes_read,
        bytes_written: encoder.written(),
        output_len: out.count(),
        output,
        identifier: names.identifier,
        elapsed: started.elapsed(),
        status,
        failure,
    })
}

fn input_size(input: &Path) -> Result<u64> {
    match fs::metadata(input) {
        Ok(md) if md.is_file() => Ok(md.len()),
        Ok(_) => Err(not_found("Input file", input)),
        Err(e) if e.kind() == ErrorKind::NotFound => Err(not_found("Input file", input)),
        Err(e) => Err(e.into()),
    }
}

fn check_output(input: &Path, output: &Path) -> Result<()> {
    if output.file_name().is_none() {
        return Err(ConvertError::InvalidState(format!(
            "output path \"{}\" does not name a file",
            output.display()
        )));
    }

    let dir = match output.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    if !dir.exists() {
        return Err(not_found("Output directory", &dir));
    }
    if !dir.is_dir() {
        return Err(ConvertError::InvalidState(format!(
            "output directory \"{}\" is a file",
            dir.display()
        )));
    }

    // Writing over the input (any path or link to it) would truncate it before it is read.
    if output.exists() && same_file::is_same_file(input, output)? {
        return Err(ConvertError::InvalidState(format!(
            "output \"{}\" is the input file",
            output.display()
        )));
    }
    Ok(())
}

fn plan(request: &ConversionRequest, file_size: u64) -> Result<Plan> {
    if request.offset > file_size {
        return Err(ConvertError::InvalidState(format!(
            "offset {} is beyond the end of the file ({file_size} bytes)",
            request.offset
        )));
    }
    let remaining = file_size - request.offset;
    let mut to_process = match request.length {
        0 => remaining,
        n => n.min(remaining),
    };

    let omit = trailing_partial_word(to_process, WORD_SIZE);
    if omit > 0 {
        warn!("Last {omit} byte(s) will be ignored as not forming a full data word");
        to_process -= omit;
    }

    Ok(Plan {
        offset: request.offset,
        to_process,
        chunk_size: request.chunk_size,
        chunk_count: to_process.div_ceil(request.chunk_size),
    })
}

fn trailing_partial_word(len: u64, word_size: u64) -> u64 {
    len % word_size
}

// Reads until `buf` is full or the source is exhausted.
fn fill_chunk<R: Read>(src: &mut R, buf: &mut [u8]) -> std::io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match src.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

fn not_found(what: &'static str, path: &Path) -> ConvertError {
    ConvertError::NotFound {
        what,
        path: path.to_path_buf(),
    }
}
