use b2h_core::LineEnding;
use b2h_core::request::{DEFAULT_CHUNK_SIZE, DEFAULT_ROW_WIDTH};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "bin2header",
    about = "Convert a binary file into a C/C++ header",
    long_about = None,
    disable_version_flag = true
)]
pub struct Cli {
    /// File to convert
    #[arg(value_name = "FILE", value_parser = parse_input_path)]
    pub file: Option<PathBuf>,

    /// Print version information & exit
    #[arg(short = 'v', long)]
    pub version: bool,

    /// Output file path (default: <FILE>.h next to the input)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Header & array identifier (default: derived from the output file name)
    #[arg(short = 'n', long = "hname", value_name = "NAME")]
    pub hname: Option<String>,

    /// Read buffer size in bytes
    #[arg(
        short = 's',
        long = "chunksize",
        value_name = "BYTES",
        default_value_t = DEFAULT_CHUNK_SIZE,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub chunk_size: u64,

    /// Number of hex values per line
    #[arg(
        short = 'd',
        long = "nbdata",
        value_name = "N",
        default_value_t = DEFAULT_ROW_WIDTH,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub nb_data: u64,

    /// Number of bytes to process (0 = all)
    #[arg(short = 'l', long, value_name = "BYTES", default_value_t = 0)]
    pub length: u64,

    /// Position at which to start reading
    #[arg(long, value_name = "BYTES", default_value_t = 0)]
    pub offset: u64,

    /// Additionally store data in std::vector for C++
    #[arg(long)]
    pub stdvector: bool,

    /// End of line style
    #[arg(long, value_enum, default_value_t = EolArg::Lf, ignore_case = true)]
    pub eol: EolArg,

    /// Show printable data content as a comment on each line
    #[arg(long)]
    pub datacontent: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum EolArg {
    Cr,
    Lf,
    Crlf,
}

impl From<EolArg> for LineEnding {
    fn from(eol: EolArg) -> Self {
        match eol {
            EolArg::Cr => LineEnding::Cr,
            EolArg::Lf => LineEnding::Lf,
            EolArg::Crlf => LineEnding::CrLf,
        }
    }
}

fn parse_input_path(s: &str) -> Result<PathBuf, String> {
    if s.trim().is_empty() || s == "-" {
        return Err(format!("Malformed argument: \"{s}\""));
    }
    Ok(PathBuf::from(s))
}
