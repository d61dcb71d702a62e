pub mod exit;
pub mod handlers;

use crate::presentation::cli::Cli;
use b2h_core::{CancellationToken, ConvertError};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use std::process::ExitCode;
use tracing::{error, warn};

pub async fn run() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // help goes to stdout, parse errors to stderr with the usage line
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::from(exit::USAGE),
            };
        }
    };

    if cli.version {
        handlers::handle_version();
        return ExitCode::SUCCESS;
    }

    let Some(file) = cli.file.clone() else {
        error!("Missing <file> argument");
        eprintln!("\n{}", Cli::command().render_usage());
        return ExitCode::from(exit::USAGE);
    };
    let request = handlers::request_from_args(file, cli);

    let cancel = CancellationToken::new();
    if let Err(e) = listen_for_interrupt(cancel.clone()) {
        warn!("Ctrl+C handler unavailable: {e}");
    }

    match tokio::task::spawn_blocking(move || handlers::handle_convert(request, cancel)).await {
        Ok(Ok(_)) => ExitCode::SUCCESS,
        Ok(Err(e)) => {
            // cancellation was already reported by the handler
            if !matches!(e, ConvertError::Cancelled { .. }) {
                error!("{e}");
            }
            exit::exit_for(&e)
        }
        Err(join) => {
            warn!("conversion task aborted: {join}");
            ExitCode::from(exit::IO)
        }
    }
}

/// Installs the interrupt handler before returning, so a Ctrl+C that arrives
/// once the conversion has started always lands on `cancel`.
#[cfg(unix)]
fn listen_for_interrupt(cancel: CancellationToken) -> std::io::Result<()> {
    use tokio::signal::unix::{SignalKind, signal};

    let mut interrupts = signal(SignalKind::interrupt())?;
    tokio::spawn(async move {
        while interrupts.recv().await.is_some() {
            cancel.cancel();
        }
    });
    Ok(())
}

#[cfg(windows)]
fn listen_for_interrupt(cancel: CancellationToken) -> std::io::Result<()> {
    let mut interrupts = tokio::signal::windows::ctrl_c()?;
    tokio::spawn(async move {
        while interrupts.recv().await.is_some() {
            cancel.cancel();
        }
    });
    Ok(())
}
