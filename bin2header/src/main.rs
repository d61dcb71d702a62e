mod application;
mod logging;

mod presentation {
    pub mod cli;
}

use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    logging::init();
    application::run().await
}
