//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use dropzone_cli::{CliError, run, telemetry};

#[expect(
    clippy::print_stderr,
    reason = "fatal errors are reported to the terminal before exiting"
)]
fn main() {
    if let Err(err) = telemetry::init() {
        eprintln!("dropzone: {err}");
    }
    match run() {
        Ok(()) => {}
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("dropzone: {err}");
            std::process::exit(1);
        }
    }
}
