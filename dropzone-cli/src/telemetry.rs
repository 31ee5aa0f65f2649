//! Log subscriber installation.

use tracing_subscriber::EnvFilter;

use crate::CliError;

/// Filter applied when `RUST_LOG` is unset or unparsable.
const DEFAULT_FILTER: &str = "warn";

/// Install a stderr formatter filtered by `RUST_LOG`.
///
/// Records emitted through the `log` facade by the library crates are
/// forwarded into the same subscriber.
///
/// # Errors
/// Returns [`CliError::Logging`] when a global subscriber is already set.
pub fn init() -> Result<(), CliError> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(CliError::Logging)
}
