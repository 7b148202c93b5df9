use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::CliError;

/// Console logging to stderr, filtered by `level` (a `RUST_LOG`-style directive).
///
/// stdout is reserved for command output so it can be piped.
pub fn init_logging(level: &str) -> Result<(), CliError> {
    let filter = EnvFilter::try_new(level).map_err(|e| CliError::Logging(e.to_string()))?;

    let stderr_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);
    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .try_init()
        .map_err(|e| CliError::Logging(e.to_string()))?;

    tracing::debug!(level, "logging initialized");
    Ok(())
}
