//! File logging. The terminal belongs to the renderer, so nothing goes to stderr.

use std::path::Path;

use anyhow::Result;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const LOG_FILE: &str = "pixel-rooms.log";

/// Install the global subscriber writing to `<log_dir>/pixel-rooms.log`.
///
/// The filter comes from `RUST_LOG` and defaults to `info`. Keep the returned
/// guard alive until exit so buffered lines are flushed.
pub fn setup_logging(log_dir: &Path) -> Result<WorkerGuard> {
    std::fs::create_dir_all(log_dir)?;

    let file_appender = tracing_appender::rolling::never(log_dir, LOG_FILE);
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = fmt::layer().with_writer(non_blocking_file).with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()?;

    tracing::info!(log_file = %log_dir.join(LOG_FILE).display(), "logging initialized");
    Ok(guard)
}
