use color_eyre::Result;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global subscriber, filtered by `RUST_LOG` (default `info`).
///
/// Keep the returned guard alive until exit so buffered lines are flushed.
///
/// # Errors
///
/// Returns an error if the log directory cannot be created or a subscriber is
/// already installed.
pub fn setup_logger() -> Result<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    init_subscriber(filter)
}

#[cfg(not(feature = "bunyan"))]
fn init_subscriber(filter: EnvFilter) -> Result<WorkerGuard> {
    let (writer, guard) = tracing_appender::non_blocking(std::io::stderr());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(writer))
        .try_init()?;

    Ok(guard)
}

#[cfg(feature = "bunyan")]
fn init_subscriber(filter: EnvFilter) -> Result<WorkerGuard> {
    use std::{fs::create_dir_all, path::PathBuf};
    use tracing_appender::rolling;
    use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};

    let log_dir_path = PathBuf::from(".logs");
    create_dir_all(&log_dir_path)?;

    let logfile = if cfg!(debug_assertions) {
        rolling::daily(log_dir_path, "oembed-check.log")
    } else {
        rolling::never(log_dir_path, "oembed-check.log")
    };
    let (writer, guard) = tracing_appender::non_blocking(logfile);

    let formatter = BunyanFormattingLayer::new("oembed-check".into(), writer);

    tracing_subscriber::registry()
        .with(filter)
        .with(JsonStorageLayer)
        .with(formatter)
        .try_init()?;

    Ok(guard)
}
