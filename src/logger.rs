use std::result::Result;

use snafu::ResultExt as _;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::error::{ApplicationError, InitializeLoggerSnafu};

/// Console output stays pretty; the rolling file gets JSON lines. The
/// returned guard must be held for the lifetime of the process so buffered
/// log lines are flushed on shutdown.
pub fn init(config: &Config) -> Result<WorkerGuard, ApplicationError> {
    let (file_layer, guard) = {
        let file_appender = tracing_appender::rolling::daily(&config.log_dir, "ballot.log");
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        let layer = layer().with_ansi(false).json().with_writer(non_blocking);

        (layer, guard)
    };

    let console_layer = layer().pretty().with_writer(std::io::stdout);

    let subscriber = registry()
        .with(EnvFilter::from_default_env())
        .with(console_layer)
        .with(file_layer);
    tracing::subscriber::set_global_default(subscriber).context(InitializeLoggerSnafu)?;

    Ok(guard)
}
