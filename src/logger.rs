use tracing::level_filters::LevelFilter;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, Layer};

use crate::constants::{LOGS_DIR, LOG_FILE_NAME};

/// Console output is colored by level; the file copy is plain text.
/// Keep the returned guard alive or buffered file lines are lost.
pub fn init_default_logger() -> WorkerGuard {
    let file_appender = tracing_appender::rolling::daily(LOGS_DIR, LOG_FILE_NAME);
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let console_layer = fmt::layer()
        .with_target(false)
        .with_filter(LevelFilter::INFO);

    let file_layer = fmt::layer()
        .with_writer(file_writer)
        .with_ansi(false)
        .with_target(false)
        .with_filter(LevelFilter::INFO);

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();

    guard
}
