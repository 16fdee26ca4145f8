//! File-based logging initialization

use std::fs;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::config::{DebugConfig, DEFAULT_LOG_LEVEL};

/// Initialize the logging system
///
/// Sets up file-based logging with:
/// - Daily log rotation in `SWAP_LOG_DIR`
/// - Plain text or JSON lines (`SWAP_LOG_JSON=1`)
/// - Non-blocking writes
/// - Panic hook integration for crash logging
///
/// Returns the writer guard; logs stop flushing once it is dropped. `None`
/// when the log directory cannot be created or a subscriber is already set.
pub fn init() -> Option<WorkerGuard> {
    init_with(&DebugConfig::from_env())
}

pub fn init_with(config: &DebugConfig) -> Option<WorkerGuard> {
    if let Err(e) = fs::create_dir_all(&config.log_dir) {
        eprintln!("Warning: Failed to create log directory: {}", e);
        return None;
    }

    let file_appender = tracing_appender::rolling::daily(&config.log_dir, &config.log_file_prefix);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_new(&config.log_level)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));

    let (text_layer, json_layer) = if config.json {
        let layer = fmt::layer()
            .json()
            .with_writer(non_blocking)
            .with_target(true)
            .with_current_span(true);
        (None, Some(layer))
    } else {
        let layer = fmt::layer()
            .with_writer(non_blocking)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false);
        (Some(layer), None)
    };

    let installed = tracing_subscriber::registry()
        .with(env_filter)
        .with(text_layer)
        .with(json_layer)
        .try_init();

    if let Err(e) = installed {
        eprintln!("Warning: Logging already initialized: {}", e);
        return None;
    }

    tracing::info!(
        log_file = %config.log_path().display(),
        log_level = %config.log_level,
        json = config.json,
        "Logging initialized"
    );

    setup_panic_hook();
    Some(guard)
}

/// Log panics with location and message before the default handler runs
fn setup_panic_hook() {
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let location = panic_info
            .location()
            .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
            .unwrap_or_else(|| "unknown location".to_string());

        let message = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "unknown panic message".to_string()
        };

        tracing::error!(
            location = %location,
            message = %message,
            "Application panic"
        );

        default_panic(panic_info);
    }));
}
