//! Logging Infrastructure
//!
//! The terminal belongs to the UI, so nothing is written to stdout. Events go to:
//! - the in-app log panel (`tui-logger`)
//! - optionally, daily rotating files under `LOG_DIR/app`

use std::fs;
use std::path::{Path, PathBuf};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Create the application log directory below `log_dir`
pub fn prepare_log_dir(log_dir: &Path) -> std::io::Result<PathBuf> {
    let app_log_dir = log_dir.join("app");
    fs::create_dir_all(&app_log_dir)?;
    Ok(app_log_dir)
}

/// Map a filter string such as `"debug"` or `"info,storefront=trace"` to the
/// default level of the log panel
pub fn log_level_filter(level: &str) -> log::LevelFilter {
    level
        .split(',')
        .find(|directive| !directive.contains('='))
        .and_then(|directive| directive.trim().parse().ok())
        .unwrap_or(log::LevelFilter::Info)
}

/// Initialize the logging system
///
/// # Arguments
/// * `level` - Default filter when `RUST_LOG` is unset (e.g., "info", "debug")
/// * `log_dir` - Optional directory for file logging
pub fn init_logger(level: &str, log_dir: Option<&str>) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let file_layer = match log_dir {
        Some(dir) => {
            let app_log_dir = prepare_log_dir(Path::new(dir))?;
            let app_log = RollingFileAppender::new(Rotation::DAILY, app_log_dir, "storefront");
            Some(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true)
                    .with_ansi(false)
                    .with_writer(std::sync::Mutex::new(app_log))
                    .with_filter(EnvFilter::new(level)),
            )
        }
        None => None,
    };

    // Also installs the `log` -> `tracing` bridge
    tracing_subscriber::registry()
        .with(tui_logger::tracing_subscriber_layer())
        .with(file_layer)
        .with(env_filter)
        .try_init()?;

    // Level shown by the log panel
    tui_logger::set_default_level(log_level_filter(level));

    Ok(())
}
