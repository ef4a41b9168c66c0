//! Logging Infrastructure
//!
//! Structured logging setup for development and production.
//! - Console output (pretty or JSON)
//! - Optional daily rotating application logs
//! - Optional daily rotating security logs (target `security`)

use std::fs;
use std::path::Path;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, prelude::*};

/// Initialize the logger with console output only
pub fn init_logger(level: &str) -> anyhow::Result<()> {
    init_logger_with_file(level, false, None)
}

/// Initialize the logging system
///
/// `RUST_LOG` takes precedence over `level` when set.
///
/// ```no_run
/// // Development setup (console only)
/// loyalty_server::init_logger_with_file("debug", false, None)?;
///
/// // Production setup (console + files)
/// loyalty_server::init_logger_with_file("info", true, Some("./logs"))?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn init_logger_with_file(
    level: &str,
    json_format: bool,
    log_dir: Option<&str>,
) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let console_layer = if json_format {
        fmt::layer()
            .json()
            .with_target(true)
            .with_current_span(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .boxed()
    } else {
        fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_file(false)
            .with_line_number(false)
            .boxed()
    };

    let file_layers = match log_dir {
        Some(dir) => Some(file_layers(Path::new(dir))?),
        None => None,
    };

    tracing_subscriber::registry()
        .with(file_layers)
        .with(console_layer)
        .with(env_filter)
        .try_init()?;

    Ok(())
}

type BoxedLayer = Box<dyn Layer<tracing_subscriber::Registry> + Send + Sync>;

/// Application + security file layers under `log_dir/{app,security}`
fn file_layers(log_dir: &Path) -> anyhow::Result<Vec<BoxedLayer>> {
    let app_log_dir = log_dir.join("app");
    let security_log_dir = log_dir.join("security");
    fs::create_dir_all(&app_log_dir)?;
    fs::create_dir_all(&security_log_dir)?;

    // Only log to app file if target is NOT "security"
    let app_log = RollingFileAppender::new(Rotation::DAILY, app_log_dir, "app");
    let app_layer = fmt::layer()
        .json()
        .with_target(true)
        .with_current_span(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .with_writer(std::sync::Mutex::new(app_log))
        .with_filter(tracing_subscriber::filter::filter_fn(|meta| {
            meta.target() != "security"
        }))
        .boxed();

    let security_log = RollingFileAppender::new(Rotation::DAILY, security_log_dir, "security");
    let security_layer = fmt::layer()
        .json()
        .with_target(true)
        .with_current_span(true)
        .with_writer(std::sync::Mutex::new(security_log))
        .with_filter(tracing_subscriber::filter::filter_fn(|meta| {
            meta.target() == "security"
        }))
        .boxed();

    Ok(vec![app_layer, security_layer])
}
