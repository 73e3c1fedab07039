//! Tracing configuration for Promo
//!
//! Structured logging with spans. Human-readable output goes to stderr,
//! because stdout carries the JSON bridge; a non-blocking file layer is
//! added when the log directory can be created.

use std::{
    fs, io,
    path::{Path, PathBuf},
    sync::OnceLock,
};

use pm_core::config::ShellConfig;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{fmt, fmt::writer::BoxMakeWriter, prelude::*, registry};

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

const LOG_FILE_NAME: &str = "promo.log";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

fn is_development() -> bool {
    cfg!(debug_assertions)
}

/// Build the default filter directives for tracing
///
/// - **Development**: debug level for the app crates
/// - **Production**: info level everywhere
fn build_filter_directives(is_dev: bool) -> Vec<String> {
    let crate_level = if is_dev { "debug" } else { "info" };
    vec![
        if is_dev { "debug" } else { "info" }.to_string(),
        "tokio=warn".to_string(),
        "runtime=warn".to_string(),
        format!("pm_app={crate_level}"),
        format!("pm_infra={crate_level}"),
        format!("pm_shell={crate_level}"),
    ]
}

/// Directory the log file is written to.
///
/// An empty configured directory means the platform data directory.
pub fn resolve_log_dir(configured: &Path) -> anyhow::Result<PathBuf> {
    if !configured.as_os_str().is_empty() {
        return Ok(configured.to_path_buf());
    }
    let base = dirs::data_local_dir()
        .ok_or_else(|| anyhow::anyhow!("no local data directory on this platform"))?;
    Ok(base.join("promo").join("logs"))
}

/// Initialize the tracing subscriber.
///
/// Respects `RUST_LOG`; otherwise uses [`build_filter_directives`]. Call
/// once, before the runtime starts.
///
/// # Errors
///
/// Returns `Err` if a global subscriber is already registered.
pub fn init_tracing_subscriber(config: &ShellConfig) -> anyhow::Result<()> {
    let filter_directives = build_filter_directives(is_development());
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter_directives.join(",")));

    let stderr_writer: BoxMakeWriter = BoxMakeWriter::new(io::stderr);
    let file_writer = match build_file_writer(&config.log_directory) {
        Ok(writer) => Some(writer),
        Err(err) => {
            eprintln!("Failed to initialize file logging, falling back to stderr: {err}");
            None
        }
    };

    let stderr_layer = fmt::layer()
        .with_timer(fmt::time::ChronoUtc::new(TIMESTAMP_FORMAT.to_string()))
        .with_level(true)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .with_ansi(cfg!(not(test)))
        .with_writer(stderr_writer);

    let file_layer = file_writer.map(|writer| {
        fmt::layer()
            .with_timer(fmt::time::ChronoUtc::new(TIMESTAMP_FORMAT.to_string()))
            .with_level(true)
            .with_file(true)
            .with_line_number(true)
            .with_target(true)
            .with_ansi(false)
            .with_writer(writer)
    });

    registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()?;

    Ok(())
}

fn build_file_writer(configured: &Path) -> anyhow::Result<NonBlocking> {
    let logs_dir = resolve_log_dir(configured)?;
    fs::create_dir_all(&logs_dir)?;

    let file_appender = tracing_appender::rolling::never(&logs_dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    LOG_GUARD
        .set(guard)
        .map_err(|_| anyhow::anyhow!("Tracing log guard already initialized"))?;

    Ok(non_blocking)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_filter_directives() {
        let dev_directives = build_filter_directives(true);
        assert!(dev_directives.contains(&"debug".to_string()));
        assert!(dev_directives.contains(&"pm_app=debug".to_string()));
        assert!(dev_directives.contains(&"pm_shell=debug".to_string()));

        let prod_directives = build_filter_directives(false);
        assert!(prod_directives.contains(&"info".to_string()));
        assert!(prod_directives.contains(&"pm_infra=info".to_string()));
        assert!(!prod_directives.contains(&"debug".to_string()));
    }

    #[test]
    fn test_resolve_log_dir_prefers_configured_directory() {
        let dir = resolve_log_dir(Path::new("/var/log/promo")).unwrap();
        assert_eq!(dir, PathBuf::from("/var/log/promo"));
    }

    #[test]
    fn test_resolve_log_dir_defaults_under_data_dir() {
        if let Ok(dir) = resolve_log_dir(Path::new("")) {
            assert!(dir.ends_with("promo/logs"));
        }
    }
}
