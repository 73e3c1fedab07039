use std::path::PathBuf;

use anyhow::Context;
use pm_shell::bootstrap::{
    config::{resolve_config, CONFIG_PATH_ENV},
    run_app,
    tracing::init_tracing_subscriber,
};

/// Load configuration, initialise tracing and run the shell bridge on
/// stdin/stdout until input closes.
pub fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config_path = std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from);
    let (config, warning) = resolve_config(config_path.as_deref());

    init_tracing_subscriber(&config).context("Failed to initialize tracing")?;
    if let Some(warning) = warning {
        tracing::warn!("{warning}");
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to build tokio runtime")?;
    runtime.block_on(run_app(config))
}
