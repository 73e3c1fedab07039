//! # Dependency Wiring
//!
//! Assembles the concrete adapters into [`ShellDeps`] and builds the
//! [`ShellRuntime`]. This is the only place that knows which adapter backs
//! which port.

use std::sync::Arc;

use pm_app::{ShellDeps, ShellOrchestrator};
use pm_core::{config::ShellConfig, shell::ShellSnapshot};
use pm_infra::{SimulatedCodeVerifier, SimulatedPermissionRequester, Timer};
use tokio::sync::{mpsc, Mutex};
use tracing::info;

use crate::adapters::ChannelShellEventPort;
use crate::bootstrap::runtime::ShellRuntime;

/// Wire the default adapters for `config`.
///
/// State changes are published on `shell_events`.
pub fn wire_dependencies(
    config: &ShellConfig,
    shell_events: mpsc::UnboundedSender<ShellSnapshot>,
) -> ShellDeps {
    ShellDeps {
        timer: Arc::new(Mutex::new(Timer::new())),
        code_verifier: Arc::new(SimulatedCodeVerifier::new(config.require_complete_code)),
        permission_requester: Arc::new(SimulatedPermissionRequester::new()),
        shell_events: Arc::new(ChannelShellEventPort::new(shell_events)),
    }
}

/// Build a runtime and return it with the receiving end of its state
/// change channel.
pub fn create_runtime(
    config: ShellConfig,
) -> (ShellRuntime, mpsc::UnboundedReceiver<ShellSnapshot>) {
    let (events_tx, events_rx) = mpsc::unbounded_channel();
    let deps = wire_dependencies(&config, events_tx);
    let orchestrator = Arc::new(ShellOrchestrator::new(&config, deps));
    info!(
        splash_delay_ms = config.splash_delay_ms,
        require_complete_code = config.require_complete_code,
        clear_login_value_on_method_switch = config.clear_login_value_on_method_switch,
        "shell runtime wired"
    );
    (ShellRuntime::new(orchestrator), events_rx)
}
