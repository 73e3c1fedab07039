//! Shell event port adapters.

use pm_core::{ports::ShellEventPort, shell::ShellSnapshot};
use tracing::info;

/// Records every state change as a structured log line.
#[derive(Debug, Default, Clone)]
pub struct TracingShellEventPort;

#[async_trait::async_trait]
impl ShellEventPort for TracingShellEventPort {
    async fn emit_shell_state_changed(&self, snapshot: ShellSnapshot) {
        match serde_json::to_string(&snapshot) {
            Ok(json) => info!(screen = %snapshot.screen, snapshot = %json, "shell state changed"),
            Err(err) => info!(screen = %snapshot.screen, error = %err, "shell state changed"),
        }
    }
}
