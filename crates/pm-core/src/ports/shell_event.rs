use crate::shell::ShellSnapshot;

/// Publishes shell state to the presentation layer.
#[async_trait::async_trait]
pub trait ShellEventPort: Send + Sync {
    async fn emit_shell_state_changed(&self, snapshot: ShellSnapshot);
}
