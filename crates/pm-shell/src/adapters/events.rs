//! Forwards shell state changes to the host bridge.

use async_trait::async_trait;
use pm_core::{ports::ShellEventPort, shell::ShellSnapshot};
use pm_infra::TracingShellEventPort;
use tokio::sync::mpsc;
use tracing::warn;

/// Sends every state change over an unbounded channel.
///
/// The receiving end is owned by the bridge loop, which serializes each
/// snapshot to the presentation layer. Each change is also journaled to
/// the log.
pub struct ChannelShellEventPort {
    sender: mpsc::UnboundedSender<ShellSnapshot>,
    journal: TracingShellEventPort,
}

impl ChannelShellEventPort {
    pub fn new(sender: mpsc::UnboundedSender<ShellSnapshot>) -> Self {
        Self {
            sender,
            journal: TracingShellEventPort,
        }
    }
}

#[async_trait]
impl ShellEventPort for ChannelShellEventPort {
    async fn emit_shell_state_changed(&self, snapshot: ShellSnapshot) {
        self.journal.emit_shell_state_changed(snapshot.clone()).await;
        let screen = snapshot.screen;
        if self.sender.send(snapshot).is_err() {
            warn!(%screen, "shell event receiver dropped; state change not forwarded");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pm_core::navigation::Screen;
    use pm_core::shell::ShellState;

    #[tokio::test]
    async fn forwards_snapshot_to_receiver() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let port = ChannelShellEventPort::new(tx);

        port.emit_shell_state_changed(ShellSnapshot::from(&ShellState::new()))
            .await;

        let snapshot = rx.recv().await.unwrap();
        assert_eq!(snapshot.screen, Screen::Splash);
    }

    #[tokio::test]
    async fn dropped_receiver_does_not_panic() {
        let (tx, rx) = mpsc::unbounded_channel();
        drop(rx);
        let port = ChannelShellEventPort::new(tx);

        port.emit_shell_state_changed(ShellSnapshot::from(&ShellState::new()))
            .await;
    }
}
