//! JSON-lines bridge between the shell and a presentation layer.
//!
//! Each input line is one [`ShellCommand`]; each output line is one
//! [`BridgeMessage`]. State changes that happen without a command (the
//! splash timer) are written as `state_changed` messages.

use anyhow::Context;
use pm_core::{config::ShellConfig, shell::ShellSnapshot};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::bootstrap::{create_runtime, ShellRuntime};
use crate::commands::{execute_command, BridgeMessage, CommandReply, ShellCommand};

/// Run the shell over stdin/stdout until stdin closes.
pub async fn run_app(config: ShellConfig) -> anyhow::Result<()> {
    let (runtime, shell_events) = create_runtime(config);
    let reader = BufReader::new(tokio::io::stdin());
    let writer = tokio::io::stdout();
    run_bridge(&runtime, shell_events, reader, writer).await
}

/// Drive `runtime` from `reader`, writing replies to `writer`.
///
/// Launches the shell first and unmounts it when `reader` reaches EOF.
///
/// # Errors
///
/// Returns error if reading input or writing output fails.
pub async fn run_bridge<R, W>(
    runtime: &ShellRuntime,
    mut shell_events: mpsc::UnboundedReceiver<ShellSnapshot>,
    reader: R,
    mut writer: W,
) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let orchestrator = runtime.shell_orchestrator();
    let listener = orchestrator.spawn_timer_listener().await;

    let mut forwarder = ChangeForwarder::default();
    let message = match orchestrator.launch().await {
        Ok(snapshot) => BridgeMessage::State {
            reply: CommandReply::from(snapshot),
        },
        Err(err) => BridgeMessage::Error {
            message: err.to_string(),
        },
    };
    forwarder.record(&message);
    write_message(&mut writer, &message).await?;
    info!("shell bridge started");

    let mut lines = reader.lines();
    loop {
        tokio::select! {
            biased;

            Some(snapshot) = shell_events.recv() => {
                if !forwarder.is_newer(&snapshot) {
                    continue;
                }
                debug!(
                    screen = %snapshot.screen,
                    revision = snapshot.revision,
                    "forwarding state change"
                );
                let message = BridgeMessage::StateChanged { snapshot };
                forwarder.record(&message);
                write_message(&mut writer, &message).await?;
            }
            line = lines.next_line() => {
                let Some(line) = line.context("Failed to read command line")? else {
                    break;
                };
                if line.trim().is_empty() {
                    continue;
                }
                let message = handle_line(runtime, &line).await;
                forwarder.record(&message);
                write_message(&mut writer, &message).await?;
            }
        }
    }

    info!("input closed, unmounting shell");
    if let Err(err) = orchestrator.unmount().await {
        warn!(error = %err, "failed to unmount shell");
    }
    if let Some(handle) = listener {
        handle.abort();
    }
    writer.flush().await.context("Failed to flush output")?;
    Ok(())
}

async fn handle_line(runtime: &ShellRuntime, line: &str) -> BridgeMessage {
    let command = match serde_json::from_str::<ShellCommand>(line) {
        Ok(command) => command,
        Err(err) => {
            warn!(error = %err, "rejected malformed command");
            return BridgeMessage::Error {
                message: format!("malformed command: {err}"),
            };
        }
    };
    match execute_command(runtime, command).await {
        Ok(reply) => BridgeMessage::State { reply },
        Err(message) => BridgeMessage::Error { message },
    }
}

/// Tracks the newest revision the client has been sent.
///
/// Queued changes at or below that revision are already reflected in an
/// earlier reply; anything newer, such as a splash timer firing while a
/// command was in flight, is forwarded.
#[derive(Debug, Default)]
struct ChangeForwarder {
    sent_revision: Option<u64>,
}

impl ChangeForwarder {
    fn is_newer(&self, snapshot: &ShellSnapshot) -> bool {
        self.sent_revision
            .map_or(true, |sent| snapshot.revision > sent)
    }

    fn record(&mut self, message: &BridgeMessage) {
        let revision = match message {
            BridgeMessage::State { reply } => reply.snapshot.revision,
            BridgeMessage::StateChanged { snapshot } => snapshot.revision,
            BridgeMessage::Error { .. } => return,
        };
        let sent = self.sent_revision.map_or(revision, |sent| sent.max(revision));
        self.sent_revision = Some(sent);
    }
}

async fn write_message<W>(writer: &mut W, message: &BridgeMessage) -> anyhow::Result<()>
where
    W: AsyncWrite + Unpin,
{
    let mut line = serde_json::to_vec(message).context("Failed to encode bridge message")?;
    line.push(b'\n');
    writer
        .write_all(&line)
        .await
        .context("Failed to write bridge message")?;
    writer.flush().await.context("Failed to flush output")?;
    Ok(())
}
