use tokio::sync::mpsc;

use crate::ids::TimerId;

/// Channel on which an expired timer reports its id.
pub type TimerExpiredSender = mpsc::UnboundedSender<TimerId>;

/// Cancellable one-shot timers.
#[async_trait::async_trait]
pub trait TimerPort: Send {
    /// Arms `timer_id`; after `delay_ms` the id is sent on `expired`.
    /// Re-arming an id replaces the previous timer.
    async fn start(
        &mut self,
        timer_id: &TimerId,
        delay_ms: u64,
        expired: TimerExpiredSender,
    ) -> anyhow::Result<()>;

    /// Cancels `timer_id`. Stopping an unknown or already fired id is a no-op.
    async fn stop(&mut self, timer_id: &TimerId) -> anyhow::Result<()>;
}
