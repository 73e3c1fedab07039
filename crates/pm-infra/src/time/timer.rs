use std::collections::HashMap;
use std::sync::Arc;

use pm_core::{
    ports::{TimerExpiredSender, TimerPort},
    TimerId,
};
use tokio::sync::Mutex;
use tokio::time::{sleep, Duration};
use tracing::{debug, warn};

/// tokio-backed one-shot timers keyed by [`TimerId`].
pub struct Timer {
    timers: Arc<Mutex<HashMap<TimerId, tokio::task::AbortHandle>>>,
}

impl Timer {
    pub fn new() -> Self {
        Self {
            timers: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    #[cfg(test)]
    async fn pending(&self) -> usize {
        self.timers.lock().await.len()
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl TimerPort for Timer {
    async fn start(
        &mut self,
        timer_id: &TimerId,
        delay_ms: u64,
        expired: TimerExpiredSender,
    ) -> anyhow::Result<()> {
        let timers = Arc::clone(&self.timers);
        let timer_id_clone = timer_id.clone();

        let mut timers_guard = self.timers.lock().await;
        if let Some(existing) = timers_guard.remove(timer_id) {
            existing.abort();
        }

        let handle = tokio::spawn(async move {
            sleep(Duration::from_millis(delay_ms)).await;
            let mut timers_guard = timers.lock().await;
            if timers_guard.remove(&timer_id_clone).is_none() {
                return;
            }
            drop(timers_guard);
            if expired.send(timer_id_clone.clone()).is_err() {
                warn!(timer_id = %timer_id_clone, "timer expired but receiver is gone");
            }
        });

        timers_guard.insert(timer_id.clone(), handle.abort_handle());
        debug!(timer_id = %timer_id, delay_ms, "timer started");
        Ok(())
    }

    async fn stop(&mut self, timer_id: &TimerId) -> anyhow::Result<()> {
        let mut timers_guard = self.timers.lock().await;
        if let Some(handle) = timers_guard.remove(timer_id) {
            handle.abort();
            debug!(timer_id = %timer_id, "timer stopped");
        }
        Ok(())
    }
}
