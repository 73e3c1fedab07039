use pm_core::shell::ShellState;
use tokio::sync::{Mutex, MutexGuard};

/// Session state owned by the orchestrator.
///
/// Acquire `dispatch_lock` before `state` when both are needed. Readers
/// only take `state` and always see a committed revision.
pub(crate) struct ShellContext {
    state: Mutex<ShellState>,
    dispatch_lock: Mutex<()>,
}

impl ShellContext {
    pub(crate) fn new(initial_state: ShellState) -> Self {
        Self {
            state: Mutex::new(initial_state),
            dispatch_lock: Mutex::new(()),
        }
    }

    pub(crate) async fn read(&self) -> ShellState {
        self.state.lock().await.clone()
    }

    pub(crate) async fn lock_dispatch(&self) -> MutexGuard<'_, ()> {
        self.dispatch_lock.lock().await
    }

    /// Store `next` under a new revision if it differs from the current
    /// state. Returns the committed state, or `None` when nothing changed.
    ///
    /// Only call while holding the dispatch lock.
    pub(crate) async fn commit(&self, mut next: ShellState) -> Option<ShellState> {
        let mut current = self.state.lock().await;
        next.revision = current.revision;
        if next == *current {
            return None;
        }
        next.revision = current.revision + 1;
        *current = next.clone();
        Some(next)
    }
}
