//! # Shell Runtime
//!
//! Holds the wired orchestrator. Commands reach use cases through it.

use std::sync::Arc;

use pm_app::ShellOrchestrator;

/// Shell runtime with dependencies.
pub struct ShellRuntime {
    orchestrator: Arc<ShellOrchestrator>,
}

impl ShellRuntime {
    pub fn new(orchestrator: Arc<ShellOrchestrator>) -> Self {
        Self { orchestrator }
    }

    pub fn shell_orchestrator(&self) -> Arc<ShellOrchestrator> {
        Arc::clone(&self.orchestrator)
    }
}
