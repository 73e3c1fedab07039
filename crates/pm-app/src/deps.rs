//! # Shell Dependencies
//!
//! Dependency grouping for [`ShellOrchestrator`](crate::ShellOrchestrator)
//! construction. Not a builder: every port is required, there are no
//! defaults and no hidden logic.

use std::sync::Arc;

use pm_core::ports::{CodeVerifierPort, PermissionRequesterPort, ShellEventPort, TimerPort};
use tokio::sync::Mutex;

pub struct ShellDeps {
    pub timer: Arc<Mutex<dyn TimerPort>>,
    pub code_verifier: Arc<dyn CodeVerifierPort>,
    pub permission_requester: Arc<dyn PermissionRequesterPort>,
    pub shell_events: Arc<dyn ShellEventPort>,
}
