//! Simulated capability prompts: every request is granted immediately.

use std::collections::HashSet;
use std::sync::Mutex;

use pm_core::{
    permissions::Capability,
    ports::{PermissionDecision, PermissionRequesterPort},
};
use tracing::info;

#[derive(Debug, Default)]
pub struct SimulatedPermissionRequester {
    requested: Mutex<HashSet<Capability>>,
}

impl SimulatedPermissionRequester {
    pub fn new() -> Self {
        Self::default()
    }

    /// Capabilities that have been prompted for so far.
    #[cfg(test)]
    fn requested(&self) -> Vec<Capability> {
        let requested = match self.requested.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        Capability::ALL
            .into_iter()
            .filter(|c| requested.contains(c))
            .collect()
    }
}

#[async_trait::async_trait]
impl PermissionRequesterPort for SimulatedPermissionRequester {
    async fn request(&self, capability: Capability) -> anyhow::Result<PermissionDecision> {
        let first_prompt = self
            .requested
            .lock()
            .map_err(|_| anyhow::anyhow!("permission requester state poisoned"))?
            .insert(capability);
        info!(%capability, first_prompt, "simulated permission prompt granted");
        Ok(PermissionDecision::Granted)
    }
}
