use serde::{Deserialize, Serialize};

use crate::permissions::Capability;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PermissionDecision {
    Granted,
    Denied,
}

/// Asks the platform for one capability.
#[async_trait::async_trait]
pub trait PermissionRequesterPort: Send + Sync {
    async fn request(&self, capability: Capability) -> anyhow::Result<PermissionDecision>;
}
