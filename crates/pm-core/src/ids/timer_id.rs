use serde::{Deserialize, Serialize};

/// Identifies one armed timer.
///
/// A timer that fires with an id the shell no longer holds is stale and
/// must be ignored.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimerId(String);

impl_id!(TimerId);
