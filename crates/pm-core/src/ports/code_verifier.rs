use serde::{Deserialize, Serialize};

use crate::otp::OtpCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VerificationOutcome {
    Accepted,
    Rejected,
}

/// Checks a one-time code entered by the user.
#[async_trait::async_trait]
pub trait CodeVerifierPort: Send + Sync {
    async fn verify(&self, code: &OtpCode) -> anyhow::Result<VerificationOutcome>;
}
