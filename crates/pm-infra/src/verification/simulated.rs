//! Simulated one-time-code verifier.
//!
//! No code is ever delivered, so there is nothing to compare against. By
//! default every code is accepted, including an empty one; with
//! `require_complete_code` a code with empty slots is rejected.

use pm_core::{
    otp::OtpCode,
    ports::{CodeVerifierPort, VerificationOutcome},
};
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct SimulatedCodeVerifier {
    require_complete_code: bool,
}

impl SimulatedCodeVerifier {
    pub fn new(require_complete_code: bool) -> Self {
        Self {
            require_complete_code,
        }
    }
}

#[async_trait::async_trait]
impl CodeVerifierPort for SimulatedCodeVerifier {
    async fn verify(&self, code: &OtpCode) -> anyhow::Result<VerificationOutcome> {
        let outcome = if self.require_complete_code && !code.is_complete() {
            VerificationOutcome::Rejected
        } else {
            VerificationOutcome::Accepted
        };
        debug!(
            digits = code.as_str().len(),
            require_complete = self.require_complete_code,
            ?outcome,
            "simulated code verification"
        );
        Ok(outcome)
    }
}
