//! Port interfaces for the application layer
//!
//! Ports define the contract between the shell orchestration (use cases)
//! and infrastructure implementations. Verification and permission prompts
//! are simulated today; real implementations plug in here without touching
//! the state machine.

mod code_verifier;
mod permission_requester;
mod shell_event;
mod timer;

pub use code_verifier::{CodeVerifierPort, VerificationOutcome};
pub use permission_requester::{PermissionDecision, PermissionRequesterPort};
pub use shell_event::ShellEventPort;
pub use timer::{TimerExpiredSender, TimerPort};
