//! Shell use cases.
//!
//! This module exposes the shell orchestrator.

mod context;
pub mod orchestrator;

pub use orchestrator::{OtpDigitOutcome, ShellOrchestrator, ShellOrchestratorError};
