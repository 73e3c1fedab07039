//! Promo Application Orchestration Layer
//!
//! This crate contains the shell use cases: it owns the single session
//! state, drives the core state machine and executes its side effects
//! through the ports.

pub mod deps;
pub mod usecases;

pub use deps::ShellDeps;
pub use usecases::shell::{OtpDigitOutcome, ShellOrchestrator, ShellOrchestratorError};
