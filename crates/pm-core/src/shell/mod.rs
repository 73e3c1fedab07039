//! Shell domain module.
//!
//! This module defines the onboarding shell state, the pure transition
//! function and the read-only snapshot handed to the presentation layer.

mod snapshot;
mod state;
pub mod state_machine;

pub use snapshot::{OtpSnapshot, PermissionSnapshot, ShellSnapshot};
pub use state::ShellState;
pub use state_machine::{ShellAction, ShellEvent, ShellPolicy, ShellStateMachine};
