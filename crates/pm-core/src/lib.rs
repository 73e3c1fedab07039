//! # pm-core
//!
//! Core domain models and screen orchestration logic for Promo.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

pub mod config;
pub mod ids;
pub mod login;
pub mod navigation;
pub mod otp;
pub mod permissions;
pub mod ports;
pub mod profile;
pub mod shell;

// Re-export commonly used types at the crate root
pub use config::ShellConfig;
pub use ids::TimerId;
pub use login::{LoginCredential, LoginMethod};
pub use navigation::{Screen, Tab, TabController};
pub use otp::{FocusAdvance, OtpBuffer, OtpCode, OtpEntry};
pub use permissions::{Capability, PermissionSet};
pub use profile::{Gender, ProfileDraft, ProfileField};
pub use shell::{ShellAction, ShellEvent, ShellSnapshot, ShellState, ShellStateMachine};
