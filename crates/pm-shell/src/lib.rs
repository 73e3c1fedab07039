//! Host adapter layer for Promo.
//!
//! Wires the shell orchestrator to its adapters and exposes it to an
//! external presentation layer through a command set and a JSON-lines
//! bridge.

pub mod adapters;
pub mod bootstrap;
pub mod commands;
