//! Shell use cases.

pub mod shell;
