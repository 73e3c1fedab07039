//! Navigation domain module.
//!
//! Screens of the onboarding flow and the tab bar shown on the main screen.

mod screen;
mod tabs;

pub use screen::Screen;
pub use tabs::{Tab, TabController};
