pub mod config;
pub mod run;
pub mod runtime;
pub mod tracing;
pub mod wiring;

pub use config::load_config;
pub use run::{run_app, run_bridge};
pub use runtime::ShellRuntime;
pub use wiring::create_runtime;
