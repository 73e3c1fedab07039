//! Infrastructure adapters for the Promo shell.

pub mod events;
pub mod permissions;
pub mod time;
pub mod verification;

pub use events::TracingShellEventPort;
pub use permissions::SimulatedPermissionRequester;
pub use time::Timer;
pub use verification::SimulatedCodeVerifier;
