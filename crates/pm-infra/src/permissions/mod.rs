mod simulated;

pub use simulated::SimulatedPermissionRequester;
