mod simulated;

pub use simulated::SimulatedCodeVerifier;
