/// Centralized error mapping for commands.
pub fn map_err(err: impl std::fmt::Display) -> String {
    err.to_string()
}
