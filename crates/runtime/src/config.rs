//! Runtime configuration shared by the event handlers.

/// Tunable parameters for interaction resolution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Prefix of the permission key checked before opening a gate; the
    /// gate's full name is appended.
    pub open_permission_prefix: String,

    /// Prefix of the permission key checked before closing a gate.
    pub close_permission_prefix: String,
}

impl RuntimeConfig {
    pub const DEFAULT_OPEN_PREFIX: &'static str = "gate.open.";
    pub const DEFAULT_CLOSE_PREFIX: &'static str = "gate.close.";

    pub fn new() -> Self {
        Self {
            open_permission_prefix: Self::DEFAULT_OPEN_PREFIX.to_string(),
            close_permission_prefix: Self::DEFAULT_CLOSE_PREFIX.to_string(),
        }
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self::new()
    }
}
