//! Validation errors raised while decoding block definitions.

/// A malformed block definition: unknown material or a capability value
/// outside its enum domain. Surfaced to whoever is loading the definition;
/// nothing partial is applied.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SpecError {
    #[error("unknown material '{name}'")]
    UnknownMaterial { name: String },

    #[error("invalid facing '{value}'")]
    InvalidFacing { value: String },

    #[error("invalid color '{value}'")]
    InvalidColor { value: String },

    #[error("invalid open value '{value}'")]
    InvalidOpen { value: String },
}
