//! Capability record decoded from a block's raw data byte.

use super::facing::Facing;
use super::material::DyeColor;

/// Orientation, color, and open state decoded from a raw data byte.
///
/// Capabilities are modeled as optional fields: a populated `facing` means
/// the kind is directional, a populated `open` means it is openable, and so
/// on. The raw byte is kept alongside so kinds without a decoded capability
/// still compare and persist exactly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlockData {
    /// The byte exactly as stored in the world or definition file.
    pub raw: u8,
    pub facing: Option<Facing>,
    pub color: Option<DyeColor>,
    pub open: Option<bool>,
}

impl BlockData {
    /// Data with no decoded capabilities, just the raw byte.
    pub const fn plain(raw: u8) -> Self {
        Self {
            raw,
            facing: None,
            color: None,
            open: None,
        }
    }
}

impl Default for BlockData {
    fn default() -> Self {
        Self::plain(0)
    }
}
