//! Abstract block specifications and physical structure matching.

use core::fmt;

use arrayvec::ArrayVec;

use super::data::BlockData;
use super::facing::Facing;
use super::material::{DyeColor, MaterialKind};
use crate::error::SpecError;

/// Sign text attached to a spec, at most [`BlockSpec::MAX_LINES`] lines.
pub type SignLines = ArrayVec<String, 4>;

/// A live block as read from the world: kind, raw data byte, and sign text.
///
/// World access itself belongs to the host; the matcher only consumes this
/// snapshot view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PhysicalBlock {
    pub kind: MaterialKind,
    pub raw: u8,
    /// Present only for sign blocks, which always carry four lines.
    pub lines: Option<[String; 4]>,
}

impl PhysicalBlock {
    pub fn new(kind: MaterialKind, raw: u8) -> Self {
        Self {
            kind,
            raw,
            lines: None,
        }
    }

    pub fn with_lines(mut self, lines: [String; 4]) -> Self {
        self.lines = Some(lines);
        self
    }
}

/// Abstract description of a buildable/matchable block within a gate design.
///
/// Equality is structural over kind, data, physics flag, and text lines.
/// Matching against a [`PhysicalBlock`] is looser: liquid variants alias
/// within their family, directional data compares by facing alone, and sign
/// text is never compared.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlockSpec {
    pub kind: MaterialKind,
    pub data: BlockData,
    pub lines: Option<SignLines>,
    /// Whether building this block should trigger physics updates.
    pub physics: bool,
}

impl BlockSpec {
    /// Maximum sign lines a spec carries.
    pub const MAX_LINES: usize = 4;
    /// Maximum characters per sign line; longer lines are truncated.
    pub const MAX_LINE_CHARS: usize = 15;

    /// Spec for a bare kind with default data and no text.
    pub fn new(kind: MaterialKind) -> Self {
        Self {
            kind,
            data: kind.data_from_raw(0),
            lines: None,
            physics: false,
        }
    }

    /// Parses a kind name into a bare spec (`"OBSIDIAN"`, `"sign_post"`).
    pub fn from_name(name: &str) -> Result<Self, SpecError> {
        let kind = name
            .parse::<MaterialKind>()
            .map_err(|_| SpecError::UnknownMaterial {
                name: name.to_string(),
            })?;
        Ok(Self::new(kind))
    }

    /// Snapshot of a live block; built specs never re-trigger physics.
    pub fn from_physical(block: &PhysicalBlock) -> Self {
        Self {
            kind: block.kind,
            data: block.kind.data_from_raw(block.raw),
            lines: block
                .lines
                .as_ref()
                .map(|lines| lines.iter().cloned().collect()),
            physics: false,
        }
    }

    /// Copy of `src` rotated toward `to`, the mirrored-endpoint constructor.
    pub fn rotated_from(src: &BlockSpec, to: Facing) -> Self {
        src.rotate(to)
    }

    /// Decides whether a physical block satisfies this spec.
    pub fn matches(&self, block: &PhysicalBlock) -> bool {
        if block.kind != self.kind {
            // flowing and stationary liquid variants are interchangeable
            if let (Some(mine), Some(theirs)) =
                (self.kind.liquid_family(), block.kind.liquid_family())
            {
                return mine == theirs;
            }
            return false;
        }

        // Raw bytes can't be compared directly: signs have multiple raw
        // values representing the same facing direction.
        let other = block.kind.data_from_raw(block.raw);
        if let (Some(mine), Some(theirs)) = (self.data.facing, other.facing) {
            // Facing is the only aspect compared for directional data; kinds
            // with further orientation aspects are not distinguished here.
            return mine == theirs;
        }
        // Sign lines are deliberately not part of the match.
        self.data.raw == other.raw
    }

    /// Pure rotation toward `to`.
    ///
    /// Specs without a facing, specs facing the vertical axis, and vertical
    /// targets all come back unchanged. The operation is idempotent:
    /// rotating twice toward the same facing equals rotating once.
    #[must_use]
    pub fn rotate(&self, to: Facing) -> BlockSpec {
        let mut rotated = self.clone();
        if let Some(current) = rotated.data.facing
            && !current.is_vertical()
            && !to.is_vertical()
        {
            rotated.set_facing(to);
        }
        rotated
    }

    /// How a counterpart block must be rotated relative to this spec.
    ///
    /// Only meaningful for the screen-like blocks gates use as triggers.
    /// Returns `None` on kind mismatch, when either side lacks a facing, or
    /// when either facing is vertical (yaw rotation is undefined there).
    pub fn orientation_delta(&self, block: &PhysicalBlock) -> Option<Facing> {
        if block.kind != self.kind {
            return None;
        }
        let mine = self.data.facing?;
        let theirs = block.kind.data_from_raw(block.raw).facing?;
        let from_yaw = mine.yaw()?;
        let to_yaw = theirs.yaw()?;
        Some(Facing::from_yaw(to_yaw - from_yaw + 180.0))
    }

    /// Points the spec at `facing`, keeping the raw byte consistent.
    pub fn set_facing(&mut self, facing: Facing) {
        self.data.raw = self.kind.encode_facing(self.data.raw, facing);
        self.data = self.kind.data_from_raw(self.data.raw);
    }

    /// Recolors the spec, keeping the raw byte consistent.
    pub fn set_color(&mut self, color: DyeColor) {
        self.data.raw = self.kind.encode_color(self.data.raw, color);
        self.data = self.kind.data_from_raw(self.data.raw);
    }

    /// Opens or closes the spec, keeping the raw byte consistent.
    pub fn set_open(&mut self, open: bool) {
        self.data.raw = self.kind.encode_open(self.data.raw, open);
        self.data = self.kind.data_from_raw(self.data.raw);
    }
}

impl fmt::Display for BlockSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BlockSpec[{},{},{}", self.kind, self.data.raw, self.physics)?;
        if let Some(lines) = &self.lines {
            write!(f, ",{} lines", lines.len())?;
        }
        write!(f, "]")
    }
}
