//! Compass and axis facings for directional block data.
//!
//! Yaw follows the world convention where south is 0 degrees and angles grow
//! clockwise (west 90, north 180, east 270). Vertical facings have no yaw;
//! every yaw-based operation excludes them.

/// The direction a directional block is oriented toward.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum Facing {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
    Up,
    Down,
}

impl Facing {
    /// The eight compass facings in clockwise yaw order starting at south.
    pub const COMPASS: [Facing; 8] = [
        Facing::South,
        Facing::SouthWest,
        Facing::West,
        Facing::NorthWest,
        Facing::North,
        Facing::NorthEast,
        Facing::East,
        Facing::SouthEast,
    ];

    /// Returns true for the up/down axis, which has no yaw.
    pub const fn is_vertical(self) -> bool {
        matches!(self, Facing::Up | Facing::Down)
    }

    /// Yaw in degrees for compass facings; `None` for `Up`/`Down`.
    pub fn yaw(self) -> Option<f32> {
        let index = Self::COMPASS.iter().position(|&f| f == self)?;
        Some(index as f32 * 45.0)
    }

    /// Maps a yaw back to the nearest compass facing.
    ///
    /// The yaw is normalized into `[0, 360)` first, so negative angles and
    /// angles past a full turn are fine.
    pub fn from_yaw(yaw: f32) -> Facing {
        let yaw = yaw.rem_euclid(360.0);
        let step = ((yaw / 45.0).round() as usize) % 8;
        Self::COMPASS[step]
    }

    /// Rounds a compass facing to the nearest cardinal; `None` for vertical.
    pub(crate) fn nearest_cardinal(self) -> Option<Facing> {
        let yaw = self.yaw()?;
        Some(Facing::from_yaw((yaw / 90.0).round() * 90.0))
    }
}
