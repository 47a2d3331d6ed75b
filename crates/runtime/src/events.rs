//! Event and identity types delivered by the host.
//!
//! The host hands interaction and movement events to the handlers one at a
//! time; movement events are mutable so a resolved departure can rewrite the
//! player's location within the same event, with no intermediate frame at
//! the stale position.

use serde::{Deserialize, Serialize};

/// Stable identifier the host assigns to each player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u32);

/// Integer block coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl BlockPos {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }
}

/// A precise world position.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Location {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// The block this location falls inside.
    pub fn block(&self) -> BlockPos {
        BlockPos::new(
            self.x.floor() as i32,
            self.y.floor() as i32,
            self.z.floor() as i32,
        )
    }
}

/// A player interacted with a block.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct InteractEvent {
    pub player: PlayerId,
    pub block: BlockPos,
}

/// A player moved. `from`/`to` are rewritten in place when a departure
/// resolves to a destination.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MoveEvent {
    pub player: PlayerId,
    pub from: Location,
    pub to: Location,
}

impl MoveEvent {
    pub fn new(player: PlayerId, from: Location, to: Location) -> Self {
        Self { player, from, to }
    }

    /// Movement within a single block never drives portal logic.
    pub fn crossed_block_boundary(&self) -> bool {
        self.from.block() != self.to.block()
    }

    /// Rewrites both ends of the event, atomically relocating the player.
    pub fn relocate(&mut self, location: Location) {
        self.from = location;
        self.to = location;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_crossing_compares_block_coordinates() {
        let inside = MoveEvent::new(
            PlayerId(1),
            Location::new(0.2, 64.0, 0.2),
            Location::new(0.9, 64.0, 0.7),
        );
        assert!(!inside.crossed_block_boundary());

        let crossing = MoveEvent::new(
            PlayerId(1),
            Location::new(0.9, 64.0, 0.5),
            Location::new(1.1, 64.0, 0.5),
        );
        assert!(crossing.crossed_block_boundary());
    }

    #[test]
    fn negative_coordinates_floor_toward_negative_infinity() {
        assert_eq!(
            Location::new(-0.5, 0.0, -1.1).block(),
            BlockPos::new(-1, 0, -2)
        );
    }
}
