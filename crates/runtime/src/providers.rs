//! Capability traits for the external gate collaborators.
//!
//! The gate registry, permission backend, reservation subsystem, and player
//! messaging channel all live outside this crate. Handlers are written
//! against these narrow interfaces so hosts can plug in their own
//! implementations, and tests can substitute fixtures.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::{GateError, ReservationError};
use crate::events::{BlockPos, Location, PlayerId};

/// A recognized gate as the registry exposes it to the handlers.
pub trait GateHandle: Send + Sync {
    /// Short display name.
    fn name(&self) -> String;

    /// Fully qualified name, unique across worlds; permission keys append it.
    fn full_name(&self) -> String;

    fn is_open(&self) -> bool;

    /// Opens the gate. Fails when it has no valid configured destination or
    /// is already open; gate state is unchanged on failure.
    fn open(&self) -> Result<(), GateError>;

    /// Closes the gate. Closing an already-closed gate is idempotent.
    fn close(&self);

    fn has_valid_destination(&self) -> bool;

    /// Pre-transition delay; zero means transitions depart immediately.
    fn countdown_seconds(&self) -> u32;
}

/// Lookup of gates by the world geometry the registry maintains.
pub trait GateDirectory: Send + Sync {
    /// The gate whose trigger block sits at `block`, if any.
    fn gate_for_trigger(&self, block: BlockPos) -> Option<Arc<dyn GateHandle>>;

    /// The gate whose portal volume contains `location`, if any.
    fn gate_for_portal(&self, location: &Location) -> Option<Arc<dyn GateHandle>>;

    /// Records the gate as the player's selected gate for downstream
    /// commands and UI.
    fn select_gate(&self, player: PlayerId, gate: &Arc<dyn GateHandle>);
}

/// Permission checks against the host's permission backend.
pub trait PermissionOracle: Send + Sync {
    fn has(&self, player: PlayerId, permission: &str) -> bool;
}

/// One-shot departure attempts against the reservation subsystem.
#[async_trait]
pub trait ReservationFactory: Send + Sync {
    /// Attempts to depart `player` through `gate`.
    ///
    /// On success the reservation subsystem has already relocated the
    /// player; the resolved destination is reported back so an in-flight
    /// movement event can be rewritten to it. `None` means the gate
    /// resolved to no relocation (an intentional no-op destination).
    async fn depart(
        &self,
        player: PlayerId,
        gate: Arc<dyn GateHandle>,
    ) -> Result<Option<Location>, ReservationError>;
}

/// Player-visible messaging and diagnostics channel.
pub trait Messenger: Send + Sync {
    /// Plain feedback to the acting player.
    fn notify(&self, player: PlayerId, message: &str);

    /// Failure feedback; also mirrored to the host's log.
    fn warn(&self, player: PlayerId, message: &str);
}
