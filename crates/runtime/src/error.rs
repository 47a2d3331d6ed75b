//! Error types surfaced by the external gate collaborators.
//!
//! Every collaborator failure is caught at the interaction/movement event
//! boundary and translated into an actor-visible message; none propagate
//! past the handlers, so one malformed event can never affect other players
//! or gates.

use thiserror::Error;

/// A gate-state precondition failed while acting on a gate.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GateError {
    #[error("this gate has no valid destination")]
    NoDestination,

    #[error("this gate is already open")]
    AlreadyOpen,
}

/// A departure attempt was refused by the reservation subsystem.
///
/// Whatever the subtype, the transition machinery returns the player to
/// idle so a failed attempt never locks them out of retrying.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ReservationError {
    #[error("destination gate is unreachable")]
    DestinationUnreachable,

    #[error("destination gate is at capacity")]
    CapacityExceeded,

    #[error("departure rejected: {0}")]
    Rejected(String),
}
