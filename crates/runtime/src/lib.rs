//! Event-driven gate interaction and transition runtime.
//!
//! This crate wires the pure logic from `gate-core` to a live host: it
//! consumes block-interaction and movement events, resolves them against the
//! gate registry and permission backend, and coordinates the lock/countdown/
//! depart protocol that keeps each player's transitions race-free.
//!
//! Modules are organized by responsibility:
//! - [`events`] defines the event and identity types the host delivers
//! - [`providers`] holds the capability traits for external collaborators
//! - [`interaction`] resolves trigger interactions through the action table
//! - [`transition`] coordinates movement-triggered teleports
pub mod config;
pub mod error;
pub mod events;
pub mod interaction;
pub mod providers;
pub mod transition;

pub use config::RuntimeConfig;
pub use error::{GateError, ReservationError};
pub use events::{BlockPos, InteractEvent, Location, MoveEvent, PlayerId};
pub use interaction::InteractionResolver;
pub use providers::{GateDirectory, GateHandle, Messenger, PermissionOracle, ReservationFactory};
pub use transition::TransitionCoordinator;
