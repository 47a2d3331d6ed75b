//! Movement-triggered teleport coordination.
//!
//! Each player is either idle, counting down toward a departure, or locked
//! behind an in-flight (or just-completed) departure. The coordinator owns
//! that state and guarantees at most one reservation attempt per player is
//! ever in flight, even when a countdown callback races a later movement
//! event for the same player.
//!
//! The countdown is the only suspension point: it is a scheduled timer task,
//! never a blocking wait, so the event thread stays free while delays run.
//! Leaving a portal volume is the sole cancellation path and clears both
//! lock and countdown unconditionally.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::Duration;

use tracing::debug;

use crate::events::{MoveEvent, PlayerId};
use crate::providers::{GateDirectory, GateHandle, Messenger, ReservationFactory};

/// Per-player progress. Absence from the map means idle.
enum TransitionState {
    /// A departure is in flight, or the player departed and has not yet
    /// walked out of a portal volume.
    Locked,
    /// A pre-transition delay is running; aborting the timer cancels it.
    CountingDown { timer: JoinHandle<()> },
}

/// The per-player state map, shared with pending countdown tasks.
type PlayerStates = Arc<Mutex<HashMap<PlayerId, TransitionState>>>;

/// Coordinates movement events, countdowns, and departures per player.
///
/// State is read-modify-written under a single short-lived map lock that is
/// never held across an await, so movement handling for one player never
/// blocks transitions for another beyond that critical section.
pub struct TransitionCoordinator {
    gates: Arc<dyn GateDirectory>,
    reservations: Arc<dyn ReservationFactory>,
    messenger: Arc<dyn Messenger>,
    players: PlayerStates,
}

impl TransitionCoordinator {
    pub fn new(
        gates: Arc<dyn GateDirectory>,
        reservations: Arc<dyn ReservationFactory>,
        messenger: Arc<dyn Messenger>,
    ) -> Self {
        Self {
            gates,
            reservations,
            messenger,
            players: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Handles one movement event.
    ///
    /// When an immediate departure resolves to a destination, the event is
    /// rewritten in place so the player relocates within this very event.
    /// Reservation failures are reported to the actor and return the player
    /// to idle; nothing propagates past this handler.
    pub async fn handle_move(&self, event: &mut MoveEvent) {
        if !event.crossed_block_boundary() {
            return;
        }
        let player = event.player;

        let Some(gate) = self.gates.gate_for_portal(&event.to) else {
            // outside every portal volume: drop any lock or pending countdown
            self.clear(player).await;
            return;
        };

        let delay = gate.countdown_seconds();
        {
            let mut players = self.players.lock().await;
            if players.contains_key(&player) {
                // already locked or counting down; re-entrant triggers are ignored
                return;
            }
            if delay > 0 {
                let states = Arc::clone(&self.players);
                let reservations = Arc::clone(&self.reservations);
                let messenger = Arc::clone(&self.messenger);
                let timer_gate = Arc::clone(&gate);
                let timer = tokio::spawn(async move {
                    tokio::time::sleep(Duration::from_secs(u64::from(delay))).await;
                    countdown_fired(states, reservations, messenger, player, timer_gate).await;
                });
                players.insert(player, TransitionState::CountingDown { timer });
                drop(players);
                debug!(?player, gate = %gate.full_name(), delay, "countdown started");
                self.messenger.notify(
                    player,
                    &format!(
                        "teleporting through gate '{}' in {} seconds",
                        gate.name(),
                        delay
                    ),
                );
                return;
            }
            // Lock before the first await so a second movement event arriving
            // mid-departure sees the player as busy.
            players.insert(player, TransitionState::Locked);
        }

        match self.reservations.depart(player, Arc::clone(&gate)).await {
            Ok(Some(destination)) => {
                debug!(?player, gate = %gate.full_name(), "departed, relocating within event");
                event.relocate(destination);
            }
            Ok(None) => {
                debug!(?player, gate = %gate.full_name(), "departed with no relocation");
            }
            Err(err) => {
                // A failed attempt must never leave the player locked out of
                // retrying.
                self.players.lock().await.remove(&player);
                self.messenger.warn(player, &err.to_string());
            }
        }
    }

    /// Unconditionally clears the player's lock and any pending countdown.
    async fn clear(&self, player: PlayerId) {
        if let Some(state) = self.players.lock().await.remove(&player) {
            if let TransitionState::CountingDown { timer } = state {
                timer.abort();
                debug!(?player, "countdown cancelled on portal exit");
            }
        }
    }
}

/// Countdown timer callback: promote to locked and attempt departure.
async fn countdown_fired(
    states: PlayerStates,
    reservations: Arc<dyn ReservationFactory>,
    messenger: Arc<dyn Messenger>,
    player: PlayerId,
    gate: Arc<dyn GateHandle>,
) {
    {
        let mut players = states.lock().await;
        match players.get(&player) {
            Some(TransitionState::CountingDown { .. }) => {
                // Replacing the entry drops our own timer handle, so from
                // here on a portal exit can clear the lock but can no longer
                // abort the departure in flight.
                players.insert(player, TransitionState::Locked);
            }
            // cleared by a portal exit, or already locked; stand down
            _ => return,
        }
    }

    debug!(?player, gate = %gate.full_name(), "countdown fired");
    if let Err(err) = reservations.depart(player, Arc::clone(&gate)).await {
        states.lock().await.remove(&player);
        messenger.warn(player, &err.to_string());
    }
    // On success the reservation subsystem has relocated the player; the
    // lock stays until they walk out of a portal volume.
}
