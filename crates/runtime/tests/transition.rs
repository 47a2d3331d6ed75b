mod common;

use std::sync::Arc;

use tokio::time::Duration;

use common::{DepartOutcome, MockGate, RecordingMessenger, ScriptedReservations, SingleGateDirectory};
use runtime::{BlockPos, Location, MoveEvent, PlayerId, ReservationError, TransitionCoordinator};

const PLAYER: PlayerId = PlayerId(3);

fn portal_blocks() -> Vec<BlockPos> {
    vec![BlockPos::new(0, 64, 0), BlockPos::new(0, 64, 1)]
}

/// From well outside the portal volume into its first block.
fn move_into() -> MoveEvent {
    MoveEvent::new(
        PLAYER,
        Location::new(5.5, 64.0, 5.5),
        Location::new(0.5, 64.0, 0.5),
    )
}

/// Between the two portal blocks; crosses a block boundary but stays inside.
fn move_within() -> MoveEvent {
    MoveEvent::new(
        PLAYER,
        Location::new(0.5, 64.0, 0.5),
        Location::new(0.5, 64.0, 1.5),
    )
}

/// From inside the portal volume back out.
fn move_out() -> MoveEvent {
    MoveEvent::new(
        PLAYER,
        Location::new(0.5, 64.0, 0.5),
        Location::new(5.5, 64.0, 5.5),
    )
}

struct Fixture {
    reservations: Arc<ScriptedReservations>,
    messenger: Arc<RecordingMessenger>,
    coordinator: TransitionCoordinator,
}

fn fixture(gate: MockGate, reservations: ScriptedReservations) -> Fixture {
    let gate = Arc::new(gate);
    let directory = Arc::new(SingleGateDirectory::with_portal(gate, portal_blocks()));
    let reservations = Arc::new(reservations);
    let messenger = Arc::new(RecordingMessenger::default());
    let coordinator =
        TransitionCoordinator::new(directory, reservations.clone(), messenger.clone());
    Fixture {
        reservations,
        messenger,
        coordinator,
    }
}

#[tokio::test(start_paused = true)]
async fn rapid_double_entry_departs_exactly_once() {
    let fx = fixture(
        MockGate::closed("hub"),
        ScriptedReservations::new(DepartOutcome::NoRelocation)
            .with_delay(Duration::from_millis(100)),
    );

    let mut first = move_into();
    let mut second = move_within();
    tokio::join!(
        fx.coordinator.handle_move(&mut first),
        fx.coordinator.handle_move(&mut second),
    );

    assert_eq!(fx.reservations.depart_count(), 1);
}

#[tokio::test(start_paused = true)]
async fn immediate_departure_rewrites_the_event_to_the_destination() {
    let destination = Location::new(-40.5, 70.0, 12.5);
    let fx = fixture(
        MockGate::closed("hub"),
        ScriptedReservations::new(DepartOutcome::Resolve(destination)),
    );

    let mut event = move_into();
    fx.coordinator.handle_move(&mut event).await;

    assert_eq!(event.from, destination);
    assert_eq!(event.to, destination);
    assert_eq!(fx.reservations.depart_count(), 1);
}

#[tokio::test(start_paused = true)]
async fn departure_without_destination_leaves_the_event_untouched() {
    let fx = fixture(
        MockGate::closed("hub"),
        ScriptedReservations::new(DepartOutcome::NoRelocation),
    );

    let mut event = move_into();
    let before = event;
    fx.coordinator.handle_move(&mut event).await;
    assert_eq!(event, before);
    assert_eq!(fx.reservations.depart_count(), 1);

    // the lock persists while the player stays in the portal volume
    let mut inside = move_within();
    fx.coordinator.handle_move(&mut inside).await;
    assert_eq!(fx.reservations.depart_count(), 1);

    // walking out and back in permits a fresh departure
    fx.coordinator.handle_move(&mut move_out()).await;
    fx.coordinator.handle_move(&mut move_into()).await;
    assert_eq!(fx.reservations.depart_count(), 2);
}

#[tokio::test(start_paused = true)]
async fn countdown_defers_departure_until_the_timer_fires() {
    let fx = fixture(
        MockGate::closed("hub").with_countdown(3),
        ScriptedReservations::new(DepartOutcome::NoRelocation),
    );

    fx.coordinator.handle_move(&mut move_into()).await;
    assert_eq!(fx.reservations.depart_count(), 0);
    assert_eq!(
        fx.messenger.notices(),
        vec!["teleporting through gate 'hub' in 3 seconds"]
    );

    // movement during the countdown is ignored and starts nothing new
    fx.coordinator.handle_move(&mut move_within()).await;
    assert_eq!(fx.messenger.notices().len(), 1);

    tokio::time::sleep(Duration::from_secs(4)).await;
    assert_eq!(fx.reservations.depart_count(), 1);

    // departed: still locked until the player leaves the volume
    fx.coordinator.handle_move(&mut move_within()).await;
    assert_eq!(fx.reservations.depart_count(), 1);
}

#[tokio::test(start_paused = true)]
async fn portal_exit_cancels_the_countdown_and_a_reentry_restarts_it() {
    let fx = fixture(
        MockGate::closed("hub").with_countdown(3),
        ScriptedReservations::new(DepartOutcome::NoRelocation),
    );

    fx.coordinator.handle_move(&mut move_into()).await;
    fx.coordinator.handle_move(&mut move_out()).await;

    tokio::time::sleep(Duration::from_secs(10)).await;
    assert_eq!(fx.reservations.depart_count(), 0);

    // a fresh entry runs a full new countdown
    fx.coordinator.handle_move(&mut move_into()).await;
    assert_eq!(fx.messenger.notices().len(), 2);
    tokio::time::sleep(Duration::from_secs(4)).await;
    assert_eq!(fx.reservations.depart_count(), 1);
}

#[tokio::test(start_paused = true)]
async fn depart_failure_unlocks_the_player_for_retry() {
    let fx = fixture(
        MockGate::closed("hub"),
        ScriptedReservations::new(DepartOutcome::Fail(
            ReservationError::DestinationUnreachable,
        )),
    );

    let mut event = move_into();
    let before = event;
    fx.coordinator.handle_move(&mut event).await;

    assert_eq!(event, before);
    assert_eq!(fx.reservations.depart_count(), 1);
    assert_eq!(
        fx.messenger.warnings(),
        vec!["destination gate is unreachable"]
    );

    // still inside the volume, the next boundary crossing may retry
    fx.coordinator.handle_move(&mut move_within()).await;
    assert_eq!(fx.reservations.depart_count(), 2);
}

#[tokio::test(start_paused = true)]
async fn movement_inside_one_block_is_ignored() {
    let fx = fixture(
        MockGate::closed("hub"),
        ScriptedReservations::new(DepartOutcome::NoRelocation),
    );

    let mut event = MoveEvent::new(
        PLAYER,
        Location::new(0.2, 64.0, 0.2),
        Location::new(0.8, 64.0, 0.8),
    );
    fx.coordinator.handle_move(&mut event).await;
    assert_eq!(fx.reservations.depart_count(), 0);
}
