#![allow(dead_code)]
//! Shared fixtures standing in for the external gate collaborators.

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::time::Duration;

use runtime::{
    BlockPos, GateDirectory, GateError, GateHandle, Location, Messenger, PermissionOracle,
    PlayerId, ReservationError, ReservationFactory,
};

/// Scripted gate with call counters.
pub struct MockGate {
    name: String,
    open: AtomicBool,
    valid_destination: bool,
    countdown: u32,
    pub open_calls: AtomicU32,
    pub close_calls: AtomicU32,
}

impl MockGate {
    pub fn closed(name: &str) -> Self {
        Self {
            name: name.to_string(),
            open: AtomicBool::new(false),
            valid_destination: true,
            countdown: 0,
            open_calls: AtomicU32::new(0),
            close_calls: AtomicU32::new(0),
        }
    }

    pub fn opened(name: &str) -> Self {
        let gate = Self::closed(name);
        gate.open.store(true, Ordering::SeqCst);
        gate
    }

    pub fn without_destination(mut self) -> Self {
        self.valid_destination = false;
        self
    }

    pub fn with_countdown(mut self, seconds: u32) -> Self {
        self.countdown = seconds;
        self
    }
}

impl GateHandle for MockGate {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn full_name(&self) -> String {
        format!("world.{}", self.name)
    }

    fn is_open(&self) -> bool {
        self.open.load(Ordering::SeqCst)
    }

    fn open(&self) -> Result<(), GateError> {
        self.open_calls.fetch_add(1, Ordering::SeqCst);
        if !self.valid_destination {
            return Err(GateError::NoDestination);
        }
        if self.open.swap(true, Ordering::SeqCst) {
            return Err(GateError::AlreadyOpen);
        }
        Ok(())
    }

    fn close(&self) {
        self.close_calls.fetch_add(1, Ordering::SeqCst);
        self.open.store(false, Ordering::SeqCst);
    }

    fn has_valid_destination(&self) -> bool {
        self.valid_destination
    }

    fn countdown_seconds(&self) -> u32 {
        self.countdown
    }
}

/// Registry fixture exposing one gate at a fixed trigger block and portal
/// volume.
pub struct SingleGateDirectory {
    gate: Arc<MockGate>,
    trigger: Option<BlockPos>,
    portal: Vec<BlockPos>,
    pub selections: Mutex<Vec<(PlayerId, String)>>,
}

impl SingleGateDirectory {
    pub fn with_trigger(gate: Arc<MockGate>, trigger: BlockPos) -> Self {
        Self {
            gate,
            trigger: Some(trigger),
            portal: Vec::new(),
            selections: Mutex::new(Vec::new()),
        }
    }

    pub fn with_portal(gate: Arc<MockGate>, portal: Vec<BlockPos>) -> Self {
        Self {
            gate,
            trigger: None,
            portal,
            selections: Mutex::new(Vec::new()),
        }
    }
}

impl GateDirectory for SingleGateDirectory {
    fn gate_for_trigger(&self, block: BlockPos) -> Option<Arc<dyn GateHandle>> {
        (self.trigger == Some(block)).then(|| self.gate.clone() as Arc<dyn GateHandle>)
    }

    fn gate_for_portal(&self, location: &Location) -> Option<Arc<dyn GateHandle>> {
        self.portal
            .contains(&location.block())
            .then(|| self.gate.clone() as Arc<dyn GateHandle>)
    }

    fn select_gate(&self, player: PlayerId, gate: &Arc<dyn GateHandle>) {
        self.selections
            .lock()
            .unwrap()
            .push((player, gate.full_name()));
    }
}

/// Grants exactly the listed permission keys.
pub struct Permissions(pub Vec<String>);

impl Permissions {
    pub fn granting(keys: &[&str]) -> Self {
        Self(keys.iter().map(|k| k.to_string()).collect())
    }
}

impl PermissionOracle for Permissions {
    fn has(&self, _player: PlayerId, permission: &str) -> bool {
        self.0.iter().any(|key| key == permission)
    }
}

/// Captures everything sent to the player.
#[derive(Default)]
pub struct RecordingMessenger {
    pub notices: Mutex<Vec<String>>,
    pub warnings: Mutex<Vec<String>>,
}

impl RecordingMessenger {
    pub fn notices(&self) -> Vec<String> {
        self.notices.lock().unwrap().clone()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.warnings.lock().unwrap().clone()
    }
}

impl Messenger for RecordingMessenger {
    fn notify(&self, _player: PlayerId, message: &str) {
        self.notices.lock().unwrap().push(message.to_string());
    }

    fn warn(&self, _player: PlayerId, message: &str) {
        self.warnings.lock().unwrap().push(message.to_string());
    }
}

/// What a scripted departure should do.
pub enum DepartOutcome {
    Resolve(Location),
    NoRelocation,
    Fail(ReservationError),
}

/// Reservation subsystem fixture counting depart attempts.
pub struct ScriptedReservations {
    outcome: DepartOutcome,
    delay: Option<Duration>,
    pub departs: AtomicU32,
}

impl ScriptedReservations {
    pub fn new(outcome: DepartOutcome) -> Self {
        Self {
            outcome,
            delay: None,
            departs: AtomicU32::new(0),
        }
    }

    /// Makes each departure take this long, to exercise overlap.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn depart_count(&self) -> u32 {
        self.departs.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ReservationFactory for ScriptedReservations {
    async fn depart(
        &self,
        _player: PlayerId,
        _gate: Arc<dyn GateHandle>,
    ) -> Result<Option<Location>, ReservationError> {
        self.departs.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        match &self.outcome {
            DepartOutcome::Resolve(location) => Ok(Some(*location)),
            DepartOutcome::NoRelocation => Ok(None),
            DepartOutcome::Fail(err) => Err(err.clone()),
        }
    }
}
