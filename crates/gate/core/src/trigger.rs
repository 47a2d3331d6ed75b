//! Bitmask-keyed resolution of gate trigger interactions.
//!
//! Four independent facts about a candidate gate and actor fold into a 4-bit
//! key; a fixed table maps each key to the actions the interaction may
//! perform. The table is built once from wildcard patterns and is immutable
//! afterwards, so it can be shared freely across threads.

/// The facts an interaction is judged on.
///
/// Bit layout of the derived key, low bit first:
/// 0 - is the gate currently open?
/// 1 - does the actor hold the open permission?
/// 2 - does the actor hold the close permission?
/// 3 - is the interacted block a trigger?
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TriggerConditions {
    pub gate_open: bool,
    pub can_open: bool,
    pub can_close: bool,
    pub is_trigger: bool,
}

impl TriggerConditions {
    /// Folds the four facts into the table key.
    pub const fn key(self) -> u8 {
        self.gate_open as u8
            | (self.can_open as u8) << 1
            | (self.can_close as u8) << 2
            | (self.is_trigger as u8) << 3
    }
}

/// An action a resolved interaction performs, in order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateAction {
    Open,
    Close,
}

/// One bit position of a wildcard pattern.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MaskBit {
    Zero,
    One,
    Any,
}

impl MaskBit {
    fn concrete(self) -> &'static [u8] {
        match self {
            MaskBit::Zero => &[0],
            MaskBit::One => &[1],
            MaskBit::Any => &[0, 1],
        }
    }
}

/// A 4-bit wildcard pattern over [`TriggerConditions`] keys.
///
/// Position `i` constrains bit `i` of the key; `Any` positions expand to
/// both values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MaskPattern {
    bits: [MaskBit; 4],
}

impl MaskPattern {
    pub const fn new(bits: [MaskBit; 4]) -> Self {
        Self { bits }
    }

    /// Enumerates every concrete key the pattern covers.
    pub fn expand(&self) -> Vec<u8> {
        let mut keys = vec![0u8];
        for (position, bit) in self.bits.iter().enumerate() {
            let mut expanded = Vec::with_capacity(keys.len() * 2);
            for &value in bit.concrete() {
                for &key in &keys {
                    expanded.push(key | (value << position));
                }
            }
            keys = expanded;
        }
        keys
    }
}

/// Immutable key-to-actions table; absent keys mean "not permitted".
pub struct ActionTable {
    entries: [Option<Vec<GateAction>>; 16],
}

impl ActionTable {
    /// The standard rules:
    /// - gate closed, open permission held, trigger block => open
    /// - gate open, close permission held, trigger block => close
    pub fn standard() -> Self {
        let mut table = Self {
            entries: std::array::from_fn(|_| None),
        };
        table.install(
            MaskPattern::new([MaskBit::Zero, MaskBit::One, MaskBit::Any, MaskBit::One]),
            &[GateAction::Open],
        );
        table.install(
            MaskPattern::new([MaskBit::One, MaskBit::Any, MaskBit::One, MaskBit::One]),
            &[GateAction::Close],
        );
        table
    }

    fn install(&mut self, pattern: MaskPattern, actions: &[GateAction]) {
        for key in pattern.expand() {
            self.entries[key as usize] = Some(actions.to_vec());
        }
    }

    /// Looks up the permitted actions, if any, for the given conditions.
    pub fn resolve(&self, conditions: TriggerConditions) -> Option<&[GateAction]> {
        self.entries[conditions.key() as usize].as_deref()
    }
}

impl Default for ActionTable {
    fn default() -> Self {
        Self::standard()
    }
}
