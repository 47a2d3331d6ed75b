//! Stateless gate-structure logic shared across the runtime and offline tools.
//!
//! `gate-core` defines the canonical rules for recognizing gate structures
//! (block spec matching, rotation, orientation deltas) and for resolving
//! which actions a trigger interaction permits (the bitmask action table).
//! Everything here is pure and immutable after construction; the stateful
//! transition machinery lives in the `runtime` crate.
pub mod block;
pub mod error;
pub mod trigger;

pub use block::{
    BlockData, BlockSpec, DyeColor, Facing, LiquidFamily, MaterialKind, PhysicalBlock, SignLines,
    SpecDocument,
};
pub use error::SpecError;
pub use trigger::{ActionTable, GateAction, MaskBit, MaskPattern, TriggerConditions};
