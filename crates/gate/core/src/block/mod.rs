//! Abstract block specifications: matching, rotation, and persistence.
//!
//! A gate design is a set of [`BlockSpec`]s; recognizing a built gate means
//! matching each spec against the [`PhysicalBlock`] the world reports at the
//! corresponding position. All of this is pure data logic; reading the world
//! and storing designs belong to the host.
pub mod codec;
pub mod data;
pub mod facing;
pub mod material;
pub mod spec;

pub use codec::SpecDocument;
pub use data::BlockData;
pub use facing::Facing;
pub use material::{DyeColor, LiquidFamily, MaterialKind};
pub use spec::{BlockSpec, PhysicalBlock, SignLines};
