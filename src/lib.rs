//! Kinegrid is the grid-position and motion-transform algebra behind a
//! paired-hand pictograph notation: two tracked hands move between the 8
//! compass points of a grid, and every named grid position is a fixed pair
//! of hand locations.
//!
//! # Pipeline overview
//!
//! 1. **Author**: build a seed [`Sequence`] of [`Beat`]s with the builders in
//!    [`dsl`] (or deserialize a stored one).
//! 2. **Check**: [`is_legal_boundary`] tells a caller up front whether the
//!    seed's start/end positions can close under a given CAP configuration.
//! 3. **Generate**: [`generate_cap`] extends the seed by repeatedly applying
//!    the configured rotation, reflection, or hand-action swap until the
//!    pattern returns to its starting position.
//!
//! The whole crate is pure, synchronous computation: no I/O, no shared
//! state, and deterministic output for a given input.
#![forbid(unsafe_code)]

pub mod boundary;
pub mod cap;
pub mod dsl;
pub mod error;
pub mod grid;
pub mod model;
pub mod motion;
pub mod orient;
pub mod position;

pub use boundary::{is_legal_boundary, legal_boundaries};
pub use cap::{CapKind, SliceSize, generate_cap, generate_cap_with};
pub use dsl::{BeatBuilder, MotionBuilder, SequenceBuilder};
pub use error::{KinegridError, KinegridResult};
pub use grid::{Axis, Location, RotationKind};
pub use model::{Beat, Sequence};
pub use motion::{Hand, MotionKind, MotionRecord, Orientation, RotationDirection};
pub use orient::{OrientationRule, StandardOrientation};
pub use position::{GridPosition, PositionGroup};
