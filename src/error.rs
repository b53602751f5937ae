use crate::{
    cap::{CapKind, SliceSize},
    grid::Location,
    position::GridPosition,
};

pub type KinegridResult<T> = Result<T, KinegridError>;

#[derive(thiserror::Error, Debug)]
pub enum KinegridError {
    #[error("unknown position: '{0}'")]
    UnknownPosition(String),

    #[error("unmapped location pair: ({0}, {1})")]
    UnmappedLocationPair(Location, Location),

    #[error("no single-step rotation connects {start} to {end}")]
    AmbiguousRotation { start: Location, end: Location },

    #[error("illegal {kind} {slice} boundary: {start} -> {end}")]
    InvalidCapBoundary {
        kind: CapKind,
        slice: SliceSize,
        start: GridPosition,
        end: GridPosition,
    },

    #[error("validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl KinegridError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
