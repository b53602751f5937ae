use crate::{
    error::{KinegridError, KinegridResult},
    grid::Location,
};

/// How a hand's prop moves during one beat.
///
/// Pro and anti are spins whose rotation sense matches or opposes the hand
/// path; dash is a straight translation through the grid center; static holds
/// position; float is a spin-less carry along the hand path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MotionKind {
    Static,
    Pro,
    Anti,
    Dash,
    Float,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum RotationDirection {
    #[serde(rename = "cw")]
    Clockwise,
    #[serde(rename = "ccw")]
    CounterClockwise,
    #[serde(rename = "no_rot")]
    NoRotation,
}

impl RotationDirection {
    pub fn reversed(self) -> Self {
        match self {
            Self::Clockwise => Self::CounterClockwise,
            Self::CounterClockwise => Self::Clockwise,
            Self::NoRotation => Self::NoRotation,
        }
    }
}

/// Prop orientation relative to the grid center.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    In,
    Out,
    Clock,
    Counter,
}

impl Orientation {
    /// Flip between the paired orientations: in/out, clock/counter.
    pub fn switched(self) -> Self {
        match self {
            Self::In => Self::Out,
            Self::Out => Self::In,
            Self::Clock => Self::Counter,
            Self::Counter => Self::Clock,
        }
    }

    /// Advance one step around the in -> clock -> out -> counter cycle.
    /// Clockwise steps forward, counter-clockwise backward; no-rotation
    /// motions step forward.
    pub fn quarter_step(self, direction: RotationDirection) -> Self {
        let forward = match self {
            Self::In => Self::Clock,
            Self::Clock => Self::Out,
            Self::Out => Self::Counter,
            Self::Counter => Self::In,
        };
        match direction {
            RotationDirection::Clockwise | RotationDirection::NoRotation => forward,
            RotationDirection::CounterClockwise => match self {
                Self::In => Self::Counter,
                Self::Counter => Self::Out,
                Self::Out => Self::Clock,
                Self::Clock => Self::In,
            },
        }
    }
}

/// The immutable identity tag of a tracked hand. Identity never changes,
/// no matter which action the hand ends up performing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Hand {
    Blue,
    Red,
}

impl Hand {
    pub fn other(self) -> Self {
        match self {
            Self::Blue => Self::Red,
            Self::Red => Self::Blue,
        }
    }
}

/// One hand's movement descriptor within a beat.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MotionRecord {
    pub hand: Hand,
    pub kind: MotionKind,
    pub rotation: RotationDirection,
    pub start_loc: Location,
    pub end_loc: Location,
    pub turns: f64, // half-turn granularity
    pub start_ori: Orientation,
    pub end_ori: Orientation,
}

impl MotionRecord {
    /// A zero-turn hold at `loc`.
    pub fn static_at(hand: Hand, loc: Location, ori: Orientation) -> Self {
        Self {
            hand,
            kind: MotionKind::Static,
            rotation: RotationDirection::NoRotation,
            start_loc: loc,
            end_loc: loc,
            turns: 0.0,
            start_ori: ori,
            end_ori: ori,
        }
    }

    pub fn validate(&self) -> KinegridResult<()> {
        if !self.turns.is_finite() || self.turns < 0.0 {
            return Err(KinegridError::validation(format!(
                "{:?} motion turns must be finite and >= 0, got {}",
                self.hand, self.turns
            )));
        }
        if (self.turns * 2.0).fract() != 0.0 {
            return Err(KinegridError::validation(format!(
                "{:?} motion turns must be a multiple of 0.5, got {}",
                self.hand, self.turns
            )));
        }
        match self.kind {
            MotionKind::Static => {
                if self.start_loc != self.end_loc {
                    return Err(KinegridError::validation(format!(
                        "{:?} static motion must hold its location ({} -> {})",
                        self.hand, self.start_loc, self.end_loc
                    )));
                }
                if self.rotation != RotationDirection::NoRotation {
                    return Err(KinegridError::validation(format!(
                        "{:?} static motion cannot carry a rotation direction",
                        self.hand
                    )));
                }
            }
            MotionKind::Dash => {
                if self.rotation != RotationDirection::NoRotation {
                    return Err(KinegridError::validation(format!(
                        "{:?} dash motion cannot carry a rotation direction",
                        self.hand
                    )));
                }
            }
            MotionKind::Pro | MotionKind::Anti => {
                if self.rotation == RotationDirection::NoRotation {
                    return Err(KinegridError::validation(format!(
                        "{:?} {:?} motion needs a rotation direction",
                        self.hand, self.kind
                    )));
                }
            }
            MotionKind::Float => {
                if self.rotation != RotationDirection::NoRotation {
                    return Err(KinegridError::validation(format!(
                        "{:?} float motion cannot carry a rotation direction",
                        self.hand
                    )));
                }
            }
        }
        Ok(())
    }
}
