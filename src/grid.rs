use crate::error::{KinegridError, KinegridResult};

/// One of the 8 compass points a hand can occupy.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum Location {
    #[serde(rename = "n")]
    North,
    #[serde(rename = "ne")]
    NorthEast,
    #[serde(rename = "e")]
    East,
    #[serde(rename = "se")]
    SouthEast,
    #[serde(rename = "s")]
    South,
    #[serde(rename = "sw")]
    SouthWest,
    #[serde(rename = "w")]
    West,
    #[serde(rename = "nw")]
    NorthWest,
}

impl Location {
    /// All 8 locations in clockwise compass order starting at north.
    pub const ALL: [Location; 8] = [
        Location::North,
        Location::NorthEast,
        Location::East,
        Location::SouthEast,
        Location::South,
        Location::SouthWest,
        Location::West,
        Location::NorthWest,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::North => "n",
            Self::NorthEast => "ne",
            Self::East => "e",
            Self::SouthEast => "se",
            Self::South => "s",
            Self::SouthWest => "sw",
            Self::West => "w",
            Self::NorthWest => "nw",
        }
    }

    fn index(self) -> u8 {
        match self {
            Self::North => 0,
            Self::NorthEast => 1,
            Self::East => 2,
            Self::SouthEast => 3,
            Self::South => 4,
            Self::SouthWest => 5,
            Self::West => 6,
            Self::NorthWest => 7,
        }
    }

    fn from_index(i: u8) -> Self {
        Self::ALL[(i % 8) as usize]
    }

    /// Advance `steps` 45-degree steps clockwise around the compass.
    pub fn rotated_cw(self, steps: u8) -> Self {
        Self::from_index(self.index().wrapping_add(steps % 8))
    }

    /// Number of clockwise 45-degree steps from `self` to `other` (0..=7).
    pub fn steps_cw_to(self, other: Self) -> u8 {
        (other.index() + 8 - self.index()) % 8
    }

    /// The location 180 degrees across the grid.
    pub fn opposite(self) -> Self {
        self.rotated_cw(4)
    }

    pub fn reflected(self, axis: Axis) -> Self {
        match axis {
            // n-s line: east and west sides trade places.
            Axis::Vertical => match self {
                Self::North => Self::North,
                Self::NorthEast => Self::NorthWest,
                Self::East => Self::West,
                Self::SouthEast => Self::SouthWest,
                Self::South => Self::South,
                Self::SouthWest => Self::SouthEast,
                Self::West => Self::East,
                Self::NorthWest => Self::NorthEast,
            },
            // e-w line: north and south sides trade places.
            Axis::Horizontal => match self {
                Self::North => Self::South,
                Self::NorthEast => Self::SouthEast,
                Self::East => Self::East,
                Self::SouthEast => Self::NorthEast,
                Self::South => Self::North,
                Self::SouthWest => Self::NorthWest,
                Self::West => Self::West,
                Self::NorthWest => Self::SouthWest,
            },
        }
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reflection axis of the compass grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Vertical,
    Horizontal,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Vertical => "vertical",
            Self::Horizontal => "horizontal",
        })
    }
}

/// The four single-step transforms a hand location can follow between beats.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RotationKind {
    Clockwise,
    CounterClockwise,
    Dash,
    Static,
}

impl RotationKind {
    pub fn apply(self, location: Location) -> Location {
        match self {
            Self::Clockwise => location.rotated_cw(1),
            Self::CounterClockwise => location.rotated_cw(7),
            Self::Dash => location.rotated_cw(4),
            Self::Static => location,
        }
    }

    /// Classify the single-step transform connecting `start` to `end`.
    ///
    /// Locations 2, 3, 5 or 6 steps apart are reachable only by multi-step
    /// motion and have no unique single-step class; callers holding such a
    /// motion must carry its rotation explicitly instead of inferring it.
    pub fn between(start: Location, end: Location) -> KinegridResult<Self> {
        match start.steps_cw_to(end) {
            0 => Ok(Self::Static),
            1 => Ok(Self::Clockwise),
            4 => Ok(Self::Dash),
            7 => Ok(Self::CounterClockwise),
            _ => Err(KinegridError::AmbiguousRotation { start, end }),
        }
    }
}
