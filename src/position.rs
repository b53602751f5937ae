use crate::{
    error::{KinegridError, KinegridResult},
    grid::Location,
};

/// One of the 32 named grid configurations, each a fixed ordered pair of
/// hand locations (blue first, red second).
///
/// The three families partition the valid pairs: alpha holds the 8 opposite
/// pairs, beta the 8 identical pairs, gamma the 16 perpendicular pairs. The
/// remaining 32 of the 64 ordered pairs are not positions at all, and looking
/// one up is an error rather than a fallback.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum GridPosition {
    Alpha1,
    Alpha2,
    Alpha3,
    Alpha4,
    Alpha5,
    Alpha6,
    Alpha7,
    Alpha8,
    Beta1,
    Beta2,
    Beta3,
    Beta4,
    Beta5,
    Beta6,
    Beta7,
    Beta8,
    Gamma1,
    Gamma2,
    Gamma3,
    Gamma4,
    Gamma5,
    Gamma6,
    Gamma7,
    Gamma8,
    Gamma9,
    Gamma10,
    Gamma11,
    Gamma12,
    Gamma13,
    Gamma14,
    Gamma15,
    Gamma16,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PositionGroup {
    Alpha,
    Beta,
    Gamma,
}

use self::GridPosition::*;
use crate::grid::Location::{
    East, North, NorthEast, NorthWest, South, SouthEast, SouthWest, West,
};

impl GridPosition {
    pub const ALL: [GridPosition; 32] = [
        Alpha1, Alpha2, Alpha3, Alpha4, Alpha5, Alpha6, Alpha7, Alpha8, Beta1, Beta2, Beta3,
        Beta4, Beta5, Beta6, Beta7, Beta8, Gamma1, Gamma2, Gamma3, Gamma4, Gamma5, Gamma6, Gamma7,
        Gamma8, Gamma9, Gamma10, Gamma11, Gamma12, Gamma13, Gamma14, Gamma15, Gamma16,
    ];

    pub fn group(self) -> PositionGroup {
        match self {
            Alpha1 | Alpha2 | Alpha3 | Alpha4 | Alpha5 | Alpha6 | Alpha7 | Alpha8 => {
                PositionGroup::Alpha
            }
            Beta1 | Beta2 | Beta3 | Beta4 | Beta5 | Beta6 | Beta7 | Beta8 => PositionGroup::Beta,
            _ => PositionGroup::Gamma,
        }
    }

    /// The (blue, red) hand locations of this position.
    pub fn locations(self) -> (Location, Location) {
        match self {
            Alpha1 => (South, North),
            Alpha2 => (SouthWest, NorthEast),
            Alpha3 => (West, East),
            Alpha4 => (NorthWest, SouthEast),
            Alpha5 => (North, South),
            Alpha6 => (NorthEast, SouthWest),
            Alpha7 => (East, West),
            Alpha8 => (SouthEast, NorthWest),
            Beta1 => (North, North),
            Beta2 => (NorthEast, NorthEast),
            Beta3 => (East, East),
            Beta4 => (SouthEast, SouthEast),
            Beta5 => (South, South),
            Beta6 => (SouthWest, SouthWest),
            Beta7 => (West, West),
            Beta8 => (NorthWest, NorthWest),
            Gamma1 => (West, North),
            Gamma2 => (NorthWest, NorthEast),
            Gamma3 => (North, East),
            Gamma4 => (NorthEast, SouthEast),
            Gamma5 => (East, South),
            Gamma6 => (SouthEast, SouthWest),
            Gamma7 => (South, West),
            Gamma8 => (SouthWest, NorthWest),
            Gamma9 => (East, North),
            Gamma10 => (SouthEast, NorthEast),
            Gamma11 => (South, East),
            Gamma12 => (SouthWest, SouthEast),
            Gamma13 => (West, South),
            Gamma14 => (NorthWest, SouthWest),
            Gamma15 => (North, West),
            Gamma16 => (NorthEast, NorthWest),
        }
    }

    /// Inverse of [`GridPosition::locations`]. Order-sensitive: (blue, red)
    /// and (red, blue) are different positions unless the pair is symmetric.
    pub fn from_locations(blue: Location, red: Location) -> KinegridResult<Self> {
        let position = match (blue, red) {
            (South, North) => Alpha1,
            (SouthWest, NorthEast) => Alpha2,
            (West, East) => Alpha3,
            (NorthWest, SouthEast) => Alpha4,
            (North, South) => Alpha5,
            (NorthEast, SouthWest) => Alpha6,
            (East, West) => Alpha7,
            (SouthEast, NorthWest) => Alpha8,
            (North, North) => Beta1,
            (NorthEast, NorthEast) => Beta2,
            (East, East) => Beta3,
            (SouthEast, SouthEast) => Beta4,
            (South, South) => Beta5,
            (SouthWest, SouthWest) => Beta6,
            (West, West) => Beta7,
            (NorthWest, NorthWest) => Beta8,
            (West, North) => Gamma1,
            (NorthWest, NorthEast) => Gamma2,
            (North, East) => Gamma3,
            (NorthEast, SouthEast) => Gamma4,
            (East, South) => Gamma5,
            (SouthEast, SouthWest) => Gamma6,
            (South, West) => Gamma7,
            (SouthWest, NorthWest) => Gamma8,
            (East, North) => Gamma9,
            (SouthEast, NorthEast) => Gamma10,
            (South, East) => Gamma11,
            (SouthWest, SouthEast) => Gamma12,
            (West, South) => Gamma13,
            (NorthWest, SouthWest) => Gamma14,
            (North, West) => Gamma15,
            (NorthEast, NorthWest) => Gamma16,
            _ => return Err(KinegridError::UnmappedLocationPair(blue, red)),
        };
        Ok(position)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Alpha1 => "alpha1",
            Alpha2 => "alpha2",
            Alpha3 => "alpha3",
            Alpha4 => "alpha4",
            Alpha5 => "alpha5",
            Alpha6 => "alpha6",
            Alpha7 => "alpha7",
            Alpha8 => "alpha8",
            Beta1 => "beta1",
            Beta2 => "beta2",
            Beta3 => "beta3",
            Beta4 => "beta4",
            Beta5 => "beta5",
            Beta6 => "beta6",
            Beta7 => "beta7",
            Beta8 => "beta8",
            Gamma1 => "gamma1",
            Gamma2 => "gamma2",
            Gamma3 => "gamma3",
            Gamma4 => "gamma4",
            Gamma5 => "gamma5",
            Gamma6 => "gamma6",
            Gamma7 => "gamma7",
            Gamma8 => "gamma8",
            Gamma9 => "gamma9",
            Gamma10 => "gamma10",
            Gamma11 => "gamma11",
            Gamma12 => "gamma12",
            Gamma13 => "gamma13",
            Gamma14 => "gamma14",
            Gamma15 => "gamma15",
            Gamma16 => "gamma16",
        }
    }
}

impl std::fmt::Display for GridPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for GridPosition {
    type Err = KinegridError;

    fn from_str(s: &str) -> KinegridResult<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| KinegridError::UnknownPosition(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locations_round_trip_for_all_positions() {
        for pos in GridPosition::ALL {
            let (blue, red) = pos.locations();
            assert_eq!(GridPosition::from_locations(blue, red).unwrap(), pos);
        }
    }

    #[test]
    fn families_partition_by_pair_shape() {
        for pos in GridPosition::ALL {
            let (blue, red) = pos.locations();
            let steps = blue.steps_cw_to(red);
            match pos.group() {
                PositionGroup::Alpha => assert_eq!(steps, 4, "{pos}"),
                PositionGroup::Beta => assert_eq!(steps, 0, "{pos}"),
                PositionGroup::Gamma => assert!(steps == 2 || steps == 6, "{pos}"),
            }
        }
    }

    #[test]
    fn diagonal_pairs_are_unmapped() {
        for blue in Location::ALL {
            for red in Location::ALL {
                let steps = blue.steps_cw_to(red);
                let looked_up = GridPosition::from_locations(blue, red);
                if steps % 2 == 1 {
                    assert!(matches!(
                        looked_up,
                        Err(KinegridError::UnmappedLocationPair(..))
                    ));
                } else {
                    assert!(looked_up.is_ok());
                }
            }
        }
    }

    #[test]
    fn known_anchor_pairs() {
        assert_eq!(GridPosition::Alpha1.locations(), (South, North));
        assert_eq!(
            GridPosition::from_locations(West, East).unwrap(),
            GridPosition::Alpha3
        );
        assert_eq!(
            GridPosition::from_locations(North, North).unwrap(),
            GridPosition::Beta1
        );
        assert_eq!(
            GridPosition::from_locations(South, East).unwrap(),
            GridPosition::Gamma11
        );
        assert!(GridPosition::from_locations(North, NorthEast).is_err());
    }

    #[test]
    fn lookup_is_order_sensitive() {
        assert_eq!(
            GridPosition::from_locations(West, North).unwrap(),
            GridPosition::Gamma1
        );
        assert_eq!(
            GridPosition::from_locations(North, West).unwrap(),
            GridPosition::Gamma15
        );
    }

    #[test]
    fn uniform_rotation_stays_inside_the_table() {
        for pos in GridPosition::ALL {
            let (blue, red) = pos.locations();
            for steps in 0..8 {
                let rotated =
                    GridPosition::from_locations(blue.rotated_cw(steps), red.rotated_cw(steps));
                assert!(rotated.is_ok(), "{pos} rotated by {steps}");
                assert_eq!(rotated.unwrap().group(), pos.group());
            }
        }
    }

    #[test]
    fn wire_names_parse_back() {
        for pos in GridPosition::ALL {
            let parsed: GridPosition = pos.as_str().parse().unwrap();
            assert_eq!(parsed, pos);
        }
        assert!(matches!(
            "alpha9".parse::<GridPosition>(),
            Err(KinegridError::UnknownPosition(_))
        ));
    }

    #[test]
    fn serde_uses_wire_names() {
        let json = serde_json::to_string(&GridPosition::Gamma11).unwrap();
        assert_eq!(json, "\"gamma11\"");
        let back: GridPosition = serde_json::from_str("\"alpha3\"").unwrap();
        assert_eq!(back, GridPosition::Alpha3);
    }
}
