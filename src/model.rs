use crate::{
    error::{KinegridError, KinegridResult},
    motion::{Hand, MotionRecord},
    position::GridPosition,
};

/// One step of a sequence: both hands' motions plus the derived start and
/// end grid positions.
///
/// The positions are carried for storage and display, but they are never
/// authoritative on their own: `validate` re-derives them from the motion
/// records' location pairs and rejects any drift.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Beat {
    pub index: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub letter: Option<String>,
    pub blue: MotionRecord,
    pub red: MotionRecord,
    pub start_pos: GridPosition,
    pub end_pos: GridPosition,
}

impl Beat {
    pub fn motion(&self, hand: Hand) -> &MotionRecord {
        match hand {
            Hand::Blue => &self.blue,
            Hand::Red => &self.red,
        }
    }

    pub fn validate(&self) -> KinegridResult<()> {
        if self.blue.hand != Hand::Blue {
            return Err(KinegridError::validation(format!(
                "beat {} blue slot holds a {:?} motion",
                self.index, self.blue.hand
            )));
        }
        if self.red.hand != Hand::Red {
            return Err(KinegridError::validation(format!(
                "beat {} red slot holds a {:?} motion",
                self.index, self.red.hand
            )));
        }
        self.blue.validate()?;
        self.red.validate()?;

        let derived_start = GridPosition::from_locations(self.blue.start_loc, self.red.start_loc)?;
        if derived_start != self.start_pos {
            return Err(KinegridError::validation(format!(
                "beat {} start position {} does not match its motions ({})",
                self.index, self.start_pos, derived_start
            )));
        }
        let derived_end = GridPosition::from_locations(self.blue.end_loc, self.red.end_loc)?;
        if derived_end != self.end_pos {
            return Err(KinegridError::validation(format!(
                "beat {} end position {} does not match its motions ({})",
                self.index, self.end_pos, derived_end
            )));
        }
        Ok(())
    }
}

/// An ordered run of beats, optionally preceded by a start-position marker
/// (the zero-duration configuration both hands hold before the first beat).
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Sequence {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_position: Option<GridPosition>,
    pub beats: Vec<Beat>,
}

impl Sequence {
    /// The (first start, last end) position pair, when there is at least one
    /// beat.
    pub fn boundary(&self) -> Option<(GridPosition, GridPosition)> {
        let first = self.beats.first()?;
        let last = self.beats.last()?;
        Some((first.start_pos, last.end_pos))
    }

    pub fn validate(&self) -> KinegridResult<()> {
        for (i, beat) in self.beats.iter().enumerate() {
            if beat.index != i as u64 {
                return Err(KinegridError::validation(format!(
                    "beat at offset {i} carries index {}",
                    beat.index
                )));
            }
            beat.validate()?;
        }

        if let (Some(pos), Some(first)) = (self.start_position, self.beats.first()) {
            if first.start_pos != pos {
                return Err(KinegridError::validation(format!(
                    "start position {} disagrees with first beat ({})",
                    pos, first.start_pos
                )));
            }
        }

        for pair in self.beats.windows(2) {
            let (prev, next) = (&pair[0], &pair[1]);
            if next.start_pos != prev.end_pos {
                return Err(KinegridError::validation(format!(
                    "beat {} starts at {} but beat {} ended at {}",
                    next.index, next.start_pos, prev.index, prev.end_pos
                )));
            }
            for hand in [Hand::Blue, Hand::Red] {
                let (p, n) = (prev.motion(hand), next.motion(hand));
                if n.start_loc != p.end_loc {
                    return Err(KinegridError::validation(format!(
                        "beat {} {:?} hand starts at {} but previously ended at {}",
                        next.index, hand, n.start_loc, p.end_loc
                    )));
                }
                if n.start_ori != p.end_ori {
                    return Err(KinegridError::validation(format!(
                        "beat {} {:?} hand starts {:?} but previously ended {:?}",
                        next.index, hand, n.start_ori, p.end_ori
                    )));
                }
            }
        }

        Ok(())
    }
}
