use crate::{
    error::{KinegridError, KinegridResult},
    grid::Location,
    model::{Beat, Sequence},
    motion::{Hand, MotionKind, MotionRecord, Orientation, RotationDirection},
    orient::{OrientationRule, StandardOrientation},
    position::GridPosition,
};

/// Builds a single [`MotionRecord`].
///
/// Defaults: zero turns, no rotation direction, `in` start orientation, and
/// an end orientation computed by [`StandardOrientation`] unless one is
/// supplied.
pub struct MotionBuilder {
    hand: Hand,
    kind: MotionKind,
    rotation: RotationDirection,
    start_loc: Location,
    end_loc: Location,
    turns: f64,
    start_ori: Orientation,
    end_ori: Option<Orientation>,
}

impl MotionBuilder {
    pub fn new(hand: Hand, kind: MotionKind, start_loc: Location, end_loc: Location) -> Self {
        Self {
            hand,
            kind,
            rotation: RotationDirection::NoRotation,
            start_loc,
            end_loc,
            turns: 0.0,
            start_ori: Orientation::In,
            end_ori: None,
        }
    }

    pub fn rotation(mut self, rotation: RotationDirection) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn turns(mut self, turns: f64) -> Self {
        self.turns = turns;
        self
    }

    pub fn start_ori(mut self, ori: Orientation) -> Self {
        self.start_ori = ori;
        self
    }

    pub fn end_ori(mut self, ori: Orientation) -> Self {
        self.end_ori = Some(ori);
        self
    }

    pub fn build(self) -> KinegridResult<MotionRecord> {
        let mut record = MotionRecord {
            hand: self.hand,
            kind: self.kind,
            rotation: self.rotation,
            start_loc: self.start_loc,
            end_loc: self.end_loc,
            turns: self.turns,
            start_ori: self.start_ori,
            end_ori: self.start_ori,
        };
        record.end_ori = match self.end_ori {
            Some(ori) => ori,
            None => StandardOrientation.end_orientation(&record),
        };
        record.validate()?;
        Ok(record)
    }
}

/// Builds a [`Beat`] from two motion records; the start and end positions
/// are derived through the location table, never supplied by hand.
pub struct BeatBuilder {
    letter: Option<String>,
    blue: Option<MotionRecord>,
    red: Option<MotionRecord>,
}

impl Default for BeatBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BeatBuilder {
    pub fn new() -> Self {
        Self {
            letter: None,
            blue: None,
            red: None,
        }
    }

    pub fn letter(mut self, letter: impl Into<String>) -> Self {
        self.letter = Some(letter.into());
        self
    }

    pub fn blue(mut self, motion: MotionRecord) -> Self {
        self.blue = Some(motion);
        self
    }

    pub fn red(mut self, motion: MotionRecord) -> Self {
        self.red = Some(motion);
        self
    }

    pub fn build(self, index: u64) -> KinegridResult<Beat> {
        let blue = self
            .blue
            .ok_or_else(|| KinegridError::validation("beat is missing its blue motion"))?;
        let red = self
            .red
            .ok_or_else(|| KinegridError::validation("beat is missing its red motion"))?;

        let beat = Beat {
            index,
            letter: self.letter,
            blue,
            red,
            start_pos: GridPosition::from_locations(blue.start_loc, red.start_loc)?,
            end_pos: GridPosition::from_locations(blue.end_loc, red.end_loc)?,
        };
        beat.validate()?;
        Ok(beat)
    }
}

/// Builds a [`Sequence`], assigning beat indices in append order.
pub struct SequenceBuilder {
    start_position: Option<GridPosition>,
    beats: Vec<Beat>,
}

impl Default for SequenceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SequenceBuilder {
    pub fn new() -> Self {
        Self {
            start_position: None,
            beats: Vec::new(),
        }
    }

    pub fn start_position(mut self, position: GridPosition) -> Self {
        self.start_position = Some(position);
        self
    }

    pub fn beat(mut self, beat: BeatBuilder) -> KinegridResult<Self> {
        let index = self.beats.len() as u64;
        self.beats.push(beat.build(index)?);
        Ok(self)
    }

    pub fn build(self) -> KinegridResult<Sequence> {
        let seq = Sequence {
            start_position: self.start_position,
            beats: self.beats,
        };
        seq.validate()?;
        Ok(seq)
    }
}
