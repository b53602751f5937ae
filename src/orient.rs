use crate::{
    grid::RotationKind,
    motion::{MotionKind, MotionRecord, Orientation, RotationDirection},
};

/// Orientation-continuation rule: given a motion whose `start_ori` is set,
/// decide where the prop points when the motion ends.
pub trait OrientationRule {
    fn end_orientation(&self, motion: &MotionRecord) -> Orientation;
}

/// The default continuation rule.
///
/// Whole turns flip orientation by parity: pro and static keep the start
/// orientation on even turn counts, anti and dash keep it on odd counts.
/// A trailing half turn advances one quarter step in the motion's rotation
/// direction. Float ignores turns and takes its quarter step from the hand
/// path instead.
#[derive(Clone, Copy, Debug, Default)]
pub struct StandardOrientation;

impl OrientationRule for StandardOrientation {
    fn end_orientation(&self, motion: &MotionRecord) -> Orientation {
        if motion.kind == MotionKind::Float {
            return float_end_orientation(motion);
        }

        let whole_turns = motion.turns.trunc() as u64;
        let has_half_turn = motion.turns.fract() != 0.0;

        let mut ori = motion.start_ori;
        if matches!(motion.kind, MotionKind::Anti | MotionKind::Dash) {
            ori = ori.switched();
        }
        if whole_turns % 2 == 1 {
            ori = ori.switched();
        }
        if has_half_turn {
            ori = ori.quarter_step(motion.rotation);
        }
        ori
    }
}

fn float_end_orientation(motion: &MotionRecord) -> Orientation {
    match RotationKind::between(motion.start_loc, motion.end_loc) {
        Ok(RotationKind::Clockwise) => motion
            .start_ori
            .quarter_step(RotationDirection::Clockwise),
        Ok(RotationKind::CounterClockwise) => motion
            .start_ori
            .quarter_step(RotationDirection::CounterClockwise),
        // Held, opposite, or multi-step paths leave the prop as it was.
        Ok(_) | Err(_) => motion.start_ori,
    }
}
