use crate::{
    boundary::is_legal_boundary,
    error::{KinegridError, KinegridResult},
    grid::Axis,
    model::{Beat, Sequence},
    motion::{Hand, MotionRecord},
    orient::{OrientationRule, StandardOrientation},
    position::GridPosition,
};

/// The closing-pattern transform applied to each generated beat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CapKind {
    /// Continue each hand's own rotation until the pattern closes.
    Rotated,
    /// Play the seed back reflected in a grid axis, spin reversed.
    Mirrored(Axis),
    /// The hands exchange actions (never identities) for the second half.
    Swapped,
}

impl std::fmt::Display for CapKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rotated => f.write_str("rotated"),
            Self::Mirrored(Axis::Vertical) => f.write_str("mirrored-vertical"),
            Self::Mirrored(Axis::Horizontal) => f.write_str("mirrored-horizontal"),
            Self::Swapped => f.write_str("swapped"),
        }
    }
}

/// The fraction of the closed pattern the seed represents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SliceSize {
    Halved,
    Quartered,
}

impl SliceSize {
    pub fn multiplier(self) -> usize {
        match self {
            Self::Halved => 2,
            Self::Quartered => 4,
        }
    }
}

impl std::fmt::Display for SliceSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Halved => "halved",
            Self::Quartered => "quartered",
        })
    }
}

/// Extend `seed` into a closed pattern using [`StandardOrientation`] for
/// orientation continuation.
pub fn generate_cap(seed: &Sequence, kind: CapKind, slice: SliceSize) -> KinegridResult<Sequence> {
    generate_cap_with(seed, kind, slice, &StandardOrientation)
}

/// Extend `seed` into a closed pattern.
///
/// The seed is validated and its boundary checked against the legal set for
/// `kind`/`slice` before anything is built; an illegal boundary fails with
/// [`KinegridError::InvalidCapBoundary`] and no partial sequence ever
/// escapes. Generated beats are constructed fresh; the seed's own beats are
/// carried over unchanged, as is its start-position marker.
#[tracing::instrument(skip(seed, rule), fields(kind = %kind, slice = %slice, seed_beats = seed.beats.len()))]
pub fn generate_cap_with(
    seed: &Sequence,
    kind: CapKind,
    slice: SliceSize,
    rule: &dyn OrientationRule,
) -> KinegridResult<Sequence> {
    seed.validate()?;
    let Some((start_pos, end_pos)) = seed.boundary() else {
        return Err(KinegridError::validation(
            "seed sequence must contain at least one beat",
        ));
    };
    if !is_legal_boundary(kind, slice, start_pos, end_pos) {
        return Err(KinegridError::InvalidCapBoundary {
            kind,
            slice,
            start: start_pos,
            end: end_pos,
        });
    }

    let seed_len = seed.beats.len();
    let total = seed_len * slice.multiplier();
    let mut beats = seed.beats.clone();
    beats.reserve(total - seed_len);

    for n in seed_len..total {
        let source = &seed.beats[n % seed_len];
        let prev = &beats[n - 1];

        let blue = continue_motion(Hand::Blue, kind, source, prev, rule);
        let red = continue_motion(Hand::Red, kind, source, prev, rule);
        let start_pos = prev.end_pos;
        // Always re-derive the end position from the actual locations; a
        // precomputed position would drift silently after a swap or a
        // multi-step rotation.
        let end_pos = GridPosition::from_locations(blue.end_loc, red.end_loc)?;

        beats.push(Beat {
            index: n as u64,
            letter: source.letter.clone(),
            blue,
            red,
            start_pos,
            end_pos,
        });
    }

    Ok(Sequence {
        start_position: seed.start_position,
        beats,
    })
}

/// Build the continuation of one hand slot for a generated beat.
///
/// For swapped kinds the *action* (kind, turns, rotation, destination) is
/// read from the other hand's source motion, but the record's `hand` is
/// always this slot's own identity.
fn continue_motion(
    hand: Hand,
    kind: CapKind,
    source: &Beat,
    prev: &Beat,
    rule: &dyn OrientationRule,
) -> MotionRecord {
    let prev_motion = prev.motion(hand);
    let src = match kind {
        CapKind::Swapped => source.motion(hand.other()),
        CapKind::Rotated | CapKind::Mirrored(_) => source.motion(hand),
    };

    let start_loc = prev_motion.end_loc;
    let (end_loc, rotation) = match kind {
        CapKind::Rotated => {
            // Repeat the source motion's own angular displacement, however
            // many compass steps it spans.
            let steps = src.start_loc.steps_cw_to(src.end_loc);
            (start_loc.rotated_cw(steps), src.rotation)
        }
        CapKind::Mirrored(axis) => (src.end_loc.reflected(axis), src.rotation.reversed()),
        CapKind::Swapped => (src.end_loc, src.rotation),
    };

    let mut motion = MotionRecord {
        hand,
        kind: src.kind,
        rotation,
        start_loc,
        end_loc,
        turns: src.turns,
        start_ori: prev_motion.end_ori,
        end_ori: prev_motion.end_ori,
    };
    motion.end_ori = rule.end_orientation(&motion);
    motion
}
