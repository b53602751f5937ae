use crate::{
    cap::{CapKind, SliceSize},
    position::GridPosition,
};

/// Whether a seed running from `start` to `end` can close under the given
/// CAP kind and slice size.
///
/// The legal sets are derived from the location algebra on every call rather
/// than transcribed as tables, so they can never drift from the position map:
///
/// - rotated + halved: both hands sit 180 degrees from their start;
/// - rotated + quartered: both hands sit 90 degrees from their start, the
///   same way round;
/// - mirrored + halved: each hand sits at its start reflected in the axis;
/// - swapped + halved: the hands sit at each other's start locations.
///
/// Reflection and hand swap are involutions, so neither supports a quarter
/// slice.
pub fn is_legal_boundary(
    kind: CapKind,
    slice: SliceSize,
    start: GridPosition,
    end: GridPosition,
) -> bool {
    let (start_blue, start_red) = start.locations();
    let (end_blue, end_red) = end.locations();

    match (kind, slice) {
        (CapKind::Rotated, SliceSize::Halved) => {
            start_blue.steps_cw_to(end_blue) == 4 && start_red.steps_cw_to(end_red) == 4
        }
        (CapKind::Rotated, SliceSize::Quartered) => {
            let blue_steps = start_blue.steps_cw_to(end_blue);
            blue_steps == start_red.steps_cw_to(end_red) && (blue_steps == 2 || blue_steps == 6)
        }
        (CapKind::Mirrored(axis), SliceSize::Halved) => {
            end_blue == start_blue.reflected(axis) && end_red == start_red.reflected(axis)
        }
        (CapKind::Swapped, SliceSize::Halved) => end_blue == start_red && end_red == start_blue,
        (CapKind::Mirrored(_) | CapKind::Swapped, SliceSize::Quartered) => false,
    }
}

/// Every legal (seed start, seed end) pair for the configuration, in
/// position order. UIs use this to grey out impossible combinations before
/// generation is attempted.
pub fn legal_boundaries(kind: CapKind, slice: SliceSize) -> Vec<(GridPosition, GridPosition)> {
    let mut pairs = Vec::new();
    for start in GridPosition::ALL {
        for end in GridPosition::ALL {
            if is_legal_boundary(kind, slice, start, end) {
                pairs.push((start, end));
            }
        }
    }
    pairs
}
