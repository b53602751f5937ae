use kinegrid::{
    Axis, BeatBuilder, CapKind, GridPosition, Hand, KinegridError, Location, MotionBuilder,
    MotionKind, MotionRecord, Orientation, RotationDirection, Sequence, SequenceBuilder,
    SliceSize, generate_cap, is_legal_boundary, legal_boundaries,
};

/// A canonical one-beat motion between two locations: static for a hold,
/// dash for the 180-degree crossing, pro otherwise (spinning the shorter
/// way round).
fn canonical_motion(hand: Hand, start: Location, end: Location) -> MotionRecord {
    let steps = start.steps_cw_to(end);
    match steps {
        0 => MotionRecord::static_at(hand, start, Orientation::In),
        4 => MotionBuilder::new(hand, MotionKind::Dash, start, end)
            .build()
            .unwrap(),
        1..=3 => MotionBuilder::new(hand, MotionKind::Pro, start, end)
            .rotation(RotationDirection::Clockwise)
            .turns(1.0)
            .build()
            .unwrap(),
        _ => MotionBuilder::new(hand, MotionKind::Pro, start, end)
            .rotation(RotationDirection::CounterClockwise)
            .turns(1.0)
            .build()
            .unwrap(),
    }
}

fn one_beat_seed(start: GridPosition, end: GridPosition) -> Sequence {
    let (start_blue, start_red) = start.locations();
    let (end_blue, end_red) = end.locations();
    SequenceBuilder::new()
        .start_position(start)
        .beat(
            BeatBuilder::new()
                .letter("A")
                .blue(canonical_motion(Hand::Blue, start_blue, end_blue))
                .red(canonical_motion(Hand::Red, start_red, end_red)),
        )
        .unwrap()
        .build()
        .unwrap()
}

const CONFIGS: [(CapKind, SliceSize); 5] = [
    (CapKind::Rotated, SliceSize::Halved),
    (CapKind::Rotated, SliceSize::Quartered),
    (CapKind::Mirrored(Axis::Vertical), SliceSize::Halved),
    (CapKind::Mirrored(Axis::Horizontal), SliceSize::Halved),
    (CapKind::Swapped, SliceSize::Halved),
];

#[test]
fn every_legal_boundary_closes() {
    for (kind, slice) in CONFIGS {
        for (start, end) in legal_boundaries(kind, slice) {
            let seed = one_beat_seed(start, end);
            let out = generate_cap(&seed, kind, slice)
                .unwrap_or_else(|e| panic!("{kind} {slice} {start}->{end}: {e}"));

            out.validate()
                .unwrap_or_else(|e| panic!("{kind} {slice} {start}->{end}: {e}"));
            assert_eq!(out.beats.len(), slice.multiplier());
            assert_eq!(
                out.beats.last().unwrap().end_pos,
                out.beats[0].start_pos,
                "{kind} {slice} {start}->{end} did not close"
            );
        }
    }
}

#[test]
fn generated_halves_carry_letters_through() {
    for (kind, slice) in CONFIGS {
        let (start, end) = legal_boundaries(kind, slice)[0];
        let out = generate_cap(&one_beat_seed(start, end), kind, slice).unwrap();
        for beat in &out.beats {
            assert_eq!(beat.letter.as_deref(), Some("A"));
        }
    }
}

#[test]
fn swapped_halves_preserve_hand_identity_everywhere() {
    for (start, end) in legal_boundaries(CapKind::Swapped, SliceSize::Halved) {
        let seed = one_beat_seed(start, end);
        let out = generate_cap(&seed, CapKind::Swapped, SliceSize::Halved).unwrap();
        for beat in &out.beats {
            assert_eq!(beat.blue.hand, Hand::Blue);
            assert_eq!(beat.red.hand, Hand::Red);
        }
        // The generated beat performs the other hand's seed action.
        let generated = &out.beats[1];
        assert_eq!(generated.blue.kind, seed.beats[0].red.kind);
        assert_eq!(generated.blue.end_loc, seed.beats[0].red.end_loc);
        assert_eq!(generated.red.kind, seed.beats[0].blue.kind);
        assert_eq!(generated.red.end_loc, seed.beats[0].blue.end_loc);
    }
}

#[test]
fn multi_beat_seed_cycles_through_its_sources() {
    // Two 45-degree beats make up the quarter: alpha1 -> alpha2 -> alpha3.
    let step = |hand, start: Location| {
        MotionBuilder::new(hand, MotionKind::Pro, start, start.rotated_cw(1))
            .rotation(RotationDirection::Clockwise)
            .turns(1.0)
            .build()
            .unwrap()
    };
    let chained = |hand, start: Location, ori| {
        MotionBuilder::new(hand, MotionKind::Pro, start, start.rotated_cw(1))
            .rotation(RotationDirection::Clockwise)
            .turns(1.0)
            .start_ori(ori)
            .build()
            .unwrap()
    };

    let seed = SequenceBuilder::new()
        .start_position(GridPosition::Alpha1)
        .beat(
            BeatBuilder::new()
                .blue(step(Hand::Blue, Location::South))
                .red(step(Hand::Red, Location::North)),
        )
        .unwrap()
        .beat(
            BeatBuilder::new()
                .blue(chained(Hand::Blue, Location::SouthWest, Orientation::Out))
                .red(chained(Hand::Red, Location::NorthEast, Orientation::Out)),
        )
        .unwrap()
        .build()
        .unwrap();

    let out = generate_cap(&seed, CapKind::Rotated, SliceSize::Quartered).unwrap();
    out.validate().unwrap();
    assert_eq!(out.beats.len(), 8);

    let ends: Vec<_> = out.beats.iter().map(|b| b.end_pos).collect();
    assert_eq!(
        ends,
        vec![
            GridPosition::Alpha2,
            GridPosition::Alpha3,
            GridPosition::Alpha4,
            GridPosition::Alpha5,
            GridPosition::Alpha6,
            GridPosition::Alpha7,
            GridPosition::Alpha8,
            GridPosition::Alpha1,
        ]
    );
}

#[test]
fn illegal_boundaries_are_rejected_for_every_config() {
    for (kind, slice) in CONFIGS {
        for start in GridPosition::ALL {
            for end in GridPosition::ALL {
                if is_legal_boundary(kind, slice, start, end) {
                    continue;
                }
                // Skip pairs no single beat can author (diagonal hand paths
                // are representable, so only the boundary check may reject).
                let seed = one_beat_seed(start, end);
                assert!(
                    matches!(
                        generate_cap(&seed, kind, slice),
                        Err(KinegridError::InvalidCapBoundary { .. })
                    ),
                    "{kind} {slice} {start}->{end} should be rejected"
                );
            }
        }
    }
}
