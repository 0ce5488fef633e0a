use fairway_scoring::model::HoleCount;
use fairway_scoring::score::{strokes_received, team_handicap};

#[test]
fn scratch_and_plus_handicaps_get_nothing() {
    for stroke_index in 1..=18 {
        assert_eq!(strokes_received(0, stroke_index, HoleCount::Eighteen), 0);
        assert_eq!(strokes_received(-4, stroke_index, HoleCount::Eighteen), 0);
    }
}

#[test]
fn handicap_equal_to_holes_covers_every_hole_once() {
    for stroke_index in 1..=18 {
        assert_eq!(strokes_received(18, stroke_index, HoleCount::Eighteen), 1);
    }
}

#[test]
fn handicap_within_holes_covers_hardest_holes_only() {
    // Handicap 6 on 18 holes: stroke indexes 1-6 get a stroke, the rest none.
    for stroke_index in 1..=6 {
        assert_eq!(strokes_received(6, stroke_index, HoleCount::Eighteen), 1);
    }
    for stroke_index in 7..=18 {
        assert_eq!(strokes_received(6, stroke_index, HoleCount::Eighteen), 0);
    }
}

#[test]
fn handicap_past_holes_doubles_up_hardest_holes() {
    // Handicap 20 on 18 holes: two strokes on indexes 1-2, one elsewhere.
    assert_eq!(strokes_received(20, 1, HoleCount::Eighteen), 2);
    assert_eq!(strokes_received(20, 2, HoleCount::Eighteen), 2);
    for stroke_index in 3..=18 {
        assert_eq!(strokes_received(20, stroke_index, HoleCount::Eighteen), 1);
    }
}

#[test]
fn extreme_handicap_hits_the_two_stroke_ceiling() {
    for stroke_index in 1..=18 {
        assert_eq!(strokes_received(36, stroke_index, HoleCount::Eighteen), 2);
        assert_eq!(strokes_received(54, stroke_index, HoleCount::Eighteen), 2);
    }
    for stroke_index in 1..=9 {
        assert_eq!(strokes_received(36, stroke_index, HoleCount::Nine), 2);
    }
}

#[test]
fn nine_hole_rounds_halve_the_handicap() {
    // Handicap 18 halves to 9: one stroke everywhere.
    for stroke_index in 1..=9 {
        assert_eq!(strokes_received(18, stroke_index, HoleCount::Nine), 1);
    }
    // Handicap 7 halves to 3.5, rounding to 4.
    for stroke_index in 1..=4 {
        assert_eq!(strokes_received(7, stroke_index, HoleCount::Nine), 1);
    }
    for stroke_index in 5..=9 {
        assert_eq!(strokes_received(7, stroke_index, HoleCount::Nine), 0);
    }
}

#[test]
fn allocation_is_monotonic_in_handicap() {
    for hole_count in [HoleCount::Nine, HoleCount::Eighteen] {
        for stroke_index in 1..=hole_count.holes() {
            let mut previous = 0;
            for handicap in -5..=60 {
                let strokes = strokes_received(handicap, stroke_index, hole_count);
                assert!(
                    strokes >= previous,
                    "allocation dropped from {previous} to {strokes} at handicap {handicap}, stroke index {stroke_index}"
                );
                previous = strokes;
            }
        }
    }
}

#[test]
fn team_handicap_is_rounded_average() {
    assert_eq!(team_handicap(&[8, 10]), 9);
    assert_eq!(team_handicap(&[10, 11]), 11);
    assert_eq!(team_handicap(&[12]), 12);
    assert_eq!(team_handicap(&[]), 0);
}
