use crate::model::HoleCount;

/// Extra strokes a participant receives on a hole, from their handicap and
/// the hole's difficulty rank. A 9-hole round plays off half the handicap,
/// rounded to the nearest integer. Never cached; handicaps move between
/// rounds.
#[must_use]
pub fn strokes_received(handicap: i32, stroke_index: u32, hole_count: HoleCount) -> u32 {
    if handicap <= 0 {
        return 0;
    }

    let holes = hole_count.holes() as i32;
    let effective = match hole_count {
        HoleCount::Nine => (f64::from(handicap) / 2.0).round() as i32,
        HoleCount::Eighteen => handicap,
    };
    let stroke_index = stroke_index as i32;

    if effective >= holes * 2 {
        2
    } else if effective > holes {
        if stroke_index <= effective - holes { 2 } else { 1 }
    } else if stroke_index <= effective {
        1
    } else {
        0
    }
}

/// A team plays off the rounded average of its members' handicaps.
#[must_use]
pub fn team_handicap(handicaps: &[i32]) -> i32 {
    if handicaps.is_empty() {
        return 0;
    }
    let sum: i32 = handicaps.iter().sum();
    (f64::from(sum) / handicaps.len() as f64).round() as i32
}
