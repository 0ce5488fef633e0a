use crate::model::{Hole, HoleCount};
use crate::score::handicap::strokes_received;

/// Net strokes for one hole, or `None` when the hole has not been played.
#[must_use]
pub fn net_strokes(
    gross: Option<u32>,
    handicap: i32,
    hole: &Hole,
    hole_count: HoleCount,
) -> Option<i32> {
    gross.map(|g| g as i32 - strokes_received(handicap, hole.stroke_index, hole_count) as i32)
}

/// Stableford points for one hole. An unplayed hole scores 0. Net par is
/// worth 2, each stroke under par one more. The scale is uncapped upward,
/// so a net albatross scores 5, net 4-under scores 6, and so on.
#[must_use]
pub fn stableford_points(
    gross: Option<u32>,
    par: u32,
    handicap: i32,
    stroke_index: u32,
    hole_count: HoleCount,
) -> i32 {
    let Some(gross) = gross else {
        return 0;
    };
    let net = gross as i32 - strokes_received(handicap, stroke_index, hole_count) as i32;
    let diff = net - par as i32;
    (2 - diff).max(0)
}
