use crate::model::{Hole, HoleCount, LineScore, RoundFormat, Scorecard, ScoreDisplay};
use crate::score::handicap::strokes_received;
use crate::score::hole::{net_strokes, stableford_points};

/// Sets or clears one hole's gross strokes and recomputes every derived
/// field on the card from scratch. Clearing an entry (`None`) is a normal
/// operation, not an error; it pulls the totals back down and marks the
/// card incomplete again.
///
/// Standings for the round are NOT touched here; the caller sequences the
/// placement recompute after the mutation.
pub fn apply_stroke_entry(
    card: &mut Scorecard,
    hole_index: usize,
    strokes: Option<u32>,
    holes: &[Hole],
    hole_count: HoleCount,
    handicap: i32,
    format: RoundFormat,
) {
    card.hole_strokes[hole_index] = strokes;

    card.gross_total = card
        .hole_strokes
        .iter()
        .flatten()
        .map(|&gross| gross as i32)
        .sum();

    card.net_total = holes
        .iter()
        .zip(&card.hole_strokes)
        .filter_map(|(hole, &gross)| net_strokes(gross, handicap, hole, hole_count))
        .sum();

    card.stableford_points = match format {
        RoundFormat::Stableford => Some(
            holes
                .iter()
                .zip(&card.hole_strokes)
                .map(|(hole, &gross)| {
                    stableford_points(gross, hole.par, handicap, hole.stroke_index, hole_count)
                })
                .sum(),
        ),
        _ => None,
    };

    card.is_complete = card.hole_strokes.iter().all(Option::is_some);
}

/// Per-hole result lines for the played holes of a card, for score views.
#[must_use]
pub fn line_scores(
    card: &Scorecard,
    holes: &[Hole],
    hole_count: HoleCount,
    handicap: i32,
) -> Vec<LineScore> {
    holes
        .iter()
        .zip(&card.hole_strokes)
        .filter_map(|(hole, &gross)| {
            let gross = gross?;
            let net = gross as i32 - strokes_received(handicap, hole.stroke_index, hole_count) as i32;
            let diff = net - hole.par as i32;
            Some(LineScore {
                hole_number: hole.hole_number,
                par: hole.par,
                gross,
                net,
                points: (2 - diff).max(0),
                display: ScoreDisplay::from(diff),
            })
        })
        .collect()
}
