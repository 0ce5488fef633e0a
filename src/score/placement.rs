use crate::model::{RoundFormat, RoundPoints, Scorecard};

/// Ranks a round's scorecards by the format's criterion and hands out
/// points from the table. Every card in gets exactly one entry out; a
/// card ranked past the end of the table still gets a placing, just 0
/// points. Tied cards share the placing of the first slot they occupy
/// and the mean of the slots' points, rounded to one decimal.
#[must_use]
pub fn award_points(
    scorecards: &[Scorecard],
    format: RoundFormat,
    points_table: &[f64],
) -> Vec<RoundPoints> {
    let mut order: Vec<(&Scorecard, i32)> = scorecards
        .iter()
        .map(|card| (card, sort_value(card, format)))
        .collect();

    // Stableford counts points (higher wins); every other format counts
    // strokes (lower wins).
    match format {
        RoundFormat::Stableford => order.sort_by(|a, b| b.1.cmp(&a.1)),
        _ => order.sort_by(|a, b| a.1.cmp(&b.1)),
    }

    let mut results = Vec::with_capacity(order.len());
    let mut i = 0;
    while i < order.len() {
        let mut j = i + 1;
        while j < order.len() && order[j].1 == order[i].1 {
            j += 1;
        }
        let shared = shared_points(points_table, i, j);
        for (card, _) in &order[i..j] {
            results.push(RoundPoints {
                participant_id: card.participant_id().to_string(),
                placing: i + 1,
                points_awarded: shared,
            });
        }
        i = j;
    }

    results
}

fn sort_value(card: &Scorecard, format: RoundFormat) -> i32 {
    match format {
        RoundFormat::Stableford => card.stableford_points.unwrap_or(0),
        RoundFormat::Handicap | RoundFormat::Bestball => card.net_total,
        RoundFormat::Scramble => card.gross_total,
    }
}

/// Mean of the table slots `[start, end)`, slots past the table counting
/// as 0, rounded to one decimal.
fn shared_points(points_table: &[f64], start: usize, end: usize) -> f64 {
    let sum: f64 = (start..end)
        .map(|slot| points_table.get(slot).copied().unwrap_or(0.0))
        .sum();
    let mean = sum / (end - start) as f64;
    (mean * 10.0).round() / 10.0
}
