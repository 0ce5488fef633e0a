use fairway_scoring::model::{Hole, RoundFormat};
use fairway_scoring::score::Round;

#[must_use]
pub fn nine_hole_course() -> Vec<Hole> {
    let pars = [4, 3, 5, 4, 4, 3, 4, 5, 4];
    let stroke_indexes = [3, 7, 1, 5, 2, 9, 6, 4, 8];
    (0..9)
        .map(|i| Hole {
            hole_number: i as u32 + 1,
            par: pars[i],
            stroke_index: stroke_indexes[i],
        })
        .collect()
}

#[must_use]
pub fn eighteen_hole_course() -> Vec<Hole> {
    let pars = [4, 3, 5, 4, 4, 3, 4, 5, 4, 4, 5, 3, 4, 4, 5, 3, 4, 4];
    let stroke_indexes = [5, 13, 1, 9, 3, 17, 11, 7, 15, 6, 2, 18, 10, 4, 8, 16, 12, 14];
    (0..18)
        .map(|i| Hole {
            hole_number: i as u32 + 1,
            par: pars[i],
            stroke_index: stroke_indexes[i],
        })
        .collect()
}

/// Round with one scorecard per (player id, handicap) pair.
#[must_use]
pub fn round_with_players(format: RoundFormat, holes: Vec<Hole>, players: &[(&str, i32)]) -> Round {
    let mut round = Round::new("round-1", format, holes).unwrap();
    for (player_id, handicap) in players {
        round.add_player(*player_id, *handicap).unwrap();
    }
    round
}
