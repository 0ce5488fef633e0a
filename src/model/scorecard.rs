use serde::{Deserialize, Serialize};

/// One scorecard per (round, participant). The participant is either a
/// single player or a team, never both. All four derived fields are
/// recomputed in full from `hole_strokes` on every stroke entry.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Scorecard {
    pub round_id: String,
    pub player_id: Option<String>,
    pub team_id: Option<String>,
    /// One slot per hole; `None` means the hole has not been played yet.
    pub hole_strokes: Vec<Option<u32>>,
    pub gross_total: i32,
    /// Always computed; 0 when no holes are entered, mirroring `gross_total`.
    pub net_total: i32,
    /// Only meaningful for the stableford format, `None` otherwise.
    pub stableford_points: Option<i32>,
    pub is_complete: bool,
}

impl Scorecard {
    #[must_use]
    pub fn for_player(round_id: impl Into<String>, player_id: impl Into<String>, holes: usize) -> Self {
        Self::empty(round_id.into(), Some(player_id.into()), None, holes)
    }

    #[must_use]
    pub fn for_team(round_id: impl Into<String>, team_id: impl Into<String>, holes: usize) -> Self {
        Self::empty(round_id.into(), None, Some(team_id.into()), holes)
    }

    fn empty(round_id: String, player_id: Option<String>, team_id: Option<String>, holes: usize) -> Self {
        Scorecard {
            round_id,
            player_id,
            team_id,
            hole_strokes: vec![None; holes],
            gross_total: 0,
            net_total: 0,
            stableford_points: None,
            is_complete: false,
        }
    }

    /// Player id when present, team id otherwise.
    #[must_use]
    pub fn participant_id(&self) -> &str {
        self.player_id
            .as_deref()
            .or(self.team_id.as_deref())
            .unwrap_or_default()
    }
}
