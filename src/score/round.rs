use ahash::RandomState;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::CoreError;
use crate::model::{
    DEFAULT_POINTS_TABLE, Hole, HoleCount, LineScore, RoundFormat, RoundPoints, RoundState,
    Scorecard,
};
use crate::score::placement::award_points;
use crate::score::scorecard::{apply_stroke_entry, line_scores};

/// One round of a tournament: the hole roster, the format, and a scorecard
/// per registered participant. Every stroke entry mutates one card and then
/// rebuilds the whole round's standings before returning, so readers never
/// see a card ahead of the standings. Callers running on multiple threads
/// must serialize calls into one `Round` themselves.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Round {
    round_id: String,
    format: RoundFormat,
    state: RoundState,
    holes: Vec<Hole>,
    hole_count: HoleCount,
    points_table: Vec<f64>,
    handicaps: HashMap<String, i32, RandomState>,
    scorecards: HashMap<String, Scorecard, RandomState>,
    /// Registration order; standings input order is kept stable across
    /// recomputes so fully tied rounds list participants predictably.
    roster: Vec<String>,
    standings: Vec<RoundPoints>,
    started_at: Option<String>,
    completed_at: Option<String>,
}

impl Round {
    /// Builds an upcoming round over the given course. The roster must be
    /// 9 or 18 holes with stroke indexes forming a permutation of 1..=N;
    /// this is where course data imported upstream gets checked.
    pub fn new(
        round_id: impl Into<String>,
        format: RoundFormat,
        holes: Vec<Hole>,
    ) -> Result<Self, CoreError> {
        let Some(hole_count) = HoleCount::from_len(holes.len()) else {
            return Err(CoreError::InvalidCourse(format!(
                "expected 9 or 18 holes, got {}",
                holes.len()
            )));
        };

        let mut seen = vec![false; holes.len()];
        for hole in &holes {
            let idx = hole.stroke_index as usize;
            if idx == 0 || idx > holes.len() || seen[idx - 1] {
                return Err(CoreError::InvalidCourse(format!(
                    "stroke index {} out of range or repeated",
                    hole.stroke_index
                )));
            }
            seen[idx - 1] = true;
        }

        Ok(Round {
            round_id: round_id.into(),
            format,
            state: RoundState::Upcoming,
            holes,
            hole_count,
            points_table: DEFAULT_POINTS_TABLE.to_vec(),
            handicaps: HashMap::default(),
            scorecards: HashMap::default(),
            roster: Vec::new(),
            standings: Vec::new(),
            started_at: None,
            completed_at: None,
        })
    }

    pub fn add_player(
        &mut self,
        player_id: impl Into<String>,
        handicap: i32,
    ) -> Result<(), CoreError> {
        let player_id = player_id.into();
        let card = Scorecard::for_player(self.round_id.clone(), player_id, self.holes.len());
        self.register(card, handicap)
    }

    pub fn add_team(&mut self, team_id: impl Into<String>, handicap: i32) -> Result<(), CoreError> {
        let team_id = team_id.into();
        let card = Scorecard::for_team(self.round_id.clone(), team_id, self.holes.len());
        self.register(card, handicap)
    }

    fn register(&mut self, card: Scorecard, handicap: i32) -> Result<(), CoreError> {
        let id = card.participant_id().to_string();
        if self.scorecards.contains_key(&id) {
            return Err(CoreError::DuplicateParticipant(id));
        }
        self.handicaps.insert(id.clone(), handicap);
        self.roster.push(id.clone());
        self.scorecards.insert(id, card);
        self.recompute_standings();
        Ok(())
    }

    /// Sets or clears one hole on a participant's card, then rebuilds the
    /// round's standings. Runs regardless of round state; late edits to a
    /// completed round just reshuffle the standings again.
    pub fn enter_stroke(
        &mut self,
        participant_id: &str,
        hole_index: usize,
        strokes: Option<u32>,
    ) -> Result<&Scorecard, CoreError> {
        if hole_index >= self.holes.len() {
            return Err(CoreError::HoleOutOfRange {
                hole_index,
                holes: self.holes.len(),
            });
        }
        let handicap = *self
            .handicaps
            .get(participant_id)
            .ok_or_else(|| CoreError::UnknownParticipant(participant_id.to_string()))?;
        let card = self
            .scorecards
            .get_mut(participant_id)
            .ok_or_else(|| CoreError::UnknownParticipant(participant_id.to_string()))?;

        apply_stroke_entry(
            card,
            hole_index,
            strokes,
            &self.holes,
            self.hole_count,
            handicap,
            self.format,
        );
        log::debug!(
            "round {}: {} hole {} -> {:?}",
            self.round_id,
            participant_id,
            hole_index + 1,
            strokes
        );

        self.recompute_standings();
        Ok(&self.scorecards[participant_id])
    }

    fn recompute_standings(&mut self) {
        let cards: Vec<Scorecard> = self
            .roster
            .iter()
            .filter_map(|id| self.scorecards.get(id).cloned())
            .collect();
        self.standings = award_points(&cards, self.format, &self.points_table);
        log::debug!(
            "round {}: standings rebuilt over {} scorecards",
            self.round_id,
            cards.len()
        );
    }

    pub fn start(&mut self) -> Result<(), CoreError> {
        self.transition(RoundState::Upcoming, RoundState::Active)?;
        self.started_at = Some(chrono::Utc::now().to_rfc3339());
        Ok(())
    }

    pub fn complete(&mut self) -> Result<(), CoreError> {
        self.transition(RoundState::Active, RoundState::Completed)?;
        self.completed_at = Some(chrono::Utc::now().to_rfc3339());
        Ok(())
    }

    /// A completed round may be reopened for corrections; it goes back to
    /// upcoming and must be started again.
    pub fn reopen(&mut self) -> Result<(), CoreError> {
        self.transition(RoundState::Completed, RoundState::Upcoming)?;
        self.started_at = None;
        self.completed_at = None;
        Ok(())
    }

    fn transition(&mut self, from: RoundState, to: RoundState) -> Result<(), CoreError> {
        if self.state != from {
            return Err(CoreError::InvalidTransition {
                from: self.state,
                to,
            });
        }
        self.state = to;
        Ok(())
    }

    /// Replaces the points table and reshuffles the standings under it.
    pub fn set_points_table(&mut self, points_table: Vec<f64>) {
        self.points_table = points_table;
        self.recompute_standings();
    }

    pub fn line_scores(&self, participant_id: &str) -> Result<Vec<LineScore>, CoreError> {
        let handicap = *self
            .handicaps
            .get(participant_id)
            .ok_or_else(|| CoreError::UnknownParticipant(participant_id.to_string()))?;
        let card = self
            .scorecards
            .get(participant_id)
            .ok_or_else(|| CoreError::UnknownParticipant(participant_id.to_string()))?;
        Ok(line_scores(card, &self.holes, self.hole_count, handicap))
    }

    #[must_use]
    pub fn scorecard(&self, participant_id: &str) -> Option<&Scorecard> {
        self.scorecards.get(participant_id)
    }

    #[must_use]
    pub fn standings(&self) -> &[RoundPoints] {
        &self.standings
    }

    #[must_use]
    pub fn round_id(&self) -> &str {
        &self.round_id
    }

    #[must_use]
    pub fn format(&self) -> RoundFormat {
        self.format
    }

    #[must_use]
    pub fn state(&self) -> RoundState {
        self.state
    }

    #[must_use]
    pub fn holes(&self) -> &[Hole] {
        &self.holes
    }

    #[must_use]
    pub fn hole_count(&self) -> HoleCount {
        self.hole_count
    }

    #[must_use]
    pub fn started_at(&self) -> Option<&str> {
        self.started_at.as_deref()
    }

    #[must_use]
    pub fn completed_at(&self) -> Option<&str> {
        self.completed_at.as_deref()
    }
}
