use serde::{Deserialize, Serialize};
use std::fmt;

/// Points handed out by finishing position when no custom table is set.
pub const DEFAULT_POINTS_TABLE: [f64; 10] = [15.0, 12.0, 10.0, 8.0, 7.0, 6.0, 5.0, 4.0, 3.0, 2.0];

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RoundFormat {
    Stableford,
    Handicap,
    Scramble,
    Bestball,
}

impl fmt::Display for RoundFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoundFormat::Stableford => write!(f, "stableford"),
            RoundFormat::Handicap => write!(f, "handicap"),
            RoundFormat::Scramble => write!(f, "scramble"),
            RoundFormat::Bestball => write!(f, "bestball"),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RoundState {
    Upcoming,
    Active,
    Completed,
}

impl fmt::Display for RoundState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoundState::Upcoming => write!(f, "upcoming"),
            RoundState::Active => write!(f, "active"),
            RoundState::Completed => write!(f, "completed"),
        }
    }
}

/// Placing and points for one participant, rebuilt from scratch every time
/// any scorecard in the round changes. Tied participants share the same
/// placing number and the averaged points for the slots they occupy.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct RoundPoints {
    pub participant_id: String,
    pub placing: usize,
    pub points_awarded: f64,
}
