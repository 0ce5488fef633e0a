use serde::{Deserialize, Serialize};

/// One hole of a course. `stroke_index` is the difficulty rank, 1 = hardest.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Hole {
    pub hole_number: u32,
    pub par: u32,
    pub stroke_index: u32,
}

/// Rounds are played over 9 or 18 holes; handicap allocation depends on which.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoleCount {
    Nine,
    Eighteen,
}

impl HoleCount {
    #[must_use]
    pub fn holes(self) -> u32 {
        match self {
            HoleCount::Nine => 9,
            HoleCount::Eighteen => 18,
        }
    }

    #[must_use]
    pub fn from_len(len: usize) -> Option<Self> {
        match len {
            9 => Some(HoleCount::Nine),
            18 => Some(HoleCount::Eighteen),
            _ => None,
        }
    }
}
