use serde::{Deserialize, Serialize};

/// Per-hole result row for score views. Only played holes get a line.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct LineScore {
    pub hole_number: u32,
    pub par: u32,
    pub gross: u32,
    pub net: i32,
    pub points: i32,
    pub display: ScoreDisplay,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub enum ScoreDisplay {
    Albatross,
    Eagle,
    Birdie,
    Par,
    Bogey,
    DoubleBogey,
    TripleBogey,
    QuadrupleBogey,
}

impl ScoreDisplay {
    /// Maps a net-to-par difference onto its display name. Anything past
    /// the ends of the table clamps to the nearest entry.
    #[must_use]
    pub fn from_i32(i: i32) -> Self {
        match i {
            i32::MIN..=-3 => ScoreDisplay::Albatross,
            -2 => ScoreDisplay::Eagle,
            -1 => ScoreDisplay::Birdie,
            0 => ScoreDisplay::Par,
            1 => ScoreDisplay::Bogey,
            2 => ScoreDisplay::DoubleBogey,
            3 => ScoreDisplay::TripleBogey,
            _ => ScoreDisplay::QuadrupleBogey,
        }
    }
}

impl From<i32> for ScoreDisplay {
    fn from(value: i32) -> Self {
        Self::from_i32(value)
    }
}
