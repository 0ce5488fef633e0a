use crate::model::RoundState;
use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum CoreError {
    #[error("invalid course: {0}")]
    InvalidCourse(String),
    #[error("unknown participant: {0}")]
    UnknownParticipant(String),
    #[error("participant already has a scorecard: {0}")]
    DuplicateParticipant(String),
    #[error("hole index {hole_index} out of range for a {holes}-hole round")]
    HoleOutOfRange { hole_index: usize, holes: usize },
    #[error("round cannot move from {from} to {to}")]
    InvalidTransition { from: RoundState, to: RoundState },
}
