use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScoringError {
    /// The requested scoring goal has no weight profile.
    InvalidGoal { goal: String },
}

impl fmt::Display for ScoringError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoringError::InvalidGoal { goal } => write!(
                f,
                "Invalid goal '{}': expected one of 'muscle_gain', 'fat_loss'",
                goal
            ),
        }
    }
}

impl Error for ScoringError {}
