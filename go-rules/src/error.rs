use std::fmt;

/// Recoverable, user-facing rejections. Every one of them leaves the game
/// state untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoError {
    OutOfBounds,
    OccupiedCell,
    KoViolation,
    SuicideMove,
    EmptyHistory,
}

impl fmt::Display for GoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GoError::OutOfBounds => write!(f, "point is off the board"),
            GoError::OccupiedCell => write!(f, "point is already occupied"),
            GoError::KoViolation => write!(f, "immediate ko recapture is forbidden"),
            GoError::SuicideMove => write!(f, "move would leave its own group without liberties"),
            GoError::EmptyHistory => write!(f, "no move to undo"),
        }
    }
}

impl std::error::Error for GoError {}
