use std::fmt;

/// Rejection outcomes for game actions. Every variant is recoverable: the
/// engine state is unchanged whenever one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoError {
    /// Point coordinates fall outside the board.
    NotOnBoard,
    /// Placement requested on an occupied point.
    Overwrite,
    /// Placement would leave the placed group with no liberties and
    /// captures nothing.
    Suicide,
    /// Action submitted by the color whose turn it is not.
    OutOfTurn,
    /// Action submitted after the game has ended.
    GameOver,
}

impl fmt::Display for GoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GoError::NotOnBoard => write!(f, "not on board"),
            GoError::Overwrite => write!(f, "overwrite"),
            GoError::Suicide => write!(f, "suicide"),
            GoError::OutOfTurn => write!(f, "out of turn"),
            GoError::GameOver => write!(f, "game over"),
        }
    }
}

impl std::error::Error for GoError {}
