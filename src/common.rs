//! Common types for tic-tac-toe: marks, cells and board errors.

/// One of the two symbols a player can place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize, clap::ValueEnum))]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// The other side.
    pub fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

impl core::fmt::Display for Mark {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl core::str::FromStr for Mark {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "x" | "X" => Ok(Mark::X),
            "o" | "O" => Ok(Mark::O),
            _ => Err(BoardError::Parse),
        }
    }
}

/// Content of a single board square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    #[default]
    Empty,
    X,
    O,
}

impl Cell {
    /// The mark occupying this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::X => Some(Mark::X),
            Cell::O => Some(Mark::O),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    pub fn symbol(self) -> char {
        self.mark().map_or('.', Mark::symbol)
    }
}

impl From<Mark> for Cell {
    fn from(mark: Mark) -> Self {
        match mark {
            Mark::X => Cell::X,
            Mark::O => Cell::O,
        }
    }
}

/// Errors returned by board and game operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Specified index is outside 0..9.
    InvalidIndex,
    /// Target cell already holds a mark.
    CellOccupied,
    /// Move attempted after the game finished.
    GameOver,
    /// Move attempted by the side that is not to move.
    NotYourTurn,
    /// Text could not be read as a board, mark or difficulty.
    Parse,
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::InvalidIndex => write!(f, "Index is out of range"),
            BoardError::CellOccupied => write!(f, "Cell is already occupied"),
            BoardError::GameOver => write!(f, "Game is already over"),
            BoardError::NotYourTurn => write!(f, "It is not this player's turn"),
            BoardError::Parse => write!(f, "Unable to parse input"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
