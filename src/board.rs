//! Board representation and terminal-state evaluation.

use crate::common::{BoardError, Cell, Mark};
use crate::config::{BOARD_CELLS, BOARD_WIDTH, LINES};
use core::fmt;

/// A 3x3 grid stored in row-major order (`index = row * 3 + col`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    cells: [Cell; BOARD_CELLS],
}

impl Board {
    /// Create an empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; BOARD_CELLS],
        }
    }

    pub fn from_cells(cells: [Cell; BOARD_CELLS]) -> Self {
        Self { cells }
    }

    /// Immutable view of all nine cells.
    pub fn cells(&self) -> &[Cell; BOARD_CELLS] {
        &self.cells
    }

    pub fn cell(&self, index: usize) -> Result<Cell, BoardError> {
        self.cells
            .get(index)
            .copied()
            .ok_or(BoardError::InvalidIndex)
    }

    /// Place `mark` on an empty cell.
    pub fn place(&mut self, index: usize, mark: Mark) -> Result<(), BoardError> {
        let cell = self.cells.get_mut(index).ok_or(BoardError::InvalidIndex)?;
        if !cell.is_empty() {
            return Err(BoardError::CellOccupied);
        }
        *cell = Cell::from(mark);
        Ok(())
    }

    /// Unchecked write used by the search for trial placements and reverts.
    pub(crate) fn set(&mut self, index: usize, cell: Cell) {
        self.cells[index] = cell;
    }

    /// Empty cell indices in ascending order.
    pub fn available_moves(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_empty())
            .map(|(i, _)| i)
    }

    pub fn count(&self, mark: Mark) -> usize {
        let target = Cell::from(mark);
        self.cells.iter().filter(|&&c| c == target).count()
    }

    /// Side to move assuming X opened and turns alternated.
    pub fn next_to_move(&self) -> Mark {
        if self.count(Mark::X) > self.count(Mark::O) {
            Mark::O
        } else {
            Mark::X
        }
    }

    /// Mark owning the first completed line in `LINES` order.
    pub fn winner(&self) -> Option<Mark> {
        self.first_complete_line().map(|(mark, _)| mark)
    }

    /// Indices of the first completed line; agrees with [`Board::winner`].
    pub fn winning_line(&self) -> Option<[usize; 3]> {
        self.first_complete_line().map(|(_, line)| line)
    }

    /// Returns `true` when no cell is empty.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    fn first_complete_line(&self) -> Option<(Mark, [usize; 3])> {
        LINES.iter().find_map(|&[a, b, c]| {
            let mark = self.cells[a].mark()?;
            if self.cells[a] == self.cells[b] && self.cells[a] == self.cells[c] {
                Some((mark, [a, b, c]))
            } else {
                None
            }
        })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, chunk) in self.cells.chunks(BOARD_WIDTH).enumerate() {
            if row > 0 {
                writeln!(f, "---+---+---")?;
            }
            writeln!(
                f,
                " {} | {} | {} ",
                chunk[0].symbol(),
                chunk[1].symbol(),
                chunk[2].symbol()
            )?;
        }
        Ok(())
    }
}

/// Parses nine cell symbols (`X`, `O`, and `.`, `_` or `-` for empty).
/// Whitespace and `|` separators are ignored.
impl core::str::FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [Cell::Empty; BOARD_CELLS];
        let mut n = 0;
        for ch in s.chars().filter(|c| !c.is_whitespace() && *c != '|') {
            let cell = match ch {
                'X' | 'x' => Cell::X,
                'O' | 'o' => Cell::O,
                '.' | '_' | '-' => Cell::Empty,
                _ => return Err(BoardError::Parse),
            };
            if n == BOARD_CELLS {
                return Err(BoardError::Parse);
            }
            cells[n] = cell;
            n += 1;
        }
        if n != BOARD_CELLS {
            return Err(BoardError::Parse);
        }
        Ok(Board { cells })
    }
}
