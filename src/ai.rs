// Move selection: a difficulty gate in front of an exhaustive search.
// Uses no_std and avoids heap allocations on the `best_move` path.

use crate::{
    board::Board,
    common::{BoardError, Cell, Mark},
    config::{BOARD_CELLS, EASY_RANDOM_MOVE_PROBABILITY, MEDIUM_RANDOM_MOVE_PROBABILITY},
    minimax::{search, NEG_INF, POS_INF},
};
use rand::Rng;

/// How often the engine abandons the search for a random legal move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize, clap::ValueEnum))]
pub enum Difficulty {
    Easy,
    Medium,
    #[default]
    Unbeatable,
}

impl Difficulty {
    /// Probability of playing a uniformly random move instead of searching.
    pub fn random_move_probability(self) -> f64 {
        match self {
            Difficulty::Easy => EASY_RANDOM_MOVE_PROBABILITY,
            Difficulty::Medium => MEDIUM_RANDOM_MOVE_PROBABILITY,
            Difficulty::Unbeatable => 0.0,
        }
    }
}

impl core::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Unbeatable => "unbeatable",
        };
        f.write_str(name)
    }
}

impl core::str::FromStr for Difficulty {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("easy") {
            Ok(Difficulty::Easy)
        } else if s.eq_ignore_ascii_case("medium") {
            Ok(Difficulty::Medium)
        } else if s.eq_ignore_ascii_case("unbeatable") || s.eq_ignore_ascii_case("hard") {
            Ok(Difficulty::Unbeatable)
        } else {
            Err(BoardError::Parse)
        }
    }
}

/// Source of the randomness consumed by [`best_move`].
///
/// Every [`rand::Rng`] implements it; tests can plug in a scripted sequence.
pub trait RandomSource {
    /// Uniform value in `[0, 1)`.
    fn next_unit(&mut self) -> f64;
    /// Uniform index in `0..len`. `len` is never zero.
    fn pick(&mut self, len: usize) -> usize;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn next_unit(&mut self) -> f64 {
        self.random::<f64>()
    }

    fn pick(&mut self, len: usize) -> usize {
        self.random_range(0..len)
    }
}

/// Root score of playing `searcher` at `index`, with the opponent to reply.
fn score_move(scratch: &mut Board, index: usize, searcher: Mark, opponent: Mark) -> i32 {
    scratch.set(index, Cell::from(searcher));
    let score = search(scratch, 0, false, NEG_INF, POS_INF, searcher, opponent);
    scratch.set(index, Cell::Empty);
    score
}

/// Choose a move for `searcher`, or `None` when the board has no empty cell.
///
/// Unless the difficulty gate fires, every empty cell is scored in ascending
/// order and the first cell with the highest score is returned. `board` is
/// never modified; the search runs on a copy.
pub fn best_move<R: RandomSource + ?Sized>(
    board: &Board,
    searcher: Mark,
    opponent: Mark,
    difficulty: Difficulty,
    rng: &mut R,
) -> Option<usize> {
    let mut moves = [0usize; BOARD_CELLS];
    let mut len = 0;
    for i in board.available_moves() {
        moves[len] = i;
        len += 1;
    }
    if len == 0 {
        return None;
    }

    let p = difficulty.random_move_probability();
    if p > 0.0 && rng.next_unit() < p {
        let choice = moves[rng.pick(len)];
        log::debug!("{} engine plays random move {}", difficulty, choice);
        return Some(choice);
    }

    let mut scratch = *board;
    let mut best_index = moves[0];
    let mut best_score = NEG_INF;
    for &index in &moves[..len] {
        let score = score_move(&mut scratch, index, searcher, opponent);
        log::trace!("candidate {} for {} scored {}", index, searcher, score);
        if score > best_score {
            best_score = score;
            best_index = index;
        }
    }
    log::debug!(
        "{} engine picks {} for {} (score {})",
        difficulty,
        best_index,
        searcher,
        best_score
    );
    Some(best_index)
}

/// Root scores of every legal move for `searcher`, in ascending index order.
#[cfg(feature = "std")]
pub fn evaluate_moves(board: &Board, searcher: Mark, opponent: Mark) -> std::vec::Vec<(usize, i32)> {
    let mut scratch = *board;
    board
        .available_moves()
        .map(|index| (index, score_move(&mut scratch, index, searcher, opponent)))
        .collect()
}
