//! Commonly used types and utilities for ease of import.

pub use crate::ai::best_move;
pub use crate::minimax::search;
pub use crate::{AiPlayer, Board, Cell, Difficulty, Game, GameStatus, Mark, Player, Session};

#[cfg(feature = "std")]
pub use crate::{evaluate_moves, init_logging, print_board, CliPlayer};
