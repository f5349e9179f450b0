//! Depth-first minimax with alpha-beta pruning.
//!
//! The board argument doubles as scratch space: each trial placement is
//! reverted before the next sibling is tried, so the board is unchanged when
//! `search` returns.

use crate::board::Board;
use crate::common::{Cell, Mark};
use crate::config::{BOARD_CELLS, WIN_SCORE};

/// Lower bound used as the initial alpha.
pub const NEG_INF: i32 = i32::MIN;
/// Upper bound used as the initial beta.
pub const POS_INF: i32 = i32::MAX;

/// Score `board` from `searcher`'s point of view.
///
/// Wins score `10 - depth` and losses `depth - 10`, so quicker wins and
/// slower losses rank higher. A full board without a winner scores zero.
/// Children are visited in ascending index order and a branch is abandoned
/// as soon as `beta <= alpha`.
pub fn search(
    board: &mut Board,
    depth: i32,
    maximizing: bool,
    mut alpha: i32,
    mut beta: i32,
    searcher: Mark,
    opponent: Mark,
) -> i32 {
    match board.winner() {
        Some(m) if m == searcher => return WIN_SCORE - depth,
        Some(m) if m == opponent => return depth - WIN_SCORE,
        _ => {}
    }
    if board.is_full() {
        return 0;
    }

    if maximizing {
        let mut best = NEG_INF;
        for i in 0..BOARD_CELLS {
            if !board.cells()[i].is_empty() {
                continue;
            }
            board.set(i, Cell::from(searcher));
            let score = search(board, depth + 1, false, alpha, beta, searcher, opponent);
            board.set(i, Cell::Empty);
            best = best.max(score);
            alpha = alpha.max(score);
            if beta <= alpha {
                break;
            }
        }
        best
    } else {
        let mut best = POS_INF;
        for i in 0..BOARD_CELLS {
            if !board.cells()[i].is_empty() {
                continue;
            }
            board.set(i, Cell::from(opponent));
            let score = search(board, depth + 1, true, alpha, beta, searcher, opponent);
            board.set(i, Cell::Empty);
            best = best.min(score);
            beta = beta.min(score);
            if beta <= alpha {
                break;
            }
        }
        best
    }
}
