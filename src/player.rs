use crate::{board::Board, common::Mark};
use rand::rngs::SmallRng;

/// Interface implemented by different player types.
pub trait Player {
    /// Choose a cell for `mark` on `board`. `None` means the player has no
    /// move to offer (full board, or a human who quit).
    fn select_move(&mut self, rng: &mut SmallRng, board: &Board, mark: Mark) -> Option<usize>;

    /// Inform the player of a move made by either side.
    fn handle_move(&mut self, _index: usize, _mark: Mark) {}
}
