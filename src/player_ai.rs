use crate::{
    ai::{self, Difficulty},
    board::Board,
    common::Mark,
};
use rand::rngs::SmallRng;

use crate::player::Player;

/// Engine-backed player using minimax search at a fixed difficulty.
pub struct AiPlayer {
    difficulty: Difficulty,
}

impl AiPlayer {
    pub fn new(difficulty: Difficulty) -> Self {
        Self { difficulty }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
}

impl Default for AiPlayer {
    fn default() -> Self {
        Self::new(Difficulty::Unbeatable)
    }
}

impl Player for AiPlayer {
    fn select_move(&mut self, rng: &mut SmallRng, board: &Board, mark: Mark) -> Option<usize> {
        ai::best_move(board, mark, mark.opponent(), self.difficulty, rng)
    }
}
