use crate::{
    ai::{best_move, Difficulty, RandomSource},
    board::Board,
    common::{BoardError, Mark},
    player::Player,
    player_ai::AiPlayer,
};
use rand::rngs::SmallRng;

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    InProgress,
    Won(Mark),
    Draw,
}

/// Serializable game state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    pub board: Board,
    pub to_move: Mark,
    pub status: GameStatus,
    pub last_move: Option<usize>,
    pub winning_line: Option<[usize; 3]>,
}

/// A single game: board, turn order and outcome. X always moves first.
pub struct Game {
    board: Board,
    to_move: Mark,
    status: GameStatus,
    last_move: Option<usize>,
    winning_line: Option<[usize; 3]>,
}

impl Game {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Mark::X,
            status: GameStatus::InProgress,
            last_move: None,
            winning_line: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn last_move(&self) -> Option<usize> {
        self.last_move
    }

    pub fn winning_line(&self) -> Option<[usize; 3]> {
        self.winning_line
    }

    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    /// Place the side-to-move's mark at `index` and advance the game.
    pub fn play(&mut self, index: usize) -> Result<GameStatus, BoardError> {
        if self.is_over() {
            return Err(BoardError::GameOver);
        }
        let mark = self.to_move;
        self.board.place(index, mark)?;
        self.last_move = Some(index);

        if let Some(winner) = self.board.winner() {
            self.winning_line = self.board.winning_line();
            self.status = GameStatus::Won(winner);
        } else if self.board.is_full() {
            self.status = GameStatus::Draw;
        } else {
            self.to_move = mark.opponent();
        }
        Ok(self.status)
    }

    /// Generate a serializable snapshot of the current state.
    pub fn state(&self) -> GameState {
        GameState {
            board: self.board,
            to_move: self.to_move,
            status: self.status,
            last_move: self.last_move,
            winning_line: self.winning_line,
        }
    }

    /// Restore a game from a previously saved state.
    ///
    /// Only the board is trusted. Status, winning line and side to move are
    /// derived from it again, and a `last_move` pointing at an empty cell is
    /// dropped.
    pub fn from_state(state: GameState) -> Self {
        let board = state.board;
        let winning_line = board.winning_line();
        let (status, to_move) = match board.winner() {
            Some(winner) => (GameStatus::Won(winner), winner),
            None if board.is_full() => (GameStatus::Draw, board.next_to_move().opponent()),
            None => (GameStatus::InProgress, board.next_to_move()),
        };
        let last_move = state
            .last_move
            .filter(|&i| board.cell(i).map_or(false, |c| !c.is_empty()));
        Self {
            board,
            to_move,
            status,
            last_move,
            winning_line,
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

/// Results tallied over one session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Scoreboard {
    pub player_wins: u32,
    pub ai_wins: u32,
    pub draws: u32,
}

/// Human-versus-engine session with a running scoreboard.
pub struct Session {
    human: Mark,
    difficulty: Difficulty,
    game: Game,
    score: Scoreboard,
}

impl Session {
    pub fn new(human: Mark, difficulty: Difficulty) -> Self {
        Self {
            human,
            difficulty,
            game: Game::new(),
            score: Scoreboard::default(),
        }
    }

    pub fn human(&self) -> Mark {
        self.human
    }

    pub fn ai(&self) -> Mark {
        self.human.opponent()
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn score(&self) -> Scoreboard {
        self.score
    }

    pub fn is_human_turn(&self) -> bool {
        !self.game.is_over() && self.game.to_move() == self.human
    }

    /// Apply the human's move.
    pub fn human_move(&mut self, index: usize) -> Result<GameStatus, BoardError> {
        if self.game.is_over() {
            return Err(BoardError::GameOver);
        }
        if self.game.to_move() != self.human {
            return Err(BoardError::NotYourTurn);
        }
        let status = self.game.play(index)?;
        self.tally(status);
        Ok(status)
    }

    /// Let the engine pick and apply a move. Returns the chosen index, or
    /// `None` if it is not the engine's turn or no move exists.
    pub fn ai_move<R: RandomSource + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<Option<usize>, BoardError> {
        if self.game.is_over() || self.game.to_move() != self.ai() {
            return Ok(None);
        }
        let Some(index) = best_move(self.game.board(), self.ai(), self.human, self.difficulty, rng)
        else {
            return Ok(None);
        };
        let status = self.game.play(index)?;
        self.tally(status);
        Ok(Some(index))
    }

    /// Start a new game, keeping the scoreboard.
    pub fn restart(&mut self) {
        self.game = Game::new();
    }

    /// Start a new game and clear the scoreboard.
    pub fn full_reset(&mut self) {
        self.restart();
        self.score = Scoreboard::default();
    }

    fn tally(&mut self, status: GameStatus) {
        match status {
            GameStatus::InProgress => {}
            GameStatus::Won(m) if m == self.human => self.score.player_wins += 1,
            GameStatus::Won(_) => self.score.ai_wins += 1,
            GameStatus::Draw => self.score.draws += 1,
        }
    }
}

/// Play one game to completion between two players, X first. Stops early
/// if a player returns no move.
pub fn play_match(
    x: &mut dyn Player,
    o: &mut dyn Player,
    rng: &mut SmallRng,
) -> Result<Game, BoardError> {
    let mut game = Game::new();
    while !game.is_over() {
        let mark = game.to_move();
        let choice = match mark {
            Mark::X => x.select_move(rng, game.board(), mark),
            Mark::O => o.select_move(rng, game.board(), mark),
        };
        let Some(index) = choice else { break };
        game.play(index)?;
        x.handle_move(index, mark);
        o.handle_move(index, mark);
    }
    Ok(game)
}

/// Outcome counts for a batch of engine-versus-engine games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchTally {
    pub games: u32,
    pub x_wins: u32,
    pub o_wins: u32,
    pub draws: u32,
}

/// Run `games` engine-versus-engine games with the given difficulties.
pub fn simulate(
    games: u32,
    x_difficulty: Difficulty,
    o_difficulty: Difficulty,
    rng: &mut SmallRng,
) -> Result<MatchTally, BoardError> {
    let mut x = AiPlayer::new(x_difficulty);
    let mut o = AiPlayer::new(o_difficulty);
    let mut tally = MatchTally::default();
    for _ in 0..games {
        let game = play_match(&mut x, &mut o, rng)?;
        tally.games += 1;
        match game.status() {
            GameStatus::Won(Mark::X) => tally.x_wins += 1,
            GameStatus::Won(Mark::O) => tally.o_wins += 1,
            GameStatus::Draw => tally.draws += 1,
            GameStatus::InProgress => {}
        }
    }
    log::debug!("simulation finished: {:?}", tally);
    Ok(tally)
}
