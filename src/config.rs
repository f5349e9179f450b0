pub const BOARD_WIDTH: usize = 3;
pub const BOARD_CELLS: usize = BOARD_WIDTH * BOARD_WIDTH;

/// Every winning triple: rows, then columns, then diagonals. The order is
/// observable through `Board::winner` and `Board::winning_line`.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Score of a win found at depth zero. Deeper wins score `WIN_SCORE - depth`.
pub const WIN_SCORE: i32 = 10;

/// Chance that an `Easy` engine ignores the search and plays at random.
pub const EASY_RANDOM_MOVE_PROBABILITY: f64 = 0.7;
/// Chance that a `Medium` engine ignores the search and plays at random.
pub const MEDIUM_RANDOM_MOVE_PROBABILITY: f64 = 0.4;
