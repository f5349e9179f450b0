use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};
use tictactoe::{Board, Cell, Game, Mark};

/// Board reached by alternating random legal moves, stopping at a win.
fn random_game_board(seed: u64, plies: usize) -> Board {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut game = Game::new();
    for _ in 0..plies {
        if game.is_over() {
            break;
        }
        let moves: Vec<usize> = game.board().available_moves().collect();
        let i = moves[rng.random_range(0..moves.len())];
        game.play(i).unwrap();
    }
    *game.board()
}

fn any_cell() -> impl Strategy<Value = Cell> {
    prop_oneof![Just(Cell::Empty), Just(Cell::X), Just(Cell::O)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn winning_line_agrees_with_winner(cells in proptest::array::uniform9(any_cell())) {
        let board = Board::from_cells(cells);
        match (board.winner(), board.winning_line()) {
            (Some(mark), Some(line)) => {
                for i in line {
                    prop_assert_eq!(board.cells()[i], Cell::from(mark));
                }
            }
            (None, None) => {}
            other => prop_assert!(false, "winner and line disagree: {:?}", other),
        }
    }

    #[test]
    fn is_full_iff_no_empty_cell(cells in proptest::array::uniform9(any_cell())) {
        let board = Board::from_cells(cells);
        prop_assert_eq!(board.is_full(), !cells.contains(&Cell::Empty));
        prop_assert_eq!(board.is_full(), board.available_moves().next().is_none());
    }

    #[test]
    fn played_games_are_consistent(seed in any::<u64>(), plies in 0usize..=9) {
        let board = random_game_board(seed, plies);
        let x = board.count(Mark::X);
        let o = board.count(Mark::O);
        prop_assert!(x == o || x == o + 1);
        if board.winner().is_none() && !board.is_full() {
            prop_assert!(board.available_moves().count() > 0);
        }
        if let Some(mark) = board.winner() {
            // The winner moved last.
            let expected = if x > o { Mark::X } else { Mark::O };
            prop_assert_eq!(mark, expected);
        }
    }
}
