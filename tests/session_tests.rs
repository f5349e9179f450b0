use rand::rngs::SmallRng;
use rand::SeedableRng;
use tictactoe::{BoardError, Difficulty, GameStatus, Mark, Scoreboard, Session};

#[test]
fn test_finished_game_is_counted_once() {
    let mut session = Session::new(Mark::X, Difficulty::Unbeatable);
    let mut rng = SmallRng::seed_from_u64(0);
    // The human takes the first free cell each turn; the engine must not lose.
    while !session.game().is_over() {
        if session.is_human_turn() {
            let i = session.game().board().available_moves().next().unwrap();
            session.human_move(i).unwrap();
        } else {
            assert!(session.ai_move(&mut rng).unwrap().is_some());
        }
    }
    let score = session.score();
    assert_eq!(score.player_wins, 0);
    assert_eq!(score.ai_wins + score.draws, 1);
    // Finished games do not accept more moves or change the tally.
    assert_eq!(session.human_move(0), Err(BoardError::GameOver));
    assert_eq!(session.ai_move(&mut rng), Ok(None));
    assert_eq!(session.score(), score);
}

#[test]
fn test_turn_order_is_enforced() {
    let mut session = Session::new(Mark::O, Difficulty::Unbeatable);
    let mut rng = SmallRng::seed_from_u64(0);
    assert!(!session.is_human_turn());
    assert_eq!(session.human_move(4), Err(BoardError::NotYourTurn));

    let opening = session.ai_move(&mut rng).unwrap().unwrap();
    assert_eq!(session.game().board().cells()[opening].mark(), Some(Mark::X));
    assert!(session.is_human_turn());
    assert_eq!(session.ai_move(&mut rng), Ok(None));
    assert_eq!(session.human_move(opening), Err(BoardError::CellOccupied));
}

#[test]
fn test_restart_keeps_score_and_reset_clears_it() {
    let mut session = Session::new(Mark::X, Difficulty::Unbeatable);
    let mut rng = SmallRng::seed_from_u64(4);
    while !session.game().is_over() {
        if session.is_human_turn() {
            let i = session.game().board().available_moves().last().unwrap();
            session.human_move(i).unwrap();
        } else {
            session.ai_move(&mut rng).unwrap();
        }
    }
    let after_first = session.score();
    assert_ne!(after_first, Scoreboard::default());

    session.restart();
    assert_eq!(session.game().status(), GameStatus::InProgress);
    assert!(session.game().board().available_moves().count() == 9);
    assert_eq!(session.score(), after_first);

    session.full_reset();
    assert_eq!(session.score(), Scoreboard::default());
    assert_eq!(session.human(), Mark::X);
    assert_eq!(session.ai(), Mark::O);
}

#[test]
fn test_engine_win_is_tallied() {
    let mut session = Session::new(Mark::O, Difficulty::Unbeatable);
    let mut rng = SmallRng::seed_from_u64(0);
    // Engine opens at 0. Human answers on the edge at 1, a losing reply.
    assert_eq!(session.ai_move(&mut rng), Ok(Some(0)));
    session.human_move(1).unwrap();
    while !session.game().is_over() {
        if session.is_human_turn() {
            let i = session.game().board().available_moves().last().unwrap();
            session.human_move(i).unwrap();
        } else {
            session.ai_move(&mut rng).unwrap();
        }
    }
    assert_eq!(session.game().status(), GameStatus::Won(Mark::X));
    assert_eq!(
        session.score(),
        Scoreboard {
            player_wins: 0,
            ai_wins: 1,
            draws: 0
        }
    );
}
