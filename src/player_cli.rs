#![cfg(feature = "std")]

use std::io::{self, BufRead, Write};
use std::string::String;

use crate::{
    ai::{self, Difficulty},
    board::Board,
    common::{Cell, Mark},
    config::BOARD_WIDTH,
};
use rand::rngs::SmallRng;

use crate::player::Player;

/// Human player reading cell numbers (1-9) from stdin.
pub struct CliPlayer {
    hints: bool,
}

impl CliPlayer {
    pub fn new() -> Self {
        Self { hints: true }
    }

    /// Do not show the engine's suggestion in the prompt.
    pub fn without_hints() -> Self {
        Self { hints: false }
    }
}

impl Default for CliPlayer {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a 1-based cell number into a board index.
pub fn parse_cell(input: &str) -> Option<usize> {
    let n: usize = input.trim().parse().ok()?;
    if (1..=9).contains(&n) {
        Some(n - 1)
    } else {
        None
    }
}

/// Print the board next to a numbered guide. Cells on `highlight` are
/// bracketed.
pub fn print_board(board: &Board, highlight: Option<[usize; 3]>) {
    for row in 0..BOARD_WIDTH {
        if row > 0 {
            std::println!(" ---+---+---     ---+---+---");
        }
        let mut line = String::from(" ");
        for col in 0..BOARD_WIDTH {
            let i = row * BOARD_WIDTH + col;
            let cell = board.cells()[i];
            let marked = highlight.map_or(false, |l| l.contains(&i));
            if marked {
                line.push_str(&std::format!("[{}]", cell.symbol()));
            } else {
                line.push_str(&std::format!(" {} ", cell.symbol()));
            }
            if col + 1 < BOARD_WIDTH {
                line.push('|');
            }
        }
        line.push_str("     ");
        for col in 0..BOARD_WIDTH {
            let i = row * BOARD_WIDTH + col;
            let label = if board.cells()[i] == Cell::Empty {
                std::format!("{}", i + 1)
            } else {
                String::from(" ")
            };
            line.push_str(&std::format!(" {} ", label));
            if col + 1 < BOARD_WIDTH {
                line.push('|');
            }
        }
        std::println!("{}", line);
    }
}

/// Prompt on `output` until `input` yields a legal cell for `mark`.
///
/// An empty line accepts `hint`. `q` or end of input returns `Ok(None)`.
pub fn read_move<I: BufRead, W: Write>(
    input: &mut I,
    output: &mut W,
    board: &Board,
    mark: Mark,
    hint: Option<usize>,
) -> io::Result<Option<usize>> {
    loop {
        match hint {
            Some(h) => write!(output, "Your move as {} (1-9, q to quit) [{}]: ", mark, h + 1)?,
            None => write!(output, "Your move as {} (1-9, q to quit): ", mark)?,
        }
        output.flush()?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let line = line.trim();
        if line.eq_ignore_ascii_case("q") {
            return Ok(None);
        }
        if line.is_empty() {
            if hint.is_some() {
                return Ok(hint);
            }
            continue;
        }
        match parse_cell(line) {
            Some(i) if board.cells()[i].is_empty() => return Ok(Some(i)),
            Some(_) => writeln!(output, "That cell is taken")?,
            None => writeln!(output, "Invalid cell")?,
        }
    }
}

impl Player for CliPlayer {
    fn select_move(&mut self, rng: &mut SmallRng, board: &Board, mark: Mark) -> Option<usize> {
        if board.available_moves().next().is_none() {
            return None;
        }
        let hint = if self.hints {
            ai::best_move(board, mark, mark.opponent(), Difficulty::Unbeatable, rng)
        } else {
            None
        };
        let stdin = io::stdin();
        let stdout = io::stdout();
        match read_move(&mut stdin.lock(), &mut stdout.lock(), board, mark, hint) {
            Ok(choice) => choice,
            Err(e) => {
                log::warn!("console input failed: {}", e);
                None
            }
        }
    }

    fn handle_move(&mut self, index: usize, mark: Mark) {
        std::println!("{} played {}", mark, index + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    /// Writer whose flush always fails.
    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    #[test]
    fn read_move_skips_bad_input() {
        let board: Board = "X.. ... ...".parse().unwrap();
        let mut input = Cursor::new("abc\n1\n5\n");
        let mut output = Vec::new();
        let choice = read_move(&mut input, &mut output, &board, Mark::O, None).unwrap();
        assert_eq!(choice, Some(4));
        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("Invalid cell"));
        assert!(text.contains("That cell is taken"));
    }

    #[test]
    fn read_move_accepts_hint_and_quit() {
        let board = Board::new();
        let mut output = Vec::new();
        let mut input = Cursor::new("\n");
        assert_eq!(read_move(&mut input, &mut output, &board, Mark::X, Some(2)).unwrap(), Some(2));
        let mut input = Cursor::new("q\n");
        assert_eq!(read_move(&mut input, &mut output, &board, Mark::X, Some(2)).unwrap(), None);
        let mut input = Cursor::new("");
        assert_eq!(read_move(&mut input, &mut output, &board, Mark::X, None).unwrap(), None);
    }

    #[test]
    fn read_move_reports_flush_failure() {
        let board = Board::new();
        let mut input = Cursor::new("5\n");
        let err = read_move(&mut input, &mut BrokenPipe, &board, Mark::X, None).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn cells_are_one_based() {
        assert_eq!(parse_cell("1"), Some(0));
        assert_eq!(parse_cell(" 9\n"), Some(8));
        assert_eq!(parse_cell("0"), None);
        assert_eq!(parse_cell("10"), None);
        assert_eq!(parse_cell("x"), None);
    }
}
