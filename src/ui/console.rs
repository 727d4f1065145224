use std::io::{self, BufRead, Write};

use crossterm::style::Stylize;

use super::Command;
use crate::game::{Cell, GameOutcome, GameState};

/// Line-oriented game loop: print the board, read a command, apply it.
///
/// Generic over its input and output so it can run against stdin/stdout or
/// in-memory buffers.
pub struct Console<R, W> {
    state: GameState,
    input: R,
    output: W,
    color: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(state: GameState, input: R, output: W) -> Self {
        Console {
            state,
            input,
            output,
            color: true,
        }
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Run until the player quits or input ends
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.print_board()?;
            self.print_prompt()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output)?;
                return Ok(());
            }

            match Command::parse(&line) {
                Ok(Command::Quit) => return Ok(()),
                Ok(Command::Reset) => {
                    self.state.reset();
                    writeln!(self.output, "Game has been reset.")?;
                }
                Ok(Command::Drop(column)) => match self.state.play(column) {
                    Ok(Some(GameOutcome::Winner(player))) => {
                        writeln!(self.output, "{} won!", player.name())?;
                    }
                    Ok(Some(GameOutcome::Draw)) => writeln!(self.output, "It's a draw!")?,
                    Ok(None) => {}
                    Err(e) => writeln!(self.output, "{e}")?,
                },
                Err(e) => writeln!(self.output, "{e}")?,
            }
        }
    }

    fn print_board(&mut self) -> io::Result<()> {
        let color = self.color;
        let rendered = self
            .state
            .board()
            .render_with(|cell, symbol| paint(cell, symbol, color));
        writeln!(self.output, "{rendered}")
    }

    fn print_prompt(&mut self) -> io::Result<()> {
        if self.state.is_terminal() {
            write!(self.output, "Game over (Enter R to reset or Q to quit): ")?;
        } else {
            write!(
                self.output,
                "{}'s turn (Enter column number or R to reset): ",
                self.state.current_player().name()
            )?;
        }
        self.output.flush()
    }
}

fn paint(cell: Cell, symbol: String, color: bool) -> String {
    if !color {
        return symbol;
    }
    match cell {
        Cell::Empty => symbol,
        Cell::Red => symbol.red().to_string(),
        Cell::Yellow => symbol.yellow().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{BoardConfig, Player};
    use std::io::Cursor;

    fn run_session(state: GameState, input: &str) -> (GameState, String) {
        let mut output = Vec::new();
        let mut console = Console::new(state, Cursor::new(input.as_bytes()), &mut output)
            .with_color(false);
        console.run().unwrap();
        let state = console.state().clone();
        (state, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_plays_until_win() {
        let (state, output) = run_session(GameState::initial(), "0\n1\n0\n1\n0\n1\n0\n");
        assert_eq!(state.outcome(), Some(GameOutcome::Winner(Player::Red)));
        assert!(output.contains("Red's turn (Enter column number or R to reset): "));
        assert!(output.contains("Yellow's turn"));
        assert!(output.contains("Red won!"));
        assert!(output.contains("Game over (Enter R to reset or Q to quit): "));
    }

    #[test]
    fn test_reports_bad_input_and_keeps_turn() {
        let (state, output) = run_session(GameState::initial(), "x\n9\n-1\n\n");
        assert!(state.board().is_empty());
        assert_eq!(state.current_player(), Player::Red);
        assert!(output.contains("'x' is not a column number"));
        assert_eq!(output.matches("Invalid column").count(), 2);
        assert!(output.contains("no input, enter a column number"));
    }

    #[test]
    fn test_column_full_message() {
        let config = BoardConfig {
            cols: 2,
            rows: 1,
            required_to_win: 2,
        };
        let (state, output) = run_session(GameState::new(config).unwrap(), "0\n0\n");
        assert!(output.contains("Column is full"));
        assert_eq!(state.current_player(), Player::Yellow);
    }

    #[test]
    fn test_moves_rejected_after_win_until_reset() {
        let input = "0\n1\n0\n1\n0\n1\n0\n3\nr\n3\nq\n";
        let (state, output) = run_session(GameState::initial(), input);
        assert!(output.contains("Game is over, reset to play again"));
        assert!(output.contains("Game has been reset."));
        assert!(!state.is_terminal());
        assert_eq!(state.moves_played(), 1);
        assert_eq!(state.current_player(), Player::Yellow);
    }

    #[test]
    fn test_draw_message() {
        let config = BoardConfig {
            cols: 2,
            rows: 1,
            required_to_win: 2,
        };
        let (state, output) = run_session(GameState::new(config).unwrap(), "0\n1\n");
        assert_eq!(state.outcome(), Some(GameOutcome::Draw));
        assert!(output.contains("It's a draw!"));
    }

    #[test]
    fn test_prints_plain_board() {
        let config = BoardConfig {
            cols: 3,
            rows: 2,
            required_to_win: 3,
        };
        let (_, output) = run_session(GameState::new(config).unwrap(), "1\n");
        assert!(output.starts_with("0  1  2\n.  .  .\n.  .  .\n"));
        assert!(output.contains("0  1  2\n.  .  .\n.  R  .\n"));
    }

    #[test]
    fn test_color_wraps_discs_only() {
        assert_eq!(paint(Cell::Empty, ".".into(), true), ".");
        assert_eq!(paint(Cell::Red, "R".into(), false), "R");

        // Escape codes depend on NO_COLOR in the environment.
        assert!(paint(Cell::Red, "R".into(), true).contains('R'));
        assert!(paint(Cell::Yellow, "Y".into(), true).contains('Y'));
    }
}
