use crate::game::{GameOutcome, GameState};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;

pub struct App {
    game_state: GameState,
    selected_column: usize,
    color: bool,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(game_state: GameState, color: bool) -> Self {
        let selected_column = game_state.board().cols() / 2; // Start in middle
        App {
            game_state,
            selected_column,
            color,
            should_quit: false,
            message: None,
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column + 1 < self.game_state.board().cols() {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char('r') => {
                self.game_state.reset();
                self.selected_column = self.game_state.board().cols() / 2;
                self.message = Some("Game has been reset.".to_string());
            }
            _ => {}
        }
    }

    /// Drop piece in selected column
    fn drop_piece(&mut self) {
        // Column count is bounded by the board allocation, so it fits in isize.
        let column = self.selected_column as isize;
        self.message = match self.game_state.play(column) {
            Ok(Some(GameOutcome::Winner(player))) => Some(format!("{} won!", player.name())),
            Ok(Some(GameOutcome::Draw)) => Some("It's a draw!".to_string()),
            Ok(None) => None,
            Err(e) => Some(format!("{e}")),
        };
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            &self.game_state,
            self.selected_column,
            &self.message,
            self.color,
        );
    }
}
