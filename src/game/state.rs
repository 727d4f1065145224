use super::{Board, BoardConfig, MoveError, MoveOutcome, Player};
use crate::error::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PlayError {
    #[error(transparent)]
    Move(#[from] MoveError),
    #[error("Game is over, reset to play again")]
    GameOver,
}

/// A board plus whose turn it is. Once an outcome is recorded no further
/// moves are accepted until [`GameState::reset`].
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    outcome: Option<GameOutcome>,
    moves_played: usize,
}

impl GameState {
    /// Create a game on a board of the given shape
    pub fn new(config: BoardConfig) -> Result<Self, ConfigError> {
        Ok(Self::with_board(Board::from_config(&config)?))
    }

    /// Create initial game state on the standard board
    pub fn initial() -> Self {
        Self::with_board(Board::default())
    }

    fn with_board(board: Board) -> Self {
        GameState {
            board,
            current_player: Player::Red, // Red starts
            outcome: None,
            moves_played: 0,
        }
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn moves_played(&self) -> usize {
        self.moves_played
    }

    /// Drop the current player's disc into `column`.
    ///
    /// Takes a signed index so raw user input can be passed straight through;
    /// negative columns are rejected like any other out-of-range column.
    /// Returns the outcome if this move ended the game.
    pub fn play(&mut self, column: isize) -> Result<Option<GameOutcome>, PlayError> {
        if self.is_terminal() {
            return Err(PlayError::GameOver);
        }
        let column = usize::try_from(column).map_err(|_| MoveError::InvalidColumn)?;

        let player = self.current_player;
        let result = self.board.insert(column, player)?;
        self.moves_played += 1;

        self.outcome = match result {
            MoveOutcome::Won(winner) => {
                log::info!("{} won after {} moves", winner.name(), self.moves_played);
                Some(GameOutcome::Winner(winner))
            }
            MoveOutcome::Continued if self.board.is_full() => {
                log::info!("board full after {} moves, draw", self.moves_played);
                Some(GameOutcome::Draw)
            }
            MoveOutcome::Continued => None,
        };

        self.current_player = player.other();
        Ok(self.outcome)
    }

    /// Clear the board and hand the first move back to Red
    pub fn reset(&mut self) {
        self.board.reset();
        self.current_player = Player::Red;
        self.outcome = None;
        self.moves_played = 0;
        log::info!("game reset");
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}
