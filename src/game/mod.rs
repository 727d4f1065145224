//! Core Connect Four game logic: the board engine with win detection, player
//! tokens, and the turn-taking session built on top of them.

mod board;
mod player;
mod state;

pub use board::{Board, BoardConfig, Cell, MoveError, MoveOutcome};
pub use player::Player;
pub use state::{GameOutcome, GameState, PlayError};
