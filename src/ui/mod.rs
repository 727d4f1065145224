//! Front ends: a line-oriented console loop and a full-screen terminal UI.
//! Both drive a [`GameState`](crate::game::GameState) and own all styling.

mod app;
pub mod command;
pub mod console;
mod game_view;

pub use app::App;
pub use command::Command;
pub use console::Console;

use serde::{Deserialize, Serialize};

/// Which front end to start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interface {
    #[default]
    Tui,
    Console,
}

/// Settings from the `[display]` TOML section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub interface: Interface,
    /// Paint discs in their player's colour
    pub color: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            interface: Interface::Tui,
            color: true,
        }
    }
}
