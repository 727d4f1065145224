//! # Connect Four
//!
//! Two-player Connect Four for the terminal, on a board of any size with a
//! configurable run length to win.
//!
//! ## Modules
//!
//! - [`game`]: Board engine, win detection, player tokens, turn-taking session
//! - [`ui`]: Console loop and full-screen terminal UI
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
