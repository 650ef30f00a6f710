//! Text front end: prompts, status lines and the game loop.

pub mod runner;

pub use runner::{run_game, GameSummary, SessionError};
