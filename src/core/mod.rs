//! Core game types: players, state, choices, RNG, configuration.
//!
//! Everything the turn/round engine reads or writes lives here. The engine
//! itself is in `rules`.

pub mod player;
pub mod rng;
pub mod config;
pub mod action;
pub mod state;

pub use player::{Player, PlayerId};
pub use rng::GameRng;
pub use config::{
    ConfigError, IllegalRollPolicy, MexicoConfig, MexicoRule, DEFAULT_PLAYER_NAMES, MAX_ROLLS,
    MEXICO, START_AMOUNT,
};
pub use action::{ActionRecord, Choice};
pub use state::{GameState, Phase, SetupError, Standing};
