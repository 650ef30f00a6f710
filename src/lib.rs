//! # mexico-dice
//!
//! The dice game Mexico for a fixed table of players, played one text
//! command at a time.
//!
//! ## Rules in brief
//!
//! - The round leader rolls two dice up to three times; everyone else may
//!   roll as often as the leader did
//! - A roll reads high die first (6,1 is 61) and doubles are eleven times the
//!   face (5,5 is 55); by default {1,2} is Mexico and beats everything,
//!   see `dice::score`
//! - The lowest roll loses one stake and feeds the pot
//! - Out of stake, out of the game; the last player takes the pot
//!
//! ## Architecture
//!
//! - **Explicit state**: all mutable data sits in `GameState`, passed by
//!   `&mut` to every engine call.
//! - **Persistent data structures**: players live in an `im::Vector`, so
//!   states clone in O(1) and eliminations produce a new ordered view.
//! - **Injectable dice**: the engine rolls through the `DiceRoller` trait;
//!   games use a seeded `GameRng`, tests script exact throws.
//!
//! ## Modules
//!
//! - `core`: players, state, choices, RNG, configuration
//! - `dice`: dice pair, rollers, scoring
//! - `rules`: the turn/round state machine and its outcomes
//! - `session`: the line-based game loop

pub mod core;
pub mod dice;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    ActionRecord, Choice, ConfigError, GameRng, GameState, IllegalRollPolicy, MexicoConfig,
    MexicoRule, Phase, Player, PlayerId, SetupError, Standing,
};

pub use crate::dice::{score, DicePair, DiceRoller, ScriptedDice};

pub use crate::rules::{
    GameResult, MexicoRules, MoveError, Outcome, Outcomes, RollRejection, RulesEngine,
};

pub use crate::session::{run_game, GameSummary, SessionError};
