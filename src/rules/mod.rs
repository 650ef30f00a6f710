//! The turn/round engine.
//!
//! `MexicoRules` implements `RulesEngine`:
//! - Which choices the current player may make
//! - How a choice changes the state (rolls, turn order, round end)
//! - When the game is over
//!
//! Every choice yields a short list of `Outcome`s for the front end to show.

pub mod engine;
pub mod outcome;

pub use engine::{GameResult, MexicoRules, RulesEngine};
pub use outcome::{MoveError, Outcome, Outcomes, RollRejection};
