//! What a submitted choice produced.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;

use crate::core::PlayerId;
use crate::dice::DicePair;

/// Why a roll was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum RollRejection {
    #[error("already rolled {max} times this round")]
    RollLimitReached { max: u32 },
    #[error("the leader has only rolled {cap} times")]
    ExceedsLeader { cap: u32 },
    #[error("the leader has not rolled yet")]
    LeaderNotRolled,
}

/// A rejected choice. None of these change the game.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum MoveError {
    #[error("unknown command {0:?}")]
    InvalidCommand(String),
    #[error("illegal roll: {0}")]
    IllegalRoll(RollRejection),
    #[error("roll at least once before passing")]
    IllegalPass,
    #[error("the game is over")]
    GameOver,
}

/// One observable effect of a choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// The current player threw the dice.
    RolledDice {
        player: PlayerId,
        name: String,
        dice: DicePair,
        score: u32,
    },
    /// The choice was refused.
    InvalidMove(MoveError),
    /// The turn moved on.
    TurnAdvanced { next: PlayerId, name: String },
    /// Everyone has rolled equally often and the lowest score paid one stake.
    RoundEnded {
        loser: PlayerId,
        name: String,
        stake: u32,
        pot: u32,
        eliminated: bool,
    },
    /// One player is left and takes the pot.
    GameOver {
        winner: PlayerId,
        name: String,
        pot_awarded: u32,
    },
}

impl Outcome {
    #[must_use]
    pub fn is_invalid(&self) -> bool {
        matches!(self, Outcome::InvalidMove(_))
    }
}

/// Outcomes of one choice. At most: roll, round end, game over.
pub type Outcomes = SmallVec<[Outcome; 3]>;
