//! Player choices and the record of accepted ones.
//!
//! A turn offers exactly two verbs:
//! - `Roll` (`r`): throw both dice
//! - `Pass` (`n`): hand the turn to the next player
//!
//! Every accepted choice is kept as an `ActionRecord` so a game can be
//! inspected or replayed.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::player::PlayerId;
use crate::rules::MoveError;

/// A choice submitted by the current player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Choice {
    /// Throw the dice.
    Roll,
    /// Keep the current dice and move on ("next").
    Pass,
}

impl Choice {
    /// The text command for this choice.
    #[must_use]
    pub const fn command(self) -> &'static str {
        match self {
            Choice::Roll => "r",
            Choice::Pass => "n",
        }
    }
}

impl FromStr for Choice {
    type Err = MoveError;

    /// Parse one line of input. Surrounding whitespace is ignored, the
    /// command itself is case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "r" => Ok(Choice::Roll),
            "n" => Ok(Choice::Pass),
            other => Err(MoveError::InvalidCommand(other.to_string())),
        }
    }
}

impl std::fmt::Display for Choice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Choice::Roll => write!(f, "roll"),
            Choice::Pass => write!(f, "pass"),
        }
    }
}

/// An accepted choice with metadata for history tracking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who made the choice.
    pub player: PlayerId,

    /// The choice made.
    pub choice: Choice,

    /// Round number (starts at 1).
    pub round: u32,

    /// Sequence number within the round.
    pub sequence: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(player: PlayerId, choice: Choice, round: u32, sequence: u32) -> Self {
        Self {
            player,
            choice,
            round,
            sequence,
        }
    }
}
