//! Game configuration.
//!
//! `MexicoConfig` fixes the table rules before the first round:
//! - How many rolls a player may take per round
//! - How many lives each player starts with
//! - How a Mexico ({1,2}) is ranked
//! - What a rejected extra roll does to the turn

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// No player may exceed this many rolls in a round.
pub const MAX_ROLLS: u32 = 3;

/// Lives each player starts with.
pub const START_AMOUNT: u32 = 3;

/// Rank of a Mexico under `MexicoRule::Special`; greater than any other roll.
pub const MEXICO: u32 = 1000;

/// The table used when the binary starts a game.
pub const DEFAULT_PLAYER_NAMES: [&str; 3] = ["Olle", "Fia", "Lisa"];

/// How a {1,2} roll is ranked.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MexicoRule {
    /// Scores 21, exactly like any other non-double roll.
    Literal,
    /// Scores `MEXICO`, beating every other roll including doubles.
    #[default]
    Special,
}

/// What happens to the turn when a player asks for a roll they are not allowed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IllegalRollPolicy {
    /// Reject and ask the same player again.
    #[default]
    Reprompt,
    /// Reject and move the turn to the next player.
    ForcePass,
}

/// Invalid configuration values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("max rolls per round must be at least 1")]
    ZeroMaxRolls,
    #[error("start amount must be at least 1")]
    ZeroStartAmount,
}

/// Table rules.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MexicoConfig {
    /// Maximum rolls for any player in one round (default: 3).
    pub max_rolls: u32,

    /// Starting stake per player (default: 3).
    pub start_amount: u32,

    /// Ranking of a Mexico (default: `Special`).
    pub mexico_rule: MexicoRule,

    /// Turn handling after an illegal roll (default: `Reprompt`).
    pub illegal_roll: IllegalRollPolicy,
}

impl Default for MexicoConfig {
    fn default() -> Self {
        Self {
            max_rolls: MAX_ROLLS,
            start_amount: START_AMOUNT,
            mexico_rule: MexicoRule::default(),
            illegal_roll: IllegalRollPolicy::default(),
        }
    }
}

impl MexicoConfig {
    /// Set the per-round roll limit.
    #[must_use]
    pub fn with_max_rolls(mut self, max_rolls: u32) -> Self {
        self.max_rolls = max_rolls;
        self
    }

    /// Set the starting stake.
    #[must_use]
    pub fn with_start_amount(mut self, amount: u32) -> Self {
        self.start_amount = amount;
        self
    }

    /// Set the Mexico ranking.
    #[must_use]
    pub fn with_mexico_rule(mut self, rule: MexicoRule) -> Self {
        self.mexico_rule = rule;
        self
    }

    /// Set the illegal-roll policy.
    #[must_use]
    pub fn with_illegal_roll(mut self, policy: IllegalRollPolicy) -> Self {
        self.illegal_roll = policy;
        self
    }

    /// Check the values can drive a game.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_rolls == 0 {
            return Err(ConfigError::ZeroMaxRolls);
        }
        if self.start_amount == 0 {
            return Err(ConfigError::ZeroStartAmount);
        }
        Ok(())
    }
}
