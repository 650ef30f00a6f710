//! Dice: the roller that throws a pair and the scoring that ranks it.
//!
//! - `roller`: `DiceRoller` trait, seeded and scripted implementations
//! - `score`: rank of a pair, with the Mexico rule applied

pub mod roller;
pub mod score;

use serde::{Deserialize, Serialize};

pub use roller::{DiceRoller, ScriptedDice};
pub use score::{is_mexico, score};

/// The two dice a player is showing.
///
/// `DicePair::UNROLLED` (0, 0) marks a player who has not rolled this round.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DicePair {
    pub first: u8,
    pub second: u8,
}

impl DicePair {
    /// Sentinel for "not yet rolled this round".
    pub const UNROLLED: DicePair = DicePair { first: 0, second: 0 };

    #[must_use]
    pub const fn new(first: u8, second: u8) -> Self {
        Self { first, second }
    }

    /// The higher face.
    #[must_use]
    pub fn high(self) -> u8 {
        self.first.max(self.second)
    }

    /// The lower face.
    #[must_use]
    pub fn low(self) -> u8 {
        self.first.min(self.second)
    }

    #[must_use]
    pub fn is_double(self) -> bool {
        self.first == self.second
    }
}

impl From<(u8, u8)> for DicePair {
    fn from((first, second): (u8, u8)) -> Self {
        Self::new(first, second)
    }
}

impl std::fmt::Display for DicePair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} and {}", self.first, self.second)
    }
}
