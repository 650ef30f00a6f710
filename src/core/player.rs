//! Player identification and per-round player data.
//!
//! ## PlayerId
//!
//! Stable identifier assigned from the initial seating order. It survives
//! eliminations, so turn and leader pointers never dangle.
//!
//! ## Player
//!
//! Name, stake and the dice/roll counters of the current round.

use serde::{Deserialize, Serialize};

use crate::dice::DicePair;

/// Player identifier supporting 1-255 players.
///
/// Ids are 0-based seat numbers from the start of the game: the first
/// player is `PlayerId(0)`. Ids are never reused after an elimination.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat number (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// A participant still at the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    name: String,

    /// Remaining lives. The player leaves the table at 0.
    pub stake: u32,

    /// Dice showing for this round; `DicePair::UNROLLED` until the first roll.
    pub dice: DicePair,

    /// Rolls taken this round.
    pub rolls_taken: u32,
}

impl Player {
    /// Create a player with a fresh round.
    pub fn new(id: PlayerId, name: impl Into<String>, stake: u32) -> Self {
        Self {
            id,
            name: name.into(),
            stake,
            dice: DicePair::UNROLLED,
            rolls_taken: 0,
        }
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Has this player rolled at least once this round?
    #[must_use]
    pub fn has_rolled(&self) -> bool {
        self.rolls_taken > 0
    }

    /// Forget this round's dice and roll count.
    pub fn clear_round(&mut self) {
        self.dice = DicePair::UNROLLED;
        self.rolls_taken = 0;
    }
}

/// `name, stake, first, second, rolls` - handy when tracing a round.
impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}, {}, {}, {}, {}",
            self.name, self.stake, self.dice.first, self.dice.second, self.rolls_taken
        )
    }
}
