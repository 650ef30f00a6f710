//! Game state: everything that changes while a game is played.
//!
//! ## GameState
//!
//! - Active players in seating order (turn rotation wraps to the front)
//! - Turn and leader pointers, by `PlayerId`
//! - The leader's roll cap for the current round
//! - Pot, round counter, winner
//! - History of accepted choices
//!
//! Players are held in an `im::Vector`, so cloning a state is O(1) and
//! removing an eliminated player yields a new ordered view rather than
//! shifting a shared array.

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::action::{ActionRecord, Choice};
use super::config::{ConfigError, MexicoConfig, MexicoRule};
use super::player::{Player, PlayerId};
use crate::dice::score;

/// Reasons a game cannot be set up.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetupError {
    #[error("need at least 2 players")]
    NotEnoughPlayers,
    #[error("at most 255 players supported")]
    TooManyPlayers,
    #[error("player names must not be empty")]
    EmptyName,
    #[error("player name {0:?} is used twice")]
    DuplicateName(String),
    #[error("first player index {index} out of range for {count} players")]
    LeaderOutOfRange { index: usize, count: usize },
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Where the state machine is.
///
/// Round completion is resolved inside the choice that triggers it, so a
/// caller only ever sees one of these two.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for this player to roll or pass.
    AwaitingChoice(PlayerId),
    /// One player left.
    GameOver(PlayerId),
}

/// One line of the status board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    pub name: String,
    pub stake: u32,
}

/// Complete game state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    players: Vector<Player>,
    current: PlayerId,
    leader: PlayerId,
    leader_roll_cap: Option<u32>,
    winner: Option<PlayerId>,

    /// Lost rounds so far; the winner takes `pot + 1`.
    pub pot: u32,

    /// Round number (starts at 1).
    round: u32,

    /// Accepted choices within the round.
    sequence: u32,

    history: Vector<ActionRecord>,
}

impl GameState {
    /// Seat the named players with `config.start_amount` each.
    ///
    /// `leader_index` picks who opens the first round. Use
    /// `MexicoRules::new_game` for a random pick.
    pub fn new<I, S>(
        names: I,
        config: &MexicoConfig,
        leader_index: usize,
    ) -> Result<Self, SetupError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        config.validate()?;

        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.len() < 2 {
            return Err(SetupError::NotEnoughPlayers);
        }
        if names.len() > usize::from(u8::MAX) {
            return Err(SetupError::TooManyPlayers);
        }
        if leader_index >= names.len() {
            return Err(SetupError::LeaderOutOfRange {
                index: leader_index,
                count: names.len(),
            });
        }

        let mut seen = FxHashSet::default();
        for name in &names {
            if name.trim().is_empty() {
                return Err(SetupError::EmptyName);
            }
            if !seen.insert(name.as_str()) {
                return Err(SetupError::DuplicateName(name.clone()));
            }
        }

        let players: Vector<Player> = names
            .into_iter()
            .enumerate()
            .map(|(i, name)| Player::new(PlayerId::new(i as u8), name, config.start_amount))
            .collect();

        let leader = players[leader_index].id();

        Ok(Self {
            players,
            current: leader,
            leader,
            leader_roll_cap: None,
            winner: None,
            pot: 0,
            round: 1,
            sequence: 0,
            history: Vector::new(),
        })
    }

    // === Players ===

    /// Active players in turn order.
    #[must_use]
    pub fn players(&self) -> &Vector<Player> {
        &self.players
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Position of a player in the active set.
    #[must_use]
    pub fn position(&self, id: PlayerId) -> Option<usize> {
        self.players.iter().position(|p| p.id() == id)
    }

    /// Look up an active player.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id() == id)
    }

    /// Look up an active player by name.
    #[must_use]
    pub fn player_by_name(&self, name: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.name() == name)
    }

    pub(crate) fn player_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id() == id)
    }

    /// The player after `id` in turn order, wrapping to the front.
    ///
    /// Returns `id` itself if it is not at the table.
    #[must_use]
    pub fn next_after(&self, id: PlayerId) -> PlayerId {
        match self.position(id) {
            Some(pos) => self.players[(pos + 1) % self.players.len()].id(),
            None => id,
        }
    }

    /// Remove a player, keeping everyone else in order.
    ///
    /// Returns the position the player held.
    pub(crate) fn remove_player(&mut self, id: PlayerId) -> Option<usize> {
        let pos = self.position(id)?;
        self.players.remove(pos);
        Some(pos)
    }

    // === Turn pointers ===

    /// Whose turn it is.
    #[must_use]
    pub fn current_id(&self) -> PlayerId {
        self.current
    }

    /// The player who should be asked next.
    ///
    /// After the game is over this is the winner.
    #[must_use]
    pub fn current_player(&self) -> &Player {
        self.player(self.current)
            .or_else(|| self.players.front())
            .expect("active player set is never empty")
    }

    /// Who opened the current round.
    #[must_use]
    pub fn leader_id(&self) -> PlayerId {
        self.leader
    }

    /// Rolls the leader has taken this round, once they have rolled.
    #[must_use]
    pub fn leader_roll_cap(&self) -> Option<u32> {
        self.leader_roll_cap
    }

    pub(crate) fn set_current(&mut self, id: PlayerId) {
        self.current = id;
    }

    pub(crate) fn set_leader(&mut self, id: PlayerId) {
        self.leader = id;
    }

    pub(crate) fn set_leader_roll_cap(&mut self, cap: u32) {
        self.leader_roll_cap = Some(cap);
    }

    // === Round ===

    /// Round number (starts at 1).
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Has every player rolled, and the same number of times?
    #[must_use]
    pub fn all_rolled(&self) -> bool {
        let Some(first) = self.players.front() else {
            return false;
        };
        let rolls = first.rolls_taken;
        rolls > 0 && self.players.iter().all(|p| p.rolls_taken == rolls)
    }

    /// The player with the lowest score; the earliest seat wins ties.
    #[must_use]
    pub fn loser(&self, rule: MexicoRule) -> PlayerId {
        let mut players = self.players.iter();
        let first = players.next().expect("active player set is never empty");
        let mut loser = first;
        let mut loser_score = score(first.dice, rule);

        for player in players {
            let s = score(player.dice, rule);
            if s < loser_score {
                loser = player;
                loser_score = s;
            }
        }

        loser.id()
    }

    /// Reset dice and roll counts and open the next round.
    pub(crate) fn start_next_round(&mut self) {
        for player in self.players.iter_mut() {
            player.clear_round();
        }
        self.leader_roll_cap = None;
        self.round += 1;
        self.sequence = 0;
    }

    // === Game end ===

    pub(crate) fn set_winner(&mut self, id: PlayerId) {
        self.winner = Some(id);
        self.current = id;
    }

    #[must_use]
    pub fn winner(&self) -> Option<&Player> {
        self.winner.and_then(|id| self.player(id))
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        match self.winner {
            Some(id) => Phase::GameOver(id),
            None => Phase::AwaitingChoice(self.current),
        }
    }

    /// Name and stake of every active player, in seating order.
    #[must_use]
    pub fn standings(&self) -> Vec<Standing> {
        self.players
            .iter()
            .map(|p| Standing {
                name: p.name().to_string(),
                stake: p.stake,
            })
            .collect()
    }

    // === History ===

    /// Accepted choices, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    pub(crate) fn record(&mut self, player: PlayerId, choice: Choice) {
        let record = ActionRecord::new(player, choice, self.round, self.sequence);
        self.sequence += 1;
        self.history.push_back(record);
    }
}
