//! Rules engine trait and the Mexico rules.
//!
//! A round runs like this:
//! - The leader rolls up to `max_rolls` times; their count becomes the cap
//! - Everyone else may roll up to the leader's count, passing when done
//! - Once all players have rolled equally often, the lowest score loses a stake
//! - A player at 0 stake leaves; the last one at the table takes the pot

use log::{debug, info, warn};

use super::outcome::{MoveError, Outcome, Outcomes, RollRejection};
use crate::core::{
    Choice, ConfigError, GameRng, GameState, IllegalRollPolicy, MexicoConfig, PlayerId, SetupError,
};
use crate::dice::{score, DiceRoller};

/// Result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameResult {
    pub winner: PlayerId,
    /// Pot plus the final round's stake.
    pub pot_awarded: u32,
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `legal_choices`: empty once the game is over
/// - `apply_choice`: never panics on a bad choice, it reports `InvalidMove`
/// - `is_terminal`: `None` while the game continues
pub trait RulesEngine {
    /// Get the table rules.
    fn config(&self) -> &MexicoConfig;

    /// Choices the current player may make right now.
    fn legal_choices(&self, state: &GameState) -> Vec<Choice>;

    /// Apply a choice for the current player.
    fn apply_choice<D: DiceRoller>(
        &self,
        state: &mut GameState,
        dice: &mut D,
        choice: Choice,
    ) -> Outcomes;

    /// Check if the game is over.
    fn is_terminal(&self, state: &GameState) -> Option<GameResult>;

    /// Would `choice` be accepted?
    fn is_legal(&self, state: &GameState, choice: Choice) -> bool {
        self.legal_choices(state).contains(&choice)
    }
}

/// The Mexico rules for one table.
#[derive(Clone, Debug, Default)]
pub struct MexicoRules {
    config: MexicoConfig,
}

impl MexicoRules {
    /// Create rules from a validated configuration.
    pub fn new(config: MexicoConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Seat the players and pick a random first leader.
    pub fn new_game<I, S>(&self, names: I, rng: &mut GameRng) -> Result<GameState, SetupError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        let leader = if names.is_empty() {
            0
        } else {
            rng.gen_range_usize(0..names.len())
        };
        let state = GameState::new(names, &self.config, leader)?;
        debug!("new game, {} opens", state.current_player().name());
        Ok(state)
    }

    /// Submit a choice for the current player.
    pub fn submit_choice<D: DiceRoller>(
        &self,
        state: &mut GameState,
        dice: &mut D,
        choice: Choice,
    ) -> Outcomes {
        self.apply_choice(state, dice, choice)
    }

    /// Submit one line of text input (`r` or `n`) for the current player.
    pub fn submit_command<D: DiceRoller>(
        &self,
        state: &mut GameState,
        dice: &mut D,
        input: &str,
    ) -> Outcomes {
        match input.parse::<Choice>() {
            Ok(choice) => self.apply_choice(state, dice, choice),
            Err(err) => {
                warn!("{}: {err}", state.current_player().name());
                let mut out = Outcomes::new();
                out.push(Outcome::InvalidMove(err));
                out
            }
        }
    }

    /// May `player` roll now?
    pub fn check_roll(&self, state: &GameState, player: PlayerId) -> Result<(), MoveError> {
        let rolls = state.player(player).map_or(0, |p| p.rolls_taken);

        if rolls >= self.config.max_rolls {
            return Err(MoveError::IllegalRoll(RollRejection::RollLimitReached {
                max: self.config.max_rolls,
            }));
        }
        if player == state.leader_id() {
            return Ok(());
        }
        match state.leader_roll_cap() {
            None => Err(MoveError::IllegalRoll(RollRejection::LeaderNotRolled)),
            Some(cap) if rolls >= cap => {
                Err(MoveError::IllegalRoll(RollRejection::ExceedsLeader { cap }))
            }
            Some(_) => Ok(()),
        }
    }

    /// May `player` pass now?
    pub fn check_pass(&self, state: &GameState, player: PlayerId) -> Result<(), MoveError> {
        match state.player(player) {
            Some(p) if p.has_rolled() => Ok(()),
            _ => Err(MoveError::IllegalPass),
        }
    }

    fn advance_turn(&self, state: &mut GameState, from: PlayerId, out: &mut Outcomes) {
        let next = state.next_after(from);
        state.set_current(next);
        let name = state.current_player().name().to_string();
        out.push(Outcome::TurnAdvanced { next, name });
    }

    fn roll(
        &self,
        state: &mut GameState,
        dice: &mut impl DiceRoller,
        id: PlayerId,
        out: &mut Outcomes,
    ) {
        let pair = dice.roll();
        let is_leader = id == state.leader_id();

        let Some(player) = state.player_mut(id) else {
            return;
        };
        player.dice = pair;
        player.rolls_taken += 1;
        let rolls = player.rolls_taken;
        let name = player.name().to_string();

        if is_leader {
            state.set_leader_roll_cap(rolls);
        }
        state.record(id, Choice::Roll);

        let score = score(pair, self.config.mexico_rule);
        debug!("{name} rolled {pair} ({score}), roll {rolls}");
        out.push(Outcome::RolledDice {
            player: id,
            name,
            dice: pair,
            score,
        });
    }

    /// Charge the loser, remove them at 0 stake, and set up the next round.
    fn finish_round(&self, state: &mut GameState, out: &mut Outcomes) {
        let loser_id = state.loser(self.config.mexico_rule);
        let Some(loser) = state.player_mut(loser_id) else {
            return;
        };
        loser.stake = loser.stake.saturating_sub(1);
        let stake = loser.stake;
        let name = loser.name().to_string();
        state.pot += 1;

        let eliminated = stake == 0;
        info!(
            "round {} lost by {name}, {stake} left, pot {}",
            state.round(),
            state.pot
        );
        out.push(Outcome::RoundEnded {
            loser: loser_id,
            name,
            stake,
            pot: state.pot,
            eliminated,
        });

        if eliminated {
            let Some(pos) = state.remove_player(loser_id) else {
                return;
            };

            if state.player_count() == 1 {
                let winner = state.players()[0].id();
                state.set_winner(winner);
                let name = state.current_player().name().to_string();
                info!("game over, {name} wins {}", state.pot + 1);
                out.push(Outcome::GameOver {
                    winner,
                    name,
                    pot_awarded: state.pot + 1,
                });
                return;
            }

            // Whoever sat after the loser opens
            let next = state.players()[pos % state.player_count()].id();
            state.set_current(next);
            state.set_leader(next);
        } else {
            let next = state.next_after(state.leader_id());
            state.set_leader(next);
            state.set_current(next);
        }

        state.start_next_round();
    }
}

impl RulesEngine for MexicoRules {
    fn config(&self) -> &MexicoConfig {
        &self.config
    }

    fn legal_choices(&self, state: &GameState) -> Vec<Choice> {
        if state.is_over() {
            return vec![];
        }

        let player = state.current_id();
        let mut choices = Vec::new();

        if self.check_roll(state, player).is_ok() {
            choices.push(Choice::Roll);
        }
        if self.check_pass(state, player).is_ok() {
            choices.push(Choice::Pass);
        }

        choices
    }

    fn apply_choice<D: DiceRoller>(
        &self,
        state: &mut GameState,
        dice: &mut D,
        choice: Choice,
    ) -> Outcomes {
        let mut out = Outcomes::new();

        if state.is_over() {
            out.push(Outcome::InvalidMove(MoveError::GameOver));
            return out;
        }

        let id = state.current_id();
        let checked = match choice {
            Choice::Roll => self.check_roll(state, id),
            Choice::Pass => self.check_pass(state, id),
        };

        if let Err(err) = checked {
            warn!("{}: {err}", state.current_player().name());
            let force_pass = matches!(err, MoveError::IllegalRoll(_))
                && self.config.illegal_roll == IllegalRollPolicy::ForcePass;
            out.push(Outcome::InvalidMove(err));
            if force_pass {
                self.advance_turn(state, id, &mut out);
            }
            return out;
        }

        match choice {
            Choice::Roll => self.roll(state, dice, id, &mut out),
            Choice::Pass => {
                state.record(id, Choice::Pass);
                self.advance_turn(state, id, &mut out);
            }
        }

        if state.all_rolled() {
            self.finish_round(state, &mut out);
        }

        out
    }

    fn is_terminal(&self, state: &GameState) -> Option<GameResult> {
        state.winner().map(|winner| GameResult {
            winner: winner.id(),
            pot_awarded: state.pot + 1,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MexicoRule;
    use crate::dice::{DicePair, ScriptedDice};

    fn table(names: &[&str], leader: usize) -> (MexicoRules, GameState) {
        let rules = MexicoRules::default();
        let state = GameState::new(names.iter().copied(), rules.config(), leader).unwrap();
        (rules, state)
    }

    #[test]
    fn test_others_wait_for_leader_roll() {
        let (rules, state) = table(&["A", "B", "C"], 1);

        assert_eq!(
            rules.check_roll(&state, PlayerId::new(2)),
            Err(MoveError::IllegalRoll(RollRejection::LeaderNotRolled))
        );
        assert_eq!(rules.check_roll(&state, PlayerId::new(1)), Ok(()));
    }

    #[test]
    fn test_leader_must_roll_first() {
        let (rules, mut state) = table(&["A", "B", "C"], 0);
        let mut dice = ScriptedDice::default();

        assert_eq!(rules.legal_choices(&state), vec![Choice::Roll]);

        let out = rules.submit_choice(&mut state, &mut dice, Choice::Pass);
        assert_eq!(out.as_slice(), &[Outcome::InvalidMove(MoveError::IllegalPass)]);
        assert_eq!(state.current_id(), PlayerId::new(0));
    }

    #[test]
    fn test_roll_sets_leader_cap() {
        let (rules, mut state) = table(&["A", "B"], 0);
        let mut dice = ScriptedDice::new([(3, 4), (5, 2)]);

        rules.submit_choice(&mut state, &mut dice, Choice::Roll);
        assert_eq!(state.leader_roll_cap(), Some(1));

        rules.submit_choice(&mut state, &mut dice, Choice::Roll);
        assert_eq!(state.leader_roll_cap(), Some(2));
        assert_eq!(state.current_player().dice, DicePair::new(5, 2));
        assert_eq!(rules.legal_choices(&state), vec![Choice::Roll, Choice::Pass]);
    }

    #[test]
    fn test_roll_limit() {
        let (rules, mut state) = table(&["A", "B"], 0);
        let mut dice = ScriptedDice::new([(1, 3), (2, 3), (4, 3)]);

        for _ in 0..3 {
            rules.submit_choice(&mut state, &mut dice, Choice::Roll);
        }

        let out = rules.submit_choice(&mut state, &mut dice, Choice::Roll);
        assert_eq!(
            out.as_slice(),
            &[Outcome::InvalidMove(MoveError::IllegalRoll(
                RollRejection::RollLimitReached { max: 3 }
            ))]
        );
        assert_eq!(state.current_player().rolls_taken, 3);
        assert_eq!(rules.legal_choices(&state), vec![Choice::Pass]);
    }

    #[test]
    fn test_non_leader_capped_by_leader() {
        let (rules, mut state) = table(&["A", "B", "C"], 0);
        let mut dice = ScriptedDice::new([(3, 4), (5, 5)]);

        rules.submit_choice(&mut state, &mut dice, Choice::Roll);
        rules.submit_choice(&mut state, &mut dice, Choice::Pass);
        rules.submit_choice(&mut state, &mut dice, Choice::Roll);

        let out = rules.submit_choice(&mut state, &mut dice, Choice::Roll);
        assert_eq!(
            out.as_slice(),
            &[Outcome::InvalidMove(MoveError::IllegalRoll(
                RollRejection::ExceedsLeader { cap: 1 }
            ))]
        );
        // Reprompt: still B's turn
        assert_eq!(state.current_player().name(), "B");
        assert_eq!(state.current_player().rolls_taken, 1);
    }

    #[test]
    fn test_force_pass_policy_moves_turn() {
        let rules = MexicoRules::new(
            MexicoConfig::default().with_illegal_roll(IllegalRollPolicy::ForcePass),
        )
        .unwrap();
        let mut state = GameState::new(["A", "B", "C"], rules.config(), 0).unwrap();
        let mut dice = ScriptedDice::new([(3, 4), (5, 5)]);

        rules.submit_choice(&mut state, &mut dice, Choice::Roll);
        rules.submit_choice(&mut state, &mut dice, Choice::Pass);
        rules.submit_choice(&mut state, &mut dice, Choice::Roll);

        let out = rules.submit_choice(&mut state, &mut dice, Choice::Roll);
        assert!(out[0].is_invalid());
        assert_eq!(
            out[1],
            Outcome::TurnAdvanced {
                next: PlayerId::new(2),
                name: "C".to_string()
            }
        );
        assert_eq!(state.player(PlayerId::new(1)).unwrap().rolls_taken, 1);
    }

    #[test]
    fn test_invalid_command_changes_nothing() {
        let (rules, mut state) = table(&["A", "B"], 1);
        let before = state.clone();
        let mut dice = ScriptedDice::default();

        let out = rules.submit_command(&mut state, &mut dice, "x");
        assert_eq!(
            out.as_slice(),
            &[Outcome::InvalidMove(MoveError::InvalidCommand("x".to_string()))]
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_round_ends_when_all_rolled_once() {
        let (rules, mut state) = table(&["A", "B"], 0);
        let mut dice = ScriptedDice::new([(6, 5), (3, 1)]);

        rules.submit_command(&mut state, &mut dice, "r");
        rules.submit_command(&mut state, &mut dice, "n");
        let out = rules.submit_command(&mut state, &mut dice, "r");

        assert_eq!(out.len(), 2);
        assert_eq!(
            out[1],
            Outcome::RoundEnded {
                loser: PlayerId::new(1),
                name: "B".to_string(),
                stake: 2,
                pot: 1,
                eliminated: false,
            }
        );
        assert_eq!(state.round(), 2);
        // Leadership rotates from A to B
        assert_eq!(state.leader_id(), PlayerId::new(1));
        assert_eq!(state.current_id(), PlayerId::new(1));
        assert!(state.players().iter().all(|p| p.rolls_taken == 0));
    }

    #[test]
    fn test_mexico_rule_decides_loser() {
        for (rule, loser) in [(MexicoRule::Special, "B"), (MexicoRule::Literal, "A")] {
            let rules = MexicoRules::new(MexicoConfig::default().with_mexico_rule(rule)).unwrap();
            let mut state = GameState::new(["A", "B"], rules.config(), 0).unwrap();
            let mut dice = ScriptedDice::new([(2, 1), (3, 1)]);

            rules.submit_choice(&mut state, &mut dice, Choice::Roll);
            rules.submit_choice(&mut state, &mut dice, Choice::Pass);
            let out = rules.submit_choice(&mut state, &mut dice, Choice::Roll);

            match &out[1] {
                Outcome::RoundEnded { name, .. } => assert_eq!(name, loser),
                other => panic!("expected round end, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_choices_rejected_after_game_over() {
        let rules = MexicoRules::new(MexicoConfig::default().with_start_amount(1)).unwrap();
        let mut state = GameState::new(["A", "B"], rules.config(), 0).unwrap();
        let mut dice = ScriptedDice::new([(6, 6), (2, 3)]);

        rules.submit_choice(&mut state, &mut dice, Choice::Roll);
        rules.submit_choice(&mut state, &mut dice, Choice::Pass);
        rules.submit_choice(&mut state, &mut dice, Choice::Roll);

        assert_eq!(
            rules.is_terminal(&state),
            Some(GameResult {
                winner: PlayerId::new(0),
                pot_awarded: 2
            })
        );
        assert!(rules.legal_choices(&state).is_empty());

        let before = state.clone();
        let out = rules.submit_choice(&mut state, &mut dice, Choice::Roll);
        assert_eq!(out.as_slice(), &[Outcome::InvalidMove(MoveError::GameOver)]);
        assert_eq!(state, before);
    }

    #[test]
    fn test_new_game_random_leader_is_seeded() {
        let rules = MexicoRules::default();
        let a = rules.new_game(["A", "B", "C"], &mut GameRng::new(11)).unwrap();
        let b = rules.new_game(["A", "B", "C"], &mut GameRng::new(11)).unwrap();

        assert_eq!(a.leader_id(), b.leader_id());
        assert_eq!(a.current_id(), a.leader_id());
        assert_eq!(
            rules.new_game(Vec::<String>::new(), &mut GameRng::new(1)),
            Err(SetupError::NotEnoughPlayers)
        );
    }

    #[test]
    fn test_history_records_accepted_choices_only() {
        let (rules, mut state) = table(&["A", "B"], 0);
        let mut dice = ScriptedDice::new([(4, 4)]);

        rules.submit_command(&mut state, &mut dice, "n");
        rules.submit_command(&mut state, &mut dice, "?");
        rules.submit_command(&mut state, &mut dice, "r");
        rules.submit_command(&mut state, &mut dice, "n");

        let history: Vec<_> = state
            .history()
            .iter()
            .map(|r| (r.player, r.choice, r.sequence))
            .collect();
        assert_eq!(
            history,
            vec![
                (PlayerId::new(0), Choice::Roll, 0),
                (PlayerId::new(0), Choice::Pass, 1),
            ]
        );
    }
}
