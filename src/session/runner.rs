//! The game loop over a line-based reader and writer.
//!
//! Prompts the current player, feeds each line to the rules, and prints the
//! results in the table's usual wording until one player is left.

use std::io::{self, BufRead, Write};

use log::{debug, info};
use thiserror::Error;

use crate::core::GameState;
use crate::dice::DiceRoller;
use crate::rules::{MexicoRules, MoveError, Outcome, RulesEngine};

/// Ways the loop can stop before a winner is known.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("input closed before the game ended")]
    InputClosed,
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// How a finished game ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameSummary {
    pub winner: String,
    pub pot_awarded: u32,
    /// Completed rounds, the last one included.
    pub rounds: u32,
}

/// Play `state` to the end.
///
/// Reads one command per line from `input` and writes prompts and results
/// to `output`.
pub fn run_game<D, R, W>(
    rules: &MexicoRules,
    state: &mut GameState,
    dice: &mut D,
    mut input: R,
    mut output: W,
) -> Result<GameSummary, SessionError>
where
    D: DiceRoller,
    R: BufRead,
    W: Write,
{
    writeln!(output, "Mexico Game Started")?;
    write_status(&mut output, state)?;

    let mut buf = Vec::new();
    loop {
        if let Some(result) = rules.is_terminal(state) {
            let winner = state
                .player(result.winner)
                .map(|p| p.name().to_string())
                .unwrap_or_default();
            writeln!(
                output,
                "Game Over, winner is {winner}. Wins the pot of {}",
                result.pot_awarded
            )?;
            output.flush()?;
            info!("{winner} won after {} rounds", state.pot);

            return Ok(GameSummary {
                winner,
                pot_awarded: result.pot_awarded,
                rounds: state.pot,
            });
        }

        write!(output, "Player is {} > ", state.current_player().name())?;
        output.flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            return Err(SessionError::InputClosed);
        }
        // Undecodable bytes become an unknown command, not an I/O failure
        let line = String::from_utf8_lossy(&buf);
        debug!("input {:?}", line.trim_end());

        let outcomes = rules.submit_command(state, dice, &line);
        let mut round_ended = false;
        for outcome in &outcomes {
            round_ended |= matches!(outcome, Outcome::RoundEnded { .. });
            write_outcome(&mut output, outcome)?;
        }
        if round_ended {
            write_status(&mut output, state)?;
        }
    }
}

/// `Status: <name> <stake> ...` for every player still at the table.
pub fn write_status(output: &mut impl Write, state: &GameState) -> io::Result<()> {
    let board: Vec<String> = state
        .standings()
        .into_iter()
        .map(|s| format!("{} {}", s.name, s.stake))
        .collect();
    writeln!(output, "Status: {}", board.join(" "))
}

fn write_outcome(output: &mut impl Write, outcome: &Outcome) -> io::Result<()> {
    match outcome {
        Outcome::RolledDice { name, dice, .. } => writeln!(output, "{name} got {dice}"),
        Outcome::InvalidMove(MoveError::IllegalRoll(_)) => {
            writeln!(output, "Only one roll per round buddy")
        }
        Outcome::InvalidMove(_) => writeln!(output, "?"),
        Outcome::RoundEnded { name, stake, .. } => {
            writeln!(output, "{name} lost the round and now has {stake} left.")
        }
        // The prompt already names the next player; the winner is announced by the loop
        Outcome::TurnAdvanced { .. } | Outcome::GameOver { .. } => Ok(()),
    }
}
