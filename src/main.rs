//! `mexico` - play Mexico at the terminal.
//!
//! Olle, Fia and Lisa sit at the table. Type `r` to roll and `n` to pass.
//! Set `RUST_LOG=debug` to trace every move on stderr.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;

use mexico_dice::core::DEFAULT_PLAYER_NAMES;
use mexico_dice::{run_game, GameRng, IllegalRollPolicy, MexicoConfig, MexicoRule, MexicoRules};

/// How a {1,2} roll ranks.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum RuleArg {
    /// 21, like any other roll
    Literal,
    /// Beats everything
    Special,
}

impl From<RuleArg> for MexicoRule {
    fn from(arg: RuleArg) -> Self {
        match arg {
            RuleArg::Literal => MexicoRule::Literal,
            RuleArg::Special => MexicoRule::Special,
        }
    }
}

#[derive(Parser)]
#[command(name = "mexico", version, about)]
struct Cli {
    /// Seed for the dice and the opening player; random when omitted.
    #[arg(long, env = "MEXICO_SEED")]
    seed: Option<u64>,

    /// Ranking of a Mexico roll.
    #[arg(long, value_enum, default_value_t = RuleArg::Special)]
    mexico_rule: RuleArg,

    /// Hand the turn on after a refused roll instead of asking again.
    #[arg(long)]
    force_pass: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let illegal_roll = if cli.force_pass {
        IllegalRollPolicy::ForcePass
    } else {
        IllegalRollPolicy::Reprompt
    };
    let config = MexicoConfig::default()
        .with_mexico_rule(cli.mexico_rule.into())
        .with_illegal_roll(illegal_roll);
    let rules = MexicoRules::new(config).context("invalid table rules")?;

    let mut rng = cli.seed.map_or_else(GameRng::from_entropy, GameRng::new);
    info!("seed {}", rng.seed());

    let mut state = rules
        .new_game(DEFAULT_PLAYER_NAMES, &mut rng)
        .context("could not seat players")?;

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run_game(&rules, &mut state, &mut rng, stdin.lock(), stdout.lock())?;

    Ok(())
}
