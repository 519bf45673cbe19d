use std::fs;
use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use clap::Parser;
use fight_core::{Action, ActionSource, MatchConfig, Outcome, Phase, RandomOpponent, Session};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Simulated frame length fed into the post-match timer.
const FRAME: Duration = Duration::from_millis(16);

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Play seeded matches headlessly and tally the results",
    long_about = None
)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 1000)]
    matches: u32,
    /// Optional TOML file overriding the match constants
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Give up on a match after this many exchanges
    #[arg(long, default_value_t = 10_000)]
    max_exchanges: u64,
}

fn choose(rng: &mut ChaCha8Rng) -> Action {
    Action::CHOICES[rng.next_u64() as usize % Action::CHOICES.len()]
}

fn load_config(path: Option<&PathBuf>) -> Result<MatchConfig> {
    let Some(path) = path else {
        return Ok(MatchConfig::default());
    };
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    MatchConfig::from_toml_str(&raw)
        .with_context(|| format!("Invalid config file: {}", path.display()))
}

fn play_match(config: MatchConfig, seed: u64, max_exchanges: u64) -> Result<(Outcome, Session)> {
    let mut session = Session::new(config)?;
    let mut opponent = RandomOpponent::new(seed);
    let mut player = ChaCha8Rng::seed_from_u64(seed.rotate_left(32));

    while !session.is_over() {
        if session.exchanges_resolved() >= max_exchanges {
            bail!("match with seed {seed} did not finish within {max_exchanges} exchanges");
        }
        let before = (session.player_health(), session.opponent_health());
        session.play(choose(&mut player), opponent.next_action());

        // Assert invariants
        if session.player_health() < 0 || session.opponent_health() < 0 {
            bail!("Invariant failed: negative health on seed {seed}");
        }
        if session.player_health() > before.0 || session.opponent_health() > before.1 {
            bail!("Invariant failed: health increased on seed {seed}");
        }
    }

    let frozen = (session.player_health(), session.opponent_health());
    if session.play(Action::AttackHigh, Action::AttackHigh).is_some() {
        bail!("Invariant failed: exchange resolved after game over on seed {seed}");
    }

    let mut frames = 0u64;
    loop {
        if let Some(outcome) = session.advance_time(FRAME) {
            if session.phase() != Phase::Terminal(outcome) {
                bail!("Invariant failed: transition did not reach terminal on seed {seed}");
            }
            if (session.player_health(), session.opponent_health()) != frozen {
                bail!("Invariant failed: health changed while ending on seed {seed}");
            }
            debug!(seed, frames, ?outcome, "transition fired");
            return Ok((outcome, session));
        }
        frames += 1;
        if frames > 1_000_000 {
            bail!("Invariant failed: transition never fired on seed {seed}");
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let config = load_config(args.config.as_ref())?;

    info!(seed = args.seed, matches = args.matches, ?config, "starting simulation");
    println!("Simulating {} matches from seed {}...", args.matches, args.seed);

    let mut seeds = ChaCha8Rng::seed_from_u64(args.seed);
    let (mut won, mut lost, mut double_knockouts, mut exchanges) = (0u32, 0u32, 0u32, 0u64);

    for _ in 0..args.matches {
        let seed = seeds.next_u64();
        let (outcome, session) = play_match(config, seed, args.max_exchanges)?;
        exchanges += session.exchanges_resolved();
        if session.player_health() == 0 && session.opponent_health() == 0 {
            double_knockouts += 1;
        }
        match outcome {
            Outcome::Won => won += 1,
            Outcome::Lost => lost += 1,
        }
    }

    println!("Won: {won}");
    println!("Lost: {lost}");
    println!("Double knockouts (scored as wins): {double_knockouts}");
    if args.matches > 0 {
        println!("Average exchanges per match: {:.1}", exchanges as f64 / f64::from(args.matches));
    }
    println!("Simulation completed successfully.");
    Ok(())
}
