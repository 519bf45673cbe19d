use std::fs;
use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use fight_core::{MatchJournal, ReplayResult, replay};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Replay a recorded match journal", long_about = None)]
struct Args {
    /// Path to the journal JSON file to replay
    #[arg(short, long)]
    journal: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let journal_data = fs::read_to_string(&args.journal)
        .with_context(|| format!("Failed to read journal file: {}", args.journal))?;
    let journal = MatchJournal::from_json(&journal_data)
        .with_context(|| "Failed to deserialize journal JSON")?;

    let result: ReplayResult = replay(&journal).context("Replay failed during execution")?;

    println!("Replay complete.");
    println!("Exchanges: {}", result.exchanges);
    println!("Player health: {}", result.player_health);
    println!("Opponent health: {}", result.opponent_health);
    println!("Outcome: {:?}", result.outcome);
    println!("Snapshot Hash: 0x{:016x}", result.final_snapshot_hash);

    Ok(())
}
