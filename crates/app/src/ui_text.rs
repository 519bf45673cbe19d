//! Text for the header, footer and outcome screen.

use fight_core::{Outcome, Phase};

pub const KEY_LEGEND: &str = "Q attack high   A attack low   E block high   D block low";
pub const REMATCH_HINT: &str = "Press Enter for a rematch";

pub fn status_text(phase: Phase) -> &'static str {
    match phase {
        Phase::Active => "Fight!",
        Phase::Ending { .. } => "K.O.!",
        Phase::Terminal(_) => "Match over",
    }
}

pub fn outcome_title(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Won => "You won!",
        Outcome::Lost => "You lost!",
    }
}

pub fn outcome_recap_lines(seed: u64, exchanges: u64, snapshot_hash: u64) -> Vec<String> {
    vec![
        format!("Exchanges: {exchanges}"),
        format!("Seed: {seed}"),
        format!("Snapshot: {}", fight_app::format_snapshot_hash(snapshot_hash)),
    ]
}
