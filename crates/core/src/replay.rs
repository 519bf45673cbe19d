use thiserror::Error;

use crate::config::ConfigError;
use crate::journal::{JOURNAL_FORMAT_VERSION, MatchJournal};
use crate::opponent::{ActionSource, RandomOpponent};
use crate::session::Session;
use crate::types::Outcome;

#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("journal format version {0} is not supported")]
    UnsupportedFormat(u16),
    #[error("journal config is invalid: {0}")]
    InvalidConfig(#[from] ConfigError),
    #[error("journal has input at index {index} after the match ended")]
    InputAfterGameOver { index: usize },
}

#[derive(Debug, PartialEq, Eq)]
pub struct ReplayResult {
    pub player_health: i32,
    pub opponent_health: i32,
    pub outcome: Option<Outcome>,
    pub exchanges: u64,
    pub final_snapshot_hash: u64,
}

/// Rebuild a match from its journal, drawing opponent actions from the journal seed.
pub fn replay(journal: &MatchJournal) -> Result<ReplayResult, ReplayError> {
    if journal.format_version != JOURNAL_FORMAT_VERSION {
        return Err(ReplayError::UnsupportedFormat(journal.format_version));
    }

    let mut session = Session::new(journal.config)?;
    let mut opponent = RandomOpponent::new(journal.seed);

    for (index, &action) in journal.actions.iter().enumerate() {
        if session.is_over() {
            return Err(ReplayError::InputAfterGameOver { index });
        }
        // The live driver never consults the opponent for an idle tick.
        if action.is_none() {
            continue;
        }
        session.play(action, opponent.next_action());
    }

    Ok(ReplayResult {
        player_health: session.player_health(),
        opponent_health: session.opponent_health(),
        outcome: session.outcome(),
        exchanges: session.exchanges_resolved(),
        final_snapshot_hash: session.snapshot_hash(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MatchConfig;
    use crate::types::Action;

    #[test]
    fn empty_journal_replays_to_fresh_session() {
        let journal = MatchJournal::new(3, MatchConfig::default());
        let result = replay(&journal).expect("replay");
        assert_eq!((result.player_health, result.opponent_health), (100, 100));
        assert_eq!(result.outcome, None);
        assert_eq!(result.exchanges, 0);
    }

    #[test]
    fn rejects_unknown_format_version() {
        let mut journal = MatchJournal::new(3, MatchConfig::default());
        journal.format_version = 9;
        assert!(matches!(replay(&journal), Err(ReplayError::UnsupportedFormat(9))));
    }

    #[test]
    fn rejects_invalid_config() {
        let config = MatchConfig { starting_health: 0, ..MatchConfig::default() };
        let journal = MatchJournal::new(3, config);
        assert!(matches!(replay(&journal), Err(ReplayError::InvalidConfig(_))));
    }

    #[test]
    fn rejects_inputs_after_knockout() {
        // At 1 health the first high attack that is not blocked high ends the match.
        let config = MatchConfig { starting_health: 1, ..MatchConfig::default() };
        let mut journal = MatchJournal::new(11, config);
        journal.actions = vec![Action::AttackHigh; 40];
        assert!(matches!(replay(&journal), Err(ReplayError::InputAfterGameOver { .. })));
    }
}
