use serde::{Deserialize, Serialize};

use crate::config::MatchConfig;
use crate::types::Action;

pub const JOURNAL_FORMAT_VERSION: u16 = 1;

/// Everything needed to reproduce a match: the opponent seed, the constants and
/// the player's resolved actions in order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchJournal {
    pub format_version: u16,
    pub seed: u64,
    pub config: MatchConfig,
    pub actions: Vec<Action>,
}

impl MatchJournal {
    pub fn new(seed: u64, config: MatchConfig) -> Self {
        Self { format_version: JOURNAL_FORMAT_VERSION, seed, config, actions: Vec::new() }
    }

    pub fn record(&mut self, action: Action) {
        self.actions.push(action);
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pretty_json_is_accepted_back() {
        let mut journal = MatchJournal::new(7, MatchConfig::default());
        journal.record(Action::AttackLow);
        let raw = journal.to_json().expect("journal serializes");
        assert!(raw.contains("\"format_version\": 1"));
        assert_eq!(MatchJournal::from_json(&raw).expect("journal parses"), journal);
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(MatchJournal::from_json("not json").is_err());
    }
}
