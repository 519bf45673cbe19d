//! Stable snapshot hashing for deterministic verification.
//! Replays compare this value instead of walking the session field by field.

use std::hash::Hasher;

use xxhash_rust::xxh3::Xxh3;

use super::{Phase, Session};
use crate::types::Outcome;

impl Session {
    pub fn snapshot_hash(&self) -> u64 {
        let mut hasher = Xxh3::new();
        hasher.write_i32(self.player_health);
        hasher.write_i32(self.opponent_health);
        hasher.write_u64(self.exchanges_resolved);
        hasher.write_u8(match self.phase {
            Phase::Active => 0,
            Phase::Ending { .. } => 1,
            Phase::Terminal(Outcome::Won) => 2,
            Phase::Terminal(Outcome::Lost) => 3,
        });
        hasher.finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::config::MatchConfig;
    use crate::session::Session;
    use crate::types::Action;

    #[test]
    fn hash_tracks_health_changes() {
        let mut session = Session::new(MatchConfig::default()).expect("valid config");
        let initial = session.snapshot_hash();
        session.play(Action::AttackLow, Action::BlockHigh);
        assert_ne!(initial, session.snapshot_hash());
    }

    #[test]
    fn identical_sessions_hash_identically() {
        let first = Session::new(MatchConfig::default()).expect("valid config");
        let second = Session::new(MatchConfig::default()).expect("valid config");
        assert_eq!(first.snapshot_hash(), second.snapshot_hash());
    }
}
