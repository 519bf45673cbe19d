use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use fight_core::MatchJournal;

use crate::APP_NAME;

pub fn get_default_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", APP_NAME).map(|proj_dirs| {
        let mut path = proj_dirs.data_dir().to_path_buf();
        path.push("last_match.json");
        path
    })
}

pub fn write_atomic(journal: &MatchJournal, path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let tmp_path = path.with_extension("json.tmp");
    let json = journal.to_json().map_err(io::Error::other)?;

    fs::write(&tmp_path, json)?;
    fs::rename(&tmp_path, path)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use fight_core::{Action, MatchConfig};
    use tempfile::tempdir;

    #[test]
    fn test_atomic_write_round_trips_through_journal_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("match.json");

        let mut journal = MatchJournal::new(99, MatchConfig::default());
        journal.record(Action::AttackHigh);
        journal.record(Action::BlockLow);

        write_atomic(&journal, &path).unwrap();
        assert!(path.exists());

        let content = fs::read_to_string(&path).unwrap();
        let loaded = MatchJournal::from_json(&content).unwrap();
        assert_eq!(journal, loaded);

        // Verify tmp file is gone
        let tmp_path = path.with_extension("json.tmp");
        assert!(!tmp_path.exists());
    }
}
