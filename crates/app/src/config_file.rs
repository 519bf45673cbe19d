//! Loading match constants from a TOML file.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use fight_core::{ConfigError, MatchConfig};
use thiserror::Error;
use tracing::info;

use crate::APP_NAME;

pub const CONFIG_FILE_NAME: &str = "fight.toml";

#[derive(Debug, Error)]
pub enum ConfigFileError {
    #[error("failed to read {}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },
    #[error("invalid match config in {}: {source}", path.display())]
    Invalid { path: PathBuf, source: ConfigError },
}

pub fn get_default_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", APP_NAME)
        .map(|proj_dirs| proj_dirs.config_dir().join(CONFIG_FILE_NAME))
}

pub fn load(path: &Path) -> Result<MatchConfig, ConfigFileError> {
    let content = fs::read_to_string(path)
        .map_err(|source| ConfigFileError::Io { path: path.to_path_buf(), source })?;
    MatchConfig::from_toml_str(&content)
        .map_err(|source| ConfigFileError::Invalid { path: path.to_path_buf(), source })
}

/// An explicit path must load. The default path is optional and only used when the
/// file exists; otherwise the built-in defaults apply.
pub fn resolve_match_config(
    explicit_path: Option<&Path>,
    default_path: Option<&Path>,
) -> Result<MatchConfig, ConfigFileError> {
    if let Some(path) = explicit_path {
        return load(path);
    }
    match default_path {
        Some(path) if path.exists() => {
            info!(path = %path.display(), "loading match config");
            load(path)
        }
        _ => Ok(MatchConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn loads_overrides_from_file() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "high_damage = 30\nopponent_damage_multiplier = 1.0\n").expect("write");

        let config = load(&path).expect("load");
        assert_eq!(config.high_damage, 30);
        assert_eq!(config.opponent_damage_multiplier, 1.0);
        assert_eq!(config.starting_health, 100);
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("missing.toml");
        let err = resolve_match_config(Some(&path), None).expect_err("must fail");
        assert!(matches!(err, ConfigFileError::Io { .. }));
    }

    #[test]
    fn missing_default_file_falls_back_to_defaults() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join(CONFIG_FILE_NAME);
        let config = resolve_match_config(None, Some(&path)).expect("defaults");
        assert_eq!(config, MatchConfig::default());
    }

    #[test]
    fn invalid_values_name_the_file() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "starting_health = 0\n").expect("write");

        let err = resolve_match_config(None, Some(&path)).expect_err("must reject");
        assert!(matches!(err, ConfigFileError::Invalid { .. }));
        assert!(err.to_string().contains(CONFIG_FILE_NAME), "unexpected message: {err}");
    }
}
