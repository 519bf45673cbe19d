//! Tunable match constants and their validation.
//! Every value can be overridden when a session is constructed, either in code or
//! from a TOML document where missing keys fall back to the defaults.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::types::Level;

pub const DEFAULT_STARTING_HEALTH: i32 = 100;
pub const DEFAULT_LOW_DAMAGE: i32 = 10;
pub const DEFAULT_HIGH_DAMAGE: i32 = 15;
pub const DEFAULT_OPPONENT_DAMAGE_MULTIPLIER: f32 = 1.1;
pub const DEFAULT_GAME_OVER_DELAY_SECS: f32 = 2.0;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("starting health must be positive, got {0}")]
    NonPositiveStartingHealth(i32),
    #[error("{name} must not be negative, got {value}")]
    NegativeDamage { name: &'static str, value: i32 },
    #[error("opponent damage multiplier must be a finite non-negative number, got {0}")]
    InvalidMultiplier(f32),
    #[error("game over delay must be a finite non-negative number of seconds, got {0}")]
    InvalidDelay(f32),
    #[error("failed to parse match config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    pub starting_health: i32,
    pub low_damage: i32,
    pub high_damage: i32,
    pub opponent_damage_multiplier: f32,
    pub game_over_delay_secs: f32,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            starting_health: DEFAULT_STARTING_HEALTH,
            low_damage: DEFAULT_LOW_DAMAGE,
            high_damage: DEFAULT_HIGH_DAMAGE,
            opponent_damage_multiplier: DEFAULT_OPPONENT_DAMAGE_MULTIPLIER,
            game_over_delay_secs: DEFAULT_GAME_OVER_DELAY_SECS,
        }
    }
}

impl MatchConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.starting_health <= 0 {
            return Err(ConfigError::NonPositiveStartingHealth(self.starting_health));
        }
        if self.low_damage < 0 {
            return Err(ConfigError::NegativeDamage { name: "low_damage", value: self.low_damage });
        }
        if self.high_damage < 0 {
            return Err(ConfigError::NegativeDamage {
                name: "high_damage",
                value: self.high_damage,
            });
        }
        if !self.opponent_damage_multiplier.is_finite() || self.opponent_damage_multiplier < 0.0 {
            return Err(ConfigError::InvalidMultiplier(self.opponent_damage_multiplier));
        }
        // Also rejects values too large for a `Duration`.
        if Duration::try_from_secs_f32(self.game_over_delay_secs).is_err() {
            return Err(ConfigError::InvalidDelay(self.game_over_delay_secs));
        }
        Ok(())
    }

    /// Parse a TOML document and validate the result.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw)?;
        if let Err(err) = config.validate() {
            warn!(%err, "rejected match config");
            return Err(err);
        }
        Ok(config)
    }

    /// Damage the player deals with an unblocked attack at `level`.
    pub fn base_damage(&self, level: Level) -> i32 {
        match level {
            Level::High => self.high_damage,
            Level::Low => self.low_damage,
        }
    }

    /// Damage the opponent deals with an unblocked attack at `level`.
    pub fn opponent_damage(&self, level: Level) -> i32 {
        // f32 arithmetic: 15 * 1.1 is 16.5 and floors to 16.
        (self.base_damage(level) as f32 * self.opponent_damage_multiplier).floor() as i32
    }

    pub fn game_over_delay(&self) -> Duration {
        Duration::try_from_secs_f32(self.game_over_delay_secs).unwrap_or(Duration::ZERO)
    }
}
