//! Match session: both health pools, the game-over flag and the post-match timer.

mod hash;

use std::time::Duration;

use tracing::{debug, info};

use crate::combat::{check_victory, resolve};
use crate::config::{ConfigError, MatchConfig};
use crate::types::{Action, Exchange, Outcome};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Active,
    /// Game over; waiting for the delay before the outcome screen.
    Ending {
        elapsed: Duration,
    },
    Terminal(Outcome),
}

#[derive(Clone, Debug)]
pub struct Session {
    config: MatchConfig,
    player_health: i32,
    opponent_health: i32,
    phase: Phase,
    exchanges_resolved: u64,
}

impl Session {
    pub fn new(config: MatchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            player_health: config.starting_health,
            opponent_health: config.starting_health,
            phase: Phase::Active,
            exchanges_resolved: 0,
        })
    }

    /// Resolve one pair of actions.
    ///
    /// Returns `None` without touching any state when the player did nothing or the
    /// match is already over.
    pub fn play(&mut self, player_action: Action, opponent_action: Action) -> Option<Exchange> {
        if player_action.is_none() || self.phase != Phase::Active {
            return None;
        }

        let resolution = resolve(
            &self.config,
            player_action,
            opponent_action,
            self.player_health,
            self.opponent_health,
        );
        let check = check_victory(resolution.player_health, resolution.opponent_health);
        self.player_health = check.player_health;
        self.opponent_health = check.opponent_health;
        self.exchanges_resolved += 1;

        debug!(
            ?player_action,
            ?opponent_action,
            damage_to_player = resolution.damage_to_player,
            damage_to_opponent = resolution.damage_to_opponent,
            player_health = self.player_health,
            opponent_health = self.opponent_health,
            "exchange resolved"
        );

        if check.is_over {
            info!(
                winner = ?check.winner,
                exchanges = self.exchanges_resolved,
                "match over"
            );
            self.phase = Phase::Ending { elapsed: Duration::ZERO };
        }

        Some(Exchange {
            player_action,
            opponent_action,
            damage_to_player: resolution.damage_to_player,
            damage_to_opponent: resolution.damage_to_opponent,
        })
    }

    /// Feed real elapsed time into the post-match timer.
    ///
    /// Yields the outcome exactly once, on the call that crosses the configured delay.
    pub fn advance_time(&mut self, dt: Duration) -> Option<Outcome> {
        let delay = self.config.game_over_delay();
        let Phase::Ending { elapsed } = &mut self.phase else {
            return None;
        };
        *elapsed += dt;
        if *elapsed < delay {
            return None;
        }

        let outcome = Outcome::from_opponent_health(self.opponent_health);
        info!(?outcome, "switching to outcome screen");
        self.phase = Phase::Terminal(outcome);
        Some(outcome)
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    pub fn player_health(&self) -> i32 {
        self.player_health
    }

    pub fn opponent_health(&self) -> i32 {
        self.opponent_health
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_over(&self) -> bool {
        self.phase != Phase::Active
    }

    /// The result the outcome screen will show, known as soon as the match is over.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.phase {
            Phase::Active => None,
            Phase::Ending { .. } => Some(Outcome::from_opponent_health(self.opponent_health)),
            Phase::Terminal(outcome) => Some(outcome),
        }
    }

    pub fn exchanges_resolved(&self) -> u64 {
        self.exchanges_resolved
    }
}
