//! Pure action resolution and victory detection.
//! Both functions take health values in and hand new values back; the session owns the state.

use crate::config::MatchConfig;
use crate::types::{Action, Outcome};

/// Health and damage after one pair of actions, before clamping.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Resolution {
    pub player_health: i32,
    pub opponent_health: i32,
    pub damage_to_player: i32,
    pub damage_to_opponent: i32,
}

/// Result of checking both combatants for a knockout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VictoryCheck {
    pub player_health: i32,
    pub opponent_health: i32,
    pub is_over: bool,
    pub winner: Option<Outcome>,
}

/// Apply both combatants' actions at once.
///
/// Each attack is checked against the other side's action independently, so two
/// attacks in the same tick both land. A block cancels only an attack at its own
/// level. Health can go negative here; see [`check_victory`].
pub fn resolve(
    config: &MatchConfig,
    player_action: Action,
    opponent_action: Action,
    player_health: i32,
    opponent_health: i32,
) -> Resolution {
    let damage_to_opponent = match player_action.attack_level() {
        Some(level) if !opponent_action.blocks(level) => config.base_damage(level),
        _ => 0,
    };
    let damage_to_player = match opponent_action.attack_level() {
        Some(level) if !player_action.blocks(level) => config.opponent_damage(level),
        _ => 0,
    };

    Resolution {
        player_health: player_health.saturating_sub(damage_to_player),
        opponent_health: opponent_health.saturating_sub(damage_to_opponent),
        damage_to_player,
        damage_to_opponent,
    }
}

/// Clamp negative health to zero and report whether the match is over.
///
/// Only health strictly below zero ends the match; a combatant left at exactly
/// zero keeps fighting.
pub fn check_victory(player_health: i32, opponent_health: i32) -> VictoryCheck {
    let mut is_over = false;
    let mut clamp = |health: i32| {
        if health < 0 {
            is_over = true;
            0
        } else {
            health
        }
    };
    let opponent_health = clamp(opponent_health);
    let player_health = clamp(player_health);

    VictoryCheck {
        player_health,
        opponent_health,
        is_over,
        winner: is_over.then(|| Outcome::from_opponent_health(opponent_health)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve_default(player: Action, opponent: Action) -> Resolution {
        resolve(&MatchConfig::default(), player, opponent, 100, 100)
    }

    #[test]
    fn simultaneous_attacks_both_land() {
        let resolution = resolve_default(Action::AttackHigh, Action::AttackLow);
        assert_eq!(resolution.damage_to_opponent, 15);
        assert_eq!(resolution.damage_to_player, 11);
        assert_eq!(resolution.opponent_health, 85);
        assert_eq!(resolution.player_health, 89);
    }

    #[test]
    fn matching_block_nullifies_attack() {
        let resolution = resolve_default(Action::AttackHigh, Action::BlockHigh);
        assert_eq!(resolution.damage_to_opponent, 0);
        assert_eq!(resolution.damage_to_player, 0);

        let resolution = resolve_default(Action::BlockLow, Action::AttackLow);
        assert_eq!(resolution.damage_to_player, 0);
        assert_eq!(resolution.player_health, 100);
    }

    #[test]
    fn mismatched_block_does_not_help() {
        let resolution = resolve_default(Action::AttackLow, Action::BlockHigh);
        assert_eq!(resolution.damage_to_opponent, 10);

        let resolution = resolve_default(Action::BlockLow, Action::AttackHigh);
        assert_eq!(resolution.damage_to_player, 16);
    }

    #[test]
    fn blocks_never_deal_damage() {
        for player in [Action::BlockHigh, Action::BlockLow] {
            for opponent in [Action::BlockHigh, Action::BlockLow, Action::None] {
                let resolution = resolve_default(player, opponent);
                assert_eq!(resolution.damage_to_player, 0);
                assert_eq!(resolution.damage_to_opponent, 0);
            }
        }
    }

    #[test]
    fn resolve_does_not_clamp() {
        let resolution = resolve(&MatchConfig::default(), Action::AttackHigh, Action::None, 100, 5);
        assert_eq!(resolution.opponent_health, -10);
    }

    #[test]
    fn check_victory_clamps_and_picks_winner() {
        let check = check_victory(40, -10);
        assert_eq!(check.opponent_health, 0);
        assert!(check.is_over);
        assert_eq!(check.winner, Some(Outcome::Won));

        let check = check_victory(-1, 30);
        assert_eq!(check.player_health, 0);
        assert_eq!(check.winner, Some(Outcome::Lost));
    }

    #[test]
    fn double_knockout_counts_as_player_win() {
        let check = check_victory(-4, -6);
        assert_eq!((check.player_health, check.opponent_health), (0, 0));
        assert_eq!(check.winner, Some(Outcome::Won));
    }

    #[test]
    fn exactly_zero_health_is_not_a_knockout() {
        let check = check_victory(0, 50);
        assert!(!check.is_over);
        assert_eq!(check.winner, None);
    }
}
