//! Text shown in the health and info fields after each exchange.

use crate::types::{Action, Exchange};

pub fn player_action_label(action: Action) -> &'static str {
    match action {
        Action::None => "",
        Action::AttackHigh => "You attacked high: ",
        Action::AttackLow => "You attacked low: ",
        Action::BlockHigh => "You blocked high: ",
        Action::BlockLow => "You blocked low: ",
    }
}

pub fn opponent_action_label(action: Action) -> &'static str {
    match action {
        Action::None => "",
        Action::AttackHigh => "Enemy attacked high: ",
        Action::AttackLow => "Enemy attacked low: ",
        Action::BlockHigh => "Enemy blocked high: ",
        Action::BlockLow => "Enemy blocked low: ",
    }
}

pub fn health_text(health: i32) -> String {
    health.to_string()
}

/// Two lines: what the player did and the damage they dealt, then the same for the enemy.
pub fn info_text(exchange: &Exchange) -> String {
    format!(
        "{}{}\n{}{}",
        player_action_label(exchange.player_action),
        exchange.damage_to_opponent,
        opponent_action_label(exchange.opponent_action),
        exchange.damage_to_player
    )
}
