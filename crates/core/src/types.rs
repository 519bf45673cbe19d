use serde::{Deserialize, Serialize};

/// One decision made by a combatant during a tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    #[default]
    None,
    AttackHigh,
    AttackLow,
    BlockHigh,
    BlockLow,
}

/// Height at which an attack travels or a block guards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Level {
    High,
    Low,
}

impl Action {
    /// Every action a combatant can actually choose, in declaration order.
    pub const CHOICES: [Action; 4] =
        [Action::AttackHigh, Action::AttackLow, Action::BlockHigh, Action::BlockLow];

    pub fn is_none(self) -> bool {
        self == Action::None
    }

    pub fn attack_level(self) -> Option<Level> {
        match self {
            Action::AttackHigh => Some(Level::High),
            Action::AttackLow => Some(Level::Low),
            Action::None | Action::BlockHigh | Action::BlockLow => None,
        }
    }

    pub fn block_level(self) -> Option<Level> {
        match self {
            Action::BlockHigh => Some(Level::High),
            Action::BlockLow => Some(Level::Low),
            Action::None | Action::AttackHigh | Action::AttackLow => None,
        }
    }

    /// Whether this action, used defensively, stops an attack at `level`.
    pub fn blocks(self, level: Level) -> bool {
        self.block_level() == Some(level)
    }
}

/// How a finished match ended, seen from the player's side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Won,
    Lost,
}

impl Outcome {
    /// Only the opponent's remaining health decides the result. A double knockout
    /// therefore counts as a win for the player.
    pub fn from_opponent_health(opponent_health: i32) -> Self {
        if opponent_health > 0 { Outcome::Lost } else { Outcome::Won }
    }

    pub fn is_win(self) -> bool {
        self == Outcome::Won
    }
}

/// The actions and damage of a single resolved tick. Only lives long enough to be rendered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Exchange {
    pub player_action: Action,
    pub opponent_action: Action,
    pub damage_to_player: i32,
    pub damage_to_opponent: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_attacks_have_an_attack_level() {
        assert_eq!(Action::AttackHigh.attack_level(), Some(Level::High));
        assert_eq!(Action::AttackLow.attack_level(), Some(Level::Low));
        assert_eq!(Action::BlockHigh.attack_level(), None);
        assert_eq!(Action::None.attack_level(), None);
    }

    #[test]
    fn blocks_only_guard_their_own_level() {
        assert!(Action::BlockHigh.blocks(Level::High));
        assert!(!Action::BlockHigh.blocks(Level::Low));
        assert!(Action::BlockLow.blocks(Level::Low));
        assert!(!Action::AttackLow.blocks(Level::Low));
    }

    #[test]
    fn choices_exclude_none() {
        assert!(Action::CHOICES.iter().all(|action| !action.is_none()));
    }

    #[test]
    fn outcome_ignores_player_health() {
        assert_eq!(Outcome::from_opponent_health(1), Outcome::Lost);
        assert_eq!(Outcome::from_opponent_health(0), Outcome::Won);
    }
}
