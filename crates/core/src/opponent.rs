//! Sources of opponent decisions.

use std::collections::VecDeque;

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::{Rng, SeedableRng};

use crate::types::Action;

/// Supplies one action each time the player commits to one.
pub trait ActionSource {
    fn next_action(&mut self) -> Action;
}

/// Picks uniformly among the four real actions, ignoring history.
pub struct RandomOpponent {
    rng: ChaCha8Rng,
}

impl RandomOpponent {
    pub fn new(seed: u64) -> Self {
        Self { rng: ChaCha8Rng::seed_from_u64(seed) }
    }
}

impl ActionSource for RandomOpponent {
    fn next_action(&mut self) -> Action {
        // 4 divides 2^32, so the modulo is unbiased.
        let index = self.rng.next_u32() as usize % Action::CHOICES.len();
        Action::CHOICES[index]
    }
}

/// Replays a fixed list of actions, then falls back to [`Action::None`].
#[derive(Clone, Debug, Default)]
pub struct ScriptedOpponent {
    actions: VecDeque<Action>,
}

impl ScriptedOpponent {
    pub fn new(actions: impl IntoIterator<Item = Action>) -> Self {
        Self { actions: actions.into_iter().collect() }
    }

    pub fn remaining(&self) -> usize {
        self.actions.len()
    }
}

impl ActionSource for ScriptedOpponent {
    fn next_action(&mut self) -> Action {
        self.actions.pop_front().unwrap_or_default()
    }
}
