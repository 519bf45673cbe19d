//! Edge detection for the four fight keys.
//! Raw key sampling belongs to the frontend; this module only turns level
//! state into at most one action per physical press.

use crate::types::Action;

/// Logical fight keys, listed in the priority used when several go down together.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LogicalKey {
    AttackHigh,
    AttackLow,
    BlockHigh,
    BlockLow,
}

impl LogicalKey {
    pub const ALL: [LogicalKey; 4] = [
        LogicalKey::AttackHigh,
        LogicalKey::AttackLow,
        LogicalKey::BlockHigh,
        LogicalKey::BlockLow,
    ];

    pub fn action(self) -> Action {
        match self {
            LogicalKey::AttackHigh => Action::AttackHigh,
            LogicalKey::AttackLow => Action::AttackLow,
            LogicalKey::BlockHigh => Action::BlockHigh,
            LogicalKey::BlockLow => Action::BlockLow,
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Which logical keys are held down in one sample.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KeyState {
    down: [bool; 4],
}

impl KeyState {
    pub fn from_pressed(keys: &[LogicalKey]) -> Self {
        let mut state = Self::default();
        for key in keys {
            state.down[key.index()] = true;
        }
        state
    }

    pub fn with(mut self, key: LogicalKey, is_down: bool) -> Self {
        self.down[key.index()] = is_down;
        self
    }

    pub fn is_pressed(&self, key: LogicalKey) -> bool {
        self.down[key.index()]
    }

    pub fn any(&self) -> bool {
        self.down.iter().any(|down| *down)
    }
}

/// Per-key "was down last sample" latch.
#[derive(Clone, Debug, Default)]
pub struct InputLatch {
    held: [bool; 4],
}

impl InputLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the action for the highest-priority key that went down since the
    /// previous sample. Keys held across samples produce nothing.
    pub fn sample(&mut self, keys: KeyState) -> Action {
        if !keys.any() {
            self.held = [false; 4];
            return Action::None;
        }

        let mut action = Action::None;
        for key in LogicalKey::ALL {
            let is_down = keys.is_pressed(key);
            if is_down && !self.held[key.index()] && action.is_none() {
                action = key.action();
            }
            self.held[key.index()] = is_down;
        }
        action
    }
}
