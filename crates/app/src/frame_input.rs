//! Keyboard input collection for one rendered frame.

use fight_app::app_loop::FrameInput;
use fight_core::{KeyState, LogicalKey};
use macroquad::prelude::{KeyCode, is_key_down, is_key_pressed};

const FIGHT_KEYS: [(KeyCode, LogicalKey); 4] = [
    (KeyCode::Q, LogicalKey::AttackHigh),
    (KeyCode::A, LogicalKey::AttackLow),
    (KeyCode::E, LogicalKey::BlockHigh),
    (KeyCode::D, LogicalKey::BlockLow),
];

/// Fight keys are sampled as level state; the core latch does the edge detection.
pub fn capture_frame_input() -> FrameInput {
    let mut keys = KeyState::default();
    for (code, key) in FIGHT_KEYS {
        keys = keys.with(key, is_key_down(code));
    }

    let rematch = is_key_pressed(KeyCode::Enter) || is_key_pressed(KeyCode::Space);

    FrameInput { keys, rematch }
}
