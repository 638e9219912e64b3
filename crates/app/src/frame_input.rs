//! Keyboard input collection for one rendered frame.

use macroquad::prelude::{KeyCode, is_key_pressed};

const TRACKED_KEYS: [KeyCode; 13] = [
    KeyCode::Up,
    KeyCode::Down,
    KeyCode::Left,
    KeyCode::Right,
    KeyCode::W,
    KeyCode::A,
    KeyCode::S,
    KeyCode::D,
    KeyCode::Key1,
    KeyCode::Key2,
    KeyCode::Key3,
    KeyCode::Key4,
    KeyCode::Escape,
];

#[derive(Default)]
pub struct FrameInput {
    pub keys_pressed: Vec<KeyCode>,
}

pub fn capture_frame_input() -> FrameInput {
    let mut keys_pressed = Vec::with_capacity(TRACKED_KEYS.len());
    for key in TRACKED_KEYS {
        if is_key_pressed(key) {
            keys_pressed.push(key);
        }
    }
    FrameInput { keys_pressed }
}
