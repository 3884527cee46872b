//! Keyboard input collection for one rendered frame.

use lifesim_app::app_loop::FrameInput;
use macroquad::prelude::{
    KeyCode, get_frame_time, is_key_down, is_key_pressed, is_quit_requested,
};

const PRESS_KEYS: [KeyCode; 10] = [
    KeyCode::Escape,
    KeyCode::Space,
    KeyCode::R,
    KeyCode::Key1,
    KeyCode::Key2,
    KeyCode::Key3,
    KeyCode::Up,
    KeyCode::Down,
    KeyCode::Left,
    KeyCode::Right,
];

const HELD_KEYS: [KeyCode; 8] = [
    KeyCode::Up,
    KeyCode::Down,
    KeyCode::Left,
    KeyCode::Right,
    KeyCode::W,
    KeyCode::S,
    KeyCode::A,
    KeyCode::D,
];

// Long stalls (window drag, breakpoint) would otherwise teleport the player.
const MAX_FRAME_DT: f32 = 0.1;

pub fn capture_frame_input() -> FrameInput {
    let keys_pressed = PRESS_KEYS.into_iter().filter(|&key| is_key_pressed(key)).collect();
    let keys_down = HELD_KEYS.into_iter().filter(|&key| is_key_down(key)).collect();
    FrameInput {
        keys_pressed,
        keys_down,
        dt: get_frame_time().min(MAX_FRAME_DT),
        quit_requested: is_quit_requested(),
    }
}
