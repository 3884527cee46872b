//! Window configuration for the desktop app.

use lifesim_core::settings::WindowSettings;
use macroquad::window::Conf;

pub fn build_window_conf(window: &WindowSettings) -> Conf {
    Conf {
        window_title: window.title.clone(),
        window_width: window.width,
        window_height: window.height,
        window_resizable: false,
        ..Default::default()
    }
}
