//! The player scene: owns the sprite group and advances it once per frame.

use tracing::warn;

use crate::animation::{AnimationError, DirectionalAnimator};
use crate::player::{Bounds, PlayerController, PlayerInput};
use crate::settings::{PlayerSettings, WindowSettings};
use crate::sprite_sheet::{DirectionalSheet, FrameRect};
use crate::types::Vec2;

pub struct Level {
    pub player: PlayerController,
    animator: DirectionalAnimator,
    sheet: Option<DirectionalSheet>,
}

impl Level {
    /// Spawn the player at the window center.
    pub fn new(window: &WindowSettings, settings: &PlayerSettings) -> Result<Self, AnimationError> {
        let width = window.width as f32;
        let height = window.height as f32;
        let player = PlayerController::new(Vec2::new(width / 2.0, height / 2.0), settings.speed)
            .with_bounds(Bounds { width, height });

        let sheet = match DirectionalSheet::new(settings.sheet, settings.direction_rows) {
            Ok(sheet) => Some(sheet),
            Err(err) => {
                warn!(%err, "sprite sheet layout rejected, using placeholder");
                None
            }
        };
        let walk_frames = sheet.map_or(1, |sheet| sheet.layout.frames_in_row());
        let animator = DirectionalAnimator::new(walk_frames, settings.frame_ms)?;

        Ok(Self { player, animator, sheet })
    }

    pub fn update(&mut self, input: PlayerInput, dt: f32) {
        self.player.update(input, dt);
        let delta_ms = (dt.max(0.0) * 1000.0).round() as u32;
        self.animator.update(self.player.animation_key(), delta_ms);
    }

    /// Source rectangle for the current animation frame, if a sheet is set.
    pub fn current_frame(&self) -> Option<FrameRect> {
        self.sheet.map(|sheet| sheet.frame_for(self.player.facing, self.animator.frame()))
    }

    pub fn animation_frame(&self) -> usize {
        self.animator.frame()
    }
}
