//! Loading the player sprite sheet texture.

use std::path::Path;

use anyhow::{Context, Result, anyhow};
use lifesim_core::sprite_sheet::{FrameRect, SheetLayout};
use macroquad::prelude::{
    DrawTextureParams, FilterMode, Rect, Texture2D, WHITE, draw_texture_ex, load_texture, vec2,
};
use tracing::{info, warn};

pub struct LoadedSheet {
    texture: Texture2D,
}

impl LoadedSheet {
    pub async fn load(path: &Path) -> Result<Self> {
        let path_text = path.to_str().context("sprite sheet path is not valid UTF-8")?;
        let texture = load_texture(path_text)
            .await
            .map_err(|err| anyhow!("failed to load sprite sheet {}: {err:?}", path.display()))?;
        texture.set_filter(FilterMode::Nearest);
        info!(
            path = %path.display(),
            width = texture.width(),
            height = texture.height(),
            "sprite sheet loaded"
        );
        Ok(Self { texture })
    }

    /// Missing, unreadable, or mis-sized sheets fall back to a placeholder block.
    pub async fn load_optional(path: Option<&Path>, layout: &SheetLayout) -> Option<Self> {
        let path = path?;
        let sheet = match Self::load(path).await {
            Ok(sheet) => sheet,
            Err(err) => {
                warn!("using placeholder sprite: {err:#}");
                return None;
            }
        };
        let size = (sheet.texture.width() as u32, sheet.texture.height() as u32);
        if size != (layout.image_width, layout.image_height) {
            warn!(
                actual = ?size,
                expected = ?(layout.image_width, layout.image_height),
                "sprite sheet size does not match configured layout, using placeholder"
            );
            return None;
        }
        Some(sheet)
    }

    /// Draw one frame with its center at `(center_x, center_y)`, rescaled to
    /// `w` x `h`.
    pub fn draw_frame(&self, frame: FrameRect, center_x: f32, center_y: f32, w: f32, h: f32) {
        let source =
            Rect::new(frame.x as f32, frame.y as f32, frame.width as f32, frame.height as f32);
        draw_texture_ex(
            &self.texture,
            center_x - w / 2.0,
            center_y - h / 2.0,
            WHITE,
            DrawTextureParams {
                source: Some(source),
                dest_size: Some(vec2(w, h)),
                ..Default::default()
            },
        );
    }
}
