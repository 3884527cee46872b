//! Tunable constants for every scene, loadable from a TOML file.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::mapgen::DEFAULT_OBSTACLE_CHANCE;
use crate::player::DEFAULT_PLAYER_SPEED;
use crate::sprite_sheet::{DirectionRows, SheetLayout};

pub type Rgb = [u8; 3];

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse settings file {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid settings: {0}")]
    Invalid(String),
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub window: WindowSettings,
    pub road: RoadSettings,
    pub grid: GridSettings,
    pub player: PlayerSettings,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub title: String,
    pub width: i32,
    pub height: i32,
    pub background: Rgb,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: "Agentic Life Simulation".to_string(),
            width: 800,
            height: 600,
            background: [20, 20, 40],
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoadSettings {
    pub task_count: usize,
    /// Every n-th task along the road is a milestone.
    pub milestone_every: usize,
    pub character_speeds: Vec<f32>,
    pub pixels_per_unit: f32,
    /// Fraction of the viewport width where the leading character is held.
    pub anchor: f32,
}

impl Default for RoadSettings {
    fn default() -> Self {
        Self {
            task_count: 12,
            milestone_every: 4,
            character_speeds: vec![0.12, 0.09, 0.06],
            pixels_per_unit: 24.0,
            anchor: 0.3,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSettings {
    pub width: usize,
    pub height: usize,
    pub tile_size: f32,
    pub obstacle_chance: f64,
    pub grass_color: Rgb,
    pub rock_color: Rgb,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            width: 20,
            height: 15,
            tile_size: 40.0,
            obstacle_chance: DEFAULT_OBSTACLE_CHANCE,
            grass_color: [50, 150, 50],
            rock_color: [130, 130, 130],
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerSettings {
    pub speed: f32,
    pub width: f32,
    pub height: f32,
    pub frame_ms: u32,
    pub sprite_sheet: Option<PathBuf>,
    pub sheet: SheetLayout,
    pub direction_rows: DirectionRows,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            speed: DEFAULT_PLAYER_SPEED,
            width: 32.0,
            height: 64.0,
            frame_ms: 150,
            sprite_sheet: None,
            sheet: SheetLayout {
                image_width: 128,
                image_height: 256,
                columns: 4,
                rows: 4,
                display_width: 32,
                display_height: 64,
            },
            direction_rows: DirectionRows::default(),
        }
    }
}

impl Settings {
    pub fn from_toml_str(text: &str, origin: &Path) -> Result<Self, SettingsError> {
        let settings: Settings = toml::from_str(text)
            .map_err(|source| SettingsError::Parse { path: origin.to_path_buf(), source })?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let text = fs::read_to_string(path)
            .map_err(|source| SettingsError::Read { path: path.to_path_buf(), source })?;
        Self::from_toml_str(&text, path)
    }

    /// Load `path` if it exists, otherwise fall back to defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, SettingsError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load(path)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.window.width <= 0 || self.window.height <= 0 {
            return Err(SettingsError::Invalid("window size must be positive".to_string()));
        }
        if self.grid.width == 0 || self.grid.height == 0 {
            return Err(SettingsError::Invalid("grid dimensions must be non-zero".to_string()));
        }
        if !self.grid.tile_size.is_finite() || self.grid.tile_size <= 0.0 {
            return Err(SettingsError::Invalid("tile size must be positive".to_string()));
        }
        if !self.road.pixels_per_unit.is_finite() || self.road.pixels_per_unit <= 0.0 {
            return Err(SettingsError::Invalid("pixels_per_unit must be positive".to_string()));
        }
        if !(0.0..=1.0).contains(&self.road.anchor) {
            return Err(SettingsError::Invalid("road anchor must be within 0..=1".to_string()));
        }
        if self.road.character_speeds.iter().any(|speed| !speed.is_finite() || *speed < 0.0) {
            return Err(SettingsError::Invalid(
                "character speeds must be finite and non-negative".to_string(),
            ));
        }
        if !self.player.speed.is_finite() || self.player.speed < 0.0 {
            return Err(SettingsError::Invalid(
                "player speed must be finite and non-negative".to_string(),
            ));
        }
        if self.player.frame_ms == 0 {
            return Err(SettingsError::Invalid("frame_ms must be greater than zero".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn empty_file_gives_defaults() {
        let settings = Settings::from_toml_str("", Path::new("inline")).expect("parse");
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.window.width, 800);
        assert_eq!(settings.grid.tile_size, 40.0);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let text = "[grid]\nobstacle_chance = 0.4\n\n[road]\ntask_count = 3\n";
        let settings = Settings::from_toml_str(text, Path::new("inline")).expect("parse");
        assert_eq!(settings.grid.obstacle_chance, 0.4);
        assert_eq!(settings.grid.width, 20);
        assert_eq!(settings.road.task_count, 3);
        assert_eq!(settings.road.milestone_every, 4);
    }

    #[test]
    fn invalid_values_are_rejected() {
        let err = Settings::from_toml_str("[grid]\nwidth = 0\n", Path::new("inline"))
            .expect_err("zero width");
        assert!(matches!(err, SettingsError::Invalid(_)));
    }

    #[test]
    fn non_finite_and_out_of_range_values_are_rejected() {
        let cases: [fn(&mut Settings); 4] = [
            |s| s.grid.tile_size = f32::NAN,
            |s| s.road.pixels_per_unit = f32::NAN,
            |s| s.road.anchor = 1.5,
            |s| s.player.speed = f32::INFINITY,
        ];
        for mutate in cases {
            let mut settings = Settings::default();
            mutate(&mut settings);
            assert!(matches!(settings.validate(), Err(SettingsError::Invalid(_))));
        }
    }

    #[test]
    fn malformed_toml_reports_path() {
        let err =
            Settings::from_toml_str("[grid", Path::new("lifesim.toml")).expect_err("bad toml");
        assert!(err.to_string().contains("lifesim.toml"));
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempdir().expect("tempdir");
        let settings =
            Settings::load_or_default(&dir.path().join("absent.toml")).expect("defaults");
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn load_reads_file_from_disk() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("lifesim.toml");
        fs::write(&path, "[player]\nspeed = 120.0\n").expect("write");
        let settings = Settings::load(&path).expect("load");
        assert_eq!(settings.player.speed, 120.0);
    }
}
