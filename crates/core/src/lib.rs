pub mod animation;
pub mod level;
pub mod mapgen;
pub mod player;
pub mod road;
pub mod settings;
pub mod sprite_sheet;
pub mod tasks;
pub mod types;
pub mod walker;
pub mod world;

pub use level::Level;
pub use mapgen::{GridMap, MapError};
pub use settings::{Settings, SettingsError};
pub use tasks::{Character, Task, TaskBoard};
pub use types::*;
pub use world::{World, WorldError};
