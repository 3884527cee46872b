//! Random obstacle maps: independent per-tile draws with the origin kept clear.

mod grid;
pub(crate) mod seed;

use thiserror::Error;
use tracing::debug;

pub use grid::GridMap;
pub use seed::derive_map_seed;

use crate::types::{GridPos, Tile};
use seed::UnitStream;

pub const DEFAULT_OBSTACLE_CHANCE: f64 = 0.25;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapError {
    #[error("map dimensions must be non-zero, got {width}x{height}")]
    EmptyDimensions { width: usize, height: usize },
    #[error("map dimensions {width}x{height} are too large")]
    TooLarge { width: usize, height: usize },
}

/// Generate a `width` x `height` map. Each tile is a rock when its draw falls
/// below `obstacle_chance`; the origin tile is always grass.
pub fn generate(
    width: usize,
    height: usize,
    obstacle_chance: f64,
    seed: u64,
) -> Result<GridMap, MapError> {
    if width == 0 || height == 0 {
        return Err(MapError::EmptyDimensions { width, height });
    }
    let tile_count =
        width.checked_mul(height).ok_or(MapError::TooLarge { width, height })?;
    let chance = clamp_chance(obstacle_chance);
    let mut stream = UnitStream::new(seed);
    let tiles = (0..tile_count)
        .map(|_| if stream.next_unit() < chance { Tile::Rock } else { Tile::Grass })
        .collect();

    let mut map = GridMap::from_tiles(width, height, tiles);
    map.set_tile(GridPos::ORIGIN, Tile::Grass);
    debug!(width, height, chance, rocks = map.rock_count(), "generated grid map");
    Ok(map)
}

pub fn clamp_chance(value: f64) -> f64 {
    if !value.is_finite() {
        return DEFAULT_OBSTACLE_CHANCE;
    }
    value.clamp(0.0, 1.0)
}
