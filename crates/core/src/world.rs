//! All prototype scenes of one run, sharing a seed and settings.

use tracing::info;

use crate::animation::AnimationError;
use crate::level::Level;
use crate::mapgen::{self, GridMap, MapError, derive_map_seed};
use crate::player::PlayerInput;
use crate::road::{RoadView, build_board};
use crate::settings::Settings;
use crate::tasks::TaskBoard;
use crate::types::{Facing, SimEvent};
use crate::walker::{GridWalker, StepOutcome};

#[derive(Debug, thiserror::Error)]
pub enum WorldError {
    #[error(transparent)]
    Map(#[from] MapError),
    #[error(transparent)]
    Animation(#[from] AnimationError),
}

pub struct World {
    seed: u64,
    settings: Settings,
    pub board: TaskBoard,
    pub road_view: RoadView,
    pub map: GridMap,
    pub walker: GridWalker,
    map_generation: u32,
    pub level: Level,
}

impl World {
    pub fn new(seed: u64, settings: Settings) -> Result<Self, WorldError> {
        let board = build_board(&settings.road, seed);
        let road_view = RoadView::new(settings.window.width as f32, &settings.road);
        let map = Self::generate_map(&settings, seed, 0)?;
        let level = Level::new(&settings.window, &settings.player)?;
        Ok(Self {
            seed,
            settings,
            board,
            road_view,
            map,
            walker: GridWalker::new(),
            map_generation: 0,
            level,
        })
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn map_generation(&self) -> u32 {
        self.map_generation
    }

    /// One road frame: step the board and keep the camera on the leader.
    pub fn step_road(&mut self) -> Vec<SimEvent> {
        let events = self.board.step();
        self.road_view.follow(self.board.leading_progress());
        events
    }

    pub fn restart_road(&mut self) {
        self.board = build_board(&self.settings.road, self.seed);
        self.road_view.follow(0.0);
        info!(seed = self.seed, "road scenario restarted");
    }

    pub fn step_walker(&mut self, facing: Facing) -> StepOutcome {
        self.walker.try_step(&self.map, facing)
    }

    /// Replace the grid with the next map in this run's sequence and put the
    /// walker back on the origin tile.
    pub fn regenerate_map(&mut self) -> Result<(), MapError> {
        let generation = self.map_generation.wrapping_add(1);
        self.map = Self::generate_map(&self.settings, self.seed, generation)?;
        self.map_generation = generation;
        self.walker.reset();
        info!(
            generation,
            rocks = self.map.rock_count(),
            fingerprint = self.map.fingerprint(),
            "grid map regenerated"
        );
        Ok(())
    }

    pub fn update_level(&mut self, input: PlayerInput, dt: f32) {
        self.level.update(input, dt);
    }

    fn generate_map(settings: &Settings, seed: u64, generation: u32) -> Result<GridMap, MapError> {
        mapgen::generate(
            settings.grid.width,
            settings.grid.height,
            settings.grid.obstacle_chance,
            derive_map_seed(seed, generation),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GridPos;

    #[test]
    fn regenerating_changes_map_and_resets_walker() {
        let mut world = World::new(2024, Settings::default()).expect("world");
        let first = world.map.fingerprint();
        world.walker.pos = GridPos { row: 2, col: 2 };

        world.regenerate_map().expect("regenerate");

        assert_ne!(first, world.map.fingerprint());
        assert_eq!(world.walker.pos, GridPos::ORIGIN);
        assert_eq!(world.map_generation(), 1);
        assert!(world.map.is_walkable(GridPos::ORIGIN));
    }

    #[test]
    fn restarting_road_resets_progress() {
        let mut world = World::new(7, Settings::default()).expect("world");
        for _ in 0..100 {
            world.step_road();
        }
        assert!(world.board.leading_progress() > 0.0);
        world.restart_road();
        assert_eq!(world.board.leading_progress(), 0.0);
        assert_eq!(world.road_view.scroll, 0.0);
    }

    #[test]
    fn same_seed_builds_same_world() {
        let a = World::new(99, Settings::default()).expect("world");
        let b = World::new(99, Settings::default()).expect("world");
        assert_eq!(a.map, b.map);
        assert_eq!(a.board.snapshot_hash(), b.board.snapshot_hash());
    }
}
