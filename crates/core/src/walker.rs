//! Single-tile grid movement over a generated map.

use crate::mapgen::GridMap;
use crate::types::{Facing, GridPos};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    Moved(GridPos),
    Blocked(GridPos),
    OutOfBounds,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GridWalker {
    pub pos: GridPos,
    pub facing: Facing,
}

impl GridWalker {
    pub fn new() -> Self {
        Self { pos: GridPos::ORIGIN, facing: Facing::Down }
    }

    /// Turn toward `facing` and move one tile if that tile exists and is walkable.
    pub fn try_step(&mut self, map: &GridMap, facing: Facing) -> StepOutcome {
        self.facing = facing;
        let next = self.pos.step(facing);
        if !map.in_bounds(next) {
            return StepOutcome::OutOfBounds;
        }
        if !map.is_walkable(next) {
            return StepOutcome::Blocked(next);
        }
        self.pos = next;
        StepOutcome::Moved(next)
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapgen::generate;
    use crate::types::Tile;

    #[test]
    fn walker_cannot_leave_the_map() {
        let map = generate(3, 3, 0.0, 1).expect("valid dimensions");
        let mut walker = GridWalker::new();
        assert_eq!(walker.try_step(&map, Facing::Up), StepOutcome::OutOfBounds);
        assert_eq!(walker.try_step(&map, Facing::Left), StepOutcome::OutOfBounds);
        assert_eq!(walker.pos, GridPos::ORIGIN);
        assert_eq!(walker.facing, Facing::Left);
    }

    #[test]
    fn walker_stops_at_rocks() {
        let mut map = generate(3, 3, 0.0, 1).expect("valid dimensions");
        let rock = GridPos { row: 0, col: 1 };
        map.set_tile(rock, Tile::Rock);
        let mut walker = GridWalker::new();
        assert_eq!(walker.try_step(&map, Facing::Right), StepOutcome::Blocked(rock));
        let below = GridPos { row: 1, col: 0 };
        assert_eq!(walker.try_step(&map, Facing::Down), StepOutcome::Moved(below));
        let diagonal = GridPos { row: 1, col: 1 };
        assert_eq!(walker.try_step(&map, Facing::Right), StepOutcome::Moved(diagonal));
    }

    #[test]
    fn reset_returns_to_origin() {
        let map = generate(4, 4, 0.0, 9).expect("valid dimensions");
        let mut walker = GridWalker::new();
        walker.try_step(&map, Facing::Down);
        walker.reset();
        assert_eq!(walker.pos, GridPos::ORIGIN);
    }

    #[test]
    fn default_walker_matches_new() {
        assert_eq!(GridWalker::default(), GridWalker::new());
    }
}
