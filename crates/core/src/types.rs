use serde::{Deserialize, Serialize};
use slotmap::new_key_type;

new_key_type! {
    pub struct TaskId;
    pub struct CharacterId;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GridPos {
    pub row: i32,
    pub col: i32,
}

impl GridPos {
    pub const ORIGIN: GridPos = GridPos { row: 0, col: 0 };

    pub fn step(self, facing: Facing) -> GridPos {
        let (d_row, d_col) = facing.delta();
        GridPos { row: self.row + d_row, col: self.col + d_col }
    }
}

/// Tile codes as stored in the grid: 0 is walkable grass, 1 is a rock.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Tile {
    Grass,
    Rock,
}

impl Tile {
    pub fn code(self) -> u8 {
        match self {
            Tile::Grass => 0,
            Tile::Rock => 1,
        }
    }

    pub fn from_code(code: u8) -> Option<Tile> {
        match code {
            0 => Some(Tile::Grass),
            1 => Some(Tile::Rock),
            _ => None,
        }
    }

    pub fn is_walkable(self) -> bool {
        self == Tile::Grass
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Facing {
    Up,
    #[default]
    Down,
    Left,
    Right,
}

impl Facing {
    pub const ALL: [Facing; 4] = [Facing::Down, Facing::Left, Facing::Right, Facing::Up];

    /// `(row, col)` offset of a single step in this direction.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Facing::Up => (-1, 0),
            Facing::Down => (1, 0),
            Facing::Left => (0, -1),
            Facing::Right => (0, 1),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn length(self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// Unit vector in the same direction; the zero vector stays zero.
    pub fn normalized(self) -> Vec2 {
        let length = self.length();
        if length == 0.0 {
            return Vec2::ZERO;
        }
        Vec2 { x: self.x / length, y: self.y / length }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskKind {
    #[default]
    Ordinary,
    Milestone,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SimEvent {
    TargetChosen { character: CharacterId, task: TaskId, position: f32 },
    TaskCompleted { character: CharacterId, task: TaskId, kind: TaskKind },
    CharacterIdle { character: CharacterId },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tile_codes_match_grid_encoding() {
        assert_eq!(Tile::Grass.code(), 0);
        assert_eq!(Tile::Rock.code(), 1);
        assert_eq!(Tile::from_code(1), Some(Tile::Rock));
        assert_eq!(Tile::from_code(7), None);
    }

    #[test]
    fn normalized_diagonal_has_unit_length() {
        let diagonal = Vec2::new(1.0, -1.0).normalized();
        assert!((diagonal.length() - 1.0).abs() < 1e-6);
        assert_eq!(Vec2::ZERO.normalized(), Vec2::ZERO);
    }

    #[test]
    fn step_moves_one_tile_in_facing_direction() {
        let start = GridPos { row: 3, col: 3 };
        assert_eq!(start.step(Facing::Up), GridPos { row: 2, col: 3 });
        assert_eq!(start.step(Facing::Right), GridPos { row: 3, col: 4 });
    }

    #[test]
    fn default_position_is_origin() {
        assert_eq!(GridPos::default(), GridPos::ORIGIN);
    }
}
