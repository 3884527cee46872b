//! Row-major tile grid and its read-only queries.

use std::hash::Hasher;

use xxhash_rust::xxh3::Xxh3;

use crate::types::{GridPos, Tile};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridMap {
    width: usize,
    height: usize,
    tiles: Vec<Tile>,
}

impl GridMap {
    pub(super) fn from_tiles(width: usize, height: usize, tiles: Vec<Tile>) -> Self {
        debug_assert_eq!(tiles.len(), width * height);
        Self { width, height, tiles }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, pos: GridPos) -> bool {
        pos.row >= 0
            && pos.col >= 0
            && (pos.row as usize) < self.height
            && (pos.col as usize) < self.width
    }

    pub fn tile(&self, pos: GridPos) -> Option<Tile> {
        if !self.in_bounds(pos) {
            return None;
        }
        Some(self.tiles[self.index(pos)])
    }

    /// Out-of-bounds positions are never walkable.
    pub fn is_walkable(&self, pos: GridPos) -> bool {
        self.tile(pos).is_some_and(Tile::is_walkable)
    }

    pub fn set_tile(&mut self, pos: GridPos, tile: Tile) {
        if !self.in_bounds(pos) {
            return;
        }
        let idx = self.index(pos);
        self.tiles[idx] = tile;
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        self.tiles.chunks(self.width)
    }

    /// The grid as nested rows of tile codes.
    pub fn codes(&self) -> Vec<Vec<u8>> {
        self.rows().map(|row| row.iter().map(|tile| tile.code()).collect()).collect()
    }

    pub fn rock_count(&self) -> usize {
        self.tiles.iter().filter(|&&tile| tile == Tile::Rock).count()
    }

    pub fn fingerprint(&self) -> u64 {
        let mut hasher = Xxh3::new();
        hasher.write_usize(self.width);
        hasher.write_usize(self.height);
        for tile in &self.tiles {
            hasher.write_u8(tile.code());
        }
        hasher.finish()
    }

    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity((self.width + 1) * self.height);
        for row in self.rows() {
            out.extend(row.iter().map(|tile| match tile {
                Tile::Grass => '.',
                Tile::Rock => '#',
            }));
            out.push('\n');
        }
        out
    }

    fn index(&self, pos: GridPos) -> usize {
        (pos.row as usize) * self.width + (pos.col as usize)
    }
}
