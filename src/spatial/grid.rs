//! Tile grid overlaid on the continuous world plane

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Integer tile coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GridPos {
    pub x: i32,
    pub y: i32,
}

impl GridPos {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Squared euclidean distance in tiles
    pub fn distance_squared(&self, other: GridPos) -> i64 {
        let dx = (self.x - other.x) as i64;
        let dy = (self.y - other.y) as i64;
        dx * dx + dy * dy
    }
}

/// Axis-aligned rectangle in tile coordinates (origin inclusive, size in tiles)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GridRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl GridRect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    #[inline]
    pub fn contains(&self, pos: GridPos) -> bool {
        pos.x >= self.x && pos.y >= self.y && pos.x < self.x + self.width && pos.y < self.y + self.height
    }

    /// Iterate every cell inside the rectangle, row by row
    pub fn cells(&self) -> impl Iterator<Item = GridPos> + '_ {
        (self.y..self.y + self.height)
            .flat_map(move |y| (self.x..self.x + self.width).map(move |x| GridPos::new(x, y)))
    }
}

/// World <-> tile conversion for a square-tiled map anchored at the origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileGrid {
    pub width: u32,
    pub height: u32,
    pub tile_size: f32,
}

impl TileGrid {
    pub fn new(width: u32, height: u32, tile_size: f32) -> Self {
        Self { width, height, tile_size }
    }

    #[inline]
    pub fn world_to_tile_x(&self, x: f32) -> i32 {
        (x / self.tile_size).floor() as i32
    }

    #[inline]
    pub fn world_to_tile_y(&self, y: f32) -> i32 {
        (y / self.tile_size).floor() as i32
    }

    /// Convert world position to tile coordinates (not clamped to the map)
    pub fn world_to_tile(&self, pos: Vec2) -> GridPos {
        GridPos::new(self.world_to_tile_x(pos.x), self.world_to_tile_y(pos.y))
    }

    #[inline]
    pub fn tile_to_world_x(&self, x: i32) -> f32 {
        x as f32 * self.tile_size
    }

    #[inline]
    pub fn tile_to_world_y(&self, y: i32) -> f32 {
        y as f32 * self.tile_size
    }

    /// Top-left corner of a tile in world coordinates
    pub fn tile_to_world(&self, tile: GridPos) -> Vec2 {
        Vec2::new(self.tile_to_world_x(tile.x), self.tile_to_world_y(tile.y))
    }

    /// Map extent in world units
    pub fn world_size(&self) -> Vec2 {
        Vec2::new(
            self.width as f32 * self.tile_size,
            self.height as f32 * self.tile_size,
        )
    }

    pub fn in_bounds(&self, tile: GridPos) -> bool {
        tile.x >= 0 && tile.y >= 0 && (tile.x as u32) < self.width && (tile.y as u32) < self.height
    }
}
