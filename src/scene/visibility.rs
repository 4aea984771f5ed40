//! Visibility (field of view) collaborator interface
//!
//! The scene tells the visibility layer where the player stands and which
//! part of the map is on screen. How light is cast is up to the
//! implementation.

use ahash::AHashSet;

use crate::core::types::Millis;
use crate::spatial::grid::{GridPos, GridRect, TileGrid};

/// Receives the player's tile and the on-screen tile rectangle each frame
pub trait Visibility {
    fn update(&mut self, player: GridPos, bounds: GridRect, delta_ms: Millis);
}

/// Lights every on-screen tile within a fixed radius of the player
///
/// Tiles that were lit once stay remembered. No occlusion; walls do not
/// cast shadows here.
#[derive(Debug, Clone)]
pub struct RadiusVisibility {
    grid: TileGrid,
    radius: u32,
    /// Currently lit tiles
    lit: AHashSet<GridPos>,
    /// Tiles lit at any point so far (includes `lit`)
    seen: AHashSet<GridPos>,
    elapsed: Millis,
    updates: u64,
}

impl RadiusVisibility {
    pub fn new(grid: TileGrid, radius: u32) -> Self {
        Self {
            grid,
            radius,
            lit: AHashSet::new(),
            seen: AHashSet::new(),
            elapsed: 0.0,
            updates: 0,
        }
    }

    pub fn is_lit(&self, tile: GridPos) -> bool {
        self.lit.contains(&tile)
    }

    pub fn is_seen(&self, tile: GridPos) -> bool {
        self.seen.contains(&tile)
    }

    pub fn lit_count(&self) -> usize {
        self.lit.len()
    }

    pub fn seen_count(&self) -> usize {
        self.seen.len()
    }

    /// Total frame time fed in so far
    pub fn elapsed(&self) -> Millis {
        self.elapsed
    }

    pub fn updates(&self) -> u64 {
        self.updates
    }
}

impl Visibility for RadiusVisibility {
    fn update(&mut self, player: GridPos, bounds: GridRect, delta_ms: Millis) {
        let r2 = (self.radius as i64) * (self.radius as i64);
        let grid = self.grid;

        self.lit.clear();
        self.lit.extend(
            bounds
                .cells()
                .filter(|cell| grid.in_bounds(*cell) && cell.distance_squared(player) <= r2),
        );
        self.seen.extend(self.lit.iter().copied());

        self.elapsed += delta_ms;
        self.updates += 1;
    }
}
