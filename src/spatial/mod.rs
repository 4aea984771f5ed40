//! Spatial primitives: the tile grid and kinematic bodies

pub mod body;
pub mod grid;

pub use body::{DirectionFlags, KinematicBody};
pub use grid::{GridPos, GridRect, TileGrid};
