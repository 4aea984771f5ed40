//! The dungeon scene: camera, visibility hand-off and per-frame orchestration

pub mod camera;
pub mod dungeon;
pub mod visibility;

pub use camera::{Camera, WorldRect};
pub use dungeon::{DungeonScene, FrameReport};
pub use visibility::{RadiusVisibility, Visibility};
