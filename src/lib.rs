//! Slime Dungeon - runtime core of a top-down dungeon action game

pub mod combat;
pub mod core;
pub mod player;
pub mod scene;
pub mod spatial;
