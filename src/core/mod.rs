pub mod config;
pub mod error;
pub mod types;

pub use config::{GameConfig, PlayerTuning, SceneConfig};
pub use error::{DungeonError, Result};
pub use types::{ActorId, ColliderId, Millis};
