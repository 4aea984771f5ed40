use thiserror::Error;

use crate::core::types::ColliderId;

#[derive(Error, Debug)]
pub enum DungeonError {
    #[error("Config IO error: {0}")]
    ConfigIo(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// A physics contact referenced a collider with no live actor behind it
    #[error("No live actor for {0}")]
    UnknownCollider(ColliderId),
}

pub type Result<T> = std::result::Result<T, DungeonError>;
