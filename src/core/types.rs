//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Frame timestamp in milliseconds, as supplied by the host clock.
///
/// Timestamps are absolute and non-decreasing across frames. All
/// `*_until` deadlines in the crate are expressed in this unit.
pub type Millis = f64;

/// Stable logical identity of a hostile actor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActorId(pub Uuid);

impl ActorId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ActorId {
    fn default() -> Self {
        Self::new()
    }
}

/// Identity the physics collaborator uses for a collider
///
/// Only meaningful to the physics adapter; the hostile roster maps it back
/// to an [`ActorId`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColliderId(pub u32);

impl ColliderId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ColliderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "collider#{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_actor_ids_are_unique() {
        let a = ActorId::new();
        let b = ActorId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn test_collider_id_hash() {
        use std::collections::HashMap;
        let mut map: HashMap<ColliderId, &str> = HashMap::new();
        map.insert(ColliderId(7), "slime");
        assert_eq!(map.get(&ColliderId::new(7)), Some(&"slime"));
    }

    #[test]
    fn test_collider_id_display() {
        assert_eq!(ColliderId(3).to_string(), "collider#3");
    }
}
