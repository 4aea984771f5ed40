//! Presentation events emitted by the player state machine
//!
//! The state machine never touches cameras, emitters or blend modes. It
//! records what happened; a presentation layer drains the queue each frame
//! and plays the matching effects (screen shake and flash on a hit, trail
//! emitter while attacking, flash emitter while staggered).

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::pose::Pose;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PlayerEvent {
    /// A hit was accepted and is pending; emitted once per pending hit
    HitTaken,
    /// Knockback applied, stagger window opened
    StaggerStarted { knockback: Vec2 },
    /// First free frame after a stagger window
    StaggerEnded,
    AttackStarted { pose: Pose },
    AttackEnded,
    DefendStarted,
    DefendEnded,
}
