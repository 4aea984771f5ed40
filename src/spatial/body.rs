//! Kinematic body state shared with the physics collaborator
//!
//! The physics adapter owns integration: it advances `position` from
//! `velocity` and rewrites the `blocked`/`touching` flags after each step.
//! Gameplay code only writes `velocity`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// One flag per cardinal side of a body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DirectionFlags {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl DirectionFlags {
    pub const NONE: Self = Self { up: false, down: false, left: false, right: false };

    /// True when no side is set
    pub fn none(&self) -> bool {
        !(self.up || self.down || self.left || self.right)
    }

    pub fn any(&self) -> bool {
        !self.none()
    }

    pub fn with_up(mut self) -> Self {
        self.up = true;
        self
    }

    pub fn with_down(mut self) -> Self {
        self.down = true;
        self
    }

    pub fn with_left(mut self) -> Self {
        self.left = true;
        self
    }

    pub fn with_right(mut self) -> Self {
        self.right = true;
        self
    }
}

/// Position, velocity and contact flags of an actor
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct KinematicBody {
    /// Top-left of the collision box in world units
    pub position: Vec2,
    /// World units per second; +y points down the screen
    pub velocity: Vec2,
    /// Sides on which the body is against static geometry (walls, doors)
    pub blocked: DirectionFlags,
    /// Sides on which the body is in contact with another body
    pub touching: DirectionFlags,
}

impl KinematicBody {
    pub fn at(position: Vec2) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }

    /// Force the velocity magnitude, keeping its direction. Zero stays zero.
    pub fn rescale_velocity(&mut self, magnitude: f32) {
        self.velocity = self.velocity.normalize_or_zero() * magnitude;
    }

    /// Clear per-step contact flags; called by the physics adapter before
    /// it reports the contacts of a new step.
    pub fn clear_contacts(&mut self) {
        self.blocked = DirectionFlags::NONE;
        self.touching = DirectionFlags::NONE;
    }
}
