//! Per-frame input snapshot
//!
//! Physical keys are bound once by the host. The state machine only ever
//! sees the resolved logical lines.

use serde::{Deserialize, Serialize};

/// Raw held/released state of the nine bound keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct KeyState {
    pub arrow_up: bool,
    pub arrow_down: bool,
    pub arrow_left: bool,
    pub arrow_right: bool,
    pub w: bool,
    pub a: bool,
    pub s: bool,
    pub d: bool,
    pub space: bool,
}

/// Logical input lines for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InputSnapshot {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Attack when moving, block when standing still
    pub action: bool,
}

impl InputSnapshot {
    /// Each direction is satisfied by its arrow key or its WASD letter
    pub fn from_keys(keys: &KeyState) -> Self {
        Self {
            up: keys.arrow_up || keys.w,
            down: keys.arrow_down || keys.s,
            left: keys.arrow_left || keys.a,
            right: keys.arrow_right || keys.d,
            action: keys.space,
        }
    }

    pub fn idle() -> Self {
        Self::default()
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

    pub fn with_action(mut self) -> Self {
        self.action = true;
        self
    }

    pub fn any_direction(&self) -> bool {
        self.up || self.down || self.left || self.right
    }
}

impl From<KeyState> for InputSnapshot {
    fn from(keys: KeyState) -> Self {
        Self::from_keys(&keys)
    }
}
