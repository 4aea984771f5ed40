//! Animation poses and the coarse player state

use serde::{Deserialize, Serialize};

/// Which animation the presentation layer should be playing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Pose {
    #[default]
    Idle,
    IdleBack,
    Walk,
    WalkBack,
    /// Side slash (left/right input)
    Slash,
    SlashDown,
    SlashUp,
    Defend,
    Stagger,
}

impl Pose {
    /// Animation key used by the sprite sheet
    pub fn key(&self) -> &'static str {
        match self {
            Pose::Idle => "player-idle",
            Pose::IdleBack => "player-idle-back",
            Pose::Walk => "player-walk",
            Pose::WalkBack => "player-walk-back",
            Pose::Slash => "player-slash",
            Pose::SlashDown => "player-slash-down",
            Pose::SlashUp => "player-slash-up",
            Pose::Defend => "player-defend",
            Pose::Stagger => "player-stagger",
        }
    }

    pub fn is_attack(&self) -> bool {
        matches!(self, Pose::Slash | Pose::SlashDown | Pose::SlashUp)
    }
}

/// Coarse state, derived from the actor's timers and flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerState {
    Idle,
    Moving,
    Attacking,
    Defending,
    Staggering,
}

impl PlayerState {
    /// Does this state ignore new input until its window closes?
    pub fn is_committed(&self) -> bool {
        matches!(self, PlayerState::Attacking | PlayerState::Staggering)
    }
}
