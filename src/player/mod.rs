//! The player actor: input lines, state machine, poses and presentation events

pub mod actor;
pub mod events;
pub mod input;
pub mod pose;

pub use actor::PlayerActor;
pub use events::PlayerEvent;
pub use input::{InputSnapshot, KeyState};
pub use pose::{PlayerState, Pose};
