//! Combat between the player and hostile actors

pub mod hostile;
pub mod resolution;

pub use hostile::{HostileActor, HostileRoster};
pub use resolution::{resolve_contact, ContactResolution};
