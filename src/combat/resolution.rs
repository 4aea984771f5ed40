//! Player vs hostile contact resolution
//!
//! Called for every overlap the physics collaborator reports between the
//! player and a hostile. Timing lives entirely in the player state machine;
//! this is a decision over (is the player attacking, who was touched).

use crate::core::types::ActorId;
use crate::player::actor::PlayerActor;

/// Outcome of one player/hostile contact
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactResolution {
    /// Collider had no live actor behind it; treated as no contact
    Ignored,
    /// The player was mid-attack; the hostile dies
    HostileKilled(ActorId),
    /// The hostile hit the player; a stagger was requested
    PlayerStaggered,
}

impl ContactResolution {
    /// Should the physics engine push the two bodies apart?
    pub fn separates_bodies(&self) -> bool {
        matches!(self, ContactResolution::PlayerStaggered)
    }

    /// Did the contact remove an actor from the live set?
    pub fn actor_removed(&self) -> bool {
        matches!(self, ContactResolution::HostileKilled(_))
    }
}

/// Decide a contact between the player and the actor behind a collider.
///
/// `hostile` is `None` when the collider no longer maps to a live actor.
/// Removing a killed actor from the roster is the caller's job.
pub fn resolve_contact(player: &mut PlayerActor, hostile: Option<ActorId>) -> ContactResolution {
    let Some(actor) = hostile else {
        return ContactResolution::Ignored;
    };

    if player.is_attacking() {
        ContactResolution::HostileKilled(actor)
    } else {
        player.stagger();
        ContactResolution::PlayerStaggered
    }
}
