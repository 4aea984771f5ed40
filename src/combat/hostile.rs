//! Live hostile actors and their collider mapping
//!
//! Hostile AI is opaque here. The roster only needs a stable identity per
//! actor, a way to find that identity from a physics collider, a per-frame
//! update hook and a terminate hook.

use ahash::AHashMap;

use crate::core::types::{ActorId, ColliderId, Millis};

/// Contract every hostile actor (slimes and friends) fulfils
pub trait HostileActor {
    /// Advance the actor's own behaviour for this frame
    fn update(&mut self, now: Millis);

    /// The actor was killed; play its death and stop acting
    fn terminate(&mut self);
}

#[derive(Debug)]
struct HostileEntry<H> {
    id: ActorId,
    collider: ColliderId,
    actor: H,
}

/// Live hostile actors, in spawn order
#[derive(Debug)]
pub struct HostileRoster<H> {
    entries: Vec<HostileEntry<H>>,
    by_collider: AHashMap<ColliderId, ActorId>,
}

impl<H: HostileActor> HostileRoster<H> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            by_collider: AHashMap::new(),
        }
    }

    /// Register a live actor behind a physics collider
    pub fn spawn(&mut self, collider: ColliderId, actor: H) -> ActorId {
        let id = ActorId::new();
        if let Some(previous) = self.by_collider.insert(collider, id) {
            tracing::warn!(%collider, ?previous, "collider reused, dropping previous actor");
            self.entries.retain(|e| e.id != previous);
        }
        self.entries.push(HostileEntry { id, collider, actor });
        id
    }

    /// Logical identity behind a collider, if the actor is still live
    pub fn actor_for_collider(&self, collider: ColliderId) -> Option<ActorId> {
        self.by_collider.get(&collider).copied()
    }

    /// Advance every live actor
    pub fn update_all(&mut self, now: Millis) {
        for entry in &mut self.entries {
            entry.actor.update(now);
        }
    }

    /// Remove an actor from play and tell it to terminate
    ///
    /// Returns the terminated actor, or `None` if it was not live.
    pub fn kill(&mut self, id: ActorId) -> Option<H> {
        let index = self.entries.iter().position(|e| e.id == id)?;
        let mut entry = self.entries.remove(index);
        self.by_collider.remove(&entry.collider);
        entry.actor.terminate();
        Some(entry.actor)
    }

    pub fn get(&self, id: ActorId) -> Option<&H> {
        self.entries.iter().find(|e| e.id == id).map(|e| &e.actor)
    }

    pub fn get_mut(&mut self, id: ActorId) -> Option<&mut H> {
        self.entries.iter_mut().find(|e| e.id == id).map(|e| &mut e.actor)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ActorId, ColliderId, &H)> {
        self.entries.iter().map(|e| (e.id, e.collider, &e.actor))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (ActorId, ColliderId, &mut H)> {
        self.entries.iter_mut().map(|e| (e.id, e.collider, &mut e.actor))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<H: HostileActor> Default for HostileRoster<H> {
    fn default() -> Self {
        Self::new()
    }
}
