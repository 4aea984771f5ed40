//! Player action state machine
//!
//! Movement, attack, block and hit reaction are driven by three absolute
//! deadlines (`attack_until`, `attack_locked_until`, `stagger_until`) that
//! are compared against the frame timestamp. Committed actions (attacks and
//! staggers) are non-blocking time gates: while one is open, `update` leaves
//! velocity and pose exactly as the starting transition set them.

use glam::Vec2;

use crate::core::config::PlayerTuning;
use crate::core::types::Millis;
use crate::spatial::body::KinematicBody;

use super::events::PlayerEvent;
use super::input::InputSnapshot;
use super::pose::{PlayerState, Pose};

/// The player-controlled actor
#[derive(Debug, Clone)]
pub struct PlayerActor {
    tuning: PlayerTuning,
    body: KinematicBody,
    /// Last directional chain resolved to "up"; picks back-facing idle poses
    facing_up: bool,
    /// Sprite mirrored horizontally
    flip_x: bool,
    attack_until: Millis,
    stagger_until: Millis,
    attack_locked_until: Millis,
    attacking: bool,
    defending: bool,
    /// Pending hit, applied on the next frame that can take it
    staggered: bool,
    /// A stagger window was opened and `StaggerEnded` has not been sent yet
    recovering: bool,
    /// Timestamp of the most recent `update`
    time: Millis,
    pose: Pose,
    events: Vec<PlayerEvent>,
}

impl PlayerActor {
    /// Create the player at a world position (top-left of its body)
    pub fn new(spawn: Vec2, tuning: PlayerTuning) -> Self {
        Self {
            tuning,
            body: KinematicBody::at(spawn),
            facing_up: false,
            flip_x: false,
            attack_until: 0.0,
            stagger_until: 0.0,
            attack_locked_until: 0.0,
            attacking: false,
            defending: false,
            staggered: false,
            recovering: false,
            time: 0.0,
            pose: Pose::Idle,
            events: Vec::new(),
        }
    }

    /// Is the actor inside an attack window it has not exited yet?
    pub fn is_attacking(&self) -> bool {
        self.attacking && self.time < self.attack_until
    }

    /// Request a stagger after being hit.
    ///
    /// Ignored while blocking or while a stagger window is still open.
    /// Repeated requests before the hit is applied coalesce into one.
    pub fn stagger(&mut self) {
        if self.time > self.stagger_until && !self.defending {
            if !self.staggered {
                tracing::debug!(time = self.time, "player hit, stagger pending");
                self.events.push(PlayerEvent::HitTaken);
            }
            self.staggered = true;
        }
    }

    /// Advance the state machine by one frame.
    ///
    /// Must be called exactly once per frame with a non-decreasing `now`.
    pub fn update(&mut self, now: Millis, input: &InputSnapshot) {
        debug_assert!(
            now >= self.time,
            "frame time went backwards: {} after {}",
            now,
            self.time
        );
        self.time = now;

        if self.staggered && !self.defending && now >= self.stagger_until && self.body.touching.any() {
            self.begin_stagger(now);
        }

        if now < self.attack_until || now < self.stagger_until {
            return;
        }

        if self.recovering {
            self.recovering = false;
            self.events.push(PlayerEvent::StaggerEnded);
        }

        let (move_pose, attack_pose) = self.resolve_movement(input);
        let speed = self.body.speed();

        if input.action && speed > 0.0 && now > self.attack_locked_until {
            self.begin_attack(now, attack_pose);
            return;
        }

        if input.action && speed == 0.0 {
            self.end_attack();
            if !self.defending {
                tracing::debug!(time = now, "player raised guard");
                self.events.push(PlayerEvent::DefendStarted);
            }
            self.defending = true;
            self.pose = Pose::Defend;
            return;
        }

        self.end_attack();
        self.end_defend();
        self.pose = move_pose;
        self.body.rescale_velocity(self.tuning.speed);
    }

    /// Zero velocity, apply held directions that are not blocked, and pick
    /// the (move, attack) pose pair.
    ///
    /// Axes are independent for velocity. Facing follows a single chain over
    /// the held inputs: horizontal, then down, then up, then idle.
    fn resolve_movement(&mut self, input: &InputSnapshot) -> (Pose, Pose) {
        let speed = self.tuning.speed;
        let blocked = self.body.blocked;
        self.body.velocity = Vec2::ZERO;

        if input.left && !blocked.left {
            self.body.velocity.x = -speed;
            self.flip_x = true;
        } else if input.right && !blocked.right {
            self.body.velocity.x = speed;
            self.flip_x = false;
        }

        if input.up && !blocked.up {
            self.body.velocity.y = -speed;
        } else if input.down && !blocked.down {
            self.body.velocity.y = speed;
        }

        if input.left || input.right {
            self.facing_up = false;
            (Pose::Walk, Pose::Slash)
        } else if input.down {
            self.facing_up = false;
            (Pose::Walk, Pose::SlashDown)
        } else if input.up {
            self.facing_up = true;
            (Pose::WalkBack, Pose::SlashUp)
        } else if self.facing_up {
            (Pose::IdleBack, Pose::Defend)
        } else {
            (Pose::Idle, Pose::Defend)
        }
    }

    fn begin_attack(&mut self, now: Millis, pose: Pose) {
        self.end_defend();
        // Restarting straight out of an earlier window still closes it first
        self.end_attack();

        self.attack_until = now + self.tuning.attack_duration;
        self.attack_locked_until = now + self.tuning.attack_lockout();
        self.body.rescale_velocity(self.tuning.attack_speed);
        self.pose = pose;
        self.attacking = true;

        tracing::debug!(
            time = now,
            until = self.attack_until,
            locked_until = self.attack_locked_until,
            ?pose,
            "player attack started"
        );
        self.events.push(PlayerEvent::AttackStarted { pose });
    }

    /// Open the stagger window and knock the body away from the contact.
    fn begin_stagger(&mut self, now: Millis) {
        self.stagger_until = now + self.tuning.stagger_duration;
        self.staggered = false;

        if self.attacking {
            // Being hit cuts the attack window short; the lockout stays.
            self.attack_until = self.attack_until.min(now);
            self.end_attack();
        }

        let knock = self.tuning.stagger_speed;
        let touching = self.body.touching;
        self.body.velocity = Vec2::ZERO;
        if touching.down {
            self.body.velocity.y = -knock;
        } else if touching.up {
            self.body.velocity.y = knock;
        } else if touching.left {
            self.body.velocity.x = knock;
            self.flip_x = true;
        } else if touching.right {
            self.body.velocity.x = -knock;
            self.flip_x = false;
        }

        self.pose = Pose::Stagger;
        self.recovering = true;

        tracing::debug!(
            time = now,
            until = self.stagger_until,
            knockback = ?self.body.velocity,
            "player staggered"
        );
        self.events.push(PlayerEvent::StaggerStarted {
            knockback: self.body.velocity,
        });
    }

    fn end_attack(&mut self) {
        if self.attacking {
            self.attacking = false;
            self.events.push(PlayerEvent::AttackEnded);
        }
    }

    fn end_defend(&mut self) {
        if self.defending {
            self.defending = false;
            self.events.push(PlayerEvent::DefendEnded);
        }
    }

    /// Coarse state as of the last `update`
    pub fn state(&self) -> PlayerState {
        if self.time < self.stagger_until {
            PlayerState::Staggering
        } else if self.is_attacking() {
            PlayerState::Attacking
        } else if self.defending {
            PlayerState::Defending
        } else if self.body.speed() > 0.0 {
            PlayerState::Moving
        } else {
            PlayerState::Idle
        }
    }

    /// Take all presentation events emitted since the last drain
    pub fn drain_events(&mut self) -> impl Iterator<Item = PlayerEvent> + '_ {
        self.events.drain(..)
    }

    pub fn body(&self) -> &KinematicBody {
        &self.body
    }

    /// Mutable body access for the physics adapter (integration and flags)
    pub fn body_mut(&mut self) -> &mut KinematicBody {
        &mut self.body
    }

    pub fn tuning(&self) -> &PlayerTuning {
        &self.tuning
    }

    pub fn pose(&self) -> Pose {
        self.pose
    }

    pub fn facing_up(&self) -> bool {
        self.facing_up
    }

    pub fn flip_x(&self) -> bool {
        self.flip_x
    }

    pub fn is_defending(&self) -> bool {
        self.defending
    }

    pub fn is_staggering(&self) -> bool {
        self.time < self.stagger_until
    }

    pub fn has_pending_hit(&self) -> bool {
        self.staggered
    }

    pub fn attack_until(&self) -> Millis {
        self.attack_until
    }

    pub fn attack_locked_until(&self) -> Millis {
        self.attack_locked_until
    }

    pub fn stagger_until(&self) -> Millis {
        self.stagger_until
    }

    pub fn time(&self) -> Millis {
        self.time
    }
}
