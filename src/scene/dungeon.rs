//! Dungeon scene frame orchestration
//!
//! Per frame, in order:
//! 1. advance the player state machine
//! 2. advance every live hostile
//! 3. convert the player's world position to a tile
//! 4. build the on-screen tile rectangle with a one-tile margin
//! 5. hand both to the visibility layer
//!
//! Contacts reported by the physics adapter during the frame go through
//! [`DungeonScene::resolve_player_contact`].

use serde::Serialize;

use crate::combat::hostile::{HostileActor, HostileRoster};
use crate::combat::resolution::{resolve_contact, ContactResolution};
use crate::core::config::GameConfig;
use crate::core::error::DungeonError;
use crate::core::types::{ActorId, ColliderId, Millis};
use crate::player::actor::PlayerActor;
use crate::player::input::InputSnapshot;
use crate::player::pose::PlayerState;
use crate::scene::camera::Camera;
use crate::scene::visibility::Visibility;
use crate::spatial::grid::{GridPos, GridRect, TileGrid};

use glam::Vec2;

/// What one frame produced, for the host and diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FrameReport {
    pub frame: u64,
    pub player_tile: GridPos,
    pub view_bounds: GridRect,
    pub player_state: PlayerState,
    pub live_hostiles: usize,
}

/// Owns the player, the live hostiles and the visibility layer
pub struct DungeonScene<V, H> {
    grid: TileGrid,
    camera: Camera,
    player: PlayerActor,
    hostiles: HostileRoster<H>,
    visibility: V,
    fov_layer_visible: bool,
    debug_draw: bool,
    frame: u64,
    kills: u32,
}

impl<V: Visibility, H: HostileActor> DungeonScene<V, H> {
    /// Build the scene and spawn the player on the configured start tile
    pub fn new(config: &GameConfig, visibility: V) -> Self {
        let scene = &config.scene;
        let grid = TileGrid::new(scene.world_tile_width, scene.world_tile_height, scene.tile_size);
        let (sx, sy) = scene.spawn_tile;
        let spawn = grid.tile_to_world(GridPos::new(sx, sy));

        let mut camera = Camera::new(
            Vec2::new(scene.viewport_width, scene.viewport_height),
            scene.camera_zoom,
            grid.world_size(),
        );
        camera.follow(spawn);

        tracing::info!(
            width = grid.width,
            height = grid.height,
            spawn_x = sx,
            spawn_y = sy,
            "dungeon scene created"
        );

        Self {
            grid,
            camera,
            player: PlayerActor::new(spawn, config.player.clone()),
            hostiles: HostileRoster::new(),
            visibility,
            fov_layer_visible: true,
            debug_draw: false,
            frame: 0,
            kills: 0,
        }
    }

    /// Register a hostile actor behind its physics collider
    pub fn spawn_hostile(&mut self, collider: ColliderId, actor: H) -> ActorId {
        self.hostiles.spawn(collider, actor)
    }

    /// Run one frame. `now` must be non-decreasing across calls.
    pub fn update(&mut self, now: Millis, delta_ms: Millis, input: &InputSnapshot) -> FrameReport {
        self.frame += 1;

        self.player.update(now, input);
        self.hostiles.update_all(now);

        let player_tile = self.grid.world_to_tile(self.player.body().position);
        self.camera.follow(self.player.body().position);
        let view_bounds = self.view_bounds();

        if self.fov_layer_visible {
            self.visibility.update(player_tile, view_bounds, delta_ms);
        }

        FrameReport {
            frame: self.frame,
            player_tile,
            view_bounds,
            player_state: self.player.state(),
            live_hostiles: self.hostiles.len(),
        }
    }

    /// Physics callback for a player/hostile contact.
    ///
    /// Kills the hostile if the player is attacking, otherwise staggers the
    /// player. A collider with no live actor is logged and ignored.
    pub fn resolve_player_contact(&mut self, collider: ColliderId) -> ContactResolution {
        let hostile = self.hostiles.actor_for_collider(collider);
        if hostile.is_none() {
            let err = DungeonError::UnknownCollider(collider);
            tracing::warn!(%err, "stale collider in player contact");
        }

        let outcome = resolve_contact(&mut self.player, hostile);
        match outcome {
            ContactResolution::HostileKilled(id) => {
                self.hostiles.kill(id);
                self.kills += 1;
                tracing::info!(%collider, actor = ?id, remaining = self.hostiles.len(), "hostile killed");
            }
            ContactResolution::PlayerStaggered => {
                tracing::debug!(%collider, pending = self.player.has_pending_hit(), "player hit by hostile");
            }
            ContactResolution::Ignored => {}
        }
        outcome
    }

    /// On-screen tile rectangle, grown by one tile on every side
    pub fn view_bounds(&self) -> GridRect {
        let view = self.camera.world_view();
        GridRect::new(
            self.grid.world_to_tile_x(view.x) - 1,
            self.grid.world_to_tile_y(view.y) - 1,
            self.grid.world_to_tile_x(view.width) + 2,
            self.grid.world_to_tile_y(view.height) + 2,
        )
    }

    /// Show or hide the visibility overlay; hidden layers are not updated
    pub fn toggle_fov_layer(&mut self) -> bool {
        self.fov_layer_visible = !self.fov_layer_visible;
        tracing::debug!(visible = self.fov_layer_visible, "fov layer toggled");
        self.fov_layer_visible
    }

    /// Physics and room debug overlay
    pub fn toggle_debug_draw(&mut self) -> bool {
        self.debug_draw = !self.debug_draw;
        tracing::debug!(enabled = self.debug_draw, "debug draw toggled");
        self.debug_draw
    }

    pub fn fov_layer_visible(&self) -> bool {
        self.fov_layer_visible
    }

    pub fn debug_draw(&self) -> bool {
        self.debug_draw
    }

    pub fn player(&self) -> &PlayerActor {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut PlayerActor {
        &mut self.player
    }

    pub fn hostiles(&self) -> &HostileRoster<H> {
        &self.hostiles
    }

    pub fn hostiles_mut(&mut self) -> &mut HostileRoster<H> {
        &mut self.hostiles
    }

    pub fn visibility(&self) -> &V {
        &self.visibility
    }

    pub fn grid(&self) -> &TileGrid {
        &self.grid
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn kills(&self) -> u32 {
        self.kills
    }
}
