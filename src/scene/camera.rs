//! Follow camera and its world view rectangle

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in world units
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WorldRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Camera that keeps a target centred, clamped to the map bounds
#[derive(Debug, Clone)]
pub struct Camera {
    viewport_size: Vec2,
    zoom: f32,
    bounds: Vec2,
    world_view: WorldRect,
}

impl Camera {
    /// `viewport_size` in screen pixels, `bounds` is the map size in world units
    pub fn new(viewport_size: Vec2, zoom: f32, bounds: Vec2) -> Self {
        let mut camera = Self {
            viewport_size,
            zoom,
            bounds,
            world_view: WorldRect::default(),
        };
        camera.follow(Vec2::ZERO);
        camera
    }

    /// Size of the visible world area
    pub fn view_size(&self) -> Vec2 {
        self.viewport_size / self.zoom
    }

    /// Centre the view on `target`, keeping it inside the map
    pub fn follow(&mut self, target: Vec2) {
        let size = self.view_size();
        self.world_view = WorldRect {
            x: clamp_axis(target.x - size.x / 2.0, size.x, self.bounds.x),
            y: clamp_axis(target.y - size.y / 2.0, size.y, self.bounds.y),
            width: size.x,
            height: size.y,
        };
    }

    pub fn world_view(&self) -> WorldRect {
        self.world_view
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Update viewport size (call on window resize)
    pub fn set_viewport_size(&mut self, width: f32, height: f32) {
        self.viewport_size = Vec2::new(width, height);
    }
}

/// Clamp one axis of the view origin; a map narrower than the view is centred
fn clamp_axis(origin: f32, view: f32, bound: f32) -> f32 {
    if bound <= view {
        (bound - view) / 2.0
    } else {
        origin.clamp(0.0, bound - view)
    }
}
