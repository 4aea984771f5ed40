//! Slime Dungeon - headless session runner
//!
//! Drives a dungeon scene without a renderer: a scripted player hunts
//! stationary slimes, a minimal physics step integrates velocity and reports
//! contacts, and a summary is printed at the end.

use std::path::PathBuf;

use clap::Parser;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use slime_dungeon::combat::HostileActor;
use slime_dungeon::core::{ColliderId, GameConfig, Millis, Result};
use slime_dungeon::player::{InputSnapshot, PlayerEvent};
use slime_dungeon::scene::{DungeonScene, RadiusVisibility};
use slime_dungeon::spatial::{DirectionFlags, GridPos};

/// Distance at which player and slime bodies touch (world units)
const CONTACT_DISTANCE: f32 = 12.0;
/// Distance at which the scripted player starts its attack lunge
const LUNGE_DISTANCE: f32 = 48.0;
/// Slimes spawn within this many tiles of the player
const SPAWN_SPREAD: i32 = 8;

/// Headless Slime Dungeon session
#[derive(Parser, Debug)]
#[command(name = "slime-dungeon")]
#[command(about = "Run a scripted headless dungeon session and print a summary")]
struct Args {
    /// TOML config file (defaults are used when omitted)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of frames to simulate
    #[arg(long, default_value_t = 1800)]
    frames: u64,

    /// Frame length in milliseconds
    #[arg(long, default_value_t = 16.0)]
    frame_ms: f64,

    /// Number of slimes to place around the player
    #[arg(long, default_value_t = 6)]
    slimes: u32,

    /// Random seed for slime placement
    #[arg(long)]
    seed: Option<u64>,

    /// Output format: json or text
    #[arg(long, default_value = "json")]
    format: String,

    /// Enable debug logging of state transitions
    #[arg(long, short = 'v')]
    verbose: bool,
}

/// A slime that sits where it spawned
#[derive(Debug)]
struct Slime {
    position: Vec2,
    alive: bool,
}

impl HostileActor for Slime {
    fn update(&mut self, _now: Millis) {}

    fn terminate(&mut self) {
        self.alive = false;
        tracing::debug!(x = self.position.x, y = self.position.y, "slime terminated");
    }
}

#[derive(Debug, Default, Serialize)]
struct SessionSummary {
    seed: u64,
    frames: u64,
    kills: u32,
    slimes_left: usize,
    hits_taken: u32,
    attacks: u32,
    blocks: u32,
    final_tile: GridPos,
    tiles_seen: usize,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_filter = if args.verbose { "slime_dungeon=debug" } else { "slime_dungeon=info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = match &args.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };

    let seed = args.seed.unwrap_or_else(rand::random);
    let mut rng = StdRng::seed_from_u64(seed);
    tracing::info!(seed, frames = args.frames, slimes = args.slimes, "session starting");

    let grid = slime_dungeon::spatial::TileGrid::new(
        config.scene.world_tile_width,
        config.scene.world_tile_height,
        config.scene.tile_size,
    );
    let visibility = RadiusVisibility::new(grid, config.scene.light_radius);
    let mut scene: DungeonScene<RadiusVisibility, Slime> = DungeonScene::new(&config, visibility);

    let (sx, sy) = config.scene.spawn_tile;
    for i in 0..args.slimes {
        let tile = loop {
            let candidate = GridPos::new(
                sx + rng.gen_range(-SPAWN_SPREAD..=SPAWN_SPREAD),
                sy + rng.gen_range(-SPAWN_SPREAD..=SPAWN_SPREAD),
            );
            if candidate != GridPos::new(sx, sy) && grid.in_bounds(candidate) {
                break candidate;
            }
        };
        let slime = Slime { position: grid.tile_to_world(tile), alive: true };
        scene.spawn_hostile(ColliderId::new(i), slime);
    }

    let mut summary = SessionSummary { seed, frames: args.frames, ..Default::default() };
    let world_size = grid.world_size();

    for frame in 1..=args.frames {
        let now = frame as Millis * args.frame_ms;

        for collider in step_physics(&mut scene, args.frame_ms, world_size) {
            scene.resolve_player_contact(collider);
        }

        let input = scripted_input(&scene, now);
        scene.update(now, args.frame_ms, &input);

        for event in scene.player_mut().drain_events() {
            match event {
                PlayerEvent::HitTaken => summary.hits_taken += 1,
                PlayerEvent::AttackStarted { .. } => summary.attacks += 1,
                PlayerEvent::DefendStarted => summary.blocks += 1,
                _ => {}
            }
        }
    }

    summary.kills = scene.kills();
    summary.slimes_left = scene.hostiles().len();
    summary.final_tile = scene.grid().world_to_tile(scene.player().body().position);
    summary.tiles_seen = scene.visibility().seen_count();

    tracing::info!(kills = summary.kills, hits = summary.hits_taken, "session finished");

    if args.format == "json" {
        println!("{}", serde_json::to_string_pretty(&summary).unwrap_or_default());
    } else {
        println!("=== SESSION SUMMARY ===");
        println!("Seed:         {}", summary.seed);
        println!("Frames:       {}", summary.frames);
        println!("Kills:        {}", summary.kills);
        println!("Slimes left:  {}", summary.slimes_left);
        println!("Hits taken:   {}", summary.hits_taken);
        println!("Attacks:      {}", summary.attacks);
        println!("Blocks:       {}", summary.blocks);
        println!("Final tile:   ({}, {})", summary.final_tile.x, summary.final_tile.y);
        println!("Tiles seen:   {}", summary.tiles_seen);
    }

    Ok(())
}

/// Euler-integrate the player body, flag map edges as blocked and report
/// every slime collider the player now touches.
fn step_physics(
    scene: &mut DungeonScene<RadiusVisibility, Slime>,
    frame_ms: f64,
    world_size: Vec2,
) -> Vec<ColliderId> {
    let slimes: Vec<(ColliderId, Vec2)> = scene
        .hostiles()
        .iter()
        .filter(|(_, _, slime)| slime.alive)
        .map(|(_, collider, slime)| (collider, slime.position))
        .collect();

    let body = scene.player_mut().body_mut();
    body.clear_contacts();
    body.position += body.velocity * (frame_ms as f32 / 1000.0);

    let max = world_size - Vec2::splat(1.0);
    if body.position.x <= 0.0 {
        body.blocked.left = true;
    }
    if body.position.y <= 0.0 {
        body.blocked.up = true;
    }
    if body.position.x >= max.x {
        body.blocked.right = true;
    }
    if body.position.y >= max.y {
        body.blocked.down = true;
    }
    body.position = body.position.clamp(Vec2::ZERO, max);

    let mut contacts = Vec::new();
    for (collider, position) in slimes {
        let offset = position - body.position;
        if offset.length() > CONTACT_DISTANCE {
            continue;
        }
        body.touching = side_of(body.touching, offset);
        contacts.push(collider);
    }
    contacts
}

fn side_of(mut touching: DirectionFlags, offset: Vec2) -> DirectionFlags {
    if offset.x.abs() > offset.y.abs() {
        if offset.x > 0.0 {
            touching.right = true;
        } else {
            touching.left = true;
        }
    } else if offset.y > 0.0 {
        touching.down = true;
    } else {
        touching.up = true;
    }
    touching
}

/// Walk toward the nearest slime and lunge when close; with no slime left,
/// stand and block every other second.
fn scripted_input(scene: &DungeonScene<RadiusVisibility, Slime>, now: Millis) -> InputSnapshot {
    let player = scene.player().body().position;
    let nearest = scene
        .hostiles()
        .iter()
        .map(|(_, _, slime)| slime.position)
        .min_by(|a, b| a.distance_squared(player).total_cmp(&b.distance_squared(player)));

    let Some(target) = nearest else {
        let blocking = (now / 1000.0) as u64 % 2 == 0;
        return InputSnapshot { action: blocking, ..InputSnapshot::idle() };
    };

    let offset = target - player;
    InputSnapshot {
        left: offset.x < -2.0,
        right: offset.x > 2.0,
        up: offset.y < -2.0,
        down: offset.y > 2.0,
        action: offset.length() < LUNGE_DISTANCE,
    }
}
