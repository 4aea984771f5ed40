//! Player state machine integration tests
//!
//! Timing behaviour of attacks, blocks and staggers driven through the
//! public API only, frame by frame.

use glam::Vec2;
use slime_dungeon::core::PlayerTuning;
use slime_dungeon::player::{InputSnapshot, PlayerActor, PlayerEvent, PlayerState, Pose};
use slime_dungeon::spatial::DirectionFlags;

const SPEED: f32 = 125.0;
const STAGGER_SPEED: f32 = 100.0;

fn player() -> PlayerActor {
    PlayerActor::new(Vec2::new(320.0, 320.0), PlayerTuning::default())
}

/// Block, shrug off a hit, walk left, get hit from the left, recover
#[test]
fn test_block_walk_hit_recover_scenario() {
    let mut p = player();

    // t=0: action held while standing still raises the guard
    p.update(0.0, &InputSnapshot::idle().with_action());
    assert!(p.is_defending());
    assert!(!p.is_attacking());
    assert_eq!(p.body().velocity, Vec2::ZERO);

    // t=50: hits are absorbed by the block
    p.stagger();
    assert!(!p.has_pending_hit());

    // t=60: guard dropped, walking left
    p.update(60.0, &InputSnapshot::idle().with_left());
    assert!(!p.is_defending());
    assert_eq!(p.body().velocity, Vec2::new(-SPEED, 0.0));
    assert!(!p.facing_up());

    // t=61: hit while the slime touches the left side
    p.body_mut().touching = DirectionFlags::NONE.with_left();
    p.stagger();
    p.update(61.0, &InputSnapshot::idle().with_left());
    assert_eq!(p.stagger_until(), 261.0);
    assert_eq!(p.body().velocity, Vec2::new(STAGGER_SPEED, 0.0));
    assert!(p.flip_x());
    assert!(!p.facing_up());
    assert_eq!(p.pose(), Pose::Stagger);

    // t=200: still inside the window, nothing changes
    p.update(200.0, &InputSnapshot::idle().with_right().with_action());
    assert_eq!(p.body().velocity, Vec2::new(STAGGER_SPEED, 0.0));
    assert!(p.flip_x());
    assert!(!p.is_attacking());
    assert!(!p.is_defending());
    assert_eq!(p.state(), PlayerState::Staggering);

    // t=262: window over, input is processed again
    p.body_mut().touching = DirectionFlags::NONE;
    p.update(262.0, &InputSnapshot::idle());
    assert_eq!(p.body().velocity, Vec2::ZERO);
    assert_eq!(p.state(), PlayerState::Idle);
}

#[test]
fn test_attack_commits_for_its_full_duration() {
    let mut p = player();
    let lunge = InputSnapshot::idle().with_right().with_action();
    p.update(1000.0, &lunge);

    let mut now = 1000.0;
    while now < 1165.0 {
        p.update(now, &InputSnapshot::idle().with_left());
        assert!(p.is_attacking(), "attack should hold at t={now}");
        assert_eq!(p.body().velocity, Vec2::new(500.0, 0.0));
        now += 5.0;
    }

    p.update(1165.0, &InputSnapshot::idle().with_left());
    assert!(!p.is_attacking());
    assert_eq!(p.body().velocity, Vec2::new(-SPEED, 0.0));
}

#[test]
fn test_lockout_blocks_new_attack_until_cooldown_passes() {
    let mut p = player();
    let lunge = InputSnapshot::idle().with_down().with_action();
    p.update(1000.0, &lunge);
    assert_eq!(p.attack_locked_until(), 1495.0);

    let mut now = 1016.0;
    while now <= 1495.0 {
        p.update(now, &lunge);
        assert_eq!(p.attack_until(), 1165.0, "attack restarted early at t={now}");
        now += 16.0;
    }

    // The exact lockout boundary still refuses
    p.update(1495.0, &lunge);
    assert_eq!(p.attack_until(), 1165.0);

    p.update(1496.0, &lunge);
    assert!(p.is_attacking());
    assert_eq!(p.attack_until(), 1661.0);
}

#[test]
fn test_moving_with_action_inside_lockout_walks_normally() {
    let mut p = player();
    p.update(1000.0, &InputSnapshot::idle().with_right().with_action());
    p.update(1200.0, &InputSnapshot::idle().with_right().with_action());

    assert!(!p.is_attacking());
    assert!(!p.is_defending());
    assert_eq!(p.body().velocity, Vec2::new(SPEED, 0.0));
    assert_eq!(p.pose(), Pose::Walk);
}

#[test]
fn test_stagger_ignored_while_defending() {
    let mut p = player();
    p.update(100.0, &InputSnapshot::idle().with_action());
    p.body_mut().touching = DirectionFlags::NONE.with_up();

    p.stagger();
    p.stagger();
    assert!(!p.has_pending_hit());

    p.update(116.0, &InputSnapshot::idle().with_action());
    assert!(p.is_defending());
    assert!(!p.is_staggering());
    assert_eq!(p.body().velocity, Vec2::ZERO);
    assert_eq!(p.pose(), Pose::Defend);
}

#[test]
fn test_knockback_from_right_pushes_left() {
    let mut p = player();
    p.update(100.0, &InputSnapshot::idle().with_left());
    assert!(p.flip_x());

    p.body_mut().touching = DirectionFlags::NONE.with_right();
    p.stagger();
    p.update(116.0, &InputSnapshot::idle());

    assert_eq!(p.body().velocity, Vec2::new(-STAGGER_SPEED, 0.0));
    assert!(!p.flip_x());
    assert!(!p.facing_up());
}

#[test]
fn test_repeated_stagger_requests_make_one_window() {
    let mut p = player();
    p.update(100.0, &InputSnapshot::idle());
    p.body_mut().touching = DirectionFlags::NONE.with_left();

    p.stagger();
    p.stagger();
    p.stagger();
    p.update(116.0, &InputSnapshot::idle());
    assert_eq!(p.stagger_until(), 316.0);
    assert!(!p.has_pending_hit());

    // Requests inside the open window are dropped
    p.stagger();
    assert!(!p.has_pending_hit());

    // Contact still reported after the window: no second stagger
    p.update(316.0, &InputSnapshot::idle());
    assert!(!p.is_staggering());
    assert_eq!(p.stagger_until(), 316.0);

    let hits = p
        .drain_events()
        .filter(|e| matches!(e, PlayerEvent::HitTaken))
        .count();
    assert_eq!(hits, 1);
}

#[test]
fn test_attack_direction_variants() {
    let cases = [
        (InputSnapshot::idle().with_left(), Pose::Slash),
        (InputSnapshot::idle().with_right().with_up(), Pose::Slash),
        (InputSnapshot::idle().with_down(), Pose::SlashDown),
        (InputSnapshot::idle().with_up(), Pose::SlashUp),
    ];

    for (input, expected) in cases {
        let mut p = player();
        p.update(1000.0, &input.with_action());
        assert_eq!(p.pose(), expected, "input {:?}", input);
        assert!((p.body().speed() - 500.0).abs() < 1e-3);
    }
}

#[test]
fn test_event_stream_for_attack_cycle() {
    let mut p = player();
    p.update(1000.0, &InputSnapshot::idle().with_up().with_action());
    p.update(1100.0, &InputSnapshot::idle());
    p.update(1200.0, &InputSnapshot::idle());

    let events: Vec<_> = p.drain_events().collect();
    assert_eq!(
        events,
        vec![
            PlayerEvent::AttackStarted { pose: Pose::SlashUp },
            PlayerEvent::AttackEnded,
        ]
    );
}
