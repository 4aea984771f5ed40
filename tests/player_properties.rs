//! Property tests for the player state machine invariants

use glam::Vec2;
use proptest::prelude::*;
use slime_dungeon::core::PlayerTuning;
use slime_dungeon::player::{InputSnapshot, PlayerActor, PlayerState};
use slime_dungeon::spatial::DirectionFlags;

#[derive(Debug, Clone)]
struct Step {
    dt: f64,
    input: InputSnapshot,
    hit: bool,
    touching: DirectionFlags,
    blocked: DirectionFlags,
}

fn flags() -> impl Strategy<Value = DirectionFlags> {
    (any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>())
        .prop_map(|(up, down, left, right)| DirectionFlags { up, down, left, right })
}

fn step() -> impl Strategy<Value = Step> {
    (
        0u32..120,
        any::<[bool; 5]>(),
        any::<bool>(),
        flags(),
        flags(),
    )
        .prop_map(|(dt, keys, hit, touching, blocked)| Step {
            dt: dt as f64,
            input: InputSnapshot {
                up: keys[0],
                down: keys[1],
                left: keys[2],
                right: keys[3],
                action: keys[4],
            },
            hit,
            touching,
            blocked,
        })
}

proptest! {
    #[test]
    fn attack_and_defend_never_both_active(steps in prop::collection::vec(step(), 1..200)) {
        let mut p = PlayerActor::new(Vec2::ZERO, PlayerTuning::default());
        let mut now = 0.0;

        for s in steps {
            now += s.dt;
            p.body_mut().touching = s.touching;
            p.body_mut().blocked = s.blocked;
            if s.hit {
                p.stagger();
            }
            p.update(now, &s.input);

            prop_assert!(!(p.is_attacking() && p.is_defending()));
            prop_assert!(p.attack_locked_until() >= p.attack_until());
        }
    }

    #[test]
    fn speed_matches_state(steps in prop::collection::vec(step(), 1..200)) {
        let tuning = PlayerTuning::default();
        let mut p = PlayerActor::new(Vec2::ZERO, tuning.clone());
        let mut now = 0.0;

        for s in steps {
            now += s.dt;
            p.body_mut().touching = s.touching;
            p.body_mut().blocked = s.blocked;
            if s.hit {
                p.stagger();
            }
            p.update(now, &s.input);

            let speed = p.body().speed();
            match p.state() {
                PlayerState::Attacking => prop_assert!((speed - tuning.attack_speed).abs() < 1e-2),
                PlayerState::Defending | PlayerState::Idle => prop_assert_eq!(speed, 0.0),
                PlayerState::Moving => prop_assert!((speed - tuning.speed).abs() < 1e-2),
                PlayerState::Staggering => prop_assert!(speed <= tuning.stagger_speed + 1e-2),
            }
        }
    }

    #[test]
    fn new_attack_never_starts_inside_lockout(steps in prop::collection::vec(step(), 1..200)) {
        let mut p = PlayerActor::new(Vec2::ZERO, PlayerTuning::default());
        let mut now = 0.0;
        let mut last_start: Option<f64> = None;

        for s in steps {
            now += s.dt;
            p.body_mut().blocked = s.blocked;
            let before = p.attack_until();
            p.update(now, &s.input);

            if p.attack_until() > before {
                if let Some(prev) = last_start {
                    prop_assert!(now > prev + 495.0);
                }
                last_start = Some(now);
            }
        }
    }
}
