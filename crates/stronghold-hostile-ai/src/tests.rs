//! Tests for targeting priority and movement planning.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use stronghold_core::constants::{PLAY_MAX, PLAY_MIN};
use stronghold_core::enums::HostileKind;
use stronghold_core::types::GridPos;

use crate::movement::{plan_step, MoveContext};
use crate::profiles::get_profile;
use crate::targeting::{select_target, Candidate};

fn cand(id: u32, x: i32, y: i32) -> Candidate<u32> {
    Candidate {
        id,
        position: GridPos::new(x, y),
    }
}

// ---- Targeting ----

#[test]
fn test_raider_ignores_adjacent_wall() {
    // Wall is the nearest structure by far, but Raiders never take walls.
    let origin = GridPos::new(100, 10);
    let walls = [cand(1, 100, 11)];
    let sites = [cand(2, 101, 11)];
    let hall = cand(3, 80, 16);

    let target = select_target(HostileKind::Raider, origin, &walls, &sites, hall);
    assert_eq!(target, Some(2));
}

#[test]
fn test_raider_no_target_when_only_walls_qualify() {
    let origin = GridPos::new(100, 10);
    let walls = [cand(1, 100, 11)];
    let sites = [cand(2, 120, 10)];
    let hall = cand(3, 80, 16);

    let target = select_target(HostileKind::Raider, origin, &walls, &sites, hall);
    assert_eq!(target, None);
}

#[test]
fn test_bomberman_wall_preempts_closer_site() {
    // The gold mine is strictly closer, but a qualifying wall wins anyway.
    let origin = GridPos::new(100, 10);
    let walls = [cand(1, 99, 9)]; // distance sqrt(2)
    let sites = [cand(2, 101, 10)]; // distance 1
    let hall = cand(3, 80, 16);

    let target = select_target(HostileKind::Bomberman, origin, &walls, &sites, hall);
    assert_eq!(target, Some(1));
}

#[test]
fn test_bomberman_falls_back_past_distant_walls() {
    // No wall inside the threshold: the nearest site is taken instead.
    let origin = GridPos::new(100, 10);
    let walls = [cand(1, 110, 10)];
    let sites = [cand(2, 101, 11)];
    let hall = cand(3, 80, 16);

    let target = select_target(HostileKind::Bomberman, origin, &walls, &sites, hall);
    assert_eq!(target, Some(2));
}

#[test]
fn test_distance_two_does_not_qualify() {
    // Adjacency is strict: Euclidean distance exactly 2 is out of range.
    let origin = GridPos::new(100, 10);
    let sites = [cand(2, 102, 10)];
    let hall = cand(3, 80, 16);

    for kind in [HostileKind::Raider, HostileKind::Bomberman] {
        assert_eq!(select_target(kind, origin, &[], &sites, hall), None);
    }
}

#[test]
fn test_tie_break_keeps_earlier_candidate() {
    // Two sites at identical distance: the first-scanned one wins.
    let origin = GridPos::new(100, 10);
    let sites = [cand(2, 99, 10), cand(4, 101, 10)];
    let hall = cand(3, 80, 16);

    let target = select_target(HostileKind::Raider, origin, &[], &sites, hall);
    assert_eq!(target, Some(2));
}

#[test]
fn test_town_hall_targeted_when_nearest() {
    let origin = GridPos::new(81, 15);
    let sites = [cand(2, 120, 30)];
    let hall = cand(3, 80, 16);

    let target = select_target(HostileKind::Raider, origin, &[], &sites, hall);
    assert_eq!(target, Some(3));
}

// ---- Movement ----

#[test]
fn test_step_moves_toward_objective() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let objective = GridPos::new(80, 16);
    for _ in 0..200 {
        let position = GridPos::new(120, 5);
        let ctx = MoveContext {
            kind: HostileKind::Raider,
            position,
            objective,
            walls: &[],
        };
        let next = plan_step(&ctx, &mut rng).expect("open field move");
        // Per-axis displacement is the signum step plus at most one deviation.
        assert!((next.x - position.x).abs() <= 2);
        assert!((next.y - position.y).abs() <= 2);
        assert!(next.x >= PLAY_MIN.x && next.x <= PLAY_MAX.x);
        assert!(next.y >= PLAY_MIN.y && next.y <= PLAY_MAX.y);
    }
}

#[test]
fn test_forced_nudge_when_on_objective() {
    // Standing exactly on the objective yields a zero signum step; the
    // planner must still produce horizontal motion.
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let spot = GridPos::new(80, 16);
    for _ in 0..100 {
        let ctx = MoveContext {
            kind: HostileKind::Raider,
            position: spot,
            objective: spot,
            walls: &[],
        };
        let next = plan_step(&ctx, &mut rng).expect("nudge");
        assert_ne!(next, spot);
    }
}

#[test]
fn test_moves_are_clamped_to_bounds() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    // Objective pulls the unit past the corner; the clamp holds it inside.
    for _ in 0..100 {
        let ctx = MoveContext {
            kind: HostileKind::Bomberman,
            position: PLAY_MIN,
            objective: PLAY_MIN,
            walls: &[],
        };
        let next = plan_step(&ctx, &mut rng).expect("bomberman always moves");
        assert!(next.x >= PLAY_MIN.x && next.x <= PLAY_MAX.x);
        assert!(next.y >= PLAY_MIN.y && next.y <= PLAY_MAX.y);
    }
}

#[test]
fn test_raider_holds_when_boxed_in_by_walls() {
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let position = GridPos::new(100, 10);
    // Walls two cells out in every direction: every reachable candidate is
    // within the adjacency threshold of some wall.
    let walls: Vec<GridPos> = (-2..=2)
        .flat_map(|dx| (-2..=2).map(move |dy| GridPos::new(100 + dx, 10 + dy)))
        .filter(|w| *w != position)
        .collect();
    for _ in 0..50 {
        let ctx = MoveContext {
            kind: HostileKind::Raider,
            position,
            objective: GridPos::new(80, 16),
            walls: &walls,
        };
        assert_eq!(plan_step(&ctx, &mut rng), None);
    }
}

#[test]
fn test_bomberman_pushes_through_wall_line() {
    let mut rng = ChaCha8Rng::seed_from_u64(9);
    let position = GridPos::new(100, 10);
    let walls: Vec<GridPos> = (5..=30).map(|y| GridPos::new(99, y)).collect();
    for _ in 0..50 {
        let ctx = MoveContext {
            kind: HostileKind::Bomberman,
            position,
            objective: GridPos::new(80, 16),
            walls: &walls,
        };
        // Bombermen never hold; a blocked candidate is taken anyway.
        assert!(plan_step(&ctx, &mut rng).is_some());
    }
}

// ---- Profiles ----

#[test]
fn test_profiles_differentiate_archetypes() {
    let raider = get_profile(HostileKind::Raider);
    let bomberman = get_profile(HostileKind::Bomberman);
    // Raiders act more often and hit for less.
    assert!(raider.ticks_per_action < bomberman.ticks_per_action);
    assert!(raider.damage < bomberman.damage);
    assert!(raider.deviation_chance < bomberman.deviation_chance);
}
