//! Troop engagement — player units harry hostiles.
//!
//! Each troop picks the nearest hostile: within Manhattan range it attacks,
//! otherwise it steps toward it, preferring the axis with more ground to
//! cover. Troop damage wears hostiles down but never removes them; the only
//! terminal condition in the simulation is the town hall falling.

use hecs::{Entity, World};

use stronghold_core::catalog::troop_spec;
use stronghold_core::components::{Hostile, Troop};
use stronghold_core::types::{distance_sq, manhattan, GridPos};

use crate::registry::WorldIndex;

pub fn run(world: &mut World, index: &WorldIndex) {
    let troops = index.troops.clone();

    for troop in troops {
        let (kind, health) = match world.get::<&Troop>(troop) {
            Ok(t) => (t.kind, t.health),
            Err(_) => continue,
        };
        if health <= 0 {
            continue;
        }
        let position = match world.get::<&GridPos>(troop) {
            Ok(p) => *p,
            Err(_) => continue,
        };
        let Some(target) = nearest_hostile(world, index, position) else {
            continue;
        };
        let target_pos = match world.get::<&GridPos>(target) {
            Ok(p) => *p,
            Err(_) => continue,
        };

        let spec = troop_spec(kind);
        if manhattan(position, target_pos) <= spec.range {
            attack(world, troop, target);
        } else {
            let mut at = position;
            for _ in 0..spec.speed {
                at = step_toward(at, target_pos);
            }
            if let Ok(mut pos) = world.get::<&mut GridPos>(troop) {
                *pos = at;
            }
        }
    }
}

/// Attack a hostile: fails if the target is gone or already at non-positive
/// health, if the attacker is not alive, or if the target lies outside the
/// attacker's Manhattan range. Full damage or nothing.
pub fn attack(world: &mut World, attacker: Entity, target: Entity) -> bool {
    let (kind, health) = match world.get::<&Troop>(attacker) {
        Ok(t) => (t.kind, t.health),
        Err(_) => return false,
    };
    if health <= 0 {
        return false;
    }
    let target_standing = match world.get::<&Hostile>(target) {
        Ok(h) => h.health > 0,
        Err(_) => false,
    };
    if !target_standing {
        return false;
    }
    let from = match world.get::<&GridPos>(attacker) {
        Ok(p) => *p,
        Err(_) => return false,
    };
    let to = match world.get::<&GridPos>(target) {
        Ok(p) => *p,
        Err(_) => return false,
    };

    let spec = troop_spec(kind);
    if manhattan(from, to) > spec.range {
        return false;
    }
    match world.get::<&mut Hostile>(target) {
        Ok(mut hostile) => {
            hostile.health -= spec.damage;
            true
        }
        Err(_) => false,
    }
}

/// Nearest hostile by Euclidean distance; spawn order breaks ties.
fn nearest_hostile(world: &World, index: &WorldIndex, from: GridPos) -> Option<Entity> {
    let mut best = None;
    let mut best_dist = i32::MAX;
    for &hostile in &index.hostiles {
        let d = match world.get::<&GridPos>(hostile) {
            Ok(p) => distance_sq(from, *p),
            Err(_) => continue,
        };
        if d < best_dist {
            best_dist = d;
            best = Some(hostile);
        }
    }
    best
}

/// One step toward `to`, moving first along the axis with the greater
/// remaining distance.
fn step_toward(from: GridPos, to: GridPos) -> GridPos {
    let delta = to - from;
    let step = delta.signum();
    if delta.x.abs() > delta.y.abs() {
        if step.x != 0 {
            GridPos::new(from.x + step.x, from.y)
        } else if step.y != 0 {
            GridPos::new(from.x, from.y + step.y)
        } else {
            from
        }
    } else if step.y != 0 {
        GridPos::new(from.x, from.y + step.y)
    } else if step.x != 0 {
        GridPos::new(from.x + step.x, from.y)
    } else {
        from
    }
}
