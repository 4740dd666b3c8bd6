//! Hostile update system — the Seeking/Attacking state machine.
//!
//! Hostiles are processed one at a time in spawn order, so damage applied by
//! an earlier hostile is visible to later ones within the same tick. Returns
//! true the instant any hostile destroys the town hall; the caller stops the
//! pass and declares the game over.

use hecs::{Entity, World};
use rand_chacha::ChaCha8Rng;

use stronghold_core::components::{Hostile, Structure};
use stronghold_core::constants::TOWN_HALL_POS;
use stronghold_core::enums::HostileKind;
use stronghold_core::types::GridPos;
use stronghold_hostile_ai::movement::{plan_step, MoveContext};
use stronghold_hostile_ai::profiles::get_profile;
use stronghold_hostile_ai::targeting::{select_target, Candidate};

use crate::components::HostileState;
use crate::registry::WorldIndex;

pub fn run(world: &mut World, rng: &mut ChaCha8Rng, index: &WorldIndex) -> bool {
    // Snapshot the list: hostiles spawned earlier this tick are already in
    // it, and nothing despawns hostiles mid-pass.
    let hostiles = index.hostiles.clone();

    for hostile in hostiles {
        let kind = match world.get::<&Hostile>(hostile) {
            Ok(h) => h.kind,
            Err(_) => continue,
        };
        let lock = match world.get::<&HostileState>(hostile) {
            Ok(s) => s.lock,
            Err(_) => continue,
        };
        let profile = get_profile(kind);

        // Attacking: keep hitting the locked structure. No range recheck;
        // the lock holds until the structure falls.
        if let Some(target) = lock {
            if strike(world, index, hostile, target, profile.damage) {
                return true;
            }
            continue;
        }

        // Seeking: pace actions by archetype speed.
        let acting = match world.get::<&mut HostileState>(hostile) {
            Ok(mut state) => {
                state.cadence += 1;
                if state.cadence >= profile.ticks_per_action {
                    state.cadence = 0;
                    true
                } else {
                    false
                }
            }
            Err(_) => false,
        };
        if !acting {
            continue;
        }

        let position = match world.get::<&GridPos>(hostile) {
            Ok(p) => *p,
            Err(_) => continue,
        };

        // Acquire: nearest qualifying structure in archetype scan order.
        // The first hit lands on the same action, not the next tick.
        if let Some(target) = acquire_target(world, index, kind, position) {
            if let Ok(mut state) = world.get::<&mut HostileState>(hostile) {
                state.lock = Some(target);
            }
            if strike(world, index, hostile, target, profile.damage) {
                return true;
            }
            continue;
        }

        // Advance: one step toward the town hall, avoiding walls.
        let walls = wall_positions(world, index);
        let ctx = MoveContext {
            kind,
            position,
            objective: objective(world, index),
            walls: &walls,
        };
        if let Some(next) = plan_step(&ctx, rng) {
            if let Ok(mut pos) = world.get::<&mut GridPos>(hostile) {
                *pos = next;
            }
        }
    }

    false
}

/// Apply one hit to `target`. Returns true if the town hall was destroyed.
/// Any other kill clears every hostile's lock on the corpse immediately, so
/// the prune step later this tick never sees a live lock on it.
fn strike(
    world: &mut World,
    index: &WorldIndex,
    attacker: Entity,
    target: Entity,
    damage: i32,
) -> bool {
    let health_after = match world.get::<&mut Structure>(target) {
        Ok(mut s) => {
            s.health -= damage;
            Some(s.health)
        }
        Err(_) => None,
    };

    match health_after {
        // Lock outlived its structure; drop it.
        None => {
            if let Ok(mut state) = world.get::<&mut HostileState>(attacker) {
                state.lock = None;
            }
            false
        }
        Some(health) if health <= 0 => {
            if target == index.town_hall {
                return true;
            }
            release_locks(world, target);
            false
        }
        Some(_) => false,
    }
}

/// Clear every hostile's lock on `structure`.
fn release_locks(world: &mut World, structure: Entity) {
    for (_entity, state) in world.query_mut::<&mut HostileState>() {
        if state.lock == Some(structure) {
            state.lock = None;
        }
    }
}

fn acquire_target(
    world: &World,
    index: &WorldIndex,
    kind: HostileKind,
    position: GridPos,
) -> Option<Entity> {
    let walls = candidates(world, &index.walls);
    let mut sites = candidates(world, &index.gold_mines);
    sites.extend(candidates(world, &index.collectors));
    let town_hall = Candidate {
        id: index.town_hall,
        position: objective(world, index),
    };
    select_target(kind, position, &walls, &sites, town_hall)
}

fn candidates(world: &World, list: &[Entity]) -> Vec<Candidate<Entity>> {
    list.iter()
        .filter_map(|&entity| {
            let position = *world.get::<&GridPos>(entity).ok()?;
            Some(Candidate {
                id: entity,
                position,
            })
        })
        .collect()
}

fn wall_positions(world: &World, index: &WorldIndex) -> Vec<GridPos> {
    index
        .walls
        .iter()
        .filter_map(|&entity| world.get::<&GridPos>(entity).ok().map(|p| *p))
        .collect()
}

fn objective(world: &World, index: &WorldIndex) -> GridPos {
    world
        .get::<&GridPos>(index.town_hall)
        .map(|p| *p)
        .unwrap_or(TOWN_HALL_POS)
}
