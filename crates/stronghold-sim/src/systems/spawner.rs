//! Hostile spawning — pressure arrives from the board edges.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use stronghold_core::constants::{
    GROUP_SPAWN_CHANCE, GROUP_SPREAD, PLAY_MIN, RAIDER_SPAWN_WEIGHT, SPAWN_INTERVAL_TICKS,
    SPAWN_MAX,
};
use stronghold_core::enums::HostileKind;
use stronghold_core::events::GameEvent;
use stronghold_core::types::GridPos;

use crate::registry::WorldIndex;
use crate::world_setup;

/// Cumulative spawn tallies, shown in the sidebar.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpawnTally {
    pub raiders: u32,
    pub bombermen: u32,
}

/// Advance the spawn counter and, when it fires, spawn one hostile on a
/// random edge, sometimes with a small cluster around the same point.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    index: &mut WorldIndex,
    counter: &mut u32,
    tally: &mut SpawnTally,
    events: &mut Vec<GameEvent>,
) {
    *counter += 1;
    if *counter < SPAWN_INTERVAL_TICKS {
        return;
    }
    *counter = 0;

    let position = random_edge_position(rng);
    let primary = roll_archetype(rng);
    spawn(world, index, tally, events, primary, position);

    // Occasionally a small cluster lands around the same point, each member
    // independently re-rolled between the two archetypes.
    if rng.gen_range(0..10) < GROUP_SPAWN_CHANCE {
        let extras = rng.gen_range(1..=2);
        for _ in 0..extras {
            let offset = GridPos::new(
                rng.gen_range(-GROUP_SPREAD..=GROUP_SPREAD),
                rng.gen_range(-GROUP_SPREAD..=GROUP_SPREAD),
            );
            let spot = (position + offset).clamp(PLAY_MIN, SPAWN_MAX);
            let kind = if rng.gen_bool(0.5) {
                primary
            } else {
                other(primary)
            };
            spawn(world, index, tally, events, kind, spot);
        }
    }
}

/// A random point on one of the four edges of the spawn band.
fn random_edge_position(rng: &mut ChaCha8Rng) -> GridPos {
    match rng.gen_range(0..4) {
        0 => GridPos::new(rng.gen_range(PLAY_MIN.x..=SPAWN_MAX.x), PLAY_MIN.y),
        1 => GridPos::new(SPAWN_MAX.x, rng.gen_range(PLAY_MIN.y..=SPAWN_MAX.y)),
        2 => GridPos::new(rng.gen_range(PLAY_MIN.x..=SPAWN_MAX.x), SPAWN_MAX.y),
        _ => GridPos::new(PLAY_MIN.x, rng.gen_range(PLAY_MIN.y..=SPAWN_MAX.y)),
    }
}

/// Weighted archetype roll: Raiders on low rolls, Bombermen on the rest.
fn roll_archetype(rng: &mut ChaCha8Rng) -> HostileKind {
    if rng.gen_range(0..10) < RAIDER_SPAWN_WEIGHT {
        HostileKind::Raider
    } else {
        HostileKind::Bomberman
    }
}

fn other(kind: HostileKind) -> HostileKind {
    match kind {
        HostileKind::Raider => HostileKind::Bomberman,
        HostileKind::Bomberman => HostileKind::Raider,
    }
}

fn spawn(
    world: &mut World,
    index: &mut WorldIndex,
    tally: &mut SpawnTally,
    events: &mut Vec<GameEvent>,
    kind: HostileKind,
    position: GridPos,
) {
    let entity = world_setup::spawn_hostile(world, kind, position);
    index.hostiles.push(entity);
    match kind {
        HostileKind::Raider => tally.raiders += 1,
        HostileKind::Bomberman => tally.bombermen += 1,
    }
    events.push(GameEvent::HostileSpawned { kind, position });
    tracing::debug!(?kind, x = position.x, y = position.y, "hostile spawned");
}
