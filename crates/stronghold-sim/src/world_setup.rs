//! Entity spawn factories for setting up the simulation world.
//!
//! Creates the town hall, the builder, structures, hostiles, and troops with
//! appropriate component bundles.

use hecs::{Entity, World};

use stronghold_core::catalog::{structure_spec, troop_spec};
use stronghold_core::components::{Hostile, PlayerTag, ResourceTank, Structure, Troop};
use stronghold_core::constants::{PLAYER_START, TOWN_HALL_POS};
use stronghold_core::enums::{HostileKind, StructureKind, TroopKind};
use stronghold_core::types::GridPos;
use stronghold_hostile_ai::profiles::get_profile;

use crate::components::HostileState;
use crate::registry::WorldIndex;

/// Set up the initial world: the town hall and the player's builder.
pub fn setup_world(world: &mut World) -> WorldIndex {
    let town_hall = spawn_structure(world, StructureKind::TownHall, TOWN_HALL_POS);
    let player = world.spawn((PlayerTag, PLAYER_START));
    WorldIndex::new(town_hall, player)
}

/// Spawn a structure at `position` with full health, plus an empty tank for
/// generators.
pub fn spawn_structure(world: &mut World, kind: StructureKind, position: GridPos) -> Entity {
    let spec = structure_spec(kind);
    let structure = Structure {
        kind,
        health: spec.max_health,
    };
    match spec.tank_capacity {
        Some(capacity) => world.spawn((structure, position, ResourceTank { amount: 0, capacity })),
        None => world.spawn((structure, position)),
    }
}

/// Spawn a hostile at `position` with its archetype stats, seeking.
pub fn spawn_hostile(world: &mut World, kind: HostileKind, position: GridPos) -> Entity {
    let profile = get_profile(kind);
    world.spawn((
        Hostile {
            kind,
            health: profile.health,
        },
        position,
        HostileState::default(),
    ))
}

/// Spawn a troop at `position` with its archetype stats.
pub fn spawn_troop(world: &mut World, kind: TroopKind, position: GridPos) -> Entity {
    let spec = troop_spec(kind);
    world.spawn((
        Troop {
            kind,
            health: spec.health,
        },
        position,
    ))
}
