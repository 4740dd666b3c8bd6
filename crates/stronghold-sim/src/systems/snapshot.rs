//! Snapshot system: builds a complete GameStateSnapshot from the world.
//!
//! Read-only. It walks the index so output order matches placement/spawn
//! order regardless of ECS archetype layout.

use hecs::{Entity, World};

use stronghold_core::catalog::{structure_spec, troop_spec};
use stronghold_core::components::{Hostile, ResourceTank, Structure, Troop};
use stronghold_core::constants::PLAYER_GLYPH;
use stronghold_core::events::GameEvent;
use stronghold_core::state::{
    EconomyView, GameStateSnapshot, HostileView, PlayerView, StructureView, TroopView,
};
use stronghold_core::types::GridPos;
use stronghold_hostile_ai::profiles::get_profile;

use crate::components::HostileState;
use crate::engine::Stockpile;
use crate::registry::WorldIndex;
use crate::systems::spawner::SpawnTally;

/// Build a complete GameStateSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    index: &WorldIndex,
    tick: u64,
    game_over: bool,
    stockpile: &Stockpile,
    tally: &SpawnTally,
    events: Vec<GameEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        tick,
        game_over,
        economy: EconomyView {
            gold: stockpile.gold,
            elixir: stockpile.elixir,
        },
        player: build_player(world, index),
        town_hall: build_structure(world, index.town_hall).unwrap_or_default(),
        structures: build_structures(world, index),
        hostiles: build_hostiles(world, index),
        troops: build_troops(world, index),
        raiders_spawned: tally.raiders,
        bombermen_spawned: tally.bombermen,
        events,
    }
}

fn build_player(world: &World, index: &WorldIndex) -> PlayerView {
    let position = world
        .get::<&GridPos>(index.player)
        .map(|p| *p)
        .unwrap_or_default();
    PlayerView {
        position,
        glyph: PLAYER_GLYPH.to_string(),
    }
}

/// Walls, then gold mines, then elixir collectors, each in placement order.
fn build_structures(world: &World, index: &WorldIndex) -> Vec<StructureView> {
    index
        .walls
        .iter()
        .chain(&index.gold_mines)
        .chain(&index.collectors)
        .filter_map(|&entity| build_structure(world, entity))
        .collect()
}

fn build_structure(world: &World, entity: Entity) -> Option<StructureView> {
    let (kind, health) = {
        let s = world.get::<&Structure>(entity).ok()?;
        (s.kind, s.health)
    };
    let position = *world.get::<&GridPos>(entity).ok()?;
    let spec = structure_spec(kind);

    let tank = world
        .get::<&ResourceTank>(entity)
        .ok()
        .map(|t| (t.amount, t.capacity));
    let stored = tank.map(|(amount, _)| amount);
    let full = tank.is_some_and(|(amount, capacity)| amount >= capacity);
    let glyph = if full {
        spec.full_glyph.unwrap_or(spec.glyph)
    } else {
        spec.glyph
    };

    Some(StructureView {
        kind,
        position,
        size: spec.size,
        health,
        stored,
        glyph: glyph.to_string(),
        bordered: spec.bordered,
    })
}

fn build_hostiles(world: &World, index: &WorldIndex) -> Vec<HostileView> {
    index
        .hostiles
        .iter()
        .filter_map(|&entity| {
            let (kind, health) = {
                let h = world.get::<&Hostile>(entity).ok()?;
                (h.kind, h.health)
            };
            let position = *world.get::<&GridPos>(entity).ok()?;
            let attacking = world.get::<&HostileState>(entity).ok()?.lock.is_some();
            Some(HostileView {
                kind,
                position,
                health,
                attacking,
                glyph: get_profile(kind).glyph.to_string(),
            })
        })
        .collect()
}

fn build_troops(world: &World, index: &WorldIndex) -> Vec<TroopView> {
    index
        .troops
        .iter()
        .filter_map(|&entity| {
            let (kind, health) = {
                let t = world.get::<&Troop>(entity).ok()?;
                (t.kind, t.health)
            };
            let position = *world.get::<&GridPos>(entity).ok()?;
            Some(TroopView {
                kind,
                position,
                health,
                glyph: troop_spec(kind).glyph.to_string(),
            })
        })
        .collect()
}
