//! Cleanup system: removes destroyed structures from the world and index.
//!
//! Runs after all attacks for the tick have resolved. Locks referencing a
//! structure are already cleared at the moment its health crosses zero; the
//! stale-lock sweep here is a backstop, not the primary mechanism.

use hecs::{Entity, World};

use stronghold_core::components::Structure;
use stronghold_core::events::GameEvent;
use stronghold_core::types::GridPos;

use crate::components::HostileState;
use crate::registry::WorldIndex;

/// Prune every structure collection of entries with non-positive health.
/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(
    world: &mut World,
    index: &mut WorldIndex,
    despawn_buffer: &mut Vec<Entity>,
    events: &mut Vec<GameEvent>,
) {
    despawn_buffer.clear();

    for list in [&index.walls, &index.gold_mines, &index.collectors] {
        for &entity in list {
            let dead = match world.get::<&Structure>(entity) {
                Ok(s) => s.health <= 0,
                Err(_) => true,
            };
            if dead {
                despawn_buffer.push(entity);
            }
        }
    }
    if despawn_buffer.is_empty() {
        return;
    }

    for list in [
        &mut index.walls,
        &mut index.gold_mines,
        &mut index.collectors,
    ] {
        list.retain(|entity| !despawn_buffer.contains(entity));
    }

    for entity in despawn_buffer.drain(..) {
        let info = {
            let kind = world.get::<&Structure>(entity).map(|s| s.kind).ok();
            let position = world.get::<&GridPos>(entity).map(|p| *p).ok();
            kind.zip(position)
        };
        if let Some((kind, position)) = info {
            events.push(GameEvent::StructureDestroyed { kind, position });
            tracing::debug!(?kind, x = position.x, y = position.y, "structure destroyed");
        }
        let _ = world.despawn(entity);
    }

    // Backstop: no lock may survive pointing at a removed structure.
    let mut stale = Vec::new();
    {
        let mut query = world.query::<&HostileState>();
        for (entity, state) in query.iter() {
            if state.lock.is_some_and(|target| !world.contains(target)) {
                stale.push(entity);
            }
        }
    }
    for entity in stale {
        if let Ok(mut state) = world.get::<&mut HostileState>(entity) {
            state.lock = None;
        }
    }
}
