//! Resource accrual for generators.

use hecs::World;

use stronghold_core::components::{ResourceTank, Structure};
use stronghold_core::constants::GENERATOR_YIELD_PER_TICK;
use stronghold_core::events::GameEvent;
use stronghold_core::types::GridPos;

/// Each generator gains a fixed increment per tick, clamped at capacity.
/// Filling up is an observable state change (the glyph flips and an event
/// fires) but nothing is credited until the player collects.
pub fn run(world: &mut World, events: &mut Vec<GameEvent>) {
    for (_entity, (structure, tank, position)) in
        world.query_mut::<(&Structure, &mut ResourceTank, &GridPos)>()
    {
        if tank.amount >= tank.capacity {
            continue;
        }
        tank.amount = (tank.amount + GENERATOR_YIELD_PER_TICK).min(tank.capacity);
        if tank.amount >= tank.capacity {
            if let Some(kind) = structure.kind.generator() {
                events.push(GameEvent::GeneratorFull {
                    kind,
                    position: *position,
                });
            }
        }
    }
}
