//! Ordered entity registries.
//!
//! hecs iterates by archetype, but targeting priority, collection scans, and
//! snapshot output all depend on placement/spawn order. The index keeps one
//! insertion-ordered list per kind; the fixed targeting scan order is walls,
//! gold mines, elixir collectors, town hall.

use hecs::Entity;

use stronghold_core::enums::{GeneratorKind, StructureKind};

/// Insertion-ordered entity lists for every collection the simulation scans.
#[derive(Debug)]
pub struct WorldIndex {
    pub town_hall: Entity,
    pub player: Entity,
    pub walls: Vec<Entity>,
    pub gold_mines: Vec<Entity>,
    pub collectors: Vec<Entity>,
    pub hostiles: Vec<Entity>,
    pub troops: Vec<Entity>,
}

impl WorldIndex {
    pub fn new(town_hall: Entity, player: Entity) -> Self {
        Self {
            town_hall,
            player,
            walls: Vec::new(),
            gold_mines: Vec::new(),
            collectors: Vec::new(),
            hostiles: Vec::new(),
            troops: Vec::new(),
        }
    }

    /// The list owning structures of this kind. The town hall is not
    /// list-backed; it exists exactly once and is never removed.
    pub fn structure_list_mut(&mut self, kind: StructureKind) -> Option<&mut Vec<Entity>> {
        match kind {
            StructureKind::Wall => Some(&mut self.walls),
            StructureKind::GoldMine => Some(&mut self.gold_mines),
            StructureKind::ElixirCollector => Some(&mut self.collectors),
            StructureKind::TownHall => None,
        }
    }

    /// Number of live instances of a structure kind.
    pub fn live_count(&self, kind: StructureKind) -> usize {
        match kind {
            StructureKind::Wall => self.walls.len(),
            StructureKind::GoldMine => self.gold_mines.len(),
            StructureKind::ElixirCollector => self.collectors.len(),
            StructureKind::TownHall => 1,
        }
    }

    /// Generators of the given kind in placement order.
    pub fn generators(&self, kind: GeneratorKind) -> &[Entity] {
        match kind {
            GeneratorKind::GoldMine => &self.gold_mines,
            GeneratorKind::ElixirCollector => &self.collectors,
        }
    }
}
