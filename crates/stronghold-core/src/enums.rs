//! Kind enumerations used throughout the simulation.
//!
//! Closed enums drive static behavior tables (see `catalog`) instead of an
//! open class hierarchy.

use serde::{Deserialize, Serialize};

/// Every building type that can stand on the board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StructureKind {
    /// The objective. Exactly one exists and it is never removed.
    #[default]
    TownHall,
    /// Defensive barrier; solid to the builder and to Raiders.
    Wall,
    /// Generates gold over time.
    GoldMine,
    /// Generates elixir over time.
    ElixirCollector,
}

impl StructureKind {
    /// The generator kind this structure accrues for, if any.
    pub fn generator(self) -> Option<GeneratorKind> {
        match self {
            StructureKind::GoldMine => Some(GeneratorKind::GoldMine),
            StructureKind::ElixirCollector => Some(GeneratorKind::ElixirCollector),
            StructureKind::TownHall | StructureKind::Wall => None,
        }
    }
}

/// The resource-producing structures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GeneratorKind {
    GoldMine,
    ElixirCollector,
}

impl GeneratorKind {
    pub fn structure_kind(self) -> StructureKind {
        match self {
            GeneratorKind::GoldMine => StructureKind::GoldMine,
            GeneratorKind::ElixirCollector => StructureKind::ElixirCollector,
        }
    }
}

/// Hostile archetype, determining targeting priority and movement style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HostileKind {
    /// Fast and direct; attacks generators and the town hall, never walls.
    Raider,
    /// Slow and erratic; breaches walls before anything else.
    Bomberman,
}

/// Player troop archetype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TroopKind {
    /// Ranged attacker.
    Archer,
    /// Melee attacker.
    Barbarian,
}

/// Builder movement intents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}
