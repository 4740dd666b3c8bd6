//! Static stat tables for structures and troops.
//!
//! Consolidates the per-kind constants the closed enums dispatch on.

use glam::IVec2;

use crate::enums::{StructureKind, TroopKind};

/// Immutable stats shared by every instance of a structure kind.
pub struct StructureSpec {
    /// Footprint in cells.
    pub size: IVec2,
    pub cost_gold: u32,
    pub cost_elixir: u32,
    pub max_health: i32,
    /// Maximum simultaneous live instances.
    pub max_instances: usize,
    pub glyph: &'static str,
    /// Glyph shown while the tank is full (generators only).
    pub full_glyph: Option<&'static str>,
    /// Drawn as a bordered box rather than a bare glyph.
    pub bordered: bool,
    /// Harvestable tank capacity (generators only).
    pub tank_capacity: Option<u32>,
}

/// Get the stat table for a structure kind.
pub fn structure_spec(kind: StructureKind) -> &'static StructureSpec {
    match kind {
        StructureKind::TownHall => &TOWN_HALL,
        StructureKind::Wall => &WALL,
        StructureKind::GoldMine => &GOLD_MINE,
        StructureKind::ElixirCollector => &ELIXIR_COLLECTOR,
    }
}

const TOWN_HALL: StructureSpec = StructureSpec {
    size: IVec2::new(9, 5),
    cost_gold: 0,
    cost_elixir: 0,
    max_health: 1000,
    max_instances: 1,
    glyph: "🏰",
    full_glyph: None,
    bordered: true,
    tank_capacity: None,
};

const WALL: StructureSpec = StructureSpec {
    size: IVec2::new(1, 1),
    cost_gold: 30,
    cost_elixir: 0,
    max_health: 100,
    max_instances: 200,
    glyph: "🧱",
    full_glyph: None,
    bordered: false,
    tank_capacity: None,
};

const GOLD_MINE: StructureSpec = StructureSpec {
    size: IVec2::new(7, 3),
    cost_gold: 0,
    cost_elixir: 100,
    max_health: 100,
    max_instances: 3,
    glyph: "🪨",
    full_glyph: Some("🪙"),
    bordered: true,
    tank_capacity: Some(100),
};

const ELIXIR_COLLECTOR: StructureSpec = StructureSpec {
    size: IVec2::new(7, 3),
    cost_gold: 100,
    cost_elixir: 0,
    max_health: 100,
    max_instances: 3,
    glyph: "💧",
    full_glyph: Some("🧪"),
    bordered: true,
    tank_capacity: Some(100),
};

/// Immutable stats shared by every instance of a troop kind.
pub struct TroopSpec {
    pub health: i32,
    /// Damage per successful attack.
    pub damage: i32,
    /// Manhattan attack range.
    pub range: i32,
    /// Tiles moved per action.
    pub speed: i32,
    pub cost_elixir: u32,
    pub glyph: &'static str,
}

/// Get the stat table for a troop kind.
pub fn troop_spec(kind: TroopKind) -> &'static TroopSpec {
    match kind {
        TroopKind::Archer => &ARCHER,
        TroopKind::Barbarian => &BARBARIAN,
    }
}

const ARCHER: TroopSpec = TroopSpec {
    health: 30,
    damage: 15,
    range: 4,
    speed: 1,
    cost_elixir: 50,
    glyph: "🏹",
};

const BARBARIAN: TroopSpec = TroopSpec {
    health: 60,
    damage: 25,
    range: 1,
    speed: 1,
    cost_elixir: 25,
    glyph: "🧔",
};
