//! Game state snapshot — the complete visible state handed to the frontend
//! each tick.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::enums::{HostileKind, StructureKind, TroopKind};
use crate::events::GameEvent;
use crate::types::GridPos;

/// Complete game state produced by the engine after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub tick: u64,
    pub game_over: bool,
    pub economy: EconomyView,
    pub player: PlayerView,
    pub town_hall: StructureView,
    /// Walls, then gold mines, then elixir collectors, in placement order.
    pub structures: Vec<StructureView>,
    /// Live hostiles in spawn order.
    pub hostiles: Vec<HostileView>,
    /// Live troops in training order.
    pub troops: Vec<TroopView>,
    /// Cumulative spawn tallies for the sidebar.
    pub raiders_spawned: u32,
    pub bombermen_spawned: u32,
    /// Events that fired during this tick.
    pub events: Vec<GameEvent>,
}

/// The player's treasury.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct EconomyView {
    pub gold: u32,
    pub elixir: u32,
}

/// The builder's position and glyph.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: GridPos,
    pub glyph: String,
}

/// A standing structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StructureView {
    pub kind: StructureKind,
    /// Top-left corner.
    pub position: GridPos,
    pub size: IVec2,
    pub health: i32,
    /// Accrued amount (generators only).
    pub stored: Option<u32>,
    /// Current glyph; generators flip to their full glyph at capacity.
    pub glyph: String,
    pub bordered: bool,
}

/// A live hostile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostileView {
    pub kind: HostileKind,
    pub position: GridPos,
    pub health: i32,
    /// Whether the hostile currently holds an attack lock.
    pub attacking: bool,
    pub glyph: String,
}

/// A live troop.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TroopView {
    pub kind: TroopKind,
    pub position: GridPos,
    pub health: i32,
    pub glyph: String,
}
