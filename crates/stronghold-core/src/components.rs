//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::{HostileKind, StructureKind, TroopKind};

/// A placed building. Static stats live in the catalog keyed by `kind`; only
/// mutable state is carried here. Health never increases; a structure at
/// health <= 0 is destroyed and is pruned before the next tick begins.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Structure {
    pub kind: StructureKind,
    pub health: i32,
}

/// Accrued-resource state for generators. `amount` never exceeds `capacity`;
/// collection zeroes it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ResourceTank {
    pub amount: u32,
    pub capacity: u32,
}

/// An adversarial unit advancing on the town hall. Hostiles have no death
/// path; health may drop to or below zero without removing them.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Hostile {
    pub kind: HostileKind,
    pub health: i32,
}

/// A player-trained combat unit.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Troop {
    pub kind: TroopKind,
    pub health: i32,
}

/// Marks the player's builder on the board.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlayerTag;
