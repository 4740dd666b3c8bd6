//! Events emitted by the simulation for frontend feedback.

use serde::{Deserialize, Serialize};

use crate::enums::{GeneratorKind, HostileKind, StructureKind};
use crate::types::GridPos;

/// One tick's worth of notable happenings, drained into each snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A hostile entered the board.
    HostileSpawned { kind: HostileKind, position: GridPos },
    /// A structure fell and was removed.
    StructureDestroyed { kind: StructureKind, position: GridPos },
    /// A generator's tank reached capacity and is ready to harvest.
    GeneratorFull { kind: GeneratorKind, position: GridPos },
    /// The objective fell. Terminal: the simulation is frozen afterwards.
    TownHallDestroyed,
}
