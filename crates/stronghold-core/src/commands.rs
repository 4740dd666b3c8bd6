//! Player commands and their outcomes.
//!
//! Every fallible player action reports failure through its result; the
//! simulation core raises nothing. After game over all commands are ignored.

use serde::{Deserialize, Serialize};

use crate::enums::{Direction, GeneratorKind, StructureKind, TroopKind};

/// All possible player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Move the builder one step.
    Move { direction: Direction },
    /// Place a structure at the builder's position.
    Place { kind: StructureKind },
    /// Harvest one full generator of `kind` under the builder.
    Collect { kind: GeneratorKind },
    /// Train a troop at the builder's position.
    Train { kind: TroopKind },
}

/// Why a placement was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaceError {
    /// Footprint overlaps a standing structure.
    Occupied,
    /// The kind's live-instance cap is already reached.
    LimitReached,
    /// Not enough gold or elixir.
    InsufficientResources,
    /// The simulation has ended; the intent was ignored.
    GameOver,
}

/// Result of executing a player command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CommandOutcome {
    Moved,
    MoveBlocked,
    Placed { kind: StructureKind },
    PlaceRejected { kind: StructureKind, reason: PlaceError },
    Collected { kind: GeneratorKind, amount: u32 },
    NothingCollected { kind: GeneratorKind },
    Trained { kind: TroopKind },
    TrainRejected { kind: TroopKind },
    /// The game is over; the command was ignored.
    Ignored,
}
