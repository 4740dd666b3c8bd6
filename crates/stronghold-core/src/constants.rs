//! Simulation constants and tuning parameters.

use glam::IVec2;

use crate::types::GridPos;

// --- Board geometry ---

/// Total board width in terminal columns, sidebar included.
pub const BOARD_WIDTH: i32 = 147;

/// Total board height in terminal rows.
pub const BOARD_HEIGHT: i32 = 33;

/// Width of the stats sidebar on the left edge.
pub const SIDEBAR_WIDTH: i32 = 30;

/// Top-left corner of the playable field.
pub const PLAY_MIN: GridPos = IVec2::new(SIDEBAR_WIDTH + 1, 1);

/// Bottom-right corner of the playable field (inclusive).
pub const PLAY_MAX: GridPos = IVec2::new(BOARD_WIDTH - 2, BOARD_HEIGHT - 1);

/// Bottom-right corner of the hostile spawn band (inclusive). One row short
/// of the movement clamp so edge spawns land inside the frame.
pub const SPAWN_MAX: GridPos = IVec2::new(BOARD_WIDTH - 2, BOARD_HEIGHT - 2);

/// Fixed town hall anchor, the global objective every hostile drives toward.
pub const TOWN_HALL_POS: GridPos = IVec2::new(80, 16);

/// Where the builder starts.
pub const PLAYER_START: GridPos = IVec2::new(SIDEBAR_WIDTH + 2, BOARD_HEIGHT / 2);

/// Horizontal stride of the builder (glyphs are double-width).
pub const PLAYER_STEP_X: i32 = 2;

/// Builder glyph.
pub const PLAYER_GLYPH: &str = "👷";

// --- Combat ---

/// Squared adjacency threshold: a hostile may lock onto a structure whose
/// anchor is at Euclidean distance < 2, i.e. squared distance < 4.
pub const ATTACK_RANGE_SQ: i32 = 4;

// --- Spawning ---

/// Ticks between hostile spawns.
pub const SPAWN_INTERVAL_TICKS: u32 = 30;

/// Rolls 0-9 below this value spawn a Raider; the rest spawn a Bomberman.
pub const RAIDER_SPAWN_WEIGHT: i32 = 4;

/// Chance (out of 10) that a spawn brings a small cluster with it.
pub const GROUP_SPAWN_CHANCE: i32 = 1;

/// Maximum per-axis offset of cluster members from the primary spawn point.
pub const GROUP_SPREAD: i32 = 3;

// --- Economy ---

/// Starting gold stock.
pub const STARTING_GOLD: u32 = 400;

/// Starting elixir stock.
pub const STARTING_ELIXIR: u32 = 400;

/// Resource gained by each generator per tick, clamped at tank capacity.
pub const GENERATOR_YIELD_PER_TICK: u32 = 5;
