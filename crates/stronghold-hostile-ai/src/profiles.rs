//! Archetype-specific behavioral profiles.
//!
//! Consolidates per-archetype parameters for hostile behavior.

use stronghold_core::enums::HostileKind;

/// Behavioral profile for a hostile archetype.
pub struct HostileProfile {
    /// Health at spawn. There is no death path; this only soaks troop damage.
    pub health: i32,
    /// Damage per attack on a structure.
    pub damage: i32,
    /// Ticks between actions while seeking; higher means slower.
    pub ticks_per_action: u32,
    /// Chance (out of 10) of deviating from the direct path on a move.
    pub deviation_chance: i32,
    /// Display glyph.
    pub glyph: &'static str,
}

/// Get the behavioral profile for a given archetype.
pub fn get_profile(kind: HostileKind) -> &'static HostileProfile {
    match kind {
        HostileKind::Raider => &RAIDER,
        HostileKind::Bomberman => &BOMBERMAN,
    }
}

/// Raiders are fast and direct, never touch walls, and hit for less.
const RAIDER: HostileProfile = HostileProfile {
    health: 60,
    damage: 15,
    ticks_per_action: 12,
    deviation_chance: 2,
    glyph: "🗡️",
};

/// Bombermen are slow and erratic, and breach walls before anything else.
const BOMBERMAN: HostileProfile = HostileProfile {
    health: 100,
    damage: 25,
    ticks_per_action: 20,
    deviation_chance: 3,
    glyph: "💣",
};
