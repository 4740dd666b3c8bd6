//! Sim-side components layered onto the shared core data.

use hecs::Entity;

/// Mutable fighting state for a hostile: its attack lock and action pacing.
///
/// The lock is a generational entity handle into the structure collections,
/// so a recycled slot can never alias it. Independently of that, the lock is
/// cleared for every hostile the moment the referenced structure's health
/// drops to or below zero, so pruning never observes a live lock on a corpse.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostileState {
    pub lock: Option<Entity>,
    /// Counts up once per seeking tick; the hostile acts when it reaches the
    /// archetype's `ticks_per_action`, then the counter resets.
    pub cadence: u32,
}
