//! Hostile AI for STRONGHOLD.
//!
//! Implements target selection and movement planning for hostile units,
//! driven by archetype profiles. Pure functions over plain data with no ECS
//! dependency; randomness is injected by the caller.

pub mod movement;
pub mod profiles;
pub mod targeting;

pub use stronghold_core as core;

#[cfg(test)]
mod tests;
