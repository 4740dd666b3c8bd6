//! Simulation engine for STRONGHOLD.
//!
//! Owns the hecs ECS world, arbitrates player intents, advances the game one
//! tick at a time, and produces GameStateSnapshots for the frontend.

pub mod components;
pub mod engine;
pub mod registry;
pub mod systems;
pub mod world_setup;

pub use engine::{GameEngine, SimConfig};
pub use stronghold_core as core;
