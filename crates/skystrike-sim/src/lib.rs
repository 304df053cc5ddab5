//! Simulation engine for Skystrike.
//!
//! Owns the hecs ECS world, runs systems at a fixed tick rate,
//! and produces SimSnapshots for the frontend. The predictive-targeting
//! kernel in [`prediction`] is pure and independently testable.

pub mod engine;
pub mod prediction;
pub mod systems;
pub mod world_setup;

pub use engine::SimulationEngine;
pub use skystrike_core as core;
