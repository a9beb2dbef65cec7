//! Simulation engine for SAUCER.
//!
//! Owns the hecs ECS world, runs systems once per tick in a fixed order,
//! and produces SceneSnapshots and draw requests for the driver.

pub mod engine;
pub mod random;
pub mod systems;
pub mod world_setup;

pub use engine::{SimConfig, SimulationEngine};
pub use random::{RandomSource, ScriptedRandom, SeededRandom};
pub use saucer_core as core;
