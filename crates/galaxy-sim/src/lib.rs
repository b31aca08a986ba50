//! Simulation engine for Cyber Galaxy.
//!
//! Owns the hecs ECS world, runs systems once per host frame,
//! and produces GameStateSnapshots for the host.

pub mod engine;
pub mod run_state;
pub mod systems;
pub mod world_setup;

pub use engine::{SimConfig, SimulationEngine};
pub use galaxy_core as core;
