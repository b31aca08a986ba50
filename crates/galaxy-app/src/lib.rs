//! Cyber Galaxy host.
//!
//! Wires the simulation to the outside world: a paced game-loop thread fed
//! through an mpsc channel, the on-disk records store, the external score
//! sink and a headless autopilot driver for the command-line binary.

pub mod autopilot;
pub mod config;
pub mod error;
pub mod game_loop;
pub mod headless;
pub mod outcomes;
pub mod records_store;
pub mod sink;
pub mod state;

pub use galaxy_core as core;
