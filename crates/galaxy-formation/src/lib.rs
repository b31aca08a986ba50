//! Formation director for Cyber Galaxy.
//!
//! Wave composition, formation sway, dive selection and dive trajectories.
//! No ECS dependency: operates on plain data so the sim can call it from
//! inside its systems.

pub mod dive;
pub mod layout;
pub mod motion;

pub use galaxy_core as core;

#[cfg(test)]
mod tests;
