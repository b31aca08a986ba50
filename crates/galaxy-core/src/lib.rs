//! Core types and definitions for the Cyber Galaxy simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, commands, state snapshots, events, tuning and constants.
//! It has no dependency on the ECS or on any host runtime.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod records;
pub mod state;
pub mod tuning;
pub mod types;
pub mod weighted;

#[cfg(test)]
mod tests;
