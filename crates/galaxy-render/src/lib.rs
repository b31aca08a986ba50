//! Render projector for Cyber Galaxy.
//!
//! Turns a `GameStateSnapshot` into an ordered list of 2D draw commands.
//! The projector never touches the simulation; hosts replay the commands
//! onto whatever surface they own through the [`Canvas`] trait.

pub mod canvas;
pub mod projector;
pub mod shapes;

pub use canvas::{Canvas, Color, DisplayList, DrawCommand, TextAlign};
pub use projector::project;

#[cfg(test)]
mod tests;
