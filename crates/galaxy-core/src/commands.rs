//! Host commands sent to the simulation.
//!
//! Commands are queued and applied at the next tick boundary, never mid-tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;

/// All possible player/host actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Run control ---
    /// Start a run from the idle splash or after game over.
    StartRun,
    /// Throw away the current run and start a fresh one.
    Restart,
    /// Flip between running and paused.
    TogglePause,
    Pause,
    Resume,

    // --- Input ---
    /// One manual shot attempt (on-screen fire button).
    Fire,
    KeyDown { key: Key },
    KeyUp { key: Key },
    /// Pointer/touch x coordinate in playfield pixels.
    PointerMove { x: f32 },
    /// Pointer lifted; stop tracking.
    PointerRelease,
    /// Touch-capable host. Enables auto-fire.
    SetTouchDevice { enabled: bool },
    SetAutoFire { enabled: bool },

    // --- Identity ---
    /// Wallet address used as the score-submission key.
    SetIdentity { wallet: Option<String> },
}
