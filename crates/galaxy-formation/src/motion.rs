//! Formation sway and dive trajectories.
//!
//! All functions are pure; time is passed in by the caller.

use galaxy_core::constants::*;
use galaxy_core::types::Position;

/// Shared horizontal sway offset at `now_ms`.
pub fn sway_offset(now_ms: f64) -> f32 {
    (now_ms * SWAY_RATE).sin() as f32 * SWAY_AMPLITUDE
}

/// Displayed position of a non-diving enemy: home plus sway plus wobble.
pub fn formation_position(home: Position, wobble: f32, now_ms: f64) -> Position {
    let w = wobble as f64;
    Position::new(
        home.x + sway_offset(now_ms) + (w + now_ms * 0.002).sin() as f32 * WOBBLE_X_AMPLITUDE,
        home.y + (w + now_ms * 0.0015).sin() as f32 * WOBBLE_Y_AMPLITUDE,
    )
}

/// Home slot shifted by the current sway; where a returning diver lands.
pub fn return_position(home: Position, now_ms: f64) -> Position {
    Position::new(home.x + sway_offset(now_ms), home.y)
}

/// Vertical speed of a diver (px/s). The curve phase and the straight fall
/// share it so the handoff has no jump.
pub fn dive_fall_speed(height: f32) -> f32 {
    height * DIVE_DESCENT_FRACTION
}

/// Position along the curved first phase of a dive, or `None` once `t`
/// (seconds since launch) has passed the curve.
pub fn dive_curve_position(start: Position, t: f32, curve_dir: f32, height: f32) -> Option<Position> {
    if t >= DIVE_CURVE_SECS {
        return None;
    }
    Some(Position::new(
        start.x + (t * DIVE_CURVE_FREQUENCY).sin() * DIVE_CURVE_AMPLITUDE * curve_dir,
        start.y + t * dive_fall_speed(height),
    ))
}

/// Enemies homed in the left half curve right (+1), the rest curve left.
pub fn curve_direction(home_center_x: f32, width: f32) -> f32 {
    if home_center_x < width / 2.0 {
        1.0
    } else {
        -1.0
    }
}
