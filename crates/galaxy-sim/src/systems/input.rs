//! Input sampler: held keys, pointer tracking and fire intent.

use galaxy_core::enums::Key;
use galaxy_core::tuning::Tuning;

/// Raw device state accumulated from host commands.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
    pub fire_held: bool,
    /// Tracked pointer/touch x (playfield pixels) while a finger is down.
    pub pointer_x: Option<f32>,
    pub auto_fire: bool,
    pub touch_device: bool,
    /// One manual shot attempt requested for this tick.
    pub fire_requested: bool,
}

impl InputState {
    pub fn set_key(&mut self, key: Key, down: bool) {
        match key {
            Key::Left => self.left = down,
            Key::Right => self.right = down,
            Key::Fire => self.fire_held = down,
        }
    }

    pub fn set_touch_device(&mut self, enabled: bool) {
        self.touch_device = enabled;
        if enabled {
            self.auto_fire = true;
        }
    }
}

/// What the player wants this tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Intent {
    /// Desired horizontal displacement (px), before clamping.
    pub dx: f32,
    pub fire: bool,
}

/// Turn device state into an intent for a ship at `player_x` of width
/// `player_w`. Absent input yields no movement and no fire.
pub fn sample(input: &InputState, player_x: f32, player_w: f32, tuning: &Tuning, dt_secs: f32) -> Intent {
    let step = tuning.player_speed * dt_secs;
    let mut dx = 0.0;
    if input.left {
        dx -= step;
    }
    if input.right {
        dx += step;
    }
    if let Some(px) = input.pointer_x {
        let diff = px - player_w / 2.0 - player_x;
        let max = step * tuning.pointer_speed_factor;
        dx += diff.signum() * diff.abs().min(max);
    }

    Intent {
        dx,
        fire: input.fire_held || input.auto_fire || input.fire_requested,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_input_no_intent() {
        let intent = sample(&InputState::default(), 100.0, 36.0, &Tuning::default(), 0.016);
        assert_eq!(intent, Intent::default());
    }

    #[test]
    fn test_keys_cancel_out() {
        let mut input = InputState::default();
        input.set_key(Key::Left, true);
        input.set_key(Key::Right, true);
        let intent = sample(&input, 100.0, 36.0, &Tuning::default(), 0.016);
        assert_eq!(intent.dx, 0.0);
    }

    #[test]
    fn test_pointer_is_rate_limited() {
        let input = InputState {
            pointer_x: Some(400.0),
            ..Default::default()
        };
        let t = Tuning::default();
        let intent = sample(&input, 0.0, 36.0, &t, 0.1);
        assert!((intent.dx - t.player_speed * 0.1 * t.pointer_speed_factor).abs() < 1e-3);

        // Close enough to snap.
        let intent = sample(&input, 400.0 - 18.0 - 2.0, 36.0, &t, 0.1);
        assert!((intent.dx - 2.0).abs() < 1e-4);
    }

    #[test]
    fn test_touch_enables_auto_fire() {
        let mut input = InputState::default();
        input.set_touch_device(true);
        assert!(sample(&input, 0.0, 36.0, &Tuning::default(), 0.016).fire);
    }
}
