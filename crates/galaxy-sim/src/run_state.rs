//! Per-run counters and timers that are not attached to any entity.

use galaxy_core::components::PowerLabel;
use galaxy_core::events::accuracy_percent;
use galaxy_core::tuning::Tuning;

/// Run-level state, rebuilt from scratch on every start.
#[derive(Debug, Clone, Default)]
pub struct RunState {
    pub score: u64,
    pub wave: u32,
    pub shots_fired: u32,
    pub shots_hit: u32,
    /// Countdown until the next shot is allowed (ms).
    pub shoot_cooldown_ms: f32,
    /// Countdown until the next dive group may launch (ms).
    pub dive_timer_ms: f32,
    /// Wave-incoming overlay is open until this host time.
    pub overlay_until_ms: f64,
    pub power_label: Option<PowerLabel>,
    /// One-shot guard for the external score submission.
    pub submitted: bool,
}

impl RunState {
    /// Fresh wave-1 state with the intro overlay opened at `now_ms`.
    pub fn new(tuning: &Tuning, now_ms: f64) -> Self {
        Self {
            wave: 1,
            dive_timer_ms: tuning.dive_interval_base_ms,
            overlay_until_ms: now_ms + tuning.wave_overlay_ms,
            ..Default::default()
        }
    }

    pub fn in_overlay(&self, now_ms: f64) -> bool {
        now_ms < self.overlay_until_ms
    }

    pub fn accuracy(&self) -> u32 {
        accuracy_percent(self.shots_fired, self.shots_hit)
    }
}
