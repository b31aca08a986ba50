//! Gameplay tuning.
//!
//! Hand-balanced gameplay numbers live here rather than being baked into the
//! systems. `Tuning::default()` reproduces the stock arcade balance; hosts can
//! load a partial JSON override since every field falls back to its default.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::{Buff, PowerUpKind};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // --- Playfield ---
    pub width: f32,
    pub height: f32,

    // --- Player ---
    pub player_speed: f32,
    pub pointer_speed_factor: f32,
    pub start_lives: u32,
    pub max_lives: u32,
    pub invuln_ms: f32,
    pub shield_hits: u32,

    // --- Player weapons ---
    pub shoot_cooldown_ms: f32,
    pub rapid_cooldown_factor: f32,
    pub max_player_bullets: usize,
    pub bullet_speed: f32,
    pub pulse_speed: f32,
    pub spread_vx: f32,

    // --- Missiles / drone ---
    pub missiles_per_shot: usize,
    pub missile_speed: f32,
    pub missile_turn_rate: f32,
    pub missile_ttl_ms: f32,
    pub missile_damage: f32,
    pub drone_orbit_radius: f32,
    pub drone_angular_speed: f32,
    pub drone_intercept_radius: f32,

    // --- Enemy fire ---
    pub enemy_bullet_base_speed: f32,
    pub enemy_bullet_speed_per_wave: f32,
    pub enemy_bullet_max_speed: f32,
    pub enemy_fire_chance_base: f64,
    pub enemy_fire_chance_per_wave: f64,
    pub enemy_fire_chance_max: f64,

    // --- Dives ---
    pub dive_interval_base_ms: f32,
    pub dive_interval_per_wave_ms: f32,
    pub dive_interval_min_ms: f32,
    pub max_divers: u32,
    pub reform_min_ms: f32,
    pub reform_max_ms: f32,
    pub dive_shots_min: u32,
    pub dive_shots_max: u32,
    pub dive_first_shot_ms: f32,
    pub dive_shot_spacing_ms: f32,
    pub dive_shot_jitter_ms: f32,
    pub dive_kill_bonus: u64,

    // --- Power-ups ---
    pub power_up_drop_chance: f64,
    pub power_up_fall_speed: f32,
    pub power_up_weights: Vec<(PowerUpKind, f64)>,
    pub overcharge_ms: f64,
    pub rapid_fire_ms: f64,
    pub photon_burst_ms: f64,
    pub rapid_pulse_ms: f64,
    pub missile_swarm_ms: f64,
    pub guardian_drone_ms: f64,
    pub flash_label_ms: f64,

    // --- Waves ---
    pub wave_overlay_ms: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            width: PLAYFIELD_WIDTH,
            height: PLAYFIELD_HEIGHT,

            player_speed: PLAYER_SPEED,
            pointer_speed_factor: POINTER_SPEED_FACTOR,
            start_lives: PLAYER_START_LIVES,
            max_lives: PLAYER_MAX_LIVES,
            invuln_ms: INVULN_MS,
            shield_hits: SHIELD_HITS,

            shoot_cooldown_ms: SHOOT_COOLDOWN_MS,
            rapid_cooldown_factor: RAPID_COOLDOWN_FACTOR,
            max_player_bullets: MAX_PLAYER_BULLETS,
            bullet_speed: BULLET_SPEED,
            pulse_speed: PULSE_SPEED,
            spread_vx: SPREAD_VX,

            missiles_per_shot: MISSILES_PER_SHOT,
            missile_speed: MISSILE_SPEED,
            missile_turn_rate: MISSILE_TURN_RATE,
            missile_ttl_ms: MISSILE_TTL_MS,
            missile_damage: MISSILE_DAMAGE,
            drone_orbit_radius: DRONE_ORBIT_RADIUS,
            drone_angular_speed: DRONE_ANGULAR_SPEED,
            drone_intercept_radius: DRONE_INTERCEPT_RADIUS,

            enemy_bullet_base_speed: ENEMY_BULLET_BASE_SPEED,
            enemy_bullet_speed_per_wave: ENEMY_BULLET_SPEED_PER_WAVE,
            enemy_bullet_max_speed: ENEMY_BULLET_MAX_SPEED,
            enemy_fire_chance_base: ENEMY_FIRE_CHANCE_BASE,
            enemy_fire_chance_per_wave: ENEMY_FIRE_CHANCE_PER_WAVE,
            enemy_fire_chance_max: ENEMY_FIRE_CHANCE_MAX,

            dive_interval_base_ms: DIVE_INTERVAL_BASE_MS,
            dive_interval_per_wave_ms: DIVE_INTERVAL_PER_WAVE_MS,
            dive_interval_min_ms: DIVE_INTERVAL_MIN_MS,
            max_divers: MAX_DIVERS,
            reform_min_ms: REFORM_MIN_MS,
            reform_max_ms: REFORM_MAX_MS,
            dive_shots_min: DIVE_SHOTS_MIN,
            dive_shots_max: DIVE_SHOTS_MAX,
            dive_first_shot_ms: DIVE_FIRST_SHOT_MS,
            dive_shot_spacing_ms: DIVE_SHOT_SPACING_MS,
            dive_shot_jitter_ms: DIVE_SHOT_JITTER_MS,
            dive_kill_bonus: DIVE_KILL_BONUS,

            power_up_drop_chance: POWER_UP_DROP_CHANCE,
            power_up_fall_speed: POWER_UP_FALL_SPEED,
            power_up_weights: POWER_UP_WEIGHTS.to_vec(),
            overcharge_ms: OVERCHARGE_MS,
            rapid_fire_ms: RAPID_FIRE_MS,
            photon_burst_ms: PHOTON_BURST_MS,
            rapid_pulse_ms: RAPID_PULSE_MS,
            missile_swarm_ms: MISSILE_SWARM_MS,
            guardian_drone_ms: GUARDIAN_DRONE_MS,
            flash_label_ms: FLASH_LABEL_MS,

            wave_overlay_ms: WAVE_OVERLAY_MS,
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) JSON override.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Interval between dive groups for a wave (ms), floored.
    pub fn dive_interval_ms(&self, wave: u32) -> f32 {
        (self.dive_interval_base_ms - wave as f32 * self.dive_interval_per_wave_ms)
            .max(self.dive_interval_min_ms)
    }

    /// Size of a dive group for a wave, capped.
    pub fn divers_for_wave(&self, wave: u32) -> u32 {
        (1 + wave / 2).min(self.max_divers)
    }

    /// Enemy bullet speed for a wave (px/s), capped.
    pub fn enemy_bullet_speed(&self, wave: u32) -> f32 {
        (self.enemy_bullet_base_speed + wave as f32 * self.enemy_bullet_speed_per_wave)
            .min(self.enemy_bullet_max_speed)
    }

    /// Probability that a diver actually fires when its shot timer elapses.
    pub fn enemy_fire_chance(&self, wave: u32) -> f64 {
        (self.enemy_fire_chance_base + wave as f64 * self.enemy_fire_chance_per_wave)
            .min(self.enemy_fire_chance_max)
            .clamp(0.0, 1.0)
    }

    /// Cooldown after a shot (ms).
    pub fn shot_cooldown_ms(&self, rapid: bool) -> f32 {
        if rapid {
            self.shoot_cooldown_ms * self.rapid_cooldown_factor
        } else {
            self.shoot_cooldown_ms
        }
    }

    /// Duration of a timed buff (ms).
    pub fn buff_duration_ms(&self, buff: Buff) -> f64 {
        match buff {
            Buff::Overcharge => self.overcharge_ms,
            Buff::RapidFire => self.rapid_fire_ms,
            Buff::PhotonBurst => self.photon_burst_ms,
            Buff::RapidPulse => self.rapid_pulse_ms,
            Buff::MissileSwarm => self.missile_swarm_ms,
            Buff::GuardianDrone => self.guardian_drone_ms,
        }
    }
}
