//! Simulation constants and default tuning values.
//!
//! Gameplay numbers here are the defaults behind [`crate::tuning::Tuning`];
//! the engine reads them through the tuning struct so hosts can override them.

use crate::enums::{EnemyTier, PowerUpKind};
use crate::types::{Rgb, Size};

/// Nominal host frame rate (Hz). Only the host loop paces itself with this;
/// the engine consumes whatever delta it is handed.
pub const TICK_RATE: u32 = 60;

/// Largest delta a single tick may apply (milliseconds).
pub const MAX_TICK_MS: f32 = 50.0;

// --- Playfield ---

pub const PLAYFIELD_WIDTH: f32 = 480.0;
pub const PLAYFIELD_HEIGHT: f32 = 720.0;

/// Number of background stars.
pub const STAR_COUNT: usize = 150;

// --- Player ---

pub const PLAYER_SIZE: Size = Size::new(36.0, 28.0);
/// Distance of the ship's top edge from the bottom of the playfield.
pub const PLAYER_BOTTOM_OFFSET: f32 = 60.0;
pub const PLAYER_START_LIVES: u32 = 3;
pub const PLAYER_MAX_LIVES: u32 = 5;
/// Keyboard movement speed (px/s).
pub const PLAYER_SPEED: f32 = 300.0;
/// Pointer-follow speed multiplier.
pub const POINTER_SPEED_FACTOR: f32 = 1.5;
pub const INVULN_MS: f32 = 1500.0;
pub const SHIELD_HITS: u32 = 1;
pub const MAX_WEAPON_LEVEL: u8 = 3;

// --- Player weapons ---

pub const SHOOT_COOLDOWN_MS: f32 = 200.0;
/// Cooldown multiplier under rapid-fire or rapid-pulse.
pub const RAPID_COOLDOWN_FACTOR: f32 = 1.0 / 3.0;
pub const MAX_PLAYER_BULLETS: usize = 5;
pub const BULLET_SPEED: f32 = 480.0;
pub const PULSE_SPEED: f32 = 720.0;
pub const SPREAD_VX: f32 = 90.0;
pub const TWIN_OFFSET: f32 = 6.0;
pub const BULLET_SIZE: Size = Size::new(3.0, 12.0);
pub const BEAM_SIZE: Size = Size::new(6.0, 22.0);
pub const PULSE_SIZE: Size = Size::new(3.0, 8.0);
pub const BULLET_DAMAGE: f32 = 1.0;
pub const WEAK_BULLET_DAMAGE: f32 = 0.5;

// --- Missiles ---

pub const MISSILES_PER_SHOT: usize = 2;
pub const MISSILE_SPEED: f32 = 420.0;
/// Steering blend rate (per second) toward the target direction.
pub const MISSILE_TURN_RATE: f32 = 8.0;
pub const MISSILE_TTL_MS: f32 = 3000.0;
pub const MISSILE_DAMAGE: f32 = 2.0;
pub const MISSILE_MARGIN: f32 = 60.0;
pub const MISSILE_SIZE: Size = Size::new(6.0, 6.0);

// --- Guardian drone ---

pub const DRONE_ORBIT_RADIUS: f32 = 40.0;
pub const DRONE_ANGULAR_SPEED: f32 = 3.0;
pub const DRONE_INTERCEPT_RADIUS: f32 = 12.0;

// --- Enemy bullets ---

pub const ENEMY_BULLET_BASE_SPEED: f32 = 180.0;
pub const ENEMY_BULLET_SPEED_PER_WAVE: f32 = 9.0;
pub const ENEMY_BULLET_MAX_SPEED: f32 = 360.0;
pub const ENEMY_FIRE_CHANCE_BASE: f64 = 0.5;
pub const ENEMY_FIRE_CHANCE_PER_WAVE: f64 = 0.03;
pub const ENEMY_FIRE_CHANCE_MAX: f64 = 0.9;
pub const ENEMY_BULLET_RADIUS: f32 = 4.0;
/// Out-of-bounds margin for bullets (px).
pub const BULLET_MARGIN: f32 = 20.0;

// --- Formation ---

pub const FORMATION_COLS: u32 = 8;
pub const FORMATION_BASE_ROWS: u32 = 5;
pub const FORMATION_MAX_ROWS: u32 = 7;
pub const FORMATION_GAP_X: f32 = 44.0;
pub const FORMATION_GAP_Y: f32 = 38.0;
pub const FORMATION_TOP: f32 = 80.0;
pub const SWAY_AMPLITUDE: f32 = 20.0;
pub const SWAY_RATE: f64 = 0.0005;
pub const WOBBLE_X_AMPLITUDE: f32 = 3.0;
pub const WOBBLE_Y_AMPLITUDE: f32 = 4.0;
pub const STRIKER_CHANCE_BASE: f64 = 0.2;
pub const STRIKER_CHANCE_PER_WAVE: f64 = 0.04;

// --- Dives ---

pub const DIVE_INTERVAL_BASE_MS: f32 = 3000.0;
pub const DIVE_INTERVAL_PER_WAVE_MS: f32 = 150.0;
pub const DIVE_INTERVAL_MIN_MS: f32 = 800.0;
pub const MAX_DIVERS: u32 = 3;
pub const DIVE_CURVE_SECS: f32 = 1.5;
pub const DIVE_CURVE_AMPLITUDE: f32 = 80.0;
pub const DIVE_CURVE_FREQUENCY: f32 = 2.0;
/// Fraction of the playfield height descended per second of dive.
pub const DIVE_DESCENT_FRACTION: f32 = 0.5;
pub const REFORM_MIN_MS: f32 = 2000.0;
pub const REFORM_MAX_MS: f32 = 4000.0;
pub const DIVE_SHOTS_MIN: u32 = 2;
pub const DIVE_SHOTS_MAX: u32 = 3;
pub const DIVE_FIRST_SHOT_MS: f32 = 250.0;
pub const DIVE_SHOT_SPACING_MS: f32 = 350.0;
pub const DIVE_SHOT_JITTER_MS: f32 = 200.0;
pub const DIVE_KILL_BONUS: u64 = 100;

// --- Power-ups ---

pub const POWER_UP_SIZE: f32 = 18.0;
pub const POWER_UP_FALL_SPEED: f32 = 120.0;
pub const POWER_UP_DROP_CHANCE: f64 = 0.08;
pub const OVERCHARGE_MS: f64 = 20_000.0;
pub const RAPID_FIRE_MS: f64 = 10_000.0;
pub const PHOTON_BURST_MS: f64 = 8_000.0;
pub const RAPID_PULSE_MS: f64 = 8_000.0;
pub const MISSILE_SWARM_MS: f64 = 10_000.0;
pub const GUARDIAN_DRONE_MS: f64 = 15_000.0;
/// How long one-shot power-ups (bomb, extra life) keep their HUD label.
pub const FLASH_LABEL_MS: f64 = 1_000.0;
pub const BOMB_DAMAGE: f32 = 1.0;

/// Default drop weights: (kind, weight).
pub const POWER_UP_WEIGHTS: [(PowerUpKind, f64); 9] = [
    (PowerUpKind::Overcharge, 20.0),
    (PowerUpKind::Shield, 15.0),
    (PowerUpKind::Bomb, 8.0),
    (PowerUpKind::ExtraLife, 5.0),
    (PowerUpKind::RapidFire, 15.0),
    (PowerUpKind::PhotonBurst, 10.0),
    (PowerUpKind::RapidPulse, 10.0),
    (PowerUpKind::MissileSwarm, 9.0),
    (PowerUpKind::GuardianDrone, 8.0),
];

// --- Waves ---

pub const WAVE_OVERLAY_MS: f64 = 1200.0;
/// Waves cleared per extra enemy hit point.
pub const HP_BONUS_EVERY_WAVES: u32 = 3;

// --- Particles ---

pub const PARTICLE_MIN_SPEED: f32 = 60.0;
pub const PARTICLE_MAX_SPEED: f32 = 300.0;
pub const PARTICLE_GRAVITY: f32 = 180.0;
/// Life lost per second (life starts at 1.0).
pub const PARTICLE_DECAY: f32 = 2.0;
pub const HIT_BURST: usize = 5;
pub const DEATH_BURST: usize = 15;
pub const BOMB_BURST: usize = 10;
pub const SHIELD_BURST: usize = 12;
pub const DAMAGE_BURST: usize = 20;
pub const DRONE_BURST: usize = 6;
pub const FLASH_SPARKS: usize = 30;

// --- Leaderboard ---

pub const LEADERBOARD_SIZE: usize = 10;

// --- Palette ---

pub const COLOR_SCOUT: Rgb = Rgb(0x00, 0xff, 0xcc);
pub const COLOR_STRIKER: Rgb = Rgb(0xf5, 0x9e, 0x0b);
pub const COLOR_CORE: Rgb = Rgb(0xff, 0x3d, 0x7f);
pub const COLOR_PLAYER: Rgb = Rgb(0x00, 0xff, 0xcc);
pub const COLOR_ENGINE: Rgb = Rgb(0x8b, 0x5c, 0xf6);
pub const COLOR_SHIELD: Rgb = Rgb(0x00, 0xcc, 0xff);
pub const COLOR_DAMAGE: Rgb = Rgb(0xff, 0x3d, 0x7f);
pub const COLOR_ENEMY_BULLET: Rgb = Rgb(0xff, 0x3d, 0x7f);
pub const COLOR_BEAM: Rgb = Rgb(0xc4, 0xb5, 0xfd);
pub const COLOR_PULSE: Rgb = Rgb(0x7d, 0xd3, 0xfc);
pub const COLOR_MISSILE: Rgb = Rgb(0xfb, 0x92, 0x3c);
pub const COLOR_DRONE: Rgb = Rgb(0xa3, 0xe6, 0x35);
pub const COLOR_WHITE: Rgb = Rgb(0xff, 0xff, 0xff);

/// Static per-tier parameters.
#[derive(Debug, Clone, Copy)]
pub struct TierProfile {
    pub base_hp: u32,
    pub size: Size,
    pub score: u64,
    pub color: Rgb,
}

/// Look up the fixed profile of an enemy tier.
pub fn tier_profile(tier: EnemyTier) -> TierProfile {
    match tier {
        EnemyTier::Scout => TierProfile {
            base_hp: 1,
            size: Size::new(26.0, 22.0),
            score: 50,
            color: COLOR_SCOUT,
        },
        EnemyTier::Striker => TierProfile {
            base_hp: 2,
            size: Size::new(30.0, 26.0),
            score: 150,
            color: COLOR_STRIKER,
        },
        EnemyTier::Core => TierProfile {
            base_hp: 3,
            size: Size::new(38.0, 32.0),
            score: 500,
            color: COLOR_CORE,
        },
    }
}

/// Capsule color for a power-up kind.
pub fn power_up_color(kind: PowerUpKind) -> Rgb {
    match kind {
        PowerUpKind::Overcharge => Rgb(0xf5, 0x9e, 0x0b),
        PowerUpKind::Shield => COLOR_SHIELD,
        PowerUpKind::Bomb => Rgb(0xff, 0x3d, 0x7f),
        PowerUpKind::ExtraLife => Rgb(0xf4, 0x72, 0xb6),
        PowerUpKind::RapidFire => Rgb(0xfa, 0xcc, 0x15),
        PowerUpKind::PhotonBurst => COLOR_BEAM,
        PowerUpKind::RapidPulse => COLOR_PULSE,
        PowerUpKind::MissileSwarm => COLOR_MISSILE,
        PowerUpKind::GuardianDrone => COLOR_DRONE,
    }
}
