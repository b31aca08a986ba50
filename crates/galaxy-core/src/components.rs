//! ECS components for hecs entities, plus the player record.
//!
//! Components are plain data structs. Game logic lives in systems, not
//! components; the few helpers here only read or flip their own fields.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::*;
use crate::types::{Position, Rgb, Size};

/// Raw entity handle. The core crate has no ECS dependency; the sim converts
/// with `hecs::Entity::to_bits` / `from_bits`.
pub type EntityBits = u64;

/// Formation enemy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub tier: EnemyTier,
    /// Remaining hit points. Weak shots remove half a point.
    pub hp: f32,
    pub max_hp: f32,
    /// Formation slot (top-left) the enemy always returns to.
    pub home: Position,
    /// Per-enemy wobble phase (radians).
    pub wobble: f32,
}

/// Dive choreography state carried by every enemy.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DiveState {
    pub diving: bool,
    /// Seconds since the dive started.
    pub t: f32,
    /// Position at the moment the dive was launched.
    pub start: Position,
    /// +1 curves right, -1 curves left.
    pub curve_dir: f32,
    pub shots_fired: u32,
    pub shots_allotted: u32,
    /// Countdown to the next shot attempt (ms).
    pub shot_timer_ms: f32,
    /// Countdown before the enemy may be picked to dive again (ms).
    pub reform_ms: f32,
}

/// Axis-aligned collision box; the entity's `Position` is its top-left corner
/// for enemies and its center for projectiles.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Hitbox(pub Size);

/// Player projectile.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerBullet {
    /// Passes through enemies instead of being consumed.
    pub piercing: bool,
    /// Deals half damage.
    pub weak: bool,
    /// Enemies a piercing shot already damaged, so it hits each one once.
    pub pierced: Vec<EntityBits>,
    /// Already counted towards shots hit.
    pub landed: bool,
}

/// Enemy projectile.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EnemyBullet;

/// Homing missile launched by the missile swarm.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Missile {
    /// Target enemy, stored as raw entity bits; re-validated every tick.
    pub target: Option<EntityBits>,
    /// Remaining lifetime (ms).
    pub ttl_ms: f32,
}

/// Falling power-up capsule (position is its center).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PowerUp {
    pub kind: PowerUpKind,
}

/// Cosmetic particle. Never affects gameplay.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Particle {
    /// 1.0 when spawned, removed at 0.
    pub life: f32,
    pub color: Rgb,
    pub radius: f32,
}

/// Background star.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Star {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub alpha: f32,
    pub twinkle_speed: f32,
}

/// Deadlines for the independently timed buffs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimedBuffs {
    deadlines: [Option<f64>; 6],
}

impl TimedBuffs {
    /// Start (or extend) `buff` until `until_ms`.
    pub fn grant(&mut self, buff: Buff, until_ms: f64) {
        self.deadlines[buff.index()] = Some(until_ms);
    }

    pub fn clear(&mut self, buff: Buff) {
        self.deadlines[buff.index()] = None;
    }

    pub fn deadline(&self, buff: Buff) -> Option<f64> {
        self.deadlines[buff.index()]
    }

    pub fn is_active(&self, buff: Buff, now_ms: f64) -> bool {
        self.deadline(buff).is_some_and(|until| now_ms <= until)
    }

    /// Clear every buff whose deadline has passed and return them.
    pub fn expire(&mut self, now_ms: f64) -> Vec<Buff> {
        let mut lapsed = Vec::new();
        for buff in Buff::ALL {
            if let Some(until) = self.deadlines[buff.index()] {
                if now_ms > until {
                    self.deadlines[buff.index()] = None;
                    lapsed.push(buff);
                }
            }
        }
        lapsed
    }

    /// Buffs currently holding a deadline.
    pub fn active(&self) -> impl Iterator<Item = Buff> + '_ {
        Buff::ALL
            .into_iter()
            .filter(|b| self.deadlines[b.index()].is_some())
    }
}

/// The HUD's "active power" readout. Display only: effect expiry is driven
/// by [`TimedBuffs`], never by this label.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PowerLabel {
    pub kind: PowerUpKind,
    /// Hide the label after this time; `None` keeps it until replaced.
    pub until_ms: Option<f64>,
}

impl PowerLabel {
    pub fn is_visible(&self, now_ms: f64) -> bool {
        self.until_ms.map_or(true, |until| now_ms < until)
    }
}

/// The player ship. Lives outside the hecs world: there is exactly one and
/// every system needs it alongside entity queries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner.
    pub pos: Position,
    pub size: Size,
    pub weapon_level: u8,
    pub shield_active: bool,
    pub shield_hits: u32,
    /// Remaining invulnerability (ms). Hits are ignored while positive.
    pub invuln_ms: f32,
    pub lives: u32,
    pub buffs: TimedBuffs,
    /// Guardian drone orbit angle (radians).
    pub drone_angle: f32,
}

impl Player {
    /// Fresh ship centered at the bottom of a `width` x `height` playfield.
    pub fn new(width: f32, height: f32, lives: u32) -> Self {
        Self {
            pos: Position::new(
                width / 2.0 - PLAYER_SIZE.w / 2.0,
                height - PLAYER_BOTTOM_OFFSET,
            ),
            size: PLAYER_SIZE,
            weapon_level: 1,
            shield_active: false,
            shield_hits: 0,
            invuln_ms: 0.0,
            lives,
            buffs: TimedBuffs::default(),
            drone_angle: 0.0,
        }
    }

    pub fn center(&self) -> Position {
        Position::new(
            self.pos.x + self.size.w / 2.0,
            self.pos.y + self.size.h / 2.0,
        )
    }

    pub fn is_invulnerable(&self) -> bool {
        self.invuln_ms > 0.0
    }

    /// Current drone position while the guardian drone is active.
    pub fn drone_position(&self, orbit_radius: f32) -> Position {
        let c = self.center();
        Position::new(
            c.x + self.drone_angle.cos() * orbit_radius,
            c.y + self.drone_angle.sin() * orbit_radius,
        )
    }
}
