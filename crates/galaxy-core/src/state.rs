//! Game state snapshot: the complete visible state handed to the host after
//! every tick. The render projector and HUD read nothing else.

use serde::{Deserialize, Serialize};

use crate::components::Star;
use crate::enums::*;
use crate::events::GameEvent;
use crate::types::{Position, Rgb, SimTime, Size, Velocity};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub width: f32,
    pub height: f32,
    pub overlay: Overlay,
    pub hud: HudView,
    pub player: PlayerView,
    pub enemies: Vec<EnemyView>,
    pub bullets: Vec<BulletView>,
    pub missiles: Vec<MissileView>,
    pub power_ups: Vec<PowerUpView>,
    pub particles: Vec<ParticleView>,
    pub stars: Vec<Star>,
    /// Rotation of the background portal rings (radians).
    pub portal_angle: f32,
    pub events: Vec<GameEvent>,
}

/// Full-screen overlay shown on top of the playfield.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Overlay {
    #[default]
    None,
    /// Idle splash before the first run.
    Splash,
    /// Wave-incoming banner; gameplay is frozen while it shows.
    WaveIncoming { wave: u32 },
    Paused,
    GameOver {
        score: u64,
        best_score: u64,
        wave: u32,
        best_wave: u32,
        /// Hit percentage; `None` when nothing was fired.
        accuracy: Option<u32>,
    },
}

/// Read-only HUD numbers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HudView {
    pub score: u64,
    pub lives: u32,
    pub wave: u32,
    pub weapon_level: u8,
    pub shield: bool,
    /// Active power-up label text, if any.
    pub power_label: Option<String>,
    pub best_score: u64,
    pub best_wave: u32,
    /// Rounded hit percentage.
    pub accuracy: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    /// Top-left corner.
    pub position: Position,
    pub size: Size,
    pub invulnerable: bool,
    pub shield_active: bool,
    /// Guardian drone position, when the drone is up.
    pub drone: Option<Position>,
    pub active_buffs: Vec<Buff>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub tier: EnemyTier,
    /// Top-left corner.
    pub position: Position,
    pub size: Size,
    pub hp: f32,
    pub max_hp: f32,
    pub diving: bool,
}

/// Visual variant of a bullet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BulletKind {
    Standard,
    Beam,
    Pulse,
    Enemy,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulletView {
    pub kind: BulletKind,
    /// Center.
    pub position: Position,
    pub velocity: Velocity,
    pub size: Size,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MissileView {
    pub position: Position,
    pub velocity: Velocity,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowerUpView {
    pub kind: PowerUpKind,
    /// Center.
    pub position: Position,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticleView {
    pub position: Position,
    pub life: f32,
    pub color: Rgb,
    pub radius: f32,
}
