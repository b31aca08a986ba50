//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Run-level state machine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Splash screen, no run in progress.
    #[default]
    Idle,
    /// Run active (possibly inside the wave overlay window).
    Running,
    /// Run frozen by the player.
    Paused,
    /// Lives depleted; waiting for a restart.
    GameOver,
}

/// Enemy tier. Each tier has fixed base hit points, size, score and color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyTier {
    /// Weakest tier, diamond silhouette.
    #[default]
    Scout,
    /// Middle tier, hexagon silhouette.
    Striker,
    /// Strongest tier, octagon silhouette with a core.
    Core,
}

/// Power-up kinds dropped by destroyed enemies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PowerUpKind {
    /// Weapon level +1 for a limited time.
    Overcharge,
    /// Absorbs hits until its charges run out.
    Shield,
    /// Clears enemy bullets and damages every enemy.
    Bomb,
    /// One additional life.
    ExtraLife,
    /// Shortened shot cooldown.
    RapidFire,
    /// Piercing beam shots.
    PhotonBurst,
    /// Fast, half-damage shots.
    RapidPulse,
    /// Two homing missiles per shot.
    MissileSwarm,
    /// Orbiting drone that intercepts enemy bullets.
    GuardianDrone,
}

/// Independently timed player buffs. Each expires on its own deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Buff {
    Overcharge,
    RapidFire,
    PhotonBurst,
    RapidPulse,
    MissileSwarm,
    GuardianDrone,
}

/// Shot pattern chosen for a single trigger pull.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShotPattern {
    Single,
    Twin,
    Spread,
    PhotonBeam,
    Pulse,
}

/// Logical input keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Left,
    Right,
    Fire,
}

impl EnemyTier {
    pub const ALL: [EnemyTier; 3] = [EnemyTier::Scout, EnemyTier::Striker, EnemyTier::Core];
}

impl PowerUpKind {
    pub const ALL: [PowerUpKind; 9] = [
        PowerUpKind::Overcharge,
        PowerUpKind::Shield,
        PowerUpKind::Bomb,
        PowerUpKind::ExtraLife,
        PowerUpKind::RapidFire,
        PowerUpKind::PhotonBurst,
        PowerUpKind::RapidPulse,
        PowerUpKind::MissileSwarm,
        PowerUpKind::GuardianDrone,
    ];

    /// HUD label shown while the power-up's label window is open.
    pub fn label(&self) -> &'static str {
        match self {
            PowerUpKind::Overcharge => "OVERCHARGE",
            PowerUpKind::Shield => "SHIELD",
            PowerUpKind::Bomb => "BOMB!",
            PowerUpKind::ExtraLife => "+1 LIFE",
            PowerUpKind::RapidFire => "RAPID FIRE",
            PowerUpKind::PhotonBurst => "PHOTON BURST",
            PowerUpKind::RapidPulse => "RAPID PULSE",
            PowerUpKind::MissileSwarm => "MISSILE SWARM",
            PowerUpKind::GuardianDrone => "GUARDIAN DRONE",
        }
    }

    /// Single-letter glyph drawn on the falling capsule.
    pub fn glyph(&self) -> char {
        match self {
            PowerUpKind::Overcharge => 'W',
            PowerUpKind::Shield => 'S',
            PowerUpKind::Bomb => 'B',
            PowerUpKind::ExtraLife => 'L',
            PowerUpKind::RapidFire => 'R',
            PowerUpKind::PhotonBurst => 'P',
            PowerUpKind::RapidPulse => 'Q',
            PowerUpKind::MissileSwarm => 'M',
            PowerUpKind::GuardianDrone => 'D',
        }
    }

    /// The timed buff this power-up grants, if any.
    pub fn buff(&self) -> Option<Buff> {
        match self {
            PowerUpKind::Overcharge => Some(Buff::Overcharge),
            PowerUpKind::RapidFire => Some(Buff::RapidFire),
            PowerUpKind::PhotonBurst => Some(Buff::PhotonBurst),
            PowerUpKind::RapidPulse => Some(Buff::RapidPulse),
            PowerUpKind::MissileSwarm => Some(Buff::MissileSwarm),
            PowerUpKind::GuardianDrone => Some(Buff::GuardianDrone),
            PowerUpKind::Shield | PowerUpKind::Bomb | PowerUpKind::ExtraLife => None,
        }
    }
}

impl Buff {
    pub const ALL: [Buff; 6] = [
        Buff::Overcharge,
        Buff::RapidFire,
        Buff::PhotonBurst,
        Buff::RapidPulse,
        Buff::MissileSwarm,
        Buff::GuardianDrone,
    ];

    pub(crate) fn index(self) -> usize {
        match self {
            Buff::Overcharge => 0,
            Buff::RapidFire => 1,
            Buff::PhotonBurst => 2,
            Buff::RapidPulse => 3,
            Buff::MissileSwarm => 4,
            Buff::GuardianDrone => 5,
        }
    }
}

impl Key {
    /// Map a raw keyboard key name (lowercased DOM-style) to a logical key.
    pub fn from_name(name: &str) -> Option<Key> {
        match name.to_ascii_lowercase().as_str() {
            "arrowleft" | "a" => Some(Key::Left),
            "arrowright" | "d" => Some(Key::Right),
            " " | "space" | "spacebar" => Some(Key::Fire),
            _ => None,
        }
    }
}
