//! Events emitted by the simulation for audio and host feedback.

use serde::{Deserialize, Serialize};

use crate::enums::*;

/// Sound cues, drained into each snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    Shoot,
    PhotonShot,
    EnemyHit,
    EnemyDestroyed { tier: EnemyTier },
    PlayerHit,
    ShieldHit,
    PowerUp { kind: PowerUpKind },
    ExtraLife,
    WaveComplete { wave: u32 },
    GameOver,
    MissileLaunch,
    MissileHit,
    EnemyDive,
}

/// Final numbers of a finished run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub score: u64,
    pub wave: u32,
    pub shots_fired: u32,
    pub shots_hit: u32,
    /// Whether this run set a new best score.
    pub new_best: bool,
}

impl RunSummary {
    /// Rounded hit percentage, 0 when nothing was fired.
    pub fn accuracy(&self) -> u32 {
        accuracy_percent(self.shots_fired, self.shots_hit)
    }
}

/// Payload for the external score sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSubmission {
    pub identity: String,
    pub score: u64,
    pub wave: u32,
}

/// Host-facing outcomes that need action outside the simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum RunOutcome {
    /// Run ended; the host should record it on the leaderboard.
    Ended(RunSummary),
    /// Submit once to the external score sink.
    Submit(ScoreSubmission),
}

pub fn accuracy_percent(fired: u32, hit: u32) -> u32 {
    if fired == 0 {
        return 0;
    }
    ((hit as f64 / fired as f64) * 100.0).round() as u32
}
