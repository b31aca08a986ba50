//! Best score / best wave and the local top-10 leaderboard.

use serde::{Deserialize, Serialize};

use crate::constants::LEADERBOARD_SIZE;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub score: u64,
    pub wave: u32,
    /// Unix time in milliseconds.
    pub timestamp: u64,
}

/// Records kept across runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Records {
    pub best_score: u64,
    pub best_wave: u32,
    pub leaderboard: Vec<LeaderboardEntry>,
}

impl Records {
    /// Raise best score and best wave independently. Returns true when the
    /// score is a new best.
    pub fn update_best(&mut self, score: u64, wave: u32) -> bool {
        self.best_wave = self.best_wave.max(wave);
        if score > self.best_score {
            self.best_score = score;
            true
        } else {
            false
        }
    }

    /// Insert a run, keep descending score order, truncate to the top 10.
    /// Equal scores keep insertion order.
    pub fn push_entry(&mut self, entry: LeaderboardEntry) {
        let at = self
            .leaderboard
            .iter()
            .position(|e| e.score < entry.score)
            .unwrap_or(self.leaderboard.len());
        self.leaderboard.insert(at, entry);
        self.leaderboard.truncate(LEADERBOARD_SIZE);
    }
}
