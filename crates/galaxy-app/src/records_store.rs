//! On-disk records: best score, best wave and the local leaderboard.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use galaxy_core::events::RunSummary;
use galaxy_core::records::{LeaderboardEntry, Records};

use crate::error::AppError;

const RECORDS_FILE: &str = "records.json";

#[derive(Debug, Clone)]
pub struct RecordsStore {
    path: PathBuf,
}

impl RecordsStore {
    pub fn new(dir: &Path) -> Self {
        Self {
            path: dir.join(RECORDS_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// A missing file is an empty record set; a corrupt one is an error.
    pub fn load(&self) -> Result<Records, AppError> {
        match fs::read_to_string(&self.path) {
            Ok(json) => Ok(serde_json::from_str(&json)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Records::default()),
            Err(e) => Err(e.into()),
        }
    }

    pub fn save(&self, records: &Records) -> Result<(), AppError> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(records)?)?;
        Ok(())
    }

    /// Fold a finished run into `records` and persist them.
    pub fn record_run(&self, records: &mut Records, summary: &RunSummary, timestamp: u64) -> Result<(), AppError> {
        records.update_best(summary.score, summary.wave);
        records.push_entry(LeaderboardEntry {
            score: summary.score,
            wave: summary.wave,
            timestamp,
        });
        self.save(records)
    }
}

/// Wall-clock Unix time in milliseconds; 0 if the clock is before the epoch.
pub fn timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(score: u64, wave: u32) -> RunSummary {
        RunSummary {
            score,
            wave,
            shots_fired: 10,
            shots_hit: 5,
            new_best: false,
        }
    }

    fn fresh_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(name);
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn missing_file_is_empty_records() {
        let store = RecordsStore::new(&fresh_dir("galaxy_test_records_missing"));
        assert_eq!(store.load().unwrap(), Records::default());
    }

    #[test]
    fn save_and_load_file() {
        let dir = fresh_dir("galaxy_test_records_roundtrip");
        let store = RecordsStore::new(&dir);
        let mut records = Records::default();
        store.record_run(&mut records, &summary(300, 2), 1_000).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.best_score, 300);
        assert_eq!(loaded.best_wave, 2);
        assert_eq!(loaded.leaderboard.len(), 1);
        assert_eq!(loaded.leaderboard[0].timestamp, 1_000);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn leaderboard_keeps_top_ten() {
        let dir = fresh_dir("galaxy_test_records_top_ten");
        let store = RecordsStore::new(&dir);
        let mut records = Records::default();
        for i in 0..12u64 {
            store.record_run(&mut records, &summary(i * 100, 1), i).unwrap();
        }
        let loaded = store.load().unwrap();
        assert_eq!(loaded.leaderboard.len(), 10);
        assert_eq!(loaded.leaderboard[0].score, 1_100);
        assert_eq!(loaded.leaderboard[9].score, 200);
        assert_eq!(loaded.best_score, 1_100);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let dir = fresh_dir("galaxy_test_records_corrupt");
        fs::create_dir_all(&dir).unwrap();
        let store = RecordsStore::new(&dir);
        fs::write(store.path(), "not json").unwrap();
        assert!(matches!(store.load(), Err(AppError::Json(_))));

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn timestamp_is_after_2020() {
        assert!(timestamp_ms() > 1_577_836_800_000);
    }
}
