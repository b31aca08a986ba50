//! External score sink. Submissions are fire-and-forget: delivery runs on
//! its own thread and failures are only logged.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use std::thread::JoinHandle;

use thiserror::Error;
use tracing::{info, warn};

use galaxy_core::events::ScoreSubmission;

#[derive(Error, Debug)]
pub enum SinkError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("submission rejected: {0}")]
    Rejected(String),
}

pub trait ScoreSink: Send + Sync {
    fn submit(&self, submission: &ScoreSubmission) -> Result<(), SinkError>;
}

/// Logs submissions and nothing else.
#[derive(Debug, Default)]
pub struct LogSink;

impl ScoreSink for LogSink {
    fn submit(&self, submission: &ScoreSubmission) -> Result<(), SinkError> {
        info!(
            identity = %submission.identity,
            score = submission.score,
            wave = submission.wave,
            "score submitted"
        );
        Ok(())
    }
}

/// Appends one JSON object per line.
#[derive(Debug)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ScoreSink for FileSink {
    fn submit(&self, submission: &ScoreSubmission) -> Result<(), SinkError> {
        if submission.identity.trim().is_empty() {
            return Err(SinkError::Rejected("empty identity".into()));
        }
        let mut line = serde_json::to_string(submission)?;
        line.push('\n');
        let mut file = OpenOptions::new().create(true).append(true).open(&self.path)?;
        file.write_all(line.as_bytes())?;
        Ok(())
    }
}

/// Deliver on a background thread. Returns the handle so callers that care
/// (tests, shutdown) can wait; the game loop drops it.
pub fn dispatch(sink: Arc<dyn ScoreSink>, submission: ScoreSubmission) -> Option<JoinHandle<()>> {
    let spawned = std::thread::Builder::new()
        .name("galaxy-score-sink".into())
        .spawn(move || {
            if let Err(err) = sink.submit(&submission) {
                warn!(%err, score = submission.score, "score submission failed");
            }
        });
    match spawned {
        Ok(handle) => Some(handle),
        Err(err) => {
            warn!(%err, "could not start score submission thread");
            None
        }
    }
}
