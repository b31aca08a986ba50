//! Applies the engine's run outcomes on the host side: records go to disk,
//! submissions go to the sink.

use std::sync::Arc;
use std::thread::JoinHandle;

use tracing::{info, warn};

use galaxy_core::events::RunOutcome;
use galaxy_core::records::Records;

use crate::records_store::{timestamp_ms, RecordsStore};
use crate::sink::{self, ScoreSink};

pub struct OutcomeHandler {
    store: RecordsStore,
    records: Records,
    sink: Arc<dyn ScoreSink>,
}

impl OutcomeHandler {
    pub fn new(store: RecordsStore, records: Records, sink: Arc<dyn ScoreSink>) -> Self {
        Self { store, records, sink }
    }

    pub fn records(&self) -> &Records {
        &self.records
    }

    /// Handle outcomes in order. Returns the handles of any submission
    /// threads started.
    pub fn handle(&mut self, outcomes: Vec<RunOutcome>) -> Vec<JoinHandle<()>> {
        let mut pending = Vec::new();
        for outcome in outcomes {
            match outcome {
                RunOutcome::Ended(summary) => {
                    if let Err(err) = self.store.record_run(&mut self.records, &summary, timestamp_ms()) {
                        warn!(%err, path = %self.store.path().display(), "could not save records");
                    } else {
                        info!(
                            score = summary.score,
                            best = self.records.best_score,
                            "records saved"
                        );
                    }
                }
                RunOutcome::Submit(submission) => {
                    pending.extend(sink::dispatch(self.sink.clone(), submission));
                }
            }
        }
        pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use galaxy_core::events::{RunSummary, ScoreSubmission};

    use crate::sink::SinkError;

    #[derive(Default)]
    struct Recording(Mutex<Vec<ScoreSubmission>>);

    impl ScoreSink for Recording {
        fn submit(&self, submission: &ScoreSubmission) -> Result<(), SinkError> {
            self.0.lock().unwrap().push(submission.clone());
            Ok(())
        }
    }

    #[test]
    fn test_run_end_is_persisted_and_submitted() {
        let dir = std::env::temp_dir().join("galaxy_test_outcomes");
        let _ = std::fs::remove_dir_all(&dir);
        let store = RecordsStore::new(&dir);
        let sink = Arc::new(Recording::default());
        let mut handler = OutcomeHandler::new(store.clone(), Records::default(), sink.clone());

        let summary = RunSummary {
            score: 750,
            wave: 4,
            shots_fired: 20,
            shots_hit: 9,
            new_best: true,
        };
        let submission = ScoreSubmission {
            identity: "wallet-1".into(),
            score: 750,
            wave: 4,
        };
        let pending = handler.handle(vec![RunOutcome::Ended(summary), RunOutcome::Submit(submission.clone())]);
        for handle in pending {
            handle.join().unwrap();
        }

        assert_eq!(handler.records().best_score, 750);
        assert_eq!(store.load().unwrap(), *handler.records());
        assert_eq!(sink.0.lock().unwrap().as_slice(), &[submission]);

        let _ = std::fs::remove_dir_all(&dir);
    }
}
