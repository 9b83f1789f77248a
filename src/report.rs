use std::fmt;

use crate::sim::CompletionRecord;

// Summary statistics over one run's record sequence. This is the consumer
// side of the result boundary; anything fancier (plots, percentiles) hangs
// off the raw records.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub policy: &'static str,
    pub rounds: u32,
    pub dispatched: usize,
    // Clock value of the final completion, i.e. total simulated time.
    pub total_elapsed_ms: u64,
    pub mean_service_ms: f64,
    pub max_service_ms: u64,
}

impl RunSummary {
    pub fn from_records(policy: &'static str, rounds: u32, records: &[CompletionRecord]) -> Self {
        let dispatched = records.len();
        let total_elapsed_ms = records.last().map_or(0, |record| record.completed_at_ms);
        let max_service_ms = records
            .iter()
            .map(|record| record.service_time_ms)
            .max()
            .unwrap_or(0);
        let mean_service_ms = if dispatched == 0 {
            0.0
        } else {
            total_elapsed_ms as f64 / dispatched as f64
        };

        RunSummary {
            policy,
            rounds,
            dispatched,
            total_elapsed_ms,
            mean_service_ms,
            max_service_ms,
        }
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<7} rounds={:<3} dispatched={:<5} total={}ms mean={:.1}ms max={}ms",
            self.policy,
            self.rounds,
            self.dispatched,
            self.total_elapsed_ms,
            self.mean_service_ms,
            self.max_service_ms
        )
    }
}
