use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Winner of a bounded longest-sequence search: the starting value and the
/// element count of its trajectory. On ties the first value in ascending
/// order wins, so equal lengths never overwrite an earlier result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub start: u64,
    pub length: u64,
}

/// Wire model for `GET /collatz`: the original number and its full trajectory,
/// first element `number`, last element 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollatzResponse {
    pub number: u64,
    pub sequence: Vec<u64>,
}

/// Per-worker accounting from a parallel search.
#[derive(Debug, Clone, Serialize)]
pub struct WorkerReport {
    pub worker_id: usize,
    pub numbers_processed: u64,
    pub best: SearchResult,
    pub elapsed: Duration,
}
