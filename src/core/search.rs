use std::time::Instant;

use crate::core::sequence::{sequence_length, step};
use crate::domain::model::{SearchResult, WorkerReport};
use crate::domain::ports::LengthSource;
use crate::utils::error::{CollatzError, Result};

/// Length oracle that recomputes the full trajectory for every candidate.
pub struct DirectLength;

impl LengthSource for DirectLength {
    fn length(&mut self, n: u64) -> Result<u64> {
        sequence_length(n)
    }
}

/// Length oracle with a direct-indexed memo over `[1, bound]`. Trajectories
/// overlap heavily once they descend into previously visited values, so a
/// candidate's walk stops at the first value with a cached length and the
/// lengths of everything above it on the walk are backfilled. Values outside
/// `[1, bound]` are never cached, which keeps the memo at `bound + 1` slots.
pub struct MemoizedLength {
    bound: u64,
    lengths: Vec<u32>,
}

impl MemoizedLength {
    pub fn new(bound: u64) -> Self {
        let mut lengths = vec![0u32; bound as usize + 1];
        if bound >= 1 {
            lengths[1] = 1;
        }
        Self { bound, lengths }
    }
}

impl LengthSource for MemoizedLength {
    fn length(&mut self, n: u64) -> Result<u64> {
        if n == 0 {
            return Err(CollatzError::InvalidInput { value: n });
        }

        let mut trail = Vec::new();
        let mut current = n;
        let known = loop {
            if current <= self.bound {
                let cached = self.lengths[current as usize];
                if cached != 0 {
                    break u64::from(cached);
                }
            }
            trail.push(current);
            current = step(current)?;
        };

        let mut length = known;
        for &value in trail.iter().rev() {
            length += 1;
            if value <= self.bound {
                self.lengths[value as usize] = length as u32;
            }
        }

        Ok(length)
    }
}

/// Scan candidates `1..=bound` in ascending order and keep the first value
/// with the strictly longest trajectory. Later candidates of equal length
/// never overwrite the current best.
pub fn search<L: LengthSource>(bound: u64, source: &mut L) -> Result<SearchResult> {
    if bound == 0 {
        return Err(CollatzError::InvalidBound { bound });
    }

    let mut best = SearchResult {
        start: 1,
        length: 1,
    };
    for candidate in 1..=bound {
        let length = source.length(candidate)?;
        if length > best.length {
            best = SearchResult {
                start: candidate,
                length,
            };
        }
    }

    Ok(best)
}

/// Sequential search with the memoized oracle.
pub fn search_memoized(bound: u64) -> Result<SearchResult> {
    search(bound, &mut MemoizedLength::new(bound))
}

// Deterministic reduction for worker-local winners: greater length wins, and
// on equal lengths the smaller starting value wins. This reproduces the
// ascending-order tie-break no matter how the local results are combined.
fn reduce(best: SearchResult, candidate: SearchResult) -> SearchResult {
    if candidate.length > best.length
        || (candidate.length == best.length && candidate.start < best.start)
    {
        candidate
    } else {
        best
    }
}

/// Parallel search: `[1, bound]` is split into disjoint contiguous sub-ranges,
/// one per worker, each scanned on a blocking thread with its own memoized
/// oracle. The computation is pure so no coordination is needed beyond the
/// final reduction of local winners.
pub async fn search_parallel(
    bound: u64,
    workers: usize,
) -> Result<(SearchResult, Vec<WorkerReport>)> {
    if bound == 0 {
        return Err(CollatzError::InvalidBound { bound });
    }

    let workers = workers.clamp(1, bound as usize);
    let chunk = bound.div_ceil(workers as u64);

    let mut handles = Vec::with_capacity(workers);
    for worker_id in 0..workers {
        let lo = 1 + worker_id as u64 * chunk;
        let hi = (lo + chunk - 1).min(bound);
        if lo > bound {
            break;
        }

        handles.push(tokio::task::spawn_blocking(move || {
            let started = Instant::now();
            let mut source = MemoizedLength::new(bound);
            let mut local = SearchResult {
                start: lo,
                length: source.length(lo)?,
            };
            for candidate in lo + 1..=hi {
                let length = source.length(candidate)?;
                if length > local.length {
                    local = SearchResult {
                        start: candidate,
                        length,
                    };
                }
            }
            Ok::<_, CollatzError>(WorkerReport {
                worker_id,
                numbers_processed: hi - lo + 1,
                best: local,
                elapsed: started.elapsed(),
            })
        }));
    }

    let mut reports = Vec::with_capacity(handles.len());
    for handle in handles {
        let report = handle.await??;
        tracing::debug!(
            "worker {} scanned {} candidates, local best {} ({} elements) in {:?}",
            report.worker_id,
            report.numbers_processed,
            report.best.start,
            report.best.length,
            report.elapsed
        );
        reports.push(report);
    }

    let best = reports
        .iter()
        .map(|r| r.best)
        .fold(SearchResult { start: 1, length: 1 }, reduce);

    Ok((best, reports))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_under_10_finds_9() {
        let result = search(10, &mut DirectLength).unwrap();
        assert_eq!(result, SearchResult { start: 9, length: 20 });
    }

    #[test]
    fn test_search_under_20_first_of_tied_pair_wins() {
        // 18 and 19 both reach 21 elements; ascending order keeps 18.
        let result = search_memoized(20).unwrap();
        assert_eq!(result, SearchResult { start: 18, length: 21 });
    }

    #[test]
    fn test_search_bound_of_one() {
        let result = search_memoized(1).unwrap();
        assert_eq!(result, SearchResult { start: 1, length: 1 });
    }

    #[test]
    fn test_zero_bound_is_rejected() {
        assert!(matches!(
            search_memoized(0),
            Err(CollatzError::InvalidBound { bound: 0 })
        ));
    }

    #[test]
    fn test_memoized_agrees_with_direct() {
        for bound in [1, 2, 10, 100, 500] {
            let direct = search(bound, &mut DirectLength).unwrap();
            let memoized = search_memoized(bound).unwrap();
            assert_eq!(direct, memoized, "bound {}", bound);
        }
    }

    #[test]
    fn test_memoized_lengths_match_direct_per_candidate() {
        let mut memoized = MemoizedLength::new(100);
        for n in 1..=100 {
            assert_eq!(memoized.length(n).unwrap(), sequence_length(n).unwrap());
        }
    }

    #[test]
    fn test_reduce_prefers_smaller_start_on_tie() {
        let a = SearchResult { start: 19, length: 21 };
        let b = SearchResult { start: 18, length: 21 };
        assert_eq!(reduce(a, b), b);
        assert_eq!(reduce(b, a), b);
    }

    #[tokio::test]
    async fn test_parallel_agrees_with_sequential() {
        let sequential = search_memoized(1000).unwrap();
        let (parallel, reports) = search_parallel(1000, 4).await.unwrap();
        assert_eq!(parallel, sequential);
        assert_eq!(reports.len(), 4);
        assert_eq!(reports.iter().map(|r| r.numbers_processed).sum::<u64>(), 1000);
    }

    #[tokio::test]
    async fn test_parallel_with_more_workers_than_candidates() {
        let (result, reports) = search_parallel(5, 16).await.unwrap();
        assert_eq!(result, search_memoized(5).unwrap());
        assert_eq!(reports.iter().map(|r| r.numbers_processed).sum::<u64>(), 5);
    }

    #[tokio::test]
    async fn test_parallel_tie_break_across_chunk_boundary() {
        // With two workers over 1..=20, the tied pair 18/19 lands in the
        // second chunk; the reduction must still report 18.
        let (result, _) = search_parallel(20, 2).await.unwrap();
        assert_eq!(result, SearchResult { start: 18, length: 21 });
    }

    #[tokio::test]
    async fn test_parallel_zero_bound_is_rejected() {
        assert!(matches!(
            search_parallel(0, 4).await,
            Err(CollatzError::InvalidBound { bound: 0 })
        ));
    }
}
