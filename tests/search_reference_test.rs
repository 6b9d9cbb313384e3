//! Known-answer tests for the bounded search, checked against the published
//! longest-trajectory holders for small bounds.

use collatz_lab::{search_memoized, search_parallel, SearchResult};

#[test]
fn test_longest_under_10() {
    assert_eq!(
        search_memoized(10).unwrap(),
        SearchResult { start: 9, length: 20 }
    );
}

#[test]
fn test_longest_under_20() {
    assert_eq!(
        search_memoized(20).unwrap(),
        SearchResult { start: 18, length: 21 }
    );
}

#[test]
fn test_longest_under_100_000() {
    assert_eq!(
        search_memoized(100_000).unwrap(),
        SearchResult { start: 77_031, length: 351 }
    );
}

#[test]
#[ignore = "scans the full million-candidate range"]
fn test_longest_under_1_000_000() {
    assert_eq!(
        search_memoized(1_000_000).unwrap(),
        SearchResult { start: 837_799, length: 525 }
    );
}

#[tokio::test]
#[ignore = "scans the full million-candidate range"]
async fn test_parallel_longest_under_1_000_000() {
    let (result, reports) = search_parallel(1_000_000, num_cpus::get()).await.unwrap();
    assert_eq!(
        result,
        SearchResult { start: 837_799, length: 525 }
    );
    assert_eq!(
        reports.iter().map(|r| r.numbers_processed).sum::<u64>(),
        1_000_000
    );
}
