//! Concurrent use of the conversion functions.
//!
//! The conversion holds no state, so results computed on many threads must
//! match a single-threaded pass exactly.

use super::common::{BMT_MIDNIGHT, EDGE_TIMESTAMPS};
use beat_time::{display_from_posix_custom, Precision};
use std::thread;

const THREADS: usize = 8;

#[test]
fn test_parallel_results_match_serial() {
    // Edge cases plus a walk across several days in uneven steps
    let samples: Vec<i64> = EDGE_TIMESTAMPS
        .iter()
        .copied()
        .chain((0..500).map(|i| BMT_MIDNIGHT + i * 997_331))
        .collect();
    let expected: Vec<String> = samples
        .iter()
        .map(|&t| display_from_posix_custom(t, Precision::CENTIBEATS))
        .collect();

    thread::scope(|scope| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                scope.spawn(|| {
                    samples
                        .iter()
                        .map(|&t| display_from_posix_custom(t, Precision::CENTIBEATS))
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
