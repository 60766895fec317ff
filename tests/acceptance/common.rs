//! Common utilities for acceptance tests.
//!
//! Provides the proptest strategies shared by the property suites and the
//! fixed edge-case timestamps (around the epoch, around BMT midnight, and
//! the `i64` extremes) that every suite checks explicitly.

use beat_common::MILLIS_PER_DAY;
use beat_time::{Precision, BEAT, CENTIBEAT, MAX_PRECISION};
use proptest::prelude::*;

/// 2018-05-02T00:00:00+01:00.
pub const BMT_MIDNIGHT: i64 = 1_525_215_600_000;

/// Edge-case timestamps checked alongside the generated ones.
pub const EDGE_TIMESTAMPS: [i64; 18] = [
    0,
    1,
    -1,
    i64::MIN,
    i64::MIN + 1,
    i64::MAX,
    i64::MAX - 1,
    BMT_MIDNIGHT,
    BMT_MIDNIGHT - 1,
    BMT_MIDNIGHT + 1,
    BMT_MIDNIGHT + BEAT,
    BMT_MIDNIGHT + CENTIBEAT,
    -MILLIS_PER_DAY,
    -3_600_000,
    -3_600_001,
    1_525_244_393_059,
    1_525_221_281_000,
    1_525_294_572_000,
];

/// Any supported precision.
pub fn precision() -> impl Strategy<Value = Precision> {
    (0..=MAX_PRECISION).prop_map(|digits| Precision::new(digits).unwrap())
}

/// Any timestamp, plus the edge cases with extra weight.
pub fn timestamp() -> impl Strategy<Value = i64> {
    prop_oneof![
        4 => any::<i64>(),
        // within a few centuries of the epoch
        4 => -400 * 365 * MILLIS_PER_DAY..400 * 365 * MILLIS_PER_DAY,
        1 => proptest::sample::select(EDGE_TIMESTAMPS.to_vec()),
    ]
}

/// Every supported precision.
pub fn all_precisions() -> impl Iterator<Item = Precision> {
    (0..=MAX_PRECISION).filter_map(|p| Precision::new(p).ok())
}
