//! Wall-clock timestamps in milliseconds since the Unix epoch.
//!
//! Timestamps are plain `i64` milliseconds so that instants before 1970 are
//! representable. Text input is either an integer millisecond count or an
//! RFC 3339 date-time (parsed with `humantime`).

use crate::error::{BeatError, BeatResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Milliseconds in one mean solar day.
pub const MILLIS_PER_DAY: i64 = 86_400_000;

/// Milliseconds in one hour.
pub const MILLIS_PER_HOUR: i64 = 3_600_000;

/// First instant `humantime` can no longer render (year 10000).
const RFC3339_LIMIT_MILLIS: i64 = 253_402_300_800_000;

/// Milliseconds since 1970-01-01T00:00:00Z.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Timestamp(i64);

impl Timestamp {
    /// The Unix epoch.
    pub const EPOCH: Self = Self(0);

    /// Wrap a millisecond count.
    #[must_use]
    pub const fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    /// Milliseconds since the epoch.
    #[must_use]
    pub const fn as_millis(self) -> i64 {
        self.0
    }

    /// Current wall-clock time.
    #[must_use]
    pub fn now() -> Self {
        Self::from_system_time(SystemTime::now())
    }

    /// Convert a [`SystemTime`], flooring to whole milliseconds and
    /// saturating at the `i64` range.
    #[must_use]
    pub fn from_system_time(time: SystemTime) -> Self {
        match time.duration_since(UNIX_EPOCH) {
            Ok(after) => Self(i64::try_from(after.as_millis()).unwrap_or(i64::MAX)),
            Err(err) => {
                let before = err.duration().as_nanos();
                let millis = before.div_ceil(1_000_000);
                Self(i64::try_from(millis).map_or(i64::MIN, |m| -m))
            }
        }
    }

    /// Convert back to a [`SystemTime`], or `None` if the platform clock
    /// cannot represent the instant.
    #[must_use]
    pub fn to_system_time(self) -> Option<SystemTime> {
        let magnitude = Duration::from_millis(self.0.unsigned_abs());
        if self.0 >= 0 {
            UNIX_EPOCH.checked_add(magnitude)
        } else {
            UNIX_EPOCH.checked_sub(magnitude)
        }
    }

    /// RFC 3339 rendering with millisecond resolution, when the instant lies
    /// between the epoch and the year 10000.
    #[must_use]
    pub fn to_rfc3339(self) -> Option<String> {
        if !(0..RFC3339_LIMIT_MILLIS).contains(&self.0) {
            return None;
        }
        self.to_system_time()
            .map(|time| humantime::format_rfc3339_millis(time).to_string())
    }
}

impl From<i64> for Timestamp {
    fn from(millis: i64) -> Self {
        Self(millis)
    }
}

impl From<SystemTime> for Timestamp {
    fn from(time: SystemTime) -> Self {
        Self::from_system_time(time)
    }
}

impl From<Timestamp> for i64 {
    fn from(timestamp: Timestamp) -> Self {
        timestamp.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Timestamp {
    type Err = BeatError;

    /// Parse integer milliseconds (`"1525244393059"`, `"-5"`) or an RFC 3339
    /// date-time (`"2018-05-02T07:39:53Z"`).
    fn from_str(s: &str) -> BeatResult<Self> {
        let s = s.trim();
        if let Ok(millis) = s.parse::<i64>() {
            return Ok(Self(millis));
        }
        humantime::parse_rfc3339_weak(s)
            .map(Self::from_system_time)
            .map_err(|e| BeatError::InvalidTimestamp {
                input: s.to_string(),
                reason: e.to_string(),
            })
    }
}
