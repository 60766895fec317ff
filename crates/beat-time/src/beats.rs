//! Conversion from Unix milliseconds to Internet Time beats.
//!
//! A beat is 1/1000 of a day (86 400 ms) and a centibeat 1/100 of a beat
//! (864 ms). Day positions are taken in Biel Mean Time, one hour ahead of UTC.

use beat_common::{Precision, Timestamp, MILLIS_PER_HOUR};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::trace;

/// Milliseconds in one beat (one day / 1000).
pub const BEAT: i64 = 86_400;

/// Milliseconds in one centibeat (one beat / 100).
pub const CENTIBEAT: i64 = 864;

/// Beats in one day.
pub const BEATS_PER_DAY: u64 = 1000;

/// Offset of Biel Mean Time from UTC.
pub const BMT_OFFSET_MILLIS: i64 = MILLIS_PER_HOUR;

/// Convert a length of time in milliseconds to beats.
///
/// No offset or day wrap is applied; 23 minutes is just under 16 beats.
///
/// ```
/// let beats = beat_time::millis_to_beats(1_380_000);
/// assert!((beats - 15.972_222).abs() < 1e-6);
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn millis_to_beats(millis: i64) -> f64 {
    millis as f64 / BEAT as f64
}

/// Convert a length of time in milliseconds to centibeats.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn millis_to_centibeats(millis: i64) -> f64 {
    millis as f64 / CENTIBEAT as f64
}

/// Position within the Internet Time day, scaled by `10^precision`.
///
/// `scaled` is always in `[0, 1000 * 10^precision)`, so a `BeatTime` at
/// precision 2 holding `33325` reads as `333.25`.
///
/// Serialized as its display string (`"333.25"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct BeatTime {
    scaled: u64,
    precision: Precision,
}

impl BeatTime {
    /// Day position of `timestamp_millis` at the given precision.
    ///
    /// Computes `floor((t + 1h) * 10^p / 86400) mod (1000 * 10^p)` with
    /// Euclidean division, which keeps pre-epoch timestamps non-negative.
    #[must_use]
    #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    pub fn from_posix(timestamp_millis: i64, precision: Precision) -> Self {
        let shifted = i128::from(timestamp_millis) + i128::from(BMT_OFFSET_MILLIS);
        // |shifted| * 10^15 stays well inside i128
        let scaled = (shifted * i128::from(precision.scale())).div_euclid(i128::from(BEAT));
        let position = scaled.rem_euclid(i128::from(precision.modulus()));
        debug_assert!((0..i128::from(precision.modulus())).contains(&position));
        let scaled = position as u64;

        trace!(timestamp_millis, %precision, scaled, "Converted timestamp to beats");
        Self { scaled, precision }
    }

    /// Day position of a [`Timestamp`].
    #[must_use]
    pub fn from_timestamp(timestamp: Timestamp, precision: Precision) -> Self {
        Self::from_posix(timestamp.as_millis(), precision)
    }

    /// Build from an already scaled value, or `None` if it is not a valid day
    /// position at this precision.
    #[must_use]
    pub fn from_scaled(scaled: u64, precision: Precision) -> Option<Self> {
        (scaled < precision.modulus()).then_some(Self { scaled, precision })
    }

    /// Beat value multiplied by `10^precision`.
    #[must_use]
    pub const fn scaled(self) -> u64 {
        self.scaled
    }

    /// Fractional digits carried by this value.
    #[must_use]
    pub const fn precision(self) -> Precision {
        self.precision
    }

    /// Whole beats, in `[0, 1000)`.
    #[must_use]
    pub const fn whole_beats(self) -> u64 {
        self.scaled / self.precision.scale()
    }

    /// Fractional digits as an integer, in `[0, 10^precision)`.
    #[must_use]
    pub const fn fraction(self) -> u64 {
        self.scaled % self.precision.scale()
    }

    /// Beat value with the decimal point restored, e.g. `333.25`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(self) -> f64 {
        self.scaled as f64 / self.precision.scale() as f64
    }
}

impl fmt::Display for BeatTime {
    /// Fixed-width rendering (`"065"`, `"333.25"`); `{:#}` adds the `@` prefix.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str("@")?;
        }
        f.write_str(&crate::display::render(self.scaled, self.precision))
    }
}

/// Day position of `timestamp_millis` at the given precision.
#[must_use]
pub fn to_beats(timestamp_millis: i64, precision: Precision) -> BeatTime {
    BeatTime::from_posix(timestamp_millis, precision)
}

/// Whole beats for `timestamp_millis`, in `[0, 1000)`.
#[must_use]
pub fn from_posix(timestamp_millis: i64) -> u64 {
    to_beats(timestamp_millis, Precision::WHOLE).scaled()
}

/// Beats for `timestamp_millis` scaled by `10^precision`, in
/// `[0, 1000 * 10^precision)`.
///
/// ```
/// use beat_time::{from_posix_custom, Precision};
///
/// assert_eq!(from_posix_custom(1_525_244_393_059, Precision::CENTIBEATS), 33_325);
/// ```
#[must_use]
pub fn from_posix_custom(timestamp_millis: i64, precision: Precision) -> u64 {
    to_beats(timestamp_millis, precision).scaled()
}

/// Current Internet Time in whole beats.
#[must_use]
pub fn now() -> BeatTime {
    now_custom(Precision::WHOLE)
}

/// Current Internet Time at the given precision.
#[must_use]
pub fn now_custom(precision: Precision) -> BeatTime {
    BeatTime::from_timestamp(Timestamp::now(), precision)
}
