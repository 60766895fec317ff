//! Number of fractional beat digits.
//!
//! A precision of `p` scales a beat value by `10^p` before flooring, so the
//! scaled value of a day position lies in `[0, 1000 * 10^p)`. That bound has
//! to fit a `u64`, which caps `p` at [`MAX_PRECISION`].

use crate::error::{BeatError, BeatResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Largest supported number of fractional digits (`1000 * 10^15 < u64::MAX`).
pub const MAX_PRECISION: u32 = 15;

/// Validated number of fractional digits for a beat value.
///
/// Negative precision cannot be represented: signed input goes through
/// [`TryFrom<i64>`] and is rejected with [`BeatError::NegativePrecision`].
///
/// # Example
///
/// ```
/// use beat_common::Precision;
///
/// let p = Precision::new(2).unwrap();
/// assert_eq!(p, Precision::CENTIBEATS);
/// assert_eq!(p.scale(), 100);
/// assert_eq!(p.width(), 6); // "333.25"
///
/// assert!(Precision::try_from(-1_i64).is_err());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(try_from = "i64", into = "u32")]
pub struct Precision(u32);

impl Precision {
    /// Whole beats only.
    pub const WHOLE: Self = Self(0);
    /// Two digits: one centibeat resolution.
    pub const CENTIBEATS: Self = Self(2);
    /// Finest supported precision.
    pub const MAX: Self = Self(MAX_PRECISION);

    /// Create a precision of `digits` fractional digits.
    ///
    /// # Errors
    ///
    /// Returns [`BeatError::PrecisionTooLarge`] if `digits > MAX_PRECISION`.
    pub fn new(digits: u32) -> BeatResult<Self> {
        if digits > MAX_PRECISION {
            return Err(BeatError::PrecisionTooLarge {
                requested: i64::from(digits),
                max: MAX_PRECISION,
            });
        }
        Ok(Self(digits))
    }

    /// Number of fractional digits.
    #[must_use]
    pub const fn digits(self) -> u32 {
        self.0
    }

    /// Scale factor `10^digits`.
    #[must_use]
    pub const fn scale(self) -> u64 {
        10_u64.pow(self.0)
    }

    /// Exclusive upper bound of a scaled day position: `1000 * 10^digits`.
    #[must_use]
    pub const fn modulus(self) -> u64 {
        1000 * self.scale()
    }

    /// Length of the rendered value: 3 integer digits, plus a decimal point
    /// and `digits` fractional digits when `digits > 0`.
    #[must_use]
    pub const fn width(self) -> usize {
        if self.0 == 0 {
            3
        } else {
            4 + self.0 as usize
        }
    }

    /// Whether only whole beats are kept.
    #[must_use]
    pub const fn is_whole(self) -> bool {
        self.0 == 0
    }
}

impl TryFrom<u32> for Precision {
    type Error = BeatError;

    fn try_from(digits: u32) -> BeatResult<Self> {
        Self::new(digits)
    }
}

impl TryFrom<i64> for Precision {
    type Error = BeatError;

    fn try_from(digits: i64) -> BeatResult<Self> {
        if digits < 0 {
            return Err(BeatError::NegativePrecision(digits));
        }
        let digits = u32::try_from(digits).map_err(|_| BeatError::PrecisionTooLarge {
            requested: digits,
            max: MAX_PRECISION,
        })?;
        Self::new(digits)
    }
}

impl From<Precision> for u32 {
    fn from(precision: Precision) -> Self {
        precision.0
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
