//! Fixed-width rendering of beat values.
//!
//! The scaled integer is zero-padded to `3 + precision` digits and a decimal
//! point is inserted after the third digit. No float formatting is involved,
//! so trailing zeros are never lost: `"000.00"`, `"914.02"`.

use crate::beats::{to_beats, BeatTime};
use beat_common::{BeatError, BeatResult, Precision, MAX_PRECISION};
use std::str::FromStr;

/// Render a scaled day position. `scaled` must be below `precision.modulus()`.
pub(crate) fn render(scaled: u64, precision: Precision) -> String {
    let fraction_digits = precision.digits() as usize;
    let digits = format!("{scaled:0width$}", width = 3 + fraction_digits);
    if precision.is_whole() {
        return digits;
    }

    let (whole, fraction) = digits.split_at(digits.len() - fraction_digits);
    let mut out = String::with_capacity(precision.width());
    out.push_str(whole);
    out.push('.');
    out.push_str(fraction);
    out
}

/// Whole beats for `timestamp_millis`, zero-padded to three digits.
///
/// ```
/// assert_eq!(beat_time::display_from_posix(1_525_221_281_000), "065");
/// ```
#[must_use]
pub fn display_from_posix(timestamp_millis: i64) -> String {
    display_from_posix_custom(timestamp_millis, Precision::WHOLE)
}

/// Beats for `timestamp_millis` with exactly `precision` fractional digits.
///
/// The result is 3 characters long at precision 0 and `4 + precision`
/// otherwise.
#[must_use]
pub fn display_from_posix_custom(timestamp_millis: i64, precision: Precision) -> String {
    to_beats(timestamp_millis, precision).to_string()
}

/// Alias of [`display_from_posix_custom`].
#[must_use]
pub fn to_display_string(timestamp_millis: i64, precision: Precision) -> String {
    display_from_posix_custom(timestamp_millis, precision)
}

fn invalid(input: &str, reason: &str) -> BeatError {
    BeatError::InvalidBeatTime {
        input: input.to_string(),
        reason: reason.to_string(),
    }
}

fn parse_digits(input: &str, digits: &str) -> BeatResult<u64> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid(input, "expected decimal digits"));
    }
    digits
        .parse()
        .map_err(|_| invalid(input, "value out of range"))
}

impl FromStr for BeatTime {
    type Err = BeatError;

    /// Parse a rendered value such as `"065"`, `"@333"` or `"333.25"`.
    ///
    /// The integer part must have exactly three digits; the number of
    /// fractional digits sets the precision.
    fn from_str(s: &str) -> BeatResult<Self> {
        let body = s.strip_prefix('@').unwrap_or(s);
        let (whole, fraction) = match body.split_once('.') {
            Some((whole, fraction)) => (whole, Some(fraction)),
            None => (body, None),
        };

        if whole.len() != 3 {
            return Err(invalid(s, "expected exactly three integer digits"));
        }
        let whole = parse_digits(s, whole)?;

        let (fraction, precision) = match fraction {
            None => (0, Precision::WHOLE),
            Some(fraction) => {
                let digits = u32::try_from(fraction.len()).unwrap_or(u32::MAX);
                if digits > MAX_PRECISION {
                    return Err(invalid(s, "too many fractional digits"));
                }
                (parse_digits(s, fraction)?, Precision::new(digits)?)
            }
        };

        let scaled = whole * precision.scale() + fraction;
        Self::from_scaled(scaled, precision).ok_or_else(|| invalid(s, "beat out of range"))
    }
}

impl From<BeatTime> for String {
    fn from(value: BeatTime) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for BeatTime {
    type Error = BeatError;

    fn try_from(value: String) -> BeatResult<Self> {
        value.parse()
    }
}
