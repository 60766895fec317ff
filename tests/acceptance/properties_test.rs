//! Conversion properties over generated timestamps and precisions.
//!
//! # Acceptance Criteria
//!
//! - Whole beats are always in `[0, 1000)`
//! - Display width is 3, or `4 + precision` with a decimal point at index 3
//! - Display strings parse back to the same value
//! - Values repeat with a period of exactly one day
//! - Adding one beat advances the whole-beat value by one (mod 1000)
//! - A finer precision truncates to the coarser one

use super::common::{all_precisions, precision, timestamp, EDGE_TIMESTAMPS};
use beat_common::MILLIS_PER_DAY;
use beat_time::{
    display_from_posix_custom, from_posix, to_beats, BeatTime, Precision, BEAT, BEATS_PER_DAY,
};
use proptest::prelude::*;

fn check_range(t: i64, p: Precision) {
    let value = to_beats(t, p);
    assert!(value.scaled() < p.modulus(), "t = {t}, p = {p}");
    assert!(value.whole_beats() < BEATS_PER_DAY, "t = {t}, p = {p}");
}

fn check_width(t: i64, p: Precision) {
    let text = display_from_posix_custom(t, p);
    let expected = if p.digits() == 0 {
        3
    } else {
        4 + p.digits() as usize
    };
    assert_eq!(text.len(), expected, "t = {t}, p = {p}: {text:?}");
    assert_eq!(text.len(), p.width());
    if !p.is_whole() {
        assert_eq!(text.as_bytes()[3], b'.', "{text:?}");
    }
    assert!(text.bytes().all(|b| b.is_ascii_digit() || b == b'.'));
}

fn check_parse_back(t: i64, p: Precision) {
    let parsed: BeatTime = display_from_posix_custom(t, p).parse().unwrap();
    assert_eq!(parsed, to_beats(t, p), "t = {t}, p = {p}");
}

fn check_truncation(t: i64) {
    let mut coarse = to_beats(t, Precision::WHOLE);
    for p in all_precisions().skip(1) {
        let fine = to_beats(t, p);
        assert_eq!(fine.scaled() / 10, coarse.scaled(), "t = {t}, p = {p}");
        coarse = fine;
    }
}

#[test]
fn test_edge_timestamps() {
    for t in EDGE_TIMESTAMPS {
        assert!(from_posix(t) < BEATS_PER_DAY, "t = {t}");
        for p in all_precisions() {
            check_range(t, p);
            check_width(t, p);
            check_parse_back(t, p);
        }
        check_truncation(t);
        if let Some(next_day) = t.checked_add(MILLIS_PER_DAY) {
            assert_eq!(to_beats(t, Precision::MAX), to_beats(next_day, Precision::MAX));
        }
        if let Some(later) = t.checked_add(BEAT) {
            assert_eq!(from_posix(later), (from_posix(t) + 1) % BEATS_PER_DAY);
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 512, .. ProptestConfig::default() })]

    #[test]
    fn whole_beats_in_range(t in any::<i64>()) {
        prop_assert!(from_posix(t) < BEATS_PER_DAY);
    }

    #[test]
    fn scaled_values_in_range(t in timestamp(), p in precision()) {
        check_range(t, p);
    }

    #[test]
    fn display_has_fixed_width(t in timestamp(), p in precision()) {
        check_width(t, p);
    }

    #[test]
    fn display_parses_back(t in timestamp(), p in precision()) {
        check_parse_back(t, p);
    }

    #[test]
    fn float_form_matches_display(t in timestamp()) {
        let value = to_beats(t, Precision::CENTIBEATS);
        let parsed: f64 = value.to_string().parse().unwrap();
        prop_assert!((parsed - value.as_f64()).abs() < 1e-9);
    }

    #[test]
    fn conversion_is_idempotent(t in timestamp(), p in precision()) {
        prop_assert_eq!(to_beats(t, p), to_beats(t, p));
        prop_assert_eq!(display_from_posix_custom(t, p), display_from_posix_custom(t, p));
    }

    #[test]
    fn repeats_after_one_day(
        t in (i64::MIN..=i64::MAX - MILLIS_PER_DAY),
        p in precision(),
    ) {
        prop_assert_eq!(to_beats(t, p), to_beats(t + MILLIS_PER_DAY, p));
    }

    #[test]
    fn one_beat_advances_by_one(t in (i64::MIN..=i64::MAX - BEAT)) {
        prop_assert_eq!(from_posix(t + BEAT), (from_posix(t) + 1) % BEATS_PER_DAY);
    }

    #[test]
    fn finer_precision_truncates_to_coarser(t in timestamp()) {
        check_truncation(t);
    }
}
