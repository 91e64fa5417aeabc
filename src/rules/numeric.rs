//! Numeric range checks for sampling parameters.

use std::borrow::Cow;
use std::num::IntErrorKind;
use std::ops::RangeInclusive;

use super::Finding;
use crate::envfile::EnvMap;

/// Accepted temperature values.
pub const TEMPERATURE_RANGE: RangeInclusive<f64> = 0.0..=2.0;

/// Accepted max-token values.
pub const MAX_TOKENS_RANGE: RangeInclusive<i64> = 1..=1_000_000;

/// Report temperature and max-token values that fail to parse or fall
/// outside their range.
///
/// All temperature issues come before all token issues; within each group
/// the map's iteration order is kept.
#[must_use]
pub fn validate_numeric_ranges(env: &EnvMap) -> Vec<Finding> {
    let temperatures = env
        .iter()
        .filter(|(key, _)| key.contains("TEMPERATURE"))
        .filter_map(|(key, raw)| check_temperature(key, raw));

    let tokens = env
        .iter()
        .filter(|(key, _)| key.contains("MAX_TOKENS"))
        .filter_map(|(key, raw)| check_max_tokens(key, raw));

    temperatures.chain(tokens).collect()
}

fn check_temperature(key: &str, raw: &str) -> Option<Finding> {
    match strip_digit_separators(raw).parse::<f64>() {
        // NaN fails both comparisons, same as an in-range value
        Ok(temp) if temp < *TEMPERATURE_RANGE.start() || temp > *TEMPERATURE_RANGE.end() => {
            Some(Finding::issue(
                key,
                format!("Temperature {} out of range (0-2)", float_repr(temp)),
            ))
        }
        Ok(_) => None,
        Err(_) => Some(Finding::issue(
            key,
            format!("Invalid temperature value: {raw}"),
        )),
    }
}

fn check_max_tokens(key: &str, raw: &str) -> Option<Finding> {
    let digits = strip_digit_separators(raw);
    match digits.parse::<i64>() {
        Ok(tokens) if !MAX_TOKENS_RANGE.contains(&tokens) => Some(unreasonable_tokens(key, tokens)),
        Ok(_) => None,
        // Still an integer, just wider than i64
        Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
            Some(unreasonable_tokens(key, canonical_integer(&digits)))
        }
        Err(_) => Some(Finding::issue(key, format!("Invalid token value: {raw}"))),
    }
}

fn unreasonable_tokens(key: &str, tokens: impl std::fmt::Display) -> Finding {
    Finding::issue(key, format!("Max tokens {tokens} seems unreasonable"))
}

/// Remove `_` digit separators (`1_000`). A separator is only accepted
/// singly and between two digits; otherwise the value is returned as is
/// and fails to parse.
fn strip_digit_separators(raw: &str) -> Cow<'_, str> {
    if !raw.contains('_') {
        return Cow::Borrowed(raw);
    }

    let bytes = raw.as_bytes();
    let well_placed = bytes
        .iter()
        .enumerate()
        .filter(|(_, b)| **b == b'_')
        .all(|(i, _)| {
            i > 0
                && bytes[i - 1].is_ascii_digit()
                && bytes.get(i + 1).is_some_and(u8::is_ascii_digit)
        });

    if well_placed {
        Cow::Owned(raw.replace('_', ""))
    } else {
        Cow::Borrowed(raw)
    }
}

/// Shortest round-trip form with a signed, two-digit exponent (`1e+16`,
/// `1e-05`). Exponent form kicks in below 1e-4 and from 1e16 up.
fn float_repr(value: f64) -> String {
    let debug = format!("{value:?}");
    match debug.split_once('e') {
        Some((mantissa, exp)) => {
            let (sign, digits) = exp.strip_prefix('-').map_or(("+", exp), |d| ("-", d));
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => debug,
    }
}

/// Decimal integer text without a `+` sign or leading zeros.
fn canonical_integer(digits: &str) -> String {
    let (sign, magnitude) = match digits.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", digits.strip_prefix('+').unwrap_or(digits)),
    };

    let magnitude = magnitude.trim_start_matches('0');
    if magnitude.is_empty() {
        "0".to_string()
    } else {
        format!("{sign}{magnitude}")
    }
}
