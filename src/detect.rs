//! Pattern inference from a sample value
//!
//! Given the literal a user just typed, these routines pick a starting
//! pattern for the cell: thousands grouping when the literal was typed with
//! commas, as many decimals as the literal carries, and the generic display
//! for zero.

use crate::edit::change_decimals;
use crate::types::{DEFAULT_PREFIX, GENERAL, SampleValue, THOUSANDS_PATTERN};

/// Count the decimal places a literal value implies
///
/// Everything except digits, `.` and `,` is discarded first, so currency
/// symbols and spaces do not disturb the count. The count is the number of
/// characters after the last `.`; a literal without one counts 0.
pub fn get_decimal_places(value: &str) -> usize {
    let cleaned: String = value
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == ',')
        .collect();
    match cleaned.rfind('.') {
        Some(idx) => cleaned.len() - idx - 1,
        None => 0,
    }
}

/// Infer a default pattern for a just-typed value
///
/// Zero (the number, or exactly the string `"0"`) keeps the generic display
/// and returns `"General"`. Any other value is stringified; a comma in the
/// literal selects the `#,##0` prefix, otherwise `default_pattern` is used.
/// A bare `#` prefix is promoted to `0` for magnitudes strictly between 0
/// and 1 so `0.5` renders with its leading zero. Finally the literal's
/// decimal places are appended via [`change_decimals`].
pub fn detect_decimal_pattern(value: impl Into<SampleValue>, default_pattern: &str) -> String {
    let value = value.into();
    if value.is_zero() {
        return GENERAL.to_string();
    }

    let literal = value.to_literal();
    let decimals = get_decimal_places(&literal);

    let mut prefix = if literal.contains(',') {
        THOUSANDS_PATTERN
    } else {
        default_pattern
    };
    if prefix == DEFAULT_PREFIX {
        if let Some(magnitude) = value.magnitude() {
            if magnitude > 0.0 && magnitude < 1.0 {
                prefix = "0";
            }
        }
    }

    if decimals > 0 {
        let change_by = i32::try_from(decimals).unwrap_or(i32::MAX);
        change_decimals(prefix, change_by, true)
    } else {
        prefix.to_string()
    }
}
