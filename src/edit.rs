//! Pattern mutators and readers
//!
//! Every operation here is a pure function over a whole pattern string: it
//! splits on `;`, transforms each section independently and rejoins. Section
//! text the scanner does not recognize passes through verbatim, so no input,
//! however malformed, makes these functions fail.

use crate::parser::{contains_marker, insert_group, parse_section_shape, strip_markers};
use crate::types::{SectionShape, THOUSANDS_PATTERN};

/// Representative decimal count for a whole pattern
///
/// Sections may carry different fractional runs; the maximum across all of
/// them is reported so a "decimal places" control stays stable even for
/// asymmetric patterns. Defaults to 0 when no section has a fractional run.
pub fn get_current_decimal_count_in_pattern(pattern: &str) -> usize {
    pattern
        .split(';')
        .map(|section| parse_section_shape(section).decimal_count())
        .max()
        .unwrap_or(0)
}

/// Change the decimal places of every section of `pattern`
///
/// With `delta` set, `change_by` is added to each section's current count
/// (the one-step increase/decrease actions); otherwise it is the absolute
/// target count. The resulting count is clamped at 0 and a run that loses
/// all fractional digits also loses its decimal point.
///
/// An empty section becomes a plain numeric pattern with the requested
/// decimals, e.g. `change_decimals("", 2, true)` is `"0.00"`.
pub fn change_decimals(pattern: &str, change_by: i32, delta: bool) -> String {
    pattern
        .split(';')
        .map(|section| change_section_decimals(section, change_by, delta))
        .collect::<Vec<_>>()
        .join(";")
}

fn change_section_decimals(section: &str, change_by: i32, delta: bool) -> String {
    if section.is_empty() {
        // An empty section stands for the generic display; editing its
        // decimals turns it into a plain numeric pattern.
        return synthesize_plain(clamp_count(i64::from(change_by)));
    }
    match parse_section_shape(section) {
        SectionShape::Opaque(text) => text,
        SectionShape::Numeric(shape) => {
            if !shape.has_decimal_point {
                // No existing run to adjust, so only the target matters and
                // a negative change is a no-op.
                shape.render(clamp_count(i64::from(change_by)))
            } else {
                let current = shape.decimal_count() as i64;
                let target = if delta {
                    current + i64::from(change_by)
                } else {
                    i64::from(change_by)
                };
                shape.render(clamp_count(target))
            }
        }
    }
}

fn clamp_count(n: i64) -> usize {
    n.max(0) as usize
}

fn synthesize_plain(count: usize) -> String {
    if count == 0 {
        "0".to_string()
    } else {
        format!("0.{}", "0".repeat(count))
    }
}

/// True when any section of `pattern` carries a thousands marker.
pub fn has_thousands_separator(pattern: &str) -> bool {
    pattern.split(';').any(contains_marker)
}

/// Insert the canonical `,##0` group into every section that lacks one
///
/// The group lands immediately before the first `.` of a section, or at its
/// end when there is no decimal point. Sections that already carry a marker
/// are left alone, so the operation is idempotent. An empty pattern becomes
/// the bare `#,##0`; empty sections inside a larger pattern stay empty.
pub fn add_thousand_separator(pattern: &str) -> String {
    if pattern.is_empty() {
        return THOUSANDS_PATTERN.to_string();
    }
    pattern
        .split(';')
        .map(|section| {
            if section.is_empty() {
                String::new()
            } else {
                insert_group(section)
            }
        })
        .collect::<Vec<_>>()
        .join(";")
}

/// Strip every thousands-marker occurrence from every section
///
/// Idempotent, and the left inverse of detection for patterns built from the
/// canonical group: after removal `has_thousands_separator` reports false.
pub fn remove_thousand_separator(pattern: &str) -> String {
    pattern
        .split(';')
        .map(strip_markers)
        .collect::<Vec<_>>()
        .join(";")
}
