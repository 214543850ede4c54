//! Type definitions for the pattern engine
//!
//! This module defines the shape types produced by the section scanner and
//! the sample-value type consumed by pattern inference.

use chrono::NaiveDateTime;

/// Canonical thousands group inserted between the integer part and the
/// decimal point: `,##0`.
pub const THOUSANDS_GROUP: &str = ",##0";

/// Pattern produced for an empty input when the thousands separator is
/// switched on.
pub const THOUSANDS_PATTERN: &str = "#,##0";

/// Bare digit-if-needed placeholder used as the fallback prefix during
/// pattern inference.
pub const DEFAULT_PREFIX: &str = "#";

/// Format code meaning "use the generic display" for a value.
pub const GENERAL: &str = "General";

/// Shape of a single `;`-separated section of a format pattern
///
/// A section either contains a numeric placeholder run, captured as a
/// [`NumericShape`], or it does not, in which case its text is carried
/// verbatim and every mutator passes it through unchanged.
#[derive(Debug, Clone, PartialEq)]
pub enum SectionShape {
    /// Section with a recognized numeric run
    Numeric(NumericShape),
    /// Section with no numeric run; the original text is preserved
    Opaque(String),
}

/// The captured numeric run of one section
///
/// Mirrors the capture groups of the pattern grammar: literal text, a greedy
/// placeholder prefix (`0`-`9`, `#`, `,`), an optional decimal point, a
/// greedy fractional digit run, and the remaining literal text. Quoted
/// currency symbols, color tags and date tokens land in `leading` or
/// `trailing` and are never altered.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NumericShape {
    /// Literal text before the placeholder run
    pub leading: String,
    /// Placeholder run: digits, `#` and `,`
    pub prefix: String,
    /// Whether a literal `.` follows the prefix
    pub has_decimal_point: bool,
    /// Fractional digit run after the decimal point
    pub suffix: String,
    /// Literal text after the numeric run
    pub trailing: String,
}

impl NumericShape {
    /// Decimal count of this section: the length of the fractional run.
    /// A section without a decimal point has count 0.
    pub fn decimal_count(&self) -> usize {
        self.suffix.len()
    }

    /// Rebuild the section with the fractional run replaced by `new_count`
    /// zero placeholders. A count of 0 drops the decimal point entirely, so
    /// a numeric run never ends in a bare `.`.
    pub fn render(&self, new_count: usize) -> String {
        let mut out = String::with_capacity(
            self.leading.len() + self.prefix.len() + 1 + new_count + self.trailing.len(),
        );
        out.push_str(&self.leading);
        out.push_str(&self.prefix);
        if new_count > 0 {
            out.push('.');
            out.push_str(&"0".repeat(new_count));
        }
        out.push_str(&self.trailing);
        out
    }
}

impl SectionShape {
    /// Decimal count of the section; opaque sections contribute 0.
    pub fn decimal_count(&self) -> usize {
        match self {
            SectionShape::Numeric(shape) => shape.decimal_count(),
            SectionShape::Opaque(_) => 0,
        }
    }
}

/// A literal cell value used to infer a default pattern on entry
#[derive(Debug, Clone, PartialEq)]
pub enum SampleValue {
    /// A numeric value
    Number(f64),
    /// Raw text as the user typed it, e.g. `"1,234.56"`
    Text(String),
    /// A boolean value
    Bool(bool),
    /// A date-time value
    Date(NaiveDateTime),
    /// No value at all
    Blank,
}

impl SampleValue {
    /// Whether the value is exactly the number zero or the string `"0"`.
    /// Zero keeps the generic display instead of getting a numeric pattern.
    pub fn is_zero(&self) -> bool {
        match self {
            SampleValue::Number(n) => *n == 0.0,
            SampleValue::Text(s) => s == "0",
            _ => false,
        }
    }

    /// The textual form inspected by the inference rules.
    pub fn to_literal(&self) -> String {
        match self {
            SampleValue::Number(n) => n.to_string(),
            SampleValue::Text(s) => s.clone(),
            SampleValue::Bool(b) => b.to_string(),
            SampleValue::Date(d) => d.to_string(),
            SampleValue::Blank => String::new(),
        }
    }

    /// Numeric magnitude of the value, when it has one.
    pub fn magnitude(&self) -> Option<f64> {
        match self {
            SampleValue::Number(n) => Some(n.abs()),
            SampleValue::Text(s) => s.trim().parse::<f64>().ok().map(f64::abs),
            _ => None,
        }
    }
}

impl From<f64> for SampleValue {
    fn from(value: f64) -> Self {
        SampleValue::Number(value)
    }
}

impl From<i64> for SampleValue {
    fn from(value: i64) -> Self {
        SampleValue::Number(value as f64)
    }
}

impl From<&str> for SampleValue {
    fn from(value: &str) -> Self {
        SampleValue::Text(value.to_string())
    }
}

impl From<String> for SampleValue {
    fn from(value: String) -> Self {
        SampleValue::Text(value)
    }
}

impl From<bool> for SampleValue {
    fn from(value: bool) -> Self {
        SampleValue::Bool(value)
    }
}

impl From<NaiveDateTime> for SampleValue {
    fn from(value: NaiveDateTime) -> Self {
        SampleValue::Date(value)
    }
}
