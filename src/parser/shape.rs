use winnow::combinator::opt;
use winnow::token::{rest, take_till, take_while};
use winnow::{ModalResult, Parser};

use crate::types::{NumericShape, SectionShape};

/// Characters the placeholder prefix is built from
fn is_placeholder(c: char) -> bool {
    matches!(c, '0'..='9' | '#' | ',')
}

fn numeric_shape(input: &mut &str) -> ModalResult<NumericShape> {
    let leading = take_till(0.., is_placeholder).parse_next(input)?;
    let prefix = take_while(1.., is_placeholder).parse_next(input)?;
    let decimal = opt('.').parse_next(input)?;
    let suffix = if decimal.is_some() {
        take_while(0.., |c: char| c.is_ascii_digit()).parse_next(input)?
    } else {
        ""
    };
    let trailing = rest.parse_next(input)?;

    Ok(NumericShape {
        leading: leading.to_string(),
        prefix: prefix.to_string(),
        has_decimal_point: decimal.is_some(),
        suffix: suffix.to_string(),
        trailing: trailing.to_string(),
    })
}

/// Scan a single `;`-separated section for its numeric run
///
/// The run is matched at most once, greedily: the first placeholder
/// character starts the prefix, an optional literal `.` follows, then a
/// digit run forms the fractional part. Everything before and after is
/// preserved verbatim. A section with no placeholder run at all comes back
/// as [`SectionShape::Opaque`]; this function never fails.
pub fn parse_section_shape(section: &str) -> SectionShape {
    let mut input = section;
    match numeric_shape.parse_next(&mut input) {
        Ok(shape) => SectionShape::Numeric(shape),
        Err(_) => SectionShape::Opaque(section.to_string()),
    }
}
