use crate::parser::*;
use crate::types::*;

#[test]
fn test_simple_shape() {
    let shape = parse_section_shape("0.00");
    assert_eq!(
        shape,
        SectionShape::Numeric(NumericShape {
            leading: String::new(),
            prefix: "0".to_string(),
            has_decimal_point: true,
            suffix: "00".to_string(),
            trailing: String::new(),
        })
    );
    assert_eq!(shape.decimal_count(), 2);
}

#[test]
fn test_grouped_shape() {
    let shape = parse_section_shape("#,##0.00");
    match shape {
        SectionShape::Numeric(ref s) => {
            assert_eq!(s.prefix, "#,##0");
            assert!(s.has_decimal_point);
            assert_eq!(s.suffix, "00");
        }
        SectionShape::Opaque(_) => panic!("expected a numeric shape"),
    }
}

#[test]
fn test_surrounding_literals_preserved() {
    let shape = parse_section_shape("[Red]-#,##0.00\" USD\"");
    match shape {
        SectionShape::Numeric(ref s) => {
            assert_eq!(s.leading, "[Red]-");
            assert_eq!(s.prefix, "#,##0");
            assert_eq!(s.suffix, "00");
            assert_eq!(s.trailing, "\" USD\"");
        }
        SectionShape::Opaque(_) => panic!("expected a numeric shape"),
    }
}

#[test]
fn test_no_decimal_point() {
    let shape = parse_section_shape("#,##0");
    match shape {
        SectionShape::Numeric(ref s) => {
            assert!(!s.has_decimal_point);
            assert_eq!(s.decimal_count(), 0);
        }
        SectionShape::Opaque(_) => panic!("expected a numeric shape"),
    }
}

#[test]
fn test_opaque_section() {
    assert_eq!(
        parse_section_shape("@"),
        SectionShape::Opaque("@".to_string())
    );
    assert_eq!(
        parse_section_shape(""),
        SectionShape::Opaque(String::new())
    );
}

#[test]
fn test_shape_matched_at_most_once() {
    // The second numeric run stays in the trailing text untouched.
    let shape = parse_section_shape("0.00 \"to\" 0.0");
    match shape {
        SectionShape::Numeric(ref s) => {
            assert_eq!(s.prefix, "0");
            assert_eq!(s.suffix, "00");
            assert_eq!(s.trailing, " \"to\" 0.0");
        }
        SectionShape::Opaque(_) => panic!("expected a numeric shape"),
    }
}

#[test]
fn test_render_drops_decimal_point_at_zero() {
    let shape = NumericShape {
        leading: "(".to_string(),
        prefix: "0".to_string(),
        has_decimal_point: true,
        suffix: "00".to_string(),
        trailing: ")".to_string(),
    };
    assert_eq!(shape.render(3), "(0.000)");
    assert_eq!(shape.render(0), "(0)");
}

#[test]
fn test_marker_detection() {
    assert!(contains_marker("#,##0"));
    assert!(contains_marker("0,00,"));
    assert!(!contains_marker("#.00"));
    assert!(!contains_marker("mmm d, yyyy"));
    assert!(!contains_marker(",##"));
}

#[test]
fn test_marker_stripping() {
    assert_eq!(strip_markers("#,##0.00"), "#.00");
    assert_eq!(strip_markers("#,##0,##0"), "#");
    assert_eq!(strip_markers("0.00"), "0.00");
}

#[test]
fn test_group_insertion() {
    assert_eq!(insert_group("#.00"), "#,##0.00");
    assert_eq!(insert_group("0"), "0,##0");
    // Already carrying a marker: unchanged.
    assert_eq!(insert_group("#,##0.00"), "#,##0.00");
}
