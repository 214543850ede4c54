use crate::types::THOUSANDS_GROUP;

/// Characters allowed in the three positions after the marker comma
fn is_marker_char(c: char) -> bool {
    matches!(c, '#' | '0' | ',')
}

/// True if `section` contains a thousands marker: a literal `,` followed by
/// exactly three placeholder characters from `{#, 0, ,}`.
pub fn contains_marker(section: &str) -> bool {
    let chars: Vec<char> = section.chars().collect();
    chars
        .windows(4)
        .any(|w| w[0] == ',' && w[1..].iter().all(|&c| is_marker_char(c)))
}

/// Strip every non-overlapping marker occurrence, scanning left to right.
pub fn strip_markers(section: &str) -> String {
    let chars: Vec<char> = section.chars().collect();
    let mut out = String::with_capacity(section.len());
    let mut i = 0;
    while i < chars.len() {
        if chars[i] == ','
            && i + 3 < chars.len()
            && chars[i + 1..i + 4].iter().all(|&c| is_marker_char(c))
        {
            i += 4;
        } else {
            out.push(chars[i]);
            i += 1;
        }
    }
    out
}

/// Insert the canonical `,##0` group before the first `.`, or append it when
/// the section has no decimal point. A section that already carries a marker
/// is returned unchanged, which makes repeated insertion idempotent.
pub fn insert_group(section: &str) -> String {
    if contains_marker(section) {
        return section.to_string();
    }
    match section.find('.') {
        Some(idx) => {
            let mut out = String::with_capacity(section.len() + THOUSANDS_GROUP.len());
            out.push_str(&section[..idx]);
            out.push_str(THOUSANDS_GROUP);
            out.push_str(&section[idx..]);
            out
        }
        None => format!("{section}{THOUSANDS_GROUP}"),
    }
}
