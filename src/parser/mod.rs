//! Section scanning module
//!
//! This module recognizes the numeric shape of a format section (placeholder
//! prefix, optional decimal point, fractional digit run) and the thousands
//! marker. It deliberately stops short of a full token grammar: everything
//! outside the numeric run is opaque literal text to the engine.

mod shape;
mod thousands;

pub use shape::parse_section_shape;
pub use thousands::{contains_marker, insert_group, strip_markers};
