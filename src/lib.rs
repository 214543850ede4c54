pub mod detect;
pub mod edit;
pub mod parser;
pub mod presets;
pub mod types;

// Re-export the main API
pub use detect::{detect_decimal_pattern, get_decimal_places};
pub use edit::{
    add_thousand_separator, change_decimals, get_current_decimal_count_in_pattern,
    has_thousands_separator, remove_thousand_separator,
};
pub use types::*;

#[cfg(test)]
mod tests;
