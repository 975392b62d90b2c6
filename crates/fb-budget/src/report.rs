//! Console formatting.

use fb_core::Real;

/// `Final output force: <value> N`, with the value in Rust's round-trip float
/// form (`2.0`, `2.5`, `1e20`).
pub fn output_line(force: Real) -> String {
    format!("Final output force: {force:?} N")
}
