//! Number formatting for chat output.
//!
//! Large readings get K/M/B suffixes; deltas render as signed percentages.

/// Format a value with a K/M/B suffix and two decimal places.
pub fn compact(value: f64) -> String {
    if value >= 1e9 {
        format!("{:.2}B", value / 1e9)
    } else if value >= 1e6 {
        format!("{:.2}M", value / 1e6)
    } else if value >= 1e3 {
        format!("{:.2}K", value / 1e3)
    } else {
        format!("{:.2}", value)
    }
}

/// Format a percentage with an explicit sign, e.g. `+20.00%`.
pub fn signed_percent(value: f64, decimals: usize) -> String {
    format!("{:+.1$}%", value, decimals)
}
