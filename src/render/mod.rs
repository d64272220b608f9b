//! HTML fragments for the page.

pub mod catalog;
pub mod place;

pub use catalog::{amenity_items, location_items};
pub use place::render_place;

use serde_json::Number;

/// `"<count> <word>"`, with an `s` suffix unless `count` is exactly 1.
pub fn pluralize(count: &Number, word: &str) -> String {
    let count_text = format_number(count);
    if count.as_f64() == Some(1.0) {
        format!("{count_text} {word}")
    } else {
        format!("{count_text} {word}s")
    }
}

/// Integral values print without a decimal point.
pub fn format_number(n: &Number) -> String {
    if let Some(u) = n.as_u64() {
        u.to_string()
    } else if let Some(i) = n.as_i64() {
        i.to_string()
    } else {
        // f64's Display drops a zero fraction: 2.0 prints as "2".
        n.as_f64().map(|f| f.to_string()).unwrap_or_else(|| n.to_string())
    }
}

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
