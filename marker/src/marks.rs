//! Marks extraction from test titles.
//!
//! Exercise authors embed the weight of each test in its title, e.g.
//! `"Loads homepage - marks 2"` or `"Submits form - Marks 1.5"`.

use once_cell::sync::Lazy;
use regex::Regex;

static MARKS_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)marks\s+([0-9]*\.?[0-9]+)").expect("marks pattern is a valid regex")
});

/// Returns the marks embedded in `title`, or `0.0` when the title carries none.
///
/// Matches `marks`, case-insensitively, followed by whitespace and an integer or decimal
/// literal. Only the first occurrence counts.
pub fn extract_marks(title: &str) -> f64 {
    MARKS_PATTERN
        .captures(title)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .unwrap_or(0.0)
}
