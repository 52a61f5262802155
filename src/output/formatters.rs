//! Formatting utilities for terminal output

use crate::core::Number;

/// Render a number zero-padded to `width` digits
///
/// # Examples
/// ```
/// use primel_solver::output::formatters::format_number;
///
/// assert_eq!(format_number(10007, 5), "10007");
/// assert_eq!(format_number(7, 3), "007");
/// ```
#[must_use]
pub fn format_number(number: Number, width: usize) -> String {
    format!("{number:0width$}")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let ratio = if max > 0.0 { (value / max).clamp(0.0, 1.0) } else { 0.0 };
    // Cast is safe: ratio is clamped to [0, 1]
    let filled = ((ratio * width as f64).round() as usize).min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bits of information gained going from `before` to `after` candidates
#[must_use]
pub fn information_bits(before: usize, after: usize) -> f64 {
    if before == 0 || after == 0 {
        return 0.0;
    }
    (before as f64 / after as f64).log2()
}

/// Plural suffix for a count
#[must_use]
pub const fn plural(count: usize) -> &'static str {
    if count == 1 { "" } else { "es" }
}
