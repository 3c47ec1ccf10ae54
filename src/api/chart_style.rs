//! Fixed colors and offsets of the chart look.

/// Bar fill when a row has no color of its own.
pub const DEFAULT_BAR_COLOR: &str = "#2375E1";
/// Numeric annotations: counts, value labels, the total figure.
pub const VALUE_TEXT_COLOR: &str = "#1556BB";
/// Category labels and the total prefix.
pub const LABEL_TEXT_COLOR: &str = "#7F828A";
/// Placeholder fill standing in for numbers.
pub const SKELETON_VALUE_COLOR: &str = "#E5F8FF";
/// Placeholder fill standing in for words.
pub const SKELETON_TEXT_COLOR: &str = "#DDE0E6";

/// Bars start this far right of the plot origin.
pub const BAR_X_OFFSET: f64 = 2.0;
pub const BAR_CORNER_RADIUS: f64 = 3.0;
/// Gap between a bar end and its count; dropped for zero values.
pub const COUNT_GAP: f64 = 12.0;
/// Distance between the last row band and the total text.
pub const TOTAL_TEXT_OFFSET: f64 = 9.0;
pub const TOTAL_PLACEHOLDER_WIDTH: f64 = 120.0;
pub const TOTAL_PLACEHOLDER_HEIGHT_RATIO: f64 = 1.2;

pub const ROOT_CLASS: &str = "chart";
pub const CLICKABLE_ROOT_CLASS: &str = "clickable-bars";
pub const LOADING_ROOT_CLASS: &str = "loading";
pub const TOTAL_COUNT_SPAN_CLASS: &str = "total-count";

/// Horizontal resting-to-final position of a count for `bar_end`.
#[must_use]
pub fn count_x(bar_end: f64, value: f64) -> f64 {
    if value == 0.0 {
        bar_end
    } else {
        bar_end + COUNT_GAP
    }
}
