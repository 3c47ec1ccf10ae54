use serde::{Deserialize, Serialize};

/// Literal shown by a masked tween instead of a number.
pub const PLACEHOLDER_TEXT: &str = "xx";

/// Numeric text tween rounded to whole numbers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NumberTween {
    pub from: f64,
    pub to: f64,
    /// When set, every sample reads [`PLACEHOLDER_TEXT`].
    pub masked: bool,
}

impl NumberTween {
    #[must_use]
    pub fn new(from: f64, to: f64) -> Self {
        Self {
            from,
            to,
            masked: false,
        }
    }

    #[must_use]
    pub fn masked(mut self, masked: bool) -> Self {
        self.masked = masked;
        self
    }

    #[must_use]
    pub fn value_at(self, progress: f64) -> f64 {
        self.from + (self.to - self.from) * progress
    }

    /// Display text at eased `progress`.
    #[must_use]
    pub fn text_at(self, progress: f64) -> String {
        if self.masked {
            return PLACEHOLDER_TEXT.to_owned();
        }
        format_whole(self.value_at(progress))
    }
}

/// Formats a value rounded to the nearest integer, halves rounding up.
#[must_use]
pub fn format_whole(value: f64) -> String {
    let rounded = (value + 0.5).floor();
    if rounded == 0.0 {
        return "0".to_owned();
    }
    format!("{rounded}")
}
