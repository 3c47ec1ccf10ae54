use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{ChartError, ChartResult};

/// Axis-aligned rectangle in group-local pixel space.
///
/// `fill` is kept verbatim; hosts may pass any CSS color string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RectPrimitive {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub corner_radius: f64,
    pub fill: String,
}

impl RectPrimitive {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64, fill: impl Into<String>) -> Self {
        Self {
            x,
            y,
            width,
            height,
            corner_radius: 0.0,
            fill: fill.into(),
        }
    }

    #[must_use]
    pub fn with_corner_radius(mut self, radius: f64) -> Self {
        self.corner_radius = radius;
        self
    }

    #[must_use]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x <= self.x + self.width && y >= self.y && y <= self.y + self.height
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(ChartError::InvalidData(
                "rect coordinates must be finite".to_owned(),
            ));
        }
        if !self.width.is_finite() || self.width < 0.0 || !self.height.is_finite() || self.height < 0.0
        {
            return Err(ChartError::InvalidData(
                "rect size must be finite and >= 0".to_owned(),
            ));
        }
        if !self.corner_radius.is_finite() || self.corner_radius < 0.0 {
            return Err(ChartError::InvalidData(
                "rect corner radius must be finite and >= 0".to_owned(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

impl TextAnchor {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Middle => "middle",
            Self::End => "end",
        }
    }
}

/// Vertical alignment of text relative to `TextPrimitive::y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextBaseline {
    Alphabetic,
    Middle,
    Top,
}

impl TextBaseline {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Alphabetic => "alphabetic",
            Self::Middle => "middle",
            Self::Top => "top",
        }
    }
}

/// Inline run appended after the main text, drawn in its own color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextSpan {
    pub class: String,
    pub text: String,
    pub fill: String,
}

/// Text node in group-local pixel space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextPrimitive {
    pub text: String,
    pub spans: SmallVec<[TextSpan; 1]>,
    pub x: f64,
    pub y: f64,
    pub font_family: String,
    pub font_size_px: f64,
    pub fill: String,
    pub anchor: TextAnchor,
    pub baseline: TextBaseline,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_family: impl Into<String>,
        font_size_px: f64,
        fill: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            spans: SmallVec::new(),
            x,
            y,
            font_family: font_family.into(),
            font_size_px,
            fill: fill.into(),
            anchor: TextAnchor::Start,
            baseline: TextBaseline::Middle,
        }
    }

    #[must_use]
    pub fn with_baseline(mut self, baseline: TextBaseline) -> Self {
        self.baseline = baseline;
        self
    }

    #[must_use]
    pub fn with_span(mut self, span: TextSpan) -> Self {
        self.spans.push(span);
        self
    }

    /// Text as displayed, spans included.
    #[must_use]
    pub fn display_text(&self) -> String {
        let mut out = self.text.clone();
        for span in &self.spans {
            out.push_str(&span.text);
        }
        out
    }

    /// Rough pixel bounds `(left, top, width, height)` without font metrics.
    #[must_use]
    pub fn approximate_bounds(&self) -> (f64, f64, f64, f64) {
        let width = self.display_text().chars().count() as f64 * self.font_size_px * 0.6;
        let height = self.font_size_px;
        let left = match self.anchor {
            TextAnchor::Start => self.x,
            TextAnchor::Middle => self.x - width * 0.5,
            TextAnchor::End => self.x - width,
        };
        let top = match self.baseline {
            TextBaseline::Top => self.y,
            TextBaseline::Middle => self.y - height * 0.5,
            TextBaseline::Alphabetic => self.y - height * 0.8,
        };
        (left, top, width, height)
    }

    #[must_use]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        let (left, top, width, height) = self.approximate_bounds();
        x >= left && x <= left + width && y >= top && y <= top + height
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(ChartError::InvalidData(
                "text coordinates must be finite".to_owned(),
            ));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        Ok(())
    }
}
