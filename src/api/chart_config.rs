use serde::{Deserialize, Serialize};

use crate::core::{LayoutInput, Margins};
use crate::error::{ChartError, ChartResult};
use crate::interaction::ClickPolicy;

/// Per-render chart options.
///
/// Every field has a serde default so hosts can load partial JSON setups.
/// The click callback is not part of this type; it is registered on the
/// engine with `ChartEngine::set_on_chart_click`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(default)]
    pub show_labels: bool,
    #[serde(default)]
    pub show_counts: bool,
    #[serde(default = "default_show_total")]
    pub show_total: bool,
    #[serde(default)]
    pub show_counts_instead_of_labels: bool,
    #[serde(default)]
    pub clickable_bars: bool,
    #[serde(default)]
    pub loading: bool,
    /// `None` sizes bars to the band width.
    #[serde(default = "default_bar_thickness")]
    pub bar_thickness: Option<f64>,
    #[serde(default = "default_bar_gutter")]
    pub bar_gutter: f64,
    #[serde(default = "default_animation_duration_ms")]
    pub animation_duration_ms: f64,
    #[serde(default)]
    pub animation_step_delay_ms: f64,
    #[serde(default)]
    pub margins: Margins,
    #[serde(default = "default_font_size")]
    pub font_size: f64,
    #[serde(default = "default_font_family")]
    pub font_family: String,
    /// Inner and outer band padding as a fraction of one row step.
    #[serde(default)]
    pub band_padding: f64,
    #[serde(default = "default_total_prefix")]
    pub total_prefix: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            show_labels: false,
            show_counts: false,
            show_total: default_show_total(),
            show_counts_instead_of_labels: false,
            clickable_bars: false,
            loading: false,
            bar_thickness: default_bar_thickness(),
            bar_gutter: default_bar_gutter(),
            animation_duration_ms: default_animation_duration_ms(),
            animation_step_delay_ms: 0.0,
            margins: Margins::default(),
            font_size: default_font_size(),
            font_family: default_font_family(),
            band_padding: 0.0,
            total_prefix: default_total_prefix(),
        }
    }
}

impl ChartConfig {
    #[must_use]
    pub fn with_show_labels(mut self, show: bool) -> Self {
        self.show_labels = show;
        self
    }

    #[must_use]
    pub fn with_show_counts(mut self, show: bool) -> Self {
        self.show_counts = show;
        self
    }

    #[must_use]
    pub fn with_show_total(mut self, show: bool) -> Self {
        self.show_total = show;
        self
    }

    /// Labels show the row value instead of the row label.
    #[must_use]
    pub fn with_show_counts_instead_of_labels(mut self, show: bool) -> Self {
        self.show_counts_instead_of_labels = show;
        self
    }

    #[must_use]
    pub fn with_clickable_bars(mut self, clickable: bool) -> Self {
        self.clickable_bars = clickable;
        self
    }

    #[must_use]
    pub fn with_loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    #[must_use]
    pub fn with_bar_thickness(mut self, thickness: Option<f64>) -> Self {
        self.bar_thickness = thickness;
        self
    }

    #[must_use]
    pub fn with_bar_gutter(mut self, gutter: f64) -> Self {
        self.bar_gutter = gutter;
        self
    }

    #[must_use]
    pub fn with_animation_duration_ms(mut self, duration_ms: f64) -> Self {
        self.animation_duration_ms = duration_ms;
        self
    }

    #[must_use]
    pub fn with_animation_step_delay_ms(mut self, step_delay_ms: f64) -> Self {
        self.animation_step_delay_ms = step_delay_ms;
        self
    }

    #[must_use]
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    #[must_use]
    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    #[must_use]
    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = family.into();
        self
    }

    #[must_use]
    pub fn with_band_padding(mut self, padding: f64) -> Self {
        self.band_padding = padding;
        self
    }

    #[must_use]
    pub fn with_total_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.total_prefix = prefix.into();
        self
    }

    /// Parses a (possibly partial) JSON object; missing fields take defaults.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidConfig(format!("failed to parse chart config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidConfig(format!("failed to serialize chart config: {e}"))
        })
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.margins.validate()?;
        if let Some(thickness) = self.bar_thickness {
            ensure_non_negative("bar_thickness", thickness)?;
        }
        ensure_non_negative("bar_gutter", self.bar_gutter)?;
        ensure_non_negative("animation_duration_ms", self.animation_duration_ms)?;
        ensure_non_negative("animation_step_delay_ms", self.animation_step_delay_ms)?;
        if !self.font_size.is_finite() || self.font_size <= 0.0 {
            return Err(ChartError::InvalidConfig(
                "font_size must be finite and > 0".to_owned(),
            ));
        }
        if !self.band_padding.is_finite() || !(0.0..1.0).contains(&self.band_padding) {
            return Err(ChartError::InvalidConfig(
                "band_padding must be finite and in [0, 1)".to_owned(),
            ));
        }
        Ok(())
    }

    #[must_use]
    pub fn layout_input(&self) -> LayoutInput {
        LayoutInput {
            margins: self.margins,
            bar_thickness: self.bar_thickness,
            bar_gutter: self.bar_gutter,
            band_padding: self.band_padding,
        }
    }

    #[must_use]
    pub fn click_policy(&self) -> ClickPolicy {
        ClickPolicy {
            clickable_bars: self.clickable_bars,
            loading: self.loading,
        }
    }

    /// Duration of the total tween: it outlasts the last staggered row.
    #[must_use]
    pub fn total_duration_ms(&self, row_count: usize) -> f64 {
        self.animation_duration_ms + row_count as f64 * self.animation_step_delay_ms
    }
}

fn ensure_non_negative(field: &str, value: f64) -> ChartResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(ChartError::InvalidConfig(format!(
            "{field} must be finite and >= 0"
        )));
    }
    Ok(())
}

fn default_show_total() -> bool {
    true
}

fn default_bar_thickness() -> Option<f64> {
    Some(8.0)
}

fn default_bar_gutter() -> f64 {
    16.0
}

fn default_animation_duration_ms() -> f64 {
    300.0
}

fn default_font_size() -> f64 {
    14.0
}

fn default_font_family() -> String {
    "Roboto".to_owned()
}

fn default_total_prefix() -> String {
    "Total: ".to_owned()
}
