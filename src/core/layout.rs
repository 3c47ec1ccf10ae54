use serde::{Deserialize, Serialize};

use crate::core::{BandScale, ChartDatum, Margins, ValueScale, Viewport};
use crate::error::{ChartError, ChartResult};

/// Layout knobs the scale engine needs from the chart configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutInput {
    pub margins: Margins,
    /// Fixed bar thickness; `None` uses the band width.
    pub bar_thickness: Option<f64>,
    pub bar_gutter: f64,
    pub band_padding: f64,
}

/// Scales and inner drawing area for one render pass.
///
/// Recomputed on every redraw and threaded by value into drawing and
/// animation, so nothing survives between passes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartLayout {
    pub viewport: Viewport,
    pub margins: Margins,
    pub inner_width: f64,
    pub inner_height: f64,
    pub value_scale: ValueScale,
    pub band_scale: BandScale,
    bar_thickness: f64,
}

impl ChartLayout {
    /// Computes the inner area and both scales.
    ///
    /// The inner height is clamped to `(bar_thickness + bar_gutter) * rows` so
    /// short datasets do not stretch over a tall container.
    pub fn compute(
        viewport: Viewport,
        data: &[ChartDatum],
        input: LayoutInput,
    ) -> ChartResult<Self> {
        viewport.validate()?;
        input.margins.validate()?;
        if let Some(thickness) = input.bar_thickness {
            if !thickness.is_finite() || thickness < 0.0 {
                return Err(ChartError::InvalidConfig(
                    "bar thickness must be finite and >= 0".to_owned(),
                ));
            }
        }
        if !input.bar_gutter.is_finite() || input.bar_gutter < 0.0 {
            return Err(ChartError::InvalidConfig(
                "bar gutter must be finite and >= 0".to_owned(),
            ));
        }

        let inner_width = (f64::from(viewport.width) - input.margins.horizontal()).max(0.0);
        let available_height = (f64::from(viewport.height) - input.margins.vertical()).max(0.0);
        let row_pitch = input.bar_thickness.unwrap_or(0.0) + input.bar_gutter;
        let inner_height = available_height.min(row_pitch * data.len() as f64);

        let value_scale = ValueScale::from_data(data, inner_width)?;
        let band_scale = BandScale::from_data(data, inner_height, input.band_padding)?;
        let bar_thickness = input
            .bar_thickness
            .unwrap_or_else(|| band_scale.bandwidth());

        Ok(Self {
            viewport,
            margins: input.margins,
            inner_width,
            inner_height,
            value_scale,
            band_scale,
            bar_thickness,
        })
    }

    /// Resolved bar thickness in pixels.
    #[must_use]
    pub fn bar_thickness(&self) -> f64 {
        self.bar_thickness
    }

    /// Top edge of the row band for `datum`.
    #[must_use]
    pub fn row_top(&self, datum: &ChartDatum) -> f64 {
        self.band_scale.band(&datum.label).unwrap_or(0.0)
    }

    /// Vertical center of the bar drawn for `datum`.
    #[must_use]
    pub fn row_center(&self, datum: &ChartDatum) -> f64 {
        self.row_top(datum) + self.bar_thickness * 0.5
    }
}
