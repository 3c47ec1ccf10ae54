use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::ChartDatum;
use crate::error::{ChartError, ChartResult};

/// Linear mapping from `[0, domain_max]` to `[0, range_width]` pixels.
///
/// A zero domain (empty dataset or all-zero values) is accepted and maps
/// every value to 0 instead of dividing by zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueScale {
    domain_max: f64,
    range_width: f64,
}

impl ValueScale {
    pub fn new(domain_max: f64, range_width: f64) -> ChartResult<Self> {
        if !domain_max.is_finite() || domain_max < 0.0 {
            return Err(ChartError::InvalidData(
                "value scale domain max must be finite and >= 0".to_owned(),
            ));
        }
        if !range_width.is_finite() || range_width < 0.0 {
            return Err(ChartError::InvalidData(
                "value scale range width must be finite and >= 0".to_owned(),
            ));
        }

        Ok(Self {
            domain_max,
            range_width,
        })
    }

    /// Fits the domain to the largest value in `data`.
    pub fn from_data(data: &[ChartDatum], range_width: f64) -> ChartResult<Self> {
        let domain_max = data
            .iter()
            .map(|datum| OrderedFloat(datum.value))
            .max()
            .map_or(0.0, OrderedFloat::into_inner);
        Self::new(domain_max, range_width)
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (0.0, self.domain_max)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (0.0, self.range_width)
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.domain_max <= 0.0
    }

    #[must_use]
    pub fn map(self, value: f64) -> f64 {
        if self.is_degenerate() {
            return 0.0;
        }
        value / self.domain_max * self.range_width
    }

    #[must_use]
    pub fn invert(self, pixel: f64) -> f64 {
        if self.is_degenerate() || self.range_width <= 0.0 {
            return 0.0;
        }
        pixel / self.range_width * self.domain_max
    }
}
