use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::ChartDatum;
use crate::error::{ChartError, ChartResult};

/// Categorical scale assigning each distinct label a rounded pixel band.
///
/// Bands are laid out in first-seen label order. A repeated label keeps the
/// band of its first occurrence, so rows sharing a label overlap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BandScale {
    positions: IndexMap<String, usize>,
    start: f64,
    step: f64,
    bandwidth: f64,
    padding: f64,
}

impl BandScale {
    /// Builds the scale over `[range_start, range_end]`.
    ///
    /// `padding` is applied as both inner and outer padding (fraction of one
    /// step) and bands are centered in any leftover space.
    pub fn new<I, S>(labels: I, range_start: f64, range_end: f64, padding: f64) -> ChartResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if !range_start.is_finite() || !range_end.is_finite() {
            return Err(ChartError::InvalidData(
                "band scale range must be finite".to_owned(),
            ));
        }
        if !padding.is_finite() || !(0.0..1.0).contains(&padding) {
            return Err(ChartError::InvalidData(
                "band padding must be finite and in [0, 1)".to_owned(),
            ));
        }

        let mut positions: IndexMap<String, usize> = IndexMap::new();
        for label in labels {
            let next = positions.len();
            positions.entry(label.into()).or_insert(next);
        }

        let (low, high) = if range_end < range_start {
            (range_end, range_start)
        } else {
            (range_start, range_end)
        };
        let count = positions.len() as f64;
        let span = high - low;

        let step = (span / (count - padding + padding * 2.0).max(1.0)).floor();
        let start = low + (span - step * (count - padding)) * 0.5;

        Ok(Self {
            positions,
            start: round_half_up(start),
            step,
            bandwidth: round_half_up(step * (1.0 - padding)),
            padding,
        })
    }

    pub fn from_data(data: &[ChartDatum], inner_height: f64, padding: f64) -> ChartResult<Self> {
        Self::new(
            data.iter().map(|datum| datum.label.as_str()),
            0.0,
            inner_height,
            padding,
        )
    }

    /// Top edge of the band for `label`, or `None` for an unknown label.
    #[must_use]
    pub fn band(&self, label: &str) -> Option<f64> {
        self.positions
            .get(label)
            .map(|position| self.start + self.step * *position as f64)
    }

    /// Top edge of the band at `position` in domain order.
    #[must_use]
    pub fn band_at(&self, position: usize) -> Option<f64> {
        (position < self.positions.len()).then(|| self.start + self.step * position as f64)
    }

    #[must_use]
    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    #[must_use]
    pub fn padding(&self) -> f64 {
        self.padding
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn domain(&self) -> impl Iterator<Item = &str> {
        self.positions.keys().map(String::as_str)
    }
}

// Half-way cases round toward +inf, matching browser rounding of band offsets.
fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

#[cfg(test)]
mod tests {
    use super::BandScale;

    #[test]
    fn leftover_space_is_split_around_bands() {
        let scale = BandScale::new(["a", "b", "c"], 0.0, 100.0, 0.0).expect("scale");
        assert_eq!(scale.step(), 33.0);
        assert_eq!(scale.bandwidth(), 33.0);
        assert_eq!(scale.band("a"), Some(1.0));
        assert_eq!(scale.band("c"), Some(67.0));
    }

    #[test]
    fn empty_domain_has_no_bands() {
        let scale = BandScale::new(Vec::<String>::new(), 0.0, 50.0, 0.0).expect("scale");
        assert!(scale.is_empty());
        assert_eq!(scale.band_at(0), None);
    }
}
