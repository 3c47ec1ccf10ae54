use serde::{Deserialize, Serialize};

use crate::animation::Easing;
use crate::error::{ChartError, ChartResult};

/// Timing of one scheduled transition on the host clock (milliseconds).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    pub start_ms: f64,
    pub delay_ms: f64,
    pub duration_ms: f64,
    pub easing: Easing,
}

impl Transition {
    pub fn new(start_ms: f64, delay_ms: f64, duration_ms: f64) -> ChartResult<Self> {
        if !start_ms.is_finite() {
            return Err(ChartError::InvalidData(
                "transition start must be finite".to_owned(),
            ));
        }
        if !delay_ms.is_finite() || delay_ms < 0.0 {
            return Err(ChartError::InvalidData(
                "transition delay must be finite and >= 0".to_owned(),
            ));
        }
        if !duration_ms.is_finite() || duration_ms < 0.0 {
            return Err(ChartError::InvalidData(
                "transition duration must be finite and >= 0".to_owned(),
            ));
        }

        Ok(Self {
            start_ms,
            delay_ms,
            duration_ms,
            easing: Easing::default(),
        })
    }

    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    #[must_use]
    pub fn begins_at(self) -> f64 {
        self.start_ms + self.delay_ms
    }

    #[must_use]
    pub fn ends_at(self) -> f64 {
        self.begins_at() + self.duration_ms
    }

    #[must_use]
    pub fn has_started(self, now_ms: f64) -> bool {
        now_ms >= self.begins_at()
    }

    #[must_use]
    pub fn is_finished(self, now_ms: f64) -> bool {
        now_ms >= self.ends_at()
    }

    /// Linear progress in `[0, 1]`; a zero-length transition jumps to 1 once
    /// its delay has elapsed.
    #[must_use]
    pub fn raw_progress(self, now_ms: f64) -> f64 {
        if !self.has_started(now_ms) {
            return 0.0;
        }
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        ((now_ms - self.begins_at()) / self.duration_ms).clamp(0.0, 1.0)
    }

    #[must_use]
    pub fn progress(self, now_ms: f64) -> f64 {
        self.easing.apply(self.raw_progress(now_ms))
    }
}
