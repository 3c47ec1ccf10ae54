use serde::{Deserialize, Serialize};

/// Easing curve applied to normalized transition time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Easing {
    Linear,
    /// Cubic ease-in-out, the default for every chart transition.
    #[default]
    CubicInOut,
}

impl Easing {
    /// Maps `t` in `[0, 1]` to eased progress; inputs are clamped.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::CubicInOut => {
                let doubled = t * 2.0;
                if doubled <= 1.0 {
                    doubled * doubled * doubled / 2.0
                } else {
                    let shifted = doubled - 2.0;
                    (shifted * shifted * shifted + 2.0) / 2.0
                }
            }
        }
    }
}
