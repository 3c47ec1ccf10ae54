use serde::{Deserialize, Serialize};

/// Scene layers in paint order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartLayerKind {
    Bars,
    Counts,
    Labels,
    Total,
}

impl ChartLayerKind {
    /// Bars paint first so annotations stay on top of them.
    pub const CANONICAL_ORDER: [Self; 4] = [Self::Bars, Self::Counts, Self::Labels, Self::Total];

    #[must_use]
    pub const fn class_name(self) -> &'static str {
        match self {
            Self::Bars => "bars",
            Self::Counts => "counts",
            Self::Labels => "labels",
            Self::Total => "total-group",
        }
    }

    /// Whether the layer is drawn inside the left margin offset.
    ///
    /// Labels and the total sit at the left edge of the surface; bars and
    /// counts start after the left margin.
    #[must_use]
    pub const fn uses_left_margin(self) -> bool {
        matches!(self, Self::Bars | Self::Counts)
    }
}
