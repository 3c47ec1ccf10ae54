use serde::{Deserialize, Serialize};

use crate::core::{ChartDatum, ChartLayout};
use crate::render::RectPrimitive;

use super::ChartConfig;
use super::chart_style::{
    SKELETON_TEXT_COLOR, SKELETON_VALUE_COLOR, TOTAL_PLACEHOLDER_HEIGHT_RATIO,
    TOTAL_PLACEHOLDER_WIDTH,
};

/// Rendering branch chosen for one annotation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LayerBranch {
    /// The layer's `show_*` flag is off.
    Hidden,
    Placeholder,
    Real,
}

/// Picks between placeholder blocks and real text for counts, labels and
/// the total, and sizes the placeholders.
///
/// Only the chart-level loading flag is consulted; per-row `loading` values
/// are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkeletonPresenter {
    loading: bool,
}

impl SkeletonPresenter {
    #[must_use]
    pub fn new(loading: bool) -> Self {
        Self { loading }
    }

    #[must_use]
    pub fn for_config(config: &ChartConfig) -> Self {
        Self::new(config.loading)
    }

    #[must_use]
    pub fn is_loading(self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn branch(self, visible: bool) -> LayerBranch {
        match (visible, self.loading) {
            (false, _) => LayerBranch::Hidden,
            (true, true) => LayerBranch::Placeholder,
            (true, false) => LayerBranch::Real,
        }
    }

    /// Count placeholder at its resting position (`x = 0`); its final x is
    /// animated like the real count.
    #[must_use]
    pub fn count_placeholder(
        self,
        layout: &ChartLayout,
        datum: &ChartDatum,
        config: &ChartConfig,
    ) -> RectPrimitive {
        row_block(layout, datum, config, SKELETON_VALUE_COLOR)
    }

    #[must_use]
    pub fn label_placeholder(
        self,
        layout: &ChartLayout,
        datum: &ChartDatum,
        config: &ChartConfig,
    ) -> RectPrimitive {
        let fill = if config.show_counts_instead_of_labels {
            SKELETON_VALUE_COLOR
        } else {
            SKELETON_TEXT_COLOR
        };
        row_block(layout, datum, config, fill)
    }

    #[must_use]
    pub fn total_placeholder(self, layout: &ChartLayout, config: &ChartConfig) -> RectPrimitive {
        RectPrimitive::new(
            0.0,
            layout.inner_height,
            TOTAL_PLACEHOLDER_WIDTH,
            config.font_size * TOTAL_PLACEHOLDER_HEIGHT_RATIO,
            SKELETON_TEXT_COLOR,
        )
    }
}

// A `2em x 1em` block vertically centered on the bar.
fn row_block(
    layout: &ChartLayout,
    datum: &ChartDatum,
    config: &ChartConfig,
    fill: &str,
) -> RectPrimitive {
    RectPrimitive::new(
        0.0,
        layout.row_center(datum) - config.font_size * 0.5,
        config.font_size * 2.0,
        config.font_size,
        fill,
    )
}

#[cfg(test)]
mod tests {
    use super::{LayerBranch, SkeletonPresenter};

    #[test]
    fn exactly_one_branch_per_visible_layer() {
        assert_eq!(SkeletonPresenter::new(true).branch(true), LayerBranch::Placeholder);
        assert_eq!(SkeletonPresenter::new(false).branch(true), LayerBranch::Real);
    }

    #[test]
    fn hidden_layers_render_neither_branch() {
        assert_eq!(SkeletonPresenter::new(true).branch(false), LayerBranch::Hidden);
        assert_eq!(SkeletonPresenter::new(false).branch(false), LayerBranch::Hidden);
    }
}
