use tracing::trace;

use crate::animation::{AnimatedProperty, AnimationTimeline, NumberTween, TextTarget, Transition};
use crate::core::{ChartDatum, total_value};
use crate::error::{ChartError, ChartResult};

use super::ChartConfig;
use super::chart_style::count_x;
use super::draw_pipeline::{DrawnChart, LayerNode};

/// Schedules the reveal animation for a freshly drawn chart.
pub struct AnimationController;

impl AnimationController {
    /// Transition shared by everything on row `index`: bar width, count
    /// position and count tween all use it, so they finish together.
    pub fn row_transition(
        config: &ChartConfig,
        index: usize,
        start_ms: f64,
    ) -> ChartResult<Transition> {
        Transition::new(
            start_ms,
            index as f64 * config.animation_step_delay_ms,
            config.animation_duration_ms,
        )
    }

    pub fn schedule(
        drawn: &DrawnChart,
        data: &[ChartDatum],
        config: &ChartConfig,
        start_ms: f64,
    ) -> ChartResult<AnimationTimeline> {
        if drawn.rows.len() != data.len() {
            return Err(ChartError::InvalidData(format!(
                "drawn rows ({}) do not match dataset rows ({})",
                drawn.rows.len(),
                data.len()
            )));
        }

        let value_scale = drawn.layout.value_scale;
        let mut timeline = AnimationTimeline::new();

        for (row, datum) in drawn.rows.iter().zip(data) {
            let transition = Self::row_transition(config, row.index, start_ms)?;
            let bar_end = value_scale.map(datum.value);
            let value_tween = NumberTween::new(0.0, datum.value).masked(config.loading);

            timeline.schedule(row.bar, transition, AnimatedProperty::Width { to: bar_end });

            match row.count {
                Some(LayerNode::Real(id)) => {
                    timeline.schedule(
                        id,
                        transition,
                        AnimatedProperty::X {
                            from: 0.0,
                            to: count_x(bar_end, datum.value),
                        },
                    );
                    timeline.schedule(
                        id,
                        transition,
                        AnimatedProperty::Text {
                            target: TextTarget::Body,
                            tween: value_tween,
                        },
                    );
                }
                Some(LayerNode::Placeholder(id)) => {
                    timeline.schedule(
                        id,
                        transition,
                        AnimatedProperty::X {
                            from: 0.0,
                            to: count_x(bar_end, datum.value),
                        },
                    );
                }
                None => {}
            }

            if let (Some(LayerNode::Real(id)), true) =
                (row.label, config.show_counts_instead_of_labels)
            {
                timeline.schedule(
                    id,
                    transition,
                    AnimatedProperty::Text {
                        target: TextTarget::Body,
                        tween: value_tween,
                    },
                );
            }
        }

        if let Some(LayerNode::Real(id)) = drawn.total {
            let transition =
                Transition::new(start_ms, 0.0, config.total_duration_ms(data.len()))?;
            timeline.schedule(
                id,
                transition,
                AnimatedProperty::Text {
                    target: TextTarget::Span(0),
                    tween: NumberTween::new(0.0, total_value(data)).masked(config.loading),
                },
            );
        }

        trace!(
            entries = timeline.entries().len(),
            settle_at = ?timeline.settle_at(),
            "animation scheduled"
        );
        Ok(timeline)
    }
}
