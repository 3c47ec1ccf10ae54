use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{ChartDatum, ChartLayout, Viewport};
use crate::error::ChartResult;
use crate::render::{
    ChartLayerKind, NodeClass, NodeId, RectPrimitive, Scene, Shape, TextBaseline, TextPrimitive,
    TextSpan,
};

use super::ChartConfig;
use super::chart_style::{
    BAR_CORNER_RADIUS, BAR_X_OFFSET, CLICKABLE_ROOT_CLASS, DEFAULT_BAR_COLOR, LABEL_TEXT_COLOR,
    LOADING_ROOT_CLASS, ROOT_CLASS, TOTAL_COUNT_SPAN_CLASS, TOTAL_TEXT_OFFSET, VALUE_TEXT_COLOR,
};
use super::skeleton::{LayerBranch, SkeletonPresenter};

/// Node drawn for an annotation, tagged with the branch that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LayerNode {
    Real(NodeId),
    Placeholder(NodeId),
}

impl LayerNode {
    #[must_use]
    pub fn id(self) -> NodeId {
        match self {
            Self::Real(id) | Self::Placeholder(id) => id,
        }
    }
}

/// Nodes created for one dataset row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawnRow {
    pub index: usize,
    pub bar: NodeId,
    pub count: Option<LayerNode>,
    pub label: Option<LayerNode>,
}

/// Output of one full rebuild: the resting scene plus handles the animation
/// controller needs.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawnChart {
    pub scene: Scene,
    pub layout: ChartLayout,
    pub rows: Vec<DrawnRow>,
    pub total: Option<LayerNode>,
}

/// Builds a fresh scene with every element at its resting state.
///
/// Nothing is reused from earlier passes; `generation` stamps the new node ids.
pub fn draw_chart(
    data: &[ChartDatum],
    config: &ChartConfig,
    viewport: Viewport,
    generation: u64,
) -> ChartResult<DrawnChart> {
    let layout = ChartLayout::compute(viewport, data, config.layout_input())?;
    let presenter = SkeletonPresenter::for_config(config);

    let mut scene = Scene::new(viewport, generation);
    scene.add_root_class(ROOT_CLASS);
    if config.clickable_bars {
        scene.add_root_class(CLICKABLE_ROOT_CLASS);
    }
    if config.loading {
        scene.add_root_class(LOADING_ROOT_CLASS);
    }
    for layer in ChartLayerKind::CANONICAL_ORDER {
        let offset_x = if layer.uses_left_margin() {
            layout.margins.left
        } else {
            0.0
        };
        scene.push_group(layer, offset_x, layout.margins.top);
    }

    let mut rows = Vec::with_capacity(data.len());
    for (index, datum) in data.iter().enumerate() {
        let bar = draw_bar(&mut scene, &layout, datum, index)?;
        rows.push(DrawnRow {
            index,
            bar,
            count: None,
            label: None,
        });
    }

    match presenter.branch(config.show_counts) {
        LayerBranch::Hidden => {}
        LayerBranch::Placeholder => {
            for (row, datum) in rows.iter_mut().zip(data) {
                let block = presenter.count_placeholder(&layout, datum, config);
                let id = scene.add_node(
                    ChartLayerKind::Counts,
                    NodeClass::CountSkeleton,
                    Shape::Rect(block),
                    Some(row.index),
                )?;
                row.count = Some(LayerNode::Placeholder(id));
            }
        }
        LayerBranch::Real => {
            for (row, datum) in rows.iter_mut().zip(data) {
                let text = TextPrimitive::new(
                    "",
                    0.0,
                    layout.row_center(datum),
                    config.font_family.as_str(),
                    config.font_size,
                    VALUE_TEXT_COLOR,
                );
                let id = scene.add_node(
                    ChartLayerKind::Counts,
                    NodeClass::Count,
                    Shape::Text(text),
                    Some(row.index),
                )?;
                row.count = Some(LayerNode::Real(id));
            }
        }
    }

    match presenter.branch(config.show_labels) {
        LayerBranch::Hidden => {}
        LayerBranch::Placeholder => {
            for (row, datum) in rows.iter_mut().zip(data) {
                let block = presenter.label_placeholder(&layout, datum, config);
                let id = scene.add_node(
                    ChartLayerKind::Labels,
                    NodeClass::LabelSkeleton,
                    Shape::Rect(block),
                    Some(row.index),
                )?;
                row.label = Some(LayerNode::Placeholder(id));
            }
        }
        LayerBranch::Real => {
            for (row, datum) in rows.iter_mut().zip(data) {
                let (content, fill) = if config.show_counts_instead_of_labels {
                    ("", VALUE_TEXT_COLOR)
                } else {
                    (datum.label.as_str(), LABEL_TEXT_COLOR)
                };
                let text = TextPrimitive::new(
                    content,
                    0.0,
                    layout.row_center(datum),
                    config.font_family.as_str(),
                    config.font_size,
                    fill,
                );
                let id = scene.add_node(
                    ChartLayerKind::Labels,
                    NodeClass::Label,
                    Shape::Text(text),
                    Some(row.index),
                )?;
                row.label = Some(LayerNode::Real(id));
            }
        }
    }

    let total = match presenter.branch(config.show_total) {
        LayerBranch::Hidden => None,
        LayerBranch::Placeholder => {
            let block = presenter.total_placeholder(&layout, config);
            let id = scene.add_node(
                ChartLayerKind::Total,
                NodeClass::TotalSkeleton,
                Shape::Rect(block),
                None,
            )?;
            Some(LayerNode::Placeholder(id))
        }
        LayerBranch::Real => {
            let text = TextPrimitive::new(
                config.total_prefix.as_str(),
                0.0,
                layout.inner_height + TOTAL_TEXT_OFFSET,
                config.font_family.as_str(),
                config.font_size,
                LABEL_TEXT_COLOR,
            )
            .with_baseline(TextBaseline::Top)
            .with_span(TextSpan {
                class: TOTAL_COUNT_SPAN_CLASS.to_owned(),
                text: String::new(),
                fill: VALUE_TEXT_COLOR.to_owned(),
            });
            let id = scene.add_node(
                ChartLayerKind::Total,
                NodeClass::Total,
                Shape::Text(text),
                None,
            )?;
            Some(LayerNode::Real(id))
        }
    };

    trace!(
        rows = rows.len(),
        inner_width = layout.inner_width,
        inner_height = layout.inner_height,
        loading = config.loading,
        "chart scene rebuilt"
    );

    Ok(DrawnChart {
        scene,
        layout,
        rows,
        total,
    })
}

fn draw_bar(
    scene: &mut Scene,
    layout: &ChartLayout,
    datum: &ChartDatum,
    index: usize,
) -> ChartResult<NodeId> {
    let fill = datum.color.as_deref().unwrap_or(DEFAULT_BAR_COLOR);
    let rect = RectPrimitive::new(
        BAR_X_OFFSET,
        layout.row_top(datum),
        0.0,
        layout.bar_thickness(),
        fill,
    )
    .with_corner_radius(BAR_CORNER_RADIUS);
    scene.add_node(
        ChartLayerKind::Bars,
        NodeClass::Bar,
        Shape::Rect(rect),
        Some(index),
    )
}
