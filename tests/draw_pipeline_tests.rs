use approx::assert_abs_diff_eq;
use hbar_chart::api::chart_style::{
    DEFAULT_BAR_COLOR, LABEL_TEXT_COLOR, TOTAL_COUNT_SPAN_CLASS, VALUE_TEXT_COLOR,
};
use hbar_chart::api::{ChartConfig, LayerNode, draw_chart};
use hbar_chart::core::{ChartDatum, Viewport};
use hbar_chart::render::{ChartLayerKind, NodeClass, TextBaseline};

fn sample_data() -> Vec<ChartDatum> {
    vec![
        ChartDatum::new("A", 50.0),
        ChartDatum::new("B", 12.0),
        ChartDatum::new("C", 41.0),
    ]
}

fn annotated_config() -> ChartConfig {
    ChartConfig::default()
        .with_show_counts(true)
        .with_show_labels(true)
}

#[test]
fn groups_follow_layer_order_and_margin_offsets() {
    let drawn = draw_chart(&sample_data(), &annotated_config(), Viewport::new(400, 300), 1)
        .expect("draw");
    let layers: Vec<_> = drawn.scene.groups.iter().map(|group| group.layer).collect();
    assert_eq!(
        layers,
        vec![
            ChartLayerKind::Bars,
            ChartLayerKind::Counts,
            ChartLayerKind::Labels,
            ChartLayerKind::Total,
        ]
    );

    let bars = drawn.scene.group(ChartLayerKind::Bars).expect("bars group");
    assert_eq!((bars.offset_x, bars.offset_y), (38.0, 10.0));
    let labels = drawn.scene.group(ChartLayerKind::Labels).expect("labels group");
    assert_eq!((labels.offset_x, labels.offset_y), (0.0, 10.0));
    let total = drawn.scene.group(ChartLayerKind::Total).expect("total group");
    assert_eq!((total.offset_x, total.offset_y), (0.0, 10.0));
}

#[test]
fn bars_start_collapsed_with_default_style() {
    let data = vec![
        ChartDatum::new("A", 50.0),
        ChartDatum::new("B", 12.0).with_color("#fgfgfg"),
    ];
    let drawn =
        draw_chart(&data, &ChartConfig::default(), Viewport::new(400, 300), 1).expect("draw");

    let bars: Vec<_> = drawn.scene.nodes_of_class(NodeClass::Bar).collect();
    assert_eq!(bars.len(), 2);
    for (index, bar) in bars.iter().enumerate() {
        let rect = bar.as_rect().expect("bar rect");
        assert_eq!(bar.datum_index, Some(index));
        assert_eq!(rect.x, 2.0);
        assert_eq!(rect.width, 0.0);
        assert_eq!(rect.height, 8.0);
        assert_eq!(rect.corner_radius, 3.0);
        assert_eq!(rect.y, index as f64 * 24.0);
    }
    assert_eq!(bars[0].as_rect().expect("rect").fill, DEFAULT_BAR_COLOR);
    assert_eq!(bars[1].as_rect().expect("rect").fill, "#fgfgfg");
}

#[test]
fn root_classes_reflect_clickable_and_loading_flags() {
    let viewport = Viewport::new(400, 300);
    let plain = draw_chart(&sample_data(), &ChartConfig::default(), viewport, 1).expect("draw");
    assert!(plain.scene.has_root_class("chart"));
    assert!(!plain.scene.has_root_class("clickable-bars"));
    assert!(!plain.scene.has_root_class("loading"));

    let config = ChartConfig::default()
        .with_clickable_bars(true)
        .with_loading(true);
    let flagged = draw_chart(&sample_data(), &config, viewport, 1).expect("draw");
    assert!(flagged.scene.has_root_class("clickable-bars"));
    assert!(flagged.scene.has_root_class("loading"));
}

#[test]
fn counts_and_labels_are_centered_on_each_bar() {
    let data = sample_data();
    let drawn = draw_chart(&data, &annotated_config(), Viewport::new(400, 300), 1).expect("draw");

    for (row, expected_center) in drawn.rows.iter().zip([4.0, 28.0, 52.0]) {
        let Some(LayerNode::Real(count)) = row.count else {
            panic!("expected a real count node");
        };
        let count = drawn.scene.node(count).expect("count node");
        let text = count.as_text().expect("count text");
        assert_eq!(text.y, expected_center);
        assert_eq!(text.x, 0.0);
        assert_eq!(text.fill, VALUE_TEXT_COLOR);
        assert_eq!(text.baseline, TextBaseline::Middle);

        let Some(LayerNode::Real(label)) = row.label else {
            panic!("expected a real label node");
        };
        let label = drawn.scene.node(label).expect("label node");
        let text = label.as_text().expect("label text");
        assert_eq!(text.text, data[row.index].label);
        assert_eq!(text.fill, LABEL_TEXT_COLOR);
        assert_eq!(text.y, expected_center);
    }
}

#[test]
fn value_labels_start_empty_in_value_color() {
    let config = annotated_config().with_show_counts_instead_of_labels(true);
    let drawn = draw_chart(&sample_data(), &config, Viewport::new(400, 300), 1).expect("draw");
    for label in drawn.scene.nodes_of_class(NodeClass::Label) {
        let text = label.as_text().expect("label text");
        assert!(text.text.is_empty());
        assert_eq!(text.fill, VALUE_TEXT_COLOR);
    }
}

#[test]
fn total_sits_below_last_row_with_prefix_and_value_span() {
    let drawn = draw_chart(&sample_data(), &ChartConfig::default(), Viewport::new(400, 300), 1)
        .expect("draw");
    let Some(LayerNode::Real(total)) = drawn.total else {
        panic!("total should be drawn by default");
    };
    let text = drawn
        .scene
        .node(total)
        .and_then(|node| node.as_text())
        .expect("total text");
    assert_eq!(text.text, "Total: ");
    assert_eq!(text.fill, LABEL_TEXT_COLOR);
    assert_eq!(text.baseline, TextBaseline::Top);
    assert_eq!(text.y, 72.0 + 9.0);
    assert_eq!(text.spans.len(), 1);
    assert_eq!(text.spans[0].class, TOTAL_COUNT_SPAN_CLASS);
    assert_eq!(text.spans[0].fill, VALUE_TEXT_COLOR);
}

#[test]
fn hidden_layers_produce_no_nodes() {
    let config = ChartConfig::default().with_show_total(false);
    let drawn = draw_chart(&sample_data(), &config, Viewport::new(400, 300), 1).expect("draw");
    assert_eq!(drawn.scene.rect_count(), 3);
    assert_eq!(drawn.scene.text_count(), 0);
    assert!(drawn.total.is_none());
    assert!(drawn.rows.iter().all(|row| row.count.is_none() && row.label.is_none()));
}

#[test]
fn empty_dataset_draws_only_the_total() {
    let drawn =
        draw_chart(&[], &ChartConfig::default(), Viewport::new(400, 300), 1).expect("draw");
    assert!(drawn.rows.is_empty());
    assert_eq!(drawn.layout.inner_height, 0.0);
    assert_eq!(drawn.scene.rect_count(), 0);
    assert_eq!(drawn.scene.nodes_of_class(NodeClass::Total).count(), 1);
}

#[test]
fn node_ids_carry_the_scene_generation() {
    let drawn = draw_chart(&sample_data(), &ChartConfig::default(), Viewport::new(400, 300), 7)
        .expect("draw");
    assert_eq!(drawn.scene.generation(), 7);
    assert!(drawn.scene.nodes().all(|node| node.id.generation() == 7));
}

#[test]
fn zero_value_bar_gets_no_count_gap() {
    let data = vec![
        ChartDatum::new("A", 50.0),
        ChartDatum::new("B", 0.0),
        ChartDatum::new("C", 41.0),
    ];
    let config = annotated_config().with_animation_duration_ms(0.0);
    let drawn = draw_chart(&data, &config, Viewport::new(400, 300), 1).expect("draw");
    let timeline =
        hbar_chart::api::AnimationController::schedule(&drawn, &data, &config, 0.0)
            .expect("schedule");
    let mut scene = drawn.scene.clone();
    timeline.apply(&mut scene, 0.0);

    let xs: Vec<f64> = scene
        .nodes_of_class(NodeClass::Count)
        .map(|node| node.as_text().expect("count text").x)
        .collect();
    assert_abs_diff_eq!(xs[0], 324.0 + 12.0, epsilon = 1e-9);
    assert_eq!(xs[1], 0.0);
    assert_abs_diff_eq!(xs[2], 41.0 / 50.0 * 324.0 + 12.0, epsilon = 1e-9);

    let widths: Vec<f64> = scene
        .nodes_of_class(NodeClass::Bar)
        .map(|node| node.as_rect().expect("bar rect").width)
        .collect();
    assert_eq!(widths[1], 0.0);
    assert_abs_diff_eq!(widths[0], 324.0, epsilon = 1e-9);
}
