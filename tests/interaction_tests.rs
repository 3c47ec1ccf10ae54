use std::cell::RefCell;
use std::rc::Rc;

use hbar_chart::api::{ChartConfig, ChartEngine};
use hbar_chart::core::{ChartDatum, Viewport};
use hbar_chart::interaction::{ClickOutcome, ClickPolicy, classify_click};
use hbar_chart::render::{NodeClass, NullRenderer};

fn sample_data() -> Vec<ChartDatum> {
    vec![
        ChartDatum::new("A", 50.0),
        ChartDatum::new("B", 12.0),
        ChartDatum::new("C", 41.0),
    ]
}

fn clickable_config() -> ChartConfig {
    ChartConfig::default()
        .with_show_counts(true)
        .with_clickable_bars(true)
}

type Clicks = Rc<RefCell<Vec<ChartDatum>>>;

fn settled_engine(config: ChartConfig) -> (ChartEngine<NullRenderer>, Clicks) {
    let clicks: Clicks = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&clicks);

    let mut engine = ChartEngine::new(NullRenderer::default());
    engine.set_on_chart_click(move |datum| sink.borrow_mut().push(datum.clone()));
    engine.mount(Viewport::new(400, 300)).expect("mount");
    engine.render(sample_data(), config).expect("render");
    engine.advance_to(10_000.0).expect("settle");
    (engine, clicks)
}

#[test]
fn clicking_a_bar_reports_its_row() {
    let (mut engine, clicks) = settled_engine(clickable_config());

    assert_eq!(engine.click_at(50.0, 14.0), ClickOutcome::Bar { index: 0 });
    assert_eq!(engine.click_at(50.0, 38.0), ClickOutcome::Bar { index: 1 });
    assert_eq!(engine.click_at(50.0, 62.0), ClickOutcome::Bar { index: 2 });

    let labels: Vec<String> = clicks.borrow().iter().map(|d| d.label.clone()).collect();
    assert_eq!(labels, vec!["A", "B", "C"]);
    assert_eq!(clicks.borrow()[2].value, 41.0);
}

#[test]
fn clicks_outside_bars_are_ignored() {
    let (mut engine, clicks) = settled_engine(clickable_config());

    assert_eq!(engine.click_at(390.0, 290.0), ClickOutcome::NotABar);
    // Count text of row A, right of the bar end.
    assert_eq!(engine.click_at(378.0, 14.0), ClickOutcome::NotABar);
    assert!(clicks.borrow().is_empty());
}

#[test]
fn clicking_a_resolved_node_dispatches_directly() {
    let (mut engine, clicks) = settled_engine(clickable_config());
    let bar = engine
        .scene()
        .and_then(|scene| scene.nodes_of_class(NodeClass::Bar).nth(1))
        .map(|node| node.id)
        .expect("bar node");
    let count = engine
        .scene()
        .and_then(|scene| scene.nodes_of_class(NodeClass::Count).next())
        .map(|node| node.id)
        .expect("count node");

    assert_eq!(engine.click_node(bar), ClickOutcome::Bar { index: 1 });
    assert_eq!(engine.click_node(count), ClickOutcome::NotABar);
    assert_eq!(clicks.borrow().len(), 1);
}

#[test]
fn clicks_are_disabled_without_clickable_bars() {
    let (mut engine, clicks) = settled_engine(ChartConfig::default());
    assert_eq!(engine.click_at(50.0, 14.0), ClickOutcome::Disabled);
    assert!(clicks.borrow().is_empty());
}

#[test]
fn clicks_are_disabled_while_loading() {
    let (mut engine, clicks) = settled_engine(clickable_config().with_loading(true));
    assert_eq!(engine.click_at(50.0, 14.0), ClickOutcome::Disabled);
    assert!(clicks.borrow().is_empty());
}

#[test]
fn node_from_a_previous_render_is_stale() {
    let (mut engine, clicks) = settled_engine(clickable_config());
    let old_bar = engine
        .scene()
        .and_then(|scene| scene.nodes_of_class(NodeClass::Bar).next())
        .map(|node| node.id)
        .expect("bar node");

    engine
        .render(sample_data(), clickable_config())
        .expect("re-render");
    assert_eq!(engine.click_node(old_bar), ClickOutcome::Stale);
    assert!(clicks.borrow().is_empty());
}

#[test]
fn clicks_before_mount_or_render_are_unbound() {
    let mut engine = ChartEngine::new(NullRenderer::default());
    assert_eq!(engine.click_at(50.0, 14.0), ClickOutcome::Unbound);

    engine.mount(Viewport::new(400, 300)).expect("mount");
    assert_eq!(engine.click_at(50.0, 14.0), ClickOutcome::Unbound);
}

#[test]
fn missing_handler_still_classifies_the_click() {
    let mut engine = ChartEngine::new(NullRenderer::default());
    engine.mount(Viewport::new(400, 300)).expect("mount");
    engine
        .render(sample_data(), clickable_config())
        .expect("render");
    engine.advance_to(1_000.0).expect("settle");
    assert_eq!(engine.click_at(50.0, 14.0), ClickOutcome::Bar { index: 0 });
}

#[test]
fn cleared_handler_stops_receiving_clicks() {
    let (mut engine, clicks) = settled_engine(clickable_config());
    engine.clear_on_chart_click();
    assert_eq!(engine.click_at(50.0, 14.0), ClickOutcome::Bar { index: 0 });
    assert!(clicks.borrow().is_empty());
}

#[test]
fn bar_index_beyond_dataset_is_out_of_range() {
    let (engine, _) = settled_engine(clickable_config());
    let scene = engine.scene().expect("scene");
    let last_bar = scene
        .nodes_of_class(NodeClass::Bar)
        .last()
        .map(|node| node.id)
        .expect("bar node");
    let policy = ClickPolicy {
        clickable_bars: true,
        loading: false,
    };

    assert_eq!(
        classify_click(scene, Some(last_bar), policy, 2),
        ClickOutcome::OutOfRange { index: 2 }
    );
    assert_eq!(
        classify_click(scene, Some(last_bar), policy, 3),
        ClickOutcome::Bar { index: 2 }
    );
}
