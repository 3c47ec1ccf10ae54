use approx::assert_abs_diff_eq;
use hbar_chart::core::{BandScale, ChartDatum, ChartLayout, LayoutInput, Margins, ValueScale, Viewport};

fn sample_data() -> Vec<ChartDatum> {
    vec![
        ChartDatum::new("A", 50.0),
        ChartDatum::new("B", 12.0),
        ChartDatum::new("C", 41.0),
    ]
}

fn default_input() -> LayoutInput {
    LayoutInput {
        margins: Margins::default(),
        bar_thickness: Some(8.0),
        bar_gutter: 16.0,
        band_padding: 0.0,
    }
}

#[test]
fn value_scale_fits_domain_to_largest_value() {
    let scale = ValueScale::from_data(&sample_data(), 324.0).expect("scale");
    assert_eq!(scale.domain(), (0.0, 50.0));
    assert_eq!(scale.map(0.0), 0.0);
    assert_abs_diff_eq!(scale.map(50.0), 324.0, epsilon = 1e-9);
    assert_abs_diff_eq!(scale.map(12.0), 77.76, epsilon = 1e-9);
    assert_abs_diff_eq!(scale.invert(162.0), 25.0, epsilon = 1e-9);
}

#[test]
fn empty_dataset_maps_everything_to_zero() {
    let scale = ValueScale::from_data(&[], 300.0).expect("empty data must not fail");
    assert!(scale.is_degenerate());
    assert_eq!(scale.map(0.0), 0.0);
    assert_eq!(scale.map(75.0), 0.0);
    assert_eq!(scale.invert(120.0), 0.0);
}

#[test]
fn all_zero_values_map_to_zero() {
    let data = vec![ChartDatum::new("x", 0.0), ChartDatum::new("y", 0.0)];
    let scale = ValueScale::from_data(&data, 300.0).expect("scale");
    assert_eq!(scale.map(0.0), 0.0);
}

#[test]
fn value_scale_rejects_non_finite_domain() {
    let err = ValueScale::new(f64::NAN, 100.0).expect_err("NaN domain");
    assert!(format!("{err}").contains("domain max"));
}

#[test]
fn band_scale_orders_bands_by_input_order() {
    let scale = BandScale::new(["A", "B", "C"], 0.0, 72.0, 0.0).expect("scale");
    assert_eq!(scale.band("A"), Some(0.0));
    assert_eq!(scale.band("B"), Some(24.0));
    assert_eq!(scale.band("C"), Some(48.0));
    assert_eq!(scale.bandwidth(), 24.0);
    assert_eq!(scale.band("missing"), None);
}

#[test]
fn band_scale_padding_shrinks_bands_and_centers_them() {
    let scale = BandScale::new(["A", "B"], 0.0, 100.0, 0.3).expect("scale");
    // step = floor(100 / (2 - 0.3 + 0.6)) = 43
    assert_eq!(scale.step(), 43.0);
    assert_eq!(scale.bandwidth(), 30.0);
    // start = round((100 - 43 * 1.7) * 0.5) = round(13.45)
    assert_eq!(scale.band("A"), Some(13.0));
    assert_eq!(scale.band("B"), Some(56.0));
}

#[test]
fn band_scale_rejects_padding_outside_unit_interval() {
    assert!(BandScale::new(["A"], 0.0, 10.0, 1.0).is_err());
    assert!(BandScale::new(["A"], 0.0, 10.0, -0.1).is_err());
}

#[test]
fn duplicate_labels_share_the_first_band() {
    let data = vec![
        ChartDatum::new("A", 1.0),
        ChartDatum::new("A", 2.0),
        ChartDatum::new("B", 3.0),
    ];
    let layout =
        ChartLayout::compute(Viewport::new(400, 300), &data, default_input()).expect("layout");
    assert_eq!(layout.band_scale.len(), 2);
    assert_eq!(layout.row_top(&data[0]), layout.row_top(&data[1]));
    assert_ne!(layout.row_top(&data[0]), layout.row_top(&data[2]));
}

#[test]
fn inner_height_is_clamped_to_row_pitch() {
    let layout = ChartLayout::compute(Viewport::new(400, 300), &sample_data(), default_input())
        .expect("layout");
    assert_eq!(layout.inner_width, 324.0);
    assert_eq!(layout.inner_height, 72.0);
    assert_eq!(layout.bar_thickness(), 8.0);
    assert_eq!(layout.row_center(&sample_data()[1]), 28.0);
}

#[test]
fn inner_height_uses_container_when_rows_overflow() {
    let layout = ChartLayout::compute(Viewport::new(400, 60), &sample_data(), default_input())
        .expect("layout");
    assert_eq!(layout.inner_height, 40.0);
    assert_eq!(layout.band_scale.step(), 13.0);
}

#[test]
fn missing_bar_thickness_falls_back_to_band_width() {
    let input = LayoutInput {
        bar_thickness: None,
        ..default_input()
    };
    let layout =
        ChartLayout::compute(Viewport::new(400, 300), &sample_data(), input).expect("layout");
    assert_eq!(layout.inner_height, 48.0);
    assert_eq!(layout.bar_thickness(), 16.0);
}

#[test]
fn margins_larger_than_container_collapse_inner_area() {
    let input = LayoutInput {
        margins: Margins::new(200.0, 300.0, 200.0, 300.0),
        ..default_input()
    };
    let layout =
        ChartLayout::compute(Viewport::new(400, 300), &sample_data(), input).expect("layout");
    assert_eq!(layout.inner_width, 0.0);
    assert_eq!(layout.inner_height, 0.0);
}

#[test]
fn layout_rejects_zero_viewport() {
    let err = ChartLayout::compute(Viewport::new(0, 300), &sample_data(), default_input())
        .expect_err("zero width");
    assert!(format!("{err}").contains("invalid viewport"));
}
