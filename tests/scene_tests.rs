use chartscene::scale::compute_ticks;
use chartscene::synth::geometry::{slice_angles, smooth_path};
use chartscene::{
    ChartError, DataPoint, DrawCommand, GraphConfig, LegendPosition, Series, Variant, compute_layout,
    svg::to_svg, synthesize, synthesize_json,
};
use glam::dvec2;
use regex_lite::Regex;

/// Route log output through the test harness; `RUST_LOG=chartscene=debug` to see it
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn months() -> Vec<DataPoint> {
    vec![DataPoint::new("Jan", 42000.0), DataPoint::new("Feb", 38000.0)]
}

fn rects(commands: &[DrawCommand]) -> Vec<(f64, f64, f64, f64)> {
    commands
        .iter()
        .filter_map(|c| match c {
            DrawCommand::Rect { x, y, width, height, .. } => Some((*x, *y, *width, *height)),
            _ => None,
        })
        .collect()
}

/// Every `x,y` pair in a path string
fn path_pairs(d: &str) -> Vec<(f64, f64)> {
    let re = Regex::new(r"(-?[0-9.]+),(-?[0-9.]+)").unwrap();
    re.captures_iter(d)
        .map(|c| (c[1].parse().unwrap(), c[2].parse().unwrap()))
        .collect()
}

#[test]
fn monthly_bar_chart_end_to_end() {
    let config = GraphConfig::new(Variant::Bar)
        .with_size(480.0, 260.0)
        .with_legend(LegendPosition::None);
    let series = vec![Series::new("Series 1", months())];
    let layout = compute_layout(&config, &series);
    assert_eq!(layout.chart_w, 430.0);
    assert_eq!(layout.chart_h, 226.0);

    let scene = synthesize(&config, months());
    let bars = rects(&scene.commands);
    assert_eq!(bars.len(), 2);
    // Groups are 215 wide; bars keep the same offset inside each group
    assert_eq!(bars[1].0 - bars[0].0, 215.0);
    assert_eq!(bars[0].2, bars[1].2);
    // Both bars stand on the baseline
    for (_, y, _, h) in &bars {
        assert!((y + h - 236.0).abs() < 1e-9);
    }
    assert!(bars[0].3 > bars[1].3);
}

#[test]
fn ticks_and_degenerate_domain() {
    assert_eq!(compute_ticks(0.0, 100.0, 5), vec![0.0, 25.0, 50.0, 75.0, 100.0]);
    assert_eq!(compute_ticks(5.0, 5.0, 3), vec![0.0, 5.0]);
}

#[test]
fn pie_sweeps_sum_to_a_full_turn() {
    for values in [
        vec![1.0],
        vec![3.0, 1.0, 2.0],
        vec![0.1, 0.2, 0.3, 0.4, 1e6],
        vec![5.0, -2.0, f64::NAN, 5.0],
    ] {
        let total: f64 = slice_angles(&values).iter().map(|s| s.sweep.raw()).sum();
        assert!((total - 360.0).abs() < 1e-6, "{values:?} sums to {total}");
    }
}

#[test]
fn smooth_path_stays_within_the_data_range() {
    assert_eq!(smooth_path(&[dvec2(1.0, 1.0)]).to_string(), "");
    assert_eq!(
        smooth_path(&[dvec2(0.0, 0.0), dvec2(10.0, 5.0)]).to_string(),
        "M0,0 L10,5"
    );

    let points = [
        dvec2(0.0, 100.0),
        dvec2(10.0, 20.0),
        dvec2(20.0, 5.0),
        dvec2(30.0, 90.0),
        dvec2(40.0, 100.0),
    ];
    let d = smooth_path(&points).to_string();
    for (x, y) in path_pairs(&d) {
        assert!((0.0..=40.0).contains(&x), "x {x} escapes in {d}");
        assert!((5.0..=100.0).contains(&y), "y {y} overshoots in {d}");
    }
}

#[test]
fn all_zero_horizontal_bars_have_zero_length() {
    init_tracing();
    let config = GraphConfig::new(Variant::HorizontalBar).with_legend(LegendPosition::None);
    let scene = synthesize(
        &config,
        vec![DataPoint::new("Engineering", 0.0), DataPoint::new("HR", 0.0)],
    );
    let bars = rects(&scene.commands);
    assert_eq!(bars.len(), 2);
    for (x, y, w, h) in bars {
        assert!(x.is_finite() && y.is_finite() && h.is_finite());
        assert_eq!(w, 0.0);
    }
}

#[test]
fn svg_output_has_one_element_per_command() {
    let scene = synthesize(
        &GraphConfig::new(Variant::Donut).with_center_label("80K"),
        months(),
    );
    let svg = to_svg(&scene).unwrap();
    let element = Regex::new(r"<(rect|line|path|circle|text)\b").unwrap();
    assert_eq!(element.find_iter(&svg).count(), scene.commands.len());

    let arc = Regex::new(r#"\bd="M[^"]*A[^"]*""#).unwrap();
    assert_eq!(arc.find_iter(&svg).count(), 2);
    assert!(svg.contains(">80K</text>"));
}

#[test]
fn paint_order_is_grid_then_data_then_labels_then_legend() {
    let config = GraphConfig::new(Variant::Bar).with_values(true);
    let scene = synthesize(&config, months());
    let first_bar = scene
        .commands
        .iter()
        .position(|c| matches!(c, DrawCommand::Rect { .. }))
        .unwrap();
    let last_line = scene
        .commands
        .iter()
        .rposition(|c| matches!(c, DrawCommand::Line { .. }))
        .unwrap();
    assert!(last_line < first_bar);

    // The legend swatch comes last, after every value label
    assert!(matches!(
        scene.commands[scene.commands.len() - 2],
        DrawCommand::Rect { .. }
    ));
    assert!(matches!(
        scene.commands.last(),
        Some(DrawCommand::Text { content, .. }) if content == "Series 1"
    ));
}

#[test]
fn scene_serializes_with_tagged_commands() {
    let scene = synthesize(&GraphConfig::new(Variant::Pie), months());
    let json = scene.to_json().unwrap();
    assert!(json.contains(r#""kind":"path""#));
    assert!(json.contains(r#""legendPosition":"bottom""#));
    assert!(json.contains(r#""noWrap":true"#));
    assert!(json.contains(r#""strokeWidth":"#));
    assert!(!json.contains("stroke_width"));
}

#[test]
fn malformed_json_is_reported() {
    init_tracing();
    let err = synthesize_json(r#"{"variant": "radar"}"#, "[]").unwrap_err();
    assert!(matches!(err, ChartError::InvalidConfig { .. }));

    let err = synthesize_json("{}", "[1, 2").unwrap_err();
    assert!(matches!(err, ChartError::InvalidData { .. }));

    let err = synthesize_json("{}", r#"{"label": "a"}"#).unwrap_err();
    assert_eq!(err.to_string(), "chart data must be an array, got an object");
}

#[test]
fn series_json_shape() {
    let scene = synthesize_json(
        r#"{"variant": "line", "showDots": false}"#,
        r#"[{"name": "A", "data": [{"label": "x", "value": 1}, {"label": "y", "value": 2}]},
            {"name": "B", "color": "red", "data": [{"label": "x", "value": 3}]}]"#,
    )
    .unwrap();
    assert_eq!(scene.legend.len(), 2);
    assert_eq!(scene.legend[1].color, "red");
    // B is padded with a 0 for the missing category
    assert_eq!(scene.count(|c| matches!(c, DrawCommand::Path { .. })), 2);
}
