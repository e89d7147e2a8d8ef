use ci_overlap::data::canvas::DrawCommand;
use ci_overlap::{IntervalScene, SceneConfig};

const LABEL_PREFIXES: [&str; 4] = [
    "Uniform Overlap: ",
    "Gaussian Overlap: ",
    "Log10 Gaussian Overlap: ",
    "t-Statistic Squared: ",
];

fn labels(surface: &ci_overlap::DragSurface) -> Vec<String> {
    surface
        .canvas()
        .texts()
        .filter(|t| LABEL_PREFIXES.iter().any(|p| t.starts_with(p)))
        .map(str::to_string)
        .collect()
}

#[test]
fn default_scene_draws_initial_statistics() {
    let (surface, scene) = IntervalScene::build(&SceneConfig::default());
    assert_eq!(surface.points().len(), 4);
    assert_eq!(
        labels(&surface),
        vec![
            "Uniform Overlap: 0.0000",
            "Gaussian Overlap: 0.0044",
            "Log10 Gaussian Overlap: -2.3532",
            "t-Statistic Squared: 9.9058",
        ]
    );
    let snap = scene.snapshot().expect("listener ran on registration");
    assert_eq!(snap.first.left, 105.0);
    assert_eq!(snap.second.right, 450.0);
}

#[test]
fn dragging_an_endpoint_updates_labels_and_snapshot() {
    let (mut surface, scene) = IntervalScene::build(&SceneConfig::default());
    let [_, p2, _, _] = scene.endpoints();

    // Drag the right end of interval 1 (150, 30) onto [205, 450].
    surface.handle_pointer_down(150.0, 30.0);
    assert_eq!(surface.selected(), Some(p2));
    surface.handle_pointer_move(305.0, 77.0);
    surface.handle_pointer_up();

    let point = surface.point(p2).unwrap();
    assert_eq!(point.x(), 305.0);
    assert_eq!(point.y(), 30.0);

    let snap = scene.snapshot().unwrap();
    // [105, 305] ∩ [205, 450] = 100 px
    let expected = 100.0 / (200.0 * 245.0) * 100.0;
    assert!((snap.stats.uniform_overlap - expected).abs() < 1e-12);
    assert_eq!(labels(&surface)[0], format!("Uniform Overlap: {expected:.4}"));
}

#[test]
fn crossing_endpoints_swap_roles() {
    let (mut surface, scene) = IntervalScene::build(&SceneConfig::default());
    let before = scene.snapshot().unwrap().stats;

    // Drag the left end of interval 1 (105) past its right end (150) to 195:
    // the interval becomes [150, 195].
    surface.handle_pointer_down(105.0, 30.0);
    surface.handle_pointer_move(195.0, 30.0);
    let snap = scene.snapshot().unwrap();
    assert_eq!(snap.first.left, 150.0);
    assert_eq!(snap.first.right, 195.0);
    assert_eq!(snap.first.length(), 45.0);
    // Same width, so the spread is unchanged; only the mean moved.
    assert!((snap.stats.first.sd - before.first.sd).abs() < 1e-12);
}

#[test]
fn collapsed_interval_keeps_rendering() {
    let (mut surface, scene) = IntervalScene::build(&SceneConfig::default());
    surface.handle_pointer_down(105.0, 30.0);
    surface.handle_pointer_move(150.0, 30.0);
    let snap = scene.snapshot().unwrap();
    assert_eq!(snap.first.length(), 0.0);
    assert_eq!(snap.stats.uniform_overlap, 0.0);
    assert_eq!(labels(&surface).len(), 4);
}

#[test]
fn scene_draws_axis_bands_and_brackets() {
    let cfg = SceneConfig {
        width: 450.0,
        ..SceneConfig::default()
    };
    let (surface, _scene) = IntervalScene::build(&cfg);
    let cmds = surface.canvas().commands();

    let bands = cmds
        .iter()
        .filter(|c| matches!(c, DrawCommand::FillRect { .. }))
        .count();
    assert_eq!(bands, 2);

    // Four brackets of four vertices each.
    let brackets = cmds
        .iter()
        .filter(|c| matches!(c, DrawCommand::Polyline { points, .. } if points.len() == 4))
        .count();
    assert_eq!(brackets, 4);

    // Ticks at 0, 100, 200, 300, 400 px labelled by unit.
    let ticks: Vec<&str> = surface
        .canvas()
        .texts()
        .filter(|t| t.parse::<u32>().is_ok())
        .collect();
    assert_eq!(ticks, vec!["0", "1", "2", "3", "4"]);
}

#[test]
fn configured_background_is_applied() {
    let cfg = SceneConfig {
        background: Some([255, 255, 0, 64]),
        ..SceneConfig::default()
    };
    let (surface, _) = IntervalScene::build(&cfg);
    assert!(surface.background().is_some());
    assert_eq!(surface.detection_radius(), 20.0);
}

fn tick_labels(surface: &ci_overlap::DragSurface) -> Vec<String> {
    surface
        .canvas()
        .texts()
        .filter(|t| t.parse::<u32>().is_ok())
        .map(str::to_string)
        .collect()
}

#[test]
fn axis_ticks_are_bounded_for_unvalidated_geometry() {
    // Built directly, without `validate`: a step that rounds to zero in f32.
    let tiny_step = SceneConfig {
        pixels_per_unit: 1.0e-50,
        ..SceneConfig::default()
    };
    let (mut surface, scene) = IntervalScene::build(&tiny_step);
    assert!(tick_labels(&surface).is_empty());
    surface.handle_pointer_down(105.0, 30.0);
    surface.handle_pointer_move(110.0, 30.0);
    assert!(scene.snapshot().is_some());

    let unbounded = SceneConfig {
        width: f32::INFINITY,
        ..SceneConfig::default()
    };
    let (surface, _) = IntervalScene::build(&unbounded);
    assert!(tick_labels(&surface).is_empty());

    // One pixel per unit on a wide surface stays within the tick cap.
    let dense = SceneConfig {
        width: 100_000.0,
        pixels_per_unit: 1.0,
        ..SceneConfig::default()
    };
    let (surface, _) = IntervalScene::build(&dense);
    let ticks = tick_labels(&surface);
    assert_eq!(ticks.len(), 4097);
    assert_eq!(ticks.last().map(String::as_str), Some("4096"));
}
