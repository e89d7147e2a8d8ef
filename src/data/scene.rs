//! The two-interval scene.
//!
//! Four horizontally draggable endpoints on a [`DragSurface`] plus one
//! after-update listener that, on every render, reads the endpoint positions,
//! computes the [`OverlapStats`] and draws:
//!
//! * an x axis with one tick per display unit,
//! * a translucent band and a pair of brackets per interval,
//! * four labels (uniform overlap, Gaussian overlap, its log10, t²).
//!
//! The latest result is also published through [`IntervalScene::snapshot`] so
//! other panels can show it without recomputing.

use std::cell::Cell;
use std::rc::Rc;

use egui::{Align2, Color32, Pos2, Stroke};

use super::canvas::Canvas;
use super::overlap::{compute_interval_overlap, format_stat, Interval, OverlapStats};
use super::point::{Point, PointId, PointOptions, PointSet};
use super::surface::DragSurface;
use crate::config::SceneConfig;

/// `rgba(0, 128, 255, 0.25)`
const BAND_FILL: Color32 = Color32::from_rgba_premultiplied(0, 32, 64, 64);
const INK: Color32 = Color32::BLACK;
const BRACKET_LEN: f32 = 5.0;
const AXIS_GAP: f32 = 5.0;
const TICK_LEN: f32 = 5.0;
const LABEL_SIZE: f32 = 15.0;
const TICK_LABEL_SIZE: f32 = 12.0;
const LABEL_X: f32 = 5.0;
const MAX_AXIS_TICKS: u32 = 4096;

/// Intervals and statistics from the most recent render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneSnapshot {
    pub first: Interval,
    pub second: Interval,
    pub stats: OverlapStats,
    pub pixels_per_unit: f64,
}

/// Handles to the scene's endpoints and its latest snapshot.
#[derive(Debug, Clone)]
pub struct IntervalScene {
    endpoints: [PointId; 4],
    latest: Rc<Cell<Option<SceneSnapshot>>>,
}

impl IntervalScene {
    /// Build a configured surface with the scene installed.
    pub fn build(cfg: &SceneConfig) -> (DragSurface, IntervalScene) {
        let mut surface = DragSurface::new(cfg.width, cfg.height);
        surface.set_detection_radius(cfg.detection_radius);
        surface.set_background(cfg.background_color());
        let scene = Self::install(&mut surface, cfg);
        (surface, scene)
    }

    /// Add the four endpoints and the drawing listener to `surface`.
    pub fn install(surface: &mut DragSurface, cfg: &SceneConfig) -> Self {
        let [x1, x2, x3, x4] = cfg.endpoints;
        let first_row = cfg.first_row as f64;
        let second_row = cfg.second_row as f64;
        let endpoints = [
            surface.add_point(Point::with_options(x1, first_row, PointOptions::horizontal())),
            surface.add_point(Point::with_options(x2, first_row, PointOptions::horizontal())),
            surface.add_point(Point::with_options(x3, second_row, PointOptions::horizontal())),
            surface.add_point(Point::with_options(x4, second_row, PointOptions::horizontal())),
        ];

        let latest = Rc::new(Cell::new(None));
        let layout = Layout::from(cfg);
        let published = Rc::clone(&latest);
        let mut was_finite = true;
        surface.add_after_update_listener(move |canvas, points| {
            let snapshot = layout.draw(canvas, points, endpoints);
            let finite = snapshot.stats.is_finite();
            if was_finite && !finite {
                tracing::warn!(stats = ?snapshot.stats, "degenerate intervals, statistics are not finite");
            }
            was_finite = finite;
            published.set(Some(snapshot));
        });

        Self { endpoints, latest }
    }

    pub fn endpoints(&self) -> [PointId; 4] {
        self.endpoints
    }

    pub fn snapshot(&self) -> Option<SceneSnapshot> {
        self.latest.get()
    }
}

/// Text of the four statistics labels, top to bottom.
pub fn stat_labels(stats: &OverlapStats) -> [String; 4] {
    [
        format!("Uniform Overlap: {}", format_stat(stats.uniform_overlap)),
        format!("Gaussian Overlap: {}", format_stat(stats.gaussian_overlap)),
        format!(
            "Log10 Gaussian Overlap: {}",
            format_stat(stats.log10_gaussian_overlap())
        ),
        format!("t-Statistic Squared: {}", format_stat(stats.t_stat_squared)),
    ]
}

#[derive(Debug, Clone, Copy)]
struct Layout {
    pixels_per_unit: f64,
    half_height: f32,
    axis_y: f32,
    text_start: f32,
    line_height: f32,
}

impl From<&SceneConfig> for Layout {
    fn from(cfg: &SceneConfig) -> Self {
        Self {
            pixels_per_unit: cfg.pixels_per_unit,
            half_height: cfg.half_height,
            axis_y: cfg.second_row + cfg.half_height + AXIS_GAP,
            text_start: cfg.text_start,
            line_height: cfg.line_height,
        }
    }
}

impl Layout {
    fn draw(&self, canvas: &mut Canvas, points: &PointSet, ids: [PointId; 4]) -> SceneSnapshot {
        self.draw_axis(canvas);

        let [a, b, c, d] = ids.map(|id| &points[id]);
        self.draw_interval(canvas, a, b);
        self.draw_interval(canvas, c, d);

        let first = Interval::from_endpoints(a.x(), b.x());
        let second = Interval::from_endpoints(c.x(), d.x());
        let stats = compute_interval_overlap(first, second, self.pixels_per_unit);

        let mut y = self.text_start;
        for label in stat_labels(&stats) {
            canvas.text(Pos2::new(LABEL_X, y), label, LABEL_SIZE, INK);
            y += self.line_height;
        }

        SceneSnapshot {
            first,
            second,
            stats,
            pixels_per_unit: self.pixels_per_unit,
        }
    }

    fn draw_axis(&self, canvas: &mut Canvas) {
        let stroke = Stroke::new(1.0, INK);
        let width = canvas.width();
        let y = self.axis_y;
        canvas.line(Pos2::new(0.0, y), Pos2::new(width, y), stroke);

        let step = self.pixels_per_unit as f32;
        // Unvalidated configs may carry a sub-pixel step or an unbounded width.
        if !(step >= 1.0) || !width.is_finite() {
            return;
        }
        let ticks = ((width / step).floor() as u32).min(MAX_AXIS_TICKS);
        for unit in 0..=ticks {
            let x = unit as f32 * step;
            canvas.line(Pos2::new(x, y), Pos2::new(x, y + TICK_LEN), stroke);
            canvas.text_anchored(
                Pos2::new(x, y + TICK_LEN + 2.0),
                Align2::CENTER_TOP,
                unit.to_string(),
                TICK_LABEL_SIZE,
                INK,
            );
        }
    }

    fn draw_interval(&self, canvas: &mut Canvas, p: &Point, q: &Point) {
        let h = self.half_height;
        let (px, py) = (p.x() as f32, p.y() as f32);
        let (qx, qy) = (q.x() as f32, q.y() as f32);
        canvas.fill_rect(Pos2::new(px, py - h), Pos2::new(qx, py + h), BAND_FILL);
        self.draw_bracket(canvas, px, py, px < qx);
        self.draw_bracket(canvas, qx, qy, px >= qx);
    }

    /// `[` when `opens_right`, `]` otherwise.
    fn draw_bracket(&self, canvas: &mut Canvas, x: f32, y: f32, opens_right: bool) {
        let h = self.half_height;
        let tip = if opens_right { BRACKET_LEN } else { -BRACKET_LEN };
        canvas.polyline(
            vec![
                Pos2::new(x + tip, y - h),
                Pos2::new(x, y - h),
                Pos2::new(x, y + h),
                Pos2::new(x + tip, y + h),
            ],
            Stroke::new(1.0, INK),
        );
    }
}
