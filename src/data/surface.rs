//! Draggable-point surface.
//!
//! [`DragSurface`] owns a set of [`Point`]s, resolves which point a pointer
//! targets, moves the selected point while dragging and re-renders its
//! [`Canvas`] synchronously after every change. External code hooks into the
//! render pass through after-update listeners, which draw beneath the point
//! markers and can read every point's current position.

use egui::{Color32, Pos2};

use super::canvas::Canvas;
use super::input::PointerEvent;
use super::point::{Point, PointId, PointSet};

/// Default hit-test radius in surface pixels.
pub const DEFAULT_DETECTION_RADIUS: f64 = 20.0;

/// Radius of a drawn point marker.
pub const POINT_RADIUS: f32 = 4.0;

/// Default background tint (`rgba(255, 255, 0, 0.25)`).
pub const DEFAULT_BACKGROUND: Color32 = Color32::from_rgba_premultiplied(64, 64, 0, 64);

const SELECTED_FILL: Color32 = Color32::BLACK;
const POINT_FILL: Color32 = Color32::from_rgba_premultiplied(0, 0, 0, 128);

/// Render-time observer. Receives the canvas and read access to the points.
pub type AfterUpdateListener = Box<dyn FnMut(&mut Canvas, &PointSet)>;

pub struct DragSurface {
    points: PointSet,
    selected: Option<PointId>,
    detection_radius: f64,
    background: Option<Color32>,
    listeners: Vec<AfterUpdateListener>,
    canvas: Canvas,
    renders: u64,
}

impl std::fmt::Debug for DragSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DragSurface")
            .field("points", &self.points)
            .field("selected", &self.selected)
            .field("detection_radius", &self.detection_radius)
            .field("background", &self.background)
            .field("listeners", &self.listeners.len())
            .field("renders", &self.renders)
            .finish()
    }
}

impl DragSurface {
    /// Create an empty surface of `width` x `height` pixels and render it once.
    pub fn new(width: f32, height: f32) -> Self {
        let mut surface = Self {
            points: PointSet::default(),
            selected: None,
            detection_radius: DEFAULT_DETECTION_RADIUS,
            background: Some(DEFAULT_BACKGROUND),
            listeners: Vec::new(),
            canvas: Canvas::new(width, height),
            renders: 0,
        };
        surface.render();
        surface
    }

    // ─────────────────────────────────────────────────────────────────────
    // Configuration
    // ─────────────────────────────────────────────────────────────────────

    pub fn detection_radius(&self) -> f64 {
        self.detection_radius
    }

    pub fn set_detection_radius(&mut self, radius: f64) {
        self.detection_radius = radius;
    }

    pub fn background(&self) -> Option<Color32> {
        self.background
    }

    /// Set or remove the background fill and re-render.
    pub fn set_background(&mut self, background: Option<Color32>) {
        self.background = background;
        self.render();
    }

    /// Append a point and re-render.
    pub fn add_point(&mut self, point: Point) -> PointId {
        let id = self.points.push(point);
        self.render();
        id
    }

    /// Append a listener and re-render so its first output shows immediately.
    pub fn add_after_update_listener<F>(&mut self, listener: F)
    where
        F: FnMut(&mut Canvas, &PointSet) + 'static,
    {
        self.listeners.push(Box::new(listener));
        self.render();
    }

    // ─────────────────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────────────────

    pub fn points(&self) -> &PointSet {
        &self.points
    }

    pub fn point(&self, id: PointId) -> Option<&Point> {
        self.points.get(id)
    }

    pub fn selected(&self) -> Option<PointId> {
        self.selected
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Number of completed render passes.
    pub fn render_count(&self) -> u64 {
        self.renders
    }

    /// Closest point to `(x, y)` if it lies strictly inside the detection radius.
    ///
    /// Equidistant candidates resolve to the one added first.
    pub fn find_nearest_point(&self, x: f64, y: f64) -> Option<PointId> {
        let mut best: Option<(PointId, f64)> = None;
        for (id, point) in self.points.iter() {
            let dist = point.distance_to(x, y);
            // NaN distances never displace a candidate.
            match best {
                Some((_, best_dist)) if !(dist < best_dist) => {}
                _ => best = Some((id, dist)),
            }
        }
        best.filter(|(_, dist)| *dist < self.detection_radius)
            .map(|(id, _)| id)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Pointer handlers (surface-local coordinates)
    // ─────────────────────────────────────────────────────────────────────

    pub fn handle_pointer_down(&mut self, x: f64, y: f64) {
        self.selected = self.find_nearest_point(x, y);
        tracing::debug!(selected = ?self.selected, x, y, "pointer down");
        self.render();
    }

    pub fn handle_pointer_up(&mut self) {
        if let Some(id) = self.selected.take() {
            tracing::debug!(released = ?id, "pointer up");
        }
        self.render();
    }

    pub fn handle_pointer_move(&mut self, x: f64, y: f64) {
        let Some(id) = self.selected else {
            return;
        };
        if let Some(point) = self.points.get_mut(id) {
            point.drag_to(x, y);
        }
        self.render();
    }

    /// Dispatch a normalized pointer event to the matching handler.
    pub fn handle_event(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down(pos) => self.handle_pointer_down(pos.x as f64, pos.y as f64),
            PointerEvent::Move(pos) => self.handle_pointer_move(pos.x as f64, pos.y as f64),
            PointerEvent::Up => self.handle_pointer_up(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Rendering
    // ─────────────────────────────────────────────────────────────────────

    /// Redraw the canvas: background, listeners in order, then point markers.
    pub fn render(&mut self) {
        self.canvas.clear();
        if let Some(bg) = self.background {
            let bounds = self.canvas.bounds();
            self.canvas.fill_rect(bounds.min, bounds.max, bg);
        }

        for listener in self.listeners.iter_mut() {
            listener(&mut self.canvas, &self.points);
        }

        for (id, point) in self.points.iter() {
            let fill = if Some(id) == self.selected {
                SELECTED_FILL
            } else {
                POINT_FILL
            };
            self.canvas.fill_circle(
                Pos2::new(point.x() as f32, point.y() as f32),
                POINT_RADIUS,
                fill,
            );
        }

        self.renders += 1;
        tracing::trace!(render = self.renders, "surface rendered");
    }
}
