//! Movable points and the ordered collection a [`DragSurface`](super::surface::DragSurface) owns.

use std::ops::Index;

/// Movement permissions for a [`Point`].
///
/// Both axes are movable by default; the interval scene pins `y` so endpoints
/// can only slide along the number line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointOptions {
    pub allow_x_movement: bool,
    pub allow_y_movement: bool,
}

impl Default for PointOptions {
    fn default() -> Self {
        Self {
            allow_x_movement: true,
            allow_y_movement: true,
        }
    }
}

impl PointOptions {
    /// Only horizontal dragging.
    pub fn horizontal() -> Self {
        Self {
            allow_y_movement: false,
            ..Default::default()
        }
    }
}

/// A draggable position in surface-local pixel coordinates.
///
/// Coordinates are read-only from the outside once the point has been handed to
/// a surface; only the surface's pointer handlers move it.
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    x: f64,
    y: f64,
    options: PointOptions,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self::with_options(x, y, PointOptions::default())
    }

    pub fn with_options(x: f64, y: f64, options: PointOptions) -> Self {
        Self { x, y, options }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn options(&self) -> PointOptions {
        self.options
    }

    pub fn distance_to(&self, x: f64, y: f64) -> f64 {
        (self.x - x).hypot(self.y - y)
    }

    /// Move towards `(x, y)` on every axis the options allow.
    pub(crate) fn drag_to(&mut self, x: f64, y: f64) {
        if self.options.allow_x_movement {
            self.x = x;
        }
        if self.options.allow_y_movement {
            self.y = y;
        }
    }
}

/// Handle identifying one point inside one surface.
///
/// Two points with equal coordinates still have distinct ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointId(usize);

impl PointId {
    /// Insertion index inside the owning surface.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Points in insertion order. Iteration order decides nearest-point ties.
#[derive(Debug, Clone, Default)]
pub struct PointSet {
    points: Vec<Point>,
}

impl PointSet {
    pub(crate) fn push(&mut self, point: Point) -> PointId {
        self.points.push(point);
        PointId(self.points.len() - 1)
    }

    pub fn get(&self, id: PointId) -> Option<&Point> {
        self.points.get(id.0)
    }

    pub(crate) fn get_mut(&mut self, id: PointId) -> Option<&mut Point> {
        self.points.get_mut(id.0)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (PointId, &Point)> {
        self.points.iter().enumerate().map(|(i, p)| (PointId(i), p))
    }
}

impl Index<PointId> for PointSet {
    type Output = Point;

    fn index(&self, id: PointId) -> &Point {
        &self.points[id.0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_allow_both_axes() {
        let opts = PointOptions::default();
        assert!(opts.allow_x_movement);
        assert!(opts.allow_y_movement);
    }

    #[test]
    fn drag_respects_pinned_axis() {
        let mut p = Point::with_options(10.0, 30.0, PointOptions::horizontal());
        p.drag_to(55.0, 90.0);
        assert_eq!(p.x(), 55.0);
        assert_eq!(p.y(), 30.0);

        let pinned_x = PointOptions {
            allow_x_movement: false,
            ..Default::default()
        };
        let mut q = Point::with_options(10.0, 30.0, pinned_x);
        q.drag_to(55.0, 90.0);
        assert_eq!(q.x(), 10.0);
        assert_eq!(q.y(), 90.0);
    }

    #[test]
    fn identical_points_get_distinct_ids() {
        let mut set = PointSet::default();
        let a = set.push(Point::new(1.0, 1.0));
        let b = set.push(Point::new(1.0, 1.0));
        assert_ne!(a, b);
        assert_eq!(set[a], set[b]);
        assert_eq!(set.iter().map(|(id, _)| id).collect::<Vec<_>>(), vec![a, b]);
    }
}
