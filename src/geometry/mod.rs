pub mod calculator;

pub use calculator::{BezierCalculator, Calculator, LineCalculator, PointCalculator};

use crate::math::Point2;

/// Inclusive range of coordinate values along one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    /// Lower bound of the range.
    pub min: f64,
    /// Upper bound of the range.
    pub max: f64,
}

impl Interval {
    /// Creates a new interval. `min` must not exceed `max`.
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        debug_assert!(min <= max);
        Self { min, max }
    }

    /// Returns whether `value` lies within the interval, bounds included.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }
}

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Extent along the x axis.
    pub x: Interval,
    /// Extent along the y axis.
    pub y: Interval,
}

impl BoundingBox {
    /// Smallest box enclosing all of `points`. Requires a non-empty slice.
    #[must_use]
    pub fn from_points(points: &[Point2]) -> Self {
        debug_assert!(!points.is_empty());
        let (mut min_x, mut max_x) = (points[0].x, points[0].x);
        let (mut min_y, mut max_y) = (points[0].y, points[0].y);
        for p in &points[1..] {
            min_x = min_x.min(p.x);
            max_x = max_x.max(p.x);
            min_y = min_y.min(p.y);
            max_y = max_y.max(p.y);
        }
        Self {
            x: Interval::new(min_x, max_x),
            y: Interval::new(min_y, max_y),
        }
    }

    /// Returns whether `point` lies within the box, edges included.
    #[must_use]
    pub fn contains(&self, point: &Point2) -> bool {
        self.x.contains(point.x) && self.y.contains(point.y)
    }
}

/// A line segment, used both as a segment representation and as an
/// intersection query argument.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    /// Start point of the segment.
    pub p1: Point2,
    /// End point of the segment.
    pub p2: Point2,
}

/// Nearest point on a segment to a query point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionResult {
    /// X coordinate of the projected point.
    pub x: f64,
    /// Y coordinate of the projected point.
    pub y: f64,
    /// Segment parameter of the projected point, in `[0, 1]`.
    pub t: f64,
    /// Distance from the query point to the projected point.
    pub d: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interval_contains_bounds() {
        let i = Interval::new(1.0, 2.0);
        assert!(i.contains(1.0));
        assert!(i.contains(2.0));
        assert!(i.contains(1.5));
        assert!(!i.contains(0.999));
    }

    #[test]
    fn bounding_box_from_points() {
        let b = BoundingBox::from_points(&[
            Point2::new(1.0, 4.0),
            Point2::new(-2.0, 0.5),
            Point2::new(3.0, 2.0),
        ]);
        assert_eq!(b.x, Interval::new(-2.0, 3.0));
        assert_eq!(b.y, Interval::new(0.5, 4.0));
        assert!(b.contains(&Point2::new(0.0, 1.0)));
        assert!(!b.contains(&Point2::new(0.0, 5.0)));
    }

    #[test]
    fn degenerate_bounding_box() {
        let p = Point2::new(2.0, 3.0);
        let b = BoundingBox::from_points(std::slice::from_ref(&p));
        assert!(b.contains(&p));
        assert!(!b.contains(&Point2::new(2.0, 3.0001)));
    }
}
