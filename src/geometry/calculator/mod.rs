mod bezier;
mod line;
mod point;

pub use bezier::BezierCalculator;
pub use line::LineCalculator;
pub use point::PointCalculator;

use crate::command::{PathCommand, SvgChar};
use crate::error::{CalculatorError, Result};
use crate::geometry::{BoundingBox, Line, ProjectionResult};
use crate::math::Point2;

/// One path segment's geometry plus its measurement and subdivision
/// operations.
///
/// A closed set of variants, one per path-command kind. Every operation
/// either returns a plain value or constructs a new calculator; instances
/// are immutable once built, so derived quantities can be cached safely.
#[derive(Debug, Clone)]
pub enum Calculator {
    /// Degenerate zero-length segment.
    Point(PointCalculator),
    /// Straight segment between two points.
    Line(LineCalculator),
    /// Quadratic or cubic curve.
    Bezier(BezierCalculator),
}

impl Calculator {
    /// Creates the calculator variant matching the number of control
    /// points: one for a point, two for a line, three or four for a curve.
    ///
    /// # Errors
    ///
    /// Returns an error for any other point count.
    pub fn from_points(
        id: impl Into<String>,
        svg_char: SvgChar,
        points: &[Point2],
    ) -> Result<Self> {
        let id = id.into();
        match points.len() {
            1 => Ok(Self::Point(PointCalculator::new(id, svg_char, points[0]))),
            2 => Ok(Self::Line(LineCalculator::new(
                id, svg_char, points[0], points[1],
            ))),
            3 | 4 => Ok(Self::Bezier(BezierCalculator::new(
                id,
                svg_char,
                points.to_vec(),
            ))),
            n => Err(CalculatorError::InvalidPointCount(n).into()),
        }
    }

    /// Returns the identifier of the owning command.
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Point(c) => c.id(),
            Self::Line(c) => c.id(),
            Self::Bezier(c) => c.id(),
        }
    }

    /// Returns the command kind of the segment.
    #[must_use]
    pub fn svg_char(&self) -> SvgChar {
        match self {
            Self::Point(c) => c.svg_char(),
            Self::Line(c) => c.svg_char(),
            Self::Bezier(c) => c.svg_char(),
        }
    }

    /// Returns the control points of the segment.
    #[must_use]
    pub fn points(&self) -> &[Point2] {
        match self {
            Self::Point(c) => c.points(),
            Self::Line(c) => c.points(),
            Self::Bezier(c) => c.points(),
        }
    }

    /// Total arc length of the segment. Memoized on curve variants.
    #[must_use]
    pub fn path_length(&self) -> f64 {
        match self {
            Self::Point(c) => c.path_length(),
            Self::Line(c) => c.path_length(),
            Self::Bezier(c) => c.path_length(),
        }
    }

    /// Nearest point on the segment to `point`, with its parameter and
    /// distance.
    #[must_use]
    pub fn project(&self, point: &Point2) -> ProjectionResult {
        match self {
            Self::Point(c) => c.project(point),
            Self::Line(c) => c.project(point),
            Self::Bezier(c) => c.project(point),
        }
    }

    /// New calculator for the sub-segment between `t1` and `t2`, both in
    /// `[0, 1]` with `t1 <= t2`.
    ///
    /// `t1 == t2` collapses the segment to a point calculator. A curve
    /// whose subdivided control points reduce to two distinct points is
    /// demoted to a line calculator.
    #[must_use]
    pub fn split(&self, t1: f64, t2: f64) -> Self {
        match self {
            Self::Point(c) => Self::Point(c.split(t1, t2)),
            Self::Line(c) => c.split(t1, t2),
            Self::Bezier(c) => c.split(t1, t2),
        }
    }

    /// New calculator of the requested kind holding equivalent geometry.
    ///
    /// # Errors
    ///
    /// Returns an error if the segment cannot represent the target kind.
    pub fn convert(&self, to: SvgChar) -> Result<Self> {
        match self {
            Self::Point(c) => c.convert(to).map(Self::Point),
            Self::Line(c) => c.convert(to),
            Self::Bezier(c) => c.convert(to),
        }
    }

    /// Curve parameter whose split point lies at the given ratio of arc
    /// length from the start of the segment.
    ///
    /// Point and line segments are already arc-length parameterized, so the
    /// ratio is returned unchanged; curves run a bounded numerical search
    /// that degrades gracefully on degenerate input.
    #[must_use]
    pub fn find_time_by_distance(&self, distance_ratio: f64) -> f64 {
        match self {
            Self::Point(_) | Self::Line(_) => distance_ratio,
            Self::Bezier(c) => c.find_time_by_distance(distance_ratio),
        }
    }

    /// Materializes the segment's point sequence as a persisted command.
    ///
    /// # Errors
    ///
    /// Returns an error if the segment's kind cannot be built into a
    /// command, such as a curve variant tagged with a non-curve kind.
    pub fn to_command(&self) -> Result<PathCommand> {
        match self {
            Self::Point(c) => c.to_command(),
            Self::Line(c) => c.to_command(),
            Self::Bezier(c) => c.to_command(),
        }
    }

    /// Axis-aligned box enclosing the segment, including interior curve
    /// extrema. Memoized on curve variants.
    #[must_use]
    pub fn bounding_box(&self) -> BoundingBox {
        match self {
            Self::Point(c) => c.bounding_box(),
            Self::Line(c) => c.bounding_box(),
            Self::Bezier(c) => c.bounding_box(),
        }
    }

    /// Parameters on this segment where it crosses `line`, empty if none.
    ///
    /// # Errors
    ///
    /// Returns an error for degenerate point segments.
    pub fn intersects(&self, line: &Line) -> Result<Vec<f64>> {
        match self {
            Self::Point(c) => c.intersects(line),
            Self::Line(c) => c.intersects(line),
            Self::Bezier(c) => c.intersects(line),
        }
    }
}
