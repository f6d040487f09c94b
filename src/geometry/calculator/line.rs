use super::{BezierCalculator, Calculator, PointCalculator};
use crate::command::{CommandBuilder, PathCommand, SvgChar};
use crate::error::{CalculatorError, Result};
use crate::geometry::{BoundingBox, Line, ProjectionResult};
use crate::math::{distance_2d, intersect_2d, Point2};

/// Straight segment between two control points.
#[derive(Debug, Clone)]
pub struct LineCalculator {
    id: String,
    svg_char: SvgChar,
    points: [Point2; 2],
}

impl LineCalculator {
    /// Creates a new line calculator.
    #[must_use]
    pub fn new(id: String, svg_char: SvgChar, p1: Point2, p2: Point2) -> Self {
        Self {
            id,
            svg_char,
            points: [p1, p2],
        }
    }

    /// Returns the identifier of the owning command.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the command kind of the segment.
    #[must_use]
    pub fn svg_char(&self) -> SvgChar {
        self.svg_char
    }

    /// Returns the control points of the segment.
    #[must_use]
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    fn point_at(&self, t: f64) -> Point2 {
        self.points[0] + (self.points[1] - self.points[0]) * t
    }

    /// Euclidean distance between the endpoints.
    #[must_use]
    pub fn path_length(&self) -> f64 {
        (self.points[1] - self.points[0]).norm()
    }

    /// Closed-form nearest point on the segment, clamped to `[0, 1]`.
    #[must_use]
    pub fn project(&self, point: &Point2) -> ProjectionResult {
        let [a, b] = self.points;
        let (x, y, t, d) = distance_2d::project_onto_segment(point.x, point.y, a.x, a.y, b.x, b.y);
        ProjectionResult { x, y, t, d }
    }

    /// Sub-segment between `t1` and `t2`, by linear interpolation of both
    /// endpoints. Collapses to a point calculator when `t1 == t2`.
    #[must_use]
    pub fn split(&self, t1: f64, t2: f64) -> Calculator {
        debug_assert!(t1 <= t2);
        if t1 == t2 {
            return Calculator::Point(PointCalculator::new(
                self.id.clone(),
                self.svg_char,
                self.point_at(t1),
            ));
        }
        Calculator::Line(Self::new(
            self.id.clone(),
            self.svg_char,
            self.point_at(t1),
            self.point_at(t2),
        ))
    }

    /// Converts to the requested kind.
    ///
    /// Move, line, and close-path targets re-tag the two endpoints. Curve
    /// targets produce a Bezier calculator with control points interpolated
    /// along the segment, which is the exact degree elevation of a line.
    ///
    /// # Errors
    ///
    /// Returns an error for arc targets.
    pub fn convert(&self, to: SvgChar) -> Result<Calculator> {
        let [a, b] = self.points;
        match to {
            SvgChar::Move | SvgChar::Line | SvgChar::ClosePath => Ok(Calculator::Line(
                Self::new(self.id.clone(), to, a, b),
            )),
            SvgChar::Quadratic => Ok(Calculator::Bezier(BezierCalculator::new(
                self.id.clone(),
                to,
                vec![a, self.point_at(0.5), b],
            ))),
            SvgChar::Cubic => Ok(Calculator::Bezier(BezierCalculator::new(
                self.id.clone(),
                to,
                vec![a, self.point_at(1.0 / 3.0), self.point_at(2.0 / 3.0), b],
            ))),
            SvgChar::Arc => Err(CalculatorError::UnsupportedConversion {
                from: self.svg_char,
                to,
            }
            .into()),
        }
    }

    /// Materializes the segment as a command of its kind.
    ///
    /// A line demoted from a curve still carries the curve's kind; the
    /// missing control points are synthesized by interpolation so the
    /// command's arity is satisfied.
    ///
    /// # Errors
    ///
    /// Returns an error if the kind cannot be built into a command.
    pub fn to_command(&self) -> Result<PathCommand> {
        let [a, b] = self.points;
        let points = match self.svg_char {
            SvgChar::Move => vec![b],
            SvgChar::Line | SvgChar::ClosePath => vec![a, b],
            SvgChar::Quadratic => vec![a, self.point_at(0.5), b],
            SvgChar::Cubic => vec![a, self.point_at(1.0 / 3.0), self.point_at(2.0 / 3.0), b],
            SvgChar::Arc => {
                return Err(CalculatorError::InvalidCommandKind(self.svg_char).into());
            }
        };
        CommandBuilder::new(self.svg_char, points)
            .id(self.id.clone())
            .build()
    }

    /// Box spanned by the two endpoints.
    #[must_use]
    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::from_points(&self.points)
    }

    /// Parameter on this segment where it crosses `line`, if it does.
    ///
    /// # Errors
    ///
    /// Infallible for line segments; the result type matches the shared
    /// calculator contract.
    pub fn intersects(&self, line: &Line) -> Result<Vec<f64>> {
        let hit = intersect_2d::segment_segment_intersect_2d(
            &self.points[0],
            &self.points[1],
            &line.p1,
            &line.p2,
        );
        Ok(hit.map(|(_, t, _)| vec![t]).unwrap_or_default())
    }
}
