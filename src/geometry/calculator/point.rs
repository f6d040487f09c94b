use crate::command::{CommandBuilder, PathCommand, SvgChar};
use crate::error::{CalculatorError, Result};
use crate::geometry::{BoundingBox, Line, ProjectionResult};
use crate::math::Point2;

/// Degenerate zero-length segment holding a single point.
///
/// Produced when a curve is collapsed via `split(t, t)`; the original
/// command kind is kept so the segment can still be materialized.
#[derive(Debug, Clone)]
pub struct PointCalculator {
    id: String,
    svg_char: SvgChar,
    point: Point2,
}

impl PointCalculator {
    /// Creates a new point calculator.
    #[must_use]
    pub fn new(id: String, svg_char: SvgChar, point: Point2) -> Self {
        Self {
            id,
            svg_char,
            point,
        }
    }

    /// Returns the identifier of the owning command.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the command kind this segment was collapsed from.
    #[must_use]
    pub fn svg_char(&self) -> SvgChar {
        self.svg_char
    }

    /// Returns the control points of the segment.
    #[must_use]
    pub fn points(&self) -> &[Point2] {
        std::slice::from_ref(&self.point)
    }

    /// Always zero.
    #[must_use]
    pub fn path_length(&self) -> f64 {
        0.0
    }

    /// Projects onto the single point: `t = 0`, `d` is the plain distance.
    #[must_use]
    pub fn project(&self, point: &Point2) -> ProjectionResult {
        ProjectionResult {
            x: self.point.x,
            y: self.point.y,
            t: 0.0,
            d: (point - self.point).norm(),
        }
    }

    /// Splitting a point yields the same point at any parameter pair.
    #[must_use]
    pub fn split(&self, _t1: f64, _t2: f64) -> Self {
        self.clone()
    }

    /// Re-tags the point as a move or line command.
    ///
    /// # Errors
    ///
    /// Returns an error for curve, close-path, and arc targets: a single
    /// point carries no geometry that could represent them.
    pub fn convert(&self, to: SvgChar) -> Result<Self> {
        match to {
            SvgChar::Move | SvgChar::Line => Ok(Self {
                id: self.id.clone(),
                svg_char: to,
                point: self.point,
            }),
            _ => Err(CalculatorError::UnsupportedConversion {
                from: self.svg_char,
                to,
            }
            .into()),
        }
    }

    /// Materializes the point as a command of its kind, repeating the point
    /// to satisfy the command's arity.
    ///
    /// # Errors
    ///
    /// Returns an error if the kind cannot be built into a command.
    pub fn to_command(&self) -> Result<PathCommand> {
        let Some(count) = self.svg_char.stored_point_count() else {
            return Err(CalculatorError::InvalidCommandKind(self.svg_char).into());
        };
        CommandBuilder::new(self.svg_char, vec![self.point; count])
            .id(self.id.clone())
            .build()
    }

    /// Degenerate box spanning the single point.
    #[must_use]
    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::from_points(self.points())
    }

    /// Intersection queries against a degenerate segment are rejected.
    ///
    /// # Errors
    ///
    /// Always returns a degenerate-segment error.
    pub fn intersects(&self, _line: &Line) -> Result<Vec<f64>> {
        Err(CalculatorError::Degenerate("point segment has no line intersections".into()).into())
    }
}
