use std::sync::OnceLock;

use super::{Calculator, LineCalculator, PointCalculator};
use crate::command::{CommandBuilder, PathCommand, SvgChar};
use crate::error::{CalculatorError, Result};
use crate::geometry::{BoundingBox, Line, ProjectionResult};
use crate::math::{bezier_2d, Point2};

/// Convergence threshold for the arc-length parameter search.
const SEARCH_EPSILON: f64 = 0.001;

/// Smallest step exponent tried before the search gives up.
const SEARCH_MAX_DEPTH: i32 = -100;

/// Quadratic or cubic Bezier segment, parameterized by three or four
/// control points.
///
/// Arc length and bounding box are computed lazily and cached for the
/// lifetime of the instance; every operation that changes geometry
/// constructs a new calculator instead of mutating this one.
#[derive(Debug, Clone)]
pub struct BezierCalculator {
    id: String,
    svg_char: SvgChar,
    points: Vec<Point2>,
    length: OnceLock<f64>,
    bbox: OnceLock<BoundingBox>,
}

impl BezierCalculator {
    /// Creates a new Bezier calculator from three or four control points.
    #[must_use]
    pub fn new(id: String, svg_char: SvgChar, points: Vec<Point2>) -> Self {
        debug_assert!(points.len() == 3 || points.len() == 4);
        Self {
            id,
            svg_char,
            points,
            length: OnceLock::new(),
            bbox: OnceLock::new(),
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

    /// Arc length of the curve, computed once and cached.
    #[must_use]
    pub fn path_length(&self) -> f64 {
        *self
            .length
            .get_or_init(|| bezier_2d::arc_length(&self.points))
    }

    /// Nearest point on the curve to `point`.
    ///
    /// A coarse parameter scan is refined around the best sample until the
    /// bracket collapses.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn project(&self, point: &Point2) -> ProjectionResult {
        const COARSE: usize = 128;
        const FINE: usize = 16;

        let mut best_t = 0.0;
        let mut best_d2 = f64::INFINITY;
        for i in 0..=COARSE {
            let t = i as f64 / COARSE as f64;
            let d2 = (bezier_2d::eval(&self.points, t) - point).norm_squared();
            if d2 < best_d2 {
                best_d2 = d2;
                best_t = t;
            }
        }

        let mut span = 1.0 / COARSE as f64;
        while span > 1e-8 {
            let lo = (best_t - span).max(0.0);
            let hi = (best_t + span).min(1.0);
            for i in 0..=FINE {
                let t = lo + (hi - lo) * i as f64 / FINE as f64;
                let d2 = (bezier_2d::eval(&self.points, t) - point).norm_squared();
                if d2 < best_d2 {
                    best_d2 = d2;
                    best_t = t;
                }
            }
            span /= 8.0;
        }

        let p = bezier_2d::eval(&self.points, best_t);
        ProjectionResult {
            x: p.x,
            y: p.y,
            t: best_t,
            d: best_d2.sqrt(),
        }
    }

    /// Sub-curve between `t1` and `t2` via de Casteljau subdivision.
    ///
    /// `t1 == t2` collapses the curve to a point calculator. If the
    /// subdivided control points reduce to exactly two distinct points the
    /// result is demoted to a line calculator, keeping the representation
    /// minimal.
    #[must_use]
    pub fn split(&self, t1: f64, t2: f64) -> Calculator {
        debug_assert!(t1 <= t2);
        if t1 == t2 {
            return Calculator::Point(PointCalculator::new(
                self.id.clone(),
                self.svg_char,
                bezier_2d::eval(&self.points, t1),
            ));
        }
        let points = bezier_2d::sub_curve(&self.points, t1, t2);
        // Exact-equality dedup, matching the point equality invariant.
        let mut unique: Vec<Point2> = Vec::with_capacity(points.len());
        for p in &points {
            if !unique.contains(p) {
                unique.push(*p);
            }
        }
        if unique.len() == 2 {
            return Calculator::Line(LineCalculator::new(
                self.id.clone(),
                self.svg_char,
                points[0],
                points[points.len() - 1],
            ));
        }
        Calculator::Bezier(Self::new(self.id.clone(), self.svg_char, points))
    }

    /// Converts to the requested curve kind.
    ///
    /// Converting to the curve's own kind is a copy. Quadratic to cubic is
    /// the exact algebraic elevation
    /// `C1 = P0 + 2/3·(P1 − P0)`, `C2 = P2 + 2/3·(P1 − P2)`.
    ///
    /// # Errors
    ///
    /// Returns an error for any other target: lowering a cubic or re-tagging
    /// a curve as a non-curve would discard geometry.
    pub fn convert(&self, to: SvgChar) -> Result<Calculator> {
        if to == self.svg_char {
            return Ok(Calculator::Bezier(Self::new(
                self.id.clone(),
                self.svg_char,
                self.points.clone(),
            )));
        }
        if self.svg_char == SvgChar::Quadratic && to == SvgChar::Cubic {
            let (q0, q1, q2) = (self.points[0], self.points[1], self.points[2]);
            let c1 = q0 + (q1 - q0) * (2.0 / 3.0);
            let c2 = q2 + (q1 - q2) * (2.0 / 3.0);
            return Ok(Calculator::Bezier(Self::new(
                self.id.clone(),
                to,
                vec![q0, c1, c2, q2],
            )));
        }
        Err(CalculatorError::UnsupportedConversion {
            from: self.svg_char,
            to,
        }
        .into())
    }

    /// Curve parameter whose split point divides the arc length in the
    /// ratio `distance_ratio : 1 - distance_ratio`.
    ///
    /// Runs a bounded binary bias-search: starting at `t = distance_ratio`,
    /// the step size is halved every round while `t` moves toward zeroing
    /// the arc-length imbalance. If the iteration budget is exhausted the
    /// search degrades gracefully, logging the segment and returning the
    /// unrefined input; near-zero-length curves are expected inputs during
    /// interactive editing.
    #[must_use]
    pub fn find_time_by_distance(&self, distance_ratio: f64) -> f64 {
        if distance_ratio == 0.0 || distance_ratio == 1.0 {
            return distance_ratio;
        }

        let low_to_high_ratio = distance_ratio / (1.0 - distance_ratio);
        let mut t = distance_ratio;
        let mut step = -2;
        while step > SEARCH_MAX_DEPTH {
            let (left, right) = bezier_2d::split(&self.points, t);
            let low = bezier_2d::arc_length(&left);
            let high = bezier_2d::arc_length(&right);
            let diff = low - low_to_high_ratio * high;
            if diff.abs() < SEARCH_EPSILON {
                // Found a satisfactory split parameter.
                break;
            }
            // Jump half the previous step in the direction of the bias.
            step -= 1;
            let direction = if diff > 0.0 { -1.0 } else { 1.0 };
            t += direction * 2f64.powi(step);
        }

        if step == SEARCH_MAX_DEPTH {
            tracing::warn!(
                svg_char = %self.svg_char,
                points = ?self.points,
                "arc-length search did not converge on a degenerate curve"
            );
            return distance_ratio;
        }

        t
    }

    /// Materializes the control points as a curve command.
    ///
    /// # Errors
    ///
    /// Returns an error if the segment is not tagged as a quadratic or
    /// cubic command; this guards against stale conversions.
    pub fn to_command(&self) -> Result<PathCommand> {
        if !self.svg_char.is_curve() {
            return Err(CalculatorError::InvalidCommandKind(self.svg_char).into());
        }
        CommandBuilder::new(self.svg_char, self.points.clone())
            .id(self.id.clone())
            .build()
    }

    /// Axis-aligned box enclosing the curve, including interior extrema.
    /// Computed once and cached.
    #[must_use]
    pub fn bounding_box(&self) -> BoundingBox {
        *self.bbox.get_or_init(|| {
            let mut corners = vec![self.points[0], self.points[self.points.len() - 1]];
            for t in bezier_2d::extrema(&self.points) {
                corners.push(bezier_2d::eval(&self.points, t));
            }
            BoundingBox::from_points(&corners)
        })
    }

    /// Curve parameters where the curve crosses `line`.
    ///
    /// # Errors
    ///
    /// Infallible for curve segments; the result type matches the shared
    /// calculator contract.
    pub fn intersects(&self, line: &Line) -> Result<Vec<f64>> {
        Ok(bezier_2d::line_intersections(
            &self.points,
            line.p1,
            line.p2,
        ))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-9;

    fn arch() -> BezierCalculator {
        BezierCalculator::new(
            "c0".to_string(),
            SvgChar::Cubic,
            vec![
                Point2::new(0.0, 0.0),
                Point2::new(0.0, 1.0),
                Point2::new(1.0, 1.0),
                Point2::new(1.0, 0.0),
            ],
        )
    }

    fn parabola() -> BezierCalculator {
        BezierCalculator::new(
            "q0".to_string(),
            SvgChar::Quadratic,
            vec![
                Point2::new(0.0, 0.0),
                Point2::new(1.0, 2.0),
                Point2::new(2.0, 0.0),
            ],
        )
    }

    #[test]
    fn path_length_is_stable_across_calls() {
        let c = arch();
        let first = c.path_length();
        assert!(first > 1.0 && first < 3.0, "length={first}");
        assert!((c.path_length() - first).abs() < TOL);
    }

    #[test]
    fn project_finds_apex() {
        // The parabola peaks at (1, 1); a query straight above it projects
        // onto the apex.
        let proj = parabola().project(&Point2::new(1.0, 3.0));
        assert!((proj.x - 1.0).abs() < 1e-6, "proj={proj:?}");
        assert!((proj.y - 1.0).abs() < 1e-6, "proj={proj:?}");
        assert!((proj.t - 0.5).abs() < 1e-6, "proj={proj:?}");
        assert!((proj.d - 2.0).abs() < 1e-6, "proj={proj:?}");
    }

    #[test]
    fn split_keeps_curve_kind() {
        let sub = arch().split(0.25, 0.75);
        let Calculator::Bezier(sub) = sub else {
            panic!("expected a curve, got {sub:?}");
        };
        assert_eq!(sub.svg_char(), SvgChar::Cubic);
        assert_eq!(sub.points().len(), 4);
    }

    #[test]
    fn split_demotes_collinear_duplicates_to_line() {
        // All control points collapse onto two distinct corners.
        let degenerate = BezierCalculator::new(
            "c1".to_string(),
            SvgChar::Cubic,
            vec![
                Point2::new(0.0, 0.0),
                Point2::new(0.0, 0.0),
                Point2::new(1.0, 1.0),
                Point2::new(1.0, 1.0),
            ],
        );
        let sub = degenerate.split(0.0, 1.0);
        let Calculator::Line(sub) = sub else {
            panic!("expected a line, got {sub:?}");
        };
        assert_eq!(sub.svg_char(), SvgChar::Cubic);
        assert_eq!(sub.points(), &[Point2::new(0.0, 0.0), Point2::new(1.0, 1.0)]);
    }

    #[test]
    fn convert_to_own_kind_is_a_copy() {
        let copy = parabola().convert(SvgChar::Quadratic).unwrap();
        let Calculator::Bezier(copy) = copy else {
            panic!("expected a curve");
        };
        assert_eq!(copy.points(), parabola().points());
    }

    #[test]
    fn lowering_a_cubic_is_rejected() {
        assert!(arch().convert(SvgChar::Quadratic).is_err());
        assert!(arch().convert(SvgChar::Line).is_err());
    }

    #[test]
    fn curve_command_round_trip() {
        let cmd = arch().to_command().unwrap();
        assert_eq!(cmd.svg_char(), SvgChar::Cubic);
        assert_eq!(cmd.points(), arch().points());
        assert_eq!(cmd.id(), "c0");
    }

    #[test]
    fn move_tagged_curve_cannot_be_materialized() {
        let stale = BezierCalculator::new(
            "c2".to_string(),
            SvgChar::Move,
            arch().points().to_vec(),
        );
        assert!(stale.to_command().is_err());
    }

    #[test]
    fn bounding_box_includes_interior_extrema() {
        // Endpoints alone span y in [0, 0]; the arch rises to y = 0.75.
        let bbox = arch().bounding_box();
        assert!(bbox.x.min.abs() < TOL);
        assert!((bbox.x.max - 1.0).abs() < TOL);
        assert!(bbox.y.min.abs() < TOL);
        assert!((bbox.y.max - 0.75).abs() < TOL);
    }

    #[test]
    fn intersects_vertical_line_at_midpoint() {
        let ts = arch()
            .intersects(&Line {
                p1: Point2::new(0.5, -1.0),
                p2: Point2::new(0.5, 2.0),
            })
            .unwrap();
        assert_eq!(ts.len(), 1, "ts={ts:?}");
        assert!((ts[0] - 0.5).abs() < 1e-6);
    }

    #[test]
    fn intersects_distant_line_is_empty() {
        let ts = arch()
            .intersects(&Line {
                p1: Point2::new(5.0, -1.0),
                p2: Point2::new(5.0, 2.0),
            })
            .unwrap();
        assert!(ts.is_empty());
    }
}
