use super::{roots, Point2, Vector2, TOLERANCE};

fn lerp(a: Point2, b: Point2, t: f64) -> Point2 {
    a + (b - a) * t
}

/// Evaluates a Bezier curve of arbitrary degree at parameter `t` using
/// de Casteljau's algorithm.
#[must_use]
pub fn eval(points: &[Point2], t: f64) -> Point2 {
    debug_assert!(!points.is_empty());
    let mut work = points.to_vec();
    for level in (1..work.len()).rev() {
        for i in 0..level {
            work[i] = lerp(work[i], work[i + 1], t);
        }
    }
    work[0]
}

/// Splits a Bezier curve at parameter `t`, returning the control points of
/// the left and right halves.
///
/// Both halves have the same degree as the input curve.
#[must_use]
pub fn split(points: &[Point2], t: f64) -> (Vec<Point2>, Vec<Point2>) {
    debug_assert!(!points.is_empty());
    let n = points.len();
    let mut work = points.to_vec();
    let mut left = Vec::with_capacity(n);
    let mut right = Vec::with_capacity(n);
    left.push(work[0]);
    right.push(work[n - 1]);
    for level in (1..n).rev() {
        for i in 0..level {
            work[i] = lerp(work[i], work[i + 1], t);
        }
        left.push(work[0]);
        right.push(work[level - 1]);
    }
    right.reverse();
    (left, right)
}

/// Control points of the sub-curve spanning `[t1, t2]`.
///
/// Requires `t1 <= t2`. Endpoint parameters are special-cased so that
/// `sub_curve(points, 0.0, 1.0)` reproduces the input exactly.
#[must_use]
pub fn sub_curve(points: &[Point2], t1: f64, t2: f64) -> Vec<Point2> {
    debug_assert!(t1 <= t2);
    if t1 <= 0.0 && t2 >= 1.0 {
        return points.to_vec();
    }
    if t1 <= 0.0 {
        return split(points, t2).0;
    }
    if t2 >= 1.0 {
        return split(points, t1).1;
    }
    let right = split(points, t1).1;
    split(&right, (t2 - t1) / (1.0 - t1)).0
}

/// Control values of the derivative curve (hodograph).
#[must_use]
pub fn hodograph(points: &[Point2]) -> Vec<Vector2> {
    debug_assert!(points.len() >= 2);
    #[allow(clippy::cast_precision_loss)]
    let degree = (points.len() - 1) as f64;
    points.windows(2).map(|w| (w[1] - w[0]) * degree).collect()
}

/// Arc length of a Bezier curve, computed by adaptive subdivision.
///
/// Each piece is estimated from its chord and control-polygon lengths
/// (Gravesen's bound) and subdivided until the two agree.
#[must_use]
pub fn arc_length(points: &[Point2]) -> f64 {
    fn recurse(points: &[Point2], depth: u32) -> f64 {
        let chord = (points[points.len() - 1] - points[0]).norm();
        let poly: f64 = points.windows(2).map(|w| (w[1] - w[0]).norm()).sum();
        if poly - chord < 1e-9 || depth >= 24 {
            return (2.0 * chord + poly) / 3.0;
        }
        let (left, right) = split(points, 0.5);
        recurse(&left, depth + 1) + recurse(&right, depth + 1)
    }
    if points.len() < 2 {
        return 0.0;
    }
    recurse(points, 0)
}

/// Interior parameters in `(0, 1)` where the x or y component of the
/// derivative vanishes.
///
/// These are the candidate points for axis-aligned bounding-box extrema.
#[must_use]
pub fn extrema(points: &[Point2]) -> Vec<f64> {
    let d = hodograph(points);
    let mut result = Vec::new();
    for axis in 0..2 {
        match d.len() {
            // Quadratic curve: linear derivative in Bernstein form.
            2 => {
                let (a0, a1) = (d[0][axis], d[1][axis]);
                if (a0 - a1).abs() > TOLERANCE {
                    result.push(a0 / (a0 - a1));
                }
            }
            // Cubic curve: quadratic derivative.
            3 => {
                let (d0, d1, d2) = (d[0][axis], d[1][axis], d[2][axis]);
                let a = d0 - 2.0 * d1 + d2;
                let b = 2.0 * (d1 - d0);
                result.extend(roots::quadratic(a, b, d0));
            }
            _ => {}
        }
    }
    result.retain(|t| *t > 0.0 && *t < 1.0);
    result.sort_by(f64::total_cmp);
    result
}

/// Curve parameters where a quadratic or cubic curve meets the line segment
/// from `p1` to `p2`.
///
/// The control points are rotated so the segment lies on the x axis; the
/// intersections are then the roots of the aligned curve's y polynomial,
/// filtered to points inside the segment's bounds.
#[must_use]
pub fn line_intersections(points: &[Point2], p1: Point2, p2: Point2) -> Vec<f64> {
    let dir = p2 - p1;
    if dir.norm() < TOLERANCE {
        return Vec::new();
    }
    let angle = dir.y.atan2(dir.x);
    let (sa, ca) = angle.sin_cos();
    let ys: Vec<f64> = points
        .iter()
        .map(|p| (p.y - p1.y) * ca - (p.x - p1.x) * sa)
        .collect();

    let ts = match ys.len() {
        3 => {
            let a = ys[0] - 2.0 * ys[1] + ys[2];
            let b = 2.0 * (ys[1] - ys[0]);
            roots::quadratic(a, b, ys[0])
        }
        4 => {
            let a = -ys[0] + 3.0 * ys[1] - 3.0 * ys[2] + ys[3];
            let b = 3.0 * ys[0] - 6.0 * ys[1] + 3.0 * ys[2];
            let c = -3.0 * ys[0] + 3.0 * ys[1];
            roots::cubic(a, b, c, ys[0])
        }
        _ => Vec::new(),
    };

    let eps = 1e-9;
    let (min_x, max_x) = (p1.x.min(p2.x) - eps, p1.x.max(p2.x) + eps);
    let (min_y, max_y) = (p1.y.min(p2.y) - eps, p1.y.max(p2.y) + eps);
    let mut result: Vec<f64> = ts
        .into_iter()
        .filter(|t| *t >= -eps && *t <= 1.0 + eps)
        .map(|t| t.clamp(0.0, 1.0))
        .filter(|t| {
            let p = eval(points, *t);
            p.x >= min_x && p.x <= max_x && p.y >= min_y && p.y <= max_y
        })
        .collect();
    result.sort_by(f64::total_cmp);
    result.dedup_by(|a, b| (*a - *b).abs() < TOLERANCE);
    result
}
