use std::f64::consts::PI;

use super::TOLERANCE;

/// Solves the quadratic equation `a*t² + b*t + c = 0`.
///
/// Returns zero, one, or two real roots. A near-zero leading coefficient
/// falls back to the linear equation `b*t + c = 0`.
#[must_use]
pub fn quadratic(a: f64, b: f64, c: f64) -> Vec<f64> {
    let mut result = Vec::with_capacity(2);
    if a.abs() < TOLERANCE {
        if b.abs() > TOLERANCE {
            result.push(-c / b);
        }
        return result;
    }
    let disc = b * b - 4.0 * a * c;
    if disc.abs() < TOLERANCE {
        result.push(-b / (2.0 * a));
    } else if disc > 0.0 {
        let sq = disc.sqrt();
        // Citardauq form avoids cancellation when b dominates.
        if b >= 0.0 {
            let mul = -b - sq;
            result.push(mul / (2.0 * a));
            result.push(2.0 * c / mul);
        } else {
            let mul = -b + sq;
            result.push(2.0 * c / mul);
            result.push(mul / (2.0 * a));
        }
    }
    result
}

/// Solves the cubic equation `a*t³ + b*t² + c*t + d = 0` via Cardano's
/// method, using the trigonometric form when all three roots are real.
///
/// A near-zero leading coefficient falls back to [`quadratic`].
#[must_use]
pub fn cubic(a: f64, b: f64, c: f64, d: f64) -> Vec<f64> {
    let mut results = Vec::with_capacity(3);
    if a.abs() < TOLERANCE {
        return quadratic(b, c, d);
    }
    if d.abs() < TOLERANCE {
        // t = 0 is a root; deflate to a quadratic.
        results.push(0.0);
        results.extend(quadratic(a, b, c));
        return results;
    }

    fn crt(value: f64) -> f64 {
        if value < 0.0 {
            -(-value).powf(1.0 / 3.0)
        } else {
            value.powf(1.0 / 3.0)
        }
    }

    // Normalize to `t³ + a*t² + b*t + c = 0`.
    let (a, b, c) = (b / a, c / a, d / a);

    // Depress to `t³ + p*t + q = 0`.
    let p = (3.0 * b - a * a) / 3.0;
    let q = ((2.0 * a * a - 9.0 * b) * a + 27.0 * c) / 27.0;
    let p3 = p / 3.0;
    let q2 = q / 2.0;
    let disc = q2 * q2 + p3 * p3 * p3;

    if disc.abs() < TOLERANCE {
        // Repeated root case: two distinct roots.
        let u1 = if q2 < 0.0 { crt(-q2) } else { -crt(q2) };
        results.push(2.0 * u1 - a / 3.0);
        results.push(-u1 - a / 3.0);
    } else if disc > 0.0 {
        // One real root.
        let sd = disc.sqrt();
        results.push(crt(sd - q2) - crt(sd + q2) - a / 3.0);
    } else {
        // Three real roots.
        let r = (-p3 * p3 * p3).sqrt();
        let phi = (-q / (2.0 * r)).clamp(-1.0, 1.0).acos();
        let m = 2.0 * crt(r);
        let a3 = a / 3.0;
        results.push(m * (phi / 3.0).cos() - a3);
        results.push(m * ((phi + 2.0 * PI) / 3.0).cos() - a3);
        results.push(m * ((phi + 4.0 * PI) / 3.0).cos() - a3);
    }

    results
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-9;

    fn sorted(mut roots: Vec<f64>) -> Vec<f64> {
        roots.sort_by(f64::total_cmp);
        roots
    }

    // ── quadratic tests ──

    #[test]
    fn quadratic_two_roots() {
        // (t - 1)(t - 3) = t² - 4t + 3
        let roots = sorted(quadratic(1.0, -4.0, 3.0));
        assert_eq!(roots.len(), 2);
        assert!((roots[0] - 1.0).abs() < TOL, "roots={roots:?}");
        assert!((roots[1] - 3.0).abs() < TOL, "roots={roots:?}");
    }

    #[test]
    fn quadratic_tangent_single_root() {
        // (t - 2)² = t² - 4t + 4
        let roots = quadratic(1.0, -4.0, 4.0);
        assert_eq!(roots.len(), 1);
        assert!((roots[0] - 2.0).abs() < TOL);
    }

    #[test]
    fn quadratic_no_real_roots() {
        let roots = quadratic(1.0, 0.0, 1.0);
        assert!(roots.is_empty());
    }

    #[test]
    fn quadratic_linear_fallback() {
        // 2t - 1 = 0
        let roots = quadratic(0.0, 2.0, -1.0);
        assert_eq!(roots.len(), 1);
        assert!((roots[0] - 0.5).abs() < TOL);
    }

    // ── cubic tests ──

    #[test]
    fn cubic_three_roots() {
        // (t - 1)(t - 2)(t - 3) = t³ - 6t² + 11t - 6
        let roots = sorted(cubic(1.0, -6.0, 11.0, -6.0));
        assert_eq!(roots.len(), 3, "roots={roots:?}");
        assert!((roots[0] - 1.0).abs() < TOL);
        assert!((roots[1] - 2.0).abs() < TOL);
        assert!((roots[2] - 3.0).abs() < TOL);
    }

    #[test]
    fn cubic_one_root() {
        // t³ - 1 has a single real root at t = 1.
        let roots = cubic(1.0, 0.0, 0.0, -1.0);
        assert_eq!(roots.len(), 1);
        assert!((roots[0] - 1.0).abs() < TOL);
    }

    #[test]
    fn cubic_root_at_zero_deflates() {
        // t(t - 1)(t + 1) = t³ - t
        let roots = sorted(cubic(1.0, 0.0, -1.0, 0.0));
        assert_eq!(roots.len(), 3, "roots={roots:?}");
        assert!((roots[0] + 1.0).abs() < TOL);
        assert!(roots[1].abs() < TOL);
        assert!((roots[2] - 1.0).abs() < TOL);
    }

    #[test]
    fn cubic_quadratic_fallback() {
        let roots = sorted(cubic(0.0, 1.0, -4.0, 3.0));
        assert_eq!(roots.len(), 2);
        assert!((roots[0] - 1.0).abs() < TOL);
        assert!((roots[1] - 3.0).abs() < TOL);
    }
}
