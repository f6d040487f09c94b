/// Projects point `(px, py)` onto the line segment from `(ax, ay)` to
/// `(bx, by)`.
///
/// Returns `(x, y, t, d)`: the closest point on the segment, its parameter
/// clamped to `[0, 1]`, and the distance from the query point.
#[must_use]
pub fn project_onto_segment(
    px: f64,
    py: f64,
    ax: f64,
    ay: f64,
    bx: f64,
    by: f64,
) -> (f64, f64, f64, f64) {
    let dx = bx - ax;
    let dy = by - ay;
    let len_sq = dx * dx + dy * dy;

    if len_sq < 1e-20 {
        // Degenerate segment (zero length).
        let d = ((px - ax).powi(2) + (py - ay).powi(2)).sqrt();
        return (ax, ay, 0.0, d);
    }

    // Project point onto the infinite line, clamp to [0, 1].
    let t = ((px - ax) * dx + (py - ay) * dy) / len_sq;
    let t = t.clamp(0.0, 1.0);

    let closest_x = ax + t * dx;
    let closest_y = ay + t * dy;
    let d = ((px - closest_x).powi(2) + (py - closest_y).powi(2)).sqrt();

    (closest_x, closest_y, t, d)
}
