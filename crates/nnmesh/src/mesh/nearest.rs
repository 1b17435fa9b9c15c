use crate::types::Point;

#[inline]
fn dist_sq(a: &Point, b: &Point) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    dx * dx + dy * dy
}

/// Indices of the two points closest to `target`, nearest first.
///
/// Candidates coordinate-equal to `target` are skipped. Returns `None` when
/// fewer than two candidates remain.
pub fn nearest_two_indices(target: &Point, points: &[Point]) -> Option<(usize, usize)> {
    let mut best: Option<usize> = None;
    let mut second: Option<usize> = None;
    let mut d1 = f64::INFINITY;
    let mut d2 = f64::INFINITY;

    for (i, p) in points.iter().enumerate() {
        if p == target {
            continue;
        }
        let d = dist_sq(p, target);
        if d < d1 {
            d2 = d1;
            second = best;
            d1 = d;
            best = Some(i);
        } else if d < d2 {
            d2 = d;
            second = Some(i);
        }
    }

    Some((best?, second?))
}

/// The two points closest to `target` (see `nearest_two_indices`).
pub fn nearest_two(target: &Point, points: &[Point]) -> Option<(Point, Point)> {
    nearest_two_indices(target, points).map(|(i, j)| (points[i], points[j]))
}
