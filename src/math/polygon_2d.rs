use super::intersect_2d::{on_segment, segments_intersect};
use super::winding::{winding_order, Winding};
use super::Point2;

/// Drops the closing duplicate of a polygon path, if present.
fn ring(points: &[Point2]) -> &[Point2] {
    match (points.first(), points.last()) {
        (Some(first), Some(last)) if points.len() > 1 && first == last => {
            &points[..points.len() - 1]
        }
        _ => points,
    }
}

/// Ray-cast point-in-polygon test.
///
/// Casts a horizontal ray from `p` to just past the polygon's maximum `x`
/// and counts edge crossings; an odd count means inside. A crossing whose
/// edge is colinear with `p` resolves to whether `p` lies on that edge.
/// Accepts open or closed vertex paths.
#[must_use]
pub fn point_in_polygon(p: &Point2, polygon: &[Point2]) -> bool {
    let ring = ring(polygon);
    if ring.len() < 3 {
        return false;
    }

    let max_x = ring.iter().fold(f64::NEG_INFINITY, |m, q| m.max(q.x));
    let far = Point2::new(max_x + 10.0, p.y);

    let mut crossings = 0u32;
    for i in 0..ring.len() {
        let from = ring[i];
        let to = ring[(i + 1) % ring.len()];
        if !segments_intersect(&from, &to, p, &far) {
            continue;
        }
        if winding_order(&[from, *p, to]) == Winding::Colinear {
            return on_segment(&from, p, &to);
        }
        crossings += 1;
    }
    crossings % 2 == 1
}

/// True iff `p` lies on one of the polygon's edges.
#[must_use]
pub fn point_on_boundary(p: &Point2, polygon: &[Point2]) -> bool {
    let ring = ring(polygon);
    for i in 0..ring.len() {
        let from = ring[i];
        let to = ring[(i + 1) % ring.len()];
        if winding_order(&[from, to, *p]) == Winding::Colinear && on_segment(&from, p, &to) {
            return true;
        }
    }
    false
}

/// Area of a closed polygon path (first point repeated at the end),
/// reported as a non-negative magnitude.
///
/// Each segment contributes `((y1 + y2) / 2) * (x2 - x1)`; the sum is kept
/// as-is for clockwise paths, negated for counter-clockwise ones, and zero
/// for colinear ones.
#[must_use]
pub fn polygon_area(points: &[Point2]) -> f64 {
    let mut sum = 0.0;
    for w in points.windows(2) {
        let (p, q) = (w[0], w[1]);
        sum += ((p.y + q.y) / 2.0) * (q.x - p.x);
    }
    match winding_order(points) {
        Winding::Clockwise => sum,
        Winding::CounterClockwise => -sum,
        Winding::Colinear => 0.0,
    }
}
