use super::winding::{winding_order, Winding};
use super::Point2;

/// True iff `q` lies within the axis-aligned bounding box of `p` and `r`,
/// endpoints included.
///
/// Combined with a colinearity check this is the point-on-segment test.
#[must_use]
pub fn on_segment(p: &Point2, q: &Point2, r: &Point2) -> bool {
    q.x <= p.x.max(r.x) && q.x >= p.x.min(r.x) && q.y <= p.y.max(r.y) && q.y >= p.y.min(r.y)
}

fn orientation(p: &Point2, q: &Point2, r: &Point2) -> Winding {
    winding_order(&[*p, *q, *r])
}

/// Whether segments `(p1, q1)` and `(p2, q2)` intersect.
///
/// The segments intersect when the endpoints of each straddle the other
/// (their orientation triples differ), or when a colinear triple puts one
/// endpoint on the other segment. Touching at an endpoint counts.
#[must_use]
pub fn segments_intersect(p1: &Point2, q1: &Point2, p2: &Point2, q2: &Point2) -> bool {
    let o1 = orientation(p1, q1, p2);
    let o2 = orientation(p1, q1, q2);
    let o3 = orientation(p2, q2, p1);
    let o4 = orientation(p2, q2, q1);

    if o1 != o2 && o3 != o4 {
        return true;
    }
    if o1 == Winding::Colinear && on_segment(p1, p2, q1) {
        return true;
    }
    if o2 == Winding::Colinear && on_segment(p1, q2, q1) {
        return true;
    }
    if o3 == Winding::Colinear && on_segment(p2, p1, q2) {
        return true;
    }
    o4 == Winding::Colinear && on_segment(p2, q1, q2)
}
