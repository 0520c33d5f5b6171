use super::Point2;

/// Winding sense of a point sequence in Y-up space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winding {
    Clockwise,
    CounterClockwise,
    Colinear,
}

/// Computes the winding order of a point sequence.
///
/// Sums `(x2 - x1) * (y2 + y1)` over the directed edges of the closed path
/// `p0 → p1 → … → p0`. A positive sum winds clockwise, a negative sum
/// counter-clockwise, zero is colinear. The expression must stay in this
/// exact form: downstream predicates compare raw signs, with no tolerance.
#[must_use]
pub fn winding_order(points: &[Point2]) -> Winding {
    let mut sum = 0.0;
    for i in 0..points.len() {
        let p = points[i];
        let q = points[(i + 1) % points.len()];
        sum += (q.x - p.x) * (q.y + p.y);
    }
    if sum > 0.0 {
        Winding::Clockwise
    } else if sum < 0.0 {
        Winding::CounterClockwise
    } else {
        Winding::Colinear
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn triangle_ccw() {
        let pts = [p(0.0, 0.0), p(2.0, 0.0), p(1.0, 2.0)];
        assert_eq!(winding_order(&pts), Winding::CounterClockwise);
    }

    #[test]
    fn triangle_cw() {
        let pts = [p(0.0, 0.0), p(1.0, 2.0), p(2.0, 0.0)];
        assert_eq!(winding_order(&pts), Winding::Clockwise);
    }

    #[test]
    fn colinear_points() {
        let pts = [p(0.0, 0.0), p(1.0, 1.0), p(2.0, 2.0)];
        assert_eq!(winding_order(&pts), Winding::Colinear);
    }

    #[test]
    fn closed_path_same_winding() {
        // A trailing duplicate of the first point contributes nothing.
        let open = [p(0.0, 0.0), p(2.0, 0.0), p(1.0, 2.0)];
        let closed = [p(0.0, 0.0), p(2.0, 0.0), p(1.0, 2.0), p(0.0, 0.0)];
        assert_eq!(winding_order(&open), winding_order(&closed));
    }

    #[test]
    fn degenerate_sequences() {
        assert_eq!(winding_order(&[]), Winding::Colinear);
        assert_eq!(winding_order(&[p(1.0, 1.0)]), Winding::Colinear);
        assert_eq!(winding_order(&[p(0.0, 0.0), p(1.0, 0.0)]), Winding::Colinear);
    }

    proptest! {
        // Reversing a point sequence swaps CW and CCW and preserves colinear.
        #[test]
        fn reversal_duality(coords in proptest::collection::vec((0.0..1000.0f64, 0.0..1000.0f64), 3..12)) {
            let pts: Vec<Point2> = coords.iter().map(|&(x, y)| p(x, y)).collect();
            let mut rev = pts.clone();
            rev.reverse();
            let expected = match winding_order(&pts) {
                Winding::Clockwise => Winding::CounterClockwise,
                Winding::CounterClockwise => Winding::Clockwise,
                Winding::Colinear => Winding::Colinear,
            };
            prop_assert_eq!(winding_order(&rev), expected);
        }
    }
}
