use crate::math::{perp_dot, Vector2};
use crate::topology::{VertexId, VertexStore};

/// Direction of the incoming edge at `v_curr`.
///
/// A walk with no previous vertex is treated as arriving from straight
/// above, direction `(0, -1)`.
fn incoming(store: &VertexStore, v_prev: Option<VertexId>, v_curr: VertexId) -> Vector2 {
    match v_prev {
        Some(p) => store.vertex(v_curr).pos - store.vertex(p).pos,
        None => Vector2::new(0.0, -1.0),
    }
}

/// Selects the neighbor of `v_curr` making the sharpest clockwise turn
/// relative to the incoming edge, excluding `v_prev`.
///
/// Returns `None` when no candidate neighbor exists.
pub(crate) fn clockwise_most(
    store: &VertexStore,
    v_prev: Option<VertexId>,
    v_curr: VertexId,
) -> Option<VertexId> {
    let d_curr = incoming(store, v_prev, v_curr);
    let mut v_next: Option<VertexId> = None;
    let mut d_next = Vector2::new(0.0, 0.0);
    let mut convex = false;

    for &v_adj in &store.vertex(v_curr).adj {
        if Some(v_adj) == v_prev {
            continue;
        }
        let d_adj = store.vertex(v_adj).pos - store.vertex(v_curr).pos;

        if v_next.is_none() {
            v_next = Some(v_adj);
            d_next = d_adj;
            convex = perp_dot(&d_next, &d_curr) <= 0.0;
            continue;
        }

        if convex {
            if perp_dot(&d_curr, &d_adj) < 0.0 || perp_dot(&d_next, &d_adj) < 0.0 {
                v_next = Some(v_adj);
                d_next = d_adj;
                convex = perp_dot(&d_next, &d_curr) <= 0.0;
            }
        } else if perp_dot(&d_curr, &d_adj) < 0.0 && perp_dot(&d_next, &d_adj) < 0.0 {
            v_next = Some(v_adj);
            d_next = d_adj;
            // NB: strict here, unlike the convex branch and the mirrored
            // selection below. Changing it shifts ties on colinear edges.
            convex = perp_dot(&d_next, &d_curr) < 0.0;
        }
    }
    v_next
}

/// Selects the neighbor of `v_curr` making the sharpest counter-clockwise
/// turn relative to the incoming edge, excluding `v_prev`.
pub(crate) fn counter_clockwise_most(
    store: &VertexStore,
    v_prev: Option<VertexId>,
    v_curr: VertexId,
) -> Option<VertexId> {
    let d_curr = incoming(store, v_prev, v_curr);
    let mut v_next: Option<VertexId> = None;
    let mut d_next = Vector2::new(0.0, 0.0);
    let mut convex = false;

    for &v_adj in &store.vertex(v_curr).adj {
        if Some(v_adj) == v_prev {
            continue;
        }
        let d_adj = store.vertex(v_adj).pos - store.vertex(v_curr).pos;

        if v_next.is_none() {
            v_next = Some(v_adj);
            d_next = d_adj;
            convex = perp_dot(&d_next, &d_curr) <= 0.0;
            continue;
        }

        if convex {
            if perp_dot(&d_curr, &d_adj) > 0.0 && perp_dot(&d_next, &d_adj) > 0.0 {
                v_next = Some(v_adj);
                d_next = d_adj;
                convex = perp_dot(&d_next, &d_curr) <= 0.0;
            }
        } else if perp_dot(&d_curr, &d_adj) > 0.0 || perp_dot(&d_next, &d_adj) > 0.0 {
            v_next = Some(v_adj);
            d_next = d_adj;
            convex = perp_dot(&d_next, &d_curr) <= 0.0;
        }
    }
    v_next
}
