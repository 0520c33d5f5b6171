use std::collections::{HashMap, HashSet};

use crate::error::DiscoverError;
use crate::math::Point2;

/// Normalizes a coordinate for duplicate detection so that `-0.0` and
/// `0.0` compare equal, matching componentwise position equality.
fn coord_key(c: f64) -> u64 {
    (c + 0.0).to_bits()
}

/// Checks the inputs, returning the first failure in scan order.
///
/// Duplicate positions are reported ahead of negative coordinates, even
/// when a single position exhibits both. Edge checks run in input order,
/// endpoint bounds before duplicate detection; the duplicate key is the
/// ordered pair, so `(a, b)` followed by `(b, a)` is accepted and later
/// absorbed by adjacency set semantics.
pub(crate) fn validate(
    positions: &[Point2],
    edges: &[(usize, usize)],
) -> Result<(), DiscoverError> {
    if positions.is_empty() || edges.is_empty() {
        return Err(DiscoverError::GraphEmpty {
            positions: positions.len(),
            edges: edges.len(),
        });
    }

    let mut seen_positions: HashMap<(u64, u64), usize> = HashMap::with_capacity(positions.len());
    for (i, p) in positions.iter().enumerate() {
        if let Some(&first) = seen_positions.get(&(coord_key(p.x), coord_key(p.y))) {
            return Err(DiscoverError::VerticesHaveSamePosition {
                first,
                second: i,
                x: p.x,
                y: p.y,
            });
        }
        seen_positions.insert((coord_key(p.x), coord_key(p.y)), i);
    }

    for (i, p) in positions.iter().enumerate() {
        if p.x < 0.0 || p.y < 0.0 {
            return Err(DiscoverError::InvalidCoordinateSystem {
                vertex: i,
                x: p.x,
                y: p.y,
            });
        }
    }

    let mut seen_edges: HashSet<(usize, usize)> = HashSet::with_capacity(edges.len());
    for &(a, b) in edges {
        if a >= positions.len() || b >= positions.len() {
            return Err(DiscoverError::EdgeEndpointOutOfBounds {
                a,
                b,
                len: positions.len(),
            });
        }
        if !seen_edges.insert((a, b)) {
            return Err(DiscoverError::DuplicateEdgeFound { a, b });
        }
    }

    Ok(())
}
