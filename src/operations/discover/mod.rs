mod closed_walk;
mod components;
mod filament;
mod validate;
mod walker;

use std::collections::HashMap;

use tracing::debug;

use crate::error::Result;
use crate::forest::{CycleTree, CycleTreeForest};
use crate::math::Point2;
use crate::topology::{VertexId, VertexStore};

use components::connected_components;
use filament::prune_filaments;
use validate::validate;
use walker::{clockwise_most, counter_clockwise_most};

/// Discovers the minimal cycle basis of an embedded planar graph.
///
/// Produces one [`CycleTree`] per connected component that contains at
/// least one face; components reducing to filaments are filtered out.
/// Behavior on non-planar inputs (crossing edges) is undefined.
pub struct DiscoverFaces<'a> {
    positions: &'a [Point2],
    edges: &'a [(usize, usize)],
}

impl<'a> DiscoverFaces<'a> {
    /// Creates a new discovery over the given embedding.
    #[must_use]
    pub fn new(positions: &'a [Point2], edges: &'a [(usize, usize)]) -> Self {
        Self { positions, edges }
    }

    /// Runs the discovery.
    ///
    /// # Errors
    ///
    /// Returns the first validation failure in scan order. Nothing is
    /// built on failure.
    pub fn execute(&self) -> Result<CycleTreeForest> {
        validate(self.positions, self.edges)?;

        let mut session = Session::new();
        let roots = session.build(self.positions, self.edges);
        let components = connected_components(&mut session.store, &roots);
        debug!(
            components = components.len(),
            vertices = roots.len(),
            "extracting cycle basis"
        );

        let mut forest = Vec::new();
        for component in components {
            if let Some(tree) = session.extract_basis(component) {
                forest.push(tree);
            }
        }
        Ok(forest)
    }
}

/// Convenience wrapper over [`DiscoverFaces`].
///
/// # Errors
///
/// Returns the first validation failure in scan order.
pub fn discover(positions: &[Point2], edges: &[(usize, usize)]) -> Result<CycleTreeForest> {
    DiscoverFaces::new(positions, edges).execute()
}

/// One extraction session.
///
/// Owns the vertex arena for a single discovery. The arena grows as wedge
/// detachment appends clones and is dropped with the session.
pub(crate) struct Session {
    pub(crate) store: VertexStore,
}

impl Session {
    fn new() -> Self {
        Self {
            store: VertexStore::new(),
        }
    }

    /// Builds one vertex record per distinct name appearing in an edge, in
    /// first-appearance order, and links the endpoints of every edge.
    /// Positions never referenced by an edge get no record.
    fn build(&mut self, positions: &[Point2], edges: &[(usize, usize)]) -> Vec<VertexId> {
        let mut by_name: HashMap<usize, VertexId> = HashMap::new();
        let mut roots = Vec::new();
        for &(a, b) in edges {
            let va = self.record(&mut by_name, &mut roots, a, positions);
            let vb = self.record(&mut by_name, &mut roots, b, positions);
            self.store.link(va, vb);
        }
        roots
    }

    fn record(
        &mut self,
        by_name: &mut HashMap<usize, VertexId>,
        roots: &mut Vec<VertexId>,
        name: usize,
        positions: &[Point2],
    ) -> VertexId {
        if let Some(&id) = by_name.get(&name) {
            return id;
        }
        let id = self.store.add(name, positions[name]);
        by_name.insert(name, id);
        roots.push(id);
        id
    }

    /// Extracts the minimal cycle basis of one component.
    ///
    /// Repeatedly prunes filaments, walks a face boundary from the
    /// leftmost vertex, turns the closed walk into a tree node (detaching
    /// wedge sub-problems along the way), and drops vertices left without
    /// edges. The collected faces are wrapped in an aggregator node,
    /// collapsed when trivial.
    pub(crate) fn extract_basis(&mut self, mut component: Vec<VertexId>) -> Option<CycleTree> {
        let mut children = Vec::new();
        loop {
            prune_filaments(&mut self.store, &mut component);
            if component.is_empty() {
                break;
            }
            let start = self.leftmost(&component);
            let walk = self.closed_walk_from(start);
            let tree = self.tree_from_closed_walk(walk);
            if !tree.is_empty() {
                children.push(tree);
            }
            component.retain(|&v| self.store.vertex(v).degree() > 0);
        }
        CycleTree::aggregate(children).unwrap_trivial()
    }

    /// The component vertex with minimum `x`, ties broken by minimum `y`.
    fn leftmost(&self, component: &[VertexId]) -> VertexId {
        let mut best = component[0];
        for &v in &component[1..] {
            let p = self.store.vertex(v).pos;
            let b = self.store.vertex(best).pos;
            if p.x < b.x || (p.x == b.x && p.y < b.y) {
                best = v;
            }
        }
        best
    }

    /// Walks one face boundary starting at `start`.
    ///
    /// The first step takes the clockwise-most neighbor as seen from
    /// above; every further step takes the counter-clockwise-most
    /// neighbor. The returned walk is closed (`start` repeated at the end)
    /// and may self-intersect; on a planar input it always returns to
    /// `start`.
    fn closed_walk_from(&mut self, start: VertexId) -> Vec<VertexId> {
        let mut walk = vec![start];
        let mut v_curr = start;
        let mut v_adj = clockwise_most(&self.store, None, v_curr);
        while let Some(next) = v_adj {
            if next == start {
                break;
            }
            walk.push(next);
            v_adj = counter_clockwise_most(&self.store, Some(v_curr), next);
            v_curr = next;
        }
        walk.push(start);
        walk
    }
}
