use std::collections::HashMap;

use tracing::trace;

use crate::forest::CycleTree;
use crate::math::perp_dot;
use crate::topology::VertexId;

use super::components::component_from;
use super::Session;

/// Collapses self-intersections of a closed walk in place.
///
/// When a vertex record reappears at positions `i_min < i_max`, the walk
/// between them is spliced out along with the second visit, `i_min` is
/// marked as a detachment site, and any bookkeeping for the discarded
/// stretch is erased. The scan resumes at `i_min`. Returns the surviving
/// detachment indices in marking order.
fn simplify_walk(walk: &mut Vec<VertexId>) -> Vec<usize> {
    let mut duplicates: HashMap<VertexId, usize> = HashMap::new();
    let mut detachments: Vec<usize> = Vec::new();

    let mut i = 1;
    while walk.len() >= 2 && i < walk.len() - 1 {
        match duplicates.get(&walk[i]).copied() {
            None => {
                duplicates.insert(walk[i], i);
                i += 1;
            }
            // Re-scanning the record left behind by a splice.
            Some(i_min) if i_min == i => i += 1,
            Some(i_min) => {
                let i_max = i;
                if !detachments.contains(&i_min) {
                    detachments.push(i_min);
                }
                duplicates.retain(|_, &mut idx| !(idx > i_min && idx < i_max));
                detachments.retain(|&idx| !(idx > i_min && idx < i_max));
                walk.drain(i_min + 1..=i_max);
                i = i_min;
            }
        }
    }
    detachments
}

impl Session {
    /// Turns a closed walk into a tree node.
    ///
    /// Self-intersections are collapsed first; each collapse site, plus
    /// the walk start, may anchor a wedge of edges that gets detached into
    /// a recursive sub-extraction. A walk with at least three distinct
    /// edges becomes this node's own face and its edges are unwound from
    /// the live graph; a two-edge walk only hands its subgraph to a clone.
    pub(crate) fn tree_from_closed_walk(&mut self, mut walk: Vec<VertexId>) -> CycleTree {
        let mut detachments = simplify_walk(&mut walk);
        let mut tree = CycleTree::default();

        if walk.len() > 3 {
            detachments.push(0);
            for &i in &detachments {
                if let Some(child) = self.detach_wedge(&walk, i) {
                    tree.children.push(child);
                }
            }
            tree.cycle = self.finalize_cycle(&walk);
            tree
        } else {
            // Two-edge walk: no face here. Hand everything beyond the
            // first edge to a fresh extraction rooted at a clone.
            if walk.len() < 2 {
                return tree;
            }
            let clone = self.store.clone_vertex(walk[0]);
            self.store.unlink(walk[0], walk[1]);
            self.store.link(clone, walk[1]);
            let component = component_from(&mut self.store, clone);
            if let Some(child) = self.extract_basis(component) {
                tree.children.push(child);
            }
            tree.unwrap_trivial().unwrap_or_default()
        }
    }

    /// Detaches the edges of `walk[i]` falling inside the wedge the walk
    /// forms at that vertex.
    ///
    /// The wedge is bounded by the walk edges to `walk[i - 1]` (wrapping
    /// to the end for the start vertex) and `walk[i + 1]`. In-wedge edges
    /// are transferred to a clone of the vertex, and the subgraph the
    /// clone anchors is extracted recursively.
    fn detach_wedge(&mut self, walk: &[VertexId], i: usize) -> Option<CycleTree> {
        let original = walk[i];
        let v_max = walk[i + 1];
        let v_min = if i == 0 { walk[walk.len() - 2] } else { walk[i - 1] };

        let origin = self.store.vertex(original).pos;
        let d_min = self.store.vertex(v_min).pos - origin;
        let d_max = self.store.vertex(v_max).pos - origin;
        let convex = d_max.x * d_min.y >= d_max.y * d_min.x;

        let min_name = self.store.vertex(v_min).name;
        let max_name = self.store.vertex(v_max).name;

        let in_wedge: Vec<VertexId> = self
            .store
            .vertex(original)
            .adj
            .iter()
            .copied()
            .filter(|&v| {
                let data = self.store.vertex(v);
                if data.name == min_name || data.name == max_name {
                    return false;
                }
                let d_ver = data.pos - origin;
                if convex {
                    perp_dot(&d_ver, &d_min) > 0.0 && perp_dot(&d_ver, &d_max) < 0.0
                } else {
                    perp_dot(&d_ver, &d_min) > 0.0 || perp_dot(&d_ver, &d_max) < 0.0
                }
            })
            .collect();

        if in_wedge.is_empty() {
            return None;
        }

        trace!(
            name = self.store.vertex(original).name,
            moved = in_wedge.len(),
            "detaching wedge"
        );
        let clone = self.store.clone_vertex(original);
        for v in in_wedge {
            self.store.unlink(original, v);
            self.store.link(clone, v);
        }
        let component = component_from(&mut self.store, clone);
        self.extract_basis(component)
    }

    /// Copies the walk's names into a closed cycle and unwinds the
    /// cycle's edges from the live graph so later iterations no longer
    /// see them.
    ///
    /// Removal walks the cycle from both ends of its first edge, stopping
    /// at a branch vertex (degree still ≥ 2 after removal) so edges shared
    /// with unextracted faces survive.
    fn finalize_cycle(&mut self, walk: &[VertexId]) -> Vec<usize> {
        let cycle: Vec<usize> = walk.iter().map(|&v| self.store.vertex(v).name).collect();

        let v0 = walk[0];
        let v1 = walk[1];
        let mut branch = (self.store.vertex(v0).degree() > 2).then_some(v0);
        self.store.unlink(v0, v1);

        let mut cur = v1;
        while Some(cur) != branch && self.store.vertex(cur).degree() == 1 {
            let next = self.store.vertex(cur).adj[0];
            self.store.unlink(cur, next);
            cur = next;
        }

        if cur != v0 {
            // The forward sweep hit a branch; sweep backward from the
            // start until meeting it.
            branch = Some(cur);
            let mut cur = v0;
            while Some(cur) != branch && self.store.vertex(cur).degree() == 1 {
                let next = self.store.vertex(cur).adj[0];
                self.store.unlink(cur, next);
                cur = next;
            }
        }
        cycle
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Point2;
    use crate::topology::VertexStore;

    fn walk_of(store: &mut VertexStore, names: &[usize]) -> Vec<VertexId> {
        // One record per distinct name; repeated names reuse the record,
        // as in a real self-intersecting walk.
        let mut ids: HashMap<usize, VertexId> = HashMap::new();
        names
            .iter()
            .map(|&n| {
                *ids.entry(n)
                    .or_insert_with(|| store.add(n, Point2::new(n as f64, 0.0)))
            })
            .collect()
    }

    #[test]
    fn simple_walk_has_no_detachments() {
        let mut store = VertexStore::new();
        let mut walk = walk_of(&mut store, &[0, 1, 2, 0]);
        let detachments = simplify_walk(&mut walk);
        assert!(detachments.is_empty());
        assert_eq!(walk.len(), 4);
    }

    #[test]
    fn single_revisit_is_collapsed() {
        // 0 1 2 3 2 4 0 → the 2..2 loop is spliced out, leaving 0 1 2 4 0
        // with a detachment at the surviving index of vertex 2.
        let mut store = VertexStore::new();
        let mut walk = walk_of(&mut store, &[0, 1, 2, 3, 2, 4, 0]);
        let expected: Vec<VertexId> = vec![walk[0], walk[1], walk[2], walk[5], walk[6]];
        let detachments = simplify_walk(&mut walk);
        assert_eq!(walk, expected);
        assert_eq!(detachments, vec![2]);
    }

    #[test]
    fn nested_revisits_keep_outer_detachment_only() {
        // 0 1 2 3 2 1 4 0: collapsing at 2 then at 1 discards the inner
        // detachment site along with the spliced stretch.
        let mut store = VertexStore::new();
        let mut walk = walk_of(&mut store, &[0, 1, 2, 3, 2, 1, 4, 0]);
        let expected: Vec<VertexId> = vec![walk[0], walk[1], walk[6], walk[7]];
        let detachments = simplify_walk(&mut walk);
        assert_eq!(walk, expected);
        assert_eq!(detachments, vec![1]);
    }

    #[test]
    fn degenerate_two_edge_walk_is_not_simplified() {
        let mut store = VertexStore::new();
        let mut walk = walk_of(&mut store, &[0, 1, 0]);
        let detachments = simplify_walk(&mut walk);
        assert!(detachments.is_empty());
        assert_eq!(walk.len(), 3);
    }

    #[test]
    fn two_edge_walk_hands_subgraph_to_a_clone() {
        // A tail vertex 0 attached to triangle 1-2-3. Feeding the walk
        // 0,1,0 through extraction moves the tail edge to a clone and
        // yields the triangle, unwrapped.
        let mut session = Session {
            store: VertexStore::new(),
        };
        let a = session.store.add(0, Point2::new(0.0, 2.0));
        let b = session.store.add(1, Point2::new(2.0, 2.0));
        let c = session.store.add(2, Point2::new(4.0, 0.0));
        let d = session.store.add(3, Point2::new(4.0, 4.0));
        session.store.link(a, b);
        session.store.link(b, c);
        session.store.link(c, d);
        session.store.link(d, b);

        let tree = session.tree_from_closed_walk(vec![a, b, a]);
        assert_eq!(tree.cycle, vec![1, 2, 3, 1]);
        assert!(tree.children.is_empty());
        assert!(!session.store.linked(a, b));
        assert_eq!(session.store.vertex(b).degree(), 0);
    }
}
