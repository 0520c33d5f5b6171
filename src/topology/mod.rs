pub mod vertex;

pub use vertex::{VertexData, VertexId, VisitMark};

use crate::math::Point2;
use slotmap::SlotMap;

/// Arena that owns every vertex record of one extraction session.
///
/// Records reference each other through generational [`VertexId`] keys,
/// avoiding self-referential structures and enabling free mutation of the
/// shared adjacency sets. The arena only grows during a session (wedge
/// detachment appends clones) and is dropped as a whole when the session
/// ends, so ids never dangle.
#[derive(Debug, Default)]
pub struct VertexStore {
    vertices: SlotMap<VertexId, VertexData>,
}

impl VertexStore {
    /// Creates a new, empty vertex store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a fresh vertex record and returns its id.
    pub fn add(&mut self, name: usize, pos: Point2) -> VertexId {
        self.vertices.insert(VertexData::new(name, pos))
    }

    /// Clones `v` into a new record sharing its name and position, with an
    /// empty adjacency.
    ///
    /// # Panics
    ///
    /// Panics if `v` is not a record of this store.
    pub fn clone_vertex(&mut self, v: VertexId) -> VertexId {
        let (name, pos) = {
            let data = &self.vertices[v];
            (data.name, data.pos)
        };
        self.add(name, pos)
    }

    /// Returns the vertex record for `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not a record of this store. Records are never
    /// removed during a session, so any id this store handed out stays
    /// valid for its whole lifetime; only an id from a different store
    /// can trip this.
    #[must_use]
    pub fn vertex(&self, id: VertexId) -> &VertexData {
        &self.vertices[id]
    }

    /// Returns the mutable vertex record for `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not a record of this store.
    pub fn vertex_mut(&mut self, id: VertexId) -> &mut VertexData {
        &mut self.vertices[id]
    }

    /// Number of records in the arena, clones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// True when the arena holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Connects `a` and `b` with an undirected edge.
    ///
    /// Both adjacency entries are inserted together; an already-present
    /// edge is left untouched, so supplying both directions of the same
    /// undirected edge collapses to one.
    ///
    /// # Panics
    ///
    /// Panics if either id is not a record of this store.
    pub fn link(&mut self, a: VertexId, b: VertexId) {
        if !self.vertices[a].adj.contains(&b) {
            self.vertices[a].adj.push(b);
        }
        if !self.vertices[b].adj.contains(&a) {
            self.vertices[b].adj.push(a);
        }
    }

    /// Removes the undirected edge between `a` and `b`.
    ///
    /// Both adjacency entries are removed together; absent edges are a
    /// no-op.
    ///
    /// # Panics
    ///
    /// Panics if either id is not a record of this store.
    pub fn unlink(&mut self, a: VertexId, b: VertexId) {
        self.vertices[a].adj.retain(|&v| v != b);
        self.vertices[b].adj.retain(|&v| v != a);
    }

    /// True iff an edge connects `a` and `b`.
    ///
    /// # Panics
    ///
    /// Panics if `a` is not a record of this store.
    #[must_use]
    pub fn linked(&self, a: VertexId, b: VertexId) -> bool {
        self.vertices[a].adj.contains(&b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(n: usize) -> (VertexStore, Vec<VertexId>) {
        let mut store = VertexStore::new();
        let ids = (0..n)
            .map(|i| store.add(i, Point2::new(i as f64, 0.0)))
            .collect();
        (store, ids)
    }

    #[test]
    fn link_is_symmetric() {
        let (mut store, ids) = store_with(2);
        store.link(ids[0], ids[1]);
        assert!(store.linked(ids[0], ids[1]));
        assert!(store.linked(ids[1], ids[0]));
    }

    #[test]
    fn link_absorbs_duplicates() {
        let (mut store, ids) = store_with(2);
        store.link(ids[0], ids[1]);
        store.link(ids[1], ids[0]);
        assert_eq!(store.vertex(ids[0]).degree(), 1);
        assert_eq!(store.vertex(ids[1]).degree(), 1);
    }

    #[test]
    fn unlink_removes_both_entries() {
        let (mut store, ids) = store_with(3);
        store.link(ids[0], ids[1]);
        store.link(ids[0], ids[2]);
        store.unlink(ids[0], ids[1]);
        assert!(!store.linked(ids[0], ids[1]));
        assert!(!store.linked(ids[1], ids[0]));
        assert!(store.linked(ids[0], ids[2]));
    }

    #[test]
    fn adjacency_keeps_insertion_order() {
        let (mut store, ids) = store_with(4);
        store.link(ids[0], ids[2]);
        store.link(ids[0], ids[1]);
        store.link(ids[0], ids[3]);
        assert_eq!(store.vertex(ids[0]).adj, vec![ids[2], ids[1], ids[3]]);
    }

    #[test]
    fn clone_shares_name_and_position_only() {
        let (mut store, ids) = store_with(2);
        store.link(ids[0], ids[1]);
        let clone = store.clone_vertex(ids[0]);
        assert_eq!(store.vertex(clone).name, store.vertex(ids[0]).name);
        assert_eq!(store.vertex(clone).pos, store.vertex(ids[0]).pos);
        assert_ne!(clone, ids[0]);
        assert_eq!(store.vertex(clone).degree(), 0);
    }
}
