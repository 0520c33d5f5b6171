use crate::math::Point2;

slotmap::new_key_type! {
    /// Unique identifier for a vertex record in the vertex store.
    pub struct VertexId;
}

/// Traversal state used by the component search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VisitMark {
    #[default]
    Unvisited,
    Discovered,
    Finished,
}

/// A vertex record in the extraction arena.
///
/// `name` is the vertex's index in the caller-supplied position array. It is
/// not a primary key: wedge detachment clones records, and a clone shares
/// the name and position of its original while owning a disjoint adjacency.
#[derive(Debug, Clone)]
pub struct VertexData {
    /// Original input index of this vertex.
    pub name: usize,
    /// Fixed embedding position.
    pub pos: Point2,
    /// Adjacent records, insertion-ordered with set semantics. Traversal
    /// order is observable in the output forest.
    pub adj: Vec<VertexId>,
    /// Component-search state.
    pub mark: VisitMark,
}

impl VertexData {
    /// Creates an unconnected vertex record.
    #[must_use]
    pub fn new(name: usize, pos: Point2) -> Self {
        Self {
            name,
            pos,
            adj: Vec::new(),
            mark: VisitMark::Unvisited,
        }
    }

    /// Number of incident edges.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.adj.len()
    }
}
