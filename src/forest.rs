use serde::Serialize;

/// One face of the planar embedding, with the faces nested inside it.
///
/// `cycle` lists vertex names in traversal order and is closed: the first
/// name is repeated at the end. A node with an empty cycle is a pure
/// aggregator grouping the faces of one connected component.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CycleTree {
    pub cycle: Vec<usize>,
    pub children: Vec<CycleTree>,
}

impl CycleTree {
    /// Creates an aggregator node wrapping `children`.
    #[must_use]
    pub fn aggregate(children: Vec<CycleTree>) -> Self {
        Self {
            cycle: Vec::new(),
            children,
        }
    }

    /// True when the node carries neither a cycle nor children.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cycle.is_empty() && self.children.is_empty()
    }

    /// Collapses a trivial aggregator.
    ///
    /// A node with no cycle and exactly one child is replaced by that
    /// child; an empty node is discarded.
    #[must_use]
    pub fn unwrap_trivial(self) -> Option<CycleTree> {
        if self.is_empty() {
            None
        } else if self.cycle.is_empty() && self.children.len() == 1 {
            self.children.into_iter().next()
        } else {
            Some(self)
        }
    }
}

/// One tree per connected component that produced at least one face.
pub type CycleTreeForest = Vec<CycleTree>;
