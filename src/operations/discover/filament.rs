use crate::topology::{VertexId, VertexStore};

/// Removes every filament from the component.
///
/// A filament is a maximal chain of degree-1 vertices hanging off the rest
/// of the component. Each walk starts at a degree-1 endpoint and unlinks
/// edges until it reaches a vertex of degree ≥ 2 or runs out of chain; the
/// component then retains only vertices that still have incident edges.
/// Afterwards the component is either empty or every remaining vertex has
/// degree ≥ 2.
pub(crate) fn prune_filaments(store: &mut VertexStore, component: &mut Vec<VertexId>) {
    let endpoints: Vec<VertexId> = component
        .iter()
        .copied()
        .filter(|&v| store.vertex(v).degree() == 1)
        .collect();

    for endpoint in endpoints {
        let mut v = endpoint;
        while store.vertex(v).degree() == 1 {
            let next = store.vertex(v).adj[0];
            store.unlink(v, next);
            v = next;
        }
    }

    component.retain(|&v| store.vertex(v).degree() > 0);
}
