//! Structural edits and simplifications.
//!
//! Edits that re-create edges copy the attributes of the edge they replace.
//! Re-creating an edge that already exists in the same direction is a no-op.

use std::collections::HashSet;

use crate::error::{GraphError, Result};
use crate::graph::{EdgeAttrs, EdgeId, GraphStore, NodeId, NodeIndex};

/// Remove the edges between `id1` and `id2`, or every edge touching `id1`
/// when `id2` is `None`. The nodes themselves stay.
///
/// Returns the number of edges removed.
pub fn unlink(store: &mut GraphStore, id1: &NodeId, id2: Option<&NodeId>) -> Result<usize> {
    let n1 = resolve(store, id1)?;
    let n2 = id2.map(|id| resolve(store, id)).transpose()?;
    Ok(unlink_indices(store, n1, n2))
}

pub(crate) fn unlink_indices(
    store: &mut GraphStore,
    n1: NodeIndex,
    n2: Option<NodeIndex>,
) -> usize {
    let doomed: Vec<EdgeId> = store
        .edges()
        .filter(|edge| {
            edge.touches(n1) && n2.is_none_or(|n2| edge.touches(n2))
        })
        .map(|edge| edge.id())
        .collect();
    for &id in &doomed {
        store.remove_edge(id);
    }

    match n2 {
        Some(n2) => store.unlink_pair(n1, n2),
        None => store.clear_links(n1),
    }
    doomed.len()
}

/// Move every edge of `id1` over to `id2`, then unlink `id1`.
///
/// Edges between the two are dropped rather than turned into self-loops.
pub fn redirect(store: &mut GraphStore, id1: &NodeId, id2: &NodeId) -> Result<()> {
    let from = resolve(store, id1)?;
    let to = resolve(store, id2)?;

    for (node1, node2, attrs) in touching(store, from) {
        if node1 == from && node2 != to {
            store.add_edge_between(to, node2, attrs.clone());
        }
        if node2 == from && node1 != to {
            store.add_edge_between(node1, to, attrs);
        }
    }
    let removed = unlink_indices(store, from, None);
    tracing::debug!(from = %id1, to = %id2, removed, "redirected edges");
    Ok(())
}

/// Unlink `id` but bridge around it: for A -> B -> C, cutting B leaves A -> C.
///
/// Every edge of the node is re-created once per other neighbor, so
/// B -> C and B -> D also yield C -> D and D -> C.
pub fn cut(store: &mut GraphStore, id: &NodeId) -> Result<()> {
    let node = resolve(store, id)?;
    let neighbors: Vec<NodeIndex> = store
        .node_by_index(node)
        .map(|n| n.links().neighbors().collect())
        .unwrap_or_default();

    for (node1, node2, attrs) in touching(store, node) {
        for &neighbor in &neighbors {
            if node1 == node && node2 != neighbor {
                store.add_edge_between(neighbor, node2, attrs.clone());
            }
            if node2 == node && node1 != neighbor {
                store.add_edge_between(node1, neighbor, attrs.clone());
            }
        }
    }
    let removed = unlink_indices(store, node, None);
    tracing::debug!(node = %id, removed, "cut node");
    Ok(())
}

/// Put `id` between `a` and `b`: A -> B becomes A -> N -> B, and B -> A
/// becomes B -> N -> A.
///
/// Does nothing when `a` and `b` are not connected.
pub fn insert(store: &mut GraphStore, id: &NodeId, a: &NodeId, b: &NodeId) -> Result<()> {
    let node = resolve(store, id)?;
    let a = resolve(store, a)?;
    let b = resolve(store, b)?;

    let mut connected = false;
    for (node1, node2, attrs) in touching(store, a) {
        if node1 == a && node2 == b {
            store.add_edge_between(a, node, attrs.clone());
            store.add_edge_between(node, b, attrs);
            connected = true;
        } else if node1 == b && node2 == a {
            store.add_edge_between(b, node, attrs.clone());
            store.add_edge_between(node, a, attrs);
            connected = true;
        }
    }
    if connected {
        unlink_indices(store, a, Some(b));
    }
    Ok(())
}

/// Remove every node with `depth` or fewer edges.
///
/// Degrees are taken before anything is removed. Returns the number of
/// nodes removed.
pub fn prune(store: &mut GraphStore, depth: usize) -> usize {
    let doomed: Vec<NodeId> = store
        .nodes()
        .filter(|node| store.degree(node.index()) <= depth)
        .map(|node| node.id().clone())
        .collect();
    for id in &doomed {
        store.remove_node(id);
    }
    tracing::debug!(depth, removed = doomed.len(), "pruned nodes");
    doomed.len()
}

/// Leaf nodes (exactly one link) and everything within `depth` hops of them.
///
/// Depth 0 yields just the leaves. No node appears twice.
pub fn fringe(store: &GraphStore, depth: usize) -> Vec<NodeId> {
    let mut seen = HashSet::new();
    let mut fringe = Vec::new();
    for leaf in store.nodes().filter(|node| node.links().len() == 1) {
        for index in store.flatten(leaf.index(), depth) {
            if seen.insert(index) {
                if let Some(node) = store.node_by_index(index) {
                    fringe.push(node.id().clone());
                }
            }
        }
    }
    fringe
}

/// Split into connected components, largest first.
///
/// Each component is an independent copy; components of equal size keep
/// the order of their first node.
pub fn partition(store: &GraphStore) -> Vec<GraphStore> {
    // Start from each node plus its direct neighbors, then merge overlapping
    // sets until none overlap.
    let mut sets: Vec<HashSet<NodeIndex>> = store
        .node_indices()
        .map(|index| store.flatten(index, 1).into_iter().collect())
        .collect();

    loop {
        let mut merged = false;
        for i in (0..sets.len()).rev() {
            for j in ((i + 1)..sets.len()).rev() {
                if sets[i].is_empty() || sets[j].is_empty() || sets[i].is_disjoint(&sets[j]) {
                    continue;
                }
                let absorbed = std::mem::take(&mut sets[j]);
                sets[i].extend(absorbed);
                merged = true;
            }
        }
        if !merged {
            break;
        }
    }

    let mut components: Vec<GraphStore> = sets
        .into_iter()
        .filter(|set| !set.is_empty())
        .map(|set| {
            let members: Vec<NodeIndex> = store
                .node_indices()
                .filter(|index| set.contains(index))
                .collect();
            store.copy(&members)
        })
        .collect();
    components.sort_by(|a, b| b.node_count().cmp(&a.node_count()));

    tracing::debug!(components = components.len(), "partitioned graph");
    components
}

/// Graph density: edges against the most a simple undirected graph could hold.
///
/// 0 for fewer than two nodes.
pub fn density(store: &GraphStore) -> f64 {
    let n = store.node_count();
    if n < 2 {
        return 0.0;
    }
    2.0 * store.edge_count() as f64 / (n * (n - 1)) as f64
}

/// (node1, node2, attributes) of every edge touching `node`, in insertion order.
fn touching(store: &GraphStore, node: NodeIndex) -> Vec<(NodeIndex, NodeIndex, EdgeAttrs)> {
    store
        .edges()
        .filter(|edge| edge.touches(node))
        .map(|edge| (edge.node1(), edge.node2(), edge.attrs()))
        .collect()
}

fn resolve(store: &GraphStore, id: &NodeId) -> Result<NodeIndex> {
    store.index_of(id).ok_or_else(|| GraphError::NodeNotFound(id.clone()))
}
