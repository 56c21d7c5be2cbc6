//! Depth-first and breadth-first traversal over node links.
//!
//! Both searches call `visit` on every reachable node once and stop as soon
//! as it returns true. `traversable(node, edge)` decides whether the link
//! from `node` through `edge` may be followed; see [`directed`] for the
//! common case. Links whose edge was removed are skipped.

use std::collections::{HashSet, VecDeque};

use crate::error::{GraphError, Result};
use crate::graph::{Edge, GraphStore, Node, NodeId, NodeIndex};

/// Follow every link.
pub fn any(_node: &Node, _edge: &Edge) -> bool {
    true
}

/// Follow only edges that leave the current node.
pub fn directed(node: &Node, edge: &Edge) -> bool {
    edge.node1() == node.index()
}

/// Pre-order depth-first search from `root`.
///
/// Returns `Ok(true)` if `visit` stopped the search early.
pub fn depth_first_search<V, T>(
    store: &GraphStore,
    root: impl Into<NodeId>,
    mut visit: V,
    traversable: T,
) -> Result<bool>
where
    V: FnMut(&Node) -> bool,
    T: Fn(&Node, &Edge) -> bool,
{
    let root = resolve(store, root)?;
    let mut visited = HashSet::new();

    visited.insert(root);
    if visit(store_node(store, root)) {
        return Ok(true);
    }

    // (node, next link position)
    let mut stack = vec![(root, 0usize)];
    while let Some((index, position)) = stack.last_mut() {
        let node = store_node(store, *index);
        let Some(neighbor) = node.links().get(*position) else {
            stack.pop();
            continue;
        };
        *position += 1;

        if visited.contains(&neighbor) {
            continue;
        }
        let Some(edge) = store.link_edge(node.index(), neighbor) else {
            continue;
        };
        if !traversable(node, edge) {
            continue;
        }

        visited.insert(neighbor);
        if visit(store_node(store, neighbor)) {
            return Ok(true);
        }
        stack.push((neighbor, 0));
    }
    Ok(false)
}

/// Queue-based breadth-first search from `root`.
///
/// Returns `Ok(true)` if `visit` stopped the search early.
pub fn breadth_first_search<V, T>(
    store: &GraphStore,
    root: impl Into<NodeId>,
    mut visit: V,
    traversable: T,
) -> Result<bool>
where
    V: FnMut(&Node) -> bool,
    T: Fn(&Node, &Edge) -> bool,
{
    let root = resolve(store, root)?;
    let mut visited = HashSet::new();
    let mut queue = VecDeque::from([root]);

    while let Some(index) = queue.pop_front() {
        if !visited.insert(index) {
            continue;
        }
        let node = store_node(store, index);
        if visit(node) {
            return Ok(true);
        }
        for (neighbor, _) in node.links().iter() {
            let Some(edge) = store.link_edge(index, neighbor) else {
                continue;
            };
            if traversable(node, edge) && !visited.contains(&neighbor) {
                queue.push_back(neighbor);
            }
        }
    }
    Ok(false)
}

fn resolve(store: &GraphStore, id: impl Into<NodeId>) -> Result<NodeIndex> {
    let id = id.into();
    store.index_of(&id).ok_or(GraphError::NodeNotFound(id))
}

// Links only ever name live nodes: removal purges them from every neighbor.
fn store_node(store: &GraphStore, index: NodeIndex) -> &Node {
    match store.node_by_index(index) {
        Some(node) => node,
        None => panic!("link to a node that is not in the graph"),
    }
}
