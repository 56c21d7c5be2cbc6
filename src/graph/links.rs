//! Per-node adjacency index.

use std::collections::HashMap;

use petgraph::stable_graph::NodeIndex;

use super::edge::EdgeId;

/// Ordered neighbor list where each neighbor has an associated edge.
///
/// Iteration follows the order in which neighbors were first linked.
/// Re-linking an existing neighbor replaces its edge but keeps its position.
#[derive(Debug, Clone, Default)]
pub struct Links {
    order: Vec<NodeIndex>,
    edges: HashMap<NodeIndex, EdgeId>,
}

impl Links {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn append(&mut self, neighbor: NodeIndex, edge: EdgeId) {
        if self.edges.insert(neighbor, edge).is_none() {
            self.order.push(neighbor);
        }
    }

    pub(crate) fn remove(&mut self, neighbor: NodeIndex) -> bool {
        if self.edges.remove(&neighbor).is_some() {
            self.order.retain(|&n| n != neighbor);
            true
        } else {
            false
        }
    }

    pub(crate) fn clear(&mut self) {
        self.order.clear();
        self.edges.clear();
    }

    /// The edge recorded for `neighbor`. It may have been removed from the store since.
    #[inline]
    pub fn edge(&self, neighbor: NodeIndex) -> Option<EdgeId> {
        self.edges.get(&neighbor).copied()
    }

    #[inline]
    pub fn contains(&self, neighbor: NodeIndex) -> bool {
        self.edges.contains_key(&neighbor)
    }

    /// Neighbors in link order.
    pub fn neighbors(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.order.iter().copied()
    }

    /// The neighbor at link position `i`.
    #[inline]
    pub fn get(&self, i: usize) -> Option<NodeIndex> {
        self.order.get(i).copied()
    }

    /// (neighbor, edge) pairs in link order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeIndex, EdgeId)> + '_ {
        self.order.iter().map(|n| (*n, self.edges[n]))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
