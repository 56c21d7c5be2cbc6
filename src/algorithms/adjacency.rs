//! Cost adjacency shared by the path and centrality algorithms.
//!
//! Every edge contributes a traversal cost of `1 - weight * 0.5`, so heavier
//! edges are cheaper to travel. Weights are expected in `[0, 1]`; outside
//! that range the formula still applies but costs can reach zero or go
//! negative, which Dijkstra does not tolerate. Such weights are logged.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::graph::{GraphStore, NodeId, NodeIndex};

/// Extra cost for moving from the first node to the second.
pub type Heuristic<'a> = &'a dyn Fn(&NodeId, &NodeId) -> f64;

/// How edges turn into directed cost entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AdjacencyOptions {
    /// Edges only go from node1 to node2.
    pub directed: bool,
    /// Edges go from node2 to node1 instead.
    pub reversed: bool,
    /// Each node's outgoing costs are scaled to sum to 1.
    pub stochastic: bool,
}

/// For every node, the neighbors it can move to and what that costs.
///
/// Nodes are addressed by slot: their position in store insertion order.
/// Each neighbor list is in edge insertion order.
#[derive(Debug, Clone)]
pub struct CostAdjacency {
    ids: Vec<NodeId>,
    indices: Vec<NodeIndex>,
    slots: HashMap<NodeIndex, usize>,
    id_slots: HashMap<NodeId, usize>,
    neighbors: Vec<Vec<(usize, f64)>>,
}

impl CostAdjacency {
    pub fn build(
        store: &GraphStore,
        options: &AdjacencyOptions,
        heuristic: Option<Heuristic<'_>>,
    ) -> Self {
        let node_count = store.node_count();
        let mut ids = Vec::with_capacity(node_count);
        let mut indices = Vec::with_capacity(node_count);
        let mut slots = HashMap::with_capacity(node_count);
        let mut id_slots = HashMap::with_capacity(node_count);
        for (slot, node) in store.nodes().enumerate() {
            ids.push(node.id().clone());
            indices.push(node.index());
            slots.insert(node.index(), slot);
            id_slots.insert(node.id().clone(), slot);
        }

        let mut neighbors: Vec<Vec<(usize, f64)>> = vec![Vec::new(); node_count];
        for edge in store.edges() {
            if !(0.0..=1.0).contains(&edge.weight) {
                tracing::warn!(
                    edge = %edge.id(),
                    weight = edge.weight,
                    "edge weight outside [0, 1], path costs may be negative"
                );
            }

            let (from, to) = if options.reversed {
                (edge.node2(), edge.node1())
            } else {
                (edge.node1(), edge.node2())
            };
            let (Some(&a), Some(&b)) = (slots.get(&from), slots.get(&to)) else {
                continue;
            };

            let mut cost = 1.0 - edge.weight * 0.5;
            if let Some(heuristic) = heuristic {
                cost += heuristic(&ids[a], &ids[b]);
            }
            set_cost(&mut neighbors[a], b, cost);
            if !options.directed {
                set_cost(&mut neighbors[b], a, cost);
            }
        }

        if options.stochastic {
            for row in &mut neighbors {
                let total: f64 = row.iter().map(|&(_, cost)| cost).sum();
                if total != 0.0 {
                    for (_, cost) in row.iter_mut() {
                        *cost /= total;
                    }
                }
            }
        }

        Self {
            ids,
            indices,
            slots,
            id_slots,
            neighbors,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Node ids in slot order.
    pub fn ids(&self) -> &[NodeId] {
        &self.ids
    }

    #[inline]
    pub fn slot(&self, index: NodeIndex) -> Option<usize> {
        self.slots.get(&index).copied()
    }

    #[inline]
    pub fn slot_of(&self, id: &NodeId) -> Option<usize> {
        self.id_slots.get(id).copied()
    }

    #[inline]
    pub fn index(&self, slot: usize) -> NodeIndex {
        self.indices[slot]
    }

    /// `(neighbor slot, cost)` pairs leaving `slot`.
    #[inline]
    pub fn neighbors(&self, slot: usize) -> &[(usize, f64)] {
        &self.neighbors[slot]
    }

    /// Cost of moving from `id1` to `id2`, if they are adjacent.
    pub fn cost(&self, id1: &NodeId, id2: &NodeId) -> Option<f64> {
        let a = *self.id_slots.get(id1)?;
        let b = *self.id_slots.get(id2)?;
        self.neighbors[a]
            .iter()
            .find(|&&(n, _)| n == b)
            .map(|&(_, cost)| cost)
    }
}

// A later edge between the same pair overwrites the earlier cost in place.
fn set_cost(row: &mut Vec<(usize, f64)>, neighbor: usize, cost: f64) {
    match row.iter_mut().find(|(n, _)| *n == neighbor) {
        Some(entry) => entry.1 = cost,
        None => row.push((neighbor, cost)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::EdgeAttrs;

    fn id(s: &str) -> NodeId {
        NodeId::from(s)
    }

    fn sample() -> GraphStore {
        let mut store = GraphStore::default();
        store.add_edge("a", "b", EdgeAttrs::weighted(1.0));
        store.add_edge("a", "c", EdgeAttrs::weighted(0.0));
        store
    }

    #[test]
    fn test_undirected_costs_are_mirrored() {
        let adjacency = CostAdjacency::build(&sample(), &AdjacencyOptions::default(), None);

        assert_eq!(adjacency.len(), 3);
        assert_eq!(adjacency.cost(&id("a"), &id("b")), Some(0.5));
        assert_eq!(adjacency.cost(&id("b"), &id("a")), Some(0.5));
        assert_eq!(adjacency.cost(&id("c"), &id("a")), Some(1.0));
        assert_eq!(adjacency.cost(&id("b"), &id("c")), None);
    }

    #[test]
    fn test_directed_and_reversed() {
        let store = sample();
        let directed = AdjacencyOptions {
            directed: true,
            ..AdjacencyOptions::default()
        };
        let adjacency = CostAdjacency::build(&store, &directed, None);
        assert_eq!(adjacency.cost(&id("a"), &id("b")), Some(0.5));
        assert_eq!(adjacency.cost(&id("b"), &id("a")), None);

        let reversed = AdjacencyOptions {
            directed: true,
            reversed: true,
            ..AdjacencyOptions::default()
        };
        let adjacency = CostAdjacency::build(&store, &reversed, None);
        assert_eq!(adjacency.cost(&id("a"), &id("b")), None);
        assert_eq!(adjacency.cost(&id("b"), &id("a")), Some(0.5));
    }

    #[test]
    fn test_stochastic_rows_sum_to_one() {
        let options = AdjacencyOptions {
            stochastic: true,
            ..AdjacencyOptions::default()
        };
        let adjacency = CostAdjacency::build(&sample(), &options, None);

        let total: f64 = adjacency.neighbors(0).iter().map(|&(_, c)| c).sum();
        assert!((total - 1.0).abs() < 1e-12);
        let cost = adjacency.cost(&id("a"), &id("b")).unwrap();
        assert!((cost - 0.5 / 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_heuristic_adds_cost() {
        let extra = |_: &NodeId, to: &NodeId| if *to == NodeId::from("c") { 2.0 } else { 0.0 };
        let adjacency = CostAdjacency::build(&sample(), &AdjacencyOptions::default(), Some(&extra));

        assert_eq!(adjacency.cost(&id("a"), &id("c")), Some(3.0));
        assert_eq!(adjacency.cost(&id("a"), &id("b")), Some(0.5));
    }

    #[test]
    fn test_later_edge_overwrites_pair() {
        let mut store = GraphStore::default();
        store.add_edge("a", "b", EdgeAttrs::weighted(0.0));
        store.add_edge("b", "a", EdgeAttrs::weighted(1.0));

        let adjacency = CostAdjacency::build(&store, &AdjacencyOptions::default(), None);
        assert_eq!(adjacency.cost(&id("a"), &id("b")), Some(0.5));
        assert_eq!(adjacency.neighbors(0).len(), 1);
    }

    #[test]
    fn test_out_of_range_weight_is_kept() {
        let mut store = GraphStore::default();
        store.add_edge("a", "b", EdgeAttrs::weighted(3.0));

        let adjacency = CostAdjacency::build(&store, &AdjacencyOptions::default(), None);
        assert_eq!(adjacency.cost(&id("a"), &id("b")), Some(-0.5));
    }

    #[test]
    fn test_slots_follow_insertion_order() {
        let store = sample();
        let adjacency = CostAdjacency::build(&store, &AdjacencyOptions::default(), None);

        for (slot, name) in ["a", "b", "c"].into_iter().enumerate() {
            assert_eq!(adjacency.slot_of(&id(name)), Some(slot));
            let index = store.index_of(&id(name)).unwrap();
            assert_eq!(adjacency.slot(index), Some(slot));
            assert_eq!(adjacency.index(slot), index);
        }
        assert_eq!(adjacency.slot_of(&id("z")), None);
        assert_eq!(adjacency.cost(&id("z"), &id("a")), None);
    }
}
