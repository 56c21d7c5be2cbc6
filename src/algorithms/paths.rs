//! Shortest paths over the cost adjacency, plus brute-force path enumeration.

use std::collections::HashMap;
use std::fmt;

use super::adjacency::{AdjacencyOptions, CostAdjacency, Heuristic};
use super::heap::MinHeap;
use crate::error::{GraphError, Result};
use crate::graph::{Edge, GraphStore, NodeId, NodeIndex};

/// Default `max_length` for [`paths`].
pub const DEFAULT_MAX_PATH_LENGTH: usize = 4;

/// Options for [`shortest_path`] and [`shortest_paths`].
#[derive(Clone, Copy, Default)]
pub struct PathOptions<'a> {
    pub directed: bool,
    pub reversed: bool,
    pub heuristic: Option<Heuristic<'a>>,
}

impl fmt::Debug for PathOptions<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PathOptions")
            .field("directed", &self.directed)
            .field("reversed", &self.reversed)
            .field("heuristic", &self.heuristic.is_some())
            .finish()
    }
}

impl PathOptions<'_> {
    fn adjacency(&self, store: &GraphStore) -> CostAdjacency {
        let options = AdjacencyOptions {
            directed: self.directed,
            reversed: self.reversed,
            stochastic: false,
        };
        CostAdjacency::build(store, &options, self.heuristic)
    }
}

/// Cheapest route from `id1` to `id2`, as node ids including both ends.
///
/// Among equally cheap routes the one found first wins.
pub fn shortest_path(
    store: &GraphStore,
    id1: impl Into<NodeId>,
    id2: impl Into<NodeId>,
    options: &PathOptions<'_>,
) -> Result<Vec<NodeId>> {
    let (from, to) = (id1.into(), id2.into());
    let source = resolve(store, &from)?;
    let target = resolve(store, &to)?;

    let adjacency = options.adjacency(store);
    let (Some(source), Some(target)) = (adjacency.slot(source), adjacency.slot(target)) else {
        return Err(GraphError::Unreachable { from, to });
    };

    let previous = dijkstra(&adjacency, source, Some(target));
    trace_back(&adjacency, &previous, source, target).ok_or(GraphError::Unreachable { from, to })
}

/// Cheapest route from `id` to every node in the graph.
///
/// The source maps to `[id]`; unreachable nodes map to `None`.
pub fn shortest_paths(
    store: &GraphStore,
    id: impl Into<NodeId>,
    options: &PathOptions<'_>,
) -> Result<HashMap<NodeId, Option<Vec<NodeId>>>> {
    let id = id.into();
    let source = resolve(store, &id)?;

    let adjacency = options.adjacency(store);
    let Some(source) = adjacency.slot(source) else {
        return Err(GraphError::NodeNotFound(id));
    };

    let previous = dijkstra(&adjacency, source, None);
    Ok((0..adjacency.len())
        .map(|slot| {
            let path = trace_back(&adjacency, &previous, source, slot);
            (adjacency.ids()[slot].clone(), path)
        })
        .collect())
}

/// Every simple path from `id1` to `id2` with at most `max_length` nodes,
/// shortest first.
///
/// Cost grows exponentially with `max_length`.
pub fn paths(
    store: &GraphStore,
    id1: impl Into<NodeId>,
    id2: impl Into<NodeId>,
    max_length: usize,
) -> Vec<Vec<NodeId>> {
    let (Some(from), Some(to)) = (store.index_of(&id1.into()), store.index_of(&id2.into())) else {
        return Vec::new();
    };

    let mut found = Vec::new();
    let mut path = Vec::new();
    collect_paths(store, from, to, max_length, &mut path, &mut found);
    found.sort_by_key(|p| p.len());

    found
        .into_iter()
        .map(|p| {
            p.into_iter()
                .filter_map(|index| store.node_by_index(index).map(|n| n.id().clone()))
                .collect()
        })
        .collect()
}

fn collect_paths(
    store: &GraphStore,
    current: NodeIndex,
    target: NodeIndex,
    max_length: usize,
    path: &mut Vec<NodeIndex>,
    found: &mut Vec<Vec<NodeIndex>>,
) {
    if path.len() >= max_length {
        return;
    }
    path.push(current);
    if current == target {
        found.push(path.clone());
    } else if let Some(node) = store.node_by_index(current) {
        for neighbor in node.links().neighbors() {
            if path.contains(&neighbor) || store.link_edge(current, neighbor).is_none() {
                continue;
            }
            collect_paths(store, neighbor, target, max_length, path, found);
        }
    }
    path.pop();
}

/// The edge connecting each successive pair of a path.
///
/// `None` where two successive nodes are not linked.
pub fn edges_on_path<'a>(store: &'a GraphStore, path: &[NodeId]) -> Vec<Option<&'a Edge>> {
    path.windows(2)
        .map(|pair| {
            let a = store.index_of(&pair[0])?;
            let b = store.index_of(&pair[1])?;
            store.link_edge(a, b)
        })
        .collect()
}

/// Predecessor slot of every settled slot, from `source` outward.
///
/// Stops early once `target` is settled.
fn dijkstra(adjacency: &CostAdjacency, source: usize, target: Option<usize>) -> Vec<Option<usize>> {
    let n = adjacency.len();
    let mut distance = vec![f64::INFINITY; n];
    let mut previous = vec![None; n];
    let mut settled = vec![false; n];
    let mut queue = MinHeap::new();

    distance[source] = 0.0;
    queue.push(0.0, source);
    while let Some((cost, v)) = queue.pop() {
        if settled[v] {
            continue;
        }
        settled[v] = true;
        if Some(v) == target {
            break;
        }
        for &(w, step) in adjacency.neighbors(v) {
            let candidate = cost + step;
            if !settled[w] && candidate < distance[w] {
                distance[w] = candidate;
                previous[w] = Some(v);
                queue.push(candidate, w);
            }
        }
    }
    previous
}

fn trace_back(
    adjacency: &CostAdjacency,
    previous: &[Option<usize>],
    source: usize,
    target: usize,
) -> Option<Vec<NodeId>> {
    let mut slots = vec![target];
    let mut current = target;
    while current != source {
        current = previous[current]?;
        slots.push(current);
    }
    Some(
        slots
            .into_iter()
            .rev()
            .map(|slot| adjacency.ids()[slot].clone())
            .collect(),
    )
}

fn resolve(store: &GraphStore, id: &NodeId) -> Result<NodeIndex> {
    store.index_of(id).ok_or_else(|| GraphError::NodeNotFound(id.clone()))
}
