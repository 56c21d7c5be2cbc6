//! Betweenness and eigenvector centrality.
//!
//! Both run over the cost adjacency and write their result back onto the
//! nodes: betweenness into `centrality`, eigenvector into `weight`.

use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use super::adjacency::{AdjacencyOptions, CostAdjacency};
use super::heap::MinHeap;
use crate::error::{GraphError, Result};
use crate::graph::{GraphStore, NodeId};
use crate::layout::spring::DEFAULT_SEED;

/// Constant added per neighbor in every power-iteration step.
const EPSILON: f64 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BetweennessOptions {
    /// Divide every score by the maximum.
    pub normalized: bool,
    pub directed: bool,
}

impl Default for BetweennessOptions {
    fn default() -> Self {
        Self {
            normalized: true,
            directed: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EigenvectorOptions {
    /// Rescale so the maximum is 1.
    pub normalized: bool,
    /// Score incoming rather than outgoing connections.
    pub reversed: bool,
    pub directed: bool,
    pub iterations: usize,
    pub tolerance: f64,
    /// Per-node multiplier on the score a node accumulates (default 1).
    pub rating: HashMap<NodeId, f64>,
    /// Seed for the random start vector.
    pub seed: u64,
}

impl Default for EigenvectorOptions {
    fn default() -> Self {
        Self {
            normalized: true,
            reversed: true,
            directed: false,
            iterations: 100,
            tolerance: 1e-4,
            rating: HashMap::new(),
            seed: DEFAULT_SEED,
        }
    }
}

/// Brandes' betweenness centrality: how many shortest paths run through
/// each node.
///
/// Every node's `centrality` is updated; the same scores are returned.
pub fn betweenness_centrality(
    store: &mut GraphStore,
    options: &BetweennessOptions,
) -> HashMap<NodeId, f64> {
    let adjacency = CostAdjacency::build(
        store,
        &AdjacencyOptions {
            directed: options.directed,
            ..AdjacencyOptions::default()
        },
        None,
    );
    let n = adjacency.len();
    let mut scores = vec![0.0; n];

    for source in 0..n {
        let mut settled = vec![false; n];
        let mut seen: Vec<Option<f64>> = vec![None; n];
        let mut predecessors: Vec<Vec<usize>> = vec![Vec::new(); n];
        let mut sigma = vec![0.0; n];
        let mut order = Vec::with_capacity(n);
        let mut queue = MinHeap::new();

        sigma[source] = 1.0;
        seen[source] = Some(0.0);
        queue.push(0.0, source);
        while let Some((distance, v)) = queue.pop() {
            if settled[v] {
                continue;
            }
            settled[v] = true;
            order.push(v);

            for &(w, cost) in adjacency.neighbors(v) {
                if settled[w] {
                    continue;
                }
                let candidate = distance + cost;
                match seen[w] {
                    Some(best) if candidate > best => {}
                    Some(best) if candidate == best => {
                        sigma[w] += sigma[v];
                        predecessors[w].push(v);
                    }
                    _ => {
                        seen[w] = Some(candidate);
                        sigma[w] = sigma[v];
                        predecessors[w] = vec![v];
                        queue.push(candidate, w);
                    }
                }
            }
        }

        let mut dependency = vec![0.0; n];
        while let Some(w) = order.pop() {
            for &v in &predecessors[w] {
                dependency[v] += sigma[v] / sigma[w] * (1.0 + dependency[w]);
            }
            if w != source {
                scores[w] += dependency[w];
            }
        }
    }

    if options.normalized {
        let max = scores.iter().copied().fold(0.0, f64::max);
        let max = if max == 0.0 { 1.0 } else { max };
        for score in &mut scores {
            *score /= max;
        }
    }

    for (slot, &score) in scores.iter().enumerate() {
        if let Some(node) = store.node_by_index_mut(adjacency.index(slot)) {
            node.set_centrality(score);
        }
    }
    adjacency.ids().iter().cloned().zip(scores).collect()
}

/// Eigenvector centrality by power iteration.
///
/// On convergence every node's `weight` is updated and the scores returned.
/// Otherwise weights are left alone and the last iterate comes back inside
/// [`GraphError::NonConvergence`].
pub fn eigenvector_centrality(
    store: &mut GraphStore,
    options: &EigenvectorOptions,
) -> Result<HashMap<NodeId, f64>> {
    let adjacency = CostAdjacency::build(
        store,
        &AdjacencyOptions {
            directed: options.directed,
            reversed: options.reversed,
            stochastic: false,
        },
        None,
    );
    let n = adjacency.len();
    if n == 0 {
        return Ok(HashMap::new());
    }

    let rating: Vec<f64> = adjacency
        .ids()
        .iter()
        .map(|id| options.rating.get(id).copied().unwrap_or(1.0))
        .collect();

    let mut rng = StdRng::seed_from_u64(options.seed);
    let mut vector: Vec<f64> = (0..n).map(|_| rng.gen_range(0.0..1.0)).collect();
    normalize(&mut vector);

    for _ in 0..options.iterations {
        let previous = std::mem::replace(&mut vector, vec![0.0; n]);
        for (n1, score) in vector.iter_mut().enumerate() {
            for &(n2, cost) in adjacency.neighbors(n1) {
                *score += EPSILON + previous[n2] * cost * rating[n1];
            }
        }
        normalize(&mut vector);

        let change: f64 = vector
            .iter()
            .zip(&previous)
            .map(|(a, b)| (a - b).abs())
            .sum();
        if change < n as f64 * options.tolerance {
            if options.normalized {
                let max = vector.iter().copied().fold(0.0, f64::max);
                let max = if max == 0.0 { 1.0 } else { max };
                for score in &mut vector {
                    *score /= max;
                }
            }
            for (slot, &score) in vector.iter().enumerate() {
                if let Some(node) = store.node_by_index_mut(adjacency.index(slot)) {
                    node.set_weight(score);
                }
            }
            return Ok(adjacency.ids().iter().cloned().zip(vector).collect());
        }
    }

    tracing::warn!(
        iterations = options.iterations,
        nodes = n,
        "eigenvector centrality did not converge, node weights left unchanged"
    );
    Err(GraphError::NonConvergence {
        iterations: options.iterations,
        partial: adjacency.ids().iter().cloned().zip(vector).collect(),
    })
}

/// Scale to sum 1, unless the sum is 0.
fn normalize(vector: &mut [f64]) {
    let total: f64 = vector.iter().sum();
    let factor = if total == 0.0 { 1.0 } else { 1.0 / total };
    for value in vector {
        *value *= factor;
    }
}
