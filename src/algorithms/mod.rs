//! Graph algorithms.
//!
//! - Traversal: depth-first and breadth-first search over node links
//! - Paths: Dijkstra over edge costs, simple-path enumeration
//! - Centrality: Brandes betweenness, eigenvector power iteration
//! - Topology: unlink, redirect, cut, insert, prune, fringe, partition
//!
//! Everything here runs synchronously over a [`GraphStore`](crate::graph::GraphStore).
//! The store must not be mutated by callbacks while an algorithm runs.

pub mod adjacency;
pub mod centrality;
mod heap;
pub mod paths;
pub mod topology;
pub mod traversal;

pub use adjacency::{AdjacencyOptions, CostAdjacency, Heuristic};
pub use centrality::{
    BetweennessOptions, EigenvectorOptions, betweenness_centrality, eigenvector_centrality,
};
pub use paths::{
    DEFAULT_MAX_PATH_LENGTH, PathOptions, edges_on_path, paths, shortest_path, shortest_paths,
};
pub use topology::{cut, density, fringe, insert, partition, prune, redirect, unlink};
pub use traversal::{breadth_first_search, depth_first_search};
