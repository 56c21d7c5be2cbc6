//! Graph data structures and operations.
//!
//! This module provides the node/edge store built on petgraph's StableGraph,
//! with per-node adjacency (`Links`) that preserves link order for
//! deterministic traversal.

mod edge;
mod links;
mod node;
mod store;

pub use edge::{Edge, EdgeAttrs, EdgeId, EdgeStyle};
pub use links::Links;
pub use node::{Node, NodeAttrs, NodeId, NodeStyle};
pub use petgraph::stable_graph::NodeIndex;
pub use store::{DEFAULT_DISTANCE, GraphStore};
