//! Error type shared by lookups, path queries and centrality.

use std::collections::HashMap;

use thiserror::Error;

use crate::graph::NodeId;

/// Recoverable failures reported by graph queries.
///
/// Structural violations (a handle that belongs to another store) are not
/// represented here: they panic, since they mean an invariant is already broken.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    /// The id does not name a node in this graph.
    #[error("node {0} not found")]
    NodeNotFound(NodeId),

    /// Both endpoints exist but no route connects them.
    #[error("no path from {from} to {to}")]
    Unreachable { from: NodeId, to: NodeId },

    /// Power iteration ran out of iterations before reaching tolerance.
    ///
    /// `partial` is the last iterate, normalized to sum 1.
    #[error("eigenvector centrality did not converge after {iterations} iterations")]
    NonConvergence {
        iterations: usize,
        partial: HashMap<NodeId, f64>,
    },
}

pub type Result<T> = std::result::Result<T, GraphError>;
