//! Edge type and related structures.
//!
//! Edges are the connections between nodes. Each edge has:
//! - A stable unique identifier, never reused within a store
//! - An ordered (node1, node2) pair
//! - Weight (importance, not cost) and rest length for the layout
//! - A free-form type tag and drawing style

use std::fmt;

use petgraph::stable_graph::NodeIndex;
use serde::{Deserialize, Serialize};

/// Stable edge identifier.
///
/// This ID remains valid even after other edges are removed from the graph,
/// and a removed edge's ID never resolves to a different edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(pub u32);

impl EdgeId {
    /// Create a new EdgeId from a raw u32.
    #[inline]
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw u32 value.
    #[inline]
    pub fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Edge({})", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeStyle {
    pub stroke: String,
    pub stroke_width: f64,
}

impl Default for EdgeStyle {
    fn default() -> Self {
        Self {
            stroke: "rgba(0,0,0,1)".to_owned(),
            stroke_width: 0.5,
        }
    }
}

/// Construction attributes for [`GraphStore::add_edge`](super::GraphStore::add_edge).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeAttrs {
    /// Importance in `[0, 1]`; path cost is `1 - weight * 0.5`.
    pub weight: f64,
    /// Rest length for the spring layout.
    pub length: f64,
    /// Classification tag, e.g. "is-a".
    pub kind: Option<String>,
    pub style: EdgeStyle,
}

impl Default for EdgeAttrs {
    fn default() -> Self {
        Self {
            weight: 0.0,
            length: 1.0,
            kind: None,
            style: EdgeStyle::default(),
        }
    }
}

impl EdgeAttrs {
    /// Default attributes with the given weight.
    pub fn weighted(weight: f64) -> Self {
        Self {
            weight,
            ..Self::default()
        }
    }
}

/// A directed connection; consumers may treat it as undirected.
#[derive(Debug, Clone)]
pub struct Edge {
    id: EdgeId,
    node1: NodeIndex,
    node2: NodeIndex,
    pub weight: f64,
    pub length: f64,
    pub kind: Option<String>,
    pub style: EdgeStyle,
}

impl Edge {
    pub(crate) fn new(id: EdgeId, node1: NodeIndex, node2: NodeIndex, attrs: &EdgeAttrs) -> Self {
        Self {
            id,
            node1,
            node2,
            weight: attrs.weight,
            length: attrs.length,
            kind: attrs.kind.clone(),
            style: attrs.style.clone(),
        }
    }

    #[inline]
    pub fn id(&self) -> EdgeId {
        self.id
    }

    /// The node the edge starts from.
    #[inline]
    pub fn node1(&self) -> NodeIndex {
        self.node1
    }

    /// The node the edge points to.
    #[inline]
    pub fn node2(&self) -> NodeIndex {
        self.node2
    }

    /// True if `node` is either endpoint.
    #[inline]
    pub fn touches(&self, node: NodeIndex) -> bool {
        self.node1 == node || self.node2 == node
    }

    /// True if the edge joins `a` and `b`, in either direction.
    #[inline]
    pub fn connects(&self, a: NodeIndex, b: NodeIndex) -> bool {
        (self.node1 == a && self.node2 == b) || (self.node1 == b && self.node2 == a)
    }

    pub(crate) fn attrs(&self) -> EdgeAttrs {
        EdgeAttrs {
            weight: self.weight,
            length: self.length,
            kind: self.kind.clone(),
            style: self.style.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_id() {
        let id = EdgeId::new(42);
        assert_eq!(id.raw(), 42);
        assert_eq!(format!("{}", id), "Edge(42)");
    }

    #[test]
    fn test_edge_endpoints() {
        let a = NodeIndex::new(0);
        let b = NodeIndex::new(1);
        let c = NodeIndex::new(2);
        let edge = Edge::new(EdgeId(0), a, b, &EdgeAttrs::weighted(0.5));

        assert!(edge.touches(a));
        assert!(edge.touches(b));
        assert!(!edge.touches(c));
        assert!(edge.connects(b, a));
        assert!(!edge.connects(a, c));
        assert_eq!(edge.attrs().weight, 0.5);
        assert_eq!(edge.length, 1.0);
    }

    #[test]
    fn test_edge_attrs_from_partial_json() {
        let attrs: EdgeAttrs = serde_json::from_str(r#"{"weight": 0.9, "kind": "is-a"}"#).unwrap();
        assert_eq!(attrs.weight, 0.9);
        assert_eq!(attrs.length, 1.0);
        assert_eq!(attrs.kind.as_deref(), Some("is-a"));
    }
}
