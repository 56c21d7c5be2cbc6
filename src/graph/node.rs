//! Node type and related structures.
//!
//! Nodes are the vertices in the graph. Each node has:
//! - A user-supplied identifier, unique within its store
//! - Simulation position (sx, sy) and velocity (vx, vy), owned by the layout
//! - Display position (x, y) = simulation position × the graph's `distance`
//! - Radius, fixed flag, style, and the analysis results `weight` / `centrality`

use std::fmt;

use petgraph::stable_graph::NodeIndex;
use serde::{Deserialize, Serialize};

use super::links::Links;

/// User-facing node identifier.
///
/// Either an integer or a name. Immutable once the node exists.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NodeId {
    Int(i64),
    Name(String),
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeId::Int(n) => write!(f, "{}", n),
            NodeId::Name(s) => f.write_str(s),
        }
    }
}

impl From<i64> for NodeId {
    #[inline]
    fn from(id: i64) -> Self {
        NodeId::Int(id)
    }
}

impl From<i32> for NodeId {
    #[inline]
    fn from(id: i32) -> Self {
        NodeId::Int(id as i64)
    }
}

impl From<u32> for NodeId {
    #[inline]
    fn from(id: u32) -> Self {
        NodeId::Int(id as i64)
    }
}

impl From<&str> for NodeId {
    #[inline]
    fn from(id: &str) -> Self {
        NodeId::Name(id.to_owned())
    }
}

impl From<String> for NodeId {
    #[inline]
    fn from(id: String) -> Self {
        NodeId::Name(id)
    }
}

impl From<&String> for NodeId {
    #[inline]
    fn from(id: &String) -> Self {
        NodeId::Name(id.clone())
    }
}

impl From<&NodeId> for NodeId {
    #[inline]
    fn from(id: &NodeId) -> Self {
        id.clone()
    }
}

/// Opaque drawing attributes, passed through to the renderer untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeStyle {
    pub fill: String,
    pub stroke: String,
    pub stroke_width: f64,
}

impl Default for NodeStyle {
    fn default() -> Self {
        Self {
            fill: "rgba(0,0,0,0)".to_owned(),
            stroke: "rgba(0,0,0,1)".to_owned(),
            stroke_width: 1.0,
        }
    }
}

/// Construction attributes for [`GraphStore::add_node`](super::GraphStore::add_node).
///
/// Ignored when the id already exists, except for `root`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeAttrs {
    /// Initial simulation x.
    pub x: f64,
    /// Initial simulation y.
    pub y: f64,
    pub radius: f64,
    pub fixed: bool,
    pub weight: f64,
    pub centrality: f64,
    pub label: Option<String>,
    /// Mark the node as the graph root.
    pub root: bool,
    pub style: NodeStyle,
}

impl Default for NodeAttrs {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            radius: 5.0,
            fixed: false,
            weight: 0.0,
            centrality: 0.0,
            label: None,
            root: false,
            style: NodeStyle::default(),
        }
    }
}

/// A graph vertex.
#[derive(Debug, Clone)]
pub struct Node {
    id: NodeId,
    index: NodeIndex,
    pub(crate) links: Links,
    // Display position, written by the layout.
    x: f64,
    y: f64,
    // Simulation state.
    sx: f64,
    sy: f64,
    vx: f64,
    vy: f64,
    pub radius: f64,
    fixed: bool,
    weight: f64,
    centrality: f64,
    pub label: Option<String>,
    pub style: NodeStyle,
}

impl Node {
    pub(crate) fn new(id: NodeId, index: NodeIndex, attrs: &NodeAttrs) -> Self {
        Self {
            id,
            index,
            links: Links::new(),
            x: 0.0,
            y: 0.0,
            sx: attrs.x,
            sy: attrs.y,
            vx: 0.0,
            vy: 0.0,
            radius: attrs.radius,
            fixed: attrs.fixed,
            weight: attrs.weight,
            centrality: attrs.centrality,
            label: attrs.label.clone(),
            style: attrs.style.clone(),
        }
    }

    #[inline]
    pub fn id(&self) -> &NodeId {
        &self.id
    }

    /// Stable handle of this node inside its store.
    #[inline]
    pub fn index(&self) -> NodeIndex {
        self.index
    }

    /// Adjacency index: neighbor handle -> connecting edge.
    #[inline]
    pub fn links(&self) -> &Links {
        &self.links
    }

    /// Display position.
    #[inline]
    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    /// Simulation position (display position / distance).
    #[inline]
    pub fn simulation_position(&self) -> (f64, f64) {
        (self.sx, self.sy)
    }

    #[inline]
    pub fn velocity(&self) -> (f64, f64) {
        (self.vx, self.vy)
    }

    /// Fixed nodes still push and pull on others but are never moved by the layout.
    #[inline]
    pub fn is_fixed(&self) -> bool {
        self.fixed
    }

    #[inline]
    pub fn set_fixed(&mut self, fixed: bool) {
        self.fixed = fixed;
    }

    /// Eigenvector centrality, as last computed.
    #[inline]
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Betweenness centrality, as last computed.
    #[inline]
    pub fn centrality(&self) -> f64 {
        self.centrality
    }

    /// Hit test in display coordinates.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        (self.x - x).abs() < self.radius * 2.0 && (self.y - y).abs() < self.radius * 2.0
    }

    /// Attributes that reproduce this node in another store.
    pub(crate) fn attrs(&self) -> NodeAttrs {
        NodeAttrs {
            x: 0.0,
            y: 0.0,
            radius: self.radius,
            fixed: self.fixed,
            weight: self.weight,
            centrality: self.centrality,
            label: self.label.clone(),
            root: false,
            style: self.style.clone(),
        }
    }

    pub(crate) fn set_index(&mut self, index: NodeIndex) {
        self.index = index;
    }

    pub(crate) fn set_weight(&mut self, weight: f64) {
        self.weight = weight;
    }

    pub(crate) fn set_centrality(&mut self, centrality: f64) {
        self.centrality = centrality;
    }

    pub(crate) fn set_simulation_state(&mut self, sx: f64, sy: f64, vx: f64, vy: f64) {
        self.sx = sx;
        self.sy = sy;
        self.vx = vx;
        self.vy = vy;
    }

    pub(crate) fn set_position(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_id_display() {
        assert_eq!(format!("{}", NodeId::from(42)), "42");
        assert_eq!(format!("{}", NodeId::from("cat")), "cat");
    }

    #[test]
    fn test_node_id_conversion() {
        let a: NodeId = "x".into();
        let b: NodeId = String::from("x").into();
        assert_eq!(a, b);

        let n: NodeId = 7u32.into();
        assert_eq!(n, NodeId::Int(7));
        assert_ne!(n, NodeId::from("7"));
    }

    #[test]
    fn test_node_id_untagged_serde() {
        let ids: Vec<NodeId> = serde_json::from_str(r#"[1, "b"]"#).unwrap();
        assert_eq!(ids, vec![NodeId::Int(1), NodeId::from("b")]);
    }

    #[test]
    fn test_node_attrs_defaults() {
        let attrs = NodeAttrs::default();
        assert_eq!(attrs.radius, 5.0);
        assert!(!attrs.fixed);
        assert_eq!(attrs.style.stroke, "rgba(0,0,0,1)");
    }

    #[test]
    fn test_contains() {
        let mut node = Node::new(NodeId::from(1), NodeIndex::new(0), &NodeAttrs::default());
        node.set_position(10.0, 10.0);
        assert!(node.contains(15.0, 5.0));
        assert!(!node.contains(21.0, 10.0));
    }

    #[test]
    fn test_fixed_flag() {
        let mut node = Node::new(NodeId::from(1), NodeIndex::new(0), &NodeAttrs::default());
        assert!(!node.is_fixed());
        node.set_fixed(true);
        assert!(node.is_fixed());
        node.set_fixed(false);
        assert!(!node.is_fixed());
    }
}
