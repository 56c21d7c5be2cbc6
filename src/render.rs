//! Boundary to an external renderer.
//!
//! The crate never draws. A renderer implements [`RenderSink`] and is handed
//! every edge and node, with display positions and style, once per frame.
//! Node and edge "types" are plain attributes (`Edge::kind`, `Node::label`)
//! the sink can dispatch on.

use crate::graph::{Edge, GraphStore, Node};

/// Receives the visible parts of a graph, edges first so nodes paint over them.
pub trait RenderSink {
    /// Called once per edge, in insertion order.
    fn draw_edge(&mut self, edge: &Edge, node1: &Node, node2: &Node);

    /// Called once per node, in insertion order, after all edges.
    fn draw_node(&mut self, node: &Node);
}

/// Hand every edge, then every node, to `sink`.
pub fn render(store: &GraphStore, sink: &mut impl RenderSink) {
    for edge in store.edges() {
        let (node1, node2) = store.endpoints(edge);
        sink.draw_edge(edge, node1, node2);
    }
    for node in store.nodes() {
        sink.draw_node(node);
    }
}
