//! Spring Graph
//!
//! An in-memory weighted graph with a force-directed layout and a set of
//! graph-theory algorithms. Rendering is left to the caller: the graph
//! exposes display positions and styles and hands them to a [`RenderSink`].
//!
//! # Architecture
//!
//! - `graph`: node/edge store on petgraph's StableGraph, per-node links
//! - `layout`: Null and Spring layouts behind one trait
//! - `algorithms`: traversal, shortest paths, centrality, topology edits
//! - `spatial`: R-tree index for hit testing display positions
//! - `render`: the renderer boundary
//!
//! Everything is synchronous and single-threaded; the caller decides when
//! the layout advances.
//!
//! ```
//! use spring_graph::{Graph, graph::{EdgeAttrs, NodeAttrs}};
//!
//! let mut g = Graph::new();
//! g.add_node("cat", NodeAttrs::default());
//! g.add_edge("cat", "tail", EdgeAttrs::weighted(0.5));
//! g.step();
//! assert_eq!(g.node_count(), 2);
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

pub mod algorithms;
pub mod config;
pub mod error;
pub mod graph;
pub mod layout;
pub mod render;
pub mod spatial;

use algorithms::{BetweennessOptions, EigenvectorOptions, PathOptions};
pub use config::GraphConfig;
pub use error::{GraphError, Result};
use graph::{Edge, EdgeAttrs, EdgeId, GraphStore, Node, NodeAttrs, NodeId};
use layout::{Bounds, DEFAULT_MOVE_LIMIT, DEFAULT_WEIGHT_FACTOR, Layout, LayoutEngine};
pub use render::RenderSink;

/// Layout steps per [`Graph::step`].
pub const DEFAULT_ITERATIONS: usize = 2;

/// Node value to order by in [`Graph::sorted`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Eigenvector centrality.
    #[default]
    Weight,
    /// Betweenness centrality.
    Centrality,
}

/// A graph together with its layout.
///
/// This is the main entry point: it owns the [`GraphStore`] and the active
/// [`LayoutEngine`] and forwards to the algorithms in [`algorithms`].
pub struct Graph {
    store: GraphStore,
    layout: LayoutEngine,
}

impl Graph {
    /// Create an empty graph with the default spring layout.
    pub fn new() -> Self {
        Self::with_config(&GraphConfig::default())
    }

    pub fn with_config(config: &GraphConfig) -> Self {
        Self {
            store: GraphStore::new(config.distance),
            layout: LayoutEngine::new(config.layout, config.spring.clone()),
        }
    }

    fn from_parts(store: GraphStore, layout: LayoutEngine) -> Self {
        Self { store, layout }
    }

    #[inline]
    pub fn store(&self) -> &GraphStore {
        &self.store
    }

    #[inline]
    pub fn store_mut(&mut self) -> &mut GraphStore {
        &mut self.store
    }

    #[inline]
    pub fn layout(&self) -> &LayoutEngine {
        &self.layout
    }

    #[inline]
    pub fn distance(&self) -> f64 {
        self.store.distance()
    }

    // =========================================================================
    // Nodes and Edges
    // =========================================================================

    /// Add a node, or return the existing node with the same id.
    pub fn add_node(&mut self, id: impl Into<NodeId>, attrs: NodeAttrs) -> &Node {
        let index = self.store.add_node(id, attrs);
        self.store.node_ref(index)
    }

    /// Add an edge, creating missing endpoints. An existing edge in the same
    /// direction is returned unchanged.
    pub fn add_edge(
        &mut self,
        id1: impl Into<NodeId>,
        id2: impl Into<NodeId>,
        attrs: EdgeAttrs,
    ) -> &Edge {
        let id = self.store.add_edge(id1, id2, attrs);
        self.store.edge_ref(id)
    }

    /// Remove a node and all its edges. False if the id is unknown.
    pub fn remove_node(&mut self, id: impl Into<NodeId>) -> bool {
        self.store.remove_node(id)
    }

    /// Remove an edge. Links are left for [`Graph::unlink`] to clean up.
    pub fn remove_edge(&mut self, id: EdgeId) -> bool {
        self.store.remove_edge(id)
    }

    pub fn node(&self, id: impl Into<NodeId>) -> Option<&Node> {
        self.store.node(id)
    }

    pub fn node_mut(&mut self, id: impl Into<NodeId>) -> Option<&mut Node> {
        self.store.node_mut(id)
    }

    /// The edge linking `id1` to `id2` (see [`GraphStore::edge`]).
    pub fn edge(&self, id1: impl Into<NodeId>, id2: impl Into<NodeId>) -> Option<&Edge> {
        self.store.edge(id1, id2)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        self.store.nodes()
    }

    pub fn edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.store.edges()
    }

    #[inline]
    pub fn node_count(&self) -> usize {
        self.store.node_count()
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.store.edge_count()
    }

    pub fn root(&self) -> Option<&Node> {
        self.store.root()
    }

    /// Remove all nodes and edges and reset the layout. The graph stays usable.
    pub fn clear(&mut self) {
        self.store.clear();
        self.layout.reset(&mut self.store);
    }

    // =========================================================================
    // Layout
    // =========================================================================

    /// Advance the layout `iterations` times.
    ///
    /// # Arguments
    ///
    /// * `iterations` - Number of layout steps
    /// * `weight_factor` - How strongly edge weight shortens a spring (default: 10)
    /// * `move_limit` - Per-axis cap on a node's movement per step (default: 0.5)
    pub fn update(&mut self, iterations: usize, weight_factor: f64, move_limit: f64) {
        for _ in 0..iterations {
            self.layout.update(&mut self.store, weight_factor, move_limit);
        }
    }

    /// [`Graph::update`] with the default arguments.
    pub fn step(&mut self) {
        self.update(
            DEFAULT_ITERATIONS,
            DEFAULT_WEIGHT_FACTOR,
            DEFAULT_MOVE_LIMIT,
        );
    }

    /// Extent of all simulation positions, for fitting the viewport.
    pub fn bounds(&self) -> Option<Bounds> {
        self.layout.bounds(&self.store)
    }

    pub fn reset_layout(&mut self) {
        self.layout.reset(&mut self.store);
    }

    // =========================================================================
    // Interaction
    // =========================================================================

    /// The node under a display coordinate.
    pub fn node_at(&mut self, x: f64, y: f64) -> Option<&Node> {
        self.store.node_at(x, y)
    }

    /// Pin a node and move it to a display coordinate.
    pub fn drag(&mut self, id: impl Into<NodeId>, x: f64, y: f64) -> bool {
        self.store.drag_node(id, x, y)
    }

    /// Unpin a dragged node.
    pub fn release(&mut self, id: impl Into<NodeId>) -> bool {
        self.store.release_node(id)
    }

    /// Hand every edge, then every node, to the renderer.
    pub fn render(&self, sink: &mut impl RenderSink) {
        render::render(&self.store, sink);
    }

    // =========================================================================
    // Traversal and Paths
    // =========================================================================

    pub fn depth_first_search<V, T>(
        &self,
        root: impl Into<NodeId>,
        visit: V,
        traversable: T,
    ) -> Result<bool>
    where
        V: FnMut(&Node) -> bool,
        T: Fn(&Node, &Edge) -> bool,
    {
        algorithms::depth_first_search(&self.store, root, visit, traversable)
    }

    pub fn breadth_first_search<V, T>(
        &self,
        root: impl Into<NodeId>,
        visit: V,
        traversable: T,
    ) -> Result<bool>
    where
        V: FnMut(&Node) -> bool,
        T: Fn(&Node, &Edge) -> bool,
    {
        algorithms::breadth_first_search(&self.store, root, visit, traversable)
    }

    pub fn shortest_path(
        &self,
        id1: impl Into<NodeId>,
        id2: impl Into<NodeId>,
        options: &PathOptions<'_>,
    ) -> Result<Vec<NodeId>> {
        algorithms::shortest_path(&self.store, id1, id2, options)
    }

    pub fn shortest_paths(
        &self,
        id: impl Into<NodeId>,
        options: &PathOptions<'_>,
    ) -> Result<HashMap<NodeId, Option<Vec<NodeId>>>> {
        algorithms::shortest_paths(&self.store, id, options)
    }

    pub fn paths(
        &self,
        id1: impl Into<NodeId>,
        id2: impl Into<NodeId>,
        max_length: usize,
    ) -> Vec<Vec<NodeId>> {
        algorithms::paths(&self.store, id1, id2, max_length)
    }

    pub fn edges_on_path(&self, path: &[NodeId]) -> Vec<Option<&Edge>> {
        algorithms::edges_on_path(&self.store, path)
    }

    // =========================================================================
    // Analysis
    // =========================================================================

    /// Betweenness centrality; also stored on each node's `centrality`.
    pub fn betweenness_centrality(&mut self, options: &BetweennessOptions) -> HashMap<NodeId, f64> {
        algorithms::betweenness_centrality(&mut self.store, options)
    }

    /// Eigenvector centrality; also stored on each node's `weight` when it converges.
    pub fn eigenvector_centrality(
        &mut self,
        options: &EigenvectorOptions,
    ) -> Result<HashMap<NodeId, f64>> {
        algorithms::eigenvector_centrality(&mut self.store, options)
    }

    /// Edge count against the maximum possible edge count.
    pub fn density(&self) -> f64 {
        algorithms::density(&self.store)
    }

    /// Nodes whose `key` value is above `threshold`, highest first.
    ///
    /// Equal values keep insertion order.
    pub fn sorted(&self, key: SortKey, threshold: f64) -> Vec<&Node> {
        let value = |node: &Node| match key {
            SortKey::Weight => node.weight(),
            SortKey::Centrality => node.centrality(),
        };
        let mut nodes: Vec<&Node> = self
            .store
            .nodes()
            .filter(|&node| value(node) > threshold)
            .collect();
        nodes.sort_by(|a, b| value(b).total_cmp(&value(a)));
        nodes
    }

    /// Leaf nodes and their neighborhoods up to `depth` hops.
    pub fn fringe(&self, depth: usize) -> Vec<NodeId> {
        algorithms::fringe(&self.store, depth)
    }

    // =========================================================================
    // Topology
    // =========================================================================

    /// Connected components as independent graphs, largest first.
    pub fn partition(&self) -> Vec<Graph> {
        algorithms::partition(&self.store)
            .into_iter()
            .map(|store| Graph::from_parts(store, self.layout.copy()))
            .collect()
    }

    /// Remove nodes with `depth` or fewer edges. Returns how many were removed.
    pub fn prune(&mut self, depth: usize) -> usize {
        algorithms::prune(&mut self.store, depth)
    }

    /// Remove edges between two nodes, or all edges of `id1`.
    pub fn unlink(&mut self, id1: impl Into<NodeId>, id2: Option<NodeId>) -> Result<usize> {
        algorithms::unlink(&mut self.store, &id1.into(), id2.as_ref())
    }

    pub fn redirect(&mut self, id1: impl Into<NodeId>, id2: impl Into<NodeId>) -> Result<()> {
        algorithms::redirect(&mut self.store, &id1.into(), &id2.into())
    }

    pub fn cut(&mut self, id: impl Into<NodeId>) -> Result<()> {
        algorithms::cut(&mut self.store, &id.into())
    }

    pub fn insert(
        &mut self,
        id: impl Into<NodeId>,
        a: impl Into<NodeId>,
        b: impl Into<NodeId>,
    ) -> Result<()> {
        algorithms::insert(&mut self.store, &id.into(), &a.into(), &b.into())
    }

    /// Independent graph with the given nodes (all nodes if `None`) and the
    /// edges between them.
    ///
    /// Attributes carry over; positions and the layout start fresh.
    pub fn copy(&self, ids: Option<&[NodeId]>) -> Graph {
        let nodes: Vec<_> = match ids {
            Some(ids) => ids.iter().filter_map(|id| self.store.index_of(id)).collect(),
            None => self.store.node_indices().collect(),
        };
        Graph::from_parts(self.store.copy(&nodes), self.layout.copy())
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}
