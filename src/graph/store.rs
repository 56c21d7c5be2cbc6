//! GraphStore - Core graph data structure.
//!
//! The GraphStore keeps the topology in petgraph's StableGraph, which acts as
//! an arena: nodes are addressed by stable `NodeIndex` handles and adjacency
//! holds handles rather than owning references. Edges get a monotonically
//! issued `EdgeId`, so a handle to a removed edge never resolves to a newer
//! edge that happens to reuse the petgraph slot.

use std::collections::{HashMap, HashSet};

use petgraph::stable_graph::{EdgeIndex, NodeIndex, StableGraph};
use petgraph::visit::EdgeRef;
use petgraph::{Directed, Direction};

use super::edge::{Edge, EdgeAttrs, EdgeId};
use super::node::{Node, NodeAttrs, NodeId};
use crate::layout::Bounds;
use crate::spatial::SpatialIndex;

/// Default display scale: display position = simulation position × distance.
pub const DEFAULT_DISTANCE: f64 = 10.0;

/// The node/edge store.
///
/// This struct manages:
/// - Graph topology via petgraph
/// - ID mapping between user ids / stable edge ids and petgraph indices
/// - Insertion order of nodes and edges (iteration order everywhere)
/// - Spatial index for hit testing
pub struct GraphStore {
    /// The underlying graph structure.
    graph: StableGraph<Node, Edge, Directed>,

    /// Map from user NodeId to petgraph NodeIndex
    node_id_to_index: HashMap<NodeId, NodeIndex>,

    /// Map from stable EdgeId to petgraph EdgeIndex
    edge_id_to_index: HashMap<EdgeId, EdgeIndex>,

    /// Reverse map from petgraph EdgeIndex to stable EdgeId (for O(1) lookup during removal)
    edge_index_to_id: HashMap<EdgeIndex, EdgeId>,

    /// Next edge ID to assign
    next_edge_id: u32,

    /// Nodes in insertion order
    node_order: Vec<NodeIndex>,

    /// Edges in insertion order
    edge_order: Vec<EdgeId>,

    root: Option<NodeIndex>,

    /// Display scale factor
    distance: f64,

    /// Spatial index over display positions
    spatial: SpatialIndex,

    /// Whether the spatial index needs rebuilding
    spatial_dirty: bool,
}

impl GraphStore {
    /// Create a new empty store with the given display scale.
    pub fn new(distance: f64) -> Self {
        Self::with_capacity(distance, 0, 0)
    }

    /// Create a store with pre-allocated capacity.
    pub fn with_capacity(distance: f64, node_capacity: usize, edge_capacity: usize) -> Self {
        Self {
            graph: StableGraph::with_capacity(node_capacity, edge_capacity),
            node_id_to_index: HashMap::with_capacity(node_capacity),
            edge_id_to_index: HashMap::with_capacity(edge_capacity),
            edge_index_to_id: HashMap::with_capacity(edge_capacity),
            next_edge_id: 0,
            node_order: Vec::with_capacity(node_capacity),
            edge_order: Vec::with_capacity(edge_capacity),
            root: None,
            distance,
            spatial: SpatialIndex::new(),
            spatial_dirty: false,
        }
    }

    #[inline]
    pub fn distance(&self) -> f64 {
        self.distance
    }

    // =========================================================================
    // Node Operations
    // =========================================================================

    /// Add a node, or return the existing one with the same id.
    ///
    /// On re-add only `attrs.root` is honored.
    pub fn add_node(&mut self, id: impl Into<NodeId>, attrs: NodeAttrs) -> NodeIndex {
        let id = id.into();
        let index = match self.node_id_to_index.get(&id) {
            Some(&index) => index,
            None => {
                // The node stores its own handle, which is only known after insertion.
                let index = self.graph.add_node(Node::new(id.clone(), NodeIndex::end(), &attrs));
                self.graph[index].set_index(index);
                self.node_id_to_index.insert(id, index);
                self.node_order.push(index);
                self.spatial_dirty = true;
                index
            }
        };
        if attrs.root {
            self.root = Some(index);
        }
        index
    }

    /// Remove a node and every edge touching it.
    ///
    /// Returns false if the id is unknown.
    pub fn remove_node(&mut self, id: impl Into<NodeId>) -> bool {
        let id = id.into();
        let Some(index) = self.node_id_to_index.remove(&id) else {
            return false;
        };

        let mut removed = HashSet::new();
        let mut neighbors: Vec<NodeIndex> = self.graph[index].links.neighbors().collect();
        let incident: Vec<_> = self
            .graph
            .edges_directed(index, Direction::Outgoing)
            .chain(self.graph.edges_directed(index, Direction::Incoming))
            .map(|e| (e.id(), e.source(), e.target()))
            .collect();
        for (edge_index, source, target) in incident {
            neighbors.push(source);
            neighbors.push(target);
            if let Some(edge_id) = self.edge_index_to_id.remove(&edge_index) {
                self.edge_id_to_index.remove(&edge_id);
                removed.insert(edge_id);
            }
        }
        self.edge_order.retain(|e| !removed.contains(e));

        for neighbor in neighbors {
            if neighbor == index {
                continue;
            }
            if let Some(node) = self.graph.node_weight_mut(neighbor) {
                node.links.remove(index);
            }
        }

        self.node_order.retain(|&n| n != index);
        if self.root == Some(index) {
            self.root = None;
        }
        self.graph.remove_node(index);
        self.spatial_dirty = true;
        true
    }

    /// Get the number of nodes.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn contains(&self, id: &NodeId) -> bool {
        self.node_id_to_index.contains_key(id)
    }

    /// Look up a node by id.
    pub fn node(&self, id: impl Into<NodeId>) -> Option<&Node> {
        self.index_of(&id.into()).map(|index| &self.graph[index])
    }

    /// Mutable access for style and `fixed` changes.
    pub fn node_mut(&mut self, id: impl Into<NodeId>) -> Option<&mut Node> {
        let index = self.index_of(&id.into())?;
        self.graph.node_weight_mut(index)
    }

    /// Handle of the node with the given id.
    #[inline]
    pub fn index_of(&self, id: &NodeId) -> Option<NodeIndex> {
        self.node_id_to_index.get(id).copied()
    }

    pub fn node_by_index(&self, index: NodeIndex) -> Option<&Node> {
        self.graph.node_weight(index)
    }

    /// Node behind a handle issued by this store.
    ///
    /// # Panics
    ///
    /// If the handle is stale or foreign.
    pub fn node_ref(&self, index: NodeIndex) -> &Node {
        &self.graph[index]
    }

    pub(crate) fn node_by_index_mut(&mut self, index: NodeIndex) -> Option<&mut Node> {
        self.graph.node_weight_mut(index)
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        self.node_order.iter().map(|&index| &self.graph[index])
    }

    /// Node handles in insertion order.
    pub fn node_indices(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.node_order.iter().copied()
    }

    pub fn root(&self) -> Option<&Node> {
        self.root.map(|index| &self.graph[index])
    }

    /// Pin a node under the pointer and move it to a display coordinate.
    pub fn drag_node(&mut self, id: impl Into<NodeId>, x: f64, y: f64) -> bool {
        let distance = self.distance;
        let Some(node) = self.node_mut(id) else {
            return false;
        };
        node.set_fixed(true);
        node.set_simulation_state(x / distance, y / distance, 0.0, 0.0);
        node.set_position(x, y);
        self.spatial_dirty = true;
        true
    }

    /// Release a dragged node back to the layout.
    pub fn release_node(&mut self, id: impl Into<NodeId>) -> bool {
        match self.node_mut(id) {
            Some(node) => {
                node.set_fixed(false);
                true
            }
            None => false,
        }
    }

    // =========================================================================
    // Edge Operations
    // =========================================================================

    /// Add an edge, creating missing endpoints.
    ///
    /// If an edge in the same direction already exists it is returned unchanged.
    pub fn add_edge(
        &mut self,
        id1: impl Into<NodeId>,
        id2: impl Into<NodeId>,
        attrs: EdgeAttrs,
    ) -> EdgeId {
        let n1 = self.add_node(id1, NodeAttrs::default());
        let n2 = self.add_node(id2, NodeAttrs::default());
        self.add_edge_between(n1, n2, attrs)
    }

    /// Add an edge between two existing handles.
    ///
    /// # Panics
    ///
    /// If either handle does not belong to this store.
    pub fn add_edge_between(&mut self, n1: NodeIndex, n2: NodeIndex, attrs: EdgeAttrs) -> EdgeId {
        assert!(
            self.graph.contains_node(n1) && self.graph.contains_node(n2),
            "edge endpoints must belong to this graph"
        );

        let existing = self.graph[n1]
            .links
            .edge(n2)
            .filter(|e| self.edge_id_to_index.contains_key(e));
        if let Some(edge) = existing.and_then(|e| self.edge_by_id(e)) {
            if edge.node1() == n1 && edge.node2() == n2 {
                return edge.id();
            }
        }

        let id = EdgeId(self.next_edge_id);
        self.next_edge_id += 1;

        let index = self.graph.add_edge(n1, n2, Edge::new(id, n1, n2, &attrs));
        self.edge_id_to_index.insert(id, index);
        self.edge_index_to_id.insert(index, id);
        self.edge_order.push(id);

        // n1 sees the new edge; n2 keeps pointing at its own live edge back to n1 if there is one.
        let reverse = self.graph[n2]
            .links
            .edge(n1)
            .and_then(|e| self.edge_by_id(e))
            .filter(|edge| edge.node1() == n2 && edge.node2() == n1)
            .map(Edge::id);
        self.graph[n1].links.append(n2, id);
        self.graph[n2].links.append(n1, reverse.unwrap_or(id));
        id
    }

    /// Remove an edge from the edge collection.
    ///
    /// Adjacency is left alone (see `algorithms::topology::unlink`), and the
    /// opposite-direction edge, if any, is not touched.
    pub fn remove_edge(&mut self, id: EdgeId) -> bool {
        if let Some(index) = self.edge_id_to_index.remove(&id) {
            self.edge_index_to_id.remove(&index);
            self.graph.remove_edge(index);
            self.edge_order.retain(|&e| e != id);
            true
        } else {
            false
        }
    }

    /// Get the number of edges.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// The edge recorded in `id1`'s adjacency for `id2`.
    ///
    /// This is the reverse-direction edge when only `id2 -> id1` exists.
    pub fn edge(&self, id1: impl Into<NodeId>, id2: impl Into<NodeId>) -> Option<&Edge> {
        let n1 = self.index_of(&id1.into())?;
        let n2 = self.index_of(&id2.into())?;
        self.link_edge(n1, n2)
    }

    /// Resolve the adjacency entry `n1 -> n2`, skipping edges removed since.
    pub fn link_edge(&self, n1: NodeIndex, n2: NodeIndex) -> Option<&Edge> {
        let id = self.graph.node_weight(n1)?.links.edge(n2)?;
        self.edge_by_id(id).filter(|edge| edge.connects(n1, n2))
    }

    pub fn edge_by_id(&self, id: EdgeId) -> Option<&Edge> {
        self.edge_id_to_index
            .get(&id)
            .and_then(|&index| self.graph.edge_weight(index))
    }

    /// Edge behind a live id.
    ///
    /// # Panics
    ///
    /// If the edge has been removed.
    pub(crate) fn edge_ref(&self, id: EdgeId) -> &Edge {
        &self.graph[self.edge_id_to_index[&id]]
    }

    pub fn edge_by_id_mut(&mut self, id: EdgeId) -> Option<&mut Edge> {
        let index = *self.edge_id_to_index.get(&id)?;
        self.graph.edge_weight_mut(index)
    }

    /// Edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.edge_order
            .iter()
            .filter_map(|&id| self.edge_by_id(id))
    }

    /// Both endpoints of an edge.
    pub fn endpoints(&self, edge: &Edge) -> (&Node, &Node) {
        (&self.graph[edge.node1()], &self.graph[edge.node2()])
    }

    /// Edges touching a node, in insertion order.
    pub fn incident_edges(&self, index: NodeIndex) -> Vec<EdgeId> {
        if !self.graph.contains_node(index) {
            return Vec::new();
        }
        let mut ids: Vec<EdgeId> = self
            .graph
            .edges_directed(index, Direction::Outgoing)
            .chain(self.graph.edges_directed(index, Direction::Incoming))
            .filter_map(|e| self.edge_index_to_id.get(&e.id()).copied())
            .collect();
        // Ids are issued in insertion order.
        ids.sort_unstable();
        ids.dedup();
        ids
    }

    /// Number of edges touching a node (a self-loop counts once).
    pub fn degree(&self, index: NodeIndex) -> usize {
        self.incident_edges(index).len()
    }

    /// Linked neighbors of a node, in link order.
    pub fn neighbors(&self, index: NodeIndex) -> impl Iterator<Item = &Node> + '_ {
        self.graph
            .node_weight(index)
            .into_iter()
            .flat_map(|node| node.links.neighbors())
            .filter_map(|n| self.graph.node_weight(n))
    }

    /// The node and everything linked to it within `depth` hops.
    ///
    /// Depth 0 yields only the node itself.
    pub fn flatten(&self, index: NodeIndex, depth: usize) -> Vec<NodeIndex> {
        let mut order = Vec::new();
        let mut visited = HashMap::new();
        if self.graph.contains_node(index) {
            self.flatten_into(index, depth, &mut order, &mut visited);
        }
        order
    }

    fn flatten_into(
        &self,
        index: NodeIndex,
        depth: usize,
        order: &mut Vec<NodeIndex>,
        visited: &mut HashMap<NodeIndex, usize>,
    ) {
        if visited.insert(index, depth).is_none() {
            order.push(index);
        }
        if depth == 0 {
            return;
        }
        for neighbor in self.graph[index].links.neighbors() {
            if !self.graph.contains_node(neighbor) {
                continue;
            }
            // Revisit when reached again with more depth to spare.
            let revisit = visited.get(&neighbor).is_none_or(|&d| d < depth - 1);
            if revisit {
                self.flatten_into(neighbor, depth - 1, order, visited);
            }
        }
    }

    pub(crate) fn unlink_pair(&mut self, a: NodeIndex, b: NodeIndex) {
        if let Some(node) = self.graph.node_weight_mut(a) {
            node.links.remove(b);
        }
        if let Some(node) = self.graph.node_weight_mut(b) {
            node.links.remove(a);
        }
    }

    pub(crate) fn clear_links(&mut self, index: NodeIndex) {
        let neighbors: Vec<NodeIndex> = match self.graph.node_weight(index) {
            Some(node) => node.links.neighbors().collect(),
            None => return,
        };
        for neighbor in neighbors {
            if let Some(node) = self.graph.node_weight_mut(neighbor) {
                node.links.remove(index);
            }
        }
        self.graph[index].links.clear();
    }

    // =========================================================================
    // Spatial Queries
    // =========================================================================

    /// The node whose hit box contains the display coordinate, if any.
    ///
    /// When hit boxes overlap the node nearest to the point wins.
    pub fn node_at(&mut self, x: f64, y: f64) -> Option<&Node> {
        if self.spatial_dirty {
            self.rebuild_spatial_index();
        }
        let reach = self.spatial.reach();
        let graph = &self.graph;
        self.spatial
            .in_rect(x - reach, y - reach, x + reach, y + reach)
            .into_iter()
            .filter_map(|index| graph.node_weight(index))
            .filter(|node| node.contains(x, y))
            .min_by(|a, b| {
                let da = distance_squared(a.position(), (x, y));
                let db = distance_squared(b.position(), (x, y));
                da.total_cmp(&db)
            })
    }

    /// Rebuild the spatial index from current display positions.
    pub fn rebuild_spatial_index(&mut self) {
        let points: Vec<_> = self
            .nodes()
            .map(|node| {
                let (x, y) = node.position();
                (node.index(), x, y, node.radius * 2.0)
            })
            .collect();

        self.spatial.rebuild(&points);
        self.spatial_dirty = false;
    }

    /// Flag the spatial index stale after positions changed.
    pub(crate) fn mark_moved(&mut self) {
        self.spatial_dirty = true;
    }

    // =========================================================================
    // Utilities
    // =========================================================================

    /// Axis-aligned extent of all simulation positions.
    pub fn simulation_bounds(&self) -> Option<Bounds> {
        Bounds::enclosing(self.nodes().map(|node| node.simulation_position()))
    }

    /// Independent copy holding the given nodes and the edges between them.
    ///
    /// Attributes are preserved; positions and velocities start fresh.
    pub fn copy(&self, nodes: &[NodeIndex]) -> GraphStore {
        let mut copy = GraphStore::with_capacity(self.distance, nodes.len(), 0);
        for &index in nodes {
            if let Some(node) = self.graph.node_weight(index) {
                let mut attrs = node.attrs();
                attrs.root = self.root == Some(index);
                copy.add_node(node.id().clone(), attrs);
            }
        }
        for edge in self.edges() {
            let (a, b) = self.endpoints(edge);
            if let (Some(n1), Some(n2)) = (copy.index_of(a.id()), copy.index_of(b.id())) {
                copy.add_edge_between(n1, n2, edge.attrs());
            }
        }
        copy
    }

    /// Remove all nodes and edges. The store stays usable.
    pub fn clear(&mut self) {
        self.graph.clear();
        self.node_id_to_index.clear();
        self.edge_id_to_index.clear();
        self.edge_index_to_id.clear();
        self.node_order.clear();
        self.edge_order.clear();
        self.root = None;
        self.spatial.clear();
        self.spatial_dirty = false;
    }
}

impl Default for GraphStore {
    fn default() -> Self {
        Self::new(DEFAULT_DISTANCE)
    }
}

fn distance_squared(a: (f64, f64), b: (f64, f64)) -> f64 {
    let dx = a.0 - b.0;
    let dy = a.1 - b.1;
    dx * dx + dy * dy
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weighted(w: f64) -> EdgeAttrs {
        EdgeAttrs::weighted(w)
    }

    #[test]
    fn test_add_node() {
        let mut store = GraphStore::default();
        let a = store.add_node("a", NodeAttrs::default());

        assert_eq!(store.node_count(), 1);
        assert_eq!(store.node("a").map(|n| n.index()), Some(a));
        assert!(store.node("b").is_none());
    }

    #[test]
    fn test_add_node_is_idempotent() {
        let mut store = GraphStore::default();
        let first = store.add_node(1, NodeAttrs::default());
        let attrs = NodeAttrs {
            radius: 99.0,
            ..NodeAttrs::default()
        };
        let second = store.add_node(1, attrs);

        assert_eq!(first, second);
        assert_eq!(store.node_count(), 1);
        assert_eq!(store.node(1).unwrap().radius, 5.0);
    }

    #[test]
    fn test_root_flag_on_re_add() {
        let mut store = GraphStore::default();
        store.add_node("a", NodeAttrs::default());
        assert!(store.root().is_none());

        store.add_node(
            "a",
            NodeAttrs {
                root: true,
                ..NodeAttrs::default()
            },
        );
        assert_eq!(
            store.root().map(|n| n.id().clone()),
            Some(NodeId::from("a"))
        );
    }

    #[test]
    fn test_add_edge_creates_endpoints() {
        let mut store = GraphStore::default();
        let id = store.add_edge("a", "b", weighted(0.7));

        assert_eq!(store.node_count(), 2);
        assert_eq!(store.edge_count(), 1);
        let edge = store.edge("a", "b").unwrap();
        assert_eq!(edge.id(), id);
        assert_eq!(edge.weight, 0.7);
    }

    #[test]
    fn test_add_edge_same_direction_is_idempotent() {
        let mut store = GraphStore::default();
        let first = store.add_edge("a", "b", weighted(0.7));
        let second = store.add_edge("a", "b", weighted(0.1));

        assert_eq!(first, second);
        assert_eq!(store.edge_count(), 1);
        assert_eq!(store.edge("a", "b").unwrap().weight, 0.7);
    }

    #[test]
    fn test_reverse_edge_aliasing() {
        let mut store = GraphStore::default();
        let ab = store.add_edge("a", "b", EdgeAttrs::default());

        // Only a -> b exists: both sides of the adjacency share it.
        assert_eq!(store.edge("b", "a").unwrap().id(), ab);

        let ba = store.add_edge("b", "a", EdgeAttrs::default());
        assert_ne!(ab, ba);
        assert_eq!(store.edge_count(), 2);
        assert_eq!(store.edge("a", "b").unwrap().id(), ab);
        assert_eq!(store.edge("b", "a").unwrap().id(), ba);
    }

    #[test]
    fn test_remove_node_drops_incident_edges() {
        let mut store = GraphStore::default();
        store.add_edge("a", "b", EdgeAttrs::default());
        store.add_edge("b", "c", EdgeAttrs::default());
        store.add_edge("c", "b", EdgeAttrs::default());
        store.add_edge("c", "d", EdgeAttrs::default());

        let b = store.index_of(&NodeId::from("b")).unwrap();
        let degree = store.degree(b);
        assert_eq!(degree, 3);

        let before = store.edge_count();
        assert!(store.remove_node("b"));
        assert_eq!(store.edge_count(), before - degree);
        assert_eq!(store.node_count(), 3);

        for id in ["a", "c"] {
            let node = store.node(id).unwrap();
            assert!(!node.links().contains(b));
        }
        assert_eq!(store.edges().count(), 1);
        assert!(!store.remove_node("b"));
    }

    #[test]
    fn test_remove_edge_keeps_reverse_edge() {
        let mut store = GraphStore::default();
        let ab = store.add_edge("a", "b", EdgeAttrs::default());
        let ba = store.add_edge("b", "a", EdgeAttrs::default());

        assert!(store.remove_edge(ab));
        assert!(!store.remove_edge(ab));
        assert_eq!(store.edge_count(), 1);
        assert!(store.edge_by_id(ba).is_some());
        // The dangling adjacency entry no longer resolves.
        assert!(store.edge("a", "b").is_none());
        assert_eq!(store.edge("b", "a").unwrap().id(), ba);
    }

    #[test]
    fn test_re_add_keeps_live_reverse_link() {
        let mut store = GraphStore::default();
        let ab = store.add_edge("a", "b", EdgeAttrs::default());
        let ba = store.add_edge("b", "a", EdgeAttrs::default());
        store.remove_edge(ab);

        let ab2 = store.add_edge("a", "b", EdgeAttrs::default());

        assert_ne!(ab2, ab);
        assert_eq!(store.edge("a", "b").unwrap().id(), ab2);
        assert_eq!(store.edge("b", "a").unwrap().id(), ba);
        assert_eq!(store.edge_count(), 2);
    }

    #[test]
    fn test_removed_edge_id_is_not_reused() {
        let mut store = GraphStore::default();
        let ab = store.add_edge("a", "b", EdgeAttrs::default());
        store.remove_edge(ab);
        let cd = store.add_edge("c", "d", EdgeAttrs::default());

        assert_ne!(ab, cd);
        assert!(store.edge_by_id(ab).is_none());
        assert!(store.edge("a", "b").is_none());
    }

    #[test]
    fn test_re_add_after_remove_edge() {
        let mut store = GraphStore::default();
        let first = store.add_edge("a", "b", EdgeAttrs::default());
        store.remove_edge(first);
        let second = store.add_edge("a", "b", weighted(0.3));

        assert_ne!(first, second);
        assert_eq!(store.edge("a", "b").unwrap().weight, 0.3);
        assert_eq!(store.edge("b", "a").unwrap().id(), second);
    }

    #[test]
    #[should_panic(expected = "edge endpoints must belong to this graph")]
    fn test_foreign_handle_panics() {
        let mut other = GraphStore::default();
        other.add_node("x", NodeAttrs::default());
        let y = other.add_node("y", NodeAttrs::default());

        let mut store = GraphStore::default();
        let a = store.add_node("a", NodeAttrs::default());
        store.add_edge_between(a, y, EdgeAttrs::default());
    }

    #[test]
    fn test_insertion_order() {
        let mut store = GraphStore::default();
        store.add_edge("c", "a", EdgeAttrs::default());
        store.add_edge("b", "a", EdgeAttrs::default());
        store.remove_node("c");
        store.add_node("c", NodeAttrs::default());

        let ids: Vec<_> = store.nodes().map(|n| n.id().to_string()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_flatten_depths() {
        let mut store = GraphStore::default();
        store.add_edge("a", "b", EdgeAttrs::default());
        store.add_edge("b", "c", EdgeAttrs::default());
        store.add_edge("c", "d", EdgeAttrs::default());
        let a = store.index_of(&NodeId::from("a")).unwrap();

        assert_eq!(store.flatten(a, 0).len(), 1);
        assert_eq!(store.flatten(a, 1).len(), 2);
        assert_eq!(store.flatten(a, 2).len(), 3);
        assert_eq!(store.flatten(a, 10).len(), 4);
    }

    #[test]
    fn test_drag_and_release() {
        let mut store = GraphStore::new(10.0);
        store.add_node("a", NodeAttrs::default());

        assert!(store.drag_node("a", 50.0, -20.0));
        let node = store.node("a").unwrap();
        assert!(node.is_fixed());
        assert_eq!(node.simulation_position(), (5.0, -2.0));
        assert_eq!(node.position(), (50.0, -20.0));

        assert!(store.release_node("a"));
        assert!(!store.node("a").unwrap().is_fixed());
        assert!(!store.drag_node("missing", 0.0, 0.0));
    }

    #[test]
    fn test_node_at() {
        let mut store = GraphStore::new(10.0);
        store.add_node("a", NodeAttrs::default());
        store.add_node("b", NodeAttrs::default());
        store.drag_node("a", 0.0, 0.0);
        store.drag_node("b", 100.0, 100.0);

        assert_eq!(
            store.node_at(3.0, -2.0).map(|n| n.id().to_string()),
            Some("a".into())
        );
        assert_eq!(
            store.node_at(96.0, 104.0).map(|n| n.id().to_string()),
            Some("b".into())
        );
        assert!(store.node_at(50.0, 50.0).is_none());

        store.remove_node("b");
        assert!(store.node_at(100.0, 100.0).is_none());
    }

    #[test]
    fn test_simulation_bounds() {
        let mut store = GraphStore::new(1.0);
        assert!(store.simulation_bounds().is_none());

        store.add_node("a", NodeAttrs { x: -10.0, y: -5.0, ..NodeAttrs::default() });
        store.add_node("b", NodeAttrs { x: 10.0, y: 5.0, ..NodeAttrs::default() });

        let bounds = store.simulation_bounds().unwrap();
        assert_eq!((bounds.min_x, bounds.min_y), (-10.0, -5.0));
        assert_eq!((bounds.width(), bounds.height()), (20.0, 10.0));
    }

    #[test]
    fn test_copy_subset() {
        let mut store = GraphStore::default();
        store.add_node(
            "a",
            NodeAttrs {
                root: true,
                radius: 8.0,
                ..NodeAttrs::default()
            },
        );
        store.add_edge("a", "b", weighted(0.4));
        store.add_edge("b", "c", weighted(0.6));

        let keep: Vec<_> = ["a", "b"]
            .iter()
            .filter_map(|id| store.index_of(&NodeId::from(*id)))
            .collect();
        let copy = store.copy(&keep);

        assert_eq!(copy.node_count(), 2);
        assert_eq!(copy.edge_count(), 1);
        assert_eq!(copy.edge("a", "b").unwrap().weight, 0.4);
        assert_eq!(copy.node("a").unwrap().radius, 8.0);
        assert_eq!(
            copy.root().map(|n| n.id().clone()),
            Some(NodeId::from("a"))
        );
    }

    #[test]
    fn test_clear() {
        let mut store = GraphStore::default();
        store.add_edge("a", "b", EdgeAttrs::default());

        store.clear();
        assert_eq!(store.node_count(), 0);
        assert_eq!(store.edge_count(), 0);
        assert_eq!(store.nodes().count(), 0);
        assert!(store.node("a").is_none());
    }
}
