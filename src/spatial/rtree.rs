//! R-tree based spatial index using the rstar crate.
//!
//! Provides O(log n) spatial queries for:
//! - Nearest neighbor
//! - Rectangle intersection

use rstar::{AABB, PointDistance, RTree, RTreeObject};

use crate::graph::NodeIndex;

/// A node's display position in the spatial index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodePoint {
    /// The node handle.
    pub index: NodeIndex,
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
}

impl NodePoint {
    /// Create a new NodePoint.
    pub fn new(index: NodeIndex, x: f64, y: f64) -> Self {
        Self { index, x, y }
    }
}

impl RTreeObject for NodePoint {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_point([self.x, self.y])
    }
}

impl PointDistance for NodePoint {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dx = self.x - point[0];
        let dy = self.y - point[1];
        dx * dx + dy * dy
    }
}

/// Spatial index for graph nodes.
///
/// Uses an R*-tree over points; `reach` is the largest hit-box half-width
/// among indexed nodes, so a rectangle query widened by it finds every
/// node whose hit box can contain a point.
pub struct SpatialIndex {
    tree: RTree<NodePoint>,
    reach: f64,
}

impl SpatialIndex {
    /// Create a new empty spatial index.
    pub fn new() -> Self {
        Self {
            tree: RTree::new(),
            reach: 0.0,
        }
    }

    /// Find the nearest node to a point.
    pub fn nearest(&self, x: f64, y: f64) -> Option<NodeIndex> {
        self.tree.nearest_neighbor(&[x, y]).map(|point| point.index)
    }

    /// Find all nodes within a rectangle.
    pub fn in_rect(&self, min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Vec<NodeIndex> {
        let envelope = AABB::from_corners([min_x, min_y], [max_x, max_y]);
        self.tree
            .locate_in_envelope(&envelope)
            .map(|point| point.index)
            .collect()
    }

    /// Largest hit-box half-width seen at the last rebuild.
    pub fn reach(&self) -> f64 {
        self.reach
    }

    /// Rebuild the index from `(index, x, y, reach)` tuples.
    pub fn rebuild(&mut self, points: &[(NodeIndex, f64, f64, f64)]) {
        let node_points: Vec<_> = points
            .iter()
            .map(|&(index, x, y, _)| NodePoint::new(index, x, y))
            .collect();

        self.reach = points.iter().map(|p| p.3).fold(0.0, f64::max);
        self.tree = RTree::bulk_load(node_points);
    }

    /// Clear all nodes from the index.
    pub fn clear(&mut self) {
        self.tree = RTree::new();
        self.reach = 0.0;
    }

    /// Get the number of nodes in the index.
    pub fn len(&self) -> usize {
        self.tree.size()
    }

    /// Check if the index is empty.
    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }
}

impl Default for SpatialIndex {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ix(i: usize) -> NodeIndex {
        NodeIndex::new(i)
    }

    #[test]
    fn test_rebuild_and_nearest() {
        let mut index = SpatialIndex::new();
        index.rebuild(&[
            (ix(0), 0.0, 0.0, 10.0),
            (ix(1), 10.0, 10.0, 10.0),
            (ix(2), 5.0, 5.0, 16.0),
        ]);

        assert_eq!(index.len(), 3);
        assert_eq!(index.reach(), 16.0);
        assert_eq!(index.nearest(0.0, 0.0), Some(ix(0)));
        assert_eq!(index.nearest(6.0, 6.0), Some(ix(2)));
        assert_eq!(index.nearest(11.0, 11.0), Some(ix(1)));
    }

    #[test]
    fn test_in_rect() {
        let mut index = SpatialIndex::new();
        index.rebuild(&[
            (ix(0), 0.0, 0.0, 1.0),
            (ix(1), 5.0, 5.0, 1.0),
            (ix(2), 10.0, 10.0, 1.0),
        ]);

        let in_rect = index.in_rect(-1.0, -1.0, 6.0, 6.0);
        assert_eq!(in_rect.len(), 2);
        assert!(in_rect.contains(&ix(0)));
        assert!(in_rect.contains(&ix(1)));
    }

    #[test]
    fn test_clear() {
        let mut index = SpatialIndex::new();
        index.rebuild(&[(ix(0), 0.0, 0.0, 1.0)]);

        index.clear();
        assert!(index.is_empty());
        assert_eq!(index.reach(), 0.0);
        assert_eq!(index.nearest(0.0, 0.0), None);
    }
}
