//! Spatial indexing for O(log n) hit testing.
//!
//! This module provides an R-tree based spatial index over node display
//! positions, used to find the node under a pointer.

mod rtree;

pub use rtree::SpatialIndex;
