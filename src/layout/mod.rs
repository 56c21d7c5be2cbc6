//! Layout algorithms for graph visualization.
//!
//! A layout iteratively updates node simulation positions and derives display
//! positions from them. Two variants share the [`Layout`] interface:
//! - [`NullLayout`]: counts iterations and never moves anything
//! - [`SpringLayout`]: force-directed, edges act as springs
//!
//! The caller drives the layout; nothing here runs on its own clock.

pub mod null;
pub mod spring;

use serde::{Deserialize, Serialize};

use crate::graph::GraphStore;

pub use null::NullLayout;
pub use spring::{SpringConfig, SpringLayout};

/// Default `weight_factor` for [`Layout::update`].
pub const DEFAULT_WEIGHT_FACTOR: f64 = 10.0;
/// Default `move_limit` for [`Layout::update`].
pub const DEFAULT_MOVE_LIMIT: f64 = 0.5;

/// Axis-aligned extent of a set of points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    /// Smallest box containing every point, or `None` for no points.
    pub fn enclosing(points: impl IntoIterator<Item = (f64, f64)>) -> Option<Self> {
        let mut points = points.into_iter();
        let (x, y) = points.next()?;
        let mut bounds = Bounds {
            min_x: x,
            min_y: y,
            max_x: x,
            max_y: y,
        };
        for (x, y) in points {
            bounds.min_x = bounds.min_x.min(x);
            bounds.min_y = bounds.min_y.min(y);
            bounds.max_x = bounds.max_x.max(x);
            bounds.max_y = bounds.max_y.max(y);
        }
        Some(bounds)
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

/// Shared interface of all layout variants.
pub trait Layout {
    /// Number of `update` calls since creation or the last reset.
    fn iterations(&self) -> u64;

    /// Advance the simulation one step.
    ///
    /// `weight_factor` scales the pull of heavy edges; `move_limit` caps the
    /// per-axis movement of a node in simulation units.
    fn update(&mut self, store: &mut GraphStore, weight_factor: f64, move_limit: f64);

    /// Zero every node's position and velocity and the iteration counter.
    fn reset(&mut self, store: &mut GraphStore);

    /// Extent of all simulation positions, for viewport fitting.
    fn bounds(&self, store: &GraphStore) -> Option<Bounds> {
        store.simulation_bounds()
    }
}

/// Which layout variant a graph uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutKind {
    Null,
    #[default]
    Spring,
}

/// The active layout of a graph.
#[derive(Debug, Clone)]
pub enum LayoutEngine {
    Null(NullLayout),
    Spring(SpringLayout),
}

impl LayoutEngine {
    pub fn new(kind: LayoutKind, spring: SpringConfig) -> Self {
        match kind {
            LayoutKind::Null => LayoutEngine::Null(NullLayout::new()),
            LayoutKind::Spring => LayoutEngine::Spring(SpringLayout::new(spring)),
        }
    }

    pub fn kind(&self) -> LayoutKind {
        match self {
            LayoutEngine::Null(_) => LayoutKind::Null,
            LayoutEngine::Spring(_) => LayoutKind::Spring,
        }
    }

    /// Same variant and parameters, with a fresh iteration count and random source.
    pub fn copy(&self) -> Self {
        match self {
            LayoutEngine::Null(_) => LayoutEngine::Null(NullLayout::new()),
            LayoutEngine::Spring(spring) => {
                LayoutEngine::Spring(SpringLayout::new(spring.config().clone()))
            }
        }
    }
}

impl Default for LayoutEngine {
    fn default() -> Self {
        LayoutEngine::new(LayoutKind::default(), SpringConfig::default())
    }
}

impl Layout for LayoutEngine {
    fn iterations(&self) -> u64 {
        match self {
            LayoutEngine::Null(layout) => layout.iterations(),
            LayoutEngine::Spring(layout) => layout.iterations(),
        }
    }

    fn update(&mut self, store: &mut GraphStore, weight_factor: f64, move_limit: f64) {
        match self {
            LayoutEngine::Null(layout) => layout.update(store, weight_factor, move_limit),
            LayoutEngine::Spring(layout) => layout.update(store, weight_factor, move_limit),
        }
    }

    fn reset(&mut self, store: &mut GraphStore) {
        match self {
            LayoutEngine::Null(layout) => layout.reset(store),
            LayoutEngine::Spring(layout) => layout.reset(store),
        }
    }
}

/// Shared by both variants' `reset`.
pub(crate) fn reset_positions(store: &mut GraphStore) {
    let indices: Vec<_> = store.node_indices().collect();
    for index in indices {
        if let Some(node) = store.node_by_index_mut(index) {
            node.set_simulation_state(0.0, 0.0, 0.0, 0.0);
            node.set_position(0.0, 0.0);
        }
    }
    store.mark_moved();
}
