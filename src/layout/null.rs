//! Layout that never moves anything.

use super::{Layout, reset_positions};
use crate::graph::GraphStore;

/// Counts iterations and leaves positions alone. A deterministic baseline.
#[derive(Debug, Clone, Default)]
pub struct NullLayout {
    iterations: u64,
}

impl NullLayout {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Layout for NullLayout {
    fn iterations(&self) -> u64 {
        self.iterations
    }

    fn update(&mut self, _store: &mut GraphStore, _weight_factor: f64, _move_limit: f64) {
        self.iterations += 1;
    }

    fn reset(&mut self, store: &mut GraphStore) {
        self.iterations = 0;
        reset_positions(store);
    }
}
