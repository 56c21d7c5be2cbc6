//! Force-directed spring layout.
//!
//! Every update:
//! 1. Node pairs closer than `repulsion` push each other apart (k² / d²).
//! 2. Each edge pulls its endpoints together like a spring, scaled by edge
//!    weight and inverse rest length.
//! 3. Non-fixed nodes move by velocity × `force`, clamped per axis to the
//!    move limit; velocities are then cleared.
//!
//! Coincident nodes would never separate, so a pair closer than 0.1 gets a
//! small random offset from a seeded source instead of its real displacement.
//!
//! Forces are accumulated in SoA buffers and written back once per step.

use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use super::{Layout, reset_positions};
use crate::graph::GraphStore;

/// Seed used when none is configured, so runs are reproducible.
pub const DEFAULT_SEED: u64 = 0x5eed;

/// Squared distance below which a pair counts as coincident.
const MIN_DISTANCE_SQUARED: f64 = 0.01;

/// Rest length used in place of a zero edge length.
const MIN_EDGE_LENGTH: f64 = 0.01;

/// Configuration for the spring layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpringConfig {
    /// Force constant (default: 4.0).
    pub k: f64,
    /// Force multiplier applied to velocity when moving (default: 0.01).
    pub force: f64,
    /// Maximum repulsive force radius (default: 50.0).
    pub repulsion: f64,
    /// Seed for the coincident-node jitter.
    pub seed: u64,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            k: 4.0,
            force: 0.01,
            repulsion: 50.0,
            seed: DEFAULT_SEED,
        }
    }
}

/// A force-based layout in which edges are regarded as springs.
#[derive(Debug, Clone)]
pub struct SpringLayout {
    config: SpringConfig,
    iterations: u64,
    rng: StdRng,
}

/// Displacement between two nodes: (dx, dy, d, d²).
type Separation = (f64, f64, f64, f64);

impl SpringLayout {
    pub fn new(config: SpringConfig) -> Self {
        let rng = StdRng::seed_from_u64(config.seed);
        Self {
            config,
            iterations: 0,
            rng,
        }
    }

    pub fn config(&self) -> &SpringConfig {
        &self.config
    }

    /// Displacement from (x1, y1) to (x2, y2), never zero.
    fn separation(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) -> Separation {
        let mut dx = x2 - x1;
        let mut dy = y2 - y1;
        let mut d2 = dx * dx + dy * dy;
        if d2 < MIN_DISTANCE_SQUARED {
            dx = self.rng.gen_range(0.1..0.2);
            dy = self.rng.gen_range(0.1..0.2);
            d2 = dx * dx + dy * dy;
        }
        (dx, dy, d2.sqrt(), d2)
    }
}

impl Layout for SpringLayout {
    fn iterations(&self) -> u64 {
        self.iterations
    }

    fn update(&mut self, store: &mut GraphStore, weight_factor: f64, move_limit: f64) {
        self.iterations += 1;

        let indices: Vec<_> = store.node_indices().collect();
        let n = indices.len();
        let slots: HashMap<_, _> = indices.iter().enumerate().map(|(i, &ix)| (ix, i)).collect();

        let mut pos_x = Vec::with_capacity(n);
        let mut pos_y = Vec::with_capacity(n);
        let mut vel_x = Vec::with_capacity(n);
        let mut vel_y = Vec::with_capacity(n);
        let mut fixed = Vec::with_capacity(n);
        for node in store.nodes() {
            let (x, y) = node.simulation_position();
            let (vx, vy) = node.velocity();
            pos_x.push(x);
            pos_y.push(y);
            vel_x.push(vx);
            vel_y.push(vy);
            fixed.push(node.is_fixed());
        }

        // (slot1, slot2, effective weight, inverse rest length)
        let springs: Vec<(usize, usize, f64, f64)> = store
            .edges()
            .filter_map(|edge| {
                let a = *slots.get(&edge.node1())?;
                let b = *slots.get(&edge.node2())?;
                let length = if edge.length == 0.0 { MIN_EDGE_LENGTH } else { edge.length };
                Some((a, b, weight_factor * edge.weight, 1.0 / length))
            })
            .collect();

        let k = self.config.k;
        let k2 = k * k;
        let repulsion = self.config.repulsion;

        // Node-node repulsion.
        for i in 0..n {
            for j in (i + 1)..n {
                let (dx, dy, d, d2) = self.separation(pos_x[i], pos_y[i], pos_x[j], pos_y[j]);
                if d < repulsion {
                    let f = k2 / d2;
                    vel_x[j] += f * dx;
                    vel_y[j] += f * dy;
                    vel_x[i] -= f * dx;
                    vel_y[i] -= f * dy;
                }
            }
        }

        // Edge attraction.
        for &(i, j, weight, inverse_length) in &springs {
            let (dx, dy, d, d2) = self.separation(pos_x[i], pos_y[i], pos_x[j], pos_y[j]);
            let d = d.min(repulsion);
            let mut f = (d2 - k2) / k * inverse_length;
            f *= weight * 0.5 + 1.0;
            f /= d;
            vel_x[j] -= f * dx;
            vel_y[j] -= f * dy;
            vel_x[i] += f * dx;
            vel_y[i] += f * dy;
        }

        let force = self.config.force;
        let distance = store.distance();
        for (i, &index) in indices.iter().enumerate() {
            let Some(node) = store.node_by_index_mut(index) else {
                continue;
            };
            if fixed[i] {
                let (sx, sy) = node.simulation_position();
                node.set_simulation_state(sx, sy, 0.0, 0.0);
                continue;
            }
            let sx = pos_x[i] + (force * vel_x[i]).min(move_limit).max(-move_limit);
            let sy = pos_y[i] + (force * vel_y[i]).min(move_limit).max(-move_limit);
            node.set_simulation_state(sx, sy, 0.0, 0.0);
            node.set_position(sx * distance, sy * distance);
        }
        store.mark_moved();

        tracing::trace!(
            iteration = self.iterations,
            nodes = n,
            edges = springs.len(),
            "spring layout step"
        );
    }

    fn reset(&mut self, store: &mut GraphStore) {
        self.iterations = 0;
        reset_positions(store);
    }
}
