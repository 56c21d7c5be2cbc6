//! Graph construction settings.

use serde::{Deserialize, Serialize};

use crate::graph::DEFAULT_DISTANCE;
use crate::layout::{LayoutKind, SpringConfig};

/// Everything needed to build an empty [`Graph`](crate::Graph).
///
/// Deserializes from partial input; missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Display scale: display position = simulation position × distance.
    pub distance: f64,
    pub layout: LayoutKind,
    pub spring: SpringConfig,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            distance: DEFAULT_DISTANCE,
            layout: LayoutKind::default(),
            spring: SpringConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GraphConfig::default();
        assert_eq!(config.distance, 10.0);
        assert_eq!(config.layout, LayoutKind::Spring);
        assert_eq!(config.spring.k, 4.0);
    }

    #[test]
    fn test_partial_json() {
        let config: GraphConfig =
            serde_json::from_str(r#"{"layout": "null", "spring": {"repulsion": 20.0}}"#).unwrap();
        assert_eq!(config.distance, 10.0);
        assert_eq!(config.layout, LayoutKind::Null);
        assert_eq!(config.spring.repulsion, 20.0);
        assert_eq!(config.spring.force, 0.01);
    }

    #[test]
    fn test_round_trip_keeps_seed() {
        let config = GraphConfig {
            spring: SpringConfig {
                seed: 42,
                ..SpringConfig::default()
            },
            ..GraphConfig::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: GraphConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
