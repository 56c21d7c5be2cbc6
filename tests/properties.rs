use proptest::prelude::*;
use spring_graph::Graph;
use spring_graph::graph::{EdgeAttrs, NodeAttrs, NodeId};

fn build(edges: &[(u8, u8)]) -> Graph {
    let mut g = Graph::new();
    for &(a, b) in edges {
        g.add_edge(u32::from(a), u32::from(b), EdgeAttrs::default());
    }
    g
}

proptest! {
    #[test]
    fn test_add_node_is_idempotent(ids in prop::collection::vec(0u8..32, 1..64)) {
        let mut g = Graph::new();
        for &id in &ids {
            g.add_node(u32::from(id), NodeAttrs::default());
        }
        let count = g.node_count();
        for &id in &ids {
            let index = g.node(u32::from(id)).unwrap().index();
            let again = g.add_node(u32::from(id), NodeAttrs::default()).index();
            prop_assert_eq!(index, again);
        }
        prop_assert_eq!(g.node_count(), count);
    }

    #[test]
    fn test_add_edge_is_idempotent(edges in prop::collection::vec((0u8..16, 0u8..16), 1..48)) {
        let mut g = build(&edges);
        let count = g.edge_count();
        for &(a, b) in &edges {
            let id = g.edge(u32::from(a), u32::from(b)).map(|edge| edge.id());
            let added = g.add_edge(u32::from(a), u32::from(b), EdgeAttrs::default()).id();
            if let Some(id) = id {
                let edge = g.store().edge_by_id(id).unwrap();
                let n1 = g.node(u32::from(a)).unwrap().index();
                if edge.node1() == n1 {
                    prop_assert_eq!(added, id);
                }
            }
        }
        prop_assert_eq!(g.edge_count(), count);
    }

    #[test]
    fn test_remove_node_drops_its_edges(
        edges in prop::collection::vec((0u8..12, 0u8..12), 1..40),
        victim in 0u8..12,
    ) {
        let mut g = build(&edges);
        let id = NodeId::from(u32::from(victim));
        prop_assume!(g.node(&id).is_some());

        let index = g.node(&id).unwrap().index();
        let degree = g.store().degree(index);
        let before = g.edge_count();

        prop_assert!(g.remove_node(&id));
        prop_assert_eq!(g.edge_count(), before - degree);
        prop_assert!(g.node(&id).is_none());
        for node in g.nodes() {
            prop_assert!(node.links().neighbors().all(|n| n != index));
        }
    }

    #[test]
    fn test_partition_covers_every_node(edges in prop::collection::vec((0u8..24, 0u8..24), 0..40)) {
        let g = build(&edges);
        let parts = g.partition();

        let total: usize = parts.iter().map(Graph::node_count).sum();
        prop_assert_eq!(total, g.node_count());
        for pair in parts.windows(2) {
            prop_assert!(pair[0].node_count() >= pair[1].node_count());
        }
        for node in g.nodes() {
            let owners = parts
                .iter()
                .filter(|part| part.node(node.id()).is_some())
                .count();
            prop_assert_eq!(owners, 1);
        }
    }

    #[test]
    fn test_density_is_non_negative(edges in prop::collection::vec((0u8..10, 0u8..10), 0..60)) {
        let g = build(&edges);
        let density = g.density();
        prop_assert!(density >= 0.0);
        prop_assert!(density.is_finite());
    }
}
