//! Tests for Prim's minimum spanning tree

mod common;

use common::{grid, init_test, Lcg};
use priority_traversal::graph::{Edge, Graph};
use priority_traversal::mst::{is_spanning_tree, prim, total_weight};

fn assert_close(a: f64, b: f64) {
    assert!((a - b).abs() < 1e-9, "{} != {}", a, b);
}

/// Total weight of a minimum spanning forest by Kruskal's algorithm
fn kruskal_weight(graph: &Graph<u32>) -> u64 {
    let n = graph.num_nodes();
    let mut edges: Vec<&Edge<u32>> = (0..n)
        .flat_map(|node| graph.edges_from(node))
        .filter(|edge| edge.from < edge.to)
        .collect();
    edges.sort_by_key(|edge| edge.weight);

    let mut parent: Vec<usize> = (0..n).collect();
    fn find(parent: &mut [usize], mut x: usize) -> usize {
        while parent[x] != x {
            parent[x] = parent[parent[x]];
            x = parent[x];
        }
        x
    }

    let mut total = 0u64;
    for edge in edges {
        let (a, b) = (find(&mut parent, edge.from), find(&mut parent, edge.to));
        if a != b {
            parent[a] = b;
            total += edge.weight as u64;
        }
    }
    total
}

fn assert_edges_in_graph(graph: &Graph<u32>, tree: &[Edge<u32>]) {
    for edge in tree {
        let stored = graph
            .get_edge(edge.from, edge.to)
            .unwrap_or_else(|| panic!("{:?} is not in the graph", edge));
        assert_eq!(stored.weight, edge.weight);
    }
}

// ============================================================================
// Fixed graphs
// ============================================================================

#[test]
fn test_prim_five_nodes() {
    init_test();
    let graph = Graph::from_edges(
        5,
        true,
        &[
            (0, 1, 1.0),
            (0, 2, 0.5),
            (2, 3, 0.4),
            (1, 3, 1.1),
            (1, 4, 0.2),
            (3, 4, 1.4),
        ],
    )
    .unwrap();

    let tree = prim(&graph).unwrap().unwrap();
    assert_eq!(tree.len(), 4);
    assert!(is_spanning_tree(&graph, &tree));
    assert_close(total_weight(&tree), 2.1);
    assert_eq!(
        tree,
        vec![
            Edge::new(0, 2, 0.5),
            Edge::new(2, 3, 0.4),
            Edge::new(0, 1, 1.0),
            Edge::new(1, 4, 0.2),
        ]
    );
}

#[test]
fn test_prim_triangle() {
    let graph = Graph::from_edges(3, true, &[(0, 1, 1.0), (0, 2, 2.0), (1, 2, 0.8)]).unwrap();
    let tree = prim(&graph).unwrap().unwrap();
    assert_close(total_weight(&tree), 1.8);
}

#[test]
fn test_prim_refuses_forest() {
    let graph = Graph::from_edges(4, true, &[(0, 1, 1.0), (2, 3, 1.0)]).unwrap();
    assert_eq!(prim(&graph).unwrap(), None);

    // Connecting the halves fixes it
    let mut graph = graph;
    graph.insert_edge(1, 2, 5.0).unwrap();
    let tree = prim(&graph).unwrap().unwrap();
    assert!(is_spanning_tree(&graph, &tree));
    assert_close(total_weight(&tree), 7.0);
}

#[test]
fn test_prim_parallel_insert_keeps_latest_weight() {
    let mut graph = Graph::new(2, true);
    graph.insert_edge(0, 1, 4u32).unwrap();
    graph.insert_edge(1, 0, 3u32).unwrap();
    let tree = prim(&graph).unwrap().unwrap();
    assert_eq!(tree, vec![Edge::new(0, 1, 3)]);
}

// ============================================================================
// Against a reference
// ============================================================================

#[test]
fn test_prim_matches_kruskal_on_grids() {
    init_test();
    let mut rng = Lcg::new(42);

    for (width, height) in [(2, 2), (5, 3), (8, 8), (13, 4)] {
        let mut graph = grid(width, height, || rng.next_range(1, 50));
        // A few chords so the grid is not the only structure
        for _ in 0..width * height / 2 {
            let a = rng.next_range(0, (width * height) as u32) as usize;
            let b = rng.next_range(0, (width * height) as u32) as usize;
            if a != b {
                graph.insert_edge(a, b, rng.next_range(1, 50)).unwrap();
            }
        }

        let tree = prim(&graph).unwrap().unwrap();
        assert_eq!(tree.len(), width * height - 1);
        assert!(is_spanning_tree(&graph, &tree));
        assert_edges_in_graph(&graph, &tree);
        assert_eq!(total_weight(&tree) as u64, kruskal_weight(&graph));
    }
}

mod proptest_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        /// Random graphs: Prim either spans and matches Kruskal, or the graph
        /// really is disconnected.
        #[test]
        fn prim_matches_kruskal_or_reports_disconnected(
            n in 1usize..16,
            raw in prop::collection::vec((0usize..16, 0usize..16, 1u32..100), 0..40),
        ) {
            let mut graph = Graph::new(n, true);
            for (a, b, w) in raw {
                let (a, b) = (a % n, b % n);
                if a != b {
                    graph.insert_edge(a, b, w).unwrap();
                }
            }

            match prim(&graph).unwrap() {
                Some(tree) => {
                    prop_assert_eq!(tree.len(), n - 1);
                    prop_assert!(is_spanning_tree(&graph, &tree));
                    prop_assert_eq!(total_weight(&tree) as u64, kruskal_weight(&graph));
                }
                None => {
                    // A spanning forest with fewer than n - 1 edges
                    let mut parent: Vec<usize> = (0..n).collect();
                    let mut joined = 0;
                    for node in 0..n {
                        for edge in graph.edges_from(node) {
                            let mut a = edge.from;
                            while parent[a] != a { a = parent[a]; }
                            let mut b = edge.to;
                            while parent[b] != b { b = parent[b]; }
                            if a != b {
                                parent[a] = b;
                                joined += 1;
                            }
                        }
                    }
                    prop_assert!(joined < n - 1);
                }
            }
        }
    }
}
