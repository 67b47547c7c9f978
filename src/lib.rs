//! Indexed priority queue and the graph traversals built on it
//!
//! This crate provides a binary heap whose items can be re-prioritized in place,
//! and the single-source searches that need exactly that operation.
//!
//! # Features
//!
//! - **Indexed Priority Queue**: min- or max-ordered binary heap with an O(1)
//!   value → slot map; O(log n) enqueue, dequeue and arbitrary priority update
//! - **Dijkstra**: uniform-cost search over the whole graph
//! - **Greedy best-first**: heuristic-only search, fast but not optimal
//! - **A\***: cost plus admissible heuristic, optimal; also a dynamic variant
//!   that queries the heuristic on demand
//! - **Prim**: minimum spanning tree growth, refusing disconnected graphs
//!
//! All four algorithms are strategies over one shared loop in [`traversal`].
//! Graphs are consumed through the read-only [`WeightedGraph`] trait; a simple
//! adjacency list is provided in [`graph`].
//!
//! # Example
//!
//! ```rust
//! use priority_traversal::graph::Graph;
//! use priority_traversal::pathfinding::dijkstra;
//! use priority_traversal::paths::{node_path_from_predecessors, path_cost};
//!
//! let graph = Graph::from_edges(3, false, &[(0, 1, 2.0), (0, 2, 0.5), (2, 1, 0.75)]).unwrap();
//! let last = dijkstra(&graph, 0).unwrap();
//!
//! let path = node_path_from_predecessors(&last, 1);
//! assert_eq!(path, vec![0, 2, 1]);
//! assert_eq!(path_cost(&graph, &path), Some(1.25));
//! ```

pub mod error;
pub mod graph;
pub mod indexed_binary;
pub mod mst;
pub mod pathfinding;
pub mod paths;
pub mod storage;
pub mod traits;
pub mod traversal;

// Re-export the main types for convenience
pub use error::{Result, SearchError};
pub use indexed_binary::{
    HeapItem, HeapOrder, IndexedPriorityQueue, KeyedQueue, NodeQueue, QueueConfig,
};
pub use traits::{NodeIndex, Weight, WeightedGraph};
