//! Minimum spanning trees with Prim's algorithm
//!
//! Prim grows a tree from node 0, always attaching the node reachable by the
//! cheapest edge from the tree so far. It runs on the shared traversal loop:
//! every node is seeded, node 0 at zero and the rest at infinity, and a queued
//! node's priority is the weight of the cheapest edge seen into it.
//!
//! The graph is expected to be undirected (every edge listed from both ends).
//! If some node cannot be attached, the graph is disconnected and no tree is
//! returned; a partial forest would look like a valid answer and is never
//! produced.
//!
//! # Example
//!
//! ```rust
//! use priority_traversal::graph::Graph;
//! use priority_traversal::mst::{is_spanning_tree, prim, total_weight};
//!
//! let graph = Graph::from_edges(3, true, &[(0, 1, 1.0), (0, 2, 2.0), (1, 2, 0.8)]).unwrap();
//! let tree = prim(&graph).unwrap().unwrap();
//! assert!(is_spanning_tree(&graph, &tree));
//! let weight: f64 = total_weight(&tree);
//! assert!((weight - 1.8).abs() < 1e-9);
//!
//! let split = Graph::from_edges(4, true, &[(0, 1, 1.0), (2, 3, 2.0)]).unwrap();
//! assert_eq!(prim(&split).unwrap(), None);
//! ```

use crate::error::Result;
use crate::graph::Edge;
use crate::traits::{NodeIndex, Weight, WeightedGraph};
use crate::traversal::{traverse, NodeStatus, Settle, Strategy};
use log::debug;

const ROOT: NodeIndex = 0;

struct PrimStrategy<W> {
    edges: Vec<Edge<W>>,
}

impl<W: Weight> Strategy<W> for PrimStrategy<W> {
    fn initial_priority(&self, node: NodeIndex) -> Option<W> {
        Some(if node == ROOT {
            W::zero()
        } else {
            W::infinity()
        })
    }

    fn on_settle(
        &mut self,
        node: NodeIndex,
        predecessor: Option<NodeIndex>,
        priority: W,
    ) -> Settle {
        match predecessor {
            Some(from) => {
                self.edges.push(Edge::new(from, node, priority));
                Settle::Continue
            }
            None if node == ROOT => Settle::Continue,
            // Dequeued at infinity: nothing in the tree reaches it.
            None => Settle::Abort,
        }
    }

    fn on_relax(
        &mut self,
        _from: NodeIndex,
        _to: NodeIndex,
        weight: W,
        status: NodeStatus<W>,
    ) -> Option<W> {
        match status {
            NodeStatus::Queued(current) if weight < current => Some(weight),
            _ => None,
        }
    }
}

/// Computes a minimum spanning tree with Prim's algorithm.
///
/// # Returns
/// - `Some(edges)`: the `num_nodes - 1` tree edges, each as
///   `(predecessor, node, weight)` in the order nodes joined the tree
/// - `None`: the graph is disconnected
///
/// An empty graph has an empty spanning tree.
///
/// # Errors
/// [`SearchError::NodeOutOfBounds`](crate::SearchError) if an edge points
/// outside the graph.
pub fn prim<G: WeightedGraph>(graph: &G) -> Result<Option<Vec<Edge<G::Weight>>>> {
    let num_nodes = graph.num_nodes();
    if num_nodes == 0 {
        return Ok(Some(Vec::new()));
    }

    let mut strategy = PrimStrategy {
        edges: Vec::with_capacity(num_nodes - 1),
    };
    let tree = traverse(graph, ROOT, &mut strategy)?;

    if let Some(node) = tree.aborted_at {
        debug!("node {} is not connected to node {}; no spanning tree", node, ROOT);
        return Ok(None);
    }
    Ok(Some(strategy.edges))
}

/// Returns the sum of the edge weights.
pub fn total_weight<W: Weight>(edges: &[Edge<W>]) -> W {
    edges
        .iter()
        .fold(W::zero(), |total, edge| total.saturating_add(edge.weight))
}

/// Returns true if `edges` form a spanning tree of `graph`'s nodes.
///
/// Every edge must join two nodes of the graph that were not yet connected, and
/// together the edges must connect all nodes. Only the shape is checked; the
/// edges are not looked up in `graph`.
pub fn is_spanning_tree<G: WeightedGraph>(graph: &G, edges: &[Edge<G::Weight>]) -> bool {
    let num_nodes = graph.num_nodes();
    let mut sets = DisjointSets::new(num_nodes);

    for edge in edges {
        if edge.from >= num_nodes || edge.to >= num_nodes {
            return false;
        }
        if !sets.union(edge.from, edge.to) {
            return false;
        }
    }
    sets.count() <= 1
}

/// Union-find over `0..n` with path halving and union by size
struct DisjointSets {
    parent: Vec<usize>,
    size: Vec<usize>,
    count: usize,
}

impl DisjointSets {
    fn new(n: usize) -> Self {
        DisjointSets {
            parent: (0..n).collect(),
            size: vec![1; n],
            count: n,
        }
    }

    fn find(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            self.parent[x] = self.parent[self.parent[x]];
            x = self.parent[x];
        }
        x
    }

    /// Merges the sets holding `a` and `b`; false if they were already one set.
    fn union(&mut self, a: usize, b: usize) -> bool {
        let (mut a, mut b) = (self.find(a), self.find(b));
        if a == b {
            return false;
        }
        if self.size[a] < self.size[b] {
            std::mem::swap(&mut a, &mut b);
        }
        self.parent[b] = a;
        self.size[a] += self.size[b];
        self.count -= 1;
        true
    }

    fn count(&self) -> usize {
        self.count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{} != {}", a, b);
    }

    #[test]
    fn test_prim_triangle() {
        let graph = Graph::from_edges(3, true, &[(0, 1, 1.0), (0, 2, 2.0), (1, 2, 0.8)]).unwrap();
        let tree = prim(&graph).unwrap().unwrap();
        assert_eq!(tree, vec![Edge::new(0, 1, 1.0), Edge::new(1, 2, 0.8)]);
        assert!(is_spanning_tree(&graph, &tree));
        assert_close(total_weight(&tree), 1.8);
    }

    #[test]
    fn test_prim_disconnected() {
        let graph = Graph::from_edges(4, true, &[(0, 1, 1.0), (2, 3, 2.0)]).unwrap();
        assert_eq!(prim(&graph).unwrap(), None);
    }

    #[test]
    fn test_prim_isolated_root() {
        let graph = Graph::from_edges(3, true, &[(1, 2, 1.0)]).unwrap();
        assert_eq!(prim(&graph).unwrap(), None);
    }

    #[test]
    fn test_prim_trivial_graphs() {
        let empty: Graph<f64> = Graph::new(0, true);
        assert_eq!(prim(&empty).unwrap(), Some(vec![]));
        assert!(is_spanning_tree(&empty, &[]));

        let single: Graph<f64> = Graph::new(1, true);
        assert_eq!(prim(&single).unwrap(), Some(vec![]));
        assert!(is_spanning_tree(&single, &[]));
    }

    #[test]
    fn test_is_spanning_tree_rejects() {
        let graph = Graph::from_edges(3, true, &[(0, 1, 1.0), (1, 2, 1.0), (0, 2, 1.0)]).unwrap();
        // cycle
        assert!(!is_spanning_tree(
            &graph,
            &[Edge::new(0, 1, 1.0), Edge::new(1, 2, 1.0), Edge::new(2, 0, 1.0)]
        ));
        // not spanning
        assert!(!is_spanning_tree(&graph, &[Edge::new(0, 1, 1.0)]));
        // out of range
        assert!(!is_spanning_tree(&graph, &[Edge::new(0, 5, 1.0), Edge::new(1, 2, 1.0)]));
    }

    #[test]
    fn test_disjoint_sets() {
        let mut sets = DisjointSets::new(4);
        assert!(sets.union(0, 1));
        assert!(sets.union(2, 3));
        assert!(!sets.union(1, 0));
        assert_eq!(sets.count(), 2);
        assert!(sets.union(1, 3));
        assert_eq!(sets.find(0), sets.find(2));
    }
}
