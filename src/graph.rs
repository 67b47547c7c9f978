//! Adjacency-list graph
//!
//! A small reference implementation of [`WeightedGraph`]. The traversals do
//! not depend on it; it exists so the crate can be used and tested without
//! bringing a graph type of your own.

use crate::error::{check_node, Result};
use crate::traits::{NodeIndex, Weight, WeightedGraph};

/// A weighted edge
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge<W> {
    /// Source node
    pub from: NodeIndex,
    /// Destination node
    pub to: NodeIndex,
    /// Edge weight
    pub weight: W,
}

impl<W> Edge<W> {
    /// Creates an edge.
    pub fn new(from: NodeIndex, to: NodeIndex, weight: W) -> Self {
        Edge { from, to, weight }
    }
}

/// Adjacency-list graph with at most one edge per ordered node pair.
///
/// Each node's outgoing edges are kept in insertion order, which is the order
/// [`WeightedGraph::neighbors_of`] reports them in. Undirected graphs store
/// every edge from both endpoints.
///
/// # Example
///
/// ```rust
/// use priority_traversal::graph::Graph;
///
/// let mut graph = Graph::new(3, true);
/// graph.insert_edge(0, 1, 1.5).unwrap();
/// graph.insert_edge(1, 2, 2.0).unwrap();
///
/// assert!(graph.is_edge(2, 1));
/// assert_eq!(graph.get_edge(1, 0).map(|e| e.weight), Some(1.5));
/// assert!(graph.insert_edge(0, 9, 1.0).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Graph<W = f64> {
    adjacency: Vec<Vec<Edge<W>>>,
    undirected: bool,
}

impl<W: Copy> Graph<W> {
    /// Creates a graph with `num_nodes` nodes and no edges.
    pub fn new(num_nodes: usize, undirected: bool) -> Self {
        Graph {
            adjacency: vec![Vec::new(); num_nodes],
            undirected,
        }
    }

    /// Creates a graph from `(from, to, weight)` triples.
    pub fn from_edges(
        num_nodes: usize,
        undirected: bool,
        edges: &[(NodeIndex, NodeIndex, W)],
    ) -> Result<Self> {
        let mut graph = Graph::new(num_nodes, undirected);
        for &(from, to, weight) in edges {
            graph.insert_edge(from, to, weight)?;
        }
        Ok(graph)
    }

    /// Returns the number of nodes
    pub fn num_nodes(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the number of stored directed edges (undirected edges count twice,
    /// self-loops once)
    pub fn num_edges(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    /// Returns true if edges are mirrored
    pub fn is_undirected(&self) -> bool {
        self.undirected
    }

    /// Appends a node with no edges and returns its index.
    pub fn insert_node(&mut self) -> NodeIndex {
        self.adjacency.push(Vec::new());
        self.adjacency.len() - 1
    }

    /// Adds an edge, replacing the weight of an existing edge between the same
    /// nodes.
    pub fn insert_edge(&mut self, from: NodeIndex, to: NodeIndex, weight: W) -> Result<()> {
        check_node(from, self.num_nodes())?;
        check_node(to, self.num_nodes())?;

        self.set_directed(from, to, weight);
        if self.undirected {
            self.set_directed(to, from, weight);
        }
        Ok(())
    }

    /// Removes the edge between `from` and `to`, returning it if it existed.
    pub fn remove_edge(&mut self, from: NodeIndex, to: NodeIndex) -> Result<Option<Edge<W>>> {
        check_node(from, self.num_nodes())?;
        check_node(to, self.num_nodes())?;

        let removed = self.remove_directed(from, to);
        if self.undirected {
            self.remove_directed(to, from);
        }
        Ok(removed)
    }

    /// Returns the edge from `from` to `to`, if any
    pub fn get_edge(&self, from: NodeIndex, to: NodeIndex) -> Option<&Edge<W>> {
        self.adjacency.get(from)?.iter().find(|edge| edge.to == to)
    }

    /// Returns true if there is an edge from `from` to `to`
    pub fn is_edge(&self, from: NodeIndex, to: NodeIndex) -> bool {
        self.get_edge(from, to).is_some()
    }

    /// Returns the outgoing edges of `node`; empty for unknown nodes.
    pub fn edges_from(&self, node: NodeIndex) -> &[Edge<W>] {
        self.adjacency.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Returns every stored edge, grouped by source node in index order.
    ///
    /// Undirected edges appear once from each end.
    pub fn edges(&self) -> Vec<Edge<W>> {
        self.adjacency.iter().flatten().copied().collect()
    }

    fn set_directed(&mut self, from: NodeIndex, to: NodeIndex, weight: W) {
        let edges = &mut self.adjacency[from];
        match edges.iter_mut().find(|edge| edge.to == to) {
            Some(edge) => edge.weight = weight,
            None => edges.push(Edge::new(from, to, weight)),
        }
    }

    fn remove_directed(&mut self, from: NodeIndex, to: NodeIndex) -> Option<Edge<W>> {
        let edges = &mut self.adjacency[from];
        let index = edges.iter().position(|edge| edge.to == to)?;
        Some(edges.remove(index))
    }
}

impl<W: Weight> WeightedGraph for Graph<W> {
    type Weight = W;

    fn num_nodes(&self) -> usize {
        self.adjacency.len()
    }

    fn neighbors_of(&self, node: NodeIndex) -> impl Iterator<Item = (NodeIndex, W)> + '_ {
        self.edges_from(node).iter().map(|edge| (edge.to, edge.weight))
    }
}
