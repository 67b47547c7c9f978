//! Common traits for priorities and graphs
//!
//! This module provides the two seams the traversals are generic over:
//!
//! - [`Weight`]: numeric edge weights and queue priorities, with a zero and an
//!   "unreached" infinity
//! - [`WeightedGraph`]: the read-only graph capability every traversal consumes
//!
//! The traversals never build or mutate a graph; anything that can enumerate a
//! node's outgoing `(destination, weight)` pairs can be searched.

use std::fmt;

/// Index of a node in a graph.
///
/// Nodes are dense integers `0..num_nodes`, which lets the queue use a direct
/// array for its position map.
pub type NodeIndex = usize;

/// Trait for types that can be used as edge weights and priorities.
///
/// Weights must be totally ordered in practice: `NaN` and other incomparable
/// values are a caller-contract violation and produce unspecified orderings.
pub trait Weight: Copy + PartialOrd + fmt::Debug {
    /// The additive identity
    fn zero() -> Self;

    /// The "not reached yet" marker.
    ///
    /// Integers use `MAX`, so reachable costs must stay below it: a cost that
    /// saturates to `MAX` is indistinguishable from an unreached node.
    fn infinity() -> Self;

    /// Adds two weights, saturating at [`Weight::infinity`] instead of overflowing
    fn saturating_add(self, rhs: Self) -> Self;
}

macro_rules! impl_float_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                fn zero() -> Self {
                    0.0
                }

                fn infinity() -> Self {
                    <$t>::INFINITY
                }

                fn saturating_add(self, rhs: Self) -> Self {
                    self + rhs
                }
            }
        )*
    };
}

macro_rules! impl_int_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                fn zero() -> Self {
                    0
                }

                fn infinity() -> Self {
                    <$t>::MAX
                }

                fn saturating_add(self, rhs: Self) -> Self {
                    <$t>::saturating_add(self, rhs)
                }
            }
        )*
    };
}

impl_float_weight!(f32, f64);
impl_int_weight!(i32, i64, u32, u64, usize);

/// Read-only access to a weighted directed graph.
///
/// Undirected graphs are expressed by listing each edge from both endpoints.
///
/// # Example
///
/// ```rust
/// use priority_traversal::{NodeIndex, WeightedGraph};
///
/// struct Line(usize);
///
/// impl WeightedGraph for Line {
///     type Weight = u32;
///
///     fn num_nodes(&self) -> usize {
///         self.0
///     }
///
///     fn neighbors_of(&self, node: NodeIndex) -> impl Iterator<Item = (NodeIndex, u32)> + '_ {
///         (node + 1 < self.0).then_some((node + 1, 1)).into_iter()
///     }
/// }
///
/// let last = priority_traversal::pathfinding::dijkstra(&Line(4), 0).unwrap();
/// assert_eq!(last, vec![None, Some(0), Some(1), Some(2)]);
/// ```
pub trait WeightedGraph {
    /// The edge weight type
    type Weight: Weight;

    /// Returns the number of nodes; valid indices are `0..num_nodes()`.
    fn num_nodes(&self) -> usize;

    /// Returns the outgoing edges of `node` as `(destination, weight)` pairs.
    ///
    /// The order is up to the implementation but must be the same on every
    /// call, so traversals are reproducible.
    fn neighbors_of(
        &self,
        node: NodeIndex,
    ) -> impl Iterator<Item = (NodeIndex, Self::Weight)> + '_;
}

impl<G: WeightedGraph> WeightedGraph for &G {
    type Weight = G::Weight;

    fn num_nodes(&self) -> usize {
        (**self).num_nodes()
    }

    fn neighbors_of(
        &self,
        node: NodeIndex,
    ) -> impl Iterator<Item = (NodeIndex, Self::Weight)> + '_ {
        (**self).neighbors_of(node)
    }
}
