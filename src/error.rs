//! Error type shared by the traversals and the reference graph
//!
//! The priority queue has no error type of its own: an empty dequeue or an
//! update for an absent value are ordinary query results. Errors here are only
//! raised for caller-contract violations that would otherwise read out of
//! bounds.

use crate::traits::NodeIndex;
use thiserror::Error;

/// Errors raised by traversal entry points and graph construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SearchError {
    /// A node index does not name a node of the graph
    #[error("node {node} is out of bounds for a graph with {num_nodes} nodes")]
    NodeOutOfBounds {
        /// The offending index
        node: NodeIndex,
        /// Number of nodes in the graph
        num_nodes: usize,
    },
    /// A precomputed heuristic does not cover every node
    #[error("heuristic has {len} entries but the graph has {num_nodes} nodes")]
    HeuristicTooShort {
        /// Number of heuristic entries supplied
        len: usize,
        /// Number of nodes in the graph
        num_nodes: usize,
    },
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, SearchError>;

/// Fails with [`SearchError::NodeOutOfBounds`] unless `node < num_nodes`.
pub(crate) fn check_node(node: NodeIndex, num_nodes: usize) -> Result<()> {
    if node < num_nodes {
        Ok(())
    } else {
        Err(SearchError::NodeOutOfBounds { node, num_nodes })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_node() {
        assert_eq!(check_node(0, 1), Ok(()));
        assert_eq!(
            check_node(3, 3),
            Err(SearchError::NodeOutOfBounds {
                node: 3,
                num_nodes: 3
            })
        );
    }

    #[test]
    fn test_display() {
        let err = SearchError::HeuristicTooShort {
            len: 2,
            num_nodes: 5,
        };
        assert_eq!(
            err.to_string(),
            "heuristic has 2 entries but the graph has 5 nodes"
        );
    }
}
