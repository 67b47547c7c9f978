//! Turning predecessor arrays into paths

use crate::traits::{NodeIndex, Weight, WeightedGraph};

/// Walks `predecessors` back from `dest` and returns the path root-first.
///
/// The path ends at `dest` and starts at the first node with no predecessor.
/// An out-of-range `dest` gives an empty path. A malformed array containing a
/// cycle is cut off after `predecessors.len()` steps.
///
/// ```rust
/// use priority_traversal::paths::node_path_from_predecessors;
///
/// let last = [None, Some(2), Some(0)];
/// assert_eq!(node_path_from_predecessors(&last, 1), vec![0, 2, 1]);
/// assert_eq!(node_path_from_predecessors(&last, 0), vec![0]);
/// ```
pub fn node_path_from_predecessors(
    predecessors: &[Option<NodeIndex>],
    dest: NodeIndex,
) -> Vec<NodeIndex> {
    let mut path = Vec::new();
    let mut current = (dest < predecessors.len()).then_some(dest);

    while let Some(node) = current {
        if path.len() > predecessors.len() {
            break;
        }
        path.push(node);
        current = predecessors.get(node).copied().flatten();
    }

    path.reverse();
    path
}

/// Number of hops from `dest` back to `origin`, or `None` if the chain of
/// predecessors runs out before reaching `origin`.
pub fn path_length(
    predecessors: &[Option<NodeIndex>],
    dest: NodeIndex,
    origin: NodeIndex,
) -> Option<usize> {
    let mut current = dest;
    let mut hops = 0;

    while current != origin {
        current = (*predecessors.get(current)?)?;
        hops += 1;
        if hops > predecessors.len() {
            return None;
        }
    }
    Some(hops)
}

/// Sums the edge weights along `path`.
///
/// Returns `None` if some consecutive pair is not joined by an edge. Paths with
/// fewer than two nodes cost zero.
pub fn path_cost<G: WeightedGraph>(graph: &G, path: &[NodeIndex]) -> Option<G::Weight> {
    path.windows(2).try_fold(G::Weight::zero(), |total, hop| {
        let weight = edge_weight(graph, hop[0], hop[1])?;
        Some(total.saturating_add(weight))
    })
}

/// Returns true if every node on `path` exists and consecutive nodes are
/// joined by an edge.
pub fn is_node_path_valid<G: WeightedGraph>(graph: &G, path: &[NodeIndex]) -> bool {
    match path.first() {
        None => true,
        Some(&first) if first >= graph.num_nodes() => false,
        Some(_) => path
            .windows(2)
            .all(|hop| edge_weight(graph, hop[0], hop[1]).is_some()),
    }
}

fn edge_weight<G: WeightedGraph>(graph: &G, from: NodeIndex, to: NodeIndex) -> Option<G::Weight> {
    if from >= graph.num_nodes() {
        return None;
    }
    graph
        .neighbors_of(from)
        .find_map(|(neighbor, weight)| (neighbor == to).then_some(weight))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;

    fn line() -> Graph<f64> {
        Graph::from_edges(4, false, &[(0, 1, 1.0), (1, 2, 2.0), (2, 3, 0.5)]).unwrap()
    }

    #[test]
    fn test_path_from_predecessors() {
        let last = vec![None, Some(0), Some(1), Some(2), None];
        assert_eq!(node_path_from_predecessors(&last, 3), vec![0, 1, 2, 3]);
        assert_eq!(node_path_from_predecessors(&last, 4), vec![4]);
        assert!(node_path_from_predecessors(&last, 9).is_empty());
    }

    #[test]
    fn test_cycle_is_cut_off() {
        let last = vec![Some(1), Some(0)];
        assert!(node_path_from_predecessors(&last, 0).len() <= 3);
        assert_eq!(path_length(&last, 0, 5), None);
    }

    #[test]
    fn test_path_length() {
        let last = vec![None, Some(0), Some(1), Some(2), None];
        assert_eq!(path_length(&last, 3, 0), Some(3));
        assert_eq!(path_length(&last, 0, 0), Some(0));
        assert_eq!(path_length(&last, 4, 0), None);
    }

    #[test]
    fn test_path_cost() {
        let graph = line();
        assert_eq!(path_cost(&graph, &[0, 1, 2, 3]), Some(3.5));
        assert_eq!(path_cost(&graph, &[2]), Some(0.0));
        assert_eq!(path_cost(&graph, &[]), Some(0.0));
        assert_eq!(path_cost(&graph, &[0, 2]), None);
    }

    #[test]
    fn test_is_node_path_valid() {
        let graph = line();
        assert!(is_node_path_valid(&graph, &[]));
        assert!(is_node_path_valid(&graph, &[1, 2, 3]));
        assert!(!is_node_path_valid(&graph, &[3, 2]));
        assert!(!is_node_path_valid(&graph, &[7]));
    }
}
