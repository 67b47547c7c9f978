//! Dijkstra, greedy best-first and A* search over a [`WeightedGraph`]
//!
//! All three run the shared loop in [`traversal`](crate::traversal) with an
//! indexed queue, so a node whose best-known cost drops is re-prioritized in
//! place instead of being pushed a second time.
//!
//! Every entry point returns a predecessor array: `result[v]` is the node
//! before `v` on the best route found, `None` for the start and for nodes the
//! search never reached. Use [`paths`](crate::paths) to turn it into a node
//! path.
//!
//! Correctness depends on caller contracts that are not checked:
//!
//! - Dijkstra and A* need non-negative edge weights
//! - A* needs an admissible heuristic (never above the true remaining cost)
//!   to return an optimal path
//!
//! Violations give silently wrong or suboptimal answers, not errors.
//!
//! # Example
//!
//! ```rust
//! use priority_traversal::graph::Graph;
//! use priority_traversal::pathfinding::{astar, dijkstra};
//! use priority_traversal::paths::node_path_from_predecessors;
//!
//! let graph = Graph::from_edges(
//!     4,
//!     true,
//!     &[(0, 1, 1.0), (0, 2, 1.0), (1, 3, 1.0), (2, 3, 0.5)],
//! )
//! .unwrap();
//!
//! let last = dijkstra(&graph, 0).unwrap();
//! assert_eq!(node_path_from_predecessors(&last, 3), vec![0, 2, 3]);
//!
//! let heuristic = [2.0, 1.0, 0.5, 0.0];
//! let last = astar(&graph, &heuristic, 0, 3).unwrap();
//! assert_eq!(last, vec![None, Some(0), Some(0), Some(2)]);
//! ```

use crate::error::{check_node, Result, SearchError};
use crate::indexed_binary::{IndexedPriorityQueue, QueueConfig};
use crate::paths::node_path_from_predecessors;
use crate::storage::HashPositions;
use crate::traits::{NodeIndex, Weight, WeightedGraph};
use crate::traversal::{traverse, NodeStatus, Strategy};
use log::debug;
use rustc_hash::FxHashMap;

// ============================================================================
// Dijkstra
// ============================================================================

/// Uniform-cost search: every node is seeded, the start at zero and the rest
/// at infinity, and a queued neighbor's priority drops whenever a cheaper
/// route is found.
struct DijkstraStrategy<W> {
    start: NodeIndex,
    best_cost: Vec<W>,
}

impl<W: Weight> Strategy<W> for DijkstraStrategy<W> {
    fn initial_priority(&self, node: NodeIndex) -> Option<W> {
        Some(if node == self.start {
            W::zero()
        } else {
            W::infinity()
        })
    }

    fn on_relax(
        &mut self,
        from: NodeIndex,
        to: NodeIndex,
        weight: W,
        status: NodeStatus<W>,
    ) -> Option<W> {
        if !matches!(status, NodeStatus::Queued(_)) {
            return None;
        }
        let cost = self.best_cost[from].saturating_add(weight);
        if cost < self.best_cost[to] {
            self.best_cost[to] = cost;
            Some(cost)
        } else {
            None
        }
    }
}

/// Runs Dijkstra's algorithm from `start` over the whole graph.
///
/// # Returns
/// The predecessor of every node on its shortest path from `start`.
///
/// # Errors
/// [`SearchError::NodeOutOfBounds`] if `start` or an edge destination is not a
/// node of `graph`.
///
/// # Example
/// ```rust
/// use priority_traversal::graph::Graph;
/// use priority_traversal::pathfinding::dijkstra;
///
/// let graph = Graph::from_edges(3, false, &[(0, 1, 2.0), (0, 2, 0.5), (2, 1, 0.75)]).unwrap();
/// assert_eq!(dijkstra(&graph, 0).unwrap(), vec![None, Some(2), Some(0)]);
/// ```
pub fn dijkstra<G: WeightedGraph>(graph: &G, start: NodeIndex) -> Result<Vec<Option<NodeIndex>>> {
    Ok(dijkstra_with_costs(graph, start)?.0)
}

/// Like [`dijkstra`], but also returns the final cost of every node
/// ([`Weight::infinity`] for unreachable ones).
pub fn dijkstra_with_costs<G: WeightedGraph>(
    graph: &G,
    start: NodeIndex,
) -> Result<(Vec<Option<NodeIndex>>, Vec<G::Weight>)> {
    let num_nodes = graph.num_nodes();
    check_node(start, num_nodes)?;

    let mut best_cost = vec![G::Weight::infinity(); num_nodes];
    best_cost[start] = G::Weight::zero();
    let mut strategy = DijkstraStrategy { start, best_cost };

    let tree = traverse(graph, start, &mut strategy)?;
    Ok((tree.predecessors, strategy.best_cost))
}

/// Finds a cheapest path from `start` to `goal` with Dijkstra's algorithm.
///
/// Returns `None` if `goal` is unreachable, otherwise the node path (both ends
/// inclusive) and its cost.
pub fn shortest_path<G: WeightedGraph>(
    graph: &G,
    start: NodeIndex,
    goal: NodeIndex,
) -> Result<Option<(Vec<NodeIndex>, G::Weight)>> {
    check_node(goal, graph.num_nodes())?;
    let (last, cost) = dijkstra_with_costs(graph, start)?;

    if goal != start && last[goal].is_none() {
        return Ok(None);
    }
    Ok(Some((node_path_from_predecessors(&last, goal), cost[goal])))
}

// ============================================================================
// Greedy best-first
// ============================================================================

/// Expands whatever looks closest to the goal. Path cost is ignored and a node
/// keeps the priority it was first queued with.
struct GreedyStrategy<'h, W> {
    start: NodeIndex,
    goal: NodeIndex,
    heuristic: &'h [W],
}

impl<W: Weight> Strategy<W> for GreedyStrategy<'_, W> {
    fn initial_priority(&self, node: NodeIndex) -> Option<W> {
        (node == self.start).then(|| self.heuristic[node])
    }

    fn on_relax(
        &mut self,
        _from: NodeIndex,
        to: NodeIndex,
        _weight: W,
        status: NodeStatus<W>,
    ) -> Option<W> {
        match status {
            NodeStatus::Unseen => Some(self.heuristic[to]),
            NodeStatus::Queued(_) | NodeStatus::Settled => None,
        }
    }

    fn is_terminal(&self, node: NodeIndex) -> bool {
        node == self.goal
    }
}

/// Greedy best-first search from `start` towards `goal`.
///
/// `heuristic[v]` estimates the remaining cost from `v` to `goal`. The search
/// stops once `goal` has been settled, so nodes it never needed stay `None`.
/// The path found is not guaranteed to be the cheapest.
///
/// # Errors
/// [`SearchError::NodeOutOfBounds`] for a bad `start`, `goal` or edge, and
/// [`SearchError::HeuristicTooShort`] if `heuristic` does not cover every node.
pub fn greedy_search<G: WeightedGraph>(
    graph: &G,
    heuristic: &[G::Weight],
    start: NodeIndex,
    goal: NodeIndex,
) -> Result<Vec<Option<NodeIndex>>> {
    check_search_args(graph, heuristic, goal)?;
    let mut strategy = GreedyStrategy {
        start,
        goal,
        heuristic,
    };
    Ok(traverse(graph, start, &mut strategy)?.predecessors)
}

// ============================================================================
// A*
// ============================================================================

/// Dijkstra's cost tracking with `cost + heuristic` as the priority. Only the
/// start is seeded; other nodes are queued when first reached.
struct AStarStrategy<'h, W> {
    start: NodeIndex,
    goal: NodeIndex,
    heuristic: &'h [W],
    best_cost: Vec<W>,
}

impl<W: Weight> Strategy<W> for AStarStrategy<'_, W> {
    fn initial_priority(&self, node: NodeIndex) -> Option<W> {
        (node == self.start).then(|| self.heuristic[node])
    }

    fn on_relax(
        &mut self,
        from: NodeIndex,
        to: NodeIndex,
        weight: W,
        _status: NodeStatus<W>,
    ) -> Option<W> {
        // A settled node is reopened if a cheaper route turns up, which only
        // happens with an inconsistent heuristic.
        let cost = self.best_cost[from].saturating_add(weight);
        if cost < self.best_cost[to] {
            self.best_cost[to] = cost;
            Some(cost.saturating_add(self.heuristic[to]))
        } else {
            None
        }
    }

    fn is_terminal(&self, node: NodeIndex) -> bool {
        node == self.goal
    }
}

/// A* search from `start` towards `goal`.
///
/// `heuristic[v]` must not exceed the true cost from `v` to `goal` for the
/// resulting path to be optimal; this is not checked.
///
/// # Errors
/// Same as [`greedy_search`].
pub fn astar<G: WeightedGraph>(
    graph: &G,
    heuristic: &[G::Weight],
    start: NodeIndex,
    goal: NodeIndex,
) -> Result<Vec<Option<NodeIndex>>> {
    check_search_args(graph, heuristic, goal)?;
    check_node(start, graph.num_nodes())?;

    let mut best_cost = vec![G::Weight::infinity(); graph.num_nodes()];
    best_cost[start] = G::Weight::zero();
    let mut strategy = AStarStrategy {
        start,
        goal,
        heuristic,
        best_cost,
    };
    Ok(traverse(graph, start, &mut strategy)?.predecessors)
}

fn check_search_args<G: WeightedGraph>(
    graph: &G,
    heuristic: &[G::Weight],
    goal: NodeIndex,
) -> Result<()> {
    let num_nodes = graph.num_nodes();
    check_node(goal, num_nodes)?;
    if heuristic.len() < num_nodes {
        return Err(SearchError::HeuristicTooShort {
            len: heuristic.len(),
            num_nodes,
        });
    }
    Ok(())
}

// ============================================================================
// Dynamic A*
// ============================================================================

/// A search problem whose states are discovered while searching.
///
/// Unlike a [`WeightedGraph`] with a precomputed heuristic vector, the world
/// answers heuristic queries on demand against its current goal, so the goal
/// can change between searches without rebuilding anything.
pub trait World {
    /// The cost type
    type Weight: Weight;

    /// Number of states; valid states are `0..num_states()`.
    fn num_states(&self) -> usize;

    /// The state the search begins in
    fn start(&self) -> NodeIndex;

    /// Returns true if `state` is a goal
    fn is_goal(&self, state: NodeIndex) -> bool;

    /// States reachable in one step from `state`, in a deterministic order
    fn neighbors(&self, state: NodeIndex) -> Vec<NodeIndex>;

    /// Cost of stepping from `from` to `to`
    fn cost(&self, from: NodeIndex, to: NodeIndex) -> Self::Weight;

    /// Lower bound on the remaining cost from `state` to the goal
    fn heuristic(&self, state: NodeIndex) -> Self::Weight;
}

/// A* over a [`World`], keeping state only for the states it discovers.
///
/// Returns a sparse predecessor map: every discovered state is a key, the
/// start maps to `None`.
///
/// # Errors
/// [`SearchError::NodeOutOfBounds`] if the start or a neighbor is not a state
/// of the world.
pub fn astar_dynamic<W: World>(world: &W) -> Result<FxHashMap<NodeIndex, Option<NodeIndex>>> {
    let num_states = world.num_states();
    let start = world.start();
    check_node(start, num_states)?;

    let mut settled: FxHashMap<NodeIndex, bool> = FxHashMap::default();
    let mut last: FxHashMap<NodeIndex, Option<NodeIndex>> = FxHashMap::default();
    let mut cost: FxHashMap<NodeIndex, W::Weight> = FxHashMap::default();
    let mut queue: IndexedPriorityQueue<NodeIndex, W::Weight, HashPositions<NodeIndex>> =
        IndexedPriorityQueue::from_config(QueueConfig::min());

    settled.insert(start, false);
    last.insert(start, None);
    cost.insert(start, W::Weight::zero());
    queue.enqueue(start, world.heuristic(start));

    let mut reached_goal = false;
    while !reached_goal {
        let Some(current) = queue.dequeue() else {
            break;
        };
        settled.insert(current, true);
        reached_goal = world.is_goal(current);

        let current_cost = cost.get(&current).copied().unwrap_or_else(W::Weight::infinity);
        for neighbor in world.neighbors(current) {
            check_node(neighbor, num_states)?;
            let step = world.cost(current, neighbor);
            let candidate = current_cost.saturating_add(step);

            if !settled.contains_key(&neighbor) {
                settled.insert(neighbor, false);
                last.insert(neighbor, Some(current));
                cost.insert(neighbor, candidate);
                queue.enqueue(neighbor, candidate.saturating_add(world.heuristic(neighbor)));
            } else if cost.get(&neighbor).is_some_and(|&known| candidate < known) {
                last.insert(neighbor, Some(current));
                cost.insert(neighbor, candidate);
                // No-op for states that already left the queue.
                let priority = candidate.saturating_add(world.heuristic(neighbor));
                queue.update_priority(&neighbor, priority);
            }
        }
    }

    debug!(
        "dynamic A* discovered {} of {} states, goal reached: {}",
        last.len(),
        num_states,
        reached_goal
    );
    Ok(last)
}
