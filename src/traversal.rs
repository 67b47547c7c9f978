//! Shared "settle the best node, relax its neighbors" loop
//!
//! Dijkstra, greedy best-first, A* and Prim all run the same loop over an
//! [`IndexedPriorityQueue`](crate::indexed_binary::IndexedPriorityQueue) and
//! differ only in the priorities they assign. Each algorithm is a
//! [`Strategy`]; [`traverse`] drives it.
//!
//! The loop owns the queue, the settled markers and the predecessor array.
//! Whenever a strategy returns a new priority from [`Strategy::on_relax`], the
//! loop records the predecessor and either updates the neighbor in place or
//! enqueues it.

use crate::error::{check_node, Result};
use crate::indexed_binary::{NodeQueue, QueueConfig};
use crate::traits::{NodeIndex, Weight, WeightedGraph};
use log::{debug, trace};

/// Where a neighbor stands when an edge into it is relaxed
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NodeStatus<W> {
    /// Never queued
    Unseen,
    /// In the queue at the given priority
    Queued(W),
    /// Already dequeued
    Settled,
}

/// What the loop should do after a node is settled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settle {
    /// Relax the node's edges and keep going
    Continue,
    /// Stop immediately; the traversal has no valid result
    Abort,
}

/// Per-algorithm policy plugged into [`traverse`].
pub trait Strategy<W: Weight> {
    /// Priority to seed `node` with, or `None` to leave it out of the queue.
    fn initial_priority(&self, node: NodeIndex) -> Option<W>;

    /// Called when `node` is dequeued with `priority`.
    fn on_settle(
        &mut self,
        _node: NodeIndex,
        _predecessor: Option<NodeIndex>,
        _priority: W,
    ) -> Settle {
        Settle::Continue
    }

    /// Called for each edge `from -> to` of a freshly settled node.
    ///
    /// Returns the neighbor's new priority if `from` is a better way to reach
    /// it, or `None` to leave it alone.
    fn on_relax(
        &mut self,
        from: NodeIndex,
        to: NodeIndex,
        weight: W,
        status: NodeStatus<W>,
    ) -> Option<W>;

    /// Returns true if the search is over once `node` has been settled and
    /// relaxed.
    fn is_terminal(&self, _node: NodeIndex) -> bool {
        false
    }
}

/// Working state left behind by [`traverse`]
#[derive(Debug, Clone, PartialEq)]
pub struct SearchTree {
    /// For each node, the node that best reaches it (`None` for roots and
    /// unreached nodes)
    pub predecessors: Vec<Option<NodeIndex>>,
    /// Nodes that were dequeued at least once
    pub settled: Vec<bool>,
    /// The node whose settlement aborted the traversal, if any
    pub aborted_at: Option<NodeIndex>,
}

/// Runs `strategy` over `graph` starting from `start`.
///
/// `start` is seeded first, then every other node in index order, each with
/// [`Strategy::initial_priority`]. The loop ends when the queue drains, a
/// settled node is terminal, or [`Strategy::on_settle`] aborts.
///
/// # Errors
///
/// Fails with [`SearchError::NodeOutOfBounds`](crate::SearchError) if `start`
/// or any edge destination is not a node of `graph`.
pub fn traverse<G, S>(graph: &G, start: NodeIndex, strategy: &mut S) -> Result<SearchTree>
where
    G: WeightedGraph,
    S: Strategy<G::Weight>,
{
    let num_nodes = graph.num_nodes();
    check_node(start, num_nodes)?;

    let mut queue: NodeQueue<G::Weight> =
        NodeQueue::from_config(QueueConfig::min().with_capacity(num_nodes));
    let mut tree = SearchTree {
        predecessors: vec![None; num_nodes],
        settled: vec![false; num_nodes],
        aborted_at: None,
    };

    let seeds = std::iter::once(start).chain((0..num_nodes).filter(|&node| node != start));
    for node in seeds {
        if let Some(priority) = strategy.initial_priority(node) {
            queue.enqueue(node, priority);
        }
    }
    debug!("traversal from {} seeded {} of {} nodes", start, queue.len(), num_nodes);

    let mut settled_count = 0usize;
    while let Some(item) = queue.dequeue_item() {
        let current = item.value;
        tree.settled[current] = true;
        settled_count += 1;
        trace!("settled {} at {:?}", current, item.priority);

        let predecessor = tree.predecessors[current];
        if strategy.on_settle(current, predecessor, item.priority) == Settle::Abort {
            debug!("traversal aborted at node {}", current);
            tree.aborted_at = Some(current);
            break;
        }

        for (neighbor, weight) in graph.neighbors_of(current) {
            check_node(neighbor, num_nodes)?;

            let status = if tree.settled[neighbor] {
                NodeStatus::Settled
            } else if let Some(priority) = queue.priority_of(&neighbor) {
                NodeStatus::Queued(priority)
            } else {
                NodeStatus::Unseen
            };

            if let Some(priority) = strategy.on_relax(current, neighbor, weight, status) {
                trace!("relaxed {} -> {} to {:?}", current, neighbor, priority);
                tree.predecessors[neighbor] = Some(current);
                if queue.contains(&neighbor) {
                    queue.update_priority(&neighbor, priority);
                } else {
                    queue.enqueue(neighbor, priority);
                }
            }
        }

        if strategy.is_terminal(current) {
            debug!("reached terminal node {}", current);
            break;
        }
    }

    debug!(
        "traversal from {} settled {} times, {} left queued",
        start,
        settled_count,
        queue.len()
    );
    Ok(tree)
}
