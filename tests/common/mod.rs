//! Fixtures shared by the integration tests

#![allow(dead_code)]

use priority_traversal::graph::Graph;

/// Routes `log` output through env_logger; safe to call from every test.
pub fn init_test() {
    drop(env_logger::builder().is_test(true).try_init());
}

/// Linear congruential generator for reproducible graphs
pub struct Lcg {
    state: u64,
}

impl Lcg {
    pub fn new(seed: u64) -> Self {
        Lcg { state: seed }
    }

    pub fn next(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.state >> 33
    }

    pub fn next_range(&mut self, min: u32, max: u32) -> u32 {
        let range = (max - min) as u64;
        if range == 0 {
            return min;
        }
        min + (self.next() % range) as u32
    }
}

/// Undirected `width` x `height` grid; node `(x, y)` is `y * width + x`.
/// Edge weights come from `weight` and must be at least 1 so that Manhattan
/// distance stays admissible.
pub fn grid(width: usize, height: usize, mut weight: impl FnMut() -> u32) -> Graph<u32> {
    let mut graph = Graph::new(width * height, true);
    for y in 0..height {
        for x in 0..width {
            let node = y * width + x;
            if x + 1 < width {
                graph.insert_edge(node, node + 1, weight()).unwrap();
            }
            if y + 1 < height {
                graph.insert_edge(node, node + width, weight()).unwrap();
            }
        }
    }
    graph
}

/// Manhattan distance from every grid node to `goal`
pub fn manhattan(width: usize, height: usize, goal: usize) -> Vec<u32> {
    let (gx, gy) = (goal % width, goal / width);
    (0..width * height)
        .map(|node| {
            let (x, y) = (node % width, node / width);
            (x.abs_diff(gx) + y.abs_diff(gy)) as u32
        })
        .collect()
}

/// Reference single-source costs by repeated edge relaxation
pub fn bellman_ford(graph: &Graph<u32>, start: usize) -> Vec<u64> {
    let n = graph.num_nodes();
    let mut cost = vec![u64::MAX; n];
    cost[start] = 0;
    for _ in 0..n {
        let mut changed = false;
        for from in 0..n {
            if cost[from] == u64::MAX {
                continue;
            }
            for edge in graph.edges_from(from) {
                let candidate = cost[from] + edge.weight as u64;
                if candidate < cost[edge.to] {
                    cost[edge.to] = candidate;
                    changed = true;
                }
            }
        }
        if !changed {
            break;
        }
    }
    cost
}
