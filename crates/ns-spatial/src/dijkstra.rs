//! Single-source Dijkstra and the all-pairs distance table.
//!
//! # Layout
//!
//! [`DistanceTable`] is a dense `n × n` row-major array of `Distance`, with
//! `UNREACHABLE` (`u64::MAX`) marking pairs with no path.  Node ids are
//! already dense, so a point query is a single index computation.
//!
//! Memory is O(n²) per table, which is the intended trade for the node counts
//! this workspace targets (tens to low thousands): routing queries happen
//! once per travelling agent per tick and must not search.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use ns_core::NodeId;

use crate::graph::{Distance, GraphSpace};

const UNREACHABLE: Distance = Distance::MAX;

// ── DistanceTable ─────────────────────────────────────────────────────────────

/// Precomputed shortest weighted distances between every ordered node pair.
#[derive(Debug, Clone)]
pub struct DistanceTable {
    node_count: usize,
    dist:       Vec<Distance>,
}

impl DistanceTable {
    /// Run Dijkstra from every node of `graph`.
    ///
    /// Time complexity: O(n · (E + n) log n).
    pub fn all_pairs(graph: &GraphSpace) -> Self {
        let n = graph.node_count();
        let mut dist = Vec::with_capacity(n * n);
        for src in graph.nodes() {
            dist.extend(single_source(graph, src));
        }
        Self { node_count: n, dist }
    }

    /// Shortest distance from `src` to `dest`, or `None` if `dest` is
    /// unreachable (or either node is out of range).
    #[inline]
    pub fn get(&self, src: NodeId, dest: NodeId) -> Option<Distance> {
        if src.index() >= self.node_count || dest.index() >= self.node_count {
            return None;
        }
        match self.dist[src.index() * self.node_count + dest.index()] {
            UNREACHABLE => None,
            d => Some(d),
        }
    }

    /// Number of destinations reachable from `src` (including `src`).
    pub fn reachable_count(&self, src: NodeId) -> usize {
        if src.index() >= self.node_count {
            return 0;
        }
        let row = &self.dist[src.index() * self.node_count..(src.index() + 1) * self.node_count];
        row.iter().filter(|&&d| d != UNREACHABLE).count()
    }

    pub fn node_count(&self) -> usize {
        self.node_count
    }
}

// ── Dijkstra internals ────────────────────────────────────────────────────────

/// Distances from `from` to every node, `UNREACHABLE` where no path exists.
fn single_source(graph: &GraphSpace, from: NodeId) -> Vec<Distance> {
    let mut dist = vec![UNREACHABLE; graph.node_count()];
    dist[from.index()] = 0;

    // Min-heap: (cost, node). Reverse makes BinaryHeap (max) behave as min-heap.
    let mut heap: BinaryHeap<Reverse<(Distance, NodeId)>> = BinaryHeap::new();
    heap.push(Reverse((0, from)));

    while let Some(Reverse((cost, node))) = heap.pop() {
        // Skip stale heap entries.
        if cost > dist[node.index()] {
            continue;
        }

        for (neighbor, weight) in graph.weighted_neighbors(node) {
            let new_cost = cost.saturating_add(weight);
            if new_cost < dist[neighbor.index()] {
                dist[neighbor.index()] = new_cost;
                heap.push(Reverse((new_cost, neighbor)));
            }
        }
    }

    dist
}
