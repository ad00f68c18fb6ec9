//! Contact network for the epidemic demo.

use std::collections::BTreeSet;

use ns_core::{DrawSource, SimRng};
use ns_spatial::{GraphBuilder, GraphSpace};

/// Watts–Strogatz small-world graph over nodes `0..n`.
///
/// Starts from a ring lattice linking each node to its `k / 2` nearest
/// neighbours on either side, then rewires the far end of every lattice edge
/// with probability `p` to a uniformly chosen node, never creating a
/// self-loop or a duplicate edge.  The edge count is that of the lattice.
pub fn small_world(n: usize, k: usize, p: f64, rng: &mut SimRng) -> GraphSpace {
    let half = k / 2;
    let mut adj: Vec<BTreeSet<usize>> = vec![BTreeSet::new(); n];
    for u in 0..n {
        for j in 1..=half {
            let v = (u + j) % n;
            if u != v {
                adj[u].insert(v);
                adj[v].insert(u);
            }
        }
    }

    for j in 1..=half {
        for u in 0..n {
            let v = (u + j) % n;
            // A node already linked to everyone has nowhere to rewire to.
            if rng.uniform() >= p || !adj[u].contains(&v) || adj[u].len() + 1 >= n {
                continue;
            }
            let w = loop {
                let w = rng.gen_range(0..n);
                if w != u && !adj[u].contains(&w) {
                    break w;
                }
            };
            adj[u].remove(&v);
            adj[v].remove(&u);
            adj[u].insert(w);
            adj[w].insert(u);
        }
    }

    let mut b = GraphBuilder::dense(n);
    for (u, ns) in adj.iter().enumerate() {
        for &v in ns.range(u + 1..) {
            b.add_edge(u, v);
        }
    }
    b.build()
}
