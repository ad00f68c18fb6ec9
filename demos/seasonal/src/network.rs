//! Seasonal layers for the transport demo.

use std::collections::BTreeSet;

use ns_core::{DrawSource, SimRng};
use ns_spatial::{Distance, MultilayerBuilder, MultilayerGraphSpace, SpatialResult};

/// `layers` independent weighted small-world graphs over the same `n` nodes,
/// edge weights uniform in `1..max_weight`.
pub fn seasonal_layers(
    layers:     usize,
    n:          usize,
    k:          usize,
    p:          f64,
    max_weight: Distance,
    rng:        &mut SimRng,
) -> SpatialResult<MultilayerGraphSpace> {
    let mut b = MultilayerBuilder::new();
    for node in 0..n {
        b.add_node(node);
    }
    for _ in 0..layers {
        let layer = b.add_layer();
        for (u, v) in rewired_ring(n, k, p, rng) {
            let w = rng.gen_range(1..max_weight);
            b.add_weighted_edge(layer, u, v, w);
        }
    }
    b.build()
}

/// Edges `(low, high)` of a Watts–Strogatz ring lattice with each lattice
/// edge's far end rewired with probability `p`.
fn rewired_ring(n: usize, k: usize, p: f64, rng: &mut SimRng) -> Vec<(usize, usize)> {
    let mut adj: Vec<BTreeSet<usize>> = vec![BTreeSet::new(); n];
    for u in 0..n {
        for j in 1..=k / 2 {
            let v = (u + j) % n;
            if u != v {
                adj[u].insert(v);
                adj[v].insert(u);
            }
        }
    }

    for j in 1..=k / 2 {
        for u in 0..n {
            let v = (u + j) % n;
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

    adj.iter()
        .enumerate()
        .flat_map(|(u, ns)| ns.range(u + 1..).map(move |&v| (u, v)))
        .collect()
}
