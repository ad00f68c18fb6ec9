//! Single-layer graph space and its builder.
//!
//! # Data layout
//!
//! The graph uses **Compressed Sparse Row (CSR)** format.  Given a
//! `NodeId n`, its neighbours occupy the slice:
//!
//! ```text
//! edge_to[ node_out_start[n] .. node_out_start[n+1] ]
//! ```
//!
//! Undirected edges are stored once in each direction.  Within a node's
//! slice neighbours are sorted by `NodeId`, so every scan of a neighbourhood
//! visits nodes in the same order and the random draws consumed during a
//! scan are reproducible.
//!
//! # Node labels
//!
//! Callers name nodes with any hashable label.  [`GraphBuilder`] assigns
//! dense `NodeId`s in first-seen order; [`NodeLabels`] keeps the mapping
//! for reverse lookup after the build.

use std::hash::Hash;

use rustc_hash::FxHashMap;

use ns_core::NodeId;

/// Edge weight and path length unit.  Unweighted edges weigh 1.
pub type Distance = u64;

// ── GraphSpace ────────────────────────────────────────────────────────────────

/// Undirected simple graph in CSR format.
///
/// Built once and never mutated; shared read-only by every agent during a
/// tick.  Do not construct directly; use [`GraphBuilder`].
#[derive(Debug, Clone)]
pub struct GraphSpace {
    /// CSR row pointer.  Length = `node_count + 1`.
    pub node_out_start: Vec<u32>,

    /// Neighbour of each directed half-edge, sorted within each row.
    pub edge_to: Vec<NodeId>,

    /// Weight of each directed half-edge.
    pub edge_weight: Vec<Distance>,
}

impl GraphSpace {
    /// A graph with `node_count` isolated nodes.
    pub fn isolated(node_count: usize) -> Self {
        build_csr(node_count, Vec::new())
    }

    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.node_out_start.len().saturating_sub(1)
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.edge_to.len() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.node_count() == 0
    }

    /// `true` if `node` is a valid index into this graph.
    #[inline]
    pub fn contains(&self, node: NodeId) -> bool {
        node.index() < self.node_count()
    }

    /// All node ids in ascending order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.node_count()).map(NodeId::from_index)
    }

    // ── Graph traversal ───────────────────────────────────────────────────

    /// Neighbours of `node`, sorted ascending.  Empty for isolated or
    /// unknown nodes.
    #[inline]
    pub fn neighbors(&self, node: NodeId) -> &[NodeId] {
        match self.row(node) {
            Some((start, end)) => &self.edge_to[start..end],
            None => &[],
        }
    }

    /// Neighbours of `node` paired with the weight of the connecting edge.
    pub fn weighted_neighbors(&self, node: NodeId) -> impl Iterator<Item = (NodeId, Distance)> + '_ {
        let (start, end) = self.row(node).unwrap_or((0, 0));
        (start..end).map(move |i| (self.edge_to[i], self.edge_weight[i]))
    }

    #[inline]
    pub fn degree(&self, node: NodeId) -> usize {
        self.neighbors(node).len()
    }

    /// Weight of the edge `a – b`, or `None` if they are not adjacent.
    pub fn edge_weight(&self, a: NodeId, b: NodeId) -> Option<Distance> {
        let (start, _) = self.row(a)?;
        self.neighbors(a)
            .binary_search(&b)
            .ok()
            .map(|offset| self.edge_weight[start + offset])
    }

    #[inline]
    fn row(&self, node: NodeId) -> Option<(usize, usize)> {
        let start = *self.node_out_start.get(node.index())? as usize;
        let end   = *self.node_out_start.get(node.index() + 1)? as usize;
        Some((start, end))
    }
}

// ── NodeLabels ────────────────────────────────────────────────────────────────

/// Bidirectional mapping between caller labels and dense `NodeId`s.
#[derive(Debug, Clone)]
pub struct NodeLabels<L> {
    labels: Vec<L>,
    index:  FxHashMap<L, NodeId>,
}

impl<L: Hash + Eq + Clone> NodeLabels<L> {
    pub fn new() -> Self {
        Self { labels: Vec::new(), index: FxHashMap::default() }
    }

    /// Return the id for `label`, assigning the next dense id on first sight.
    pub fn intern(&mut self, label: L) -> NodeId {
        if let Some(&id) = self.index.get(&label) {
            return id;
        }
        let id = NodeId::from_index(self.labels.len());
        self.labels.push(label.clone());
        self.index.insert(label, id);
        id
    }

    pub fn node_of(&self, label: &L) -> Option<NodeId> {
        self.index.get(label).copied()
    }

    pub fn label_of(&self, node: NodeId) -> Option<&L> {
        self.labels.get(node.index())
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Labels in `NodeId` order.
    pub(crate) fn as_slice(&self) -> &[L] {
        &self.labels
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl<L: Hash + Eq + Clone> Default for NodeLabels<L> {
    fn default() -> Self {
        Self::new()
    }
}

// ── GraphBuilder ──────────────────────────────────────────────────────────────

/// Construct a [`GraphSpace`] incrementally, then call [`build`](Self::build).
///
/// Edges may be added in any order and may name nodes not yet added.
/// `build()` drops self-loops, collapses parallel edges (keeping the
/// smallest weight), sorts each neighbourhood, and lays out the CSR arrays.
///
/// # Example
///
/// ```
/// use ns_spatial::GraphBuilder;
///
/// let mut b = GraphBuilder::new();
/// b.add_edge("a", "b");
/// b.add_weighted_edge("b", "c", 5);
/// let (graph, labels) = b.build_labeled();
/// assert_eq!(graph.node_count(), 3);
/// assert_eq!(graph.edge_count(), 2);
/// let b_id = labels.node_of(&"b").unwrap();
/// assert_eq!(graph.degree(b_id), 2);
/// ```
pub struct GraphBuilder<L> {
    labels:    NodeLabels<L>,
    raw_edges: Vec<RawEdge>,
}

#[derive(Clone, Copy)]
pub(crate) struct RawEdge {
    pub(crate) from:   NodeId,
    pub(crate) to:     NodeId,
    pub(crate) weight: Distance,
}

impl<L: Hash + Eq + Clone> GraphBuilder<L> {
    pub fn new() -> Self {
        Self { labels: NodeLabels::new(), raw_edges: Vec::new() }
    }

    /// Add a node (no-op if the label is already known) and return its id.
    pub fn add_node(&mut self, label: L) -> NodeId {
        self.labels.intern(label)
    }

    /// Add an unweighted (weight 1) undirected edge.
    pub fn add_edge(&mut self, a: L, b: L) {
        self.add_weighted_edge(a, b, 1);
    }

    /// Add a weighted undirected edge.
    pub fn add_weighted_edge(&mut self, a: L, b: L, weight: Distance) {
        let from = self.labels.intern(a);
        let to   = self.labels.intern(b);
        self.raw_edges.push(RawEdge { from, to, weight });
    }

    pub fn node_count(&self) -> usize { self.labels.len() }

    /// Consume the builder and produce a [`GraphSpace`], discarding labels.
    pub fn build(self) -> GraphSpace {
        self.build_labeled().0
    }

    /// Consume the builder and produce the graph plus its label table.
    pub fn build_labeled(self) -> (GraphSpace, NodeLabels<L>) {
        let graph = build_csr(self.labels.len(), self.raw_edges);
        tracing::debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "graph space built"
        );
        (graph, self.labels)
    }
}

impl GraphBuilder<usize> {
    /// Builder pre-populated with nodes labelled `0..node_count`, so that
    /// label `i` is `NodeId(i)`.
    pub fn dense(node_count: usize) -> Self {
        let mut b = Self::new();
        for i in 0..node_count {
            b.add_node(i);
        }
        b
    }
}

impl<L: Hash + Eq + Clone> Default for GraphBuilder<L> {
    fn default() -> Self {
        Self::new()
    }
}

/// Lay out undirected `raw` edges over `node_count` nodes as CSR.
///
/// Time complexity: O(E log E) for the sort.
pub(crate) fn build_csr(node_count: usize, raw: Vec<RawEdge>) -> GraphSpace {
    let mut half: Vec<RawEdge> = Vec::with_capacity(raw.len() * 2);
    for e in raw {
        if e.from == e.to {
            continue;
        }
        half.push(e);
        half.push(RawEdge { from: e.to, to: e.from, weight: e.weight });
    }

    // Sort by (source, target, weight) so the first of each run of parallel
    // edges carries the smallest weight, then drop the rest.
    half.sort_unstable_by_key(|e| (e.from.0, e.to.0, e.weight));
    half.dedup_by_key(|e| (e.from, e.to));

    let edge_to:     Vec<NodeId>   = half.iter().map(|e| e.to).collect();
    let edge_weight: Vec<Distance> = half.iter().map(|e| e.weight).collect();

    // Build CSR row pointer.
    let mut node_out_start = vec![0u32; node_count + 1];
    for e in &half {
        node_out_start[e.from.index() + 1] += 1;
    }
    for i in 1..=node_count {
        node_out_start[i] += node_out_start[i - 1];
    }
    debug_assert_eq!(node_out_start[node_count] as usize, half.len());

    GraphSpace { node_out_start, edge_to, edge_weight }
}
