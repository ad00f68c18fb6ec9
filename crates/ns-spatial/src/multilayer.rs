//! Multilayer graph space: several graphs over one node set, each with its
//! own precomputed distance table.

use std::hash::Hash;

use ns_core::{LayerId, NodeId};

use crate::dijkstra::DistanceTable;
use crate::graph::{build_csr, Distance, GraphSpace, NodeLabels, RawEdge};
use crate::{SpatialError, SpatialResult};

// ── MultilayerGraphSpace ──────────────────────────────────────────────────────

/// N independent [`GraphSpace`] layers over an identical node set.
///
/// The distance tables are filled once in [`new`](Self::new) and never
/// touched again; `shortest_distance` and `path_exists` are table lookups.
#[derive(Debug, Clone)]
pub struct MultilayerGraphSpace {
    layers: Vec<GraphSpace>,
    tables: Vec<DistanceTable>,
}

impl MultilayerGraphSpace {
    /// Check that every layer carries the same label table, then
    /// precompute every layer's all-pairs distances.
    ///
    /// Each layer is a graph paired with the labels it was built with (see
    /// [`GraphBuilder::build_labeled`](crate::GraphBuilder::build_labeled)).
    /// Layers must agree on which label every `NodeId` stands for; the
    /// shared table is handed back.
    ///
    /// # Errors
    ///
    /// - [`SpatialError::EmptyLayers`] for an empty `layers`.
    /// - [`SpatialError::LayerMismatch`] if a layer's node count differs
    ///   from layer 0's, or from the size of its own label table.
    /// - [`SpatialError::LabelMismatch`] if a layer assigns some `NodeId` a
    ///   different label than layer 0 does.
    pub fn from_labeled<L: Hash + Eq + Clone>(
        layers: Vec<(GraphSpace, NodeLabels<L>)>,
    ) -> SpatialResult<(Self, NodeLabels<L>)> {
        if layers.len() > LayerId::INVALID.index() {
            return Err(SpatialError::TooManyLayers(layers.len()));
        }
        let mut layers = layers.into_iter();
        let (first_graph, labels) = layers.next().ok_or(SpatialError::EmptyLayers)?;
        let mut graphs = vec![first_graph];

        for (i, (graph, other)) in layers.enumerate() {
            let layer = LayerId::from_index(i + 1);
            if other.len() != labels.len() {
                return Err(SpatialError::LayerMismatch { layer, expected: labels.len(), got: other.len() });
            }
            if let Some(pos) = labels.as_slice().iter().zip(other.as_slice()).position(|(a, b)| a != b) {
                return Err(SpatialError::LabelMismatch { layer, node: NodeId::from_index(pos) });
            }
            graphs.push(graph);
        }
        for (i, graph) in graphs.iter().enumerate() {
            if graph.node_count() != labels.len() {
                return Err(SpatialError::LayerMismatch {
                    layer:    LayerId::from_index(i),
                    expected: labels.len(),
                    got:      graph.node_count(),
                });
            }
        }

        Ok((Self::new(graphs)?, labels))
    }

    /// Validate unlabelled `layers` and precompute their distance tables.
    ///
    /// Only node counts can be compared here, so this stays private to the
    /// builders, which guarantee a shared label table.
    pub(crate) fn new(layers: Vec<GraphSpace>) -> SpatialResult<Self> {
        let expected = layers.first().ok_or(SpatialError::EmptyLayers)?.node_count();
        if layers.len() > LayerId::INVALID.index() {
            return Err(SpatialError::TooManyLayers(layers.len()));
        }
        for (i, layer) in layers.iter().enumerate() {
            if layer.node_count() != expected {
                return Err(SpatialError::LayerMismatch {
                    layer: LayerId::from_index(i),
                    expected,
                    got: layer.node_count(),
                });
            }
        }

        let tables: Vec<DistanceTable> = layers.iter().map(DistanceTable::all_pairs).collect();
        tracing::debug!(
            layers = layers.len(),
            nodes = expected,
            "multilayer distance tables precomputed"
        );
        Ok(Self { layers, tables })
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    pub fn node_count(&self) -> usize {
        self.layers.first().map_or(0, GraphSpace::node_count)
    }

    /// All node ids in ascending order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> {
        (0..self.node_count()).map(NodeId::from_index)
    }

    /// One layer's graph.
    pub fn layer(&self, layer: LayerId) -> SpatialResult<&GraphSpace> {
        self.layers.get(layer.index()).ok_or(SpatialError::LayerOutOfRange {
            layer,
            count: self.layers.len(),
        })
    }

    /// Neighbours of `node` in `layer`.  Empty for an unknown layer or node.
    #[inline]
    pub fn neighbors(&self, node: NodeId, layer: LayerId) -> &[NodeId] {
        self.layers
            .get(layer.index())
            .map_or(&[], |g| g.neighbors(node))
    }

    /// Precomputed shortest distance from `src` to `dest` in `layer`.
    ///
    /// # Errors
    ///
    /// [`SpatialError::NoPath`] if `dest` is unreachable from `src` in that
    /// layer, [`SpatialError::LayerOutOfRange`] for an unknown layer,
    /// [`SpatialError::NodeNotFound`] for an unknown node.
    pub fn shortest_distance(&self, src: NodeId, dest: NodeId, layer: LayerId) -> SpatialResult<Distance> {
        let table = self.table(layer)?;
        for node in [src, dest] {
            if node.index() >= table.node_count() {
                return Err(SpatialError::NodeNotFound(node));
            }
        }
        table
            .get(src, dest)
            .ok_or(SpatialError::NoPath { from: src, to: dest, layer })
    }

    /// `true` iff `dest` appears in `src`'s precomputed table for `layer`.
    #[inline]
    pub fn path_exists(&self, src: NodeId, dest: NodeId, layer: LayerId) -> bool {
        self.tables
            .get(layer.index())
            .is_some_and(|t| t.get(src, dest).is_some())
    }

    fn table(&self, layer: LayerId) -> SpatialResult<&DistanceTable> {
        self.tables.get(layer.index()).ok_or(SpatialError::LayerOutOfRange {
            layer,
            count: self.tables.len(),
        })
    }
}

// ── MultilayerBuilder ─────────────────────────────────────────────────────────

/// Builds a [`MultilayerGraphSpace`] whose layers share one label table, so
/// the node sets cannot drift apart.
///
/// # Example
///
/// ```
/// use ns_spatial::MultilayerBuilder;
///
/// let mut b = MultilayerBuilder::new();
/// let summer = b.add_layer();
/// let winter = b.add_layer();
/// b.add_weighted_edge(summer, "port", "inland", 4);
/// b.add_node("island");
/// b.add_weighted_edge(winter, "port", "island", 2);
/// let (space, labels) = b.build_labeled().unwrap();
///
/// let port   = labels.node_of(&"port").unwrap();
/// let island = labels.node_of(&"island").unwrap();
/// assert_eq!(space.node_count(), 3);
/// assert!(!space.path_exists(port, island, summer));
/// assert_eq!(space.shortest_distance(port, island, winter).unwrap(), 2);
/// ```
pub struct MultilayerBuilder<L> {
    labels: NodeLabels<L>,
    layers: Vec<Vec<RawEdge>>,
}

impl<L: Hash + Eq + Clone> MultilayerBuilder<L> {
    pub fn new() -> Self {
        Self { labels: NodeLabels::new(), layers: Vec::new() }
    }

    /// Append an empty layer and return its id.
    pub fn add_layer(&mut self) -> LayerId {
        self.layers.push(Vec::new());
        LayerId::from_index(self.layers.len() - 1)
    }

    /// Add a node present in every layer.
    pub fn add_node(&mut self, label: L) -> NodeId {
        self.labels.intern(label)
    }

    /// Add an unweighted (weight 1) edge to `layer`.
    ///
    /// # Panics
    /// Panics if `layer` was not returned by [`add_layer`](Self::add_layer).
    pub fn add_edge(&mut self, layer: LayerId, a: L, b: L) {
        self.add_weighted_edge(layer, a, b, 1);
    }

    /// Add a weighted edge to `layer`.
    ///
    /// # Panics
    /// Panics if `layer` was not returned by [`add_layer`](Self::add_layer).
    pub fn add_weighted_edge(&mut self, layer: LayerId, a: L, b: L, weight: Distance) {
        let from = self.labels.intern(a);
        let to   = self.labels.intern(b);
        self.layers[layer.index()].push(RawEdge { from, to, weight });
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    pub fn build(self) -> SpatialResult<MultilayerGraphSpace> {
        self.build_labeled().map(|(space, _)| space)
    }

    pub fn build_labeled(self) -> SpatialResult<(MultilayerGraphSpace, NodeLabels<L>)> {
        let n = self.labels.len();
        let layers = self.layers.into_iter().map(|raw| build_csr(n, raw)).collect();
        let space = MultilayerGraphSpace::new(layers)?;
        Ok((space, self.labels))
    }
}

impl<L: Hash + Eq + Clone> Default for MultilayerBuilder<L> {
    fn default() -> Self {
        Self::new()
    }
}
