//! Population builders for the stock models.

use ns_core::{NodeId, NsError, RunConfig, SimRng};
use ns_epidemic::HealthState;
use ns_rule::ModelRule;
use ns_spatial::{GraphSpace, MultilayerGraphSpace};
use ns_transport::{RoutingPolicy, TravelAgent};

use crate::{Model, SimError, SimResult};

/// Offset mixed into the construction RNG so it never replays an agent's
/// stream.
const CONSTRUCTION_STREAM: u64 = 1;

// ── EpidemicBuilder ───────────────────────────────────────────────────────────

enum Outbreak {
    Sampled(usize),
    Explicit(Vec<NodeId>),
}

/// Fluent builder for SI / SIR models: one agent per node, everyone
/// susceptible except the outbreak.
///
/// # Optional inputs (have defaults)
///
/// | Method                  | Default                         |
/// |-------------------------|---------------------------------|
/// | `.outbreak_size(k)`     | 0 — no one infected             |
/// | `.outbreak(nodes)`      | —                               |
/// | `.initial_states(v)`    | —                               |
///
/// The three are alternatives; the last one called wins.
///
/// # Example
///
/// ```rust,ignore
/// let mut model = EpidemicBuilder::new(SirRule::new(0.025, 0.05)?, graph, RunConfig::new(7))
///     .outbreak_size(3)
///     .build()?;
/// model.run(&mut NoopObserver)?;
/// ```
pub struct EpidemicBuilder<R> {
    rule:    R,
    space:   GraphSpace,
    config:  RunConfig,
    initial: Initial,
}

enum Initial {
    Outbreak(Outbreak),
    States(Vec<HealthState>),
}

impl<R> EpidemicBuilder<R>
where
    R: ModelRule<State = HealthState, Space = GraphSpace>,
{
    pub fn new(rule: R, space: GraphSpace, config: RunConfig) -> Self {
        Self { rule, space, config, initial: Initial::Outbreak(Outbreak::Sampled(0)) }
    }

    /// Infect `k` distinct nodes sampled uniformly with the run's seed.
    pub fn outbreak_size(mut self, k: usize) -> Self {
        self.initial = Initial::Outbreak(Outbreak::Sampled(k));
        self
    }

    /// Infect exactly these nodes.
    pub fn outbreak(mut self, nodes: impl IntoIterator<Item = NodeId>) -> Self {
        self.initial = Initial::Outbreak(Outbreak::Explicit(nodes.into_iter().collect()));
        self
    }

    /// Start from explicit per-node states (must be length `node_count`).
    pub fn initial_states(mut self, states: Vec<HealthState>) -> Self {
        self.initial = Initial::States(states);
        self
    }

    /// Validate inputs, place the outbreak, and return a ready-to-run model.
    ///
    /// # Errors
    ///
    /// - [`SimError::Config`] if the outbreak is larger than the graph.
    /// - [`SimError::Core`] for an outbreak node not in the graph.
    /// - [`SimError::AgentCountMismatch`] for initial states of the wrong length.
    pub fn build(self) -> SimResult<Model<R>> {
        let n = self.space.node_count();

        let states = match self.initial {
            Initial::States(states) => {
                if states.len() != n {
                    return Err(SimError::AgentCountMismatch {
                        expected: n,
                        got:      states.len(),
                        what:     "initial states",
                    });
                }
                states
            }
            Initial::Outbreak(outbreak) => {
                let infected: Vec<NodeId> = match outbreak {
                    Outbreak::Sampled(k) => {
                        let mut rng = SimRng::new(self.config.seed).child(CONSTRUCTION_STREAM);
                        rng.sample_distinct(n, k)
                            .ok_or_else(|| SimError::Config(format!(
                                "outbreak of {k} exceeds graph of {n} nodes"
                            )))?
                            .into_iter()
                            .map(NodeId::from_index)
                            .collect()
                    }
                    Outbreak::Explicit(nodes) => {
                        if let Some(&bad) = nodes.iter().find(|&&node| !self.space.contains(node)) {
                            return Err(NsError::NodeNotFound(bad).into());
                        }
                        nodes
                    }
                };
                let mut states = vec![HealthState::Susceptible; n];
                for node in infected {
                    states[node.index()] = HealthState::Infected;
                }
                states
            }
        };

        Ok(Model::new(self.rule, self.space, states, self.config))
    }
}

// ── TravelBuilder ─────────────────────────────────────────────────────────────

/// Fluent builder for the seasonal travel model.
///
/// `.agents(n)` draws, per traveller, a distinct start/destination pair and
/// a start time uniform over one full cycle of seasons
/// (`[0, layer_count × season_length)`).  `.agents_at(v)` uses explicit
/// travellers instead.
pub struct TravelBuilder {
    policy:     RoutingPolicy,
    space:      MultilayerGraphSpace,
    config:     RunConfig,
    travellers: Travellers,
}

enum Travellers {
    Random(usize),
    Explicit(Vec<TravelAgent>),
}

impl TravelBuilder {
    pub fn new(policy: RoutingPolicy, space: MultilayerGraphSpace, config: RunConfig) -> Self {
        Self { policy, space, config, travellers: Travellers::Random(0) }
    }

    /// `n` randomly placed travellers.
    pub fn agents(mut self, n: usize) -> Self {
        self.travellers = Travellers::Random(n);
        self
    }

    /// Exactly these travellers.
    pub fn agents_at(mut self, travellers: Vec<TravelAgent>) -> Self {
        self.travellers = Travellers::Explicit(travellers);
        self
    }

    /// # Errors
    ///
    /// - [`SimError::Config`] for random travellers on fewer than two nodes.
    /// - [`SimError::Core`] for an explicit traveller on an unknown node.
    pub fn build(self) -> SimResult<Model<RoutingPolicy>> {
        let n = self.space.node_count();

        let travellers = match self.travellers {
            Travellers::Random(count) => {
                if count > 0 && n < 2 {
                    return Err(SimError::Config(format!(
                        "travellers need at least 2 nodes, graph has {n}"
                    )));
                }
                let cycle = self.space.layer_count() as u64 * self.policy.season_length();
                let mut rng = SimRng::new(self.config.seed).child(CONSTRUCTION_STREAM);
                let mut travellers = Vec::with_capacity(count);
                for _ in 0..count {
                    let pair = rng.sample_distinct(n, 2).ok_or_else(|| {
                        SimError::Config(format!("cannot draw 2 distinct nodes from {n}"))
                    })?;
                    let start_time = rng.gen_range(0..cycle);
                    travellers.push(TravelAgent::new(
                        NodeId::from_index(pair[0]),
                        NodeId::from_index(pair[1]),
                        start_time,
                    ));
                }
                travellers
            }
            Travellers::Explicit(travellers) => {
                for t in &travellers {
                    for node in [t.position, t.destination] {
                        if node.index() >= n {
                            return Err(NsError::NodeNotFound(node).into());
                        }
                    }
                }
                travellers
            }
        };

        Ok(Model::new(self.policy, self.space, travellers, self.config))
    }
}
