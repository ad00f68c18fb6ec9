//! The seasonal routing policy.
//!
//! # Hop weighting
//!
//! Candidates are the neighbours of the current node whose distance to the
//! destination is no larger than the current node's.  A candidate's weight
//! is its improvement (distance saved).  Candidates with zero improvement
//! would otherwise never be picked, so each gets
//! `min_positive_improvement / (2 × zero_count)`: together they carry half
//! the weight of the least useful forward step.  Weights are normalised to
//! sum to 1.
//!
//! If no candidate improves at all (only possible with zero-weight edges)
//! every candidate gets the same weight.

use ns_core::{AgentId, DrawSource, LayerId, NodeId};
use ns_rule::{AgentRule, ModelRule, RuleError, RuleResult, TickContext, Vars};
use ns_spatial::{Distance, MultilayerGraphSpace, SpatialError, SpatialResult};

use crate::{season, TravelAgent};

/// One admissible next step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hop {
    pub node:        NodeId,
    /// How much closer `node` is to the destination than the current node.
    pub improvement: Distance,
}

/// Neighbours of `pos` in `layer` that are not farther from `dest`, in
/// ascending `NodeId` order.
///
/// # Errors
///
/// [`SpatialError::NoPath`] if `dest` is unreachable from `pos` in `layer`,
/// plus the lookup errors of
/// [`MultilayerGraphSpace::shortest_distance`].
pub fn candidate_hops(
    space: &MultilayerGraphSpace,
    pos:   NodeId,
    dest:  NodeId,
    layer: LayerId,
) -> SpatialResult<Vec<Hop>> {
    let dist = space.shortest_distance(pos, dest, layer)?;
    let hops = space
        .neighbors(pos, layer)
        .iter()
        .filter_map(|&node| {
            // A neighbour of a node that reaches `dest` reaches it too, so
            // `None` only shows up on inconsistent tables; skip it.
            let remaining = space.shortest_distance(node, dest, layer).ok()?;
            let improvement = dist.checked_sub(remaining)?;
            Some(Hop { node, improvement })
        })
        .collect();
    Ok(hops)
}

/// Sampling weights for candidates with the given improvements.
///
/// The result has the same length as `improvements`, is non-negative and
/// sums to 1 (up to rounding) for any non-empty input.
pub fn hop_weights(improvements: &[Distance]) -> Vec<f64> {
    if improvements.is_empty() {
        return Vec::new();
    }

    let Some(min_positive) = improvements.iter().copied().filter(|&d| d > 0).min() else {
        let uniform = 1.0 / improvements.len() as f64;
        return vec![uniform; improvements.len()];
    };
    let zero_count = improvements.iter().filter(|&&d| d == 0).count();
    let tie_weight = if zero_count > 0 {
        min_positive as f64 / (2 * zero_count) as f64
    } else {
        0.0
    };

    let raw: Vec<f64> = improvements
        .iter()
        .map(|&d| if d == 0 { tie_weight } else { d as f64 })
        .collect();
    let total: f64 = raw.iter().sum();
    raw.into_iter().map(|w| w / total).collect()
}

/// Index chosen by inverse-CDF sampling of `weights` with one uniform
/// value `u ∈ [0, 1)`.
///
/// Rounding can leave the cumulative sum just short of 1; a `u` past it
/// picks the last index.  `weights` must be non-empty (returns 0 otherwise).
pub fn sample_hop(weights: &[f64], u: f64) -> usize {
    let mut cumulative = 0.0;
    for (i, &w) in weights.iter().enumerate() {
        cumulative += w;
        if u < cumulative {
            return i;
        }
    }
    weights.len().saturating_sub(1)
}

// ── RoutingPolicy ─────────────────────────────────────────────────────────────

/// Moves travellers one hop per tick through the layer of their current
/// season.
#[derive(Debug, Clone, Copy)]
pub struct RoutingPolicy {
    season_length: Distance,
}

impl RoutingPolicy {
    /// # Errors
    /// [`RuleError::Config`] if `season_length` is zero.
    pub fn new(season_length: Distance) -> RuleResult<Self> {
        if season_length == 0 {
            return Err(RuleError::Config("season_length must be positive".into()));
        }
        Ok(Self { season_length })
    }

    pub fn season_length(&self) -> Distance {
        self.season_length
    }

    /// Number of travellers that have not reached their destination.
    pub fn en_route(states: &[TravelAgent]) -> usize {
        states.iter().filter(|a| !a.has_arrived()).count()
    }
}

impl AgentRule for RoutingPolicy {
    type State = TravelAgent;
    type Space = MultilayerGraphSpace;

    fn compute<D: DrawSource>(
        &self,
        agent: AgentId,
        ctx:   &TickContext<'_, TravelAgent, MultilayerGraphSpace>,
        draws: &mut D,
    ) -> RuleResult<TravelAgent> {
        let current = ctx.states[agent.index()];
        if current.has_arrived() {
            return Ok(current);
        }

        let layer = season(current.travel_time, self.season_length, ctx.space.layer_count());
        let hops = match candidate_hops(ctx.space, current.position, current.destination, layer) {
            Ok(hops) => hops,
            Err(SpatialError::NoPath { .. }) => {
                tracing::trace!(%agent, node = %current.position, %layer, "no path this season; waiting");
                return Ok(TravelAgent {
                    travel_time: current.travel_time + self.season_length,
                    ..current
                });
            }
            Err(e) => return Err(e.into()),
        };
        if hops.is_empty() {
            return Err(RuleError::Stranded { agent, node: current.position });
        }

        let improvements: Vec<Distance> = hops.iter().map(|h| h.improvement).collect();
        let weights = hop_weights(&improvements);
        let chosen = hops[sample_hop(&weights, draws.uniform())];

        Ok(TravelAgent {
            position:    chosen.node,
            travel_time: current.travel_time + chosen.improvement,
            ..current
        })
    }
}

impl ModelRule for RoutingPolicy {
    fn is_settled(&self, states: &[TravelAgent]) -> bool {
        Self::en_route(states) == 0
    }

    fn model_vars(&self, states: &[TravelAgent]) -> Vars {
        vec![("enroute", Self::en_route(states) as f64)]
    }

    fn agent_vars(&self, state: &TravelAgent) -> Vars {
        vec![
            ("position",    f64::from(state.position.0)),
            ("travel_time", state.travel_time as f64),
        ]
    }
}
