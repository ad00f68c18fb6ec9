//! SI and SIR transition rules.
//!
//! # Draw consumption
//!
//! Both rules scan the agent's neighbours in ascending `NodeId` order and
//! take one uniform draw per *infected* neighbour; susceptible and resistant
//! neighbours cannot transmit and are skipped without drawing.  A draw
//! `u ≤ si_trans` is a successful transmission.
//!
//! - SI keeps scanning after a success, so every infected neighbour always
//!   costs one draw.
//! - SIR stops at the first success; the remaining neighbours are never
//!   scanned and consume nothing.  An infected SIR agent draws exactly once
//!   to decide recovery.  Resistant agents draw nothing.

use ns_core::{AgentId, DrawSource, NodeId};
use ns_rule::{AgentRule, ModelRule, RuleError, RuleResult, TickContext, Vars};
use ns_spatial::GraphSpace;

use crate::{HealthState, StateCounts};

type Ctx<'a> = TickContext<'a, HealthState, GraphSpace>;

fn probability(name: &str, p: f64) -> RuleResult<f64> {
    if (0.0..=1.0).contains(&p) {
        Ok(p)
    } else {
        Err(RuleError::Config(format!("{name} must lie in [0, 1], got {p}")))
    }
}

/// Neighbours of `agent`'s home node that were infected when the tick
/// began, in scan order.
fn infected_neighbors<'a>(agent: AgentId, ctx: &'a Ctx<'_>) -> impl Iterator<Item = NodeId> + 'a {
    ctx.space
        .neighbors(NodeId::from_index(agent.index()))
        .iter()
        .copied()
        .filter(move |n| ctx.states.get(n.index()) == Some(&HealthState::Infected))
}

// ── Compartmental ─────────────────────────────────────────────────────────────

/// Shared shape of the compartmental rules: which compartments they report
/// and when a population has nothing left to do.
pub trait Compartmental {
    /// Compartments recorded as model variables, in column order.
    const COMPARTMENTS: &'static [HealthState];

    fn settled(counts: &StateCounts) -> bool;

    fn compartment_vars(states: &[HealthState]) -> Vars {
        let counts = StateCounts::tally(states);
        Self::COMPARTMENTS
            .iter()
            .map(|&c| (c.name(), counts.get(c) as f64))
            .collect()
    }
}

// ── SiRule ────────────────────────────────────────────────────────────────────

/// Susceptible → Infected, with Infected absorbing.
#[derive(Debug, Clone, Copy)]
pub struct SiRule {
    si_trans: f64,
}

impl SiRule {
    /// # Errors
    /// [`RuleError::Config`] if `si_trans` is outside `[0, 1]`.
    pub fn new(si_trans: f64) -> RuleResult<Self> {
        Ok(Self { si_trans: probability("si_trans", si_trans)? })
    }

    pub fn si_trans(&self) -> f64 {
        self.si_trans
    }
}

impl AgentRule for SiRule {
    type State = HealthState;
    type Space = GraphSpace;

    fn compute<D: DrawSource>(&self, agent: AgentId, ctx: &Ctx<'_>, draws: &mut D) -> RuleResult<HealthState> {
        let current = ctx.states[agent.index()];
        if current != HealthState::Susceptible {
            return Ok(current);
        }

        let mut infected = false;
        for _ in infected_neighbors(agent, ctx) {
            // No short-circuit: every infected neighbour costs a draw.
            infected |= draws.uniform() <= self.si_trans;
        }
        Ok(if infected { HealthState::Infected } else { HealthState::Susceptible })
    }
}

impl Compartmental for SiRule {
    const COMPARTMENTS: &'static [HealthState] = &[HealthState::Susceptible, HealthState::Infected];

    fn settled(counts: &StateCounts) -> bool {
        counts.susceptible == 0
    }
}

impl ModelRule for SiRule {
    fn is_settled(&self, states: &[HealthState]) -> bool {
        Self::settled(&StateCounts::tally(states))
    }

    fn model_vars(&self, states: &[HealthState]) -> Vars {
        Self::compartment_vars(states)
    }

    fn agent_vars(&self, state: &HealthState) -> Vars {
        vec![("state", f64::from(state.value()))]
    }
}

// ── SirRule ───────────────────────────────────────────────────────────────────

/// Susceptible → Infected → Resistant, with Resistant absorbing.
#[derive(Debug, Clone, Copy)]
pub struct SirRule {
    si_trans: f64,
    ir_trans: f64,
}

impl SirRule {
    /// # Errors
    /// [`RuleError::Config`] if either probability is outside `[0, 1]`.
    pub fn new(si_trans: f64, ir_trans: f64) -> RuleResult<Self> {
        Ok(Self {
            si_trans: probability("si_trans", si_trans)?,
            ir_trans: probability("ir_trans", ir_trans)?,
        })
    }

    pub fn si_trans(&self) -> f64 {
        self.si_trans
    }

    pub fn ir_trans(&self) -> f64 {
        self.ir_trans
    }
}

impl AgentRule for SirRule {
    type State = HealthState;
    type Space = GraphSpace;

    fn compute<D: DrawSource>(&self, agent: AgentId, ctx: &Ctx<'_>, draws: &mut D) -> RuleResult<HealthState> {
        match ctx.states[agent.index()] {
            HealthState::Susceptible => {
                for _ in infected_neighbors(agent, ctx) {
                    if draws.uniform() <= self.si_trans {
                        return Ok(HealthState::Infected);
                    }
                }
                Ok(HealthState::Susceptible)
            }
            HealthState::Infected => Ok(if draws.uniform() <= self.ir_trans {
                HealthState::Resistant
            } else {
                HealthState::Infected
            }),
            HealthState::Resistant => Ok(HealthState::Resistant),
        }
    }
}

impl Compartmental for SirRule {
    const COMPARTMENTS: &'static [HealthState] =
        &[HealthState::Susceptible, HealthState::Infected, HealthState::Resistant];

    fn settled(counts: &StateCounts) -> bool {
        counts.infected == 0
    }
}

impl ModelRule for SirRule {
    fn is_settled(&self, states: &[HealthState]) -> bool {
        Self::settled(&StateCounts::tally(states))
    }

    fn model_vars(&self, states: &[HealthState]) -> Vars {
        Self::compartment_vars(states)
    }

    fn agent_vars(&self, state: &HealthState) -> Vars {
        vec![("state", f64::from(state.value()))]
    }
}
