//! The `AgentRule` trait, the main extension point for user code, and its
//! model-level companion `ModelRule`.

use ns_core::{AgentId, DrawSource};

use crate::{RuleResult, TickContext};

/// Named numeric values recorded by data collection, in column order.
pub type Vars = Vec<(&'static str, f64)>;

/// Pluggable per-agent transition rule.
///
/// `compute` maps an agent's committed state (plus whatever it reads from
/// its neighbours and the space) to its next state.  All randomness comes
/// from the supplied [`DrawSource`], which the scheduler backs with the
/// agent's own `AgentRng`; tests pass `ScriptedDraws` instead.
///
/// # Thread safety
///
/// The scheduler may call `compute` for many agents in parallel via Rayon,
/// so implementations must be `Send + Sync` and the space must be `Sync`.
///
/// # Example
///
/// ```
/// use ns_core::{AgentId, DrawSource};
/// use ns_rule::{AgentRule, RuleResult, TickContext};
///
/// /// Every agent copies the larger of itself and its right-hand neighbour.
/// struct MaxOfRight;
///
/// impl AgentRule for MaxOfRight {
///     type State = u32;
///     type Space = ();
///
///     fn compute<D: DrawSource>(
///         &self,
///         agent: AgentId,
///         ctx:   &TickContext<'_, u32, ()>,
///         _draws: &mut D,
///     ) -> RuleResult<u32> {
///         let me    = ctx.states[agent.index()];
///         let right = ctx.states[(agent.index() + 1) % ctx.agent_count()];
///         Ok(me.max(right))
///     }
/// }
/// ```
pub trait AgentRule: Send + Sync + 'static {
    /// Per-agent state.  The agent record *is* this value.
    type State: Clone + Send + Sync;

    /// Shared read-only space the rule navigates.
    type Space: Send + Sync;

    /// Compute `agent`'s next state from the committed snapshot in `ctx`.
    ///
    /// An `Err` aborts the whole tick: no agent's state is committed.
    fn compute<D: DrawSource>(
        &self,
        agent: AgentId,
        ctx:   &TickContext<'_, Self::State, Self::Space>,
        draws: &mut D,
    ) -> RuleResult<Self::State>;
}

/// An [`AgentRule`] that also knows when a model running it is finished and
/// what to record about it.
pub trait ModelRule: AgentRule {
    /// `true` once the population has reached a state from which the model
    /// should stop on its own.
    fn is_settled(&self, states: &[Self::State]) -> bool;

    /// Model-level variables (one row per tick).
    fn model_vars(&self, states: &[Self::State]) -> Vars;

    /// Agent-level variables (one row per agent per tick).
    fn agent_vars(&self, state: &Self::State) -> Vars;
}
