//! Read-only simulation state passed to every rule callback.

use ns_core::{AgentId, Tick};

/// A read-only snapshot of the committed simulation state.
///
/// Built once per tick by the scheduler and shared (immutably) across all
/// agent computations during the compute phase.
///
/// # Lifetimes
///
/// All borrows live for the duration of one tick's compute phase.  The
/// scheduler never hands out mutable access to the committed states while a
/// `TickContext` is live, so no rule can observe a state staged this tick.
pub struct TickContext<'a, S, Sp> {
    /// The tick being computed (the model's counter before it advances).
    pub tick: Tick,

    /// Every agent's committed state, indexed by `AgentId`.
    pub states: &'a [S],

    /// The shared space (single graph or multilayer graph).
    pub space: &'a Sp,
}

impl<'a, S, Sp> TickContext<'a, S, Sp> {
    #[inline]
    pub fn new(tick: Tick, states: &'a [S], space: &'a Sp) -> Self {
        Self { tick, states, space }
    }

    /// Committed state of `agent`, or `None` for an unknown id.
    #[inline]
    pub fn state(&self, agent: AgentId) -> Option<&'a S> {
        self.states.get(agent.index())
    }

    pub fn agent_count(&self) -> usize {
        self.states.len()
    }
}

// Manual impls: derive would demand `S: Clone` and `Sp: Clone`.
impl<S, Sp> Clone for TickContext<'_, S, Sp> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S, Sp> Copy for TickContext<'_, S, Sp> {}
