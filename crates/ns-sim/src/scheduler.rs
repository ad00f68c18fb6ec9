//! The synchronous two-phase scheduler.

use ns_core::{AgentId, AgentRngs, Tick};
use ns_rule::{AgentRule, TickContext};

use crate::{SimError, SimResult};

/// Owns the committed agent states and RNG streams, plus the staged copies
/// of both for the tick in progress.
///
/// A tick is all-or-nothing: every agent's next state is computed against
/// the committed snapshot into `staged`, drawing from `staged_rngs`, and only
/// if all computations succeed are the staged and committed buffers
/// swapped.  A failed tick leaves states and streams exactly as they were,
/// so retrying it replays the same draws.  Nothing outside
/// [`tick`](Self::tick) can write to the committed states.
pub struct SyncScheduler<S> {
    current:     Vec<S>,
    staged:      Vec<S>,
    rngs:        AgentRngs,
    staged_rngs: AgentRngs,
}

impl<S: Clone + Send + Sync> SyncScheduler<S> {
    /// Take ownership of the initial states and seed one RNG per agent.
    pub fn new(initial: Vec<S>, seed: u64) -> Self {
        let rngs = AgentRngs::new(initial.len(), seed);
        Self {
            staged: Vec::with_capacity(initial.len()),
            current: initial,
            staged_rngs: rngs.clone(),
            rngs,
        }
    }

    /// Committed states, indexed by `AgentId`.
    #[inline]
    pub fn states(&self) -> &[S] {
        &self.current
    }

    pub fn agent_count(&self) -> usize {
        self.current.len()
    }

    /// Run one compute/commit cycle.
    ///
    /// # Errors
    ///
    /// [`SimError::Rule`] naming the failing agent.  Committed states and
    /// RNG streams are left exactly as they were.  With the `parallel`
    /// feature, if several agents fail it is unspecified which one is
    /// reported.
    pub fn tick<R>(&mut self, rule: &R, space: &R::Space, now: Tick) -> SimResult<()>
    where
        R: AgentRule<State = S>,
    {
        // Explicit field borrows so the borrow checker sees disjoint access.
        let current = self.current.as_slice();
        let staged  = &mut self.staged;
        let rngs    = &mut self.staged_rngs;

        staged.clear();
        rngs.inner.clone_from(&self.rngs.inner);
        let ctx = TickContext::new(now, current, space);

        #[cfg(not(feature = "parallel"))]
        {
            for (i, rng) in rngs.inner.iter_mut().enumerate() {
                let agent = AgentId::from_index(i);
                let next = rule
                    .compute(agent, &ctx, rng)
                    .map_err(|source| SimError::Rule { agent, source })?;
                staged.push(next);
            }
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            let computed: SimResult<Vec<S>> = rngs
                .inner
                .par_iter_mut()
                .enumerate()
                .map(|(i, rng)| {
                    let agent = AgentId::from_index(i);
                    rule.compute(agent, &ctx, rng)
                        .map_err(|source| SimError::Rule { agent, source })
                })
                .collect();
            *staged = computed?;
        }

        // ── Commit ────────────────────────────────────────────────────────
        debug_assert_eq!(self.staged.len(), self.current.len());
        std::mem::swap(&mut self.current, &mut self.staged);
        std::mem::swap(&mut self.rngs, &mut self.staged_rngs);
        Ok(())
    }
}
