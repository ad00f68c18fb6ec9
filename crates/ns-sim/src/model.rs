//! `Model<R>`: a scheduler, a space, and a stopping rule.

use std::fmt;

use ns_core::{AgentId, NsError, NsResult, RunConfig, Tick};
use ns_epidemic::{HealthState, SiRule, SirRule, StateCounts};
use ns_rule::{ModelRule, Vars};
use ns_transport::{RoutingPolicy, TravelAgent};

use crate::{ModelView, SimObserver, SimResult, SyncScheduler};

/// Why a model stopped running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The rule reported the population settled (no susceptible agents for
    /// SI, no infected agents for SIR, every traveller arrived).
    Settled,
    /// `RunConfig::max_steps` ticks were committed first.
    BudgetExhausted,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopReason::Settled         => f.write_str("settled"),
            StopReason::BudgetExhausted => f.write_str("step budget exhausted"),
        }
    }
}

/// SI epidemic on a single graph.
pub type SiModel = Model<SiRule>;

/// SIR epidemic on a single graph.
pub type SirModel = Model<SirRule>;

/// Seasonal travellers on a multilayer graph.
pub type TravelModel = Model<RoutingPolicy>;

// ── Model ─────────────────────────────────────────────────────────────────────

/// A running simulation of one [`ModelRule`] over its space.
///
/// Create via [`EpidemicBuilder`](crate::EpidemicBuilder) or
/// [`TravelBuilder`](crate::TravelBuilder), or directly with
/// [`Model::new`] for a custom rule.
pub struct Model<R: ModelRule> {
    rule:      R,
    space:     R::Space,
    scheduler: SyncScheduler<R::State>,
    config:    RunConfig,
    tick:      Tick,
    /// `None` while running.
    stopped:   Option<StopReason>,
}

impl<R: ModelRule> Model<R> {
    /// Assemble a model from explicit initial states.
    ///
    /// A population that is already settled (or a zero step budget) yields a
    /// model that is stopped before its first tick.
    pub fn new(rule: R, space: R::Space, initial: Vec<R::State>, config: RunConfig) -> Self {
        let scheduler = SyncScheduler::new(initial, config.seed);
        let mut model = Self { rule, space, scheduler, config, tick: Tick::ZERO, stopped: None };
        model.check_stop();
        tracing::debug!(
            agents = model.agent_count(),
            seed = model.config.seed,
            running = model.is_running(),
            "model built"
        );
        model
    }

    // ── Stepping ──────────────────────────────────────────────────────────

    /// Advance one tick.  A no-op once the model has stopped.
    ///
    /// # Errors
    ///
    /// Any rule failure aborts the tick: states, RNG streams and the tick
    /// counter are left at their pre-tick values and the model keeps
    /// running, so a retried step replays the same draws.
    pub fn step(&mut self) -> SimResult<()> {
        if self.stopped.is_some() {
            return Ok(());
        }

        if let Err(e) = self.scheduler.tick(&self.rule, &self.space, self.tick) {
            tracing::warn!(tick = %self.tick, error = %e, "tick aborted; no states committed");
            return Err(e);
        }
        self.tick = self.tick.next();
        tracing::debug!(tick = %self.tick, "tick committed");

        self.check_stop();
        Ok(())
    }

    /// Step until the model stops, reporting to `observer`.
    ///
    /// `on_start` sees the initial state, `on_tick_end` every committed
    /// tick, `on_sim_end` the final state.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<StopReason> {
        observer.on_start(&*self);
        loop {
            if let Some(reason) = self.stopped {
                observer.on_sim_end(&*self);
                return Ok(reason);
            }
            self.step()?;
            observer.on_tick_end(&*self);
        }
    }

    fn check_stop(&mut self) {
        let reason = if self.rule.is_settled(self.scheduler.states()) {
            StopReason::Settled
        } else if self.config.budget_exhausted(self.tick) {
            StopReason::BudgetExhausted
        } else {
            return;
        };
        tracing::info!(tick = %self.tick, %reason, "model stopped");
        self.stopped = Some(reason);
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// Number of committed ticks.
    #[inline]
    pub fn tick(&self) -> Tick {
        self.tick
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.stopped.is_none()
    }

    /// `Some` once the model has stopped.
    pub fn stop_reason(&self) -> Option<StopReason> {
        self.stopped
    }

    /// Committed states, indexed by `AgentId`.
    #[inline]
    pub fn states(&self) -> &[R::State] {
        self.scheduler.states()
    }

    pub fn state(&self, agent: AgentId) -> NsResult<&R::State> {
        self.states().get(agent.index()).ok_or(NsError::AgentNotFound(agent))
    }

    pub fn space(&self) -> &R::Space {
        &self.space
    }

    pub fn agent_count(&self) -> usize {
        self.scheduler.agent_count()
    }

    pub fn model_vars(&self) -> Vars {
        self.rule.model_vars(self.states())
    }

    pub fn agent_vars(&self, agent: AgentId) -> NsResult<Vars> {
        self.state(agent).map(|s| self.rule.agent_vars(s))
    }
}

impl<R: ModelRule<State = HealthState>> Model<R> {
    /// Current compartment tallies.
    pub fn counts(&self) -> StateCounts {
        StateCounts::tally(self.states())
    }
}

impl Model<RoutingPolicy> {
    /// Travellers that have not reached their destination.
    pub fn en_route(&self) -> usize {
        RoutingPolicy::en_route(self.states())
    }

    /// Travellers that have reached their destination.
    pub fn arrived(&self) -> impl Iterator<Item = &TravelAgent> {
        self.states().iter().filter(|a| a.has_arrived())
    }
}

impl<R: ModelRule> ModelView for Model<R> {
    fn tick(&self) -> Tick {
        self.tick
    }

    fn is_running(&self) -> bool {
        self.stopped.is_none()
    }

    fn agent_count(&self) -> usize {
        self.scheduler.agent_count()
    }

    fn model_vars(&self) -> Vars {
        self.rule.model_vars(self.states())
    }

    fn agent_vars(&self, agent: AgentId) -> NsResult<Vars> {
        self.state(agent).map(|s| self.rule.agent_vars(s))
    }
}
