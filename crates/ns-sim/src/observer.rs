//! Simulation observer trait for progress reporting and data collection.

use ns_core::{AgentId, NsResult, Tick};
use ns_rule::Vars;

/// Read-only, object-safe view of a model handed to observers.
///
/// Lets data collectors record any model without knowing its rule or state
/// types.
pub trait ModelView {
    /// Number of committed ticks.
    fn tick(&self) -> Tick;

    fn is_running(&self) -> bool;

    fn agent_count(&self) -> usize;

    /// Model-level variables for the current state.
    fn model_vars(&self) -> Vars;

    /// Agent-level variables for the current state of `agent`.
    fn agent_vars(&self, agent: AgentId) -> NsResult<Vars>;
}

/// Callbacks invoked by [`Model::run`][crate::Model::run].
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, model: &dyn ModelView) {
///         if model.tick().0 % self.interval == 0 {
///             println!("{}: {:?}", model.tick(), model.model_vars());
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called once before the first tick, with the initial state.
    fn on_start(&mut self, _model: &dyn ModelView) {}

    /// Called after every committed tick.
    fn on_tick_end(&mut self, _model: &dyn ModelView) {}

    /// Called once after the model stops.
    fn on_sim_end(&mut self, _model: &dyn ModelView) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
