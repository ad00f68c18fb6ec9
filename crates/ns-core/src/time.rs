//! Simulation time and run configuration.
//!
//! Time is a monotonically increasing `Tick` counter owned by the model.  One
//! tick is one compute/commit cycle of the scheduler; there is no wall-clock
//! mapping.  Seasonal routing measures time in the agent's own travel-time
//! units instead, so nothing else in the workspace interprets a tick.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// The following tick.
    #[inline]
    pub fn next(self) -> Tick {
        Tick(self.0 + 1)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── RunConfig ─────────────────────────────────────────────────────────────────

/// Parameters shared by every model run.
///
/// Model-specific parameters (transmission probabilities, season length,
/// population sizes) live on the rule constructors and model builders.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunConfig {
    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Step budget.  The model stops once `max_steps` ticks have been
    /// committed.  `None` runs until the dynamics settle.
    pub max_steps: Option<u64>,
}

impl RunConfig {
    pub fn new(seed: u64) -> Self {
        Self { seed, max_steps: None }
    }

    /// Builder-style setter for the step budget.
    pub fn with_max_steps(mut self, max_steps: u64) -> Self {
        self.max_steps = Some(max_steps);
        self
    }

    /// `true` once `tick` has used up the step budget.
    #[inline]
    pub fn budget_exhausted(&self, tick: Tick) -> bool {
        self.max_steps.is_some_and(|max| tick.0 >= max)
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self::new(0)
    }
}
