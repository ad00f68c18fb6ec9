//! Deterministic random streams.
//!
//! # Determinism strategy
//!
//! Each agent gets its own independent `SmallRng` seeded by:
//!
//!   seed = global_seed XOR (agent_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive agent IDs uniformly across the seed space.
//! Agents never share RNG state, so the compute phase gives the same result
//! whether agents are visited in order, in reverse, or on a thread pool.
//!
//! Model construction (outbreak sampling, traveller placement) draws from a
//! separate [`SimRng`] seeded directly from the global seed.
//!
//! # Injection
//!
//! Transition rules consume randomness only through [`DrawSource`], so
//! tests can substitute [`ScriptedDraws`] and pin the exact sequence of
//! uniform values a rule sees.

use std::collections::VecDeque;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::AgentId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── DrawSource ────────────────────────────────────────────────────────────────

/// A stream of uniform random values in `[0, 1)`.
pub trait DrawSource {
    /// Next uniform value in `[0, 1)`.
    fn uniform(&mut self) -> f64;
}

// ── AgentRng ──────────────────────────────────────────────────────────────────

/// Per-agent deterministic RNG.
///
/// Never shared: in a parallel compute phase each Rayon worker holds
/// exclusive `&mut` access to the streams of the agents it computes.
/// `Clone` lets the scheduler draw from a copy and keep it only if the tick
/// commits.
#[derive(Clone)]
pub struct AgentRng(SmallRng);

impl AgentRng {
    /// Seed deterministically from the run's global seed and an agent ID.
    pub fn new(global_seed: u64, agent: AgentId) -> Self {
        let seed = global_seed ^ (agent.0 as u64).wrapping_mul(MIXING_CONSTANT);
        AgentRng(SmallRng::seed_from_u64(seed))
    }
}

impl DrawSource for AgentRng {
    #[inline]
    fn uniform(&mut self) -> f64 {
        self.0.r#gen::<f64>()
    }
}

// ── AgentRngs ─────────────────────────────────────────────────────────────────

/// One [`AgentRng`] per agent, indexed by `AgentId`.
///
/// Kept apart from the agent states so the compute phase can hold
/// `&mut AgentRngs` and `&[State]` at the same time.
#[derive(Clone)]
pub struct AgentRngs {
    pub inner: Vec<AgentRng>,
}

impl AgentRngs {
    /// Allocate and seed `count` per-agent RNGs from `global_seed`.
    pub fn new(count: usize, global_seed: u64) -> Self {
        let inner = (0..count)
            .map(|i| AgentRng::new(global_seed, AgentId::from_index(i)))
            .collect();
        Self { inner }
    }

    /// Mutable reference to one agent's RNG.
    #[inline]
    pub fn get_mut(&mut self, agent: AgentId) -> &mut AgentRng {
        &mut self.inner[agent.index()]
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Simulation-level RNG for construction-time sampling.
///
/// Used only in single-threaded contexts (model builders).
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive a child `SimRng` with a different seed offset, so construction
    /// draws never replay agent 0's stream (which shares the global seed).
    pub fn child(&mut self, offset: u64) -> SimRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        SimRng(SmallRng::seed_from_u64(child_seed))
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `k` distinct indices from `0..n`, sampled without replacement, in
    /// sampling order.
    ///
    /// Returns `None` if `k > n`.
    pub fn sample_distinct(&mut self, n: usize, k: usize) -> Option<Vec<usize>> {
        if k > n {
            return None;
        }
        Some(rand::seq::index::sample(&mut self.0, n, k).into_vec())
    }
}

impl DrawSource for SimRng {
    #[inline]
    fn uniform(&mut self) -> f64 {
        self.0.r#gen::<f64>()
    }
}

// ── ScriptedDraws ─────────────────────────────────────────────────────────────

/// A [`DrawSource`] that replays a fixed sequence of values.
///
/// Used by tests to pin which draws a rule consumes.  [`consumed`] reports
/// how many values have been taken so far.
///
/// [`consumed`]: ScriptedDraws::consumed
#[derive(Debug, Clone, Default)]
pub struct ScriptedDraws {
    queue:    VecDeque<f64>,
    consumed: usize,
}

impl ScriptedDraws {
    pub fn new(values: impl IntoIterator<Item = f64>) -> Self {
        Self { queue: values.into_iter().collect(), consumed: 0 }
    }

    /// Number of values handed out so far.
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    /// Number of values not yet handed out.
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl DrawSource for ScriptedDraws {
    /// # Panics
    /// Panics when the script is exhausted: a test that under-provisions
    /// draws has miscounted what the rule consumes.
    fn uniform(&mut self) -> f64 {
        match self.queue.pop_front() {
            Some(v) => {
                self.consumed += 1;
                v
            }
            None => panic!("scripted draw source exhausted after {} draws", self.consumed),
        }
    }
}
