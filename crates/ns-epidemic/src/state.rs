//! Health compartments and population tallies.

use std::fmt;

/// An epidemic agent's compartment.
///
/// The discriminants are stable and are what data collection records as the
/// per-agent `state` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum HealthState {
    Susceptible = 1,
    Infected    = 2,
    Resistant   = 3,
}

impl HealthState {
    #[inline]
    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            HealthState::Susceptible => "susceptible",
            HealthState::Infected    => "infected",
            HealthState::Resistant   => "resistant",
        }
    }
}

impl fmt::Display for HealthState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ── StateCounts ───────────────────────────────────────────────────────────────

/// Number of agents in each compartment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StateCounts {
    pub susceptible: usize,
    pub infected:    usize,
    pub resistant:   usize,
}

impl StateCounts {
    /// Tally `states` in one pass.
    pub fn tally(states: &[HealthState]) -> Self {
        let mut counts = Self::default();
        for state in states {
            match state {
                HealthState::Susceptible => counts.susceptible += 1,
                HealthState::Infected    => counts.infected += 1,
                HealthState::Resistant   => counts.resistant += 1,
            }
        }
        counts
    }

    pub fn get(&self, state: HealthState) -> usize {
        match state {
            HealthState::Susceptible => self.susceptible,
            HealthState::Infected    => self.infected,
            HealthState::Resistant   => self.resistant,
        }
    }

    pub fn total(&self) -> usize {
        self.susceptible + self.infected + self.resistant
    }
}
