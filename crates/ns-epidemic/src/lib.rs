//! `ns-epidemic` — compartmental disease spread on a graph.
//!
//! Agent `i` lives on node `i` of a [`GraphSpace`](ns_spatial::GraphSpace)
//! and never moves; its whole record is a [`HealthState`].  Infection can
//! only come from a neighbour that was infected at the start of the tick.
//!
//! | Rule        | Transitions                                | Settled when      |
//! |-------------|--------------------------------------------|-------------------|
//! | [`SiRule`]  | S → I                                      | no one susceptible |
//! | [`SirRule`] | S → I → R                                  | no one infected    |

pub mod rules;
pub mod state;

#[cfg(test)]
mod tests;

pub use rules::{Compartmental, SiRule, SirRule};
pub use state::{HealthState, StateCounts};
