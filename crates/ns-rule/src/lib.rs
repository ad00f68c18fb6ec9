//! `ns-rule` — agent transition rules and the context they read.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                          |
//! |-------------|-------------------------------------------------------------------|
//! | [`context`] | `TickContext<'a, S, Sp>` — read-only tick snapshot shared by all agents |
//! | [`model`]   | `AgentRule` and `ModelRule` traits, `Vars`                        |
//! | [`error`]   | `RuleError`, `RuleResult<T>`                                      |
//!
//! # Design notes
//!
//! The synchronous tick loop in ns-sim works as follows:
//!
//! 1. **Compute phase** (optionally parallel): for every agent call
//!    `AgentRule::compute`.  All reads go through `&TickContext`, which sees
//!    only the states committed at the end of the previous tick; the result
//!    is the agent's next state.
//!
//! 2. **Commit phase** (sequential): the staged next states replace the
//!    committed ones in a single swap.
//!
//! Because a rule never sees a state staged in the same tick, the outcome
//! does not depend on the order agents are visited in.  Rules only need to
//! be `Send + Sync`; they hold parameters, never per-agent state.

pub mod context;
pub mod error;
pub mod model;

#[cfg(test)]
mod tests;

pub use context::TickContext;
pub use error::{RuleError, RuleResult};
pub use model::{AgentRule, ModelRule, Vars};
