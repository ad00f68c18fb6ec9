//! `ns-core` — foundational types for the `netsim` workspace.
//!
//! This crate is a dependency of every other `ns-*` crate.  It has no
//! `ns-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module    | Contents                                                   |
//! |-----------|------------------------------------------------------------|
//! | [`ids`]   | `AgentId`, `NodeId`, `LayerId`                             |
//! | [`time`]  | `Tick`, `RunConfig`                                        |
//! | [`rng`]   | `DrawSource`, `AgentRng`, `AgentRngs`, `SimRng`, `ScriptedDraws` |
//! | [`error`] | `NsError`, `NsResult`                                      |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to ids, `Tick`, `RunConfig`. |

pub mod error;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{NsError, NsResult};
pub use ids::{AgentId, LayerId, NodeId};
pub use rng::{AgentRng, AgentRngs, DrawSource, ScriptedDraws, SimRng};
pub use time::{RunConfig, Tick};
