//! `ns-sim` — synchronous tick loop and model runner for the netsim workspace.
//!
//! # Two-phase tick loop
//!
//! ```text
//! while running:
//!   ① Compute — for every agent in ascending AgentId order, call
//!               AgentRule::compute against the committed snapshot and the
//!               agent's own RNG; write the result into the staged buffer
//!               (parallel with the `parallel` feature).
//!   ② Commit  — only if every compute succeeded: swap staged ↔ committed.
//!   ③ Stop?   — settled (per the rule) or step budget exhausted.
//! ```
//!
//! A failed compute aborts the tick: nothing is committed and the tick
//! counter does not advance.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs the compute phase on Rayon's thread pool.         |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use ns_core::RunConfig;
//! use ns_epidemic::SiRule;
//! use ns_sim::{EpidemicBuilder, NoopObserver};
//!
//! let mut model = EpidemicBuilder::new(SiRule::new(0.025)?, graph, RunConfig::new(42))
//!     .outbreak_size(3)
//!     .build()?;
//! let reason = model.run(&mut NoopObserver)?;
//! println!("stopped at {} ({reason}): {:?}", model.tick(), model.counts());
//! ```

pub mod builder;
pub mod error;
pub mod model;
pub mod observer;
pub mod scheduler;


pub use builder::{EpidemicBuilder, TravelBuilder};
pub use error::{SimError, SimResult};
pub use model::{Model, SiModel, SirModel, StopReason, TravelModel};
pub use observer::{ModelView, NoopObserver, SimObserver};
pub use scheduler::SyncScheduler;
