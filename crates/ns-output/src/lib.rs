//! `ns-output` — data collection and output writers for netsim models.
//!
//! | Type                  | Sink                                         |
//! |-----------------------|----------------------------------------------|
//! | [`DataCollector`]     | In memory; query with `series`/`agent_series` |
//! | [`CsvWriter`]         | `model_vars.csv`, `agent_vars.csv`           |
//!
//! Both record the initial state followed by one row per committed tick.
//! Writers implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `ns_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use ns_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! model.run(&mut obs)?;
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod collector;
pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use collector::DataCollector;
pub use crate::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{capture, AgentSnapshotRow, TickSummaryRow};
pub use writer::OutputWriter;
