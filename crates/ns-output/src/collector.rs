//! In-memory data collection.

use ns_core::AgentId;
use ns_sim::{ModelView, SimObserver};

use crate::row::{capture, AgentSnapshotRow, TickSummaryRow};

/// Records model and agent variables at the start of a run and after every
/// tick, so row 0 is always the initial state.
///
/// # Example
///
/// ```rust,ignore
/// let mut dc = DataCollector::new();
/// model.run(&mut dc)?;
/// let infected: Vec<f64> = dc.series("infected");
/// ```
#[derive(Debug, Default)]
pub struct DataCollector {
    model_rows: Vec<TickSummaryRow>,
    agent_rows: Vec<AgentSnapshotRow>,
}

impl DataCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the current state of `model`.
    pub fn collect(&mut self, model: &dyn ModelView) {
        let (summary, snapshots) = capture(model);
        self.model_rows.push(summary);
        self.agent_rows.extend(snapshots);
    }

    pub fn model_rows(&self) -> &[TickSummaryRow] {
        &self.model_rows
    }

    pub fn agent_rows(&self) -> &[AgentSnapshotRow] {
        &self.agent_rows
    }

    /// One value per recorded tick for the model variable `name`; empty if
    /// no such variable was recorded.
    pub fn series(&self, name: &str) -> Vec<f64> {
        self.model_rows.iter().filter_map(|r| r.get(name)).collect()
    }

    /// One value per recorded tick for `agent`'s variable `name`.
    pub fn agent_series(&self, agent: AgentId, name: &str) -> Vec<f64> {
        self.agent_rows
            .iter()
            .filter(|r| r.agent_id == agent.0)
            .filter_map(|r| r.get(name))
            .collect()
    }
}

impl SimObserver for DataCollector {
    fn on_start(&mut self, model: &dyn ModelView) {
        self.collect(model);
    }

    fn on_tick_end(&mut self, model: &dyn ModelView) {
        self.collect(model);
    }
}
