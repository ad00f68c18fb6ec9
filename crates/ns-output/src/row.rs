//! Plain data row types recorded by collectors and written by backends.

use ns_core::AgentId;
use ns_rule::Vars;
use ns_sim::ModelView;

/// Model-level variables at one tick.
#[derive(Debug, Clone, PartialEq)]
pub struct TickSummaryRow {
    pub tick: u64,
    pub vars: Vars,
}

/// One agent's variables at one tick.
#[derive(Debug, Clone, PartialEq)]
pub struct AgentSnapshotRow {
    pub tick:     u64,
    pub agent_id: u32,
    pub vars:     Vars,
}

impl TickSummaryRow {
    /// Value of the variable called `name`, if recorded.
    pub fn get(&self, name: &str) -> Option<f64> {
        lookup(&self.vars, name)
    }
}

impl AgentSnapshotRow {
    /// Value of the variable called `name`, if recorded.
    pub fn get(&self, name: &str) -> Option<f64> {
        lookup(&self.vars, name)
    }
}

fn lookup(vars: &Vars, name: &str) -> Option<f64> {
    vars.iter().find(|(n, _)| *n == name).map(|&(_, v)| v)
}

/// Capture the current tick of `model` as one summary row plus one snapshot
/// row per agent.
pub fn capture(model: &dyn ModelView) -> (TickSummaryRow, Vec<AgentSnapshotRow>) {
    let tick = model.tick().0;
    let summary = TickSummaryRow { tick, vars: model.model_vars() };
    let snapshots = (0..model.agent_count())
        .map(AgentId::from_index)
        .filter_map(|agent| {
            let vars = model.agent_vars(agent).ok()?;
            Some(AgentSnapshotRow { tick, agent_id: agent.0, vars })
        })
        .collect();
    (summary, snapshots)
}
