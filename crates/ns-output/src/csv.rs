//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `model_vars.csv` — `tick` followed by one column per model variable
//! - `agent_vars.csv` — `tick`, `agent_id`, then one column per agent variable
//!
//! Variable names are only known once the first row arrives, so each
//! header is written lazily from the first row of its file.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{AgentSnapshotRow, OutputResult, TickSummaryRow};

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    model:         Writer<File>,
    agents:        Writer<File>,
    model_header:  bool,
    agents_header: bool,
    finished:      bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir`.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let model  = Writer::from_path(dir.join("model_vars.csv"))?;
        let agents = Writer::from_path(dir.join("agent_vars.csv"))?;
        tracing::debug!(dir = %dir.display(), "csv output opened");
        Ok(Self {
            model,
            agents,
            model_header:  false,
            agents_header: false,
            finished:      false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_snapshots(&mut self, rows: &[AgentSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            if !self.agents_header {
                let mut header = vec!["tick", "agent_id"];
                header.extend(row.vars.iter().map(|&(name, _)| name));
                self.agents.write_record(&header)?;
                self.agents_header = true;
            }
            let mut record = vec![row.tick.to_string(), row.agent_id.to_string()];
            record.extend(row.vars.iter().map(|(_, v)| v.to_string()));
            self.agents.write_record(&record)?;
        }
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        if !self.model_header {
            let mut header = vec!["tick"];
            header.extend(row.vars.iter().map(|&(name, _)| name));
            self.model.write_record(&header)?;
            self.model_header = true;
        }
        let mut record = vec![row.tick.to_string()];
        record.extend(row.vars.iter().map(|(_, v)| v.to_string()));
        self.model.write_record(&record)?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.model.flush()?;
        self.agents.flush()?;
        Ok(())
    }
}
