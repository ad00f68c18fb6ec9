//! Integration tests for ns-output.

#[cfg(test)]
mod helpers {
    use ns_core::{NodeId, RunConfig};
    use ns_epidemic::SirRule;
    use ns_sim::{EpidemicBuilder, SirModel};
    use ns_spatial::GraphBuilder;

    /// SIR on a 3-node path with instant recovery and no transmission:
    /// settles after one tick.
    pub fn one_tick_sir() -> SirModel {
        let mut b = GraphBuilder::dense(3);
        b.add_edge(0, 1);
        b.add_edge(1, 2);
        EpidemicBuilder::new(SirRule::new(0.0, 1.0).unwrap(), b.build(), RunConfig::new(0))
            .outbreak([NodeId(1)])
            .build()
            .unwrap()
    }
}

// ── CSV writer ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use crate::csv::CsvWriter;
    use crate::row::{AgentSnapshotRow, TickSummaryRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn snap_row(agent_id: u32, tick: u64) -> AgentSnapshotRow {
        AgentSnapshotRow { tick, agent_id, vars: vec![("state", f64::from(agent_id % 3 + 1))] }
    }

    fn summary_row(tick: u64) -> TickSummaryRow {
        TickSummaryRow { tick, vars: vec![("susceptible", 10.0 - tick as f64), ("infected", tick as f64)] }
    }

    fn read(dir: &TempDir, file: &str) -> (Vec<String>, Vec<csv::StringRecord>) {
        let mut rdr = csv::Reader::from_path(dir.path().join(file)).unwrap();
        let headers = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        let rows = rdr.records().map(|r| r.unwrap()).collect();
        (headers, rows)
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("model_vars.csv").exists());
        assert!(dir.path().join("agent_vars.csv").exists());
    }

    #[test]
    fn header_follows_first_row() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_tick_summary(&summary_row(0)).unwrap();
        w.write_tick_summary(&summary_row(1)).unwrap();
        w.finish().unwrap();

        let (headers, rows) = read(&dir, "model_vars.csv");
        assert_eq!(headers, ["tick", "susceptible", "infected"]);
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[1][0], "1");
        assert_eq!(&rows[1][1], "9");
        assert_eq!(&rows[1][2], "1");
    }

    #[test]
    fn snapshot_rows_written_in_order() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_snapshots(&[snap_row(0, 5), snap_row(1, 5), snap_row(2, 5)]).unwrap();
        w.finish().unwrap();

        let (headers, rows) = read(&dir, "agent_vars.csv");
        assert_eq!(headers, ["tick", "agent_id", "state"]);
        assert_eq!(rows.len(), 3);
        assert_eq!(&rows[0][0], "5");
        assert_eq!(&rows[2][1], "2");
        assert_eq!(&rows[2][2], "3");
    }

    #[test]
    fn finish_is_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tmp();
        assert!(CsvWriter::new(&dir.path().join("nope")).is_err());
    }
}

// ── DataCollector ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod collector {
    use ns_core::AgentId;
    use ns_sim::StopReason;

    use crate::DataCollector;
    use super::helpers::one_tick_sir;

    #[test]
    fn records_initial_state_then_each_tick() {
        let mut model = one_tick_sir();
        let mut dc = DataCollector::new();
        assert_eq!(model.run(&mut dc).unwrap(), StopReason::Settled);

        let ticks: Vec<u64> = dc.model_rows().iter().map(|r| r.tick).collect();
        assert_eq!(ticks, vec![0, 1]);
        assert_eq!(dc.series("infected"), vec![1.0, 0.0]);
        assert_eq!(dc.series("resistant"), vec![0.0, 1.0]);
        assert_eq!(dc.series("susceptible"), vec![2.0, 2.0]);
        assert!(dc.series("no_such_var").is_empty());
    }

    #[test]
    fn agent_series_tracks_state_values() {
        let mut model = one_tick_sir();
        let mut dc = DataCollector::new();
        model.run(&mut dc).unwrap();

        assert_eq!(dc.agent_rows().len(), 6);
        assert_eq!(dc.agent_series(AgentId(1), "state"), vec![2.0, 3.0]);
        assert_eq!(dc.agent_series(AgentId(0), "state"), vec![1.0, 1.0]);
    }

    #[test]
    fn manual_collect_matches_observer() {
        let mut model = one_tick_sir();
        let mut manual = DataCollector::new();
        manual.collect(&model);
        model.step().unwrap();
        manual.collect(&model);

        let mut observed = DataCollector::new();
        one_tick_sir().run(&mut observed).unwrap();
        assert_eq!(manual.model_rows(), observed.model_rows());
        assert_eq!(manual.agent_rows(), observed.agent_rows());
    }
}

// ── SimOutputObserver ─────────────────────────────────────────────────────────

#[cfg(test)]
mod observer {
    use std::io;

    use crate::{
        AgentSnapshotRow, CsvWriter, OutputError, OutputResult, OutputWriter, SimOutputObserver,
        TickSummaryRow,
    };
    use super::helpers::one_tick_sir;

    /// Fails every summary write; counts calls.
    #[derive(Default)]
    struct Failing {
        summaries: usize,
        finished:  bool,
    }

    impl OutputWriter for Failing {
        fn write_snapshots(&mut self, _rows: &[AgentSnapshotRow]) -> OutputResult<()> {
            Ok(())
        }

        fn write_tick_summary(&mut self, _row: &TickSummaryRow) -> OutputResult<()> {
            self.summaries += 1;
            Err(io::Error::other(format!("write {}", self.summaries)).into())
        }

        fn finish(&mut self) -> OutputResult<()> {
            self.finished = true;
            Ok(())
        }
    }

    #[test]
    fn run_writes_csv_files() {
        let dir = tempfile::tempdir().unwrap();
        let mut obs = SimOutputObserver::new(CsvWriter::new(dir.path()).unwrap());
        one_tick_sir().run(&mut obs).unwrap();
        assert!(obs.take_error().is_none());
        drop(obs);

        let mut rdr = csv::Reader::from_path(dir.path().join("model_vars.csv")).unwrap();
        assert_eq!(rdr.records().count(), 2);
        let mut rdr = csv::Reader::from_path(dir.path().join("agent_vars.csv")).unwrap();
        assert_eq!(rdr.records().count(), 6);
    }

    #[test]
    fn keeps_first_error_and_still_finishes() {
        let mut obs = SimOutputObserver::new(Failing::default());
        one_tick_sir().run(&mut obs).unwrap();

        match obs.take_error() {
            Some(OutputError::Io(e)) => assert_eq!(e.to_string(), "write 1"),
            other => panic!("expected first I/O error, got {other:?}"),
        }
        assert!(obs.take_error().is_none());

        let writer = obs.into_writer();
        assert_eq!(writer.summaries, 2);
        assert!(writer.finished);
    }
}
