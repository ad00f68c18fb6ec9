//! epidemic — SI and SIR outbreaks on a small-world contact network.
//!
//! One agent lives on each node of a 100-node Watts–Strogatz graph.  Three
//! randomly chosen agents start infected; each run stops once the epidemic
//! settles (everyone infected for SI, no one infected for SIR).
//!
//! Per-tick compartment counts go to `output/epidemic/{si,sir}/`.
//! Set `RUST_LOG=debug` for model-level logging.

mod network;

use std::path::Path;
use std::time::Instant;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use ns_core::{RunConfig, SimRng};
use ns_epidemic::{HealthState, SiRule, SirRule};
use ns_output::{CsvWriter, SimOutputObserver};
use ns_rule::ModelRule;
use ns_sim::{EpidemicBuilder, Model};
use ns_spatial::GraphSpace;

use network::small_world;

// ── Constants ─────────────────────────────────────────────────────────────────

const NODE_COUNT:    usize = 100;
const LATTICE_K:     usize = 4;
const REWIRE_P:      f64   = 0.05;
const OUTBREAK_SIZE: usize = 3;
const SI_TRANS:      f64   = 0.025;
const IR_TRANS:      f64   = 0.05;
const SEED:          u64   = 42;
const MAX_STEPS:     u64   = 10_000;

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    println!("=== epidemic — SI / SIR on a small-world graph ===");
    println!(
        "Nodes: {NODE_COUNT}  |  k: {LATTICE_K}  |  rewiring: {REWIRE_P}  |  outbreak: {OUTBREAK_SIZE}  |  Seed: {SEED}"
    );
    println!();

    let graph = small_world(NODE_COUNT, LATTICE_K, REWIRE_P, &mut SimRng::new(SEED));
    println!("Contact network: {} nodes, {} edges", graph.node_count(), graph.edge_count());
    println!();

    let config = RunConfig::new(SEED).with_max_steps(MAX_STEPS);

    // ── SI ────────────────────────────────────────────────────────────────
    let si = EpidemicBuilder::new(SiRule::new(SI_TRANS)?, graph.clone(), config.clone())
        .outbreak_size(OUTBREAK_SIZE)
        .build()?;
    run_and_report("SI", si, Path::new("output/epidemic/si"))?;

    // ── SIR ───────────────────────────────────────────────────────────────
    let sir = EpidemicBuilder::new(SirRule::new(SI_TRANS, IR_TRANS)?, graph, config)
        .outbreak_size(OUTBREAK_SIZE)
        .build()?;
    run_and_report("SIR", sir, Path::new("output/epidemic/sir"))?;

    Ok(())
}

/// Run `model` to completion with CSV output under `dir` and print a summary.
fn run_and_report<R>(label: &str, mut model: Model<R>, dir: &Path) -> Result<()>
where
    R: ModelRule<State = HealthState, Space = GraphSpace>,
{
    let before = model.counts();

    std::fs::create_dir_all(dir)?;
    let mut obs = SimOutputObserver::new(CsvWriter::new(dir)?);

    let t0 = Instant::now();
    let reason = model.run(&mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.take_error() {
        eprintln!("output error: {e}");
    }

    let after = model.counts();
    println!("── {label} ──");
    println!("{:<12} {:>8} {:>8}", "", "start", "end");
    println!("{:<12} {:>8} {:>8}", "susceptible", before.susceptible, after.susceptible);
    println!("{:<12} {:>8} {:>8}", "infected", before.infected, after.infected);
    println!("{:<12} {:>8} {:>8}", "resistant", before.resistant, after.resistant);
    println!(
        "Stopped at {} ({reason}) in {:.3} s; output in {}",
        model.tick(),
        elapsed.as_secs_f64(),
        dir.display()
    );
    println!();
    Ok(())
}
