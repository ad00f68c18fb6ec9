//! seasonal — travellers routing across a network whose links change with
//! the season.
//!
//! Three layers (one per season) share 100 nodes.  Each layer is its own
//! weighted Watts–Strogatz graph, so a route that is short in one season may
//! be long or missing in the next.  Every traveller starts at a random node
//! and time, heads for a random destination, and at each tick steps to a
//! neighbour chosen with probability proportional to how much closer it gets.
//!
//! The en-route count per tick is collected in memory and summarised at the
//! end.  Set `RUST_LOG=debug` (or `trace`) for routing detail.

mod network;

use std::time::Instant;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use ns_core::{AgentId, RunConfig, SimRng};
use ns_output::DataCollector;
use ns_sim::TravelBuilder;
use ns_transport::RoutingPolicy;

use network::seasonal_layers;

// ── Constants ─────────────────────────────────────────────────────────────────

const NODE_COUNT:    usize = 100;
const LAYER_COUNT:   usize = 3;
const LATTICE_K:     usize = 2;
const REWIRE_P:      f64   = 0.05;
const MAX_WEIGHT:    u64   = 30;    // edge weights drawn from 1..MAX_WEIGHT
const AGENT_COUNT:   usize = 100;
const SEASON_LENGTH: u64   = 91;    // travel-time units per season
const SEED:          u64   = 42;
const MAX_STEPS:     u64   = 1_000;

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    println!("=== seasonal — multilayer transport routing ===");
    println!(
        "Nodes: {NODE_COUNT}  |  Seasons: {LAYER_COUNT} x {SEASON_LENGTH} time units  |  Travellers: {AGENT_COUNT}  |  Seed: {SEED}"
    );
    println!();

    let t0 = Instant::now();
    let space = seasonal_layers(
        LAYER_COUNT,
        NODE_COUNT,
        LATTICE_K,
        REWIRE_P,
        MAX_WEIGHT,
        &mut SimRng::new(SEED),
    )?;
    println!("Distance tables precomputed in {:.3} s", t0.elapsed().as_secs_f64());

    let config = RunConfig::new(SEED).with_max_steps(MAX_STEPS);
    let mut model = TravelBuilder::new(RoutingPolicy::new(SEASON_LENGTH)?, space, config)
        .agents(AGENT_COUNT)
        .build()?;

    let mut collector = DataCollector::new();
    let t0 = Instant::now();
    let reason = model.run(&mut collector)?;
    let elapsed = t0.elapsed();

    println!(
        "Simulation stopped at {} ({reason}) in {:.3} s",
        model.tick(),
        elapsed.as_secs_f64()
    );
    println!();

    // ── Summary ───────────────────────────────────────────────────────────
    let arrived: Vec<u64> = model.arrived().map(|a| a.elapsed()).collect();
    println!("Arrived:  {} / {AGENT_COUNT}", arrived.len());
    println!("En route: {}", model.en_route());
    if !arrived.is_empty() {
        let mean = arrived.iter().sum::<u64>() as f64 / arrived.len() as f64;
        let longest = arrived.iter().max().copied().unwrap_or(0);
        println!("Mean travel time: {mean:.1}  |  longest: {longest}  (edge-weight units)");
    }
    println!();

    // En-route count every 100 ticks.
    let en_route = collector.series("enroute");
    println!("{:<8} {:>9}", "Tick", "En route");
    println!("{}", "-".repeat(18));
    for (t, n) in en_route.iter().enumerate().step_by(100) {
        println!("{t:<8} {n:>9}");
    }

    // First few travellers' trajectories.
    println!();
    println!("{:<10} {:<10} {:<8} {:<10}", "Agent", "Start", "Dest", "Elapsed");
    println!("{}", "-".repeat(40));
    for (i, agent) in model.states().iter().enumerate().take(5) {
        let start = collector
            .agent_series(AgentId::from_index(i), "position")
            .first()
            .copied()
            .unwrap_or(f64::NAN);
        println!(
            "{:<10} {:<10} {:<8} {:<10}",
            i,
            start,
            agent.destination.0,
            if agent.has_arrived() { agent.elapsed().to_string() } else { "-".to_string() }
        );
    }

    Ok(())
}
