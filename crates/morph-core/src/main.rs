//! MorphLink simulation driver
//!
//! Generates a world, seeds it with agents (optionally one built from a
//! designer DNA export), and runs the tick loop, writing events, snapshots
//! and a run summary to an output directory.

use clap::Parser;
use std::fs;
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use morph_core::config::DEFAULT_CONFIG_PATH;
use morph_core::events::EventLogger;
use morph_core::output::{
    generate_snapshot, write_current_state, write_snapshot_to_dir, write_stats, SnapshotGenerator,
    StatsCollector,
};
use morph_core::personality::{build_prompt, specimen_name};
use morph_core::{Dna, SimConfig, SimError, SimRng, Simulation};

/// Command line arguments for the simulation
#[derive(Parser, Debug)]
#[command(name = "morphlink")]
#[command(about = "Run MorphLink creatures on a grid world")]
struct Args {
    /// TOML tuning file; defaults are used when it is missing
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Random seed for reproducibility (overrides the config)
    #[arg(long)]
    seed: Option<u64>,

    /// Number of ticks to simulate (overrides the config)
    #[arg(long)]
    ticks: Option<u64>,

    /// Interval between world snapshots in ticks (overrides the config)
    #[arg(long)]
    snapshot_interval: Option<u64>,

    /// Exported designer DNA to add as an extra agent
    #[arg(long)]
    dna: Option<PathBuf>,

    /// Print the personality report prompt for the designer DNA and exit
    #[arg(long, requires = "dna")]
    print_prompt: bool,

    /// Directory for events, snapshots and stats
    #[arg(long, default_value = "output")]
    output: PathBuf,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    if let Err(e) = run(args) {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), SimError> {
    let mut config = SimConfig::load_or_default(&args.config);
    if let Some(seed) = args.seed {
        config.run.seed = seed;
    }
    if let Some(ticks) = args.ticks {
        config.run.ticks = ticks;
    }
    if let Some(interval) = args.snapshot_interval {
        config.run.snapshot_interval = interval;
    }

    let designer_dna = match &args.dna {
        Some(path) => Some(Dna::from_json(&fs::read_to_string(path)?)?),
        None => None,
    };

    let mut rng = SimRng::seeded(config.run.seed);

    if args.print_prompt {
        if let Some(dna) = &designer_dna {
            let specimen = specimen_name(&mut rng.0);
            let date = chrono::Local::now().format("%B %d, %Y").to_string();
            println!("{}", build_prompt(dna, &specimen, &date)?);
        }
        return Ok(());
    }

    info!(
        seed = config.run.seed,
        ticks = config.run.ticks,
        width = config.world.width,
        height = config.world.height,
        "starting simulation"
    );

    let mut sim = Simulation::from_config(&config, &mut rng.0)?;
    if let Some(dna) = &designer_dna {
        sim.add_designer_agent(dna, &mut rng.0);
    }
    info!(
        agents = sim.agents.len(),
        food = sim.grid.count(morph_core::CellType::Food),
        "world ready"
    );

    fs::create_dir_all(&args.output)?;
    let mut logger = EventLogger::new(args.output.join("events.jsonl"))?;
    let mut snapshots = SnapshotGenerator::new(config.run.snapshot_interval);
    let mut stats = StatsCollector::new();

    let initial = generate_snapshot(&mut snapshots, &sim.grid, &sim.agents, 0, "simulation_start");
    write_snapshot_to_dir(&initial, &args.output)?;
    write_current_state(&initial, &args.output)?;
    snapshots.mark_snapshot(0);

    sim.run(config.run.ticks, |sim, report| {
        logger.log_report(report)?;
        stats.record_tick(report);

        if report.tick % 10 == 0 {
            info!(
                tick = report.tick,
                events = report.events.len(),
                moves = report.count("moved"),
                meals = report.count("ate"),
                depleted = sim.depleted_agents().count(),
                "progress"
            );
        }

        if snapshots.should_snapshot(report.tick) {
            let snapshot =
                generate_snapshot(&mut snapshots, &sim.grid, &sim.agents, report.tick, "periodic");
            write_snapshot_to_dir(&snapshot, &args.output)?;
            write_current_state(&snapshot, &args.output)?;
            snapshots.mark_snapshot(report.tick);
        }
        Ok(())
    })?;
    logger.flush()?;

    let tick = sim.current_tick();
    if snapshots.last_snapshot_tick() != tick {
        let last = generate_snapshot(&mut snapshots, &sim.grid, &sim.agents, tick, "simulation_end");
        write_snapshot_to_dir(&last, &args.output)?;
        write_current_state(&last, &args.output)?;
    }

    let summary = stats.generate_stats(&sim.agents);
    write_stats(&summary, args.output.join("stats.json"))?;

    info!(
        ticks = tick,
        events = logger.event_count(),
        snapshots = snapshots.snapshot_count(),
        "simulation complete"
    );
    for agent in &summary.agents {
        info!(
            agent = agent.id,
            x = agent.position.0,
            y = agent.position.1,
            energy = agent.energy,
            health = agent.health,
            depleted = agent.depleted,
            "final state"
        );
    }
    Ok(())
}
