use anyhow::{Context, Result};
use log::info;

use seeksim::{DiskParams, PolicyKind, RunSummary, SimOptions, Simulation, SyntheticWorkload};

// Experiment driver: for each round count, run every policy against the same
// seeded workload and print one summary line per run. SEEKSIM_ROUNDS
// ("10,20,30") and SEEKSIM_SEED override the defaults.
fn main() -> Result<()> {
    env_logger::init();

    let params = DiskParams::default();
    let rounds_grid = rounds_grid()?;
    let seed = seed()?;

    for &rounds in &rounds_grid {
        for policy in PolicyKind::ALL {
            let options = SimOptions::default().rounds(rounds).seed(seed);
            let summary = run_once(params, policy, options)?;
            println!("{}", summary);
        }
    }

    Ok(())
}

fn run_once(params: DiskParams, policy: PolicyKind, options: SimOptions) -> Result<RunSummary> {
    info!(
        "running {} for {} rounds (seed {})",
        policy.as_str(),
        options.rounds,
        options.seed
    );

    let mut workload = SyntheticWorkload::new(&params, &options)?;
    let simulation = Simulation::new(params, policy.build(&params), options.issuers);
    let records = simulation.run(&mut workload, options.rounds);

    Ok(RunSummary::from_records(
        policy.as_str(),
        options.rounds,
        &records,
    ))
}

fn rounds_grid() -> Result<Vec<u32>> {
    match std::env::var("SEEKSIM_ROUNDS") {
        Ok(raw) => raw
            .split(',')
            .map(|part| {
                part.trim()
                    .parse::<u32>()
                    .with_context(|| format!("bad round count {:?} in SEEKSIM_ROUNDS", part))
            })
            .collect(),
        Err(_) => Ok(vec![10, 20, 30, 40, 50]),
    }
}

fn seed() -> Result<u64> {
    match std::env::var("SEEKSIM_SEED") {
        Ok(raw) => raw
            .trim()
            .parse::<u64>()
            .with_context(|| format!("bad seed {:?} in SEEKSIM_SEED", raw)),
        Err(_) => Ok(0),
    }
}
