//! The `warren` binary: run a habitat simulation from a world file.
//!
//! Reads the initial world description, runs the configured number of
//! generations, and prints the final world in the same textual format.
//! `--test` switches to golden-file mode: the end state is compared
//! against an expected world file and the process exits 0/1 on
//! pass/fail.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use log::info;
use warren_engine::Simulation;
use warren_io::{compare_worlds, load_world, render_view, serialize_world};

#[derive(Parser)]
#[command(
    name = "warren",
    about = "Deterministic fox/rabbit habitat simulation",
    version
)]
struct Cli {
    /// Path to the initial world description.
    world: PathBuf,

    /// Compare the simulated end state against an expected world file;
    /// suppresses the normal report and exits 1 on mismatch.
    #[arg(long, value_name = "FILE")]
    test: Option<PathBuf>,

    /// Print the grid after every generation, including generation 0.
    #[arg(long)]
    verbose: bool,

    /// Suppress the final report.
    #[arg(long)]
    no_output: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();
    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

/// Run the simulation; `Ok(false)` means a golden-file mismatch.
fn run(cli: &Cli) -> anyhow::Result<bool> {
    let (config, grid) = load_world(&cli.world)
        .with_context(|| format!("failed to load world '{}'", cli.world.display()))?;
    let mut sim = Simulation::new(config, grid).context("invalid world configuration")?;

    if cli.verbose {
        println!("Generation 0");
        print!("{}", render_view(sim.grid()));
    }

    while !sim.is_finished() {
        let report = sim.step()?;
        if cli.verbose {
            println!("\nGeneration {}", report.generation);
            print!("{}", render_view(sim.grid()));
        }
    }
    info!(
        "run complete after {} generations: {:?}",
        sim.generation(),
        sim.grid().census(),
    );

    // Golden-file mode replaces the normal report with a pass/fail line.
    let suppress_report = cli.no_output || cli.test.is_some();
    if !suppress_report {
        print!("{}", serialize_world(&sim.report_config(), sim.grid()));
    }

    if let Some(test_path) = &cli.test {
        let (expected_config, expected_grid) = load_world(test_path)
            .with_context(|| format!("failed to load test world '{}'", test_path.display()))?;
        let config = sim.config();
        match compare_worlds(
            &sim.report_config(),
            sim.grid(),
            &expected_config,
            &expected_grid,
        ) {
            Ok(()) => {
                println!(
                    "Passed test for world size {}x{}",
                    config.n_rows, config.n_cols
                );
            }
            Err(mismatch) => {
                println!(
                    "Failed test for world size {}x{}",
                    config.n_rows, config.n_cols
                );
                eprintln!("{mismatch}");
                return Ok(false);
            }
        }
    }

    Ok(true)
}
