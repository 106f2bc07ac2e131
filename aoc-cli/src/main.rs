//! AOC CLI - Command-line interface for running Advent of Code solvers

mod cli;
mod config;
mod error;
mod executor;
mod inputs;
mod output;

// Import aoc-solutions to link the solver plugins
use aoc_solutions as _;

use aoc_solver::SolverRegistryBuilder;
use clap::Parser;
use cli::Args;
use config::Config;
use error::CliError;
use executor::Executor;
use output::OutputFormatter;

fn main() {
    if let Err(e) = Config::from_args(Args::parse()).and_then(run) {
        eprintln!("FATAL ERROR: {:?}", anyhow::Error::from(e));
        std::process::exit(1);
    }
}

/// Default log filter; RUST_LOG still wins
fn log_level(debug: bool) -> &'static str {
    if debug { "debug" } else { "warn" }
}

fn init_logging(debug: bool) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level(debug)))
        .format_timestamp(None)
        .init();
}

fn run(config: Config) -> Result<(), CliError> {
    init_logging(config.debug);
    log::debug!("Resolved config: {:?}", config);

    let registry = build_registry(&config.tags)?;
    let executor = Executor::new(registry, &config);

    let work_items = executor.collect_work_items();
    if work_items.is_empty() {
        println!("No solvers found matching the specified filters.");
        return Ok(());
    }

    // Every input must be present before anything runs
    let missing = executor.missing_inputs(&work_items);
    if let Some((year, day, path)) = missing.first().cloned() {
        eprintln!("Missing {} input file(s):", missing.len());
        for (year, day, path) in &missing {
            eprintln!("  - {}/day{:02} ({})", year, day, path.display());
        }
        return Err(CliError::MissingInput { year, day, path });
    }

    let formatter = OutputFormatter::new(config.quiet);
    let mut results = Vec::new();
    executor.execute(&work_items, |solved| {
        for result in solved {
            formatter.print_result(result);
        }
        results.extend_from_slice(solved);
    })?;

    formatter.print_summary(&results);
    Ok(())
}

/// Build registry with tag filtering
fn build_registry(tags: &[String]) -> Result<aoc_solver::SolverRegistry, CliError> {
    let builder = SolverRegistryBuilder::new();

    let builder = if tags.is_empty() {
        builder.register_all_plugins()?
    } else {
        builder.register_solver_plugins(|plugin| {
            tags.iter().all(|tag| plugin.tags.contains(&tag.as_str()))
        })?
    };

    Ok(builder.build())
}
