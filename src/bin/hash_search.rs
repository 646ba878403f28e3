//! Searches for a printable string whose Java `String.hashCode` equals a
//! target.
//!
//! Usage: `hash_search <pop#> <breed#> <gen#> <hash>`
//!
//! Prints the best individual of every generation. Set `RUST_LOG=debug` for
//! engine diagnostics on stderr.

use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use u_evolve::evolve::{EvolveConfig, EvolveRunner, FirstParent, GenerationObserver, Phenotype};
use u_evolve::seed::{BestFitnessReporter, SeedGenotype};

/// Evolve a printable string whose Java hash matches a target
#[derive(Parser, Debug)]
#[command(name = "hash_search")]
#[command(version, about, long_about = None)]
struct Args {
    /// Population size (at least 3)
    #[arg(value_name = "pop#", value_parser = clap::value_parser!(u64).range(3..=i32::MAX as u64))]
    population_size: u64,

    /// Elites kept each generation (at least 2, below pop#)
    #[arg(value_name = "breed#", value_parser = clap::value_parser!(u64).range(2..=i32::MAX as u64))]
    breed_count: u64,

    /// Generation cap (at least 1)
    #[arg(value_name = "gen#", value_parser = clap::value_parser!(u64).range(1..=i32::MAX as u64))]
    generations: u64,

    /// Target hash
    #[arg(value_name = "hash", allow_negative_numbers = true)]
    target: i32,
}

impl Args {
    /// Cross-field checks clap cannot express: `breed# < pop#`.
    fn validate(&self) -> Result<(), String> {
        if self.breed_count >= self.population_size {
            return Err(format!(
                "breed# ({}) must be less than pop# ({})",
                self.breed_count, self.population_size
            ));
        }
        Ok(())
    }

    fn to_config(&self) -> Result<EvolveConfig, String> {
        let population_size = usize::try_from(self.population_size).map_err(|e| e.to_string())?;
        let breed_count = usize::try_from(self.breed_count).map_err(|e| e.to_string())?;
        Ok(EvolveConfig::new(population_size, breed_count).with_max_generations(self.generations))
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            eprintln!("{e}");
            eprintln!("Invalid input");
            return ExitCode::FAILURE;
        }
    };

    let config = match args.validate().and_then(|()| args.to_config()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            eprintln!("Invalid input");
            return ExitCode::FAILURE;
        }
    };

    let mut reporter = BestFitnessReporter::new();
    let mut print_best = |generation: u64, individuals: &[Phenotype<SeedGenotype>], target: i32| {
        reporter.on_generation(generation, individuals, target);
        if let Some(best) = reporter.latest() {
            println!("{best}");
        }
    };

    let result = EvolveRunner::run_with_cancel::<SeedGenotype, _, _>(
        &config,
        args.target,
        FirstParent,
        &mut print_best,
        None,
    );
    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
