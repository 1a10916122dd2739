//! tsp-ga: command-line driver for the genetic TSP solver.
//!
//! Seeds a problem instance, evolves a population and prints the initial
//! length, the final length and the best tour as `[x, y]` points.

use clap::Parser;
use tracing::Level;
use tsp_ga::ga::{GaConfig, GaRunner};
use tsp_ga::random::rng_from_seed;
use tsp_ga::tsp::CityRegistry;
use tsp_ga::TspError;

#[derive(Parser, Debug)]
#[command(name = "tsp-ga")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Number of tours per generation
    #[arg(short, long, default_value_t = 50)]
    population_size: usize,

    /// Number of generations to evolve
    #[arg(short, long, default_value_t = 100)]
    generations: usize,

    /// Per-position swap probability
    #[arg(short, long, default_value_t = 0.015)]
    mutation_rate: f64,

    /// Tours sampled per tournament
    #[arg(short, long, default_value_t = 5)]
    tournament_size: usize,

    /// Do not carry the fittest tour into the next generation
    #[arg(long)]
    no_elitism: bool,

    /// Stop after this many generations without improvement (0 disables)
    #[arg(long, default_value_t = 0)]
    stagnation_limit: usize,

    /// Random seed; omit for a different run every time
    #[arg(short, long)]
    seed: Option<u64>,

    /// Solve a random instance of this many cities instead of the built-in one
    #[arg(long, value_name = "N")]
    random_cities: Option<usize>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn config(&self) -> GaConfig {
        let config = GaConfig::default()
            .with_population_size(self.population_size)
            .with_max_generations(self.generations)
            .with_mutation_rate(self.mutation_rate)
            .with_tournament_size(self.tournament_size)
            .with_elitism(!self.no_elitism)
            .with_stagnation_limit(self.stagnation_limit);
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }

    fn registry(&self) -> CityRegistry {
        match self.random_cities {
            Some(count) => {
                // Derive the instance from the run seed so `--seed` pins both.
                let mut rng = rng_from_seed(self.seed.map(|s| s.wrapping_add(1)));
                CityRegistry::random(count, &mut rng)
            }
            None => CityRegistry::classic(),
        }
    }

    fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::INFO,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

fn main() -> Result<(), TspError> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .with_writer(std::io::stderr)
        .init();

    let registry = cli.registry();
    let result = GaRunner::run(&registry, &cli.config())?;

    println!("Initial distance: {}", result.initial_distance);
    println!("Final distance: {}", result.best_distance);
    println!();
    println!("Solution:");
    println!("{}", result.best);
    Ok(())
}
