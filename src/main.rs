use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use elevator_sim::simulation::{SimWorld, NUM_FLOORS};

#[derive(Parser)]
#[command(name = "elevator_sim")]
#[command(about = "Multi-car elevator dispatch simulation with terminal UI")]
struct Cli {
    /// Run without the interactive terminal UI
    #[arg(long)]
    headless: bool,

    /// Number of simulation ticks to run in headless mode
    #[arg(long, default_value = "300")]
    ticks: u32,

    /// RNG seed for reproducible headless traffic
    #[arg(long)]
    seed: Option<u64>,

    /// Probability per tick of a new random call in headless mode
    #[arg(long, default_value = "0.3")]
    call_rate: f64,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if cli.headless {
        run_headless(cli.ticks, cli.seed, cli.call_rate)
    } else {
        #[cfg(feature = "tui")]
        {
            elevator_sim::tui::run()
        }
        #[cfg(not(feature = "tui"))]
        {
            eprintln!("Error: tui feature is not enabled. Rebuild with --features tui, or pass --headless");
            std::process::exit(1);
        }
    }
}

/// Run the simulation in headless mode (no terminal UI), feeding it
/// randomly generated calls and printing periodic summaries.
fn run_headless(ticks: u32, seed: Option<u64>, call_rate: f64) -> anyhow::Result<()> {
    println!("Running elevator simulation in headless mode...");
    println!("Ticks: {}, call rate: {}", ticks, call_rate);
    println!();

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };

    let mut world = SimWorld::new();
    let mut calls_admitted = 0u32;

    for tick in 1..=ticks {
        if rng.random_bool(call_rate) {
            let origin = rng.random_range(1..=NUM_FLOORS);
            let dest = rng.random_range(1..=NUM_FLOORS);
            let passengers = rng.random_range(1..=8);
            if world.admit_request(origin, dest, passengers) {
                calls_admitted += 1;
            }
        }

        world.tick()?;

        if tick % 50 == 0 {
            println!("--- After tick {} ---", tick);
            world.print_summary();
            println!();
        }
    }

    println!("=== Final State ===");
    world.print_summary();
    println!();
    println!("Calls admitted: {}", calls_admitted);
    println!("Calls still queued: {}", world.queue.len());
    Ok(())
}
