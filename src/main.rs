use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use robot_joust::{input, simulation::Simulation};

/// Two robots launch toward each other down a walled corridor, bouncing off
/// the top and bottom walls as they go. Reports which robot wins the joust,
/// if they collide at all.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Scenario file: board width and height in metres, then launch angle
    /// (degrees) and speed (m/s) for the left and the right robot.
    scenario: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let config = input::load(&args.scenario)
        .with_context(|| format!("failed to load scenario {}", args.scenario.display()))?;

    println!("{}", Simulation::new(&config).run());

    Ok(())
}
