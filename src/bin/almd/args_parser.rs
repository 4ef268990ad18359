use std::path::PathBuf;

use clap::Parser;

/// Heat capacity of Lennard-Jones aluminium from energy fluctuations
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Args {
    /// Target temperatures [°C]; one experiment per value
    #[arg(short, long, value_delimiter = ',', default_values_t = vec![500.0, 700.0])]
    pub temperatures: Vec<f64>,

    /// Unit cells per box edge
    #[arg(short = 'n', long, default_value_t = 4)]
    pub unit_cells: usize,

    /// Timestep [ps]
    #[arg(long, default_value_t = 0.005)]
    pub timestep: f64,

    /// Length of each equilibration phase [ps]
    #[arg(long, default_value_t = 90.0)]
    pub equilibration_time: f64,

    /// Length of each production run [ps]
    #[arg(long, default_value_t = 60.0)]
    pub production_time: f64,

    /// Number of consecutive production runs
    #[arg(short, long, default_value_t = 1)]
    pub runs: usize,

    /// Seed for the initial perturbation; random if unset
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Draw initial velocities at this temperature [K] instead of starting at rest
    #[arg(long)]
    pub initial_temperature: Option<f64>,

    /// Write tables and trajectories under this directory, one subdirectory per temperature
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,
}
