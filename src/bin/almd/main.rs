mod args_parser;

use std::process::ExitCode;

use clap::Parser;
use log::{error, info};

use almd::{constants::K_FOR_0_C, Error, Experiment, ExperimentConfig, LJCut};

use crate::args_parser::Args;

/// Measured specific heat of solid aluminium [Å^2/(ps^2 K)]
const CV_SOLID: f64 = 0.0904;
/// Measured specific heat of liquid aluminium [Å^2/(ps^2 K)]
const CV_LIQUID: f64 = 0.118;

fn run(args: &Args) -> Result<(), Error> {
    let seed = args.seed.unwrap_or_else(rand::random);
    info!("Seed: {}", seed);
    info!("Specific heat of Al: {} Å^2/(ps^2 K)", CV_SOLID);
    info!("Specific heat of Al liquid: {} Å^2/(ps^2 K)", CV_LIQUID);

    for &celsius in &args.temperatures {
        let config = ExperimentConfig {
            unit_cells: args.unit_cells,
            seed,
            initial_temperature: args.initial_temperature,
            timestep: args.timestep,
            equilibration_time: args.equilibration_time,
            production_time: args.production_time,
            target_temperature: celsius + K_FOR_0_C,
            num_runs: args.runs,
            output_dir: args
                .output_dir
                .as_ref()
                .map(|dir| dir.join(format!("T{}C", celsius))),
            ..Default::default()
        };

        info!("Experiment at {} °C", celsius);
        let report = Experiment::new(config).run(LJCut::aluminium())?;
        info!(
            "{} °C: C_V from e_kin {:.4} ± {:.5}, from e_pot {:.4} ± {:.5} Å^2/(ps^2 K)",
            celsius,
            report.heat_capacity_kinetic.mean,
            report.heat_capacity_kinetic.std_dev,
            report.heat_capacity_potential.mean,
            report.heat_capacity_potential.std_dev
        );
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
