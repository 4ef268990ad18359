use std::path::PathBuf;

use crate::{
    constants::{EV_A3_TO_BAR, K_FOR_0_C, KAPPA, KB, MASS_AL},
    Error,
};

/// Immutable parameters shared by every step of a run
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RunParameters {
    pub timestep: f64,
    pub boltzmann: f64,
    /// Factor converting internal pressure units to reported units
    pub pressure_conversion: f64,
}
impl RunParameters {
    /// eV, Å, ps and K, with pressure reported in bar
    pub fn metal(timestep: f64) -> Self {
        Self {
            timestep,
            boltzmann: KB,
            pressure_conversion: EV_A3_TO_BAR,
        }
    }
    /// Reduced units: kB = 1 and pressure reported unconverted
    pub fn reduced(timestep: f64) -> Self {
        Self {
            timestep,
            boltzmann: 1.0,
            pressure_conversion: 1.0,
        }
    }
    pub fn validate(&self) -> Result<(), Error> {
        positive("timestep", self.timestep)?;
        positive("boltzmann", self.boltzmann)?;
        positive("pressure_conversion", self.pressure_conversion)
    }
}

/// Settings for one equilibrate-then-produce experiment, in metal units
#[derive(Clone, Debug)]
pub struct ExperimentConfig {
    /// Unit cells per box edge; the crystal holds `4 * unit_cells^3` atoms
    pub unit_cells: usize,
    /// Volume of one conventional FCC cell [Å^3]
    pub cell_volume: f64,
    /// Amplitude of the initial position noise, in lattice constants
    pub perturbation: f64,
    pub seed: u64,
    /// Draw Maxwell-Boltzmann velocities at this temperature [K]; atoms start at rest if unset
    pub initial_temperature: Option<f64>,
    pub mass: f64,
    pub timestep: f64,
    pub equilibration_time: f64,
    pub production_time: f64,
    pub target_temperature: f64,
    pub tau_t: f64,
    /// Target pressure [bar]
    pub target_pressure: f64,
    pub tau_p: f64,
    pub kappa: f64,
    /// Targets above this temperature are melted first [K]
    pub melt_threshold: f64,
    /// Extra temperature of the melt phase [K]
    pub melt_offset: f64,
    pub num_runs: usize,
    /// Directory for the table and trajectory files; nothing is written if unset
    pub output_dir: Option<PathBuf>,
}
impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            unit_cells: 4,
            cell_volume: 66.0,
            perturbation: 0.065,
            seed: 0,
            initial_temperature: None,
            mass: MASS_AL,
            timestep: 0.005,
            equilibration_time: 90.0,
            production_time: 60.0,
            target_temperature: 500.0 + K_FOR_0_C,
            tau_t: 4.0,
            target_pressure: 1.0,
            tau_p: 6.0,
            kappa: KAPPA,
            melt_threshold: 600.0 + K_FOR_0_C,
            melt_offset: 500.0,
            num_runs: 1,
            output_dir: None,
        }
    }
}
impl ExperimentConfig {
    pub fn validate(&self) -> Result<(), Error> {
        if self.unit_cells == 0 {
            return Err(Error::InvalidParameter {
                name: "unit_cells",
                value: 0.0,
            });
        }
        if self.num_runs == 0 {
            return Err(Error::InvalidParameter {
                name: "num_runs",
                value: 0.0,
            });
        }
        positive("cell_volume", self.cell_volume)?;
        positive("mass", self.mass)?;
        positive("timestep", self.timestep)?;
        positive("equilibration_time", self.equilibration_time)?;
        positive("production_time", self.production_time)?;
        positive("target_temperature", self.target_temperature)?;
        positive("tau_t", self.tau_t)?;
        positive("tau_p", self.tau_p)?;
        if self.perturbation.is_nan() || self.perturbation < 0.0 {
            return Err(Error::InvalidParameter {
                name: "perturbation",
                value: self.perturbation,
            });
        }
        if let Some(t) = self.initial_temperature {
            positive("initial_temperature", t)?;
        }
        Ok(())
    }
    pub fn run_parameters(&self) -> RunParameters {
        RunParameters::metal(self.timestep)
    }
    pub fn equilibration_steps(&self) -> usize {
        steps(self.equilibration_time, self.timestep)
    }
    pub fn production_steps(&self) -> usize {
        steps(self.production_time, self.timestep)
    }
    /// Target pressure converted to eV/Å^3
    pub fn target_pressure_internal(&self) -> f64 {
        self.target_pressure / EV_A3_TO_BAR
    }
    pub fn needs_melt(&self) -> bool {
        self.target_temperature > self.melt_threshold
    }
}

fn steps(total_time: f64, timestep: f64) -> usize {
    (total_time / timestep).round() as usize
}

fn positive(name: &'static str, value: f64) -> Result<(), Error> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(Error::InvalidParameter { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_defaults() {
        let config = ExperimentConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.equilibration_steps(), 18000);
        assert_eq!(config.production_steps(), 12000);
        assert!(!config.needs_melt());
    }

    #[test]
    fn liquid_target_melts_first() {
        let config = ExperimentConfig {
            target_temperature: 700.0 + K_FOR_0_C,
            ..Default::default()
        };
        assert!(config.needs_melt());
    }

    #[test]
    fn rejects_bad_values() {
        let config = ExperimentConfig {
            timestep: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidParameter {
                name: "timestep",
                ..
            })
        ));
        let config = ExperimentConfig {
            num_runs: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
        assert!(RunParameters::reduced(-1.0).validate().is_err());
    }
}
