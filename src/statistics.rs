//! Reductions of per-step series to scalars.
//!
//! All functions are pure. An empty input yields NaN, as do non-finite
//! values anywhere in the input.

use log::warn;
use num_traits::Float;

use crate::{compute::Compute, Recorder};

fn count<F: Float>(values: &[F]) -> F {
    <F as num_traits::NumCast>::from(values.len()).unwrap_or_else(F::nan)
}

/// Arithmetic mean
///
/// ```rust
/// use almd::statistics::mean;
///
/// assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0, 5.0]), 3.0);
/// assert!(mean::<f64>(&[]).is_nan());
/// ```
pub fn mean<F: Float>(values: &[F]) -> F {
    values.iter().fold(F::zero(), |acc, &x| acc + x) / count(values)
}

/// Population variance about a precomputed mean
///
/// ```rust
/// use almd::statistics::{mean, variance};
///
/// let xs = [1.0, 2.0, 3.0, 4.0, 5.0];
/// assert_eq!(variance(&xs, mean(&xs)), 2.0);
/// ```
pub fn variance<F: Float>(values: &[F], mean: F) -> F {
    values
        .iter()
        .fold(F::zero(), |acc, &x| acc + (x - mean) * (x - mean))
        / count(values)
}

/// Population standard deviation
pub fn std_dev<F: Float>(values: &[F]) -> F {
    variance(values, mean(values)).sqrt()
}

/// `1 - 2 Var(E) / (3 N kB^2 T^2)`, the correction to the equipartition estimate
pub fn heat_capacity_denominator(
    energy_variance: f64,
    mean_temperature: f64,
    num_atoms: usize,
    kb: f64,
) -> f64 {
    let n = num_atoms as f64;
    1.0 - 2.0 / (3.0 * n * kb * kb * mean_temperature * mean_temperature) * energy_variance
}

/// Specific heat capacity from the fluctuations of an energy series:
///
/// `C_V = (3/2) N kB / (1 - 2 Var(E) / (3 N kB^2 T^2)) / M`
///
/// with `M = N m` the total mass. A non-positive denominator gives a
/// meaningless value, which is returned as is.
pub fn heat_capacity(
    energy_variance: f64,
    mean_temperature: f64,
    num_atoms: usize,
    kb: f64,
    total_mass: f64,
) -> f64 {
    let n = num_atoms as f64;
    let denominator = heat_capacity_denominator(energy_variance, mean_temperature, num_atoms, kb);
    1.5 * n * kb / denominator / total_mass
}

/// Mean and standard deviation of a set of samples
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Estimate {
    pub mean: f64,
    pub std_dev: f64,
}
impl Estimate {
    pub fn from_samples(samples: &[f64]) -> Self {
        let mean = mean(samples);
        Self {
            mean,
            std_dev: variance(samples, mean).sqrt(),
        }
    }
}

/// Summary of one production run
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProductionStats {
    pub mean_temperature: f64,
    /// Mean pressure in reported units
    pub mean_pressure: f64,
    /// Heat capacity from the kinetic energy fluctuations
    pub heat_capacity_kinetic: f64,
    /// Heat capacity from the potential energy fluctuations
    pub heat_capacity_potential: f64,
}
impl ProductionStats {
    pub fn from_recorder(recorder: &Recorder, num_atoms: usize, kb: f64, total_mass: f64) -> Self {
        let mean_temperature = mean(recorder.values(Compute::Temperature));
        let mean_pressure = mean(recorder.values(Compute::Pressure));

        let cv = |compute: Compute| {
            let energies = recorder.values(compute);
            let var = variance(energies, mean(energies));
            let denominator = heat_capacity_denominator(var, mean_temperature, num_atoms, kb);
            if denominator.is_nan() || denominator <= 0.0 {
                warn!(
                    "Heat capacity from {} is unreliable: fluctuation correction {:.4} is not positive",
                    compute, denominator
                );
            }
            heat_capacity(var, mean_temperature, num_atoms, kb, total_mass)
        };

        Self {
            mean_temperature,
            mean_pressure,
            heat_capacity_kinetic: cv(Compute::KineticE),
            heat_capacity_potential: cv(Compute::PotentialE),
        }
    }
}
