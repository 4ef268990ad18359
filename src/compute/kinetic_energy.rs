use crate::{utils::norm_squared, Atoms};

/// Total kinetic energy, `sum_i m v_i^2 / 2`
pub fn kinetic_energy(atoms: &Atoms) -> f64 {
    0.5 * atoms.mass() * atoms.velocities().iter().map(norm_squared).sum::<f64>()
}
