pub mod ljcut;
pub mod none;

pub use ljcut::{LJCut, LJCutCoeff};
pub use none::None_;

/// Trait for pairwise atomic potentials in a cubic periodic box
pub trait AtomicPotential {
    /// Get the maximum distance for effective interaction
    fn cutoff_distance(&self) -> f64;

    /// Net force on every atom
    fn compute_forces(&self, positions: &[[f64; 3]], box_length: f64) -> Vec<[f64; 3]>;

    /// Total potential energy of the configuration
    fn compute_potential_energy(&self, positions: &[[f64; 3]], box_length: f64) -> f64;

    /// Virial term of the pressure, `(1/3) sum_{i<j} r_ij . f_ij`
    fn compute_virial(&self, positions: &[[f64; 3]], box_length: f64) -> f64;
}
