mod fcc;

pub use fcc::Fcc;

/// Generator of initial atomic coordinates
pub trait Lattice {
    /// Coordinates of a cube of `num_cells` unit cells per side, starting at the origin
    fn coords(&self, num_cells: usize) -> Vec<[f64; 3]>;
}
