mod berendsen;
mod verlet;

pub use berendsen::{Barostat, Berendsen, Thermostat};
pub use verlet::Verlet;

use crate::{compute::Thermo, AtomicPotential, Error, Simulation};

/// Simulation integrator
pub trait Integrator<A: AtomicPotential> {
    /// Advance the simulation by one timestep and return the observables of
    /// the resulting state.
    ///
    /// On entry `simulation.forces()` holds the forces of the current
    /// configuration; on return it must hold the forces of the new one.
    fn step(&mut self, simulation: &mut Simulation<A>, step: usize) -> Result<Thermo, Error>;
}
