use log::{debug, trace};

use crate::{
    compute::{self, Thermo},
    AtomicPotential, Atoms, Container, Error, Integrator, Recorder, RunParameters,
};

/// Steps between trace-level progress messages
const TRACE_EVERY: usize = 1000;

/// The state of one simulated crystal: atoms, box, potential and the forces
/// of the current configuration.
pub struct Simulation<A: AtomicPotential> {
    pub atoms: Atoms,
    container: Container,
    atomic_potential: A,
    params: RunParameters,
    pub(crate) forces: Vec<[f64; 3]>,
}
impl<A: AtomicPotential> Simulation<A> {
    /// Create a new simulation
    pub fn new(params: RunParameters, atoms: Atoms, atomic_potential: A, container: Container) -> Self {
        assert!(
            params.timestep > 0.0,
            "Timestep should be positive, found {}",
            params.timestep,
        );
        Self {
            atoms,
            container,
            atomic_potential,
            params,
            forces: Vec::new(),
        }
    }

    // Getters
    pub fn container(&self) -> &Container {
        &self.container
    }
    pub fn atomic_potential(&self) -> &A {
        &self.atomic_potential
    }
    pub fn params(&self) -> &RunParameters {
        &self.params
    }
    pub fn timestep(&self) -> f64 {
        self.params.timestep
    }
    pub fn num_atoms(&self) -> usize {
        self.atoms.num_atoms()
    }
    /// Forces of the current configuration, as cached by the last refresh
    pub fn forces(&self) -> &Vec<[f64; 3]> {
        &self.forces
    }

    /// Advance `num_steps` steps with `integrator`, recording every step.
    ///
    /// Forces are recomputed once at the start, since the box or the
    /// positions may have changed since the last phase.
    pub fn run<I: Integrator<A>>(
        &mut self,
        integrator: &mut I,
        num_steps: usize,
        recorder: &mut Recorder,
    ) -> Result<(), Error> {
        self.pre_check()?;
        debug!(
            "Running {} steps with {} atoms, box length {:.4}",
            num_steps,
            self.num_atoms(),
            self.container.length()
        );

        self.refresh_forces();
        recorder.start(&self.atoms);

        for step in 0..num_steps {
            let thermo = integrator.step(self, step)?;
            recorder.record(step, &thermo, &self.atoms)?;

            if step % TRACE_EVERY == 0 {
                trace!(
                    "step {}: T = {:.3}, E = {:.6}, L = {:.5}",
                    step,
                    thermo.temperature,
                    thermo.total_energy(),
                    self.container.length()
                );
            }
        }
        Ok(())
    }

    /// Observables of the current state
    pub fn thermo(&self) -> Thermo {
        let n = self.num_atoms();
        let kb = self.params.boltzmann;
        let positions = self.atoms.positions();
        let length = self.container.length();

        let kinetic_energy = compute::kinetic_energy(&self.atoms);
        let potential_energy = self
            .atomic_potential
            .compute_potential_energy(positions, length);
        let temperature = compute::temperature(kinetic_energy, n, kb);
        let virial = self.atomic_potential.compute_virial(positions, length);
        let pressure =
            compute::pressure(n, kb, temperature, virial, self.container.volume());
        Thermo {
            kinetic_energy,
            potential_energy,
            temperature,
            pressure,
        }
    }

    pub(crate) fn refresh_forces(&mut self) {
        self.forces = self
            .atomic_potential
            .compute_forces(self.atoms.positions(), self.container.length());
    }

    /// Scale the box and every position isotropically by `factor`
    pub(crate) fn scale_box(&mut self, factor: f64) {
        self.container.scale(factor);
        self.atoms.scale_positions(factor);
    }

    /// The minimum image only sees every pair within the cutoff if the
    /// cutoff is at most half the box length
    pub(crate) fn check_cutoff(&self) -> Result<(), Error> {
        let cutoff = self.atomic_potential.cutoff_distance();
        let box_length = self.container.length();
        if cutoff > 0.5 * box_length {
            return Err(Error::CutoffTooLarge { cutoff, box_length });
        }
        Ok(())
    }

    // Private functions
    fn pre_check(&self) -> Result<(), Error> {
        self.params.validate()?;
        self.check_cutoff()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::{LJCut, None_, Verlet};

    #[test]
    fn rejects_cutoff_beyond_half_box() {
        let atoms = Atoms::from_coords(1.0, vec![[0.0; 3], [1.0, 0.0, 0.0]]);
        let mut sim = Simulation::new(
            RunParameters::reduced(0.01),
            atoms,
            LJCut::new(1.0, 1.0, 2.5),
            Container::new(4.0),
        );
        let mut recorder = Recorder::new(1, 1.0);
        let result = sim.run(&mut Verlet::new(), 1, &mut recorder);
        assert!(matches!(result, Err(Error::CutoffTooLarge { .. })));
    }

    #[test]
    fn scale_box_moves_atoms_with_the_box() {
        let atoms = Atoms::from_coords(1.0, vec![[1.0, 2.0, 3.0]]);
        let mut sim = Simulation::new(
            RunParameters::reduced(0.01),
            atoms,
            None_::new(),
            Container::new(4.0),
        );
        sim.scale_box(0.5);
        assert_relative_eq!(sim.container().length(), 2.0);
        assert_eq!(sim.atoms.positions()[0], [0.5, 1.0, 1.5]);
    }

    #[test]
    fn ideal_gas_thermo() {
        let mut atoms = Atoms::from_coords(1.0, vec![[0.0; 3]; 4]);
        atoms.set_uniform_velocity([1.0, 1.0, 1.0]);
        let sim = Simulation::new(
            RunParameters::reduced(0.01),
            atoms,
            None_::new(),
            Container::new(2.0),
        );
        let thermo = sim.thermo();
        assert_relative_eq!(thermo.kinetic_energy, 6.0);
        assert_relative_eq!(thermo.temperature, 1.0);
        // N kB T / V = 4 / 8
        assert_relative_eq!(thermo.pressure, 0.5);
        assert_relative_eq!(thermo.potential_energy, 0.0);
    }
}
