use super::*;

/// Velocity-verlet integrator
#[derive(Clone, Copy, Debug, Default)]
pub struct Verlet {}

impl Verlet {
    pub fn new() -> Self {
        Self {}
    }
    /// Steps the velocities of the simulation by half a timestep
    fn increment_velocity_halfstep<A: AtomicPotential>(simulation: &mut Simulation<A>) {
        let half_ts = 0.5 * simulation.timestep();
        let mass = simulation.atoms.mass();
        for i in 0..simulation.atoms.num_atoms() {
            let force = simulation.forces[i];
            simulation.atoms.increment_velocity(
                i,
                [
                    half_ts * force[0] / mass,
                    half_ts * force[1] / mass,
                    half_ts * force[2] / mass,
                ],
            );
        }
    }
    /// Steps the positions of the simulation forward
    fn increment_positions<A: AtomicPotential>(simulation: &mut Simulation<A>) {
        let ts = simulation.timestep();
        for i in 0..simulation.atoms.num_atoms() {
            let vel = simulation.atoms.velocities()[i];

            simulation
                .atoms
                .increment_position(i, [ts * vel[0], ts * vel[1], ts * vel[2]]);
        }
    }
}

impl<A: AtomicPotential> Integrator<A> for Verlet {
    fn step(&mut self, simulation: &mut Simulation<A>, _step: usize) -> Result<Thermo, Error> {
        Verlet::increment_velocity_halfstep(simulation);
        Verlet::increment_positions(simulation);
        simulation.refresh_forces();
        Verlet::increment_velocity_halfstep(simulation);
        Ok(simulation.thermo())
    }
}
