use super::*;

/// Weak-coupling velocity rescaling toward a target temperature
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Thermostat {
    pub target: f64,
    /// Relaxation time
    pub tau: f64,
}
impl Thermostat {
    pub fn new(target: f64, tau: f64) -> Self {
        assert!(tau > 0.0, "Thermostat tau should be positive, found {}", tau);
        Self { target, tau }
    }
    /// `1 + (2 dt / tau) (T_target - T) / T`, the factor applied to the kinetic energy
    pub fn scale_factor(&self, temperature: f64, timestep: f64) -> f64 {
        1.0 + 2.0 * timestep / self.tau * (self.target - temperature) / temperature
    }
}

/// Weak-coupling isotropic box rescaling toward a target pressure
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Barostat {
    /// Target pressure in internal units
    pub target: f64,
    /// Relaxation time
    pub tau: f64,
    /// Compressibility
    pub kappa: f64,
}
impl Barostat {
    pub fn new(target: f64, tau: f64, kappa: f64) -> Self {
        assert!(tau > 0.0, "Barostat tau should be positive, found {}", tau);
        Self { target, tau, kappa }
    }
    /// `1 - kappa (dt / tau) (P_target - P)`, the factor applied to the volume
    pub fn scale_factor(&self, pressure: f64, timestep: f64) -> f64 {
        1.0 - self.kappa * timestep / self.tau * (self.target - pressure)
    }
}

/// Berendsen coupling wrapped around another integrator.
///
/// After every inner step the velocities are scaled by `sqrt(alpha_T)` and
/// the box and positions by `alpha_P^(1/3)`. The returned observables are
/// those of the state before rescaling. Cached forces are left as computed
/// by the inner step. A box shrunk below twice the potential cutoff is an
/// error.
#[derive(Clone, Debug)]
pub struct Berendsen<I = Verlet> {
    integrator: I,
    thermostat: Option<Thermostat>,
    barostat: Option<Barostat>,
}
impl Berendsen<Verlet> {
    pub fn new(thermostat: Option<Thermostat>, barostat: Option<Barostat>) -> Self {
        Self::wrap(Verlet::new(), thermostat, barostat)
    }
}
impl<I> Berendsen<I> {
    pub fn wrap(integrator: I, thermostat: Option<Thermostat>, barostat: Option<Barostat>) -> Self {
        Self {
            integrator,
            thermostat,
            barostat,
        }
    }
}

impl<A, I> Integrator<A> for Berendsen<I>
where
    A: AtomicPotential,
    I: Integrator<A>,
{
    fn step(&mut self, simulation: &mut Simulation<A>, step: usize) -> Result<Thermo, Error> {
        let thermo = self.integrator.step(simulation, step)?;
        let timestep = simulation.timestep();

        if let Some(thermostat) = &self.thermostat {
            let temperature = thermo.temperature;
            if !temperature.is_finite() || temperature <= 0.0 {
                return Err(Error::NumericalInstability {
                    step,
                    quantity: "temperature",
                    value: temperature,
                });
            }
            let alpha_t = thermostat.scale_factor(temperature, timestep);
            if alpha_t.is_nan() || alpha_t <= 0.0 {
                return Err(Error::NumericalInstability {
                    step,
                    quantity: "temperature scale factor",
                    value: alpha_t,
                });
            }
            simulation.atoms.scale_velocities(alpha_t.sqrt());
        }

        if let Some(barostat) = &self.barostat {
            let alpha_p = barostat.scale_factor(thermo.pressure, timestep);
            if !alpha_p.is_finite() || alpha_p <= 0.0 {
                return Err(Error::NumericalInstability {
                    step,
                    quantity: "pressure scale factor",
                    value: alpha_p,
                });
            }
            simulation.scale_box(alpha_p.cbrt());
            simulation.check_cutoff()?;
        }

        Ok(thermo)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use approx::assert_relative_eq;

    use super::*;
    use crate::{Atoms, Container, LJCut, None_, Recorder, RunParameters};

    /// Zero force, counting force evaluations
    struct Counting {
        calls: Cell<usize>,
    }
    impl AtomicPotential for Counting {
        fn cutoff_distance(&self) -> f64 {
            0.0
        }
        fn compute_forces(&self, positions: &[[f64; 3]], _box_length: f64) -> Vec<[f64; 3]> {
            self.calls.set(self.calls.get() + 1);
            vec![[0.0; 3]; positions.len()]
        }
        fn compute_potential_energy(&self, _positions: &[[f64; 3]], _box_length: f64) -> f64 {
            0.0
        }
        fn compute_virial(&self, _positions: &[[f64; 3]], _box_length: f64) -> f64 {
            0.0
        }
    }

    fn gas(velocity: [f64; 3], length: f64) -> Simulation<None_> {
        let mut atoms = Atoms::from_coords(1.0, vec![[0.0; 3]; 4]);
        atoms.set_uniform_velocity(velocity);
        Simulation::new(
            RunParameters::reduced(0.01),
            atoms,
            None_::new(),
            Container::new(length),
        )
    }

    #[test]
    fn thermostat_relaxes_linearly_per_step() {
        // T' = T + (2 dt / tau) (T0 - T)
        let mut sim = gas([1.0, 1.0, 1.0], 5.0);
        let mut berendsen = Berendsen::new(Some(Thermostat::new(2.0, 0.1)), None);
        sim.refresh_forces();
        let thermo = berendsen.step(&mut sim, 0).unwrap();
        assert_relative_eq!(thermo.temperature, 1.0);
        assert_relative_eq!(sim.thermo().temperature, 1.2, epsilon = 1e-12);
    }

    #[test]
    fn barostat_scales_box_and_positions_identically() {
        let mut atoms = Atoms::from_coords(1.0, vec![[1.0, 2.0, 3.0]; 4]);
        atoms.set_uniform_velocity([1.0, 1.0, 1.0]);
        let mut sim = Simulation::new(
            RunParameters::reduced(0.01),
            atoms,
            None_::new(),
            Container::new(2.0),
        );
        let mut berendsen = Berendsen::new(None, Some(Barostat::new(1.0, 0.1, 1.0)));
        sim.refresh_forces();
        let before = sim.atoms.positions()[0];
        let thermo = berendsen.step(&mut sim, 0).unwrap();
        // P = N kB T / V = 4 / 8
        assert_relative_eq!(thermo.pressure, 0.5);
        let factor = (1.0f64 - 0.1 * (1.0 - 0.5)).cbrt();
        assert_relative_eq!(sim.container().length(), 2.0 * factor, epsilon = 1e-12);
        for j in 0..3 {
            assert_relative_eq!(
                sim.atoms.positions()[0][j],
                (before[j] + 0.01) * factor,
                epsilon = 1e-12
            );
        }
    }

    #[test]
    fn zero_temperature_is_reported() {
        let mut sim = gas([0.0, 0.0, 0.0], 5.0);
        let mut berendsen = Berendsen::new(Some(Thermostat::new(1.0, 0.1)), None);
        let mut recorder = Recorder::new(3, 1.0);
        let result = sim.run(&mut berendsen, 3, &mut recorder);
        assert!(matches!(
            result,
            Err(Error::NumericalInstability {
                step: 0,
                quantity: "temperature",
                ..
            })
        ));
    }

    #[test]
    fn overshooting_pressure_coupling_is_reported() {
        let mut sim = gas([1.0, 1.0, 1.0], 1.0);
        // P = 4, so alpha_P = 1 - 10 * (100 - 4) < 0
        let mut berendsen = Berendsen::new(None, Some(Barostat::new(100.0, 0.01, 10.0)));
        let mut recorder = Recorder::new(1, 1.0);
        let result = sim.run(&mut berendsen, 1, &mut recorder);
        assert!(matches!(
            result,
            Err(Error::NumericalInstability {
                quantity: "pressure scale factor",
                ..
            })
        ));
    }

    #[test]
    fn without_coupling_matches_plain_verlet() {
        let mut a = gas([0.3, -0.1, 0.2], 5.0);
        let mut b = gas([0.3, -0.1, 0.2], 5.0);
        let mut ra = Recorder::new(10, 1.0);
        let mut rb = Recorder::new(10, 1.0);
        a.run(&mut Berendsen::new(None, None), 10, &mut ra).unwrap();
        b.run(&mut Verlet::new(), 10, &mut rb).unwrap();
        assert_eq!(a.atoms.positions(), b.atoms.positions());
        assert_eq!(a.container(), b.container());
    }

    #[test]
    fn coupled_steps_evaluate_forces_once_per_step() {
        let mut atoms = Atoms::from_coords(1.0, vec![[0.0; 3]; 4]);
        atoms.set_uniform_velocity([1.0, 1.0, 1.0]);
        let potential = Counting {
            calls: Cell::new(0),
        };
        let mut sim = Simulation::new(
            RunParameters::reduced(0.01),
            atoms,
            potential,
            Container::new(2.0),
        );
        let mut berendsen = Berendsen::wrap(
            Verlet::new(),
            Some(Thermostat::new(2.0, 0.1)),
            Some(Barostat::new(1.0, 0.1, 1.0)),
        );
        let mut recorder = Recorder::new(10, 1.0);
        sim.run(&mut berendsen, 10, &mut recorder).unwrap();
        // one refresh at the start of the phase, none after the rescales
        assert_eq!(sim.atomic_potential().calls.get(), 11);
    }

    #[test]
    fn forces_are_not_refreshed_after_rescaling() {
        let atoms = Atoms::from_coords(1.0, vec![[1.0, 1.0, 1.0], [2.2, 1.0, 1.0]]);
        let mut sim = Simulation::new(
            RunParameters::reduced(0.001),
            atoms,
            LJCut::new(1.0, 1.0, 2.5),
            Container::new(10.0),
        );
        let mut berendsen = Berendsen::new(None, Some(Barostat::new(1.0, 0.1, 1.0)));
        sim.refresh_forces();
        berendsen.step(&mut sim, 0).unwrap();

        let factor = sim.container().length() / 10.0;
        assert!(factor < 0.999);
        let unscaled: Vec<[f64; 3]> = sim
            .atoms
            .positions()
            .iter()
            .map(|p| [p[0] / factor, p[1] / factor, p[2] / factor])
            .collect();
        let before_rescale = sim.atomic_potential().compute_forces(&unscaled, 10.0);
        let after_rescale = sim
            .atomic_potential()
            .compute_forces(sim.atoms.positions(), sim.container().length());
        for i in 0..2 {
            assert_relative_eq!(sim.forces()[i][0], before_rescale[i][0], epsilon = 1e-9);
        }
        assert!((sim.forces()[0][0] - after_rescale[0][0]).abs() > 1e-3);
    }

    #[test]
    fn shrinking_below_twice_the_cutoff_is_reported() {
        let mut atoms = Atoms::from_coords(1.0, vec![[0.0; 3], [2.55, 2.55, 2.55]]);
        atoms.set_uniform_velocity([1.0, 1.0, 1.0]);
        let mut sim = Simulation::new(
            RunParameters::reduced(0.01),
            atoms,
            LJCut::new(1.0, 1.0, 2.5),
            Container::new(5.1),
        );
        // alpha_P is about 0.9, so L drops from 5.1 to about 4.92
        let mut berendsen = Berendsen::new(None, Some(Barostat::new(10.0, 0.1, 0.1)));
        let mut recorder = Recorder::new(1, 1.0);
        let result = sim.run(&mut berendsen, 1, &mut recorder);
        match result {
            Err(Error::CutoffTooLarge { cutoff, box_length }) => {
                assert_eq!(cutoff, 2.5);
                assert!(box_length < 5.0);
            }
            other => panic!("unexpected result {:?}", other),
        }
    }
}
