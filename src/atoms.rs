use rand::Rng;
use rand_distr::Distribution;

use crate::utils;

/// Atom properties during simulation, not including forces
///
/// Positions and velocities are indexed by atom id and always have the same
/// length. Positions are not wrapped into the periodic box.
#[derive(Clone, Debug)]
pub struct Atoms {
    pub positions: Vec<[f64; 3]>,
    pub velocities: Vec<[f64; 3]>,
    mass: f64,
}
impl Atoms {
    pub fn new(mass: f64) -> Self {
        assert!(mass > 0.0, "Mass should be positive, found {}", mass);
        Atoms {
            positions: Vec::new(),
            velocities: Vec::new(),
            mass,
        }
    }
    /// Create atoms at rest at the given coordinates
    pub fn from_coords(mass: f64, coords: Vec<[f64; 3]>) -> Self {
        let mut atoms = Self::new(mass);
        atoms.add_atoms(coords);
        atoms
    }
    pub fn num_atoms(&self) -> usize {
        self.positions.len()
    }
    pub fn positions(&self) -> &Vec<[f64; 3]> {
        &self.positions
    }
    pub fn velocities(&self) -> &Vec<[f64; 3]> {
        &self.velocities
    }
    pub fn mass(&self) -> f64 {
        self.mass
    }
    pub fn total_mass(&self) -> f64 {
        self.mass * self.num_atoms() as f64
    }
    pub fn increment_position(&mut self, i: usize, increment: [f64; 3]) {
        self.positions[i][0] += increment[0];
        self.positions[i][1] += increment[1];
        self.positions[i][2] += increment[2];
    }
    pub fn increment_velocity(&mut self, i: usize, increment: [f64; 3]) {
        self.velocities[i][0] += increment[0];
        self.velocities[i][1] += increment[1];
        self.velocities[i][2] += increment[2];
    }
    pub fn set_velocity(&mut self, i: usize, new_vel: [f64; 3]) {
        self.velocities[i] = new_vel;
    }
    /// Give every atom the same velocity
    pub fn set_uniform_velocity(&mut self, vel: [f64; 3]) {
        self.velocities.iter_mut().for_each(|v| *v = vel);
    }
    pub fn add_atoms(&mut self, coords: Vec<[f64; 3]>) {
        let num_atoms = coords.len();
        self.positions.reserve(num_atoms);
        self.velocities.reserve(num_atoms);

        for coord in coords {
            self.velocities.push([0.0, 0.0, 0.0]);
            self.positions.push(coord)
        }
    }
    /// Multiply every velocity component by `factor`
    pub fn scale_velocities(&mut self, factor: f64) {
        for v in self.velocities.iter_mut() {
            v.iter_mut().for_each(|c| *c *= factor);
        }
    }
    /// Multiply every position component by `factor`
    pub fn scale_positions(&mut self, factor: f64) {
        for p in self.positions.iter_mut() {
            p.iter_mut().for_each(|c| *c *= factor);
        }
    }
    /// Displace every position component by `amplitude * (u - 0.5)`, u ~ U[0, 1)
    pub fn perturb<R: Rng + ?Sized>(&mut self, amplitude: f64, rng: &mut R) {
        for p in self.positions.iter_mut() {
            for c in p.iter_mut() {
                *c += amplitude * (rng.gen::<f64>() - 0.5);
            }
        }
    }
    /// Draw Maxwell-Boltzmann velocities for `temperature`, then remove the
    /// centre-of-mass drift and rescale to hit the temperature exactly.
    pub fn set_temperature<R: Rng + ?Sized>(&mut self, temperature: f64, kb: f64, rng: &mut R) {
        assert!(
            temperature > 0.0,
            "Temperature should be positive, found {}",
            temperature
        );
        let sigma = (kb * temperature / self.mass).sqrt();
        let dist = rand_distr::Normal::new(0.0, sigma).expect("Invalid temperature");
        let nlocal = self.num_atoms();
        let samples: Vec<f64> = dist.sample_iter(&mut *rng).take(nlocal * 3).collect();
        for i in 0..nlocal {
            self.velocities[i] = [samples[3 * i], samples[3 * i + 1], samples[3 * i + 2]];
        }
        if nlocal > 1 {
            self.remove_drift();
        }

        let current = crate::compute::temperature(
            crate::compute::kinetic_energy(self),
            nlocal,
            kb,
        );
        if current > 0.0 {
            self.scale_velocities((temperature / current).sqrt());
        }
    }
    fn remove_drift(&mut self) {
        let n = self.num_atoms() as f64;
        let drift = utils::scale(&utils::sum(&self.velocities), 1.0 / n);
        for v in self.velocities.iter_mut() {
            *v = utils::sub(v, &drift);
        }
    }
}
