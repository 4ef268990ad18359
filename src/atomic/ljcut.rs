use super::AtomicPotential;
use crate::{
    constants::{LJ_EPSILON_AL, LJ_SIGMA_AL},
    Container,
};

#[derive(Clone, Copy, Debug)]
pub struct LJCutCoeff {
    epsilon: f64,
    rcut: f64,
    sigma6: f64,
    rcut2: f64,
    prefactor: f64, // = 24 epsilon * sigma^6
    shift: f64,     // U(rcut), subtracted so the energy is continuous
}
impl LJCutCoeff {
    pub fn new(sigma: f64, epsilon: f64, rcut: f64) -> Self {
        assert!(sigma > 0.0, "Sigma should be positive, found {}", sigma);
        assert!(rcut > 0.0, "Cutoff should be positive, found {}", rcut);
        let sigma6 = sigma * sigma * sigma * sigma * sigma * sigma;
        let rcut2 = rcut * rcut;
        let rcut6 = rcut2 * rcut2 * rcut2;
        let shift = 4.0 * epsilon * sigma6 / rcut6 * (sigma6 / rcut6 - 1.0);
        Self {
            epsilon,
            rcut,
            rcut2,
            sigma6,
            prefactor: 24.0 * epsilon * sigma6,
            shift,
        }
    }
}

/// Lennard-Jones 12-6 potential, truncated and shifted at the cutoff,
/// evaluated over all pairs with the minimum-image convention
#[derive(Clone, Debug)]
pub struct LJCut {
    coeff: LJCutCoeff,
}
impl LJCut {
    pub fn new(sigma: f64, epsilon: f64, rcut: f64) -> Self {
        Self {
            coeff: LJCutCoeff::new(sigma, epsilon, rcut),
        }
    }
    /// Aluminium parameters with a cutoff of 2.5 sigma
    pub fn aluminium() -> Self {
        Self::new(LJ_SIGMA_AL, LJ_EPSILON_AL, 2.5 * LJ_SIGMA_AL)
    }

    /// Calls `f(i, j, r_ij, r2)` for every pair i < j within the cutoff,
    /// where `r_ij = pos_i - pos_j` is the minimum image.
    fn for_each_pair<F>(&self, positions: &[[f64; 3]], box_length: f64, mut f: F)
    where
        F: FnMut(usize, usize, [f64; 3], f64),
    {
        let container = Container::new(box_length);
        for (i, posi) in positions.iter().enumerate() {
            for (j, posj) in positions.iter().enumerate().skip(i + 1) {
                let r = container.minimum_image([
                    posi[0] - posj[0],
                    posi[1] - posj[1],
                    posi[2] - posj[2],
                ]);
                let r2 = r[0] * r[0] + r[1] * r[1] + r[2] * r[2];

                if r2 > self.coeff.rcut2 {
                    continue;
                }
                f(i, j, r, r2);
            }
        }
    }

    /// |f| / r for a pair at squared distance r2; positive is repulsive
    fn force_over_r(&self, r2: f64) -> f64 {
        // U(r) = 4 eps ((sig/r)^12 - (sig/r)^6)
        // f_i = -dU/dr r_ij / r = 24 eps sig^6 / r^8 (2 sig^6 / r^6 - 1) r_ij
        let r6 = r2 * r2 * r2;
        self.coeff.prefactor / r6 / r2 * (2.0 * self.coeff.sigma6 / r6 - 1.0)
    }
}

impl AtomicPotential for LJCut {
    fn cutoff_distance(&self) -> f64 {
        self.coeff.rcut
    }
    fn compute_forces(&self, positions: &[[f64; 3]], box_length: f64) -> Vec<[f64; 3]> {
        let mut forces = vec![[0.0, 0.0, 0.0]; positions.len()];
        self.for_each_pair(positions, box_length, |i, j, r, r2| {
            let f_mag = self.force_over_r(r2);
            for k in 0..3 {
                forces[i][k] += r[k] * f_mag;
                forces[j][k] -= r[k] * f_mag;
            }
        });
        forces
    }
    fn compute_potential_energy(&self, positions: &[[f64; 3]], box_length: f64) -> f64 {
        let mut energy = 0.0;
        let c = &self.coeff;
        self.for_each_pair(positions, box_length, |_, _, _, r2| {
            let r6 = r2 * r2 * r2;
            energy += 4.0 * c.epsilon * c.sigma6 / r6 * (c.sigma6 / r6 - 1.0) - c.shift;
        });
        energy
    }
    fn compute_virial(&self, positions: &[[f64; 3]], box_length: f64) -> f64 {
        let mut virial = 0.0;
        self.for_each_pair(positions, box_length, |_, _, _, r2| {
            virial += self.force_over_r(r2) * r2;
        });
        virial / 3.0
    }
}
