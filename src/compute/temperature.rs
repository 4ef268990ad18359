/// Instantaneous temperature from the kinetic energy, `2 E_kin / (3 N kB)`
pub fn temperature(kinetic_energy: f64, num_atoms: usize, kb: f64) -> f64 {
    kinetic_energy * 2.0 / (3.0 * num_atoms as f64 * kb)
}
