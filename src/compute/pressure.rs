/// Instantaneous pressure from the virial theorem, `(N kB T + W) / V`
///
/// The kinetic term uses the temperature of the same state the virial was
/// evaluated for.
pub fn pressure(num_atoms: usize, kb: f64, temperature: f64, virial: f64, volume: f64) -> f64 {
    (num_atoms as f64 * kb * temperature + virial) / volume
}
