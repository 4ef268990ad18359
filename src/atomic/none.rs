use super::AtomicPotential;

/// Non-interacting atoms: zero force and energy everywhere
#[derive(Clone, Copy, Debug, Default)]
pub struct None_ {}
impl None_ {
    pub fn new() -> Self {
        Self {}
    }
}
impl AtomicPotential for None_ {
    fn cutoff_distance(&self) -> f64 {
        0.0
    }
    fn compute_forces(&self, positions: &[[f64; 3]], _box_length: f64) -> Vec<[f64; 3]> {
        vec![[0.0, 0.0, 0.0]; positions.len()]
    }
    fn compute_potential_energy(&self, _positions: &[[f64; 3]], _box_length: f64) -> f64 {
        0.0
    }
    fn compute_virial(&self, _positions: &[[f64; 3]], _box_length: f64) -> f64 {
        0.0
    }
}
