use super::Lattice;

const BASIS: [[f64; 3]; 4] = [
    [0.0, 0.0, 0.0],
    [0.0, 0.5, 0.5],
    [0.5, 0.0, 0.5],
    [0.5, 0.5, 0.0],
];

/// Face-centred cubic lattice with cubic lattice constant `a`
#[derive(Clone, Copy, Debug)]
pub struct Fcc {
    a: f64,
}
impl Fcc {
    pub fn new(a: f64) -> Self {
        let s = Self { a };
        s.assert_positive();
        s
    }
    /// Lattice whose conventional unit cell has volume `cell_volume`
    pub fn from_cell_volume(cell_volume: f64) -> Self {
        let s = Self {
            a: cell_volume.cbrt(),
        };
        s.assert_positive();
        s
    }
    pub fn lattice_constant(&self) -> f64 {
        self.a
    }
    fn assert_positive(&self) {
        assert!(
            self.a > 0.0,
            "Lattice constant should be positive, found {}",
            self.a
        );
    }
}
impl Lattice for Fcc {
    fn coords(&self, num_cells: usize) -> Vec<[f64; 3]> {
        let mut coords: Vec<[f64; 3]> = Vec::new();
        coords.reserve(BASIS.len() * num_cells * num_cells * num_cells);

        for i in 0..num_cells {
            for j in 0..num_cells {
                for k in 0..num_cells {
                    for b in &BASIS {
                        coords.push([
                            self.a * (i as f64 + b[0]),
                            self.a * (j as f64 + b[1]),
                            self.a * (k as f64 + b[2]),
                        ]);
                    }
                }
            }
        }
        coords
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::utils::distance_squared;

    #[test]
    fn atom_count_is_four_per_cell() {
        let fcc = Fcc::new(1.0);
        assert_eq!(fcc.coords(1).len(), 4);
        assert_eq!(fcc.coords(3).len(), 108);
    }

    #[test]
    fn nearest_neighbour_distance() {
        let a = 4.0;
        let coords = Fcc::new(a).coords(2);
        let min_d2 = coords
            .iter()
            .skip(1)
            .map(|c| distance_squared(&coords[0], c))
            .fold(f64::MAX, f64::min);
        assert_relative_eq!(min_d2.sqrt(), a / 2f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn coords_fill_the_box() {
        let coords = Fcc::from_cell_volume(27.0).coords(2);
        for c in coords {
            for x in c {
                assert!((0.0..6.0).contains(&x));
            }
        }
    }
}
