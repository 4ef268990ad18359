/// Cubic simulation box, periodic along all three axes, with its lower
/// corner at the origin.
#[derive(Clone, Debug, PartialEq)]
pub struct Container {
    length: f64,
}
impl Container {
    // Creation

    /// Create a new periodic container with edge length `length`
    pub fn new(length: f64) -> Self {
        assert!(
            length > 0.0,
            "Box length should be positive, found {}",
            length
        );
        Self { length }
    }

    // Getters

    /// Edge length of the box
    pub fn length(&self) -> f64 {
        self.length
    }
    pub fn volume(&self) -> f64 {
        self.length * self.length * self.length
    }

    // Setters

    /// Scale the edge length by `factor`
    pub fn scale(&mut self, factor: f64) {
        assert!(
            factor > 0.0,
            "Box scale factor should be positive, found {}",
            factor
        );
        self.length *= factor;
    }

    /// Shortest periodic image of a separation vector
    pub fn minimum_image(&self, r: [f64; 3]) -> [f64; 3] {
        let l = self.length;
        [
            r[0] - l * (r[0] / l).round(),
            r[1] - l * (r[1] / l).round(),
            r[2] - l * (r[2] / l).round(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn minimum_image_folds_into_half_box() {
        let c = Container::new(10.0);
        let r = c.minimum_image([7.0, -6.0, 24.0]);
        assert_relative_eq!(r[0], -3.0);
        assert_relative_eq!(r[1], 4.0);
        assert_relative_eq!(r[2], 4.0);
    }

    #[test]
    fn scaling_updates_volume() {
        let mut c = Container::new(2.0);
        c.scale(1.5);
        assert_relative_eq!(c.length(), 3.0);
        assert_relative_eq!(c.volume(), 27.0);
    }

    #[test]
    #[should_panic(expected = "Box length should be positive")]
    fn rejects_empty_box() {
        Container::new(0.0);
    }
}
