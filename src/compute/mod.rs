use std::fmt::Display;

mod kinetic_energy;
mod pressure;
mod temperature;

pub use kinetic_energy::kinetic_energy;
pub use pressure::pressure;
pub use temperature::temperature;

/// Thermodynamic observables of one state
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Thermo {
    pub kinetic_energy: f64,
    pub potential_energy: f64,
    pub temperature: f64,
    /// Pressure in internal units (energy / length^3)
    pub pressure: f64,
}
impl Thermo {
    pub fn total_energy(&self) -> f64 {
        self.kinetic_energy + self.potential_energy
    }
}

/// Per-step quantities that can be recorded as a series
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Compute {
    KineticE,
    PotentialE,
    TotalE,
    Temperature,
    Pressure,
}
impl Compute {
    pub const ALL: [Compute; 5] = [
        Compute::KineticE,
        Compute::PotentialE,
        Compute::TotalE,
        Compute::Temperature,
        Compute::Pressure,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Compute::KineticE => "KineticE",
            Compute::PotentialE => "PotentialE",
            Compute::TotalE => "TotalE",
            Compute::Temperature => "Temperature",
            Compute::Pressure => "Pressure",
        }
    }

    /// Value of this quantity for `thermo`, with the pressure multiplied by
    /// `pressure_conversion`
    pub fn value(&self, thermo: &Thermo, pressure_conversion: f64) -> f64 {
        match self {
            Compute::KineticE => thermo.kinetic_energy,
            Compute::PotentialE => thermo.potential_energy,
            Compute::TotalE => thermo.total_energy(),
            Compute::Temperature => thermo.temperature,
            Compute::Pressure => thermo.pressure * pressure_conversion,
        }
    }
}
impl Display for Compute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.name().fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::Atoms;

    #[test]
    fn equipartition_temperature() {
        let mut atoms = Atoms::from_coords(2.0, vec![[0.0; 3]; 4]);
        atoms.set_uniform_velocity([1.0, 1.0, 1.0]);
        let ke = kinetic_energy(&atoms);
        assert_relative_eq!(ke, 12.0);
        // 2 * 12 / (3 * 4 * 1)
        assert_relative_eq!(temperature(ke, 4, 1.0), 2.0);
    }

    #[test]
    fn ideal_gas_pressure_without_virial() {
        assert_relative_eq!(pressure(10, 1.0, 2.0, 0.0, 5.0), 4.0);
        assert_relative_eq!(pressure(10, 1.0, 2.0, 5.0, 5.0), 5.0);
    }

    #[test]
    fn pressure_is_converted_on_read() {
        let thermo = Thermo {
            kinetic_energy: 1.0,
            potential_energy: -3.0,
            temperature: 2.0,
            pressure: 0.5,
        };
        assert_relative_eq!(Compute::TotalE.value(&thermo, 10.0), -2.0);
        assert_relative_eq!(Compute::Pressure.value(&thermo, 10.0), 5.0);
        assert_relative_eq!(Compute::Temperature.value(&thermo, 10.0), 2.0);
        assert_eq!(Compute::KineticE.to_string(), "KineticE");
    }
}
