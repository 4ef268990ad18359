//! Physical constants in metal units (eV, Å, ps, K)

/// Boltzmann constant [eV/K]
pub const KB: f64 = 8.6173303e-05;
/// Isothermal compressibility used by the barostat [Å^3/eV]
pub const KAPPA: f64 = 2.219;
/// Mass of an aluminium atom [eV ps^2/Å^2]
pub const MASS_AL: f64 = 0.002796439;
/// Pressure conversion from eV/Å^3 to bar
pub const EV_A3_TO_BAR: f64 = 1602176.6;
/// Zero degrees Celsius in kelvin
pub const K_FOR_0_C: f64 = 273.15;

/// Lennard-Jones well depth for aluminium [eV] (Halicioglu & Pound, 1975)
pub const LJ_EPSILON_AL: f64 = 0.392;
/// Lennard-Jones length scale for aluminium [Å] (Halicioglu & Pound, 1975)
pub const LJ_SIGMA_AL: f64 = 2.620;
