pub use super::atomic::{AtomicPotential, LJCut, None_};
pub use super::atoms::Atoms;
pub use super::compute::{Compute, Thermo};
pub use super::config::{ExperimentConfig, RunParameters};
pub use super::container::Container;
pub use super::error::Error;
pub use super::experiment::{Experiment, ExperimentReport};
pub use super::integrators::{Barostat, Berendsen, Integrator, Thermostat, Verlet};
pub use super::lattice::{Fcc, Lattice};
pub use super::recorder::Recorder;
pub use super::simulation::Simulation;
pub use super::statistics::{Estimate, ProductionStats};
