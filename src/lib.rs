pub mod atomic;
pub mod atoms;
pub mod compute;
pub mod config;
pub mod constants;
pub mod container;
pub mod error;
pub mod experiment;
pub mod integrators;
pub mod lattice;
pub mod output;
pub mod prelude;
pub mod recorder;
pub mod simulation;
pub mod statistics;
pub mod utils;

pub use atomic::*;
pub use atoms::Atoms;
pub use config::{ExperimentConfig, RunParameters};
pub use container::Container;
pub use error::Error;
pub use experiment::{Experiment, ExperimentReport};
pub use integrators::*;
pub use recorder::Recorder;
pub use simulation::Simulation;
