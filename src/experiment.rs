//! Equilibrate-then-produce runs on a perturbed FCC crystal.

use std::path::Path;

use log::{debug, info};
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{
    compute::Compute,
    lattice::{Fcc, Lattice},
    output::TrajectoryWriter,
    statistics::{Estimate, ProductionStats},
    AtomicPotential, Atoms, Barostat, Berendsen, Container, Error, ExperimentConfig, Recorder,
    Simulation, Thermostat, Verlet,
};

const ENERGY_COLUMNS: [Compute; 3] = [Compute::KineticE, Compute::PotentialE, Compute::TotalE];
const STATE_COLUMNS: [Compute; 2] = [Compute::Temperature, Compute::Pressure];

/// Which equilibration stage a phase belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Coupled to an elevated temperature to leave the crystal
    Melt,
    /// Coupled to the target state
    Equilibration,
}
impl Phase {
    fn file_suffix(&self) -> &'static str {
        match self {
            Phase::Melt => "melt",
            Phase::Equilibration => "eq",
        }
    }
}

/// Series and final box of one equilibration phase
pub struct PhaseReport {
    pub phase: Phase,
    pub target_temperature: f64,
    pub recorder: Recorder,
    pub box_length: f64,
}

/// Series and statistics of one production run
pub struct RunReport {
    pub recorder: Recorder,
    pub stats: ProductionStats,
}

pub struct ExperimentReport {
    pub num_atoms: usize,
    pub equilibration: Vec<PhaseReport>,
    pub production: Vec<RunReport>,
    /// Volume of the box used for production
    pub volume: f64,
    pub heat_capacity_kinetic: Estimate,
    pub heat_capacity_potential: Estimate,
}

/// Runs the melt, equilibration and production phases of one experiment
pub struct Experiment {
    config: ExperimentConfig,
}
impl Experiment {
    pub fn new(config: ExperimentConfig) -> Self {
        Self { config }
    }

    /// Perturbed FCC crystal in a box of `unit_cells` cells per edge
    pub fn build<A: AtomicPotential, R: Rng + ?Sized>(
        &self,
        atomic_potential: A,
        rng: &mut R,
    ) -> Simulation<A> {
        let config = &self.config;
        let params = config.run_parameters();
        let lattice = Fcc::from_cell_volume(config.cell_volume);
        let a0 = lattice.lattice_constant();

        let mut atoms = Atoms::from_coords(config.mass, lattice.coords(config.unit_cells));
        atoms.perturb(config.perturbation * a0, rng);
        if let Some(temperature) = config.initial_temperature {
            atoms.set_temperature(temperature, params.boltzmann, rng);
        }

        let container = Container::new(a0 * config.unit_cells as f64);
        Simulation::new(params, atoms, atomic_potential, container)
    }

    pub fn run<A: AtomicPotential>(&self, atomic_potential: A) -> Result<ExperimentReport, Error> {
        let config = &self.config;
        config.validate()?;
        if let Some(dir) = &config.output_dir {
            std::fs::create_dir_all(dir).map_err(Error::io(dir))?;
        }

        let mut rng = StdRng::seed_from_u64(config.seed);
        let mut sim = self.build(atomic_potential, &mut rng);
        info!(
            "{} atoms, target {:.2} K, box length {:.4}, seed {}",
            sim.num_atoms(),
            config.target_temperature,
            sim.container().length(),
            config.seed
        );

        let mut equilibration = Vec::new();
        if config.needs_melt() {
            let melt_temperature = config.target_temperature + config.melt_offset;
            equilibration.push(self.equilibrate(&mut sim, Phase::Melt, melt_temperature)?);
        }
        equilibration.push(self.equilibrate(
            &mut sim,
            Phase::Equilibration,
            config.target_temperature,
        )?);
        info!("Equilibration done. V: {:.4}", sim.container().volume());

        let mut production = Vec::with_capacity(config.num_runs);
        for run_index in 0..config.num_runs {
            production.push(self.produce(&mut sim, run_index)?);
        }

        let kinetic: Vec<f64> = production
            .iter()
            .map(|r| r.stats.heat_capacity_kinetic)
            .collect();
        let potential: Vec<f64> = production
            .iter()
            .map(|r| r.stats.heat_capacity_potential)
            .collect();
        let report = ExperimentReport {
            num_atoms: sim.num_atoms(),
            equilibration,
            production,
            volume: sim.container().volume(),
            heat_capacity_kinetic: Estimate::from_samples(&kinetic),
            heat_capacity_potential: Estimate::from_samples(&potential),
        };
        info!(
            "mean for e_kin: C_V = {:.4} Å^2/(ps^2 K), std {:.5}",
            report.heat_capacity_kinetic.mean, report.heat_capacity_kinetic.std_dev
        );
        info!(
            "mean for e_pot: C_V = {:.4} Å^2/(ps^2 K), std {:.5}",
            report.heat_capacity_potential.mean, report.heat_capacity_potential.std_dev
        );
        Ok(report)
    }

    /// Berendsen-coupled phase; the box keeps the length it relaxed to
    fn equilibrate<A: AtomicPotential>(
        &self,
        sim: &mut Simulation<A>,
        phase: Phase,
        target_temperature: f64,
    ) -> Result<PhaseReport, Error> {
        let config = &self.config;
        let num_steps = config.equilibration_steps();
        info!(
            "{:?} phase: {} steps at {:.2} K",
            phase, num_steps, target_temperature
        );

        let mut integrator = Berendsen::new(
            Some(Thermostat::new(target_temperature, config.tau_t)),
            Some(Barostat::new(
                config.target_pressure_internal(),
                config.tau_p,
                config.kappa,
            )),
        );
        let mut recorder = Recorder::new(num_steps, sim.params().pressure_conversion);
        sim.run(&mut integrator, num_steps, &mut recorder)?;

        if let Some(dir) = &config.output_dir {
            let suffix = phase.file_suffix();
            let timestep = sim.timestep();
            recorder
                .table(&ENERGY_COLUMNS, timestep, 0.0)
                .save(dir.join(format!("plote_{}.dat", suffix)))?;
            recorder
                .table(&STATE_COLUMNS, timestep, 0.0)
                .save(dir.join(format!("plottp_{}.dat", suffix)))?;
        }
        debug!(
            "{:?} phase ended at T = {:?} K, L = {:.5}",
            phase,
            recorder.series(Compute::Temperature).last(),
            sim.container().length()
        );

        Ok(PhaseReport {
            phase,
            target_temperature,
            recorder,
            box_length: sim.container().length(),
        })
    }

    /// Uncoupled velocity-Verlet run at the current box
    fn produce<A: AtomicPotential>(
        &self,
        sim: &mut Simulation<A>,
        run_index: usize,
    ) -> Result<RunReport, Error> {
        let config = &self.config;
        let num_steps = config.production_steps();
        let timestep = sim.timestep();
        let suffix = if config.num_runs > 1 {
            format!("_run{}", run_index)
        } else {
            String::new()
        };

        let mut recorder = Recorder::new(num_steps, sim.params().pressure_conversion);
        if let Some(dir) = &config.output_dir {
            let writer = TrajectoryWriter::create(dir.join(format!("plotpos{}.dat", suffix)))?;
            recorder = recorder.with_position_log(writer, timestep);
        }
        sim.run(&mut Verlet::new(), num_steps, &mut recorder)?;
        recorder.finish()?;

        if let Some(dir) = &config.output_dir {
            write_tables(&recorder, dir, &suffix, timestep)?;
        }

        let stats = ProductionStats::from_recorder(
            &recorder,
            sim.num_atoms(),
            sim.params().boltzmann,
            sim.atoms.total_mass(),
        );
        info!("Average temperature: {:.4} K", stats.mean_temperature);
        info!("Average pressure: {:.4} bar", stats.mean_pressure);
        info!(
            "for e_kin: C_V = {:.4} Å^2/(ps^2 K)",
            stats.heat_capacity_kinetic
        );
        info!(
            "for e_pot: C_V = {:.4} Å^2/(ps^2 K)",
            stats.heat_capacity_potential
        );

        Ok(RunReport { recorder, stats })
    }
}

fn write_tables(recorder: &Recorder, dir: &Path, suffix: &str, timestep: f64) -> Result<(), Error> {
    recorder
        .table(&ENERGY_COLUMNS, timestep, 0.0)
        .save(dir.join(format!("plote{}.dat", suffix)))?;
    recorder
        .table(&STATE_COLUMNS, timestep, 0.0)
        .save(dir.join(format!("plottp{}.dat", suffix)))
}
