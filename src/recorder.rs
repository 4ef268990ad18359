use crate::{
    compute::{Compute, Thermo},
    output::{Series, Table, TrajectoryWriter},
    utils::{total_displacement, KeyedVec},
    Atoms, Error,
};

struct PositionLog {
    writer: TrajectoryWriter,
    timestep: f64,
    origin: Vec<[f64; 3]>,
    displacement: Series,
}

/// Per-step series of one phase.
///
/// Every quantity in [`Compute::ALL`] gets one entry per step, with the
/// pressure multiplied by the conversion factor given at construction.
/// With a position log attached, the sampled coordinates and the total
/// displacement since the phase start are also written each step.
pub struct Recorder {
    series: KeyedVec<Compute, Series>,
    pressure_conversion: f64,
    position_log: Option<PositionLog>,
}
impl Recorder {
    /// Recorder with room for `num_steps` entries per series
    pub fn new(num_steps: usize, pressure_conversion: f64) -> Self {
        let mut series = KeyedVec::new();
        for compute in Compute::ALL {
            series.add(compute, Series::with_capacity(compute.name(), num_steps));
        }
        Self {
            series,
            pressure_conversion,
            position_log: None,
        }
    }
    /// Also log positions and total displacement, time-stamped `step * timestep`
    pub fn with_position_log(mut self, writer: TrajectoryWriter, timestep: f64) -> Self {
        self.position_log = Some(PositionLog {
            writer,
            timestep,
            origin: Vec::new(),
            displacement: Series::new("Displacement"),
        });
        self
    }

    /// Mark the reference configuration for displacements
    pub(crate) fn start(&mut self, atoms: &Atoms) {
        if let Some(log) = &mut self.position_log {
            log.origin = atoms.positions().clone();
        }
    }

    /// Append the values of `step`; steps must arrive in order starting at zero
    pub fn record(&mut self, step: usize, thermo: &Thermo, atoms: &Atoms) -> Result<(), Error> {
        assert_eq!(
            step,
            self.len(),
            "Steps should be recorded in order, expected step {}",
            self.len()
        );
        let pressure_conversion = self.pressure_conversion;
        for compute in Compute::ALL {
            if let Some(series) = self.series.get_mut(&compute) {
                series.push(compute.value(thermo, pressure_conversion));
            }
        }

        if let Some(log) = &mut self.position_log {
            if log.origin.is_empty() {
                log.origin = atoms.positions().clone();
            }
            let displacement = total_displacement(&log.origin, atoms.positions());
            log.displacement.push(displacement);
            log.writer
                .write_step(step as f64 * log.timestep, atoms.positions(), displacement)?;
        }
        Ok(())
    }

    /// Flush the position log, if any
    pub fn finish(&mut self) -> Result<(), Error> {
        match &mut self.position_log {
            Some(log) => log.writer.flush(),
            None => Ok(()),
        }
    }

    /// Number of recorded steps
    pub fn len(&self) -> usize {
        self.series(Compute::KineticE).len()
    }
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
    pub fn series(&self, compute: Compute) -> &Series {
        self.series
            .get(&compute)
            .expect("Recorder holds a series for every compute")
    }
    pub fn values(&self, compute: Compute) -> &[f64] {
        self.series(compute).values()
    }
    /// Total displacement per step, when a position log is attached
    pub fn displacement(&self) -> Option<&Series> {
        self.position_log.as_ref().map(|log| &log.displacement)
    }
    /// Table of the given quantities, in the given order
    pub fn table(&self, computes: &[Compute], timestep: f64, t0: f64) -> Table<'_> {
        computes
            .iter()
            .fold(Table::new(timestep, t0), |table, &c| table.with(self.series(c)))
    }
}
