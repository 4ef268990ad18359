use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use super::{format_row, Series};
use crate::Error;

/// An ordered set of equally long series written side by side, one row per
/// step, with the time stamp `i * timestep + t0` in the first column.
pub struct Table<'a> {
    timestep: f64,
    t0: f64,
    columns: Vec<&'a Series>,
}
impl<'a> Table<'a> {
    pub fn new(timestep: f64, t0: f64) -> Self {
        Self {
            timestep,
            t0,
            columns: Vec::new(),
        }
    }
    /// Append a column
    pub fn with(mut self, series: &'a Series) -> Self {
        self.columns.push(series);
        self
    }
    pub fn columns(&self) -> &[&'a Series] {
        &self.columns
    }
    /// Number of rows, checking that every column has the same length
    pub fn num_rows(&self) -> Result<usize, Error> {
        let expected = match self.columns.first() {
            Some(s) => s.len(),
            None => return Ok(0),
        };
        match self.columns.iter().find(|s| s.len() != expected) {
            Some(s) => Err(Error::SeriesLengthMismatch {
                name: s.name().to_string(),
                expected,
                found: s.len(),
            }),
            None => Ok(expected),
        }
    }
    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<(), Error> {
        let num_rows = self.num_rows()?;
        self.write_rows(out, num_rows)?;
        Ok(())
    }
    /// Write the table to `path`, replacing any existing file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        let path = path.as_ref();
        let num_rows = self.num_rows()?;
        let file = File::create(path).map_err(Error::io(path))?;
        let mut out = BufWriter::new(file);
        self.write_rows(&mut out, num_rows)
            .and_then(|_| out.flush())
            .map_err(Error::io(path))
    }

    fn write_rows<W: Write>(&self, out: &mut W, num_rows: usize) -> std::io::Result<()> {
        for i in 0..num_rows {
            let time = i as f64 * self.timestep + self.t0;
            let row = format_row(time, self.columns.iter().map(|s| s.values()[i]));
            out.write_all(row.as_bytes())?;
        }
        Ok(())
    }
}
