use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use super::format_row;
use crate::Error;

/// Number of atoms whose raw coordinates are written each step
pub const SAMPLED_ATOMS: usize = 3;

/// Per-step position log: time, the coordinates of the first atoms, and the
/// total displacement of all atoms since the start of the phase
pub struct TrajectoryWriter {
    out: Box<dyn Write>,
    /// Backing file, named in write errors
    path: Option<PathBuf>,
}
impl TrajectoryWriter {
    pub fn new<W: Write + 'static>(out: W) -> Self {
        Self {
            out: Box::new(out),
            path: None,
        }
    }
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        let file = File::create(path).map_err(Error::io(path))?;
        Ok(Self {
            out: Box::new(BufWriter::new(file)),
            path: Some(path.to_path_buf()),
        })
    }
    pub fn write_step(
        &mut self,
        time: f64,
        positions: &[[f64; 3]],
        total_displacement: f64,
    ) -> Result<(), Error> {
        let values = positions
            .iter()
            .take(SAMPLED_ATOMS)
            .flat_map(|p| p.iter().copied())
            .chain(std::iter::once(total_displacement));
        let result = self.out.write_all(format_row(time, values).as_bytes());
        result.map_err(|e| self.error(e))
    }
    pub fn flush(&mut self) -> Result<(), Error> {
        let result = self.out.flush();
        result.map_err(|e| self.error(e))
    }

    fn error(&self, source: std::io::Error) -> Error {
        match &self.path {
            Some(path) => Error::Io {
                path: path.clone(),
                source,
            },
            None => Error::Write(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::*;

    #[derive(Clone, Default)]
    struct Shared(Rc<RefCell<Vec<u8>>>);
    impl Write for Shared {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.borrow_mut().write(buf)
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn writes_first_three_atoms_and_displacement() {
        let buffer = Shared::default();
        let mut writer = TrajectoryWriter::new(buffer.clone());
        let positions = vec![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0], [0.0; 3]];
        writer.write_step(0.25, &positions, 1.5).unwrap();
        writer.flush().unwrap();
        assert_eq!(
            String::from_utf8(buffer.0.borrow().clone()).unwrap(),
            "0.250000 1.000000 2.000000 3.000000 4.000000 5.000000 6.000000 \
             7.000000 8.000000 9.000000 1.500000 \n"
        );
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn failed_write_names_the_file() {
        let path = Path::new("/dev/full");
        let mut writer = TrajectoryWriter::create(path).unwrap();
        let positions = vec![[0.0; 3]; 3];
        let result = (0..1000)
            .try_for_each(|i| writer.write_step(i as f64, &positions, 0.0))
            .and_then(|_| writer.flush());
        match result {
            Err(Error::Io { path: p, .. }) => assert_eq!(p, path),
            other => panic!("unexpected result {:?}", other),
        }
    }
}
