use std::path::PathBuf;

use thiserror::Error;

/// Error types
#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to write output file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write output: {0}")]
    Write(#[from] std::io::Error),

    #[error("Numerical instability at step {step}: {quantity} = {value}")]
    NumericalInstability {
        step: usize,
        quantity: &'static str,
        value: f64,
    },

    #[error("Invalid value {value} for parameter '{name}'")]
    InvalidParameter { name: &'static str, value: f64 },

    #[error("Series '{name}' has {found} values, expected {expected}")]
    SeriesLengthMismatch {
        name: String,
        expected: usize,
        found: usize,
    },

    #[error("Potential cutoff {cutoff} exceeds half the box length {box_length}")]
    CutoffTooLarge { cutoff: f64, box_length: f64 },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| Error::Io { path, source }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
