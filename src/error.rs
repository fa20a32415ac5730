use std::{fmt, io, path::PathBuf};

/// The result type used across the whole crate.
pub type Result<T> = std::result::Result<T, TrainError>;

/// All errors that can occur while loading data or training.
#[derive(Debug)]
pub enum TrainError {
    /// Invalid configuration — caught before any restart begins.
    InvalidConfig(String),
    /// A dataset file does not exist or could not be read.
    DatasetNotFound { path: PathBuf, source: io::Error },
    /// A dataset row could not be turned into an instance.
    DatasetMalformed {
        path: PathBuf,
        line: usize,
        detail: String,
    },
    /// A vector's length does not match what the network topology dictates.
    DimensionMismatch {
        what: &'static str,
        got: usize,
        expected: usize,
    },
    /// The objective produced a non-finite value.
    NumericAnomaly { value: f32 },
}

impl fmt::Display for TrainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            Self::DatasetNotFound { path, source } => {
                write!(f, "cannot read dataset {}: {source}", path.display())
            }
            Self::DatasetMalformed { path, line, detail } => {
                write!(f, "malformed dataset {} at line {line}: {detail}", path.display())
            }
            Self::DimensionMismatch {
                what,
                got,
                expected,
            } => {
                write!(f, "dimension mismatch for {what}: got {got}, expected {expected}")
            }
            Self::NumericAnomaly { value } => {
                write!(f, "objective produced a non-finite value ({value})")
            }
        }
    }
}

impl std::error::Error for TrainError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::DatasetNotFound { source, .. } => Some(source),
            _ => None,
        }
    }
}
