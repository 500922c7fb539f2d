//! Error types for the loader and the viewer.

use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, PlotterError>;

/// Fatal errors; every one of them ends the process.
#[derive(Debug, Error)]
pub enum PlotterError {
    /// The input file could not be opened or read.
    #[error("failed to open {}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A row of the input could not be turned into a reading.
    #[error("could not parse humidity readings")]
    Parse(#[from] ParseError),

    /// The interactive viewer could not be started.
    #[error("viewer error: {0}")]
    Render(String),
}

/// Why a row was rejected. Loading stops at the first one.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("line {line}: expected at least 2 fields, found {found}")]
    MissingField { line: u64, found: usize },

    #[error("line {line}: '{value}' is not a base-10 integer")]
    InvalidInteger {
        line: u64,
        value: String,
        #[source]
        source: ParseIntError,
    },

    /// Invalid CSV, e.g. text that is not UTF-8.
    #[error("could not read CSV data")]
    Csv(#[from] csv::Error),
}

impl PlotterError {
    pub fn file_access(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileAccess {
            path: path.into(),
            source,
        }
    }
}

impl From<eframe::Error> for PlotterError {
    fn from(err: eframe::Error) -> Self {
        Self::Render(err.to_string())
    }
}
