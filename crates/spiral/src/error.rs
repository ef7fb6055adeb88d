//! Error types for grid validation and traversal configuration.

use std::error::Error;
use std::fmt;

/// Errors arising from a grid that does not describe a rectangle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// A row's length differs from the first row's length.
    Jagged {
        /// Index of the first offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },
    /// A flat row-major buffer does not hold `rows * cols` cells.
    LengthMismatch {
        /// Cell count implied by the shape.
        expected: usize,
        /// Actual buffer length.
        found: usize,
    },
    /// `rows * cols` does not fit in `usize`.
    TooLarge {
        /// Requested row count.
        rows: usize,
        /// Requested column count.
        cols: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Jagged {
                row,
                expected,
                found,
            } => {
                write!(
                    f,
                    "grid is not rectangular: row {row} has {found} cells, expected {expected}"
                )
            }
            Self::LengthMismatch { expected, found } => {
                write!(f, "buffer holds {found} cells, shape requires {expected}")
            }
            Self::TooLarge { rows, cols } => {
                write!(f, "shape {rows}x{cols} cell count overflows usize")
            }
        }
    }
}

impl Error for GridError {}

/// Errors from an invalid [`SpiralConfig`](crate::SpiralConfig).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The rendering separator is the empty string.
    EmptySeparator,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySeparator => write!(f, "separator must not be empty"),
        }
    }
}

impl Error for ConfigError {}

/// Top-level error returned by configured traversals.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SpiralError {
    /// The input grid was rejected.
    Grid(GridError),
    /// The configuration was rejected.
    Config(ConfigError),
}

impl fmt::Display for SpiralError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "invalid grid: {e}"),
            Self::Config(e) => write!(f, "invalid config: {e}"),
        }
    }
}

impl Error for SpiralError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            Self::Config(e) => Some(e),
        }
    }
}

impl From<GridError> for SpiralError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

impl From<ConfigError> for SpiralError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}
