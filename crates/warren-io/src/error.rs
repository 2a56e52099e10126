//! Errors from world-file loading.

use std::error::Error;
use std::fmt;
use std::path::PathBuf;

use warren_core::ConfigError;
use warren_grid::GridError;

/// Errors from reading or parsing a world file.
///
/// All variants are fail-fast: no partial world ever escapes the loader.
#[derive(Debug)]
pub enum LoadError {
    /// The file could not be read.
    Io {
        /// Path that failed to open or read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
    /// The input ended before a required field.
    MissingField {
        /// Name of the missing field.
        field: &'static str,
    },
    /// A numeric field failed to parse.
    InvalidNumber {
        /// Name of the field.
        field: &'static str,
        /// The offending token.
        token: String,
    },
    /// An object line names an unrecognized type.
    UnknownObject {
        /// The offending token.
        token: String,
    },
    /// An object's coordinates fall outside the declared grid.
    OutOfBounds {
        /// The object's type.
        kind: warren_core::CellKind,
        /// Declared row.
        row: u32,
        /// Declared column.
        col: u32,
        /// Grid height.
        rows: u32,
        /// Grid width.
        cols: u32,
    },
    /// The configuration line is self-inconsistent.
    InvalidConfig(ConfigError),
    /// Grid construction rejected the declared shape.
    Grid(GridError),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read '{}': {source}", path.display())
            }
            Self::MissingField { field } => {
                write!(f, "input ended before required field '{field}'")
            }
            Self::InvalidNumber { field, token } => {
                write!(f, "field '{field}': '{token}' is not a valid number")
            }
            Self::UnknownObject { token } => {
                write!(f, "unrecognized object type '{token}'")
            }
            Self::OutOfBounds {
                kind,
                row,
                col,
                rows,
                cols,
            } => {
                write!(
                    f,
                    "{kind:?} at ({row}, {col}) outside the {rows}x{cols} grid"
                )
            }
            Self::InvalidConfig(err) => write!(f, "invalid configuration: {err}"),
            Self::Grid(err) => write!(f, "grid construction failed: {err}"),
        }
    }
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::InvalidConfig(err) => Some(err),
            Self::Grid(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ConfigError> for LoadError {
    fn from(err: ConfigError) -> Self {
        Self::InvalidConfig(err)
    }
}

impl From<GridError> for LoadError {
    fn from(err: GridError) -> Self {
        Self::Grid(err)
    }
}
