//! Grid-specific error types.

use std::error::Error;
use std::fmt;

/// Errors from buffer construction or the phase/commit protocol.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// Attempted to construct a buffer with zero cells.
    EmptyGrid,
    /// A grid axis exceeds the supported maximum.
    DimensionTooLarge {
        /// Which axis (`"rows"` or `"cols"`).
        name: &'static str,
        /// The requested value.
        value: u32,
        /// The maximum permitted value.
        max: u32,
    },
    /// `begin_phase` was called while a phase was already open.
    PhaseAlreadyOpen,
    /// `commit` was called with no open phase.
    NoPhaseOpen,
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid must have at least one cell"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} = {value} exceeds the maximum of {max}")
            }
            Self::PhaseAlreadyOpen => {
                write!(f, "begin_phase called while a phase is already open")
            }
            Self::NoPhaseOpen => write!(f, "commit called with no open phase"),
        }
    }
}

impl Error for GridError {}
