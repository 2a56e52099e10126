//! Grid storage for the Warren habitat simulation.
//!
//! This crate owns the two-buffer state model the generation engine is
//! built on: [`CellBuffer`] is a flat, row-major array of cells with
//! bounds-checked addressing, and [`GridPair`] couples two same-shape
//! buffers into a source/scratch pair with an atomic commit step.
//!
//! A phase never mutates the buffer it reads. Writes go to the scratch
//! buffer (seeded as a copy of the source when the phase opens) and
//! become visible only when the pair commits.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod buffer;
pub mod error;
pub mod pair;

pub use buffer::{CellBuffer, Census};
pub use error::GridError;
pub use pair::{GridPair, PhaseGuard};
