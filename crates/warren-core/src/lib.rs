//! Core types for the Warren habitat simulation.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! cell and agent state model, grid coordinates, the generation counter,
//! and the immutable world configuration shared by every other crate in
//! the workspace.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod config;
pub mod pos;

pub use cell::{Cell, CellKind, Fox, Rabbit};
pub use config::{ConfigError, WorldConfig};
pub use pos::{Generation, Pos};
