//! Generation-update engine for the Warren habitat simulation.
//!
//! The engine advances a bounded 2D habitat of rocks, rabbits, and foxes
//! through discrete generations under fixed movement, predation, aging,
//! procreation, and starvation rules. Each generation runs the rabbit
//! phase to completion, commits it, then runs the fox phase against the
//! committed grid.
//!
//! Everything is deterministic: [`select::choose_move`] resolves every
//! movement decision from `(generation, row, col)` and a 4-bit viability
//! mask, and the row-major scan order fixes every conflict tie-break.
//! Identical inputs produce bit-identical grids on every run.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod fox;
pub mod rabbit;
pub mod select;
pub mod sim;
pub mod stats;

pub use select::{choose_move, Direction};
pub use sim::Simulation;
pub use stats::{GenerationReport, PhaseStats};
