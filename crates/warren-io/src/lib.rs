//! Textual interfaces around the Warren simulation core.
//!
//! Three thin wrappers, none of which carries simulation logic:
//!
//! - [`loader`] parses the world-file format into a configuration and an
//!   initial grid, failing fast on any malformed input.
//! - [`report`] serializes a grid back to the same format and renders
//!   the bordered ASCII view.
//! - [`compare`] structurally compares two worlds by configuration and
//!   per-cell kind, for golden-file regression runs.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod compare;
pub mod error;
pub mod loader;
pub mod report;

pub use compare::{compare_worlds, Mismatch};
pub use error::LoadError;
pub use loader::{load_world, parse_world};
pub use report::{render_view, serialize_world};
