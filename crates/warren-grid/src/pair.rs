//! Double-buffered source/scratch pair with atomic commit.
//!
//! [`GridPair`] is the state-transition backbone of a generation. The
//! lifecycle per phase is:
//!
//! 1. [`begin_phase()`](GridPair::begin_phase) — seed the scratch buffer
//!    as a copy of the source and hand out a [`PhaseGuard`]
//! 2. Phase rules read `guard.source` and write `guard.scratch`
//! 3. [`commit()`](GridPair::commit) — swap: scratch becomes the source
//!    for the next phase or generation
//!
//! There are no partial commits: until `commit` runs, readers of
//! [`current()`](GridPair::current) observe the pre-phase state.

use std::mem;

use crate::buffer::CellBuffer;
use crate::error::GridError;

/// Borrowed view of an open phase: the immutable pre-phase snapshot and
/// the writable scratch buffer.
///
/// The guard's borrows keep the pair locked for the duration of the
/// phase; the borrow checker prevents a commit while the guard is alive.
#[must_use]
pub struct PhaseGuard<'a> {
    /// The pre-phase snapshot. Scan and predicate checks read this.
    pub source: &'a CellBuffer,
    /// The scratch buffer, seeded as a copy of `source`.
    pub scratch: &'a mut CellBuffer,
}

/// Two same-shape buffers alternating between source and scratch roles.
#[derive(Clone, Debug)]
pub struct GridPair {
    front: CellBuffer,
    back: CellBuffer,
    phase_open: bool,
}

impl GridPair {
    /// Create a pair whose source buffer is `initial`.
    pub fn new(initial: CellBuffer) -> Self {
        let back = initial.clone();
        Self {
            front: initial,
            back,
            phase_open: false,
        }
    }

    /// The committed (source) buffer.
    pub fn current(&self) -> &CellBuffer {
        &self.front
    }

    /// Open a phase: seed scratch from the source and return the guard.
    ///
    /// Returns `Err(GridError::PhaseAlreadyOpen)` if a previous phase was
    /// opened and never committed.
    pub fn begin_phase(&mut self) -> Result<PhaseGuard<'_>, GridError> {
        if self.phase_open {
            return Err(GridError::PhaseAlreadyOpen);
        }
        self.phase_open = true;
        self.back.clone_from(&self.front);
        Ok(PhaseGuard {
            source: &self.front,
            scratch: &mut self.back,
        })
    }

    /// Commit the open phase: scratch becomes the new source.
    ///
    /// Returns `Err(GridError::NoPhaseOpen)` if no phase is open.
    pub fn commit(&mut self) -> Result<(), GridError> {
        if !self.phase_open {
            return Err(GridError::NoPhaseOpen);
        }
        mem::swap(&mut self.front, &mut self.back);
        self.phase_open = false;
        Ok(())
    }
}
