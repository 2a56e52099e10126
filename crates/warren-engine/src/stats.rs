//! Per-phase and per-generation bookkeeping.

use warren_core::Generation;

/// Counts collected while one species phase runs.
///
/// The population identity `after = before + births − deaths` holds for
/// the acting species of every phase; the fox phase additionally removes
/// `prey_taken` rabbits from the other species' count.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PhaseStats {
    /// Agents of the acting species scanned this phase.
    pub processed: usize,
    /// Agents that moved to a new cell (including moves lost to a
    /// conflict).
    pub moved: usize,
    /// Agents that had no viable target and stayed put.
    pub stayed: usize,
    /// Newborns left at vacated origin cells.
    pub births: usize,
    /// Agents removed: starvation, plus one per destination conflict
    /// (two movers, one survivor).
    pub deaths: usize,
    /// Rabbit cells consumed by hunting foxes. Always 0 in the rabbit
    /// phase.
    pub prey_taken: usize,
}

/// Outcome of one full generation: both phases' statistics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GenerationReport {
    /// Generation counter after this step (1 for the first step).
    pub generation: Generation,
    /// Rabbit-phase statistics.
    pub rabbits: PhaseStats,
    /// Fox-phase statistics.
    pub foxes: PhaseStats,
}
