//! The generation engine: phase sequencing over a [`GridPair`].

use log::{debug, trace};
use warren_core::{ConfigError, Generation, WorldConfig};
use warren_grid::{CellBuffer, GridError, GridPair};

use crate::stats::GenerationReport;
use crate::{fox, rabbit};

/// A deterministic habitat simulation.
///
/// Owns the buffer pair and the immutable configuration, and advances
/// the world one generation at a time: the rabbit phase runs to
/// completion and commits, then the fox phase reads the post-rabbit grid
/// and commits in turn. Phases are never interleaved, and a generation
/// is atomic from the caller's perspective.
///
/// # Determinism
///
/// Identical initial grid and configuration produce bit-identical grids
/// after any number of steps. The row-major scan order and the
/// closed-form direction selection are the whole of the mechanism; there
/// is no randomness anywhere in the engine.
#[derive(Clone, Debug)]
pub struct Simulation {
    config: WorldConfig,
    pair: GridPair,
    generation: Generation,
}

impl Simulation {
    /// Create a simulation from a validated configuration and an initial
    /// grid.
    ///
    /// Returns `Err` if the configuration fails validation or its shape
    /// disagrees with the buffer's.
    pub fn new(config: WorldConfig, initial: CellBuffer) -> Result<Self, ConfigError> {
        config.validate()?;
        if initial.rows() != config.n_rows || initial.cols() != config.n_cols {
            return Err(ConfigError::ShapeMismatch {
                config: (config.n_rows, config.n_cols),
                buffer: (initial.rows(), initial.cols()),
            });
        }
        let census = initial.census();
        debug!(
            "simulation ready: {}x{} grid, {} rocks, {} rabbits, {} foxes, {} generations",
            config.n_rows, config.n_cols, census.rocks, census.rabbits, census.foxes, config.n_gen,
        );
        Ok(Self {
            config,
            pair: GridPair::new(initial),
            generation: Generation(0),
        })
    }

    /// The run configuration.
    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    /// The committed grid as of the last completed generation.
    pub fn grid(&self) -> &CellBuffer {
        self.pair.current()
    }

    /// Generations completed so far.
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Generations left before the configured run completes.
    pub fn remaining(&self) -> u64 {
        self.config.n_gen.saturating_sub(self.generation.0)
    }

    /// `true` once the configured number of generations has run.
    pub fn is_finished(&self) -> bool {
        self.generation.0 >= self.config.n_gen
    }

    /// The configuration as the final report serializes it: `n_gen`
    /// holds the remaining generation count (0 after a complete run).
    pub fn report_config(&self) -> WorldConfig {
        WorldConfig {
            n_gen: self.remaining(),
            ..self.config
        }
    }

    /// Advance the world by exactly one generation.
    ///
    /// Runs the rabbit phase and commits it, then the fox phase against
    /// the post-rabbit grid and commits that. The grid pair is never
    /// observable between the two commits.
    pub fn step(&mut self) -> Result<GenerationReport, GridError> {
        let gen = self.generation;

        let rabbits = {
            let guard = self.pair.begin_phase()?;
            rabbit::run(guard.source, guard.scratch, &self.config, gen)
        };
        self.pair.commit()?;

        let foxes = {
            let guard = self.pair.begin_phase()?;
            fox::run(guard.source, guard.scratch, &self.config, gen)
        };
        self.pair.commit()?;

        self.generation = Generation(gen.0 + 1);

        let census = self.pair.current().census();
        trace!(
            "generation {}: {} rabbits ({} born, {} lost), {} foxes ({} born, {} died, ate {})",
            self.generation,
            census.rabbits,
            rabbits.births,
            rabbits.deaths,
            census.foxes,
            foxes.births,
            foxes.deaths,
            foxes.prey_taken,
        );

        Ok(GenerationReport {
            generation: self.generation,
            rabbits,
            foxes,
        })
    }

    /// Run the remaining generations to completion.
    pub fn run(&mut self) -> Result<(), GridError> {
        while !self.is_finished() {
            self.step()?;
        }
        Ok(())
    }
}
