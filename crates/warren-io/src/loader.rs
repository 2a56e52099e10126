//! World-file parsing.
//!
//! The format is a whitespace-separated token stream: six configuration
//! integers (`gen_proc_rabbits gen_proc_foxes gen_food_foxes n_gen
//! n_rows n_cols`), an object count, then that many `TYPE row col`
//! triples with `TYPE` one of `ROCK`, `RABBIT`, `FOX`. Newlines and
//! spaces are interchangeable. Agents enter the world with all counters
//! at zero; a later placement for the same cell overwrites an earlier
//! one.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use log::debug;
use warren_core::{CellKind, Pos, WorldConfig};
use warren_grid::CellBuffer;

use crate::error::LoadError;

/// Whitespace token cursor with field-name error reporting.
struct Tokens<'a> {
    iter: std::str::SplitWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            iter: input.split_whitespace(),
        }
    }

    fn next(&mut self, field: &'static str) -> Result<&'a str, LoadError> {
        self.iter.next().ok_or(LoadError::MissingField { field })
    }

    fn next_number<T: FromStr>(&mut self, field: &'static str) -> Result<T, LoadError> {
        let token = self.next(field)?;
        token.parse().map_err(|_| LoadError::InvalidNumber {
            field,
            token: token.to_string(),
        })
    }
}

/// Parse a world description from text.
///
/// Returns the immutable run configuration and the initial grid. Fails
/// fast on the first malformed token, unknown object type, or
/// out-of-bounds placement; no partial world is ever returned.
pub fn parse_world(input: &str) -> Result<(WorldConfig, CellBuffer), LoadError> {
    let mut tokens = Tokens::new(input);

    let config = WorldConfig {
        gen_proc_rabbits: tokens.next_number("gen_proc_rabbits")?,
        gen_proc_foxes: tokens.next_number("gen_proc_foxes")?,
        gen_food_foxes: tokens.next_number("gen_food_foxes")?,
        n_gen: tokens.next_number("n_gen")?,
        n_rows: tokens.next_number("n_rows")?,
        n_cols: tokens.next_number("n_cols")?,
    };
    config.validate()?;

    let mut grid = CellBuffer::new(config.n_rows, config.n_cols)?;

    let n_objects: u32 = tokens.next_number("object count")?;
    for _ in 0..n_objects {
        let token = tokens.next("object type")?;
        let kind = CellKind::from_token(token).ok_or_else(|| LoadError::UnknownObject {
            token: token.to_string(),
        })?;
        let row: u32 = tokens.next_number("object row")?;
        let col: u32 = tokens.next_number("object col")?;
        if row >= config.n_rows || col >= config.n_cols {
            return Err(LoadError::OutOfBounds {
                kind,
                row,
                col,
                rows: config.n_rows,
                cols: config.n_cols,
            });
        }
        grid.set(Pos::new(row, col), kind.place());
    }

    Ok((config, grid))
}

/// Read and parse a world file.
pub fn load_world(path: impl AsRef<Path>) -> Result<(WorldConfig, CellBuffer), LoadError> {
    let path = path.as_ref();
    let input = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let (config, grid) = parse_world(&input)?;
    let census = grid.census();
    debug!(
        "loaded '{}': {}x{} grid, {} objects, {} generations",
        path.display(),
        config.n_rows,
        config.n_cols,
        census.occupied(),
        config.n_gen,
    );
    Ok((config, grid))
}
