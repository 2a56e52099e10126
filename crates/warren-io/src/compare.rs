//! Structural world comparison for golden-file regression runs.

use std::fmt;

use warren_core::{CellKind, Pos, WorldConfig};
use warren_grid::CellBuffer;

/// The first difference found between two worlds.
///
/// Comparison covers the configuration fields and per-cell *kind* only;
/// agent counters are deliberately ignored, matching what the world-file
/// format can express.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Mismatch {
    /// A configuration field differs.
    Config {
        /// Field name.
        field: &'static str,
        /// Left-hand value.
        left: u64,
        /// Right-hand value.
        right: u64,
    },
    /// The grids have different shapes.
    Shape {
        /// Left-hand `(rows, cols)`.
        left: (u32, u32),
        /// Right-hand `(rows, cols)`.
        right: (u32, u32),
    },
    /// A cell holds different kinds in the two worlds.
    Cell {
        /// The differing coordinate.
        at: Pos,
        /// Left-hand kind.
        left: CellKind,
        /// Right-hand kind.
        right: CellKind,
    },
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config { field, left, right } => {
                write!(f, "configuration field '{field}' differs: {left} vs {right}")
            }
            Self::Shape { left, right } => {
                write!(
                    f,
                    "grid shapes differ: {}x{} vs {}x{}",
                    left.0, left.1, right.0, right.1
                )
            }
            Self::Cell { at, left, right } => {
                write!(f, "cell {at} differs: {left:?} vs {right:?}")
            }
        }
    }
}

/// Compare two worlds structurally.
///
/// Configuration fields are checked first (in declaration order), then
/// every cell's kind in row-major order. Returns the first difference,
/// or `Ok(())` when the worlds match.
pub fn compare_worlds(
    left_config: &WorldConfig,
    left_grid: &CellBuffer,
    right_config: &WorldConfig,
    right_grid: &CellBuffer,
) -> Result<(), Mismatch> {
    let fields: [(&'static str, u64, u64); 6] = [
        (
            "gen_proc_rabbits",
            left_config.gen_proc_rabbits.into(),
            right_config.gen_proc_rabbits.into(),
        ),
        (
            "gen_proc_foxes",
            left_config.gen_proc_foxes.into(),
            right_config.gen_proc_foxes.into(),
        ),
        (
            "gen_food_foxes",
            left_config.gen_food_foxes.into(),
            right_config.gen_food_foxes.into(),
        ),
        ("n_gen", left_config.n_gen, right_config.n_gen),
        ("n_rows", left_config.n_rows.into(), right_config.n_rows.into()),
        ("n_cols", left_config.n_cols.into(), right_config.n_cols.into()),
    ];
    for (field, left, right) in fields {
        if left != right {
            return Err(Mismatch::Config { field, left, right });
        }
    }

    let left_shape = (left_grid.rows(), left_grid.cols());
    let right_shape = (right_grid.rows(), right_grid.cols());
    if left_shape != right_shape {
        return Err(Mismatch::Shape {
            left: left_shape,
            right: right_shape,
        });
    }

    for at in left_grid.positions() {
        let left = left_grid.get(at).kind();
        let right = right_grid.get(at).kind();
        if left != right {
            return Err(Mismatch::Cell { at, left, right });
        }
    }

    Ok(())
}
