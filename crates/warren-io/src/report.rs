//! World serialization: the report format and the bordered ASCII view.

use warren_core::{Pos, WorldConfig};
use warren_grid::CellBuffer;

/// Serialize a world back to the world-file format.
///
/// The first line carries the six configuration integers plus the number
/// of populated cells; one `TYPE row col` line follows per populated
/// cell, in row-major order. Counters are not persisted — the format
/// carries cell kinds only.
pub fn serialize_world(config: &WorldConfig, grid: &CellBuffer) -> String {
    let census = grid.census();
    let mut out = String::new();
    out.push_str(&format!(
        "{} {} {} {} {} {} {}\n",
        config.gen_proc_rabbits,
        config.gen_proc_foxes,
        config.gen_food_foxes,
        config.n_gen,
        config.n_rows,
        config.n_cols,
        census.occupied(),
    ));
    for at in grid.positions() {
        if let Some(token) = grid.get(at).kind().token() {
            out.push_str(&format!("{token} {} {}\n", at.row, at.col));
        }
    }
    out
}

/// Render the bordered ASCII view of a grid.
///
/// One character per cell (`*` rock, `R` rabbit, `F` fox, space empty),
/// one grid row per line, `|` at the row edges, and a `-` border of
/// width `cols + 2` above and below.
pub fn render_view(grid: &CellBuffer) -> String {
    let border = "-".repeat(grid.cols() as usize + 2);
    let mut out = String::with_capacity(
        (grid.rows() as usize + 2) * (grid.cols() as usize + 3),
    );
    out.push_str(&border);
    out.push('\n');
    for row in 0..grid.rows() {
        out.push('|');
        for col in 0..grid.cols() {
            out.push(grid.get(Pos::new(row, col)).kind().glyph());
        }
        out.push_str("|\n");
    }
    out.push_str(&border);
    out.push('\n');
    out
}
