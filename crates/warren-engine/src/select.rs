//! Deterministic direction selection.
//!
//! Movement in the habitat is never random: given the same grid, the same
//! generation index, and the same origin cell, [`choose_move`] always
//! picks the same target. This closed-form selection is the simulation's
//! sole tie-break mechanism and what makes whole runs reproducible
//! bit-for-bit.

use warren_core::{Cell, Generation, Pos};
use warren_grid::CellBuffer;

/// Compass direction, enumerated in the fixed clockwise order the
/// selection formula numbers them: north, east, south, west.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Direction {
    /// Row − 1.
    North = 0,
    /// Col + 1.
    East = 1,
    /// Row + 1.
    South = 2,
    /// Col − 1.
    West = 3,
}

impl Direction {
    /// The four directions in clockwise enumeration order.
    pub const CLOCKWISE: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// `(row_offset, col_offset)` for this direction.
    pub fn offset(self) -> (i64, i64) {
        match self {
            Direction::North => (-1, 0),
            Direction::East => (0, 1),
            Direction::South => (1, 0),
            Direction::West => (0, -1),
        }
    }
}

/// Padding for table entries beyond a mask's popcount; never selected.
const X: u8 = u8::MAX;

/// `NTH_VIABLE[mask][n]` is the direction index of the n-th set bit of
/// `mask`, counting set bits in ascending bit order. The mask is closed
/// over 4 directions, so the whole mapping fits in 16 rows.
const NTH_VIABLE: [[u8; 4]; 16] = [
    [X, X, X, X], // 0b0000
    [0, X, X, X], // 0b0001
    [1, X, X, X], // 0b0010
    [0, 1, X, X], // 0b0011
    [2, X, X, X], // 0b0100
    [0, 2, X, X], // 0b0101
    [1, 2, X, X], // 0b0110
    [0, 1, 2, X], // 0b0111
    [3, X, X, X], // 0b1000
    [0, 3, X, X], // 0b1001
    [1, 3, X, X], // 0b1010
    [0, 1, 3, X], // 0b1011
    [2, 3, X, X], // 0b1100
    [0, 2, 3, X], // 0b1101
    [1, 2, 3, X], // 0b1110
    [0, 1, 2, 3], // 0b1111
];

/// Deterministically choose a movement target for the agent at `origin`.
///
/// A direction is viable iff its target coordinate is in bounds and the
/// source grid's cell there satisfies `viable`. With `P` viable
/// directions, the one chosen is the `(generation + row + col) mod P`-th,
/// counting viable directions in clockwise enumeration order.
///
/// Returns `None` when no direction is viable — a normal outcome (the
/// agent stays put), not a fault.
pub fn choose_move(
    grid: &CellBuffer,
    generation: Generation,
    origin: Pos,
    viable: impl Fn(&Cell) -> bool,
) -> Option<Pos> {
    let mut mask = 0usize;
    let mut targets = [origin; 4];

    for (i, dir) in Direction::CLOCKWISE.iter().enumerate() {
        let (dr, dc) = dir.offset();
        let row = origin.row as i64 + dr;
        let col = origin.col as i64 + dc;
        if let Some(cell) = grid.probe(row, col) {
            if viable(&cell) {
                mask |= 1 << i;
                targets[i] = Pos::new(row as u32, col as u32);
            }
        }
    }

    if mask == 0 {
        return None;
    }

    let p = mask.count_ones() as u64;
    let choice = (generation.0 + origin.row as u64 + origin.col as u64) % p;
    let dir_index = NTH_VIABLE[mask][choice as usize];
    debug_assert_ne!(dir_index, X);
    Some(targets[dir_index as usize])
}
