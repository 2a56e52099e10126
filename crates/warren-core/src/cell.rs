//! The per-cell state model: empty ground, immovable rocks, and the two
//! animal species with their lifecycle counters.

use std::fmt;

/// A rabbit's mutable state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rabbit {
    /// Generations since birth or since the last procreation.
    pub age: u32,
}

impl Rabbit {
    /// A rabbit as placed at world load or left behind by a procreating
    /// parent: counter at zero.
    pub fn newborn() -> Self {
        Self { age: 0 }
    }
}

/// A fox's mutable state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Fox {
    /// Generations since birth or since the last procreation.
    pub age: u32,
    /// Generations since the fox last ate a rabbit.
    pub hunger: u32,
}

impl Fox {
    /// A fox as placed at world load or left behind by a procreating
    /// parent. Hunger is never inherited; it starts at zero.
    pub fn newborn() -> Self {
        Self { age: 0, hunger: 0 }
    }
}

/// Contents of a single grid cell.
///
/// Exactly one state per cell. Rocks never change for the lifetime of a
/// run; animals carry their counters with them when they move.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Cell {
    /// Unoccupied ground.
    #[default]
    Empty,
    /// Immovable rock. Never moves, is never overwritten, never vacates.
    Rock,
    /// A rabbit and its procreation counter.
    Rabbit(Rabbit),
    /// A fox with procreation and hunger counters.
    Fox(Fox),
}

impl Cell {
    /// `true` for unoccupied ground.
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// `true` if the cell holds a rabbit.
    pub fn is_rabbit(&self) -> bool {
        matches!(self, Cell::Rabbit(_))
    }

    /// `true` if the cell holds a fox.
    pub fn is_fox(&self) -> bool {
        matches!(self, Cell::Fox(_))
    }

    /// The cell's kind, discarding counters.
    pub fn kind(&self) -> CellKind {
        match self {
            Cell::Empty => CellKind::Empty,
            Cell::Rock => CellKind::Rock,
            Cell::Rabbit(_) => CellKind::Rabbit,
            Cell::Fox(_) => CellKind::Fox,
        }
    }
}

/// A cell's kind without agent counters.
///
/// This is the unit of structural comparison and serialization: world
/// files and golden comparisons carry kinds only, never counters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CellKind {
    /// Unoccupied ground.
    Empty,
    /// Immovable rock.
    Rock,
    /// Rabbit.
    Rabbit,
    /// Fox.
    Fox,
}

impl CellKind {
    /// Single-character glyph used by the ASCII view.
    pub fn glyph(self) -> char {
        match self {
            CellKind::Empty => ' ',
            CellKind::Rock => '*',
            CellKind::Rabbit => 'R',
            CellKind::Fox => 'F',
        }
    }

    /// Upper-case token used by the world-file format, or `None` for
    /// empty ground (empty cells are not listed in world files).
    pub fn token(self) -> Option<&'static str> {
        match self {
            CellKind::Empty => None,
            CellKind::Rock => Some("ROCK"),
            CellKind::Rabbit => Some("RABBIT"),
            CellKind::Fox => Some("FOX"),
        }
    }

    /// Parse a world-file token.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "ROCK" => Some(CellKind::Rock),
            "RABBIT" => Some(CellKind::Rabbit),
            "FOX" => Some(CellKind::Fox),
            _ => None,
        }
    }

    /// The cell a freshly placed object of this kind occupies, counters
    /// at zero.
    pub fn place(self) -> Cell {
        match self {
            CellKind::Empty => Cell::Empty,
            CellKind::Rock => Cell::Rock,
            CellKind::Rabbit => Cell::Rabbit(Rabbit::newborn()),
            CellKind::Fox => Cell::Fox(Fox::newborn()),
        }
    }
}

impl fmt::Display for CellKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}
