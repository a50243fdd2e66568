//! Cell storage and addressing.
//!
//! Cells live in a flat arena owned by the `Grid` and reference their
//! neighbors by `CellId` index. Index references keep the mutually linked
//! structure free of ownership cycles and make the whole grid
//! serializable.

use serde::{Deserialize, Serialize};

use super::direction::Direction;
use super::token::Token;

/// Index into the grid's cell arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellId(pub u32);

impl CellId {
    /// Sentinel value representing no cell.
    pub const NONE: CellId = CellId(u32::MAX);

    /// Create a new cell ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Check if this is the NONE sentinel.
    #[inline]
    #[must_use]
    pub const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }

    /// Check if this refers to a cell.
    #[inline]
    #[must_use]
    pub const fn is_some(self) -> bool {
        !self.is_none()
    }

    /// Get the raw index value.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CellId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_none() {
            write!(f, "Cell(NONE)")
        } else {
            write!(f, "Cell({})", self.0)
        }
    }
}

/// Board position as (column, row).
///
/// Row 0 is the bottom of a column once the grid is built.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coords {
    pub col: usize,
    pub row: usize,
}

impl Coords {
    /// Create a coordinate pair.
    #[must_use]
    pub const fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }
}

impl std::fmt::Display for Coords {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

/// One board position.
///
/// Holds the token currently occupying the position (`None` = empty) and
/// links to the four primary neighbors. Coordinates are assigned at
/// creation and never change; only `value` mutates after construction.
/// Diagonal neighbors are not stored — the grid derives them on demand
/// from two primary hops.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Cell {
    /// Occupying token, or `None` for an empty position.
    pub value: Option<Token>,

    /// Position in the grid, immutable after creation.
    pub coords: Coords,

    pub(crate) up: CellId,
    pub(crate) down: CellId,
    pub(crate) left: CellId,
    pub(crate) right: CellId,
}

impl Cell {
    /// Create a cell with all neighbor links absent.
    #[must_use]
    pub fn new(value: Option<Token>, coords: Coords) -> Self {
        Self {
            value,
            coords,
            up: CellId::NONE,
            down: CellId::NONE,
            left: CellId::NONE,
            right: CellId::NONE,
        }
    }

    /// Check if this cell is empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value.is_none()
    }

    /// Read the stored link for a primary direction.
    ///
    /// Panics on diagonals; those are derived by the grid, never stored.
    pub(crate) fn primary_link(&self, direction: Direction) -> CellId {
        match direction {
            Direction::Up => self.up,
            Direction::Down => self.down,
            Direction::Left => self.left,
            Direction::Right => self.right,
            _ => panic!("Diagonal relations are derived, not stored"),
        }
    }

    /// Write the stored link for a primary direction.
    pub(crate) fn set_primary_link(&mut self, direction: Direction, target: CellId) {
        match direction {
            Direction::Up => self.up = target,
            Direction::Down => self.down = target,
            Direction::Left => self.left = target,
            Direction::Right => self.right = target,
            _ => panic!("Diagonal relations are derived, not stored"),
        }
    }
}
