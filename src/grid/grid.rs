//! Arena-based board grid.
//!
//! Cells are stored in a flat `Vec<Cell>` and referenced by `CellId`
//! indices. The grid alone owns every cell; neighbor links are indices,
//! so the mutually linked structure stays cycle-free from an ownership
//! point of view and the whole grid serializes cleanly.
//!
//! A grid is built exactly once per game session. Later turns only
//! overwrite cell values; the link topology never changes after
//! construction.

use serde::{Deserialize, Serialize};

use crate::core::{Cell, CellId, Coords, Direction, Token};

/// Raw board input: token-or-empty values indexed `[column][row]`.
pub type Board = Vec<Vec<Option<Token>>>;

/// The full set of cells for one session.
///
/// Shape is fixed at construction; only cell values mutate afterwards.
///
/// ## Usage
///
/// ```
/// use drop_four::core::Token;
/// use drop_four::grid::Grid;
///
/// let red = Some(Token::new(0));
/// // Two columns of three rows; row 0 is the bottom.
/// let board = vec![vec![red, red, None], vec![None, None, None]];
///
/// let (grid, all_empty) = Grid::from_board(&board);
/// assert!(!all_empty);
///
/// // Column 0 has two tokens stacked, so a drop lands at row 2.
/// let landing = grid.landing_cell(0).unwrap();
/// assert_eq!(grid.get(landing).coords.row, 2);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Grid {
    /// All cells, column-major: index = col * rows + row.
    cells: Vec<Cell>,
    cols: usize,
    rows: usize,
}

impl Grid {
    /// Build a grid from a raw board, wiring neighbor links as cells are
    /// created column by column, bottom to top.
    ///
    /// Returns the grid and whether the board was entirely empty (used by
    /// the advisor to special-case the opening move).
    ///
    /// Panics if the board has no columns or no rows.
    pub fn from_board(board: &[Vec<Option<Token>>]) -> (Self, bool) {
        assert!(!board.is_empty(), "Board must have at least one column");
        let cols = board.len();
        let rows = board[0].len();
        assert!(rows > 0, "Board columns must have at least one row");

        let mut grid = Self {
            cells: Vec::with_capacity(cols * rows),
            cols,
            rows,
        };
        let mut all_empty = true;

        for (col, column) in board.iter().enumerate() {
            assert_eq!(column.len(), rows, "Board columns must share one height");
            for (row, &value) in column.iter().enumerate() {
                if value.is_some() {
                    all_empty = false;
                }
                let id = CellId::new(grid.cells.len() as u32);
                grid.cells.push(Cell::new(value, Coords::new(col, row)));

                if col > 0 {
                    grid.link(id, grid.id_at(col - 1, row), Direction::Left);
                }
                if row > 0 {
                    grid.link(id, grid.id_at(col, row - 1), Direction::Down);
                }
            }
        }

        (grid, all_empty)
    }

    /// Overwrite every cell's value from a same-shaped board.
    ///
    /// Links are untouched. Panics if the board's shape differs from the
    /// one the grid was built from; shape is fixed for a session.
    pub fn update(&mut self, board: &[Vec<Option<Token>>]) {
        assert_eq!(board.len(), self.cols, "Board shape changed mid-session");
        for (col, column) in board.iter().enumerate() {
            assert_eq!(column.len(), self.rows, "Board shape changed mid-session");
            for (row, &value) in column.iter().enumerate() {
                let id = self.id_at(col, row);
                self.cells[id.raw() as usize].value = value;
            }
        }
    }

    /// Find the landing cell for a column: the first empty cell walking
    /// up from the column's bottom.
    ///
    /// Returns `None` if the column is full or out of range.
    #[must_use]
    pub fn landing_cell(&self, col: usize) -> Option<CellId> {
        if col >= self.cols {
            return None;
        }
        let mut id = self.id_at(col, 0);
        while id.is_some() {
            let cell = self.get(id);
            if cell.is_empty() {
                return Some(id);
            }
            id = cell.up;
        }
        None
    }

    /// Get the neighbor of a cell in any of the eight directions.
    ///
    /// Primary directions read the stored link. Diagonals are recomputed
    /// on every call as the vertical hop followed by the horizontal hop,
    /// so they always agree with the primary links.
    #[must_use]
    pub fn neighbor(&self, id: CellId, direction: Direction) -> CellId {
        match direction.split() {
            None => self.get(id).primary_link(direction),
            Some((vertical, horizontal)) => {
                let via = self.get(id).primary_link(vertical);
                if via.is_none() {
                    CellId::NONE
                } else {
                    self.get(via).primary_link(horizontal)
                }
            }
        }
    }

    /// Get a cell by ID.
    ///
    /// Panics on the NONE sentinel or an out-of-range index.
    #[inline]
    #[must_use]
    pub fn get(&self, id: CellId) -> &Cell {
        &self.cells[id.raw() as usize]
    }

    /// Get the cell ID at a position, or `None` if out of range.
    #[must_use]
    pub fn cell_id(&self, col: usize, row: usize) -> Option<CellId> {
        if col < self.cols && row < self.rows {
            Some(self.id_at(col, row))
        } else {
            None
        }
    }

    /// Number of columns.
    #[inline]
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of rows per column.
    #[inline]
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Total number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if the grid has no cells. Construction forbids this; kept
    /// for the conventional `len`/`is_empty` pairing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate over all cell IDs, column-major.
    pub fn ids(&self) -> impl Iterator<Item = CellId> {
        (0..self.cells.len() as u32).map(CellId::new)
    }

    #[inline]
    fn id_at(&self, col: usize, row: usize) -> CellId {
        CellId::new((col * self.rows + row) as u32)
    }

    /// Establish a bidirectional link between two cells.
    ///
    /// Construction-time only, once per adjacent pair, along `Down` or
    /// `Left`; the reverse link on the other cell is fixed here too.
    fn link(&mut self, from: CellId, to: CellId, direction: Direction) {
        debug_assert!(
            matches!(direction, Direction::Down | Direction::Left),
            "Cells are wired along Down and Left only"
        );
        self.cells[from.raw() as usize].set_primary_link(direction, to);
        self.cells[to.raw() as usize].set_primary_link(direction.opposite(), from);
    }
}
