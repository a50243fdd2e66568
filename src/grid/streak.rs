//! Streak detection.
//!
//! A streak is a query result, not stored state: the contiguous run of
//! same-valued, non-empty cells that a candidate cell would join along
//! one axis. The scan starts from the candidate itself (never included
//! in the run) and extends outward through the probe direction and its
//! geometric opposite.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{CellId, Direction, Token};

use super::grid::Grid;

/// Run of same-valued neighbors seen from an origin cell along one axis.
///
/// The two outward sub-scans are concatenated in scan order, probe
/// direction first. The shared value is established by whichever sub-scan
/// first meets a non-empty cell; a cell carrying any other value halts
/// its sub-scan on the spot. When both sides are empty or absent the
/// value is `None` and the run is empty.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Streak {
    cells: SmallVec<[CellId; 8]>,
    value: Option<Token>,
    origin: CellId,
}

impl Streak {
    /// Cells in the run, in scan order.
    #[must_use]
    pub fn cells(&self) -> &[CellId] {
        &self.cells
    }

    /// The run's shared token value, or `None` if no run was found.
    #[must_use]
    pub fn value(&self) -> Option<Token> {
        self.value
    }

    /// Number of cells in the run.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if the run is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The cell the scan started from (not part of the run).
    #[must_use]
    pub fn origin(&self) -> CellId {
        self.origin
    }
}

impl Grid {
    /// Scan outward from `origin` along `direction` and its opposite,
    /// accumulating the contiguous run of non-empty cells sharing one
    /// token value.
    ///
    /// Each sub-scan halts at the first absent, empty, or differently
    /// valued cell. The shared value carries over from the first sub-scan
    /// into the second: if the probe direction found value X, an opposite
    /// side opening with value Y contributes nothing. That asymmetry is
    /// part of the scoring heuristic.
    ///
    /// Never mutates the grid.
    #[must_use]
    pub fn streak(&self, origin: CellId, direction: Direction) -> Streak {
        let mut cells = SmallVec::new();
        let mut value = None;

        for dir in [direction, direction.opposite()] {
            let mut current = origin;
            loop {
                let next = self.neighbor(current, dir);
                if next.is_none() {
                    break;
                }
                let next_value = match self.get(next).value {
                    Some(v) => v,
                    None => break,
                };
                match value {
                    None => value = Some(next_value),
                    Some(v) if v != next_value => break,
                    Some(_) => {}
                }
                current = next;
                cells.push(next);
            }
        }

        Streak {
            cells,
            value,
            origin,
        }
    }
}
