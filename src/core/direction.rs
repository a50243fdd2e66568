//! Board directions.
//!
//! Cells store links along the four primary directions only. Diagonals
//! are derived by composing a vertical hop with a horizontal hop, so they
//! can never drift out of sync with the primary links.

use serde::{Deserialize, Serialize};

/// One of the eight directions radiating from a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

/// Probe order used when scoring a candidate cell.
///
/// Each probe scans its direction and the geometric opposite, so `Right`
/// and `Left` each cover the full horizontal axis while the vertical axis
/// is reached only through `Down`. The overlap biases scoring toward
/// horizontal runs; the order and the set are part of the heuristic's
/// tuning and changing either changes move strength.
pub const SCAN_DIRECTIONS: [Direction; 7] = [
    Direction::Right,
    Direction::Left,
    Direction::UpRight,
    Direction::UpLeft,
    Direction::Down,
    Direction::DownLeft,
    Direction::DownRight,
];

impl Direction {
    /// Get the geometric opposite of this direction.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::UpLeft => Self::DownRight,
            Self::UpRight => Self::DownLeft,
            Self::DownLeft => Self::UpRight,
            Self::DownRight => Self::UpLeft,
        }
    }

    /// Check whether this is one of the four stored primary directions.
    #[must_use]
    pub const fn is_primary(self) -> bool {
        matches!(self, Self::Up | Self::Down | Self::Left | Self::Right)
    }

    /// Decompose a diagonal into its vertical and horizontal components.
    ///
    /// Returns `None` for primary directions.
    #[must_use]
    pub const fn split(self) -> Option<(Self, Self)> {
        match self {
            Self::UpLeft => Some((Self::Up, Self::Left)),
            Self::UpRight => Some((Self::Up, Self::Right)),
            Self::DownLeft => Some((Self::Down, Self::Left)),
            Self::DownRight => Some((Self::Down, Self::Right)),
            _ => None,
        }
    }
}
