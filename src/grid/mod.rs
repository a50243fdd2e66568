//! The linked board grid: cell arena, neighbor wiring, streak scans.

pub mod grid;
pub mod streak;

pub use grid::{Board, Grid};
pub use streak::Streak;
