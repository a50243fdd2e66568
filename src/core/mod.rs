//! Core vocabulary types: tokens, directions, cell addressing.
//!
//! These are the leaf types everything else builds on. They carry no
//! board logic of their own.

pub mod cell;
pub mod direction;
pub mod token;

pub use cell::{Cell, CellId, Coords};
pub use direction::{Direction, SCAN_DIRECTIONS};
pub use token::{Token, TokenRegistry};
