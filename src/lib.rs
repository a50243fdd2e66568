//! # drop-four
//!
//! A one-ply move advisor for gravity-drop grid games (connect-four
//! variants): given a rectangular board of tokens and the columns still
//! accepting drops, it proposes the column with the strongest immediate
//! tactical advantage.
//!
//! ## Design Principles
//!
//! 1. **Heuristic, Not Solver**: Single-ply threat/streak scoring only.
//!    No minimax, no opponent simulation, no optimality guarantee.
//!
//! 2. **Engine Only**: Board acquisition, turn management, and rendering
//!    belong to the host. The advisor consumes a plain 2-D grid plus the
//!    playable columns and returns one column index, in process.
//!
//! 3. **Session State Is Explicit**: The one long-lived `Grid` per game
//!    lives inside a `MoveAdvisor` the caller owns and threads through
//!    calls. No hidden globals, no internal locking.
//!
//! ## Architecture
//!
//! - **Cell Arena**: The board is a graph of cells linked in eight
//!   directions, stored as a flat arena with `CellId` index references.
//!   Diagonal links are derived from two primary hops on every lookup,
//!   so they can never go stale.
//!
//! - **Build Once, Update In Place**: The first board wires the graph;
//!   every later board only overwrites cell values. Shape is fixed for
//!   the session.
//!
//! - **Streak Scoring**: Each candidate landing cell is probed along
//!   seven directions; the strongest run's `move_threshold` ranks the
//!   candidates.
//!
//! ## Modules
//!
//! - `core`: Tokens, directions, cell addressing
//! - `grid`: The linked grid, neighbor wiring, streak scans
//! - `advisor`: Scoring heuristic and the session advisor

pub mod advisor;
pub mod core;
pub mod grid;

// Re-export commonly used types
pub use crate::core::{Cell, CellId, Coords, Direction, Token, TokenRegistry, SCAN_DIRECTIONS};

pub use crate::grid::{Board, Grid, Streak};

pub use crate::advisor::{move_threshold, AdvisorConfig, Candidate, MoveAdvisor, Recommendation};
