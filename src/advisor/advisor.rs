//! The session-scoped move advisor.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::grid::{Board, Grid};

use super::config::AdvisorConfig;
use super::score::{self, Candidate};

/// One recommendation the advisor has made this session.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Recommendation {
    /// 1-based turn counter, incremented per `recommend` call.
    pub turn: u32,

    /// The column the advisor chose.
    pub column: usize,

    /// Winning candidate's score. `None` for the opening shortcut and
    /// the full-board fallback, which bypass scoring.
    pub threshold: Option<f64>,

    /// Whether this was the opening-move shortcut.
    pub opening: bool,
}

/// One-ply move advisor for a gravity-drop grid game.
///
/// Owns the session's `Grid`: the first board builds it, every later
/// board only overwrites cell values. Board shape must stay fixed for
/// the whole session. The advisor holds no locks; a concurrent host must
/// treat each `recommend` call as one exclusive critical section.
///
/// ## Usage
///
/// ```
/// use drop_four::advisor::{AdvisorConfig, MoveAdvisor};
///
/// let mut advisor = MoveAdvisor::new(AdvisorConfig::default());
///
/// // Standard 7x6 board, all empty: opening move is the middle column.
/// let board = vec![vec![None; 6]; 7];
/// let column = advisor.recommend(&[0, 1, 2, 3, 4, 5, 6], board);
/// assert_eq!(column, Some(3));
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct MoveAdvisor {
    config: AdvisorConfig,
    grid: Option<Grid>,
    history: Vector<Recommendation>,
    turn: u32,
}

impl MoveAdvisor {
    /// Create an advisor with the given configuration.
    #[must_use]
    pub fn new(config: AdvisorConfig) -> Self {
        Self {
            config,
            grid: None,
            history: Vector::new(),
            turn: 0,
        }
    }

    /// Recommend a column to drop into.
    ///
    /// `board` is indexed `[column][row]` with row 0 at the top; each
    /// column is reversed before processing so that internally row 0 is
    /// the bottom. `available_columns` lists the columns the host still
    /// accepts drops for, in the host's preferred order.
    ///
    /// Control flow:
    /// - First call on an entirely empty board: the middle element of
    ///   `available_columns` (floor of half the count), no scoring.
    /// - Otherwise each available column's landing cell is scored and
    ///   the best-scoring column wins; ties go to the earlier column.
    /// - If every available column is full, falls back to the element at
    ///   the rounded-half index. Rounding (not flooring) is part of the
    ///   tuned behavior and intentionally differs from the opening case.
    ///
    /// Returns `None` when no column can be produced: empty
    /// `available_columns`, or a rounded-half fallback index past the
    /// end. "No good move" is a value here, not an error.
    pub fn recommend(&mut self, available_columns: &[usize], mut board: Board) -> Option<usize> {
        for column in board.iter_mut() {
            column.reverse();
        }

        let first_board_empty = match self.grid.take() {
            None => {
                let (grid, all_empty) = Grid::from_board(&board);
                self.grid = Some(grid);
                all_empty
            }
            Some(mut grid) => {
                grid.update(&board);
                self.grid = Some(grid);
                false
            }
        };
        let grid = self.grid.as_ref()?;
        self.turn += 1;

        if first_board_empty {
            let column = *available_columns.get(available_columns.len() / 2)?;
            self.record(column, None, true);
            return Some(column);
        }

        let mut best: Option<Candidate> = None;
        for &column in available_columns {
            let Some(cell) = grid.landing_cell(column) else {
                continue;
            };
            let candidate = score::analyze(grid, cell, &self.config);
            let replace = match &best {
                Some(current) => candidate.threshold > current.threshold,
                None => true,
            };
            if replace {
                best = Some(candidate);
            }
        }

        if let Some(candidate) = best {
            let column = grid.get(candidate.cell).coords.col;
            self.record(column, Some(candidate.threshold), false);
            return Some(column);
        }

        // Every available column is full: degenerate midpoint fallback.
        // Rounded-half, so an odd count picks past the middle and a
        // single-element list yields None.
        let index = (available_columns.len() + 1) / 2;
        let column = *available_columns.get(index)?;
        self.record(column, None, false);
        Some(column)
    }

    /// Score every playable available column without committing to one.
    ///
    /// Candidates come back in `available_columns` order; full columns
    /// are skipped. The grid must have been built by a prior
    /// `recommend` call.
    #[must_use]
    pub fn candidates(&self, available_columns: &[usize]) -> Vec<Candidate> {
        let Some(grid) = self.grid.as_ref() else {
            return Vec::new();
        };
        available_columns
            .iter()
            .filter_map(|&column| grid.landing_cell(column))
            .map(|cell| score::analyze(grid, cell, &self.config))
            .collect()
    }

    /// The advisor's configuration.
    #[must_use]
    pub fn config(&self) -> &AdvisorConfig {
        &self.config
    }

    /// The session grid, once the first board has been seen.
    #[must_use]
    pub fn grid(&self) -> Option<&Grid> {
        self.grid.as_ref()
    }

    /// All recommendations made this session, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<Recommendation> {
        &self.history
    }

    /// Forget the session: drops the grid and the history.
    ///
    /// The next `recommend` call rebuilds from scratch, so the board may
    /// change shape across a reset.
    pub fn reset(&mut self) {
        self.grid = None;
        self.history = Vector::new();
        self.turn = 0;
    }

    fn record(&mut self, column: usize, threshold: Option<f64>, opening: bool) {
        self.history.push_back(Recommendation {
            turn: self.turn,
            column,
            threshold,
            opening,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Token;

    const RED: Option<Token> = Some(Token::new(0));

    fn empty_board(cols: usize, rows: usize) -> Board {
        vec![vec![None; rows]; cols]
    }

    #[test]
    fn test_opening_move_is_middle_column() {
        let mut advisor = MoveAdvisor::new(AdvisorConfig::default());
        let column = advisor.recommend(&[0, 1, 2, 3, 4, 5, 6], empty_board(7, 6));
        assert_eq!(column, Some(3));
    }

    #[test]
    fn test_opening_shortcut_only_fires_once() {
        let mut advisor = MoveAdvisor::new(AdvisorConfig::default());
        advisor.recommend(&[0, 1, 2], empty_board(3, 3));

        // Same empty board again: no longer the first board, so the
        // advisor scores candidates (all zero) and takes the first.
        let column = advisor.recommend(&[0, 1, 2], empty_board(3, 3));
        assert_eq!(column, Some(0));
    }

    #[test]
    fn test_first_board_with_values_is_scored() {
        let mut advisor = MoveAdvisor::new(AdvisorConfig::default());
        let mut board = empty_board(5, 3);
        // Two reds at the bottom of columns 0 and 1 (row index 2 is the
        // bottom in caller orientation).
        board[0][2] = RED;
        board[1][2] = RED;

        let column = advisor.recommend(&[0, 1, 2, 3, 4], board);
        assert_eq!(column, Some(2));
    }

    #[test]
    fn test_empty_available_columns() {
        let mut advisor = MoveAdvisor::new(AdvisorConfig::default());
        let column = advisor.recommend(&[], empty_board(3, 3));
        assert_eq!(column, None);
    }

    #[test]
    fn test_full_board_fallback_rounds() {
        let mut advisor = MoveAdvisor::new(AdvisorConfig::default());
        let full = vec![vec![RED; 2]; 4];

        let column = advisor.recommend(&[0, 1, 2, 3], full);
        // round(4 / 2) = 2.
        assert_eq!(column, Some(2));
    }

    #[test]
    fn test_full_board_fallback_can_run_off_the_end() {
        let mut advisor = MoveAdvisor::new(AdvisorConfig::default());
        let full = vec![vec![RED; 2]; 1];

        // round(1 / 2) = 1, past the end of a single-element list.
        let column = advisor.recommend(&[0], full);
        assert_eq!(column, None);
    }

    #[test]
    fn test_history_records_turns() {
        let mut advisor = MoveAdvisor::new(AdvisorConfig::default());
        advisor.recommend(&[0, 1, 2], empty_board(3, 3));

        let mut board = empty_board(3, 3);
        board[1][2] = RED;
        advisor.recommend(&[0, 1, 2], board);

        let history = advisor.history();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].turn, 1);
        assert!(history[0].opening);
        assert_eq!(history[0].threshold, None);
        assert_eq!(history[1].turn, 2);
        assert!(!history[1].opening);
        assert!(history[1].threshold.is_some());
    }

    #[test]
    fn test_reset_forgets_the_session() {
        let mut advisor = MoveAdvisor::new(AdvisorConfig::default());
        advisor.recommend(&[0, 1], empty_board(2, 2));
        assert!(advisor.grid().is_some());

        advisor.reset();
        assert!(advisor.grid().is_none());
        assert!(advisor.history().is_empty());

        // A different shape is fine after a reset.
        let column = advisor.recommend(&[0, 1, 2, 3, 4], empty_board(5, 4));
        assert_eq!(column, Some(2));
    }

    #[test]
    fn test_candidates_skip_full_columns() {
        let mut advisor = MoveAdvisor::new(AdvisorConfig::default());
        let mut board = empty_board(3, 2);
        board[0][0] = RED;
        board[0][1] = RED;
        advisor.recommend(&[0, 1, 2], board);

        let candidates = advisor.candidates(&[0, 1, 2]);
        assert_eq!(candidates.len(), 2);
    }
}
