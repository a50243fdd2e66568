//! Candidate scoring.
//!
//! A candidate is a landing cell paired with the strongest streak found
//! around it. Each of the seven probe directions yields one streak; the
//! streak's `move_threshold` ranks it, and the best streak's threshold
//! becomes the candidate's score.

use serde::{Deserialize, Serialize};

use crate::core::{CellId, SCAN_DIRECTIONS};
use crate::grid::{Grid, Streak};

use super::config::AdvisorConfig;

/// A landing cell with its best-axis streak and score.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Candidate {
    /// The landing cell a drop in this column comes to rest in.
    pub cell: CellId,

    /// The strongest streak radiating from the landing cell.
    pub streak: Streak,

    /// Heuristic score of that streak.
    pub threshold: f64,
}

/// Score one streak by the heuristic table.
///
/// Runs of the block token at or past the long-run cutoff score
/// `block_long_threshold`, shorter ones `length * block_step`. Every
/// other run (including a runless scan, which has length 0 and value
/// `None`) uses the standard weights.
#[must_use]
pub fn move_threshold(streak: &Streak, config: &AdvisorConfig) -> f64 {
    let is_block = match (streak.value(), config.block_token) {
        (Some(value), Some(block)) => value == block,
        _ => false,
    };

    if is_block {
        if streak.len() >= config.long_run {
            config.block_long_threshold
        } else {
            streak.len() as f64 * config.block_step
        }
    } else if streak.len() >= config.long_run {
        config.standard_long_threshold
    } else {
        streak.len() as f64 * config.standard_step
    }
}

/// Probe all seven scan directions from a landing cell and keep the
/// best-scoring streak. Ties go to the earlier probe direction.
#[must_use]
pub(crate) fn analyze(grid: &Grid, cell: CellId, config: &AdvisorConfig) -> Candidate {
    let mut best: Option<(Streak, f64)> = None;

    for direction in SCAN_DIRECTIONS {
        let streak = grid.streak(cell, direction);
        let threshold = move_threshold(&streak, config);

        let replace = match &best {
            Some((_, best_threshold)) => threshold > *best_threshold,
            None => true,
        };
        if replace {
            best = Some((streak, threshold));
        }
    }

    // SCAN_DIRECTIONS is non-empty, so a best streak always exists.
    let (streak, threshold) = best.expect("at least one probe direction");
    Candidate {
        cell,
        streak,
        threshold,
    }
}
