//! Advisor configuration parameters.

use serde::{Deserialize, Serialize};

use crate::core::Token;

/// Scoring weights and token roles for the advisor.
///
/// The defaults reproduce the tuned heuristic table: a run at or past the
/// long-run cutoff scores a flat threshold, shorter runs scale linearly
/// with length. Runs of the block token weigh differently from runs of
/// ordinary tokens.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AdvisorConfig {
    /// The distinguished block token, if the host uses one.
    /// Runs of this token use the `block_*` weights.
    pub block_token: Option<Token>,

    /// Run length at which a streak counts as a standing threat.
    pub long_run: usize,

    /// Threshold for a block-token run at or past the cutoff.
    pub block_long_threshold: f64,

    /// Per-cell weight for a short block-token run.
    pub block_step: f64,

    /// Threshold for an ordinary run at or past the cutoff.
    pub standard_long_threshold: f64,

    /// Per-cell weight for a short ordinary run.
    /// A runless scan (length 0) lands in this branch and scores 0.
    pub standard_step: f64,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            block_token: None,
            long_run: 3,
            block_long_threshold: 2.0,
            block_step: 0.33,
            standard_long_threshold: 1.6,
            standard_step: 0.35,
        }
    }
}

impl AdvisorConfig {
    /// Create a config with a designated block token.
    pub fn with_block_token(mut self, token: Token) -> Self {
        self.block_token = Some(token);
        self
    }

    /// Create a config with a custom long-run cutoff.
    pub fn with_long_run(mut self, length: usize) -> Self {
        self.long_run = length;
        self
    }

    /// Create a config with custom long-run thresholds.
    pub fn with_long_thresholds(mut self, block: f64, standard: f64) -> Self {
        self.block_long_threshold = block;
        self.standard_long_threshold = standard;
        self
    }

    /// Create a config with custom short-run step weights.
    pub fn with_steps(mut self, block: f64, standard: f64) -> Self {
        self.block_step = block;
        self.standard_step = standard;
        self
    }
}
