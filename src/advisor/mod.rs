//! The move-scoring engine: configuration, candidate scoring, and the
//! session-scoped advisor that owns the grid.

pub mod advisor;
pub mod config;
pub mod score;

pub use advisor::{MoveAdvisor, Recommendation};
pub use config::AdvisorConfig;
pub use score::{move_threshold, Candidate};
