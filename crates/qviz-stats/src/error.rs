//! Error types for qviz-stats

use thiserror::Error;

/// Errors raised while deriving Fock statistics
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StatsError {
    /// A density matrix must be square
    #[error("Density matrix for mode {mode} is not square: {rows}x{cols}")]
    NotSquare { mode: usize, rows: usize, cols: usize },

    /// A density matrix with no entries carries no occupation data
    #[error("Density matrix for mode {mode} is empty")]
    Empty { mode: usize },

    /// Every mode in a collection must share one truncation
    #[error("Density matrix for mode {mode} has dimension {actual}, expected cutoff {expected}")]
    CutoffMismatch {
        mode: usize,
        expected: usize,
        actual: usize,
    },
}

/// Result type alias for statistics operations
pub type StatsResult<T> = Result<T, StatsError>;
