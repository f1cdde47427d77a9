// ============================================================
// Precondition Errors
// ============================================================
// Every engine function is a pure computation. When one of them
// fails it is because the caller passed input that violates a
// precondition, and the caller is told immediately.
//
// The application and CLI layers wrap these in anyhow::Error
// with extra context (which file, which batch).

use thiserror::Error;

/// Precondition violations raised by the distance engines and the loss.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MetricError {
    /// `predictions` and `labels` disagree on the number of examples
    #[error("batch size mismatch: expected {expected} label rows, got {actual}")]
    BatchSizeMismatch { expected: usize, actual: usize },

    /// An example (or label row) does not have the batch's fixed length
    #[error("sequence length mismatch: expected length {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// The loss needs at least one example of non-zero length
    #[error("empty batch: word error loss needs at least one example of non-zero length")]
    EmptyBatch,

    /// NaN never compares equal, not even to itself; ±inf has no
    /// finite difference to carry a gradient
    #[error("{side} sequence contains {count} non-finite element(s) that cannot be compared")]
    NonComparable { side: &'static str, count: usize },
}

pub type Result<T> = std::result::Result<T, MetricError>;
