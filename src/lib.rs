//! Edit-distance error metrics for scoring predicted text against a reference.
//!
//! - [`distance`]: Wagner–Fischer edit distance over any `Eq` sequence
//! - [`metrics`]: character error rate, word error rate, corpus totals
//! - [`ml`]: a Burn implementation of the same distance that keeps
//!   gradients, and a batch word error loss built on it
//!
//! ```
//! use text_error_metrics::metrics::{character_error_rate, word_error_rate};
//!
//! assert_eq!(character_error_rate("sence", "nonsence"), 0.375);
//! assert!((word_error_rate("Bread is bad", "Not so bad") - 2.0 / 3.0).abs() < 1e-12);
//! ```

pub mod application;
pub mod cli;
pub mod data;
pub mod distance;
pub mod domain;
pub mod error;
pub mod infra;
pub mod metrics;
pub mod ml;

pub use error::MetricError;
