// ============================================================
// Layer 2: LossUseCase
// ============================================================
// One forward + backward pass of the word error loss over a
// batch read from disk, the way a training step would run it:
//
//   Step 1: Load token rows           (Layer 4 - data)
//   Step 2: Stack into tensors        (Layer 5 - ml batcher)
//   Step 3: Forward distances + mean  (Layer 5 - ml loss)
//   Step 4: Backward                  (Burn autodiff)
//   Step 5: Summarise the gradient    (this layer)
//
// There is no optimiser here: whatever consumes the gradient
// lives outside this crate.
//
// Key Burn insight:
//   - `require_grad()` must be called on the predictions before
//     the forward pass, or `grad()` returns None afterwards
//   - `grad()` returns a tensor on the inner backend (NdArray)

use anyhow::{Context, Result};
use burn::prelude::*;
use serde::{Deserialize, Serialize};

use crate::data::loader::load_token_batch;
use crate::ml::batcher::{TokenBatcher, TokenPair};
use crate::ml::loss::normalized_distances;

type MyBackend = burn::backend::Autodiff<burn::backend::NdArray>;

/// What one loss evaluation produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LossReport {
    pub batch_size: usize,
    pub seq_len:    usize,

    /// Mean over the batch of distance / seq_len
    pub loss: f64,

    /// Per-example distance / seq_len
    pub normalized_distances: Vec<f32>,

    /// Σ |∂loss/∂prediction|
    pub gradient_l1: f64,
}

pub struct LossUseCase {
    batch_path: String,
}

impl LossUseCase {
    pub fn new(batch_path: impl Into<String>) -> Self {
        Self { batch_path: batch_path.into() }
    }

    pub fn execute(&self) -> Result<LossReport> {
        let pairs = load_token_batch(&self.batch_path)?;
        evaluate_batch(pairs)
    }
}

/// Run the loss forward and backward over in-memory token pairs.
pub fn evaluate_batch(pairs: Vec<TokenPair>) -> Result<LossReport> {
    let device  = burn::backend::ndarray::NdArrayDevice::default();
    let batcher = TokenBatcher::<MyBackend>::new(device);

    // ── Stack rows ────────────────────────────────────────────────────────────
    let batch      = batcher.batch(pairs).context("Invalid token batch")?;
    let batch_size = batch.batch_size();
    let seq_len    = batch.seq_len();
    let predictions = batch.predictions.require_grad();

    // ── Forward ───────────────────────────────────────────────────────────────
    // same value as word_error_loss(), per-example tensor kept for the report
    let per_example = normalized_distances(predictions.clone(), batch.labels)?;
    let loss = per_example.clone().mean();
    let loss_val: f64 = loss.clone().into_scalar().elem::<f64>();

    // ── Backward ──────────────────────────────────────────────────────────────
    let grads = loss.backward();
    let gradient_l1 = predictions
        .grad(&grads)
        .map(|g| g.abs().sum().into_scalar().elem::<f64>())
        .unwrap_or(0.0);

    let normalized_distances: Vec<f32> = per_example
        .to_data()
        .to_vec()
        .map_err(|e| anyhow::anyhow!("Cannot read distances: {e:?}"))?;

    tracing::info!(
        "Loss over {} examples of length {}: {:.6} (|grad|₁ = {:.6})",
        batch_size, seq_len, loss_val, gradient_l1,
    );

    Ok(LossReport { batch_size, seq_len, loss: loss_val, normalized_distances, gradient_l1 })
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_perfect_batch() {
        let report = evaluate_batch(vec![
            TokenPair::new(vec![1.0, 2.0, 3.0], vec![1.0, 2.0, 3.0]),
            TokenPair::new(vec![5.0, 5.0, 5.0], vec![5.0, 5.0, 5.0]),
        ])
        .unwrap();
        assert_eq!(report.loss, 0.0);
        assert_eq!(report.gradient_l1, 0.0);
        assert_eq!(report.normalized_distances, vec![0.0, 0.0]);
    }

    #[test]
    fn test_one_substitution() {
        let report = evaluate_batch(vec![
            TokenPair::new(vec![1.0, 2.0], vec![1.0, 3.0]),
        ])
        .unwrap();
        assert_eq!(report.loss, 0.5);
        // 2 |p - l| / L = 2 * 1 / 2
        assert!((report.gradient_l1 - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_ragged_batch_is_an_error() {
        let err = evaluate_batch(vec![
            TokenPair::new(vec![1.0, 2.0], vec![1.0]),
        ])
        .unwrap_err();
        assert!(format!("{err:#}").contains("expected length 2, got 1"));
    }

    #[test]
    fn test_execute_from_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        write!(f, r#"{{"predictions": [[1, 2, 3, 4]], "labels": [[1, 2, 3, 5]]}}"#).unwrap();
        let report = LossUseCase::new(f.path().display().to_string()).execute().unwrap();
        assert_eq!(report.batch_size, 1);
        assert_eq!(report.seq_len, 4);
        assert_eq!(report.loss, 0.25);
    }
}
