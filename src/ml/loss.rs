// ============================================================
// Layer 5: Word Error Loss
// ============================================================
// Batch-mean of differentiable edit distances:
//
//   loss = (1/B) Σ_i  differentiable_distance(pred_i, label_i) / L
//
// predictions and labels are [B, L] float tensors of token keys.
// The normaliser is L, the (fixed) prediction length, for every
// example. This is deliberately not the reference-length
// normalisation of metrics::word_error_rate.
//
// Variable-length batches are not supported: there is no padding
// or masking convention, so every example must be exactly L long.

use burn::prelude::*;

use crate::error::{MetricError, Result};
use crate::ml::differentiable::differentiable_distance;

/// Loss module wrapper, in the shape of Burn's built-in losses.
#[derive(Debug, Clone, Copy, Default)]
pub struct WordErrorLoss;

impl WordErrorLoss {
    pub fn new() -> Self {
        Self
    }

    /// Scalar loss (shape `[1]`) for a batch, see [`word_error_loss`].
    pub fn forward<B: Backend>(
        &self,
        predictions: Tensor<B, 2>,
        labels:      Tensor<B, 2>,
    ) -> Result<Tensor<B, 1>> {
        word_error_loss(predictions, labels)
    }
}

/// Mean over the batch of `distance(pred_i, label_i) / L`.
pub fn word_error_loss<B: Backend>(
    predictions: Tensor<B, 2>,
    labels:      Tensor<B, 2>,
) -> Result<Tensor<B, 1>> {
    Ok(normalized_distances(predictions, labels)?.mean())
}

/// Per-example `distance / L`, shape `[B]`.
pub fn normalized_distances<B: Backend>(
    predictions: Tensor<B, 2>,
    labels:      Tensor<B, 2>,
) -> Result<Tensor<B, 1>> {
    let [batch_size, seq_len] = check_shapes(&predictions, &labels)?;

    let per_example = (0..batch_size)
        .map(|i| {
            let pred  = predictions.clone().slice([i..i + 1, 0..seq_len]).reshape([seq_len]);
            let label = labels.clone().slice([i..i + 1, 0..seq_len]).reshape([seq_len]);
            differentiable_distance(pred, label)
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Tensor::cat(per_example, 0).div_scalar(seq_len as f32))
}

fn check_shapes<B: Backend>(
    predictions: &Tensor<B, 2>,
    labels:      &Tensor<B, 2>,
) -> Result<[usize; 2]> {
    let [batch_size, seq_len]     = predictions.dims();
    let [label_batch, label_len]  = labels.dims();

    if label_batch != batch_size {
        return Err(MetricError::BatchSizeMismatch { expected: batch_size, actual: label_batch });
    }
    if label_len != seq_len {
        return Err(MetricError::LengthMismatch { expected: seq_len, actual: label_len });
    }
    if batch_size == 0 || seq_len == 0 {
        return Err(MetricError::EmptyBatch);
    }
    Ok([batch_size, seq_len])
}
