// ============================================================
// Layer 5: Token Batcher
// ============================================================
// Stacks per-example token rows into [batch_size, seq_len]
// tensors for the word error loss.
//
//   Input:  Vec of N TokenPairs, each row of length L
//   Output: TokenBatch with predictions / labels of shape [N, L]
//
//   Rows are flattened, then reshaped:
//   [e1_t1, e1_t2, ..., e1_tL, e2_t1, ..., eN_tL] → [N, L]
//
// Every row must already have the same length. There is no
// padding here because the loss has no masking convention.

use burn::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{MetricError, Result};

/// One training example: predicted token keys and label token keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenPair {
    pub prediction: Vec<f32>,
    pub label:      Vec<f32>,
}

impl TokenPair {
    pub fn new(prediction: Vec<f32>, label: Vec<f32>) -> Self {
        Self { prediction, label }
    }
}

/// A batch ready for `word_error_loss`.
#[derive(Debug, Clone)]
pub struct TokenBatch<B: Backend> {
    /// shape: [batch_size, seq_len]
    pub predictions: Tensor<B, 2>,

    /// shape: [batch_size, seq_len]
    pub labels: Tensor<B, 2>,
}

impl<B: Backend> TokenBatch<B> {
    pub fn batch_size(&self) -> usize {
        self.predictions.dims()[0]
    }

    pub fn seq_len(&self) -> usize {
        self.predictions.dims()[1]
    }
}

/// Holds the target device so tensors are created in the right place.
#[derive(Clone, Debug)]
pub struct TokenBatcher<B: Backend> {
    pub device: B::Device,
}

impl<B: Backend> TokenBatcher<B> {
    pub fn new(device: B::Device) -> Self {
        Self { device }
    }

    /// Convert the pairs into a TokenBatch.
    ///
    /// The first prediction row fixes L; any prediction or label row of a
    /// different length is a `LengthMismatch`, and no pairs at all is an
    /// `EmptyBatch`.
    pub fn batch(&self, items: Vec<TokenPair>) -> Result<TokenBatch<B>> {
        let seq_len = items.first().ok_or(MetricError::EmptyBatch)?.prediction.len();

        for item in &items {
            for row in [&item.prediction, &item.label] {
                if row.len() != seq_len {
                    return Err(MetricError::LengthMismatch {
                        expected: seq_len,
                        actual:   row.len(),
                    });
                }
            }
        }

        let batch_size = items.len();
        let pred_flat: Vec<f32> =
            items.iter().flat_map(|p| p.prediction.iter().copied()).collect();
        let label_flat: Vec<f32> =
            items.iter().flat_map(|p| p.label.iter().copied()).collect();

        let predictions = Tensor::<B, 1>::from_floats(pred_flat.as_slice(), &self.device)
            .reshape([batch_size, seq_len]);
        let labels = Tensor::<B, 1>::from_floats(label_flat.as_slice(), &self.device)
            .reshape([batch_size, seq_len]);

        tracing::debug!("Batched {} examples of length {}", batch_size, seq_len);

        Ok(TokenBatch { predictions, labels })
    }
}
