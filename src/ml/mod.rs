// ============================================================
// Layer 5: Differentiable Layer (Burn)
// ============================================================
// All Burn-specific code lives here. The exact engine and the
// metric layer never touch a tensor.
//
//   differentiable.rs - edit distance over 1-D token tensors,
//                       every cell kept on the autodiff graph
//
//   loss.rs           - batch-mean word error loss over
//                       [batch, seq_len] prediction/label tensors
//
//   batcher.rs        - stacks token rows into those tensors
//
// Everything is generic over `B: Backend`. Gradients need an
// autodiff backend, e.g. `Autodiff<NdArray>`; on a plain backend
// the same code just computes values.
//
// Reference: Burn Book §3 (Tensors), §4 (Autodiff)

/// Edit distance with gradient tracking
pub mod differentiable;

/// Batch word error loss
pub mod loss;

/// Token rows → batch tensors
pub mod batcher;

pub use differentiable::differentiable_distance;
pub use loss::{normalized_distances, word_error_loss, WordErrorLoss};
