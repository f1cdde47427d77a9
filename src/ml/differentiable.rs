// ============================================================
// Layer 5: Differentiable Edit Distance
// ============================================================
// Same recurrence as distance::matrix, but every cell is a
// Burn tensor of shape [1] that stays on the autodiff graph:
//
//   cell(i, j) = min( cell(i-1, j)   + 1,
//                     cell(i,   j-1) + 1,
//                     cell(i-1, j-1) + subst(i, j) )
//
// Substitution cost
//   The 0/1 mismatch indicator has no gradient of its own, so it
//   is paired with a straight-through term built from the squared
//   difference between the two tokens:
//
//     subst = mismatch + (sq - sq.detach())      sq = (p - l)²
//
//   The bracket is exactly 0.0 in value, so the forward result is
//   the integer edit distance. Backward, the gradient flows through
//   sq: 2(p - l) for the prediction, which vanishes when p == l.
//
// Min with gradient
//   select_min() keeps the current candidate unless the next one is
//   strictly lower. mask_where routes the gradient to whichever
//   branch was kept, so ties go to the first candidate in the order
//   deletion, insertion, substitution.
//
// Rows
//   Each row is a freshly built Vec of cells that only reads the
//   previous row and the cells already pushed to itself. Nothing is
//   ever written in place into a tracked tensor.
//
// Reference: Wagner & Fischer (1974)
//            Bengio et al. (2013) straight-through estimator

use burn::prelude::*;

use crate::error::{MetricError, Result};

/// Edit distance between two 1-D token tensors, as a `[1]` tensor
/// that keeps a gradient path to the elements of both inputs.
///
/// Tokens are compared by exact float equality, so pass token ids
/// (or any other scalar key) cast to float. Non-finite tokens (NaN,
/// ±inf) are rejected with [`MetricError::NonComparable`] before any
/// cell is built.
pub fn differentiable_distance<B: Backend>(
    predictions: Tensor<B, 1>,
    labels:      Tensor<B, 1>,
) -> Result<Tensor<B, 1>> {
    ensure_comparable(&predictions, "prediction")?;
    ensure_comparable(&labels, "label")?;

    let [m] = predictions.dims();
    let [n] = labels.dims();
    let device = predictions.device();

    // Degenerate sizes: the base row/column IS the answer
    if m == 0 || n == 0 {
        return Ok(constant(m.max(n), &device));
    }

    let costs = substitution_costs(predictions, labels);

    // ── Row 0: distance from the empty prefix of `predictions` ───────────────
    let mut previous: Vec<Tensor<B, 1>> = (0..=n).map(|j| constant(j, &device)).collect();

    // ── Rows 1..=m, each built append-only ────────────────────────────────────
    for i in 1..=m {
        let cost_row = costs.clone().slice([i - 1..i, 0..n]).reshape([n]);

        let mut current: Vec<Tensor<B, 1>> = Vec::with_capacity(n + 1);
        current.push(constant(i, &device));

        for j in 1..=n {
            let deletion     = previous[j].clone().add_scalar(1.0);
            let insertion    = current[j - 1].clone().add_scalar(1.0);
            let substitution = previous[j - 1].clone() + cost_row.clone().slice([j - 1..j]);

            let cell = select_min(select_min(deletion, insertion), substitution);
            current.push(cell);
        }

        previous = current;
    }

    Ok(previous[n].clone())
}

/// Per-cell substitution cost grid, shape [m, n].
fn substitution_costs<B: Backend>(predictions: Tensor<B, 1>, labels: Tensor<B, 1>) -> Tensor<B, 2> {
    let [m] = predictions.dims();
    let [n] = labels.dims();

    let p = predictions.reshape([m, 1]).expand([m, n]);
    let l = labels.reshape([1, n]).expand([m, n]);

    let mismatch = p.clone().equal(l.clone()).bool_not().float();

    // Squares past f32::MAX would turn the bracket into inf - inf = NaN.
    // Those cells keep their 0/1 cost and carry no gradient.
    let diff     = p - l;
    let overflow = {
        let d = diff.clone().detach();
        (d.clone() * d).equal_elem(f32::INFINITY)
    };
    let diff     = diff.mask_fill(overflow, 0.0);
    let sq       = diff.clone() * diff;

    mismatch + (sq.clone() - sq.detach())
}

/// `current` unless `candidate` is strictly lower; gradient follows the pick.
fn select_min<B: Backend>(current: Tensor<B, 1>, candidate: Tensor<B, 1>) -> Tensor<B, 1> {
    let take_candidate = candidate.clone().lower(current.clone());
    current.mask_where(take_candidate, candidate)
}

fn constant<B: Backend>(value: usize, device: &B::Device) -> Tensor<B, 1> {
    Tensor::<B, 1>::from_floats([value as f32], device)
}

fn ensure_comparable<B: Backend>(tokens: &Tensor<B, 1>, side: &'static str) -> Result<()> {
    if tokens.dims()[0] == 0 {
        return Ok(());
    }
    let nan_count: i64 = tokens
        .clone()
        .is_nan()
        .int()
        .sum()
        .into_scalar()
        .elem::<i64>();
    let inf_count: i64 = tokens
        .clone()
        .abs()
        .equal_elem(f32::INFINITY)
        .int()
        .sum()
        .into_scalar()
        .elem::<i64>();

    let count = (nan_count + inf_count) as usize;
    if count > 0 {
        return Err(MetricError::NonComparable { side, count });
    }
    Ok(())
}
