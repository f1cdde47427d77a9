// ============================================================
// Edit-Distance Engine
// ============================================================
// The Wagner–Fischer dynamic program over any two sequences
// whose elements can be compared with exact equality.
//
//   matrix.rs    - builds the (m+1) x (n+1) distance matrix
//                  and reads the final value out of it
//
//   alignment.rs - walks a finished matrix back to the origin
//                  and counts matches / substitutions /
//                  deletions / insertions
//
// The `T: Eq` bound is what keeps non-comparable elements out:
// a sequence of f32 (where NaN != NaN) does not type-check here.
// Callers with float tokens go through ml::differentiable, which
// rejects NaN at runtime instead.

pub mod alignment;
pub mod matrix;

pub use alignment::{edit_counts, EditCounts};
pub use matrix::{distance_matrix, DistanceMatrix};

/// Minimum number of single-element insertions, deletions or
/// substitutions needed to turn `a` into `b`.
///
/// Empty inputs are valid: `distance(&[], b) == b.len()`.
///
/// ```
/// use text_error_metrics::distance::distance;
///
/// let a: Vec<char> = "sence".chars().collect();
/// let b: Vec<char> = "nonsence".chars().collect();
/// assert_eq!(distance(&a, &b), 3);
/// ```
pub fn distance<T: Eq>(a: &[T], b: &[T]) -> usize {
    distance_matrix(a, b).distance()
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_worked_example() {
        assert_eq!(distance(&chars("sence"), &chars("nonsence")), 3);
    }

    #[test]
    fn test_identity() {
        assert_eq!(distance(&chars("kitten"), &chars("kitten")), 0);
    }

    #[test]
    fn test_empty_sides() {
        let empty: Vec<char> = Vec::new();
        assert_eq!(distance(&empty, &chars("abc")), 3);
        assert_eq!(distance(&chars("abcd"), &empty), 4);
        assert_eq!(distance(&empty, &empty), 0);
    }

    #[test]
    fn test_classic_pairs() {
        assert_eq!(distance(&chars("kitten"), &chars("sitting")), 3);
        assert_eq!(distance(&chars("flaw"), &chars("lawn")), 2);
        assert_eq!(distance(&chars("abc"), &chars("xyz")), 3);
    }

    #[test]
    fn test_word_sequences() {
        let a = ["Bread", "is", "bad"];
        let b = ["Not", "so", "bad"];
        assert_eq!(distance(&a, &b), 2);
    }

    #[test]
    fn test_integer_tokens() {
        // transposition costs two edits: no Damerau shortcut
        assert_eq!(distance(&[1u32, 2, 3], &[1u32, 3, 2]), 2);
    }
}
