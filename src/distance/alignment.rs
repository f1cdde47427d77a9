// ============================================================
// Alignment Breakdown
// ============================================================
// A single distance number says how many edits there are, not
// which kind. Transcription reports usually split WER into
// substitutions (S), deletions (D) and insertions (I):
//
//   WER = (S + D + I) / N
//
// We recover the split by walking the finished matrix back from
// (m, n) to (0, 0), at each step moving to a predecessor that
// could have produced the current cell. Preference order on ties:
// diagonal (match / substitution), then deletion, then insertion.

use serde::{Deserialize, Serialize};

use super::matrix::distance_matrix;

/// Per-kind edit counts for one aligned pair of sequences.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditCounts {
    /// Positions where both sequences agree
    pub matches: usize,

    /// Element of `a` replaced by a different element of `b`
    pub substitutions: usize,

    /// Element of `a` with no counterpart in `b`
    pub deletions: usize,

    /// Element of `b` with no counterpart in `a`
    pub insertions: usize,
}

impl EditCounts {
    /// S + D + I - always equal to the edit distance
    pub fn total_edits(&self) -> usize {
        self.substitutions + self.deletions + self.insertions
    }
}

/// Align `a` against `b` and count each kind of edit.
pub fn edit_counts<T: Eq>(a: &[T], b: &[T]) -> EditCounts {
    let matrix = distance_matrix(a, b);
    let mut counts = EditCounts::default();
    let (mut i, mut j) = (a.len(), b.len());

    while i > 0 || j > 0 {
        let here = matrix.get(i, j);

        if i > 0 && j > 0 {
            let same = a[i - 1] == b[j - 1];
            if matrix.get(i - 1, j - 1) + usize::from(!same) == here {
                if same {
                    counts.matches += 1;
                } else {
                    counts.substitutions += 1;
                }
                i -= 1;
                j -= 1;
                continue;
            }
        }

        if i > 0 && matrix.get(i - 1, j) + 1 == here {
            counts.deletions += 1;
            i -= 1;
        } else {
            counts.insertions += 1;
            j -= 1;
        }
    }

    counts
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::distance;

    #[test]
    fn test_prefix_insertions() {
        let a: Vec<char> = "sence".chars().collect();
        let b: Vec<char> = "nonsence".chars().collect();
        let c = edit_counts(&a, &b);
        assert_eq!(c.insertions, 3);
        assert_eq!(c.matches, 5);
        assert_eq!(c.total_edits(), distance(&a, &b));
    }

    #[test]
    fn test_word_substitutions() {
        let c = edit_counts(&["Bread", "is", "bad"], &["Not", "so", "bad"]);
        assert_eq!(c, EditCounts { matches: 1, substitutions: 2, deletions: 0, insertions: 0 });
    }

    #[test]
    fn test_deletions_only() {
        let c = edit_counts(&[1, 2, 3, 4], &[2, 4]);
        assert_eq!(c.deletions, 2);
        assert_eq!(c.matches, 2);
        assert_eq!(c.total_edits(), 2);
    }

    #[test]
    fn test_empty_inputs() {
        let empty: [u8; 0] = [];
        assert_eq!(edit_counts(&empty, &[1, 2]).insertions, 2);
        assert_eq!(edit_counts(&[1, 2], &empty).deletions, 2);
        assert_eq!(edit_counts(&empty, &empty), EditCounts::default());
    }
}
