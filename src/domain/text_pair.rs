// ============================================================
// Layer 3: TextPair Domain Type
// ============================================================
// One scoring example: what the system produced (hypothesis)
// and what it should have produced (reference).
//
// Example:
//   hypothesis: "Bread is bad"
//   reference:  "Not so bad"
//   WER:        2 / 3
//
// Field names match the JSON input format, so serde can read
// a file of pairs directly into Vec<TextPair>.

use serde::{Deserialize, Serialize};

use crate::distance::EditCounts;

/// A hypothesis/reference pair to be scored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextPair {
    /// The predicted text
    pub hypothesis: String,

    /// The ground-truth text; all rates are normalised by its length
    pub reference: String,
}

impl TextPair {
    /// Create a new TextPair from anything string-like
    pub fn new(hypothesis: impl Into<String>, reference: impl Into<String>) -> Self {
        Self {
            hypothesis: hypothesis.into(),
            reference:  reference.into(),
        }
    }

    /// CER is undefined when the reference has no characters
    pub fn has_empty_reference(&self) -> bool {
        self.reference.is_empty()
    }
}

/// Scores computed for one TextPair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairScore {
    /// Position of the pair in its source
    pub index: usize,

    /// Character error rate - may be inf/NaN for an empty reference
    pub cer: f64,

    /// Word error rate
    pub wer: f64,

    /// Character-level edit distance
    pub char_distance: usize,

    /// Word-level edit distance
    pub word_distance: usize,

    /// Number of characters in the reference
    pub reference_chars: usize,

    /// Number of words in the reference (empty words included)
    pub reference_words: usize,

    /// S / D / I breakdown at the word level
    pub word_edits: EditCounts,
}
