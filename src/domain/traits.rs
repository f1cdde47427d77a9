// ============================================================
// Layer 3: Core Traits (Abstractions)
// ============================================================
// The application layer talks to metrics and pair sources only
// through these traits:
//   - CharacterErrorRate and WordErrorRate implement ErrorMetric
//   - JsonPairLoader implements PairSource
//
// A new metric (say, a token error rate over a tokenizer's ids)
// plugs in by implementing ErrorMetric; nothing upstream changes.

use anyhow::Result;

use crate::domain::text_pair::TextPair;

// ─── ErrorMetric ──────────────────────────────────────────────────────────────
/// A reference-normalised edit-distance metric over text.
pub trait ErrorMetric {
    /// Short display name, e.g. "CER"
    fn name(&self) -> &'static str;

    /// Raw edit distance between the unit sequences of both texts
    fn edits(&self, hypothesis: &str, reference: &str) -> usize;

    /// Number of units in the reference (the normaliser)
    fn reference_len(&self, reference: &str) -> usize;

    /// Normalise an edit count that was already computed.
    /// Plain float division: a zero-length reference yields inf (or NaN for 0/0).
    fn rate(&self, edits: usize, reference_len: usize) -> f64 {
        edits as f64 / reference_len as f64
    }

    /// `edits / reference_len` for one pair of texts.
    fn score(&self, hypothesis: &str, reference: &str) -> f64 {
        self.rate(self.edits(hypothesis, reference), self.reference_len(reference))
    }
}

// ─── PairSource ───────────────────────────────────────────────────────────────
/// Anything that can produce hypothesis/reference pairs to score.
pub trait PairSource {
    /// Load every available pair, in order.
    fn load_all(&self) -> Result<Vec<TextPair>>;
}
