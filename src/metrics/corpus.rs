// ============================================================
// Corpus Scoring
// ============================================================
// Scores many pairs and aggregates them.
//
// Corpus rates are micro-averaged: all edits over all reference
// units, so long references weigh more than short ones.
//
//   corpus_wer = Σ word_distance / Σ reference_words
//
// The macro average (mean of per-pair rates) is reported too,
// since it is what a loop over word_error_rate() would give.

use serde::{Deserialize, Serialize};

use crate::distance::{distance, edit_counts};
use crate::domain::sequence::{characters, words};
use crate::domain::text_pair::{PairScore, TextPair};
use crate::domain::traits::ErrorMetric;
use crate::metrics::{CharacterErrorRate, WordErrorRate};

/// Aggregate over every scored pair.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CorpusScore {
    pub pairs: usize,
    pub char_distance: usize,
    pub reference_chars: usize,
    pub word_distance: usize,
    pub reference_words: usize,
    pub substitutions: usize,
    pub deletions: usize,
    pub insertions: usize,

    /// Σ char_distance / Σ reference_chars
    pub micro_cer: f64,

    /// Σ word_distance / Σ reference_words
    pub micro_wer: f64,

    /// Mean of per-pair CER
    pub macro_cer: f64,

    /// Mean of per-pair WER
    pub macro_wer: f64,
}

/// Scores individual pairs and folds them into a CorpusScore.
#[derive(Debug, Clone, Copy, Default)]
pub struct CorpusScorer;

impl CorpusScorer {
    pub fn new() -> Self {
        Self
    }

    /// Compute every per-pair figure for one TextPair.
    pub fn score_pair(&self, index: usize, pair: &TextPair) -> PairScore {
        let hyp_chars = characters(&pair.hypothesis);
        let ref_chars = characters(&pair.reference);
        let hyp_words = words(&pair.hypothesis);
        let ref_words = words(&pair.reference);

        let word_edits    = edit_counts(&hyp_words, &ref_words);
        let char_distance = distance(&hyp_chars, &ref_chars);
        let word_distance = word_edits.total_edits();

        PairScore {
            index,
            cer: CharacterErrorRate.rate(char_distance, ref_chars.len()),
            wer: WordErrorRate.rate(word_distance, ref_words.len()),
            char_distance,
            word_distance,
            reference_chars: ref_chars.len(),
            reference_words: ref_words.len(),
            word_edits,
        }
    }

    /// Score a whole slice of pairs, indices following slice order.
    pub fn score_all(&self, pairs: &[TextPair]) -> Vec<PairScore> {
        pairs
            .iter()
            .enumerate()
            .map(|(i, p)| self.score_pair(i, p))
            .collect()
    }

    /// Fold per-pair scores into corpus totals.
    ///
    /// An empty slice, or one whose references are all empty, gives
    /// NaN rates: there is nothing to normalise by.
    pub fn aggregate(&self, scores: &[PairScore]) -> CorpusScore {
        let mut total = CorpusScore { pairs: scores.len(), ..CorpusScore::default() };

        let mut cer_sum = 0.0;
        let mut wer_sum = 0.0;
        for s in scores {
            total.char_distance   += s.char_distance;
            total.reference_chars += s.reference_chars;
            total.word_distance   += s.word_distance;
            total.reference_words += s.reference_words;
            total.substitutions   += s.word_edits.substitutions;
            total.deletions       += s.word_edits.deletions;
            total.insertions      += s.word_edits.insertions;
            cer_sum += s.cer;
            wer_sum += s.wer;
        }

        let n = scores.len() as f64;
        total.micro_cer = total.char_distance as f64 / total.reference_chars as f64;
        total.micro_wer = total.word_distance as f64 / total.reference_words as f64;
        total.macro_cer = cer_sum / n;
        total.macro_wer = wer_sum / n;
        total
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn pairs() -> Vec<TextPair> {
        vec![
            TextPair::new("sence", "nonsence"),
            TextPair::new("Bread is bad", "Not so bad"),
        ]
    }

    #[test]
    fn test_score_pair_matches_free_functions() {
        let scorer = CorpusScorer::new();
        let s = scorer.score_pair(0, &TextPair::new("Bread is bad", "Not so bad"));
        assert_eq!(s.word_distance, 2);
        assert_eq!(s.reference_words, 3);
        assert_eq!(s.wer, crate::metrics::word_error_rate("Bread is bad", "Not so bad"));
        assert_eq!(s.cer, crate::metrics::character_error_rate("Bread is bad", "Not so bad"));
        assert_eq!(s.word_edits.substitutions, 2);
    }

    #[test]
    fn test_aggregate_micro_and_macro() {
        let scorer = CorpusScorer::new();
        let scores = scorer.score_all(&pairs());
        let total  = scorer.aggregate(&scores);

        assert_eq!(total.pairs, 2);
        // words: "sence" vs "nonsence" → 1 edit / 1 word; Bread… → 2 / 3
        assert_eq!(total.word_distance, 3);
        assert_eq!(total.reference_words, 4);
        assert_eq!(total.micro_wer, 0.75);
        assert!((total.macro_wer - (1.0 + 2.0 / 3.0) / 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_score_pair_agrees_with_metric_trait() {
        let scorer = CorpusScorer::new();
        for (i, pair) in pairs().iter().enumerate() {
            let s = scorer.score_pair(i, pair);
            assert_eq!(s.cer, CharacterErrorRate.score(&pair.hypothesis, &pair.reference));
            assert_eq!(s.wer, WordErrorRate.score(&pair.hypothesis, &pair.reference));
            assert_eq!(s.reference_chars, CharacterErrorRate.reference_len(&pair.reference));
            assert_eq!(s.reference_words, WordErrorRate.reference_len(&pair.reference));
        }
    }

    #[test]
    fn test_empty_reference_pair_is_not_finite() {
        let s = CorpusScorer::new().score_pair(0, &TextPair::new("abc", ""));
        assert!(s.cer.is_infinite());
        assert_eq!(s.wer, 1.0);
    }

    #[test]
    fn test_empty_corpus_is_nan() {
        let total = CorpusScorer::new().aggregate(&[]);
        assert_eq!(total.pairs, 0);
        assert!(total.micro_cer.is_nan());
        assert!(total.macro_wer.is_nan());
    }
}
