use crate::distance::distance;
use crate::domain::sequence::{characters, words};
use crate::domain::traits::ErrorMetric;

/// Character error rate of `hypothesis` against `reference`.
///
/// ```
/// use text_error_metrics::metrics::character_error_rate;
///
/// assert_eq!(character_error_rate("sence", "nonsence"), 0.375);
/// ```
pub fn character_error_rate(hypothesis: &str, reference: &str) -> f64 {
    CharacterErrorRate.score(hypothesis, reference)
}

/// Word error rate of `hypothesis` against `reference`, splitting on
/// single spaces without collapsing repeats.
pub fn word_error_rate(hypothesis: &str, reference: &str) -> f64 {
    WordErrorRate.score(hypothesis, reference)
}

/// CER as an [`ErrorMetric`]
#[derive(Debug, Clone, Copy, Default)]
pub struct CharacterErrorRate;

impl ErrorMetric for CharacterErrorRate {
    fn name(&self) -> &'static str {
        "CER"
    }

    fn edits(&self, hypothesis: &str, reference: &str) -> usize {
        distance(&characters(hypothesis), &characters(reference))
    }

    fn reference_len(&self, reference: &str) -> usize {
        reference.chars().count()
    }
}

/// WER as an [`ErrorMetric`]
#[derive(Debug, Clone, Copy, Default)]
pub struct WordErrorRate;

impl ErrorMetric for WordErrorRate {
    fn name(&self) -> &'static str {
        "WER"
    }

    fn edits(&self, hypothesis: &str, reference: &str) -> usize {
        distance(&words(hypothesis), &words(reference))
    }

    fn reference_len(&self, reference: &str) -> usize {
        words(reference).len()
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cer_worked_example() {
        assert_eq!(character_error_rate("sence", "nonsence"), 3.0 / 8.0);
    }

    #[test]
    fn test_wer_worked_example() {
        let wer = word_error_rate("Bread is bad", "Not so bad");
        assert!((wer - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_perfect_match_scores_zero() {
        assert_eq!(character_error_rate("hello world", "hello world"), 0.0);
        assert_eq!(word_error_rate("hello world", "hello world"), 0.0);
    }

    #[test]
    fn test_rate_can_exceed_one() {
        // 6 insertions against a 2 character reference
        assert_eq!(character_error_rate("abcdefgh", "ab"), 3.0);
    }

    #[test]
    fn test_cer_empty_reference_is_infinite() {
        assert!(character_error_rate("abc", "").is_infinite());
        assert!(character_error_rate("", "").is_nan());
    }

    #[test]
    fn test_wer_empty_reference_is_one_empty_word() {
        // "" splits into [""], so the normaliser is 1
        assert_eq!(word_error_rate("", ""), 0.0);
        assert_eq!(word_error_rate("hello", ""), 1.0);
    }

    #[test]
    fn test_wer_repeated_delimiter() {
        // ["a", "", "b"] vs ["a", "b"]: one deletion over 2 reference words
        assert_eq!(word_error_rate("a  b", "a b"), 0.5);
        // ["a", "b"] vs ["a", "", "b"]: one insertion over 3 reference words
        assert!((word_error_rate("a b", "a  b") - 1.0 / 3.0).abs() < 1e-12);
        assert_eq!(WordErrorRate.reference_len("a  b"), 3);
    }

    #[test]
    fn test_wer_is_case_sensitive() {
        assert_eq!(word_error_rate("Hello", "hello"), 1.0);
    }

    #[test]
    fn test_metric_names() {
        assert_eq!(CharacterErrorRate.name(), "CER");
        assert_eq!(WordErrorRate.name(), "WER");
    }
}
