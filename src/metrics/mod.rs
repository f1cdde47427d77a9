// ============================================================
// Metric Layer
// ============================================================
// Character error rate and word error rate. Both are the edit
// distance between hypothesis and reference, divided by the
// length of the reference:
//
//   CER = distance(chars(hyp), chars(ref)) / |chars(ref)|
//   WER = distance(words(hyp), words(ref)) / |words(ref)|
//
// Neither is capped at 1.0: a hypothesis with more edits than
// the reference has units scores above 1.
//
// An empty reference is NOT special-cased. CER then divides by
// zero and returns inf (or NaN for two empty strings); callers
// that can see empty references must guard for them.

pub mod corpus;
pub mod rates;

pub use corpus::{CorpusScore, CorpusScorer};
pub use rates::{character_error_rate, word_error_rate, CharacterErrorRate, WordErrorRate};
