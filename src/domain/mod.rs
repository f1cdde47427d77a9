// ============================================================
// Layer 3: Domain Layer
// ============================================================
// Plain Rust types that describe what gets scored:
//
//   sequence.rs  - how a string becomes a sequence of units
//                  (characters for CER, words for WER)
//
//   text_pair.rs - a hypothesis/reference pair and the score
//                  record produced for it
//
//   traits.rs    - ErrorMetric and PairSource abstractions
//
// Rules for this layer:
//   - NO Burn framework types
//   - NO file I/O
//   - Only structs, enums, traits and pure functions

pub mod sequence;

pub mod text_pair;

pub mod traits;
