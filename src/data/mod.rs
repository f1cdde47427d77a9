// ============================================================
// Layer 4: Data Input
// ============================================================
// Reads scoring inputs from disk:
//
//   pairs JSON       → JsonPairLoader    → Vec<TextPair>
//   token batch JSON → load_token_batch  → Vec<TokenPair>
//                                              │
//                                              ▼
//                                  ml::batcher::TokenBatcher
//
// Reference: serde_json documentation
//            Rust Book §9 (Error Handling)

/// JSON loaders for text pairs and token batches
pub mod loader;
