// ============================================================
// Layer 6: Infrastructure Layer
// ============================================================
// File output shared by the use cases:
//
//   report.rs - writes the per-pair CSV, the corpus summary
//               JSON and the EvalConfig that produced them,
//               so an evaluation run can be reproduced later.
//
// Reference: Rust Book §9 (Error Handling with anyhow)

/// Evaluation report persistence
pub mod report;
