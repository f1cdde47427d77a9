// ============================================================
// Layer 2: Application / Use Cases
// ============================================================
// Orchestrates the other layers for one end-to-end job. No
// distance math and no printing here, only workflow:
//
//   evaluate_use_case.rs - score a file of text pairs and write
//                          a CER / WER report
//
//   loss_use_case.rs     - forward + backward of the word error
//                          loss over a token batch file
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// Corpus scoring workflow
pub mod evaluate_use_case;

// Differentiable loss workflow
pub mod loss_use_case;
