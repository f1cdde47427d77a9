// ============================================================
// Layer 2: EvaluateUseCase
// ============================================================
// Scores a file of hypothesis/reference pairs:
//
//   Step 1: Load pairs                 (Layer 4 - data)
//   Step 2: Guard empty references     (this layer)
//   Step 3: Score each pair            (Layer 2 - metrics)
//   Step 4: Aggregate corpus totals    (Layer 2 - metrics)
//   Step 5: Write report               (Layer 6 - infra)
//
// Empty references make CER divide by zero. By default they are
// scored anyway and show up as inf/NaN; with
// `skip_empty_references` they are left out with a warning.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::data::loader::JsonPairLoader;
use crate::domain::text_pair::{PairScore, TextPair};
use crate::domain::traits::PairSource;
use crate::infra::report::ReportWriter;
use crate::metrics::{CorpusScore, CorpusScorer};

// ─── Evaluation Configuration ────────────────────────────────────────────────
// Serialisable so a report directory records how it was produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvalConfig {
    /// JSON file holding `[{hypothesis, reference}, ...]`
    pub pairs_path: String,

    /// Where to write pairs.csv / summary.json; None = no files
    pub report_dir: Option<String>,

    /// Leave out pairs whose reference is the empty string
    pub skip_empty_references: bool,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            pairs_path:            "pairs.json".to_string(),
            report_dir:            None,
            skip_empty_references: false,
        }
    }
}

/// Everything an evaluation run produced.
#[derive(Debug, Clone)]
pub struct EvaluationOutcome {
    pub scores:  Vec<PairScore>,
    pub summary: CorpusScore,

    /// Indices of pairs left out because their reference was empty
    pub skipped: Vec<usize>,
}

pub struct EvaluateUseCase {
    config: EvalConfig,
}

impl EvaluateUseCase {
    pub fn new(config: EvalConfig) -> Self {
        Self { config }
    }

    /// Load from `config.pairs_path`, then score.
    pub fn execute(&self) -> Result<EvaluationOutcome> {
        let loader = JsonPairLoader::new(&self.config.pairs_path);
        self.execute_with(&loader)
    }

    /// Score pairs from any source.
    pub fn execute_with(&self, source: &dyn PairSource) -> Result<EvaluationOutcome> {
        let cfg = &self.config;

        // ── Step 1: Load ──────────────────────────────────────────────────────
        let pairs = source.load_all()?;

        // ── Step 2: Empty-reference guard ─────────────────────────────────────
        let mut skipped = Vec::new();
        let mut kept: Vec<(usize, &TextPair)> = Vec::with_capacity(pairs.len());
        for (index, pair) in pairs.iter().enumerate() {
            if pair.has_empty_reference() {
                if cfg.skip_empty_references {
                    tracing::warn!("Skipping pair {}: empty reference", index);
                    skipped.push(index);
                    continue;
                }
                tracing::warn!("Pair {} has an empty reference; its CER is not finite", index);
            }
            kept.push((index, pair));
        }

        // ── Step 3: Score ─────────────────────────────────────────────────────
        let scorer = CorpusScorer::new();
        let scores: Vec<PairScore> = kept
            .iter()
            .map(|(index, pair)| {
                let s = scorer.score_pair(*index, pair);
                tracing::debug!("Pair {}: CER={:.4} WER={:.4}", index, s.cer, s.wer);
                s
            })
            .collect();

        // ── Step 4: Aggregate ─────────────────────────────────────────────────
        let summary = scorer.aggregate(&scores);
        tracing::info!(
            "Scored {} pairs ({} skipped): CER={:.4} WER={:.4}",
            summary.pairs,
            skipped.len(),
            summary.micro_cer,
            summary.micro_wer,
        );

        // ── Step 5: Report ────────────────────────────────────────────────────
        if let Some(dir) = &cfg.report_dir {
            let writer = ReportWriter::new(dir)?;
            for s in &scores {
                writer.log(s)?;
            }
            writer.save_summary(&summary)?;
            writer.save_config(cfg)?;
            tracing::info!("Report written to '{}'", dir);
        }

        Ok(EvaluationOutcome { scores, summary, skipped })
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    struct InMemory(Vec<TextPair>);

    impl PairSource for InMemory {
        fn load_all(&self) -> Result<Vec<TextPair>> {
            Ok(self.0.clone())
        }
    }

    fn source() -> InMemory {
        InMemory(vec![
            TextPair::new("sence", "nonsence"),
            TextPair::new("oops", ""),
            TextPair::new("Bread is bad", "Not so bad"),
        ])
    }

    #[test]
    fn test_empty_reference_scored_by_default() {
        let out = EvaluateUseCase::new(EvalConfig::default()).execute_with(&source()).unwrap();
        assert_eq!(out.scores.len(), 3);
        assert!(out.skipped.is_empty());
        assert!(out.scores[1].cer.is_infinite());
    }

    #[test]
    fn test_skip_empty_references() {
        let cfg = EvalConfig { skip_empty_references: true, ..EvalConfig::default() };
        let out = EvaluateUseCase::new(cfg).execute_with(&source()).unwrap();
        assert_eq!(out.skipped, vec![1]);
        assert_eq!(out.scores.iter().map(|s| s.index).collect::<Vec<_>>(), vec![0, 2]);
        assert_eq!(out.summary.micro_wer, 0.75);
    }

    #[test]
    fn test_report_files_written() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = EvalConfig {
            report_dir: Some(dir.path().display().to_string()),
            ..EvalConfig::default()
        };
        EvaluateUseCase::new(cfg.clone()).execute_with(&source()).unwrap();

        assert!(dir.path().join("pairs.csv").exists());
        assert!(dir.path().join("summary.json").exists());
        assert_eq!(ReportWriter::load_config(dir.path()).unwrap(), cfg);
    }
}
