// ============================================================
// Layer 6: Evaluation Report Writer
// ============================================================
// Persists the result of an `evaluate` run to a directory:
//
//   report/
//     pairs.csv          ← one row per scored pair
//     summary.json       ← corpus totals (CorpusScore)
//     eval_config.json   ← the EvalConfig that produced them
//
// Example pairs.csv:
//   index,cer,wer,char_distance,reference_chars,word_distance,reference_words,substitutions,deletions,insertions
//   0,0.375000,1.000000,3,8,1,1,1,0,0
//   1,0.800000,0.666667,8,10,2,3,2,0,0
//
// Rates print with 6 decimal places; inf / NaN print as Rust
// formats them ("inf", "NaN") so empty references stay visible.
//
// Reference: Rust Book §12 (I/O and File Handling)

use anyhow::{Context, Result};
use std::{
    fs::{self, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
};

use crate::application::evaluate_use_case::EvalConfig;
use crate::domain::text_pair::PairScore;
use crate::metrics::CorpusScore;

const CSV_HEADER: &str = concat!(
    "index,cer,wer,char_distance,reference_chars,",
    "word_distance,reference_words,substitutions,deletions,insertions",
);

/// Writes per-pair rows and the run summary into one directory.
pub struct ReportWriter {
    dir:      PathBuf,
    csv_path: PathBuf,
}

impl ReportWriter {
    /// Create the report directory and start a fresh pairs.csv.
    /// A previous report in the same directory is overwritten.
    pub fn new(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)
            .with_context(|| format!("Cannot create report directory '{}'", dir.display()))?;

        let csv_path = dir.join("pairs.csv");
        let mut f = fs::File::create(&csv_path)
            .with_context(|| format!("Cannot create '{}'", csv_path.display()))?;
        writeln!(f, "{CSV_HEADER}")?;
        tracing::debug!("Created report CSV: '{}'", csv_path.display());

        Ok(Self { dir, csv_path })
    }

    /// Append one scored pair.
    pub fn log(&self, s: &PairScore) -> Result<()> {
        let mut f = OpenOptions::new()
            .append(true)
            .open(&self.csv_path)
            .with_context(|| format!("Cannot append to '{}'", self.csv_path.display()))?;

        writeln!(
            f,
            "{},{:.6},{:.6},{},{},{},{},{},{},{}",
            s.index,
            s.cer,
            s.wer,
            s.char_distance,
            s.reference_chars,
            s.word_distance,
            s.reference_words,
            s.word_edits.substitutions,
            s.word_edits.deletions,
            s.word_edits.insertions,
        )?;
        Ok(())
    }

    /// Write corpus totals as pretty JSON.
    ///
    /// serde_json writes non-finite floats as `null`.
    pub fn save_summary(&self, summary: &CorpusScore) -> Result<()> {
        let path = self.dir.join("summary.json");
        fs::write(&path, serde_json::to_string_pretty(summary)?)
            .with_context(|| format!("Cannot write summary to '{}'", path.display()))?;
        tracing::debug!("Saved summary to '{}'", path.display());
        Ok(())
    }

    /// Record the configuration next to the results it produced.
    pub fn save_config(&self, cfg: &EvalConfig) -> Result<()> {
        let path = self.dir.join("eval_config.json");
        fs::write(&path, serde_json::to_string_pretty(cfg)?)
            .with_context(|| format!("Cannot write config to '{}'", path.display()))?;
        Ok(())
    }

    /// Read back a configuration written by `save_config`.
    pub fn load_config(dir: impl AsRef<Path>) -> Result<EvalConfig> {
        let path = dir.as_ref().join("eval_config.json");
        let json = fs::read_to_string(&path)
            .with_context(|| format!("Cannot read config from '{}'", path.display()))?;
        Ok(serde_json::from_str(&json)?)
    }

    pub fn csv_path(&self) -> &Path {
        &self.csv_path
    }
}
