// ============================================================
// Layer 4: Input Loaders
// ============================================================
// Two JSON formats are read from disk:
//
//   pairs file (for `evaluate`):
//     [
//       {"hypothesis": "sence",        "reference": "nonsence"},
//       {"hypothesis": "Bread is bad", "reference": "Not so bad"}
//     ]
//
//   token batch file (for `loss`):
//     {
//       "predictions": [[1, 2, 3], [4, 5, 6]],
//       "labels":      [[1, 2, 4], [4, 5, 6]]
//     }
//
// serde does the parsing; this module adds file context to the
// errors and zips the batch rows into TokenPairs.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

use crate::domain::text_pair::TextPair;
use crate::domain::traits::PairSource;
use crate::ml::batcher::TokenPair;

/// Reads hypothesis/reference pairs from a JSON array file.
pub struct JsonPairLoader {
    path: PathBuf,
}

impl JsonPairLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PairSource for JsonPairLoader {
    fn load_all(&self) -> Result<Vec<TextPair>> {
        let json = fs::read_to_string(&self.path)
            .with_context(|| format!("Cannot read pairs file '{}'", self.path.display()))?;

        let pairs: Vec<TextPair> = serde_json::from_str(&json).with_context(|| {
            format!(
                "'{}' is not a JSON array of {{hypothesis, reference}} objects",
                self.path.display()
            )
        })?;

        tracing::info!("Loaded {} pairs from '{}'", pairs.len(), self.path.display());
        Ok(pairs)
    }
}

/// On-disk layout of a token batch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenBatchFile {
    pub predictions: Vec<Vec<f32>>,
    pub labels:      Vec<Vec<f32>>,
}

impl TokenBatchFile {
    /// Zip prediction and label rows into TokenPairs.
    ///
    /// Row lengths are checked later by the batcher; only the row
    /// counts have to agree here.
    pub fn into_pairs(self) -> Result<Vec<TokenPair>> {
        if self.predictions.len() != self.labels.len() {
            bail!(
                "batch has {} prediction rows but {} label rows",
                self.predictions.len(),
                self.labels.len()
            );
        }
        Ok(self
            .predictions
            .into_iter()
            .zip(self.labels)
            .map(|(prediction, label)| TokenPair::new(prediction, label))
            .collect())
    }
}

/// Read and unpack a token batch file.
pub fn load_token_batch(path: impl Into<PathBuf>) -> Result<Vec<TokenPair>> {
    let path = path.into();
    let json = fs::read_to_string(&path)
        .with_context(|| format!("Cannot read batch file '{}'", path.display()))?;

    let file: TokenBatchFile = serde_json::from_str(&json)
        .with_context(|| format!("'{}' is not a {{predictions, labels}} batch", path.display()))?;

    let pairs = file.into_pairs()?;
    tracing::info!("Loaded {} token examples from '{}'", pairs.len(), path.display());
    Ok(pairs)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        f
    }

    #[test]
    fn test_load_pairs() {
        let f = write_temp(r#"[{"hypothesis": "a b", "reference": "a c"}]"#);
        let pairs = JsonPairLoader::new(f.path()).load_all().unwrap();
        assert_eq!(pairs, vec![TextPair::new("a b", "a c")]);
    }

    #[test]
    fn test_missing_pairs_file_mentions_path() {
        let err = JsonPairLoader::new("does/not/exist.json").load_all().unwrap_err();
        assert!(err.to_string().contains("does/not/exist.json"));
    }

    #[test]
    fn test_malformed_pairs_file() {
        let f = write_temp(r#"{"hypothesis": "not an array"}"#);
        assert!(JsonPairLoader::new(f.path()).load_all().is_err());
    }

    #[test]
    fn test_load_token_batch() {
        let f = write_temp(r#"{"predictions": [[1, 2], [3, 4]], "labels": [[1, 2], [3, 5]]}"#);
        let pairs = load_token_batch(f.path()).unwrap();
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[1], TokenPair::new(vec![3.0, 4.0], vec![3.0, 5.0]));
    }

    #[test]
    fn test_row_count_mismatch() {
        let f = write_temp(r#"{"predictions": [[1, 2], [3, 4]], "labels": [[1, 2]]}"#);
        let err = load_token_batch(f.path()).unwrap_err();
        assert!(err.to_string().contains("2 prediction rows but 1 label rows"));
    }
}
