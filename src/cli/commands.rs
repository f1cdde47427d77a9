// ============================================================
// Layer 1: CLI Commands and Arguments
// ============================================================
// Subcommands:
//   distance - raw edit distance between two strings
//   cer      - character error rate
//   wer      - word error rate
//   demo     - the three worked examples
//   evaluate - score a JSON file of pairs, optionally write a report
//   loss     - word error loss + gradient over a token batch file
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand};
use crate::application::evaluate_use_case::EvalConfig;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Minimum number of insertions, deletions and substitutions between two strings
    Distance(DistanceArgs),

    /// Character error rate of a hypothesis against a reference
    Cer(RateArgs),

    /// Word error rate of a hypothesis against a reference
    Wer(RateArgs),

    /// Print the worked examples
    Demo,

    /// Score every pair in a JSON file
    Evaluate(EvaluateArgs),

    /// Evaluate the differentiable word error loss over a token batch
    Loss(LossArgs),
}

#[derive(Args, Debug)]
pub struct DistanceArgs {
    /// First sequence
    #[arg(long)]
    pub a: String,

    /// Second sequence
    #[arg(long)]
    pub b: String,

    /// Compare space-delimited words instead of characters
    #[arg(long, default_value_t = false)]
    pub words: bool,
}

#[derive(Args, Debug)]
pub struct RateArgs {
    /// Predicted text
    #[arg(long)]
    pub hypothesis: String,

    /// Ground-truth text; the rate is normalised by its length
    #[arg(long)]
    pub reference: String,
}

#[derive(Args, Debug)]
pub struct EvaluateArgs {
    /// JSON array of {"hypothesis", "reference"} objects
    #[arg(long, default_value = "pairs.json")]
    pub pairs: String,

    /// Directory for pairs.csv, summary.json and eval_config.json
    #[arg(long)]
    pub report_dir: Option<String>,

    /// Leave out pairs with an empty reference instead of scoring them as inf
    #[arg(long, default_value_t = false)]
    pub skip_empty_references: bool,
}

/// The application layer never sees clap types.
impl From<EvaluateArgs> for EvalConfig {
    fn from(a: EvaluateArgs) -> Self {
        EvalConfig {
            pairs_path:            a.pairs,
            report_dir:            a.report_dir,
            skip_empty_references: a.skip_empty_references,
        }
    }
}

#[derive(Args, Debug)]
pub struct LossArgs {
    /// JSON object {"predictions": [[..]], "labels": [[..]]}
    #[arg(long)]
    pub batch: String,
}
