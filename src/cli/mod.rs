// ============================================================
// Layer 1: CLI / Presentation Layer
// ============================================================
// Parses arguments with clap and routes each subcommand to the
// library. This is the only layer that prints to stdout.
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, DistanceArgs, EvaluateArgs, LossArgs, RateArgs};

use crate::distance::distance;
use crate::domain::sequence::{characters, words};
use crate::domain::traits::ErrorMetric;
use crate::metrics::{character_error_rate, word_error_rate, CharacterErrorRate, WordErrorRate};

#[derive(Parser, Debug)]
#[command(
    name = "error-metrics",
    version,
    about = "Edit distance, character/word error rates and a differentiable word error loss."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Route the subcommand; never computes anything itself.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Distance(args) => run_distance(args),
            Commands::Cer(args)      => run_rate(&CharacterErrorRate, args),
            Commands::Wer(args)      => run_rate(&WordErrorRate, args),
            Commands::Demo           => run_demo(),
            Commands::Evaluate(args) => run_evaluate(args),
            Commands::Loss(args)     => run_loss(args),
        }
    }
}

fn run_distance(args: DistanceArgs) -> Result<()> {
    let d = if args.words {
        distance(&words(&args.a), &words(&args.b))
    } else {
        distance(&characters(&args.a), &characters(&args.b))
    };
    println!("{d}");
    Ok(())
}

fn run_rate(metric: &dyn ErrorMetric, args: RateArgs) -> Result<()> {
    if metric.reference_len(&args.reference) == 0 {
        tracing::warn!("Empty reference: {} is not finite", metric.name());
    }
    println!("{}", metric.score(&args.hypothesis, &args.reference));
    Ok(())
}

fn run_demo() -> Result<()> {
    println!("{}", distance(&characters("sence"), &characters("nonsence")));
    println!("{}", character_error_rate("sence", "nonsence"));
    println!("{}", word_error_rate("Bread is bad", "Not so bad"));
    Ok(())
}

fn run_evaluate(args: EvaluateArgs) -> Result<()> {
    use crate::application::evaluate_use_case::EvaluateUseCase;

    let outcome = EvaluateUseCase::new(args.into()).execute()?;
    for s in &outcome.scores {
        println!("{:>5}  CER={:.4}  WER={:.4}", s.index, s.cer, s.wer);
    }

    let t = &outcome.summary;
    println!(
        "\n{} pairs ({} skipped) | CER={:.4} | WER={:.4} | S={} D={} I={}",
        t.pairs, outcome.skipped.len(), t.micro_cer, t.micro_wer,
        t.substitutions, t.deletions, t.insertions,
    );
    Ok(())
}

fn run_loss(args: LossArgs) -> Result<()> {
    use crate::application::loss_use_case::LossUseCase;

    let report = LossUseCase::new(args.batch).execute()?;
    println!("loss          = {:.6}", report.loss);
    println!("per-example   = {:?}", report.normalized_distances);
    println!("|gradient|_1  = {:.6}", report.gradient_l1);
    Ok(())
}
