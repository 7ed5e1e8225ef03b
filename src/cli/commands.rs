//! Command implementations for the typogen CLI.

use std::path::Path;

use crate::batch;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::corrupt::{TypoGenerator, TypoPolicy};
use crate::error::Result;

/// Execute a CLI command.
pub fn execute_command(args: TypogenArgs) -> Result<()> {
    match &args.command {
        Command::Corrupt(corrupt_args) => corrupt_file(corrupt_args.clone(), &args),
        Command::Sample(sample_args) => sample_query(sample_args.clone(), &args),
    }
}

/// Corrupt a query file.
fn corrupt_file(args: CorruptArgs, cli_args: &TypogenArgs) -> Result<()> {
    let policy = build_policy(
        args.policy_file.as_deref(),
        args.probability,
        args.seed,
        args.min_word_length,
        None,
    )?;

    if cli_args.verbosity() > 0 {
        println!("Corrupting queries from: {}", args.input.display());
        println!("Writing to: {}", args.output.display());
    }
    if cli_args.verbosity() > 1 {
        println!(
            "Policy: probability={}, min_word_length={}, seed={}",
            policy.probability, policy.min_word_length, policy.seed
        );
    }

    let outcome = batch::corrupt_file(&args.input, &args.output, &policy)?;

    output_result("Queries corrupted successfully", &outcome, cli_args)?;

    Ok(())
}

/// Print corrupted variants of a single query.
fn sample_query(args: SampleArgs, cli_args: &TypogenArgs) -> Result<()> {
    // Sampling exists to eyeball the corruption distribution, so unless the
    // caller says otherwise every draw corrupts.
    let policy = build_policy(
        args.policy_file.as_deref(),
        args.probability,
        args.seed,
        args.min_word_length,
        Some(1.0),
    )?;

    let seed = policy.seed;
    let mut generator = TypoGenerator::new(policy)?;
    let variants = (0..args.count)
        .map(|_| generator.corrupt(&args.query))
        .collect();

    let result = SampleResult {
        query: args.query,
        variants,
        seed,
    };

    output_result("Corrupted variants", &result, cli_args)?;

    Ok(())
}

/// Assemble a policy from an optional JSON file plus flag overrides.
fn build_policy(
    policy_file: Option<&Path>,
    probability: Option<f64>,
    seed: Option<u64>,
    min_word_length: Option<usize>,
    default_probability: Option<f64>,
) -> Result<TypoPolicy> {
    let mut policy = match policy_file {
        Some(path) => TypoPolicy::from_json_file(path)?,
        None => {
            let mut policy = TypoPolicy::default();
            if let Some(p) = default_probability {
                policy.probability = p;
            }
            policy
        }
    };

    if let Some(p) = probability {
        policy.probability = p;
    }
    if let Some(s) = seed {
        policy.seed = s;
    }
    if let Some(m) = min_word_length {
        policy.min_word_length = m;
    }

    policy.validate()?;
    Ok(policy)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_policy_flag_overrides() {
        let policy = build_policy(None, Some(0.8), Some(11), Some(2), None).unwrap();
        assert!((policy.probability - 0.8).abs() < f64::EPSILON);
        assert_eq!(policy.seed, 11);
        assert_eq!(policy.min_word_length, 2);
    }

    #[test]
    fn test_build_policy_default_probability_applies_without_flag() {
        let policy = build_policy(None, None, None, None, Some(1.0)).unwrap();
        assert!((policy.probability - 1.0).abs() < f64::EPSILON);

        let policy = build_policy(None, Some(0.3), None, None, Some(1.0)).unwrap();
        assert!((policy.probability - 0.3).abs() < f64::EPSILON);
    }

    #[test]
    fn test_build_policy_rejects_bad_flags() {
        assert!(build_policy(None, Some(1.5), None, None, None).is_err());
    }
}
