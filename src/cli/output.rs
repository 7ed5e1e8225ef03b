//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, TypogenArgs};
use crate::error::Result;

/// Result structure for the sample command.
#[derive(Debug, Serialize, Deserialize)]
pub struct SampleResult {
    pub query: String,
    pub variants: Vec<String>,
    pub seed: u64,
}

/// Output a result in the configured format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &TypogenArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &TypogenArgs) -> Result<()> {
    if args.verbosity() > 0 {
        println!("{message}");
    }

    // Convert to JSON value for easier manipulation
    let value = serde_json::to_value(result)?;

    match result {
        _ if std::any::type_name::<T>().contains("SampleResult") => output_sample_human(&value),
        _ if std::any::type_name::<T>().contains("BatchOutcome") => output_outcome_human(&value),
        _ => output_generic_human(&value),
    }

    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &TypogenArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    println!("{json}");
    Ok(())
}

/// Output sample variants in human format.
fn output_sample_human(value: &serde_json::Value) {
    let Some(obj) = value.as_object() else {
        return;
    };

    if let Some(query) = obj.get("query").and_then(|q| q.as_str()) {
        println!("Query: {query}");
        println!("──────");
    }

    if let Some(variants) = obj.get("variants").and_then(|v| v.as_array()) {
        for (i, variant) in variants.iter().enumerate() {
            if let Some(text) = variant.as_str() {
                println!("{:>3}: {text}", i + 1);
            }
        }
    }
}

/// Output a batch outcome in human format.
fn output_outcome_human(value: &serde_json::Value) {
    let Some(obj) = value.as_object() else {
        return;
    };

    let field = |name: &str| obj.get(name).and_then(|v| v.as_u64()).unwrap_or(0);

    println!("Queries read:  {}", field("total"));
    println!("Corrupted:     {}", field("corrupted"));
    println!("Unchanged:     {}", field("unchanged"));
    println!("Lines skipped: {}", field("skipped"));
    println!("Duration:      {}ms", field("duration_ms"));
}

/// Generic key/value output for other result types.
fn output_generic_human(value: &serde_json::Value) {
    if let Some(obj) = value.as_object() {
        for (key, val) in obj {
            println!("{key}: {val}");
        }
    } else {
        println!("{value}");
    }
}
