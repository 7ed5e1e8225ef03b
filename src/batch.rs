//! Batch corruption of query files.
//!
//! Corruption is independent per query, so the batch path fans out across a
//! rayon pool. Determinism survives parallelism because every query gets its
//! own PRNG, seeded from the policy seed and the query's position in the
//! file; thread scheduling cannot change the output.

use std::path::Path;
use std::time::Instant;

use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::corrupt::{TypoGenerator, TypoPolicy};
use crate::error::Result;
use crate::query::{self, Query};

/// Summary of one batch corruption run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchOutcome {
    /// Queries read from the input file.
    pub total: usize,
    /// Queries whose text was changed.
    pub corrupted: usize,
    /// Queries passed through unchanged (no-op draw or no eligible word).
    pub unchanged: usize,
    /// Malformed input lines skipped.
    pub skipped: usize,
    /// Wall-clock duration of the run.
    pub duration_ms: u64,
}

/// Corrupt a slice of queries in parallel.
///
/// Order and identifiers are preserved. Each query's random stream is
/// derived from `policy.seed` and its index, so repeated runs over the same
/// input produce identical output.
///
/// # Errors
///
/// Returns a configuration error if the policy is invalid; per-query
/// problems degrade to passing the query through unchanged.
pub fn corrupt_queries(queries: &[Query], policy: &TypoPolicy) -> Result<Vec<Query>> {
    policy.validate()?;

    queries
        .par_iter()
        .enumerate()
        .map(|(index, query)| {
            let rng = StdRng::seed_from_u64(policy.seed.wrapping_add(index as u64));
            let mut generator = TypoGenerator::with_rng(policy.clone(), rng)?;
            Ok(query.with_text(generator.corrupt(&query.text)))
        })
        .collect()
}

/// Corrupt a tab-separated query file into another.
///
/// Malformed input lines are skipped (and counted); everything else is
/// corrupted according to the policy and written in input order.
pub fn corrupt_file<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    policy: &TypoPolicy,
) -> Result<BatchOutcome> {
    let start_time = Instant::now();

    let (queries, skipped) = query::read_queries_from_path(input)?;
    let corrupted_queries = corrupt_queries(&queries, policy)?;

    let corrupted = queries
        .iter()
        .zip(&corrupted_queries)
        .filter(|(before, after)| before.text != after.text)
        .count();

    query::write_queries_to_path(output, &corrupted_queries)?;

    Ok(BatchOutcome {
        total: queries.len(),
        corrupted,
        unchanged: queries.len() - corrupted,
        skipped,
        duration_ms: start_time.elapsed().as_millis() as u64,
    })
}
