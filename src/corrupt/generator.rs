//! The typo generator.
//!
//! [`TypoGenerator`] owns a validated [`TypoPolicy`] and a seeded PRNG, and
//! turns clean query strings into corrupted variants. For a fixed seed and
//! call sequence the output is exactly reproducible, which experiment
//! repeatability depends on. The PRNG is owned state, never ambient global
//! randomness; concurrent workers each construct their own generator.

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use unicode_segmentation::UnicodeSegmentation;

use crate::corrupt::operation::{CorruptionOperation, OpKind};
use crate::corrupt::policy::TypoPolicy;
use crate::error::Result;
use crate::keyboard::Qwerty;

/// Stochastic query corruptor.
///
/// # Examples
///
/// ```
/// use typogen::corrupt::{TypoGenerator, TypoPolicy};
///
/// let policy = TypoPolicy::default().with_probability(1.0).with_seed(42);
/// let mut generator = TypoGenerator::new(policy).unwrap();
///
/// let corrupted = generator.corrupt("what is the capital of france");
/// assert_ne!(corrupted, "what is the capital of france");
/// ```
#[derive(Debug)]
pub struct TypoGenerator {
    policy: TypoPolicy,
    rng: StdRng,
}

impl TypoGenerator {
    /// Create a generator, seeding the PRNG from the policy.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the policy has an out-of-range
    /// probability or invalid weights.
    pub fn new(policy: TypoPolicy) -> Result<Self> {
        policy.validate()?;
        let rng = StdRng::seed_from_u64(policy.seed);
        Ok(TypoGenerator { policy, rng })
    }

    /// Create a generator with an explicitly supplied PRNG.
    ///
    /// Batch processing uses this to give every query its own
    /// deterministically derived random stream.
    pub fn with_rng(policy: TypoPolicy, rng: StdRng) -> Result<Self> {
        policy.validate()?;
        Ok(TypoGenerator { policy, rng })
    }

    /// The policy this generator was built with.
    pub fn policy(&self) -> &TypoPolicy {
        &self.policy
    }

    /// Corrupt a query, returning a new string.
    ///
    /// With probability `1 - policy.probability` the query comes back
    /// unchanged. Otherwise one eligible word is chosen uniformly, one
    /// operation is chosen by weighted random choice, and one valid position
    /// is chosen uniformly within the word.
    ///
    /// Degraded inputs never fail: an empty query, or a query with no word
    /// of at least `policy.min_word_length` characters, is returned
    /// unchanged so a single odd input cannot abort a batch.
    pub fn corrupt(&mut self, query: &str) -> String {
        if query.is_empty() {
            debug!("empty query passed through unchanged");
            return String::new();
        }

        if self.rng.random::<f64>() >= self.policy.probability {
            return query.to_string();
        }

        let words = self.eligible_words(query);
        if words.is_empty() {
            debug!(
                "no word with at least {} characters in {query:?}; passed through unchanged",
                self.policy.min_word_length
            );
            return query.to_string();
        }

        let (offset, word) = words[self.rng.random_range(0..words.len())];
        let chars: Vec<char> = word.chars().collect();
        let Some(op) = self.sample_operation(&chars) else {
            return query.to_string();
        };

        let edited = op.apply(word);
        let mut out = String::with_capacity(query.len() + 4);
        out.push_str(&query[..offset]);
        out.push_str(&edited);
        out.push_str(&query[offset + word.len()..]);
        out
    }

    /// Words eligible for corruption: alphanumeric-bearing segments (UAX #29
    /// word boundaries) with at least `min_word_length` characters. Each
    /// entry is (byte offset, word).
    fn eligible_words<'a>(&self, query: &'a str) -> Vec<(usize, &'a str)> {
        query
            .split_word_bound_indices()
            .filter(|(_, w)| w.chars().any(char::is_alphanumeric))
            .filter(|(_, w)| w.chars().count() >= self.policy.min_word_length)
            .collect()
    }

    /// Sample one operation with a valid position for a word.
    ///
    /// Positions that would make the operation a no-op are excluded:
    /// substitution never re-draws the original character, and transposition
    /// only targets adjacent pairs of distinct characters. When a word has no
    /// transposable pair at all (all characters equal, or a single
    /// character), transposition falls back to plain substitution.
    fn sample_operation(&mut self, chars: &[char]) -> Option<CorruptionOperation> {
        let mut kind = self.policy.weights.sample(&mut self.rng)?;

        if kind == OpKind::Transpose && !has_transposable_pair(chars) {
            kind = OpKind::Substitute;
        }

        let op = match kind {
            OpKind::Insert => {
                // Insertion points include both word boundaries.
                let index = self.rng.random_range(0..=chars.len());
                let ch = Qwerty::random_key(&mut self.rng);
                CorruptionOperation::Insert { index, ch }
            }
            OpKind::Delete => {
                let index = self.rng.random_range(0..chars.len());
                CorruptionOperation::Delete { index }
            }
            OpKind::Substitute => {
                let index = self.rng.random_range(0..chars.len());
                let ch = Qwerty::random_key_excluding(&mut self.rng, chars[index]);
                CorruptionOperation::Substitute { index, ch }
            }
            OpKind::KeyboardSubstitute => {
                let index = self.rng.random_range(0..chars.len());
                let ch = Qwerty::random_neighbor(&mut self.rng, chars[index]);
                CorruptionOperation::KeyboardSubstitute { index, ch }
            }
            OpKind::Transpose => {
                let candidates: Vec<usize> = (0..chars.len() - 1)
                    .filter(|&i| chars[i] != chars[i + 1])
                    .collect();
                let index = candidates[self.rng.random_range(0..candidates.len())];
                CorruptionOperation::Transpose { index }
            }
        };

        Some(op)
    }
}

/// Whether any adjacent pair of characters differs.
fn has_transposable_pair(chars: &[char]) -> bool {
    chars.windows(2).any(|w| w[0] != w[1])
}
