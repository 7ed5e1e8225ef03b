//! Corruption policy configuration.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::corrupt::operation::OpKind;
use crate::error::{Result, TypogenError};

/// Relative weights for choosing among the corruption operations.
///
/// Weights must be finite and non-negative, and at least one must be
/// positive. They do not need to sum to one; selection is proportional.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OperationWeights {
    /// Weight of random character insertion.
    pub insertion: f64,
    /// Weight of random character deletion.
    pub deletion: f64,
    /// Weight of uniform character substitution.
    pub substitution: f64,
    /// Weight of keyboard-adjacent character substitution.
    pub keyboard_substitution: f64,
    /// Weight of adjacent-character transposition.
    pub transposition: f64,
}

impl Default for OperationWeights {
    fn default() -> Self {
        OperationWeights {
            insertion: 1.0,
            deletion: 1.0,
            substitution: 1.0,
            keyboard_substitution: 1.0,
            transposition: 1.0,
        }
    }
}

impl OperationWeights {
    /// Sum of all weights.
    pub fn total(&self) -> f64 {
        self.insertion
            + self.deletion
            + self.substitution
            + self.keyboard_substitution
            + self.transposition
    }

    /// Validate that every weight is finite and non-negative and that at
    /// least one weight is positive.
    pub fn validate(&self) -> Result<()> {
        for (name, w) in self.entries() {
            if !w.is_finite() || w < 0.0 {
                return Err(TypogenError::config(format!(
                    "weight '{name}' must be finite and non-negative, got {w}"
                )));
            }
        }
        if self.total() <= 0.0 {
            return Err(TypogenError::config("operation weights sum to zero"));
        }
        Ok(())
    }

    /// Select one operation kind by weighted random choice.
    ///
    /// Returns `None` if all weights are zero, which a validated policy
    /// rules out; callers treat `None` as "leave the query unchanged".
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Option<OpKind> {
        let total = self.total();
        if total <= 0.0 {
            return None;
        }

        let mut r = rng.random_range(0.0..total);
        let mut fallback = None;
        for (kind, weight) in self.kinds() {
            if weight <= 0.0 {
                continue;
            }
            if r < weight {
                return Some(kind);
            }
            r -= weight;
            fallback = Some(kind);
        }

        // Floating point rounding can leave a sliver past the last bucket.
        fallback
    }

    fn entries(&self) -> [(&'static str, f64); 5] {
        [
            ("insertion", self.insertion),
            ("deletion", self.deletion),
            ("substitution", self.substitution),
            ("keyboard_substitution", self.keyboard_substitution),
            ("transposition", self.transposition),
        ]
    }

    fn kinds(&self) -> [(OpKind, f64); 5] {
        [
            (OpKind::Insert, self.insertion),
            (OpKind::Delete, self.deletion),
            (OpKind::Substitute, self.substitution),
            (OpKind::KeyboardSubstitute, self.keyboard_substitution),
            (OpKind::Transpose, self.transposition),
        ]
    }
}

/// Configuration for query corruption.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TypoPolicy {
    /// Probability in [0, 1] that a given query is corrupted at all.
    pub probability: f64,
    /// Relative weights across the operation variants.
    pub weights: OperationWeights,
    /// Words with fewer characters than this are never edited.
    pub min_word_length: usize,
    /// Random seed for reproducible runs.
    pub seed: u64,
}

impl Default for TypoPolicy {
    fn default() -> Self {
        TypoPolicy {
            probability: 0.5,
            weights: OperationWeights::default(),
            min_word_length: 3,
            seed: 42,
        }
    }
}

impl TypoPolicy {
    /// Validate the policy. Called once at generator construction; an
    /// invalid policy is a fatal configuration error, not a per-query one.
    pub fn validate(&self) -> Result<()> {
        if !self.probability.is_finite() || !(0.0..=1.0).contains(&self.probability) {
            return Err(TypogenError::config(format!(
                "probability must be in [0, 1], got {}",
                self.probability
            )));
        }
        self.weights.validate()
    }

    /// Load a policy from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        let policy: TypoPolicy = serde_json::from_reader(BufReader::new(file))?;
        Ok(policy)
    }

    /// Set the corruption probability.
    pub fn with_probability(mut self, probability: f64) -> Self {
        self.probability = probability;
        self
    }

    /// Set the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the minimum eligible word length.
    pub fn with_min_word_length(mut self, min_word_length: usize) -> Self {
        self.min_word_length = min_word_length;
        self
    }
}
