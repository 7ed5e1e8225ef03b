//! Corruption operations.
//!
//! Each operation is one atomic string edit simulating a typing mistake.
//! Positions are character indices, not byte offsets, so multi-byte text is
//! handled correctly. Applying an operation produces a new string; the input
//! is never mutated.

use serde::{Deserialize, Serialize};

/// The kind of a corruption operation, without its parameters.
///
/// Used for weighted selection and for reporting which edits a batch applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpKind {
    Insert,
    Delete,
    Substitute,
    KeyboardSubstitute,
    Transpose,
}

/// A single corruption operation with the parameters needed to apply it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorruptionOperation {
    /// Insert `ch` at character index `index`. Valid indices span `0..=len`,
    /// so before-first and after-last insertions are both possible.
    Insert { index: usize, ch: char },
    /// Delete the character at `index`.
    Delete { index: usize },
    /// Replace the character at `index` with `ch`, drawn uniformly from the
    /// alphabet.
    Substitute { index: usize, ch: char },
    /// Replace the character at `index` with `ch`, drawn from the keys
    /// adjacent to the original on the keyboard.
    KeyboardSubstitute { index: usize, ch: char },
    /// Swap the characters at `index` and `index + 1`. Valid for `index` in
    /// `0..=len - 2`.
    Transpose { index: usize },
}

impl CorruptionOperation {
    /// The kind of this operation.
    pub fn kind(&self) -> OpKind {
        match self {
            CorruptionOperation::Insert { .. } => OpKind::Insert,
            CorruptionOperation::Delete { .. } => OpKind::Delete,
            CorruptionOperation::Substitute { .. } => OpKind::Substitute,
            CorruptionOperation::KeyboardSubstitute { .. } => OpKind::KeyboardSubstitute,
            CorruptionOperation::Transpose { .. } => OpKind::Transpose,
        }
    }

    /// Apply this operation to `text`, returning the edited string.
    ///
    /// Length delta is +1 for insertion, -1 for deletion, and 0 otherwise.
    /// An out-of-range position returns the text unchanged; a well-formed
    /// generator never produces one, but a hand-built operation can.
    pub fn apply(&self, text: &str) -> String {
        let chars: Vec<char> = text.chars().collect();
        match *self {
            CorruptionOperation::Insert { index, ch } => {
                if index > chars.len() {
                    return text.to_string();
                }
                let mut out: Vec<char> = Vec::with_capacity(chars.len() + 1);
                out.extend_from_slice(&chars[..index]);
                out.push(ch);
                out.extend_from_slice(&chars[index..]);
                out.into_iter().collect()
            }
            CorruptionOperation::Delete { index } => {
                if index >= chars.len() {
                    return text.to_string();
                }
                let mut out = chars;
                out.remove(index);
                out.into_iter().collect()
            }
            CorruptionOperation::Substitute { index, ch }
            | CorruptionOperation::KeyboardSubstitute { index, ch } => {
                if index >= chars.len() {
                    return text.to_string();
                }
                let mut out = chars;
                out[index] = ch;
                out.into_iter().collect()
            }
            CorruptionOperation::Transpose { index } => {
                if index + 1 >= chars.len() {
                    return text.to_string();
                }
                let mut out = chars;
                out.swap(index, index + 1);
                out.into_iter().collect()
            }
        }
    }
}
