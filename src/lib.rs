//! # typogen
//!
//! Synthetic typo generation for retrieval queries.
//!
//! ## Features
//!
//! - Five corruption operations: insertion, deletion, substitution,
//!   keyboard-adjacent substitution, and adjacent-character transposition
//! - Seeded, reproducible randomness
//! - Weighted operation selection behind a configurable corruption probability
//! - Batch corruption of tab-separated query files, parallel across queries

pub mod batch;
pub mod cli;
pub mod corrupt;
pub mod error;
pub mod keyboard;
pub mod query;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
