//! Top-level module of the tagging model.
//!
//! This module provides:
//! - The two-level score tables (`ScoreTable`, `ScoreRow`)
//! - Supervised training from a corpus (`Trainer`)
//! - The immutable model and its builder (`HmmModel`, `ModelBuilder`)
//! - Viterbi decoding (`Decoder`)
//! - Random and predictive sentence generation (`Generator`)

/// Immutable trained model and builder for hand-authored ones.
pub mod hmm_model;

/// Two-level `tag -> (key -> log-score)` tables.
pub mod table;

/// Frequency counting and log-normalization.
pub mod trainer;

/// Viterbi decoding with a frontier and a backpointer trellis.
pub mod decoder;

/// Hand-authored eight-tag model.
pub mod fixture;

/// Weighted random choice over a score row.
///
/// Shared by both generation modes.
pub mod sampler;

/// Generation parameters (terminal tag, lengths).
pub mod generation_input;

/// Random and predictive sentence generation.
pub mod generator;
