//! Hidden Markov Model part-of-speech tagging library.
//!
//! This crate provides a supervised HMM tagger including:
//! - Corpus loading from parallel token / tag files
//! - Parameter estimation by counting and log-normalization
//! - Viterbi decoding of unseen sentences
//! - Random and predictive sentence generation from a trained model
//! - Accuracy measurement against a gold-tagged corpus
//!
//! A trained [`HmmModel`] is immutable; decoding and generation only borrow it.

/// Tagged sentences used for training and evaluation.
pub mod corpus;

/// Error type shared by every fallible operation of the crate.
pub mod error;

/// Accuracy counting for decoded sentences.
pub mod evaluation;

/// Probability tables, training, decoding and generation.
pub mod model;

/// File reading helpers.
///
/// Not exposed
pub(crate) mod io;

pub use corpus::{Corpus, Sentence};
pub use error::{Error, Result};
pub use evaluation::Accuracy;
pub use model::generation_input::GenerationInput;
pub use model::generator::Generator;
pub use model::hmm_model::{HmmModel, ModelBuilder};
pub use model::table::{ScoreRow, ScoreTable};
pub use model::trainer::Trainer;
