use rand::rngs::ThreadRng;

use crate::corpus::Corpus;
use crate::error::Result;
use crate::evaluation::Accuracy;
use crate::model::decoder::Decoder;
use crate::model::generation_input::GenerationInput;
use crate::model::generator::Generator;
use crate::model::table::ScoreTable;
use crate::model::trainer::Trainer;

/// Virtual tag preceding every sentence.
pub const DEFAULT_START_TAG: &str = "#";

/// Log-score used for a token a tag never emitted during training.
pub const DEFAULT_UNSEEN_PENALTY: f64 = -100.0;

/// A trained Hidden Markov Model over part-of-speech tags.
///
/// The `HmmModel` stores:
/// - `transitions`: log-probability of moving from one tag to the next
/// - `observations`: log-probability of a tag emitting a token
/// - `start_tag`: the virtual tag every sentence starts from
/// - `unseen_penalty`: score substituted for unseen (tag, token) pairs
///
/// # Invariants
/// - Built once (by training or by [`ModelBuilder`]) and never mutated afterwards
/// - `start_tag` never emits a token
#[derive(Clone, Debug, PartialEq)]
pub struct HmmModel {
	transitions: ScoreTable,
	observations: ScoreTable,
	start_tag: String,
	unseen_penalty: f64,
}

impl HmmModel {
	/// Trains a model on `corpus` with default [`Trainer`] settings.
	pub fn train(corpus: &Corpus) -> Self {
		Trainer::default().train(corpus)
	}

	/// Starts a hand-authored model.
	pub fn builder() -> ModelBuilder {
		ModelBuilder::default()
	}

	pub(crate) fn from_tables(transitions: ScoreTable, observations: ScoreTable, start_tag: &str, unseen_penalty: f64) -> Self {
		Self {
			transitions,
			observations,
			start_tag: start_tag.to_owned(),
			unseen_penalty,
		}
	}

	pub fn transitions(&self) -> &ScoreTable {
		&self.transitions
	}

	pub fn observations(&self) -> &ScoreTable {
		&self.observations
	}

	pub fn start_tag(&self) -> &str {
		&self.start_tag
	}

	pub fn unseen_penalty(&self) -> f64 {
		self.unseen_penalty
	}

	/// Emission score of `token` for `tag`, falling back to the unseen penalty.
	pub fn emission(&self, tag: &str, token: &str) -> f64 {
		self.observations.score(tag, token).unwrap_or(self.unseen_penalty)
	}

	/// Most likely tag sequence for `tokens` (see [`Decoder::decode`]).
	pub fn decode<S: AsRef<str>>(&self, tokens: &[S]) -> Result<Vec<String>> {
		Decoder::new(self).decode(tokens)
	}

	/// Tags a line of whitespace separated tokens.
	pub fn tag_line(&self, line: &str) -> Result<Vec<String>> {
		let tokens: Vec<&str> = line.split_whitespace().collect();
		self.decode(tokens.as_slice())
	}

	/// Decodes every sentence of `corpus` and counts matches against its tags.
	///
	/// # Errors
	/// Propagates the first decoding failure.
	pub fn evaluate(&self, corpus: &Corpus) -> Result<Accuracy> {
		let decoder = Decoder::new(self);
		let mut accuracy = Accuracy::default();
		for sentence in corpus {
			let predicted = decoder.decode(sentence.tokens())?;
			accuracy.accumulate(sentence.tags(), predicted.as_slice());
		}
		log::info!(
			"evaluated {} sentences: {}/{} tags correct",
			corpus.len(),
			accuracy.correct(),
			accuracy.total()
		);
		Ok(accuracy)
	}

	/// Sentence generator over the thread-local RNG with default settings.
	pub fn generator(&self) -> Generator<'_, ThreadRng> {
		Generator::with_rng(self, rand::rng(), GenerationInput::default())
	}
}

/// Builder for hand-authored models.
///
/// Scores are taken as given: no normalization is applied, so fixture tables
/// may deliberately break the per-row sum.
#[derive(Debug)]
pub struct ModelBuilder {
	transitions: ScoreTable,
	observations: ScoreTable,
	start_tag: String,
	unseen_penalty: f64,
}

impl Default for ModelBuilder {
	fn default() -> Self {
		Self {
			transitions: ScoreTable::new(),
			observations: ScoreTable::new(),
			start_tag: DEFAULT_START_TAG.to_owned(),
			unseen_penalty: DEFAULT_UNSEEN_PENALTY,
		}
	}
}

impl ModelBuilder {
	pub fn start_tag(mut self, start_tag: &str) -> Self {
		self.start_tag = start_tag.to_owned();
		self
	}

	pub fn unseen_penalty(mut self, unseen_penalty: f64) -> Self {
		self.unseen_penalty = unseen_penalty;
		self
	}

	/// Adds the transition `from -> to` with log-score `score`.
	pub fn transition(mut self, from: &str, to: &str, score: f64) -> Self {
		self.transitions.insert(from, to, score);
		self
	}

	/// Adds the emission of `token` by `tag` with log-score `score`.
	pub fn observation(mut self, tag: &str, token: &str, score: f64) -> Self {
		self.observations.insert(tag, token, score);
		self
	}

	pub fn build(self) -> HmmModel {
		HmmModel::from_tables(self.transitions, self.observations, &self.start_tag, self.unseen_penalty)
	}
}
