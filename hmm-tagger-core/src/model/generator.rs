use rand::Rng;

use crate::error::{Error, Result};
use crate::model::generation_input::GenerationInput;
use crate::model::hmm_model::HmmModel;
use crate::model::sampler::sample;

/// Sentence generator over a borrowed [`HmmModel`].
///
/// # Responsibilities
/// - Random mode: walk the tag chain by weighted sampling until the terminal tag
/// - Predictive mode: follow the best transition a fixed number of times
/// - Emit one sampled token per visited tag
///
/// The generator owns its random source, so a seeded RNG gives reproducible
/// sentences.
#[derive(Debug)]
pub struct Generator<'a, R: Rng> {
	model: &'a HmmModel,
	rng: R,
	input: GenerationInput,
}

impl<'a, R: Rng> Generator<'a, R> {
	/// Creates a generator using `rng` as its random source.
	pub fn with_rng(model: &'a HmmModel, rng: R, input: GenerationInput) -> Self {
		Self { model, rng, input }
	}

	pub fn input(&self) -> &GenerationInput {
		&self.input
	}

	/// Replaces the generation parameters.
	pub fn set_input(&mut self, input: GenerationInput) {
		self.input = input;
	}

	/// Generates a sentence by sampling tags until the terminal tag comes up.
	///
	/// Starting from the start tag, each step samples the next tag from the
	/// current tag's transitions, then a token from that tag's observations.
	/// The token sampled for the terminal tag ends the sentence.
	///
	/// # Errors
	/// - [`Error::NoTransitions`] / [`Error::NoObservations`] when the walk reaches
	///   a tag the model has no row for
	/// - [`Error::MaxLengthExceeded`] when `max_length` tokens were emitted
	///   without reaching the terminal tag
	pub fn generate_random(&mut self) -> Result<String> {
		let mut tokens: Vec<&'a str> = Vec::new();
		let mut tag = self.model.start_tag();

		loop {
			if tokens.len() >= self.input.max_length() {
				return Err(Error::MaxLengthExceeded {
					max_length: self.input.max_length(),
					terminal_tag: self.input.terminal_tag.clone(),
				});
			}

			tag = self.sample_tag(tag)?;
			tokens.push(self.sample_token(tag)?);

			if tag == self.input.terminal_tag {
				break;
			}
		}

		log::debug!("random sentence of {} tokens", tokens.len());
		Ok(tokens.join(" "))
	}

	/// Generates a sentence of `predictive_length` tokens plus the terminal token.
	///
	/// Each step moves to the best scoring transition of the current tag (the
	/// first one in key order among equals) and samples a token for it. The
	/// greedy walk rarely reaches the terminal tag on its own, hence the fixed
	/// length.
	///
	/// # Errors
	/// [`Error::NoTransitions`] / [`Error::NoObservations`] when the walk reaches a
	/// tag the model has no row for.
	pub fn generate_predictive(&mut self) -> Result<String> {
		let mut tokens: Vec<&str> = Vec::with_capacity(self.input.predictive_length() + 1);
		let mut tag = self.model.start_tag();

		for _ in 0..self.input.predictive_length() {
			tag = self.best_tag(tag)?;
			tokens.push(self.sample_token(tag)?);
		}
		tokens.push(&self.input.terminal_token);

		Ok(tokens.join(" "))
	}

	fn sample_tag(&mut self, tag: &str) -> Result<&'a str> {
		let model = self.model;
		model
			.transitions()
			.row(tag)
			.and_then(|row| sample(&mut self.rng, row))
			.ok_or_else(|| Error::NoTransitions { tag: tag.to_owned() })
	}

	fn best_tag(&self, tag: &str) -> Result<&'a str> {
		let model = self.model;
		model
			.transitions()
			.row(tag)
			.and_then(|row| row.best())
			.map(|(next, _)| next)
			.ok_or_else(|| Error::NoTransitions { tag: tag.to_owned() })
	}

	fn sample_token(&mut self, tag: &str) -> Result<&'a str> {
		let model = self.model;
		model
			.observations()
			.row(tag)
			.and_then(|row| sample(&mut self.rng, row))
			.ok_or_else(|| Error::NoObservations { tag: tag.to_owned() })
	}
}
