use crate::error::{Error, Result};

/// Tag conventionally used for sentence-final punctuation.
pub const DEFAULT_TERMINAL_TAG: &str = ".";

/// Token appended at the end of a predictive sentence.
pub const DEFAULT_TERMINAL_TOKEN: &str = ".";

/// Number of tokens a predictive sentence holds before its terminal token.
pub const DEFAULT_PREDICTIVE_LENGTH: usize = 7;

/// Default cap on the number of tokens of a random sentence.
pub const DEFAULT_MAX_LENGTH: usize = 256;

/// Parameters of sentence generation.
///
/// # Responsibilities
/// - Name the tag that ends a random sentence and the token that ends a predictive one
/// - Fix the length of predictive sentences
/// - Bound the length of random sentences, whose loop otherwise depends on
///   eventually sampling the terminal tag
///
/// # Invariants
/// - `max_length >= 1`
/// - `predictive_length >= 1`
#[derive(Clone, Debug, PartialEq)]
pub struct GenerationInput {
	/// Sampling this tag ends a random sentence.
	pub terminal_tag: String,

	/// Appended after the last predictive token.
	pub terminal_token: String,

	/// Maximum number of tokens of a random sentence.
	max_length: usize,

	/// Number of greedy steps of a predictive sentence.
	predictive_length: usize,
}

impl Default for GenerationInput {
	fn default() -> Self {
		Self {
			terminal_tag: DEFAULT_TERMINAL_TAG.to_owned(),
			terminal_token: DEFAULT_TERMINAL_TOKEN.to_owned(),
			max_length: DEFAULT_MAX_LENGTH,
			predictive_length: DEFAULT_PREDICTIVE_LENGTH,
		}
	}
}

impl GenerationInput {
	/// Returns the current random sentence cap.
	pub fn max_length(&self) -> usize {
		self.max_length
	}

	/// Returns the current predictive sentence length.
	pub fn predictive_length(&self) -> usize {
		self.predictive_length
	}

	/// Sets the random sentence cap.
	///
	/// # Errors
	/// Returns an error if `max_length` is zero.
	pub fn set_max_length(&mut self, max_length: usize) -> Result<()> {
		if max_length == 0 {
			return Err(Error::InvalidArgument("max_length must be at least 1".to_owned()));
		}
		self.max_length = max_length;
		Ok(())
	}

	/// Sets the number of tokens of a predictive sentence.
	///
	/// # Errors
	/// Returns an error if `predictive_length` is zero.
	pub fn set_predictive_length(&mut self, predictive_length: usize) -> Result<()> {
		if predictive_length == 0 {
			return Err(Error::InvalidArgument("predictive_length must be at least 1".to_owned()));
		}
		self.predictive_length = predictive_length;
		Ok(())
	}
}
