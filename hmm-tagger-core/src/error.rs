//! Error definitions.

use std::path::PathBuf;

/// Result type of this crate, defaulting to [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Every failure the tagger can report.
///
/// An unseen (tag, token) pair is not an error: decoding scores it with the
/// model's unseen penalty.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	/// A corpus file could not be opened or read.
	#[error("failed to read corpus file '{path}': {source}")]
	CorpusRead {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	/// The token file and the tag file do not hold the same number of sentences.
	#[error("token file has {tokens} sentences but tag file has {tags}")]
	LineCountMismatch { tokens: usize, tags: usize },

	/// A sentence whose token and tag sequences are not aligned.
	#[error("sentence {sentence} has {tokens} tokens but {tags} tags")]
	CorpusFormat {
		sentence: usize,
		tokens: usize,
		tags: usize,
	},

	/// No reachable tag has an outgoing transition at `position`.
	#[error("decoding stopped at token {position} ('{token}'): no reachable tag has an outgoing transition")]
	DecodeDeadEnd { position: usize, token: String },

	/// Generation reached a tag without a transition row.
	#[error("tag '{tag}' has no outgoing transitions")]
	NoTransitions { tag: String },

	/// Generation reached a tag without an observation row.
	#[error("tag '{tag}' has no observed tokens")]
	NoObservations { tag: String },

	/// Random generation did not reach the terminal tag in time.
	#[error("generated {max_length} tokens without reaching terminal tag '{terminal_tag}'")]
	MaxLengthExceeded {
		max_length: usize,
		terminal_tag: String,
	},

	/// A configuration value outside its valid range.
	#[error("invalid argument: {0}")]
	InvalidArgument(String),
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn format_error_message() {
		let e = Error::CorpusFormat { sentence: 3, tokens: 4, tags: 5 };
		assert_eq!(e.to_string(), "sentence 3 has 4 tokens but 5 tags");
	}

	#[test]
	fn read_error_keeps_source() {
		let e = Error::CorpusRead {
			path: PathBuf::from("missing.txt"),
			source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
		};
		assert!(std::error::Error::source(&e).is_some());
		assert!(e.to_string().starts_with("failed to read corpus file 'missing.txt'"));
	}
}
