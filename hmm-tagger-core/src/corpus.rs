//! Tagged sentences.
//!
//! A [`Corpus`] is an ordered list of [`Sentence`]s. Each sentence pairs a token
//! sequence with a tag sequence of the same length; the checked constructors are
//! the only way to build one, so every sentence in a corpus is aligned.

use std::path::Path;

use crate::error::{Error, Result};
use crate::io::{read_lines, split_fields};

/// One sentence: tokens and their tags, position by position.
///
/// # Invariants
/// - `tokens.len() == tags.len()`
#[derive(Clone, Debug, PartialEq)]
pub struct Sentence {
	tokens: Vec<String>,
	tags: Vec<String>,
}

impl Sentence {
	/// Creates an aligned sentence.
	///
	/// # Errors
	/// Returns [`Error::CorpusFormat`] (with sentence index 0) if the lengths differ.
	pub fn new(tokens: Vec<String>, tags: Vec<String>) -> Result<Self> {
		Self::checked(0, tokens, tags)
	}

	fn checked(index: usize, tokens: Vec<String>, tags: Vec<String>) -> Result<Self> {
		if tokens.len() != tags.len() {
			return Err(Error::CorpusFormat {
				sentence: index,
				tokens: tokens.len(),
				tags: tags.len(),
			});
		}
		Ok(Self { tokens, tags })
	}

	pub fn tokens(&self) -> &[String] {
		&self.tokens
	}

	pub fn tags(&self) -> &[String] {
		&self.tags
	}

	/// Iterates over `(token, tag)` pairs.
	pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
		self.tokens.iter().map(String::as_str).zip(self.tags.iter().map(String::as_str))
	}

	pub fn len(&self) -> usize {
		self.tokens.len()
	}

	pub fn is_empty(&self) -> bool {
		self.tokens.is_empty()
	}
}

/// An ordered collection of aligned sentences.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Corpus {
	sentences: Vec<Sentence>,
}

impl Corpus {
	/// Creates an empty corpus.
	pub fn new() -> Self {
		Self::default()
	}

	/// Loads a corpus from two parallel files.
	///
	/// Line `i` of `tokens_path` holds the space separated tokens of sentence `i`;
	/// line `i` of `tags_path` holds their tags. Lines that are blank in both
	/// files are skipped.
	///
	/// # Errors
	/// - [`Error::CorpusRead`] if either file cannot be read.
	/// - [`Error::LineCountMismatch`] if the files have a different number of lines.
	/// - [`Error::CorpusFormat`] if a line pair has different field counts.
	pub fn from_files<PT, PG>(tokens_path: PT, tags_path: PG) -> Result<Self>
	where
		PT: AsRef<Path>,
		PG: AsRef<Path>,
	{
		let token_lines = read_lines(&tokens_path)?;
		let tag_lines = read_lines(&tags_path)?;
		let corpus = Self::from_lines(&token_lines, &tag_lines)?;
		log::info!(
			"loaded {} sentences ({} tokens) from {}",
			corpus.len(),
			corpus.total_tokens(),
			tokens_path.as_ref().display()
		);
		Ok(corpus)
	}

	/// Builds a corpus from already read line pairs.
	///
	/// Same rules as [`Corpus::from_files`], without the file access.
	pub fn from_lines<S: AsRef<str>>(token_lines: &[S], tag_lines: &[S]) -> Result<Self> {
		if token_lines.len() != tag_lines.len() {
			return Err(Error::LineCountMismatch {
				tokens: token_lines.len(),
				tags: tag_lines.len(),
			});
		}

		let mut corpus = Self::new();
		for (index, (tokens, tags)) in token_lines.iter().zip(tag_lines).enumerate() {
			let tokens = split_fields(tokens.as_ref());
			let tags = split_fields(tags.as_ref());
			if tokens.is_empty() && tags.is_empty() {
				continue;
			}
			corpus.sentences.push(Sentence::checked(index, tokens, tags)?);
		}
		Ok(corpus)
	}

	/// Appends a sentence.
	///
	/// # Errors
	/// Returns [`Error::CorpusFormat`] if the lengths differ; the reported index is
	/// the position the sentence would have taken.
	pub fn push(&mut self, tokens: Vec<String>, tags: Vec<String>) -> Result<()> {
		let sentence = Sentence::checked(self.sentences.len(), tokens, tags)?;
		self.sentences.push(sentence);
		Ok(())
	}

	pub fn sentences(&self) -> &[Sentence] {
		&self.sentences
	}

	pub fn iter(&self) -> std::slice::Iter<'_, Sentence> {
		self.sentences.iter()
	}

	pub fn len(&self) -> usize {
		self.sentences.len()
	}

	pub fn is_empty(&self) -> bool {
		self.sentences.is_empty()
	}

	/// Total number of tokens over all sentences.
	pub fn total_tokens(&self) -> usize {
		self.sentences.iter().map(Sentence::len).sum()
	}
}

impl<'a> IntoIterator for &'a Corpus {
	type Item = &'a Sentence;
	type IntoIter = std::slice::Iter<'a, Sentence>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}
