use std::collections::BTreeMap;

use crate::error::{Error, Result};
use crate::model::hmm_model::HmmModel;

/// Best cumulative log-score of every tag reachable at the current position.
type Frontier<'a> = BTreeMap<&'a str, f64>;

/// Winning predecessor of every tag reached at one position.
type Backpointers<'a> = BTreeMap<&'a str, &'a str>;

/// Viterbi decoder over a borrowed [`HmmModel`].
///
/// Decoding is a pure function of the model and the tokens: the same input
/// always yields the same tags, since every iteration runs in key order.
#[derive(Clone, Copy, Debug)]
pub struct Decoder<'a> {
	model: &'a HmmModel,
}

impl<'a> Decoder<'a> {
	pub fn new(model: &'a HmmModel) -> Self {
		Self { model }
	}

	/// Returns the most likely tag of every token.
	///
	/// Tokens are lowercased before lookup. An unseen token is scored with the
	/// model's unseen penalty for every tag.
	///
	/// # Errors
	/// Returns [`Error::DecodeDeadEnd`] if no tag reachable at some position has
	/// an outgoing transition.
	pub fn decode<S: AsRef<str>>(&self, tokens: &[S]) -> Result<Vec<String>> {
		self.decode_scored(tokens).map(|(tags, _)| tags)
	}

	/// Same as [`Decoder::decode`], also returning the log-score of the best path.
	///
	/// An empty input yields no tags and a score of `0.0`.
	pub fn decode_scored<S: AsRef<str>>(&self, tokens: &[S]) -> Result<(Vec<String>, f64)> {
		if tokens.is_empty() {
			return Ok((Vec::new(), 0.0));
		}

		let mut frontier = Frontier::new();
		frontier.insert(self.model.start_tag(), 0.0);
		let mut trellis: Vec<Backpointers<'a>> = Vec::with_capacity(tokens.len());

		for (position, token) in tokens.iter().enumerate() {
			let word = token.as_ref().to_lowercase();
			let (next, backpointers) = self.step(&frontier, &word);
			if next.is_empty() {
				return Err(Error::DecodeDeadEnd {
					position,
					token: token.as_ref().to_owned(),
				});
			}
			trellis.push(backpointers);
			frontier = next;
		}

		// a successful step never leaves the frontier empty
		let Some((last, score)) = Self::best(&frontier) else {
			return Ok((Vec::new(), 0.0));
		};

		let tags = Self::backtrack(&trellis, last);
		log::debug!("decoded {} tokens, best path score {}", tokens.len(), score);
		Ok((tags, score))
	}

	/// Advances the frontier by one token.
	///
	/// For each destination only the best candidate is kept; a later candidate
	/// replaces an earlier one only when strictly greater.
	fn step(&self, frontier: &Frontier<'a>, word: &str) -> (Frontier<'a>, Backpointers<'a>) {
		let mut scores = Frontier::new();
		let mut backpointers = Backpointers::new();

		for (&state, &score) in frontier {
			// tags without outgoing transitions drop out here
			let Some(row) = self.model.transitions().row(state) else {
				continue;
			};
			for (next, transition) in row.iter() {
				let candidate = score + transition + self.model.emission(next, word);
				if scores.get(next).is_none_or(|best| candidate > *best) {
					scores.insert(next, candidate);
					backpointers.insert(next, state);
				}
			}
		}

		(scores, backpointers)
	}

	/// Highest scoring tag of the frontier, first in key order among equals.
	fn best(frontier: &Frontier<'a>) -> Option<(&'a str, f64)> {
		let mut best: Option<(&'a str, f64)> = None;
		for (&tag, &score) in frontier {
			if best.is_none_or(|(_, best_score)| score > best_score) {
				best = Some((tag, score));
			}
		}
		best
	}

	/// Walks the backpointers from `last` back to the first position.
	fn backtrack(trellis: &[Backpointers<'a>], last: &'a str) -> Vec<String> {
		let mut tags = vec![String::new(); trellis.len()];
		let mut current = last;
		for (position, backpointers) in trellis.iter().enumerate().rev() {
			tags[position] = current.to_owned();
			// Every tag of a frontier was recorded in the matching backpointers
			current = backpointers[current];
		}
		tags
	}
}
