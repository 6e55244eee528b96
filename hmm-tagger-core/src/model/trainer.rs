use std::collections::HashMap;

use crate::corpus::{Corpus, Sentence};
use crate::model::hmm_model::{DEFAULT_START_TAG, DEFAULT_UNSEEN_PENALTY, HmmModel};
use crate::model::table::ScoreTable;

/// Raw occurrence counts keyed like a [`ScoreTable`].
///
/// Conceptually the counting side of a Markov chain: every source keeps its
/// outgoing keys with the number of times each was observed, plus a running
/// total used for normalization.
///
/// ## Invariants
/// - Each stored count is strictly positive
/// - `totals[source]` equals the sum of the counts of `source`
#[derive(Debug, Default)]
struct FrequencyTable {
	counts: HashMap<String, HashMap<String, usize>>,
	totals: HashMap<String, usize>,
}

impl FrequencyTable {
	/// Records one occurrence of `source -> key`.
	fn add(&mut self, source: &str, key: &str) {
		*self
			.counts
			.entry(source.to_owned())
			.or_default()
			.entry(key.to_owned())
			.or_insert(0) += 1;
		*self.totals.entry(source.to_owned()).or_insert(0) += 1;
	}

	/// Converts every count `c` to `ln(c / total(source))`.
	///
	/// A source with a zero total never gets a row.
	fn normalize(&self) -> ScoreTable {
		let mut table = ScoreTable::new();
		for (source, keys) in &self.counts {
			let total = self.totals.get(source).copied().unwrap_or(0);
			if total == 0 {
				continue;
			}
			for (key, count) in keys {
				table.insert(source, key, (*count as f64 / total as f64).ln());
			}
		}
		table
	}
}

/// Estimates an [`HmmModel`] from a tagged corpus.
///
/// # Responsibilities
/// - Count start, tag-to-tag and tag-to-token occurrences
/// - Normalize both count tables into log-probabilities once, after counting
///
/// The trainer is a pure function of its settings and the corpus: training
/// twice on the same corpus yields identical tables.
#[derive(Clone, Debug)]
pub struct Trainer {
	start_tag: String,
	unseen_penalty: f64,
	fold_case: bool,
}

impl Default for Trainer {
	fn default() -> Self {
		Self {
			start_tag: DEFAULT_START_TAG.to_owned(),
			unseen_penalty: DEFAULT_UNSEEN_PENALTY,
			fold_case: true,
		}
	}
}

impl Trainer {
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the virtual tag preceding every sentence.
	pub fn start_tag(mut self, start_tag: &str) -> Self {
		self.start_tag = start_tag.to_owned();
		self
	}

	/// Sets the log-score given to tokens a tag never emitted.
	pub fn unseen_penalty(mut self, unseen_penalty: f64) -> Self {
		self.unseen_penalty = unseen_penalty;
		self
	}

	/// Lowercases training tokens, matching the lowercasing done at decode time.
	///
	/// Enabled by default. Disable to keep observation keys exactly as the
	/// corpus spells them.
	pub fn fold_case(mut self, fold_case: bool) -> Self {
		self.fold_case = fold_case;
		self
	}

	/// Trains a model on `corpus`.
	pub fn train(&self, corpus: &Corpus) -> HmmModel {
		let mut transitions = FrequencyTable::default();
		let mut observations = FrequencyTable::default();

		for sentence in corpus {
			self.count_sentence(sentence, &mut transitions, &mut observations);
		}

		let model = HmmModel::from_tables(
			transitions.normalize(),
			observations.normalize(),
			&self.start_tag,
			self.unseen_penalty,
		);
		log::info!(
			"trained on {} sentences: {} tags with transitions ({} entries), {} tags with observations ({} entries)",
			corpus.len(),
			model.transitions().len(),
			model.transitions().entry_count(),
			model.observations().len(),
			model.observations().entry_count()
		);
		model
	}

	fn count_sentence(&self, sentence: &Sentence, transitions: &mut FrequencyTable, observations: &mut FrequencyTable) {
		let tags = sentence.tags();
		let Some(first) = tags.first() else {
			return;
		};

		transitions.add(&self.start_tag, first);
		for pair in tags.windows(2) {
			transitions.add(&pair[0], &pair[1]);
		}

		for (token, tag) in sentence.pairs() {
			if self.fold_case {
				observations.add(tag, &token.to_lowercase());
			} else {
				observations.add(tag, token);
			}
		}
	}
}
