use std::collections::BTreeMap;

/// Log-scores of everything reachable from one source tag.
///
/// For a transition table the keys are destination tags; for an observation
/// table they are tokens. A missing key means probability zero.
///
/// Keys are kept in lexical order. That order is the iteration order used by
/// the decoder and the generators, so ties always resolve the same way.
///
/// ## Invariants
/// - All scores belong to the same `tag`
/// - A trained row's scores satisfy `Σ exp(score) ≈ 1`
#[derive(Clone, Debug, PartialEq)]
pub struct ScoreRow {
	/// Source tag of the row.
	tag: String,
	/// Log-score per key.
	/// Example: { "dog" => -0.69, "cat" => -0.69 }
	scores: BTreeMap<String, f64>,
}

impl ScoreRow {
	/// Creates an empty row for `tag`.
	pub fn new(tag: &str) -> Self {
		Self {
			tag: tag.to_owned(),
			scores: BTreeMap::new(),
		}
	}

	pub fn tag(&self) -> &str {
		&self.tag
	}

	/// Log-score of `key`, if present.
	pub fn get(&self, key: &str) -> Option<f64> {
		self.scores.get(key).copied()
	}

	pub fn contains(&self, key: &str) -> bool {
		self.scores.contains_key(key)
	}

	/// Iterates over `(key, score)` in key order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
		self.scores.iter().map(|(key, score)| (key.as_str(), *score))
	}

	pub fn len(&self) -> usize {
		self.scores.len()
	}

	pub fn is_empty(&self) -> bool {
		self.scores.is_empty()
	}

	/// Highest scoring key.
	///
	/// Only a strictly greater score replaces the current best, so among equal
	/// scores the first key in iteration order wins.
	/// Returns `None` for an empty row.
	pub fn best(&self) -> Option<(&str, f64)> {
		let mut best: Option<(&str, f64)> = None;
		for (key, score) in self.iter() {
			if best.is_none_or(|(_, best_score)| score > best_score) {
				best = Some((key, score));
			}
		}
		best
	}

	/// Sum of the linear-space probabilities of the row.
	pub fn probability_mass(&self) -> f64 {
		self.scores.values().map(|score| score.exp()).sum()
	}

	pub(crate) fn insert(&mut self, key: &str, score: f64) {
		self.scores.insert(key.to_owned(), score);
	}
}

/// Two-level table `source tag -> (key -> log-score)`.
///
/// Used both as the transition table (keys are tags) and as the observation
/// table (keys are tokens).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScoreTable {
	rows: BTreeMap<String, ScoreRow>,
}

impl ScoreTable {
	pub fn new() -> Self {
		Self::default()
	}

	/// Row of `tag`, if the tag has any entry.
	pub fn row(&self, tag: &str) -> Option<&ScoreRow> {
		self.rows.get(tag)
	}

	/// Log-score of `tag -> key`, if present.
	pub fn score(&self, tag: &str, key: &str) -> Option<f64> {
		self.rows.get(tag)?.get(key)
	}

	/// Iterates over all rows in tag order.
	pub fn rows(&self) -> impl Iterator<Item = &ScoreRow> {
		self.rows.values()
	}

	/// Iterates over all source tags.
	pub fn tags(&self) -> impl Iterator<Item = &str> {
		self.rows.keys().map(String::as_str)
	}

	/// Number of source tags.
	pub fn len(&self) -> usize {
		self.rows.len()
	}

	pub fn is_empty(&self) -> bool {
		self.rows.is_empty()
	}

	/// Number of `(tag, key)` entries over all rows.
	pub fn entry_count(&self) -> usize {
		self.rows.values().map(ScoreRow::len).sum()
	}

	/// Checks that every non-empty row sums to one in linear space.
	pub fn is_normalized(&self, tolerance: f64) -> bool {
		self.rows
			.values()
			.filter(|row| !row.is_empty())
			.all(|row| (row.probability_mass() - 1.0).abs() <= tolerance)
	}

	pub(crate) fn insert(&mut self, tag: &str, key: &str, score: f64) {
		self.rows
			.entry(tag.to_owned())
			.or_insert_with(|| ScoreRow::new(tag))
			.insert(key, score);
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use approx::assert_abs_diff_eq;

	fn table() -> ScoreTable {
		let mut table = ScoreTable::new();
		table.insert("N", "V", 0.5f64.ln());
		table.insert("N", "VD", 0.5f64.ln());
		table.insert("DET", "N", 0.0);
		table
	}

	#[test]
	fn lookups() {
		let table = table();
		assert_eq!(table.len(), 2);
		assert_eq!(table.entry_count(), 3);
		assert_eq!(table.score("DET", "N"), Some(0.0));
		assert_eq!(table.score("DET", "V"), None);
		assert_eq!(table.score("PRO", "V"), None);
		assert!(table.row("PRO").is_none());
		assert_eq!(table.tags().collect::<Vec<_>>(), vec!["DET", "N"]);
	}

	#[test]
	fn best_prefers_first_among_equals() {
		let table = table();
		let (key, score) = table.row("N").unwrap().best().unwrap();
		assert_eq!(key, "V");
		assert_abs_diff_eq!(score, 0.5f64.ln());
		assert!(ScoreRow::new("X").best().is_none());
	}

	#[test]
	fn normalization_check() {
		let mut table = table();
		assert!(table.is_normalized(1e-9));
		table.insert("DET", "PRO", -1.0);
		assert!(!table.is_normalized(1e-9));
	}
}
