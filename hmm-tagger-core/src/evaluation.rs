use std::fmt::Display;
use std::iter::zip;

/// Tag-level accuracy of decoded sentences against gold tags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Accuracy {
	/// Number of correctly predicted tags.
	correct: usize,
	/// Number of wrongly predicted tags.
	incorrect: usize,
}

impl Accuracy {
	/// Compares one predicted sentence with its reference tags, position by position.
	///
	/// Only the common prefix of the two sequences is compared.
	pub fn accumulate<R, P>(&mut self, reference: &[R], prediction: &[P])
	where
		R: AsRef<str>,
		P: AsRef<str>,
	{
		for (r, p) in zip(reference, prediction) {
			if r.as_ref() == p.as_ref() {
				self.correct += 1;
			} else {
				self.incorrect += 1;
			}
		}
	}

	pub fn correct(&self) -> usize {
		self.correct
	}

	pub fn incorrect(&self) -> usize {
		self.incorrect
	}

	pub fn total(&self) -> usize {
		self.correct + self.incorrect
	}

	/// Share of correct tags, in percent. `0.0` when nothing was compared.
	pub fn percentage(&self) -> f64 {
		if self.total() == 0 {
			return 0.0;
		}
		self.correct as f64 / self.total() as f64 * 100.0
	}
}

impl Display for Accuracy {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		writeln!(f, "Correct Tags: {}", self.correct)?;
		writeln!(f, "False Tags: {}", self.incorrect)?;
		write!(f, "The model is approximately {:?}% correct!", self.percentage())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use approx::assert_abs_diff_eq;

	#[test]
	fn counts_matches() {
		let mut accuracy = Accuracy::default();
		accuracy.accumulate(&["DET", "N", "V"], &["DET", "N", "N"]);
		accuracy.accumulate(&["PRO".to_owned()], &["PRO".to_owned()]);
		assert_eq!(accuracy.correct(), 3);
		assert_eq!(accuracy.incorrect(), 1);
		assert_abs_diff_eq!(accuracy.percentage(), 75.0);
	}

	#[test]
	fn empty_percentage() {
		assert_eq!(Accuracy::default().percentage(), 0.0);
	}

	#[test]
	fn report() {
		let mut accuracy = Accuracy::default();
		accuracy.accumulate(&["A", "B"], &["A", "C"]);
		assert_eq!(
			accuracy.to_string(),
			"Correct Tags: 1\nFalse Tags: 1\nThe model is approximately 50.0% correct!"
		);
	}
}
