use rand::Rng;

use crate::model::table::ScoreRow;

/// Picks a key of `row` by weighted random sampling over its log-scores.
///
/// Weights are derived from the scores as follows:
/// - `total = Σ (1 + score)`
/// - `weight = total / (1 + score)`, accumulated into bounds in row order
/// - the draw is `trunc(u * upper)`, `u` uniform in `[0, 1)` and `upper` the
///   last accumulated bound
/// - bounds are scanned in ascending order, starting from the lowest bound's
///   key, and the scan stops at the first bound strictly greater than the draw
///
/// The draw spans the final cumulative bound rather than `total`: with
/// log-probabilities `total` is usually negative and would not give a usable
/// range.
///
/// This transform does not keep selection frequency proportional to the
/// underlying probability; see the tests for measured behaviour.
///
/// Returns `None` if the row is empty.
pub fn sample<'a, R: Rng + ?Sized>(rng: &mut R, row: &'a ScoreRow) -> Option<&'a str> {
	if row.is_empty() {
		return None;
	}

	let total: f64 = row.iter().map(|(_, score)| 1.0 + score).sum();

	// Bounds are keyed by value: an equal bound takes over the earlier key
	let mut bounds: Vec<(f64, &'a str)> = Vec::with_capacity(row.len());
	let mut upper = 0.0;
	for (key, score) in row.iter() {
		upper += total / (1.0 + score);
		match bounds.iter_mut().find(|(bound, _)| *bound == upper) {
			Some(entry) => entry.1 = key,
			None => bounds.push((upper, key)),
		}
	}
	bounds.sort_by(|a, b| a.0.total_cmp(&b.0));

	let draw = (rng.random::<f64>() * upper).trunc();
	let draw = if draw.is_nan() { 0.0 } else { draw };

	let mut chosen = bounds[0].1;
	for (bound, key) in &bounds {
		if draw < *bound {
			break;
		}
		chosen = key;
	}
	Some(chosen)
}
