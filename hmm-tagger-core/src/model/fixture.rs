use crate::model::hmm_model::HmmModel;

/// A small hand-authored model over eight tags.
///
/// The scores are rounded log-probabilities, so rows do not sum exactly to one.
/// Useful to exercise the decoder in isolation from training.
///
/// Example: `"I fish"` decodes to `PRO V`.
pub fn hand_coded() -> HmmModel {
	HmmModel::builder()
		// start
		.transition("#", "MOD", -2.3)
		.transition("#", "PRO", -1.2)
		.transition("#", "DET", -0.9)
		.transition("#", "NP", -1.6)
		// modal
		.transition("MOD", "PRO", -0.7)
		.transition("MOD", "V", -0.7)
		.observation("MOD", "can", -0.7)
		.observation("MOD", "will", -0.7)
		// pronoun
		.transition("PRO", "VD", -1.6)
		.transition("PRO", "MOD", -1.6)
		.transition("PRO", "V", -0.5)
		.observation("PRO", "i", -1.9)
		.observation("PRO", "many", -1.9)
		.observation("PRO", "me", -1.9)
		.observation("PRO", "mine", -1.9)
		.observation("PRO", "you", -0.8)
		// verb
		.transition("V", "PRO", -1.9)
		.transition("V", "DET", -0.2)
		.observation("V", "color", -2.1)
		.observation("V", "cook", -1.4)
		.observation("V", "eats", -2.1)
		.observation("V", "fish", -2.1)
		.observation("V", "has", -1.4)
		.observation("V", "uses", -2.1)
		// noun
		.transition("N", "VD", -0.4)
		.transition("N", "V", -0.3)
		.observation("N", "color", -2.4)
		.observation("N", "cook", -2.4)
		.observation("N", "fish", -1.0)
		.observation("N", "jobs", -2.4)
		.observation("N", "mine", -2.4)
		.observation("N", "saw", -1.7)
		.observation("N", "uses", -2.4)
		// past tense verb
		.transition("VD", "PRO", -0.4)
		.transition("VD", "DET", -1.1)
		.observation("VD", "saw", -1.1)
		.observation("VD", "were", -1.1)
		.observation("VD", "wore", -1.1)
		// determiner
		.transition("DET", "N", 0.0)
		.observation("DET", "a", -1.3)
		.observation("DET", "many", -1.7)
		.observation("DET", "one", -1.7)
		.observation("DET", "the", -1.0)
		// proper noun
		.transition("NP", "VD", -0.7)
		.transition("NP", "V", -0.7)
		.observation("NP", "jobs", -0.7)
		.observation("NP", "will", -0.7)
		.build()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn shape() {
		let model = hand_coded();
		assert_eq!(model.transitions().len(), 8);
		assert_eq!(model.observations().len(), 7);
		assert!(model.observations().row("#").is_none());
	}
}
