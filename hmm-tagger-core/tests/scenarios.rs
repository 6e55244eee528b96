use std::io::Write;

use approx::assert_abs_diff_eq;
use hmm_tagger_core::model::fixture;
use hmm_tagger_core::{Corpus, Error, GenerationInput, Generator, HmmModel, Trainer};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tempfile::NamedTempFile;

const TRAIN_TOKENS: &str = "\
The dog saw the cat .
A cat runs . The dog runs .
I fish .
You saw a dog run .
The cat runs home .
";

const TRAIN_TAGS: &str = "\
DET N VD DET N .
DET N V . DET N V .
PRO V .
PRO VD DET N V .
DET N V N .
";

fn write_file(contents: &str) -> NamedTempFile {
	let mut file = NamedTempFile::new().unwrap();
	file.write_all(contents.as_bytes()).unwrap();
	file
}

fn trained() -> HmmModel {
	let tokens = write_file(TRAIN_TOKENS);
	let tags = write_file(TRAIN_TAGS);
	HmmModel::train(&Corpus::from_files(tokens.path(), tags.path()).unwrap())
}

#[test]
fn single_sentence_training() {
	let mut corpus = Corpus::new();
	corpus
		.push(
			vec!["the".to_owned(), "dog".to_owned(), "runs".to_owned()],
			vec!["DET".to_owned(), "N".to_owned(), "V".to_owned()],
		)
		.unwrap();
	let model = HmmModel::train(&corpus);
	assert_eq!(model.transitions().score("#", "DET"), Some(0.0));
	assert_eq!(model.transitions().score("DET", "N"), Some(0.0));
	assert_eq!(model.transitions().score("N", "V"), Some(0.0));
	assert_eq!(model.observations().score("DET", "the"), Some(0.0));
	assert_eq!(model.observations().score("N", "dog"), Some(0.0));
	assert_eq!(model.observations().score("V", "runs"), Some(0.0));
}

#[test]
fn trained_tables_are_normalized() {
	let model = trained();
	assert!(model.transitions().is_normalized(1e-9));
	assert!(model.observations().is_normalized(1e-9));
	for row in model.transitions().rows() {
		assert_abs_diff_eq!(row.probability_mass(), 1.0, epsilon = 1e-9);
	}
	// three lines start with DET, two with PRO
	assert_abs_diff_eq!(model.transitions().score("#", "DET").unwrap(), (3.0f64 / 5.0).ln(), epsilon = 1e-12);
}

#[test]
fn training_twice_is_identical() {
	assert_eq!(trained(), trained());
}

#[test]
fn fixture_decodes_i_fish() {
	let model = fixture::hand_coded();
	assert_eq!(model.tag_line("I fish").unwrap(), vec!["PRO", "V"]);
}

#[test]
fn unseen_word_keeps_length() {
	let model = trained();
	let tags = model.tag_line("The platypus runs .").unwrap();
	assert_eq!(tags.len(), 4);
	assert_eq!(tags[0], "DET");
	assert_eq!(tags[3], ".");
}

#[test]
fn empty_input_decodes_to_nothing() {
	let model = trained();
	assert!(model.tag_line("").unwrap().is_empty());
	assert!(model.decode::<&str>(&[]).unwrap().is_empty());
}

#[test]
fn decoding_preserves_length() {
	let model = trained();
	for line in TRAIN_TOKENS.lines() {
		let tokens: Vec<&str> = line.split(' ').collect();
		assert_eq!(model.decode(&tokens[..]).unwrap().len(), tokens.len());
	}
}

#[test]
fn predictive_generation_shape() {
	let model = trained();
	let mut generator = Generator::with_rng(&model, StdRng::seed_from_u64(11), GenerationInput::default());
	for _ in 0..10 {
		let sentence = generator.generate_predictive().unwrap();
		let fields: Vec<&str> = sentence.split(' ').collect();
		assert_eq!(fields.len(), 8, "sentence: {}", sentence);
		assert_eq!(fields[7], ".");
	}
}

#[test]
fn random_generation_is_bounded() {
	let model = trained();
	let mut input = GenerationInput::default();
	input.set_max_length(50).unwrap();
	let mut generator = Generator::with_rng(&model, StdRng::seed_from_u64(5), input);
	for _ in 0..20 {
		match generator.generate_random() {
			Ok(sentence) => {
				let fields: Vec<&str> = sentence.split(' ').collect();
				assert!(fields.len() <= 50);
				assert_eq!(fields.last(), Some(&"."));
			}
			Err(Error::MaxLengthExceeded { max_length, .. }) => assert_eq!(max_length, 50),
			Err(e) => panic!("unexpected error: {}", e),
		}
	}
}

#[test]
fn evaluation_on_training_data() {
	let model = trained();
	let tokens = write_file(TRAIN_TOKENS);
	let tags = write_file(TRAIN_TAGS);
	let test = Corpus::from_files(tokens.path(), tags.path()).unwrap();
	let accuracy = model.evaluate(&test).unwrap();
	assert_eq!(accuracy.total(), test.total_tokens());
	assert!(accuracy.percentage() > 80.0, "{}", accuracy);
	assert!(accuracy.to_string().starts_with("Correct Tags: "));
}

#[test]
fn misaligned_files_fail_with_format_error() {
	let tokens = write_file("the dog\nI fish\n");
	let tags = write_file("DET N\nPRO\n");
	match Corpus::from_files(tokens.path(), tags.path()) {
		Err(Error::CorpusFormat { sentence, tokens, tags }) => {
			assert_eq!((sentence, tokens, tags), (1, 2, 1));
		}
		other => panic!("unexpected result: {:?}", other),
	}
}

#[test]
fn missing_file_fails_with_read_error() {
	let tags = write_file("DET N\n");
	let result = Corpus::from_files("/nonexistent/tokens.txt", tags.path());
	assert!(matches!(result, Err(Error::CorpusRead { .. })));
}

#[test]
fn case_sensitive_training_misses_capitalized_words() {
	let tokens = write_file(TRAIN_TOKENS);
	let tags = write_file(TRAIN_TAGS);
	let corpus = Corpus::from_files(tokens.path(), tags.path()).unwrap();
	let raw = Trainer::new().fold_case(false).train(&corpus);
	// "The" was stored capitalized, decoding looks up "the"
	assert!(raw.observations().score("DET", "The").is_some());
	assert_eq!(raw.emission("PRO", "i"), raw.unseen_penalty());
	assert!(trained().observations().score("PRO", "i").is_some());
}
