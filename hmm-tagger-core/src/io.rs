use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{Error, Result};

/// Reads a text file and returns all its lines as a `Vec<String>`.
///
/// - Reads the entire file into memory
/// - Splits on `\n` / `\r\n`
/// - Any I/O failure is reported as [`Error::CorpusRead`] carrying the path
pub(crate) fn read_lines<P: AsRef<Path>>(filename: P) -> Result<Vec<String>> {
	let path = filename.as_ref();
	let mut contents = String::new();
	File::open(path)
		.and_then(|mut file| file.read_to_string(&mut contents))
		.map_err(|source| Error::CorpusRead { path: path.to_path_buf(), source })?;
	Ok(contents.lines().map(str::to_owned).collect())
}

/// Splits a corpus line into its space separated fields.
///
/// Empty fields produced by repeated spaces are dropped.
pub(crate) fn split_fields(line: &str) -> Vec<String> {
	line.split(' ')
		.filter(|field| !field.is_empty())
		.map(str::to_owned)
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Write;

	#[test]
	fn read_lines_of_file() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		write!(file, "the dog\r\nruns\n").unwrap();
		let lines = read_lines(file.path()).unwrap();
		assert_eq!(lines, vec!["the dog".to_owned(), "runs".to_owned()]);
	}

	#[test]
	fn missing_file_is_read_error() {
		let dir = tempfile::tempdir().unwrap();
		let missing = dir.path().join("nope.txt");
		match read_lines(&missing) {
			Err(Error::CorpusRead { path, .. }) => assert_eq!(path, missing),
			other => panic!("unexpected result: {:?}", other),
		}
	}

	#[test]
	fn split_drops_empty_fields() {
		assert_eq!(split_fields("a  b c "), vec!["a", "b", "c"]);
		assert!(split_fields("").is_empty());
	}
}
