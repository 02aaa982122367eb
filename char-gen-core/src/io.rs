use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::io;

/// Reads a text file and returns its whole content as a `String`.
///
/// - Reads the entire file into memory
/// - The corpus is consumed as one ordered character sequence,
///   line boundaries are ordinary characters
pub(crate) fn read_file<P: AsRef<Path>>(filename: P) -> io::Result<String> {
	let mut contents = String::new();
	File::open(filename)?.read_to_string(&mut contents)?;
	Ok(contents)
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Write;

	#[test]
	fn read_file_returns_whole_content() {
		let mut path = std::env::temp_dir();
		path.push("char_gen_io_test.txt");
		let mut file = File::create(&path).unwrap();
		file.write_all(b"first line\nsecond line").unwrap();

		let contents = read_file(&path).unwrap();
		assert_eq!(contents, "first line\nsecond line");

		std::fs::remove_file(&path).unwrap();
	}

	#[test]
	fn read_file_missing_path_is_an_error() {
		assert!(read_file("no/such/corpus.txt").is_err());
	}
}
