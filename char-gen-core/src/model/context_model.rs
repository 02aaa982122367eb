use std::collections::HashMap;
use std::fmt;
use std::io;
use std::path::Path;

use super::freq_table::FrequencyTable;

/// Fixed-order character context model.
///
/// The `ContextModel` maps every observed window of exactly `window_length`
/// characters to the frequency table of the characters that followed it.
///
/// # Responsibilities
/// - Build the model from a corpus in one sliding-window scan
/// - Finalize every table's probability annotations after the scan
/// - Serve read-only lookups during generation
///
/// # Invariants
/// - `window_length` is always >= 1 and fixed for the model's lifetime
/// - Every key is a string of exactly `window_length` characters
/// - Every stored table is non-empty and finalized once training returns
#[derive(Clone, Debug)]
pub struct ContextModel {
	/// The fixed window length (number of characters in a context key).
	window_length: usize,

	/// Mapping from a window to the table of its observed followers.
	contexts: HashMap<String, FrequencyTable>,
}

impl ContextModel {
	/// Creates a new empty model with the given window length.
	///
	/// # Errors
	/// Returns an error if `window_length` is 0.
	pub fn new(window_length: usize) -> Result<Self, String> {
		if window_length == 0 {
			return Err("window length must be >= 1".to_owned());
		}
		Ok(Self { window_length, contexts: HashMap::new() })
	}

	/// Builds the model from an in-memory corpus.
	///
	/// Performs a single linear scan: for each position, the window is the
	/// `window_length` characters starting there and the follower is the
	/// next character. Tables are created lazily on first observation and
	/// finalized once the scan completes.
	///
	/// # Notes
	/// - A corpus with fewer than `window_length + 1` characters contains
	///   no (window, follower) pair and leaves the model empty. In
	///   particular a corpus of exactly `window_length` characters trains
	///   nothing.
	/// - The trailing window of the corpus has no follower and gets no
	///   table of its own.
	pub fn train(&mut self, corpus: &str) {
		let chars: Vec<char> = corpus.chars().collect();
		if chars.len() <= self.window_length {
			// Nothing follows any window, the model stays empty
			return;
		}

		for i in 0..chars.len() - self.window_length {
			let window: String = chars[i..i + self.window_length].iter().collect();
			let next_char = chars[i + self.window_length];

			self.contexts
				.entry(window)
				.or_insert_with(FrequencyTable::new)
				.record(next_char);
		}

		// Tables are independent, finalization order does not matter
		for table in self.contexts.values_mut() {
			table.finalize();
		}

		log::debug!(
			"trained on {} characters, {} distinct contexts",
			chars.len(),
			self.contexts.len()
		);
	}

	/// Builds the model from the text in the given file (the corpus).
	///
	/// # Errors
	/// Propagates the I/O error if the file is missing or unreadable;
	/// no partial training is performed in that case.
	pub fn train_file<P: AsRef<Path>>(&mut self, filename: P) -> io::Result<()> {
		let corpus = crate::io::read_file(filename)?;
		self.train(&corpus);
		Ok(())
	}

	/// Returns the frequency table for `window`, if it was observed.
	pub fn table(&self, window: &str) -> Option<&FrequencyTable> {
		self.contexts.get(window)
	}

	/// Whether `window` was observed during training.
	pub fn contains(&self, window: &str) -> bool {
		self.contexts.contains_key(window)
	}

	/// Number of distinct windows in the model.
	pub fn len(&self) -> usize {
		self.contexts.len()
	}

	pub fn is_empty(&self) -> bool {
		self.contexts.is_empty()
	}

	/// The fixed window length of this model.
	pub fn window_length(&self) -> usize {
		self.window_length
	}
}

impl fmt::Display for ContextModel {
	/// Formats the whole mapping, one `window : entries` line per context.
	///
	/// Intended as a human-readable diagnostics dump; the line order is
	/// unspecified.
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (window, table) in &self.contexts {
			writeln!(f, "{} : {}", window, table)?;
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn zero_window_length_is_rejected() {
		assert!(ContextModel::new(0).is_err());
		assert!(ContextModel::new(1).is_ok());
	}

	#[test]
	fn counts_match_window_occurrences() {
		// "ababab" with windows of 2: "ab" is followed twice (both by 'a',
		// the final "ab" is trailing), "ba" is followed twice by 'b'.
		let mut model = ContextModel::new(2).unwrap();
		model.train("ababab");

		assert_eq!(model.len(), 2);

		let ab = model.table("ab").unwrap();
		assert_eq!(ab.total(), 2);
		assert_eq!(ab.entries().len(), 1);
		assert_eq!(ab.entries()[0].chr, 'a');

		let ba = model.table("ba").unwrap();
		assert_eq!(ba.total(), 2);
		assert_eq!(ba.entries()[0].chr, 'b');
	}

	#[test]
	fn every_table_is_finalized_after_training() {
		let mut model = ContextModel::new(2).unwrap();
		model.train("committee members meet");

		assert!(!model.is_empty());
		for window in ["co", "om", "mm", "ee"] {
			let table = model.table(window).unwrap();
			assert!(table.is_finalized());
			let sum: f64 = table.entries().iter().map(|entry| entry.p).sum();
			assert!((sum - 1.0).abs() < 1e-9);
		}
	}

	#[test]
	fn corpus_shorter_than_window_yields_empty_model() {
		let mut model = ContextModel::new(5).unwrap();
		model.train("ab");
		assert!(model.is_empty());
	}

	#[test]
	fn corpus_of_exactly_window_length_yields_empty_model() {
		// The only window has no follower
		let mut model = ContextModel::new(3).unwrap();
		model.train("abc");
		assert!(model.is_empty());
	}

	#[test]
	fn trailing_window_gets_no_table() {
		let mut model = ContextModel::new(2).unwrap();
		model.train("abcdef");

		assert!(model.contains("ab"));
		assert!(model.contains("de"));
		assert!(!model.contains("ef"));
	}

	#[test]
	fn empty_corpus_yields_empty_model() {
		let mut model = ContextModel::new(1).unwrap();
		model.train("");
		assert!(model.is_empty());
	}

	#[test]
	fn train_file_propagates_missing_file() {
		let mut model = ContextModel::new(2).unwrap();
		assert!(model.train_file("no/such/corpus.txt").is_err());
		assert!(model.is_empty());
	}

	#[test]
	fn display_dumps_one_line_per_window() {
		let mut model = ContextModel::new(1).unwrap();
		model.train("aab");

		let dump = model.to_string();
		assert_eq!(dump.lines().count(), 1);
		assert!(dump.starts_with("a : "));
		assert!(dump.contains("(a 1 0.5000 0.5000)"));
		assert!(dump.contains("(b 1 0.5000 1.0000)"));
	}
}
