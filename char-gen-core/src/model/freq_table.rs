use std::fmt;

/// A single (character, count) cell of a frequency table.
///
/// `p` and `cp` are derived fields and only hold meaningful values once the
/// owning table has been finalized; before that they are zero placeholders.
#[derive(Clone, Debug, PartialEq)]
pub struct CharEntry {
	/// The observed following character.
	pub chr: char,
	/// How many times `chr` was observed after the owning window.
	pub count: usize,
	/// Probability of `chr` among all followers of the window.
	pub p: f64,
	/// Cumulative probability up to and including this entry,
	/// in insertion order.
	pub cp: f64,
}

/// Ordered, append-only collection of follower statistics for one
/// fixed-length context window.
///
/// ## Responsibilities
/// - Accumulate follower occurrences during training
/// - Compute probability and cumulative-probability annotations
///
/// ## Invariants
/// - Entries keep first-seen order; that order fixes the cumulative sum
///   and therefore the sampling semantics
/// - Every entry count is strictly positive
/// - After finalization, probabilities sum to 1 (within floating-point
///   tolerance) and `cp` is non-decreasing, ending at 1.0
#[derive(Clone, Debug, Default)]
pub struct FrequencyTable {
	entries: Vec<CharEntry>,
	finalized: bool,
}

impl FrequencyTable {
	/// Creates a new empty table.
	pub fn new() -> Self {
		Self { entries: Vec::new(), finalized: false }
	}

	/// Records an occurrence of `chr` following the owning window.
	///
	/// - If `chr` is already present, its count is increased.
	/// - Otherwise a new entry with count 1 is appended at the end,
	///   preserving first-seen order.
	pub fn record(&mut self, chr: char) {
		match self.entries.iter_mut().find(|entry| entry.chr == chr) {
			Some(entry) => entry.count += 1,
			None => self.entries.push(CharEntry { chr, count: 1, p: 0.0, cp: 0.0 }),
		}
	}

	/// Computes the `p` and `cp` fields of every entry.
	///
	/// A single forward pass in insertion order sets `p = count / total`
	/// and accumulates `cp`, so `cp` is monotonically non-decreasing and
	/// the last entry ends at 1.0 up to rounding.
	pub fn finalize(&mut self) {
		let total: usize = self.entries.iter().map(|entry| entry.count).sum();

		let mut running_sum = 0.0;
		for entry in &mut self.entries {
			entry.p = entry.count as f64 / total as f64;
			running_sum += entry.p;
			entry.cp = running_sum;
		}

		self.finalized = true;
	}

	/// Entries in insertion order.
	pub fn entries(&self) -> &[CharEntry] {
		&self.entries
	}

	/// Sum of all counts.
	pub fn total(&self) -> usize {
		self.entries.iter().map(|entry| entry.count).sum()
	}

	/// Number of distinct followers.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Whether `finalize` has been called.
	pub fn is_finalized(&self) -> bool {
		self.finalized
	}
}

impl fmt::Display for FrequencyTable {
	/// Formats the table as an ordered `(chr count p cp)` list.
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (i, entry) in self.entries.iter().enumerate() {
			if i > 0 {
				write!(f, " ")?;
			}
			write!(f, "({} {} {:.4} {:.4})", entry.chr, entry.count, entry.p, entry.cp)?;
		}
		Ok(())
	}
}
