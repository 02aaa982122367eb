use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::freq_table::FrequencyTable;

/// Weighted random character sampler.
///
/// Draws one character from a finalized frequency table with a single
/// uniform draw against the table's cumulative distribution.
///
/// The sampler owns its random source explicitly, so two samplers built
/// with the same seed produce the same draw sequence and independent
/// samplers can be used concurrently over a shared read-only model.
#[derive(Debug)]
pub struct ProbabilitySampler {
	rng: StdRng,
}

impl ProbabilitySampler {
	/// Creates a sampler seeded from OS entropy.
	///
	/// Generating texts with this sampler multiple times will produce
	/// different random texts. Good for production.
	pub fn new() -> Self {
		Self { rng: StdRng::from_os_rng() }
	}

	/// Creates a sampler with the given seed value.
	///
	/// Sampling from the same tables with the same seed value will
	/// reproduce the same sequence. Good for debugging and tests.
	pub fn with_seed(seed: u64) -> Self {
		Self { rng: StdRng::seed_from_u64(seed) }
	}

	/// Draws a random character from the given table.
	///
	/// Draws `r` uniformly from [0, 1) and returns the first entry, in
	/// insertion order, whose cumulative probability exceeds `r`. The last
	/// entry is a guaranteed fallback: rounding can leave the final `cp` a
	/// hair below 1.0.
	///
	/// # Panics
	/// Panics if the table is empty or not finalized. Both are invariant
	/// violations, not reachable when tables come out of a trained
	/// `ContextModel`.
	pub fn sample(&mut self, table: &FrequencyTable) -> char {
		assert!(!table.is_empty(), "sampled an empty frequency table");
		assert!(table.is_finalized(), "sampled a table with no probabilities computed");

		let r: f64 = self.rng.random();
		let entries = table.entries();
		for entry in entries {
			if r < entry.cp {
				return entry.chr;
			}
		}

		entries[entries.len() - 1].chr
	}
}

impl Default for ProbabilitySampler {
	fn default() -> Self {
		Self::new()
	}
}
