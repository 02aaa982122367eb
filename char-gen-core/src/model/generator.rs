use super::context_model::ContextModel;
use super::sampler::ProbabilitySampler;

/// High-level autoregressive text generator.
///
/// # Responsibilities
/// - Look up the current trailing window in a trained `ContextModel`
/// - Sample the next character from that window's table
/// - Slide the window forward and accumulate the result
///
/// The generator borrows the model read-only and owns its sampler, so
/// several generators can run over the same model as long as each has
/// its own random source.
#[derive(Debug)]
pub struct TextGenerator<'a> {
	model: &'a ContextModel,
	sampler: ProbabilitySampler,
}

impl<'a> TextGenerator<'a> {
	/// Creates a generator over a trained model with the given sampler.
	pub fn new(model: &'a ContextModel, sampler: ProbabilitySampler) -> Self {
		Self { model, sampler }
	}

	/// Generates text starting from `initial_text`, up to `target_length`
	/// characters in total.
	///
	/// # Behavior
	/// - If `initial_text` is shorter than the model's window length, it is
	///   returned unchanged: there is no full window of context to start from.
	/// - Otherwise characters are appended one at a time until the result
	///   reaches `target_length`, or until the trailing window is not a key
	///   of the model. The unseen-context case stops generation silently and
	///   returns everything produced so far, seed included.
	///
	/// Re-calling with the same seed text only reproduces the same output
	/// if the sampler was built with the same seed value.
	pub fn generate(&mut self, initial_text: &str, target_length: usize) -> String {
		let window_length = self.model.window_length();

		let seed_chars: Vec<char> = initial_text.chars().collect();
		if seed_chars.len() < window_length {
			return initial_text.to_owned();
		}

		let mut window: Vec<char> = seed_chars[seed_chars.len() - window_length..].to_vec();
		let mut result = initial_text.to_owned();
		let mut result_length = seed_chars.len();

		while result_length < target_length {
			let key: String = window.iter().collect();
			let table = match self.model.table(&key) {
				Some(table) => table,
				// Unseen context, return what was produced so far
				None => break,
			};

			let next_char = self.sampler.sample(table);
			result.push(next_char);
			result_length += 1;

			window.remove(0);
			window.push(next_char);
		}

		result
	}
}
