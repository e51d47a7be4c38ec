use crate::error::ChainError;

/// Largest tweet length a caller may request.
pub const MAX_TWEET_LENGTH: usize = 280;

/// Configuration of a [`super::synthesizer::Synthesizer`].
///
/// `SynthConfig` holds the length cap and the sentence-ending punctuation
/// scheme.
///
/// # Punctuation
/// A mark is chosen by drawing `m` in `[0, mark_bound)`. If `m` indexes one
/// of the rare marks, that mark is used; any other value selects the default
/// mark. With the defaults (`; ? !`, `.`, bound 10) this yields `.` 70% of the
/// time and each rare mark 10% of the time.
///
/// # Example
/// ```
/// use tweet_gen_core::model::synth_config::SynthConfig;
///
/// let config = SynthConfig::new().with_max_length(140);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.mark_for(1), '?');
/// assert_eq!(config.mark_for(8), '.');
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthConfig {
	/// Largest accepted target length.
	max_length: usize,

	/// Marks selected by the lowest draws, in draw order.
	rare_marks: Vec<char>,

	/// Mark selected by every other draw.
	default_mark: char,

	/// Exclusive upper bound of the punctuation draw.
	mark_bound: usize,
}

impl Default for SynthConfig {
	fn default() -> Self {
		Self {
			max_length: MAX_TWEET_LENGTH,
			rare_marks: vec![';', '?', '!'],
			default_mark: '.',
			mark_bound: 10,
		}
	}
}

impl SynthConfig {
	/// Creates the default configuration.
	///
	/// Defaults: `max_length = 280`, rare marks `; ? !`, default mark `.`,
	/// bound 10.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the largest accepted target length.
	pub fn with_max_length(mut self, max_length: usize) -> Self {
		self.max_length = max_length;
		self
	}

	/// Sets the punctuation scheme.
	pub fn with_punctuation(mut self, rare_marks: Vec<char>, default_mark: char, mark_bound: usize) -> Self {
		self.rare_marks = rare_marks;
		self.default_mark = default_mark;
		self.mark_bound = mark_bound;
		self
	}

	/// Checks the configuration.
	///
	/// # Errors
	/// Returns `InvalidConfig` if `max_length` is zero, or if `mark_bound`
	/// does not leave room for the default mark.
	pub fn validate(&self) -> Result<(), ChainError> {
		if self.max_length == 0 {
			return Err(ChainError::InvalidConfig { reason: "max_length must be >= 1".to_owned() });
		}
		if self.mark_bound <= self.rare_marks.len() {
			return Err(ChainError::InvalidConfig {
				reason: format!(
					"mark_bound must exceed the {} rare marks, got {}",
					self.rare_marks.len(),
					self.mark_bound
				),
			});
		}
		Ok(())
	}

	pub fn max_length(&self) -> usize {
		self.max_length
	}

	pub fn mark_bound(&self) -> usize {
		self.mark_bound
	}

	/// Maps a punctuation draw to its mark.
	pub fn mark_for(&self, draw: usize) -> char {
		self.rare_marks.get(draw).copied().unwrap_or(self.default_mark)
	}

	/// Returns `true` if `s` ends with one of the configured marks.
	pub fn is_punctuated(&self, s: &str) -> bool {
		match s.chars().next_back() {
			Some(last) => last == self.default_mark || self.rare_marks.contains(&last),
			None => false,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_is_valid() {
		let config = SynthConfig::default();
		assert!(config.validate().is_ok());
		assert_eq!(config.max_length(), MAX_TWEET_LENGTH);
		assert_eq!(config.mark_bound(), 10);
	}

	#[test]
	fn default_marks_follow_draw_order() {
		let config = SynthConfig::default();
		let marks: String = (0..10).map(|m| config.mark_for(m)).collect();
		assert_eq!(marks, ";?!.......");
	}

	#[test]
	fn zero_max_length_is_invalid() {
		let config = SynthConfig::new().with_max_length(0);
		assert!(matches!(config.validate(), Err(ChainError::InvalidConfig { .. })));
	}

	#[test]
	fn bound_must_leave_room_for_default_mark() {
		let config = SynthConfig::new().with_punctuation(vec!['?', '!'], '.', 2);
		assert!(matches!(config.validate(), Err(ChainError::InvalidConfig { .. })));
		let config = SynthConfig::new().with_punctuation(vec!['?', '!'], '.', 3);
		assert!(config.validate().is_ok());
	}

	#[test]
	fn is_punctuated_checks_last_char() {
		let config = SynthConfig::default();
		assert!(config.is_punctuated("hello world."));
		assert!(config.is_punctuated("hello;"));
		assert!(!config.is_punctuated("hello"));
		assert!(!config.is_punctuated(""));
		assert!(!config.is_punctuated("hello,"));
	}
}
