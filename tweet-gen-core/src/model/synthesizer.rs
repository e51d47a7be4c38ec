use log::trace;

use super::markov_model::MarkovModel;
use super::synth_config::SynthConfig;
use crate::error::ChainError;
use crate::random::RandomSource;

/// Generates tweets of approximately a requested length from a trained model.
///
/// # Responsibilities
/// - Validate the requested length against the configuration
/// - Walk the model sentence by sentence, ending each with a punctuation mark
/// - Stop once the requested length is reached
///
/// The same random source is used to sample the model and to choose
/// punctuation, so a replayed source determines the whole output.
pub struct Synthesizer {
	model: MarkovModel<String>,
	source: Box<dyn RandomSource + Send>,
	config: SynthConfig,
}

impl Synthesizer {
	/// Creates a synthesizer with the default configuration.
	pub fn new(model: MarkovModel<String>, source: Box<dyn RandomSource + Send>) -> Self {
		Self { model, source, config: SynthConfig::default() }
	}

	/// Creates a synthesizer with a custom configuration.
	///
	/// # Errors
	/// Returns `InvalidConfig` if the configuration does not validate.
	pub fn with_config(
		model: MarkovModel<String>,
		source: Box<dyn RandomSource + Send>,
		config: SynthConfig,
	) -> Result<Self, ChainError> {
		config.validate()?;
		Ok(Self { model, source, config })
	}

	pub fn model(&self) -> &MarkovModel<String> {
		&self.model
	}

	/// Mutable access to the model, e.g. to train more sentences or move the cursor.
	pub fn model_mut(&mut self) -> &mut MarkovModel<String> {
		&mut self.model
	}

	pub fn source_mut(&mut self) -> &mut (dyn RandomSource + Send + 'static) {
		self.source.as_mut()
	}

	pub fn config(&self) -> &SynthConfig {
		&self.config
	}

	/// Replaces the configuration.
	///
	/// # Errors
	/// Returns `InvalidConfig` and keeps the current configuration if `config`
	/// does not validate.
	pub fn set_config(&mut self, config: SynthConfig) -> Result<(), ChainError> {
		config.validate()?;
		self.config = config;
		Ok(())
	}

	/// Generates one tweet of approximately `length` characters.
	///
	/// # Behavior
	/// - Starts from a sampled start word.
	/// - Appends words separated by single spaces.
	/// - When a sentence ends before `length` is reached, appends a
	///   punctuation mark and starts a new sentence.
	/// - The first word bringing the tweet to `length` or beyond is kept and
	///   followed by a punctuation mark. A sentence-ending mark that reaches
	///   `length` ends the tweet as is.
	/// - Length is measured on the returned text: spaces between words count,
	///   and there is no leading space.
	///
	/// # Returns
	/// - `Ok(String)` with no leading or trailing whitespace. It may be longer
	///   than `length`, and even longer than the configured maximum.
	/// - `Ok("")` if the model was never trained.
	///
	/// # Errors
	/// - `InvalidLength` if `length` is outside `[1, max_length]`
	/// - any error raised by the random source
	pub fn generate(&mut self, length: usize) -> Result<String, ChainError> {
		let max = self.config.max_length();
		if length < 1 || length > max {
			return Err(ChainError::InvalidLength { length, max });
		}

		match self.model.reset(self.source.as_mut()) {
			Ok(()) => (),
			Err(ChainError::EmptyDistribution) => return Ok(String::new()),
			Err(e) => return Err(e),
		}

		let mut tweet = String::new();
		// Character count of `tweet`
		let mut size = 0;
		while size < length {
			if self.model.has_next() {
				let word = self.model.next(self.source.as_mut())?;
				if !tweet.is_empty() {
					tweet.push(' ');
					size += 1;
				}
				tweet.push_str(&word);
				size += word.chars().count();

				if size >= length {
					tweet.push(self.punctuation()?);
					break;
				}
			} else {
				tweet.push(self.punctuation()?);
				size += 1;
				self.model.reset(self.source.as_mut())?;
			}
		}

		trace!("generated {} characters for a target of {}", size, length);
		Ok(tweet)
	}

	/// Generates `count` tweets using `generate`.
	pub fn generate_many(&mut self, count: usize, length: usize) -> Result<Vec<String>, ChainError> {
		(0..count).map(|_| self.generate(length)).collect()
	}

	/// Draws a sentence-ending punctuation mark.
	fn punctuation(&mut self) -> Result<char, ChainError> {
		let draw = self.source.next_bounded(self.config.mark_bound())?;
		Ok(self.config.mark_for(draw))
	}
}
