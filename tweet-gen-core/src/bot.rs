use std::path::Path;

use log::{debug, info};

use crate::corpus::{CsvTweetSource, TokenSource};
use crate::error::{BotError, CorpusError};
use crate::io;
use crate::model::{MarkovModel, SynthConfig, Synthesizer};
use crate::random::RandomSource;

/// High-level tweet bot.
///
/// # Responsibilities
/// - Train a Markov model from a token source (CSV file or in-memory corpus)
/// - Generate one or many tweets of a requested length
/// - Write generated tweets to a file, one per line
pub struct TweetBot {
	synthesizer: Synthesizer,
}

impl TweetBot {
	/// Trains a bot on every sentence of `source`.
	///
	/// # Errors
	/// Returns an error if the source cannot be read.
	pub fn new(source: &dyn TokenSource, random: Box<dyn RandomSource + Send>) -> Result<Self, CorpusError> {
		Ok(Self::from_sentences(source.sentences()?, random))
	}

	/// Trains a bot on column `column` (zero indexed) of a CSV file of tweets.
	///
	/// # Errors
	/// Returns `CorpusError::Io` if the file is missing or unreadable.
	pub fn from_csv<P: AsRef<Path>>(
		path: P,
		column: usize,
		random: Box<dyn RandomSource + Send>,
	) -> Result<Self, CorpusError> {
		let source = CsvTweetSource::new(&path, column);
		let bot = Self::new(&source, random)?;
		info!(
			"trained on {}: {} distinct words",
			path.as_ref().display(),
			bot.synthesizer.model().len()
		);
		Ok(bot)
	}

	/// Trains a bot on sentences that are already clean, in order, on the
	/// calling thread.
	///
	/// Empty sentences are ignored.
	pub fn from_sentences(sentences: Vec<Vec<String>>, random: Box<dyn RandomSource + Send>) -> Self {
		let mut model = MarkovModel::new();
		model.train_corpus(sentences);
		Self::from_model(model, random)
	}

	/// Wraps an already trained model, e.g. one built with
	/// [`MarkovModel::from_corpus`].
	pub fn from_model(model: MarkovModel<String>, random: Box<dyn RandomSource + Send>) -> Self {
		Self { synthesizer: Synthesizer::new(model, random) }
	}

	/// Replaces the synthesizer configuration.
	///
	/// # Errors
	/// Returns `InvalidConfig` if the configuration does not validate.
	pub fn with_config(mut self, config: SynthConfig) -> Result<Self, BotError> {
		self.synthesizer.set_config(config)?;
		Ok(self)
	}

	pub fn synthesizer(&self) -> &Synthesizer {
		&self.synthesizer
	}

	pub fn synthesizer_mut(&mut self) -> &mut Synthesizer {
		&mut self.synthesizer
	}

	/// Generates one tweet of approximately `length` characters.
	///
	/// Returns an empty string if the corpus had no sentences.
	pub fn generate_tweet(&mut self, length: usize) -> Result<String, BotError> {
		Ok(self.synthesizer.generate(length)?)
	}

	/// Generates `count` tweets of approximately `length` characters.
	pub fn generate_tweets(&mut self, count: usize, length: usize) -> Result<Vec<String>, BotError> {
		Ok(self.synthesizer.generate_many(count, length)?)
	}

	/// Generates `count` tweets and writes them to `path`, one per line.
	///
	/// # Parameters
	/// - `append`: add to the existing file instead of overwriting it
	///
	/// # Errors
	/// Nothing is written if generation fails.
	pub fn write_tweets_to_file<P: AsRef<Path>>(
		&mut self,
		count: usize,
		length: usize,
		path: P,
		append: bool,
	) -> Result<Vec<String>, BotError> {
		let tweets = self.generate_tweets(count, length)?;
		let path = path.as_ref();
		io::write_lines(path, tweets.as_slice(), append)
			.map_err(|source| BotError::Write { path: path.to_path_buf(), source })?;
		debug!("wrote {} tweets to {}", tweets.len(), path.display());
		Ok(tweets)
	}
}
