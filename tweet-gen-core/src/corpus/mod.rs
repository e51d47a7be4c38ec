//! Corpus loading.
//!
//! A [`TokenSource`] hands the model an ordered list of sentences, each a
//! non-empty list of clean lowercase tokens.

use std::path::{Path, PathBuf};

use crate::error::CorpusError;

/// Tweet cleaning helpers and CSV extraction.
pub mod parser;

/// Provider of training sentences.
pub trait TokenSource {
	/// Returns every sentence of the corpus, in order.
	fn sentences(&self) -> Result<Vec<Vec<String>>, CorpusError>;
}

/// Tweets stored in one column of a CSV file.
#[derive(Debug, Clone)]
pub struct CsvTweetSource {
	path: PathBuf,
	column: usize,
}

impl CsvTweetSource {
	/// Creates a source reading column `column` (zero indexed) of `path`.
	pub fn new<P: AsRef<Path>>(path: P, column: usize) -> Self {
		Self { path: path.as_ref().to_path_buf(), column }
	}

	pub fn path(&self) -> &Path {
		&self.path
	}
}

impl TokenSource for CsvTweetSource {
	fn sentences(&self) -> Result<Vec<Vec<String>>, CorpusError> {
		parser::csv_file_to_training_data(&self.path, self.column)
	}
}

/// Raw tweet texts, cleaned on demand.
#[derive(Debug, Clone, Default)]
pub struct TweetTexts(pub Vec<String>);

impl TokenSource for TweetTexts {
	fn sentences(&self) -> Result<Vec<Vec<String>>, CorpusError> {
		Ok(self.0.iter().flat_map(|tweet| parser::parse_and_clean_tweet(tweet)).collect())
	}
}

/// Sentences that are already clean. Empty sentences are dropped.
impl TokenSource for Vec<Vec<String>> {
	fn sentences(&self) -> Result<Vec<Vec<String>>, CorpusError> {
		Ok(self.iter().filter(|sentence| !sentence.is_empty()).cloned().collect())
	}
}
