//! Tweet cleaning: URL removal, word filtering and sentence splitting.
//!
//! A "word character" is an ASCII letter, a digit or an apostrophe. Any word
//! containing another character (for instance a mention like `@user`) is
//! dropped from the training data.

use std::path::Path;
use std::sync::LazyLock;

use log::warn;
use regex::Regex;

use crate::error::CorpusError;
use crate::io::read_file;

/// Any word starting with `http`, up to the next whitespace.
static URL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\bhttp\S*").expect("valid regex"));

/// Any character that may not appear in a cleaned word.
static BAD_CHAR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-z0-9']").expect("valid regex"));

/// Sentence-ending punctuation marks recognized by the parser.
pub const PUNCTUATION: [char; 4] = ['.', '?', '!', ';'];

/// Removes every URL-like word from `s`.
///
/// The surrounding whitespace is kept, e.g. `"abc http://x.y"` → `"abc "`.
pub fn remove_urls(s: &str) -> String {
	URL.replace_all(s, "").into_owned()
}

/// Trims and lowercases a word.
///
/// Returns `None` if the result is empty or contains a character outside
/// `[a-z0-9']`.
pub fn clean_word(word: &str) -> Option<String> {
	let cleaned = word.trim().to_lowercase();
	if cleaned.is_empty() || BAD_CHAR.is_match(&cleaned) {
		return None;
	}
	Some(cleaned)
}

/// Replaces every punctuation mark of [`PUNCTUATION`] with a period.
pub fn replace_punctuation(tweet: &str) -> String {
	tweet.chars().map(|c| if PUNCTUATION.contains(&c) { '.' } else { c }).collect()
}

/// Splits a tweet into trimmed, non-empty sentences without end punctuation.
pub fn sentence_split(tweet: &str) -> Vec<String> {
	replace_punctuation(tweet)
		.split('.')
		.map(str::trim)
		.filter(|sentence| !sentence.is_empty())
		.map(str::to_owned)
		.collect()
}

/// Returns the content of column `column` (zero indexed) of a CSV line.
///
/// Returns `None` if the line is empty, or if the column is missing or empty.
/// Column contents are assumed to contain no commas.
pub fn extract_column(csv_line: &str, column: usize) -> Option<&str> {
	if csv_line.is_empty() {
		return None;
	}
	csv_line.split(',').nth(column).filter(|content| !content.is_empty())
}

/// Splits a sentence on spaces and keeps the cleaned words, in order.
pub fn parse_and_clean_sentence(sentence: &str) -> Vec<String> {
	sentence.split(' ').filter_map(clean_word).collect()
}

/// Cleans a tweet into a list of non-empty sentences of clean words.
///
/// URLs are removed before the tweet is split into sentences.
pub fn parse_and_clean_tweet(tweet: &str) -> Vec<Vec<String>> {
	sentence_split(&remove_urls(tweet))
		.iter()
		.map(|sentence| parse_and_clean_sentence(sentence))
		.filter(|words| !words.is_empty())
		.collect()
}

/// Extracts the raw tweets of a CSV file.
///
/// Lines that are empty or have no content at `column` are skipped.
///
/// # Errors
/// Returns `CorpusError::Io` if the file is missing or unreadable.
pub fn csv_file_to_tweets<P: AsRef<Path>>(path: P, column: usize) -> Result<Vec<String>, CorpusError> {
	let path = path.as_ref();
	let lines = read_file(path).map_err(|source| CorpusError::Io { path: path.to_path_buf(), source })?;

	let mut tweets = Vec::new();
	for (number, line) in lines.iter().enumerate() {
		match extract_column(line, column) {
			Some(tweet) => tweets.push(tweet.to_owned()),
			None if line.is_empty() => (),
			None => warn!("{}:{}: no content at column {}, skipped", path.display(), number + 1, column),
		}
	}
	Ok(tweets)
}

/// Builds the training data of a CSV file of tweets.
///
/// The result is every cleaned sentence of every tweet, in file order.
///
/// # Errors
/// Returns `CorpusError::Io` if the file is missing or unreadable.
pub fn csv_file_to_training_data<P: AsRef<Path>>(path: P, column: usize) -> Result<Vec<Vec<String>>, CorpusError> {
	let tweets = csv_file_to_tweets(path, column)?;
	Ok(tweets.iter().flat_map(|tweet| parse_and_clean_tweet(tweet)).collect())
}
