//! Integration tests for CSV corpus loading.

use std::path::PathBuf;

use tweet_gen_core::corpus::parser::{csv_file_to_training_data, csv_file_to_tweets};
use tweet_gen_core::corpus::{CsvTweetSource, TokenSource};

fn fixture(name: &str) -> PathBuf {
	PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name)
}

fn words(sentence: &str) -> Vec<String> {
	sentence.split(' ').map(str::to_owned).collect()
}

#[test]
fn simple_csv_to_tweets() {
	let tweets = csv_file_to_tweets(fixture("simple_test_data.csv"), 1).unwrap();
	assert_eq!(
		tweets,
		vec![" The end should come here.", " This comes from data with no duplicate words!"]
	);
}

#[test]
fn simple_csv_to_training_data() {
	let sentences = csv_file_to_training_data(fixture("simple_test_data.csv"), 1).unwrap();
	assert_eq!(
		sentences,
		vec![words("the end should come here"), words("this comes from data with no duplicate words")]
	);
}

#[test]
fn messy_csv_to_training_data() {
	let sentences = csv_file_to_training_data(fixture("tweetparser_test.csv"), 3).unwrap();
	assert_eq!(
		sentences,
		vec![
			words("a tweet lives in this line"),
			words("12345678910"),
			words("banana"),
			words("despicable me 2 coming out in theaters soon"),
			words("banana"),
			words("i will go to the zoo"),
			words("there i will be happy"),
		]
	);
}

#[test]
fn lines_without_the_column_are_skipped() {
	let tweets = csv_file_to_tweets(fixture("tweetparser_test.csv"), 3).unwrap();
	assert_eq!(tweets.len(), 4);
}

#[test]
fn empty_csv_has_no_sentences() {
	let source = CsvTweetSource::new(fixture("empty.csv"), 0);
	assert!(source.sentences().unwrap().is_empty());
}

#[test]
fn csv_source_matches_parser() {
	let source = CsvTweetSource::new(fixture("twitterbot_test_distinct.csv"), 2);
	let sentences = source.sentences().unwrap();
	assert_eq!(sentences.len(), 4);
	assert_eq!(sentences[0], words("startone middleone endone"));
	assert_eq!(sentences, csv_file_to_training_data(fixture("twitterbot_test_distinct.csv"), 2).unwrap());
}
