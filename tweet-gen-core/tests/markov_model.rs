//! Integration tests for MarkovModel training and walking.

use tweet_gen_core::model::{MarkovModel, Outcome};
use tweet_gen_core::random::{RandomSource, ReplaySequence, UniformRandom};
use tweet_gen_core::ChainError;

fn words(sentence: &str) -> Vec<String> {
	sentence.split_whitespace().map(str::to_owned).collect()
}

fn token(t: &str) -> Outcome<String> {
	Outcome::Token(t.to_owned())
}

/// Walks the chain from the current cursor until the sentence ends.
fn walk(mc: &mut MarkovModel<String>, source: &mut dyn RandomSource) -> Vec<String> {
	let mut walked = Vec::new();
	while mc.has_next() {
		walked.push(mc.next(source).unwrap());
	}
	walked
}

#[test]
fn counts_accumulate_across_training_calls() {
	let mut mc = MarkovModel::new();
	mc.train(words("1 2 3"));
	assert_eq!(mc.start_words().count(&"1".to_owned()), 1);
	assert_eq!(mc.start_words().count(&"2".to_owned()), 0);

	mc.train(words("1 2 3"));
	assert_eq!(mc.start_words().count(&"1".to_owned()), 2);
	assert_eq!(mc.successors_of(&"1".to_owned()).unwrap().count(&token("2")), 2);
	assert_eq!(mc.successors_of(&"3".to_owned()).unwrap().count(&Outcome::End), 2);
}

#[test]
fn counts_match_bigram_occurrences() {
	let corpus = ["a b a b c", "b a", "c a b", "a"];
	let mut mc = MarkovModel::new();
	for sentence in corpus {
		mc.train(words(sentence));
	}

	let a = mc.successors_of(&"a".to_owned()).unwrap();
	assert_eq!(a.count(&token("b")), 3);
	assert_eq!(a.count(&Outcome::End), 2);
	assert_eq!(a.total(), 5);

	let b = mc.successors_of(&"b".to_owned()).unwrap();
	assert_eq!(b.count(&token("a")), 2);
	assert_eq!(b.count(&token("c")), 1);
	assert_eq!(b.count(&Outcome::End), 1);

	assert_eq!(mc.start_words().total(), 4);
	assert_eq!(mc.len(), 3);
}

#[test]
fn replayed_walk_is_deterministic() {
	// "CIS"   -> ["120", "120", "160"]
	// "120"   -> ["beats", "rocks"]
	// "beats" -> ["CIS"]
	// "rocks" -> [END]
	let mut source = ReplaySequence::new(vec![0, 0, 0, 1, 1, 0]).unwrap();
	let mut mc = MarkovModel::new();
	mc.train(words("CIS 120 rocks"));
	mc.train(words("CIS 120 beats CIS 160"));

	mc.reset_to("CIS".to_owned());
	assert_eq!(walk(&mut mc, &mut source), words("CIS 120 beats CIS 120 rocks"));
	assert!(!mc.has_next());
}

#[test]
fn end_is_the_first_candidate() {
	// "I"     -> ["am", "could", "could"]
	// "could" -> ["be", "care"]
	// "be"    -> [END, "the"]
	// "the"   -> ["best", "greatest"]
	let mut source = ReplaySequence::new(vec![1, 0, 1, 0, 0]).unwrap();
	let mut mc = MarkovModel::new();
	mc.train(words("I could care less"));
	mc.train(words("I am the best"));
	mc.train(words("The best I could be"));
	mc.train(words("be the greatest ever"));

	mc.reset_to("I".to_owned());
	for expected in ["I", "could", "be", "the", "best"] {
		assert!(mc.has_next());
		assert_eq!(mc.next(&mut source).unwrap(), expected);
	}
}

#[test]
fn single_token_sentence() {
	let mut source = UniformRandom::seeded(9);
	let mut mc = MarkovModel::new();
	mc.train(words("monkey"));
	mc.reset(&mut source).unwrap();
	assert_eq!(mc.next(&mut source).unwrap(), "monkey");
	assert!(!mc.has_next());
}

#[test]
fn forced_start_outside_training_data() {
	// A single value above every bound: any draw would fail
	let mut source = ReplaySequence::new(vec![50]).unwrap();
	let mut mc: MarkovModel<String> = MarkovModel::new();

	mc.reset_to_end();
	assert!(!mc.has_next());

	mc.reset_to("dog".to_owned());
	assert!(mc.has_next());
	assert_eq!(mc.next(&mut source).unwrap(), "dog");
	assert!(!mc.has_next());
	assert_eq!(mc.next(&mut source), Err(ChainError::NoSuchElement));
}

#[test]
fn empty_training_is_a_no_op() {
	let mut source = UniformRandom::seeded(0);
	let mut mc = MarkovModel::new();
	mc.train(Vec::<String>::new());
	assert_eq!(mc.len(), 0);
	assert_eq!(mc.start_words().total(), 0);
	assert!(mc.is_empty());
	assert_eq!(mc.reset(&mut source), Err(ChainError::EmptyDistribution));
	assert!(!mc.has_next());

	mc.train(words("1"));
	let before = (mc.len(), mc.start_words().total());
	mc.train(Vec::new());
	assert_eq!((mc.len(), mc.start_words().total()), before);
	assert_eq!(mc.start_words().count(&"1".to_owned()), 1);
	mc.reset(&mut source).unwrap();
	assert!(mc.has_next());
}

#[test]
fn parallel_training_matches_sequential_training() {
	let vocabulary = ["a", "b", "c", "d", "e", "f", "g"];
	let corpus: Vec<Vec<String>> = (0..500)
		.map(|i| {
			(0..(i % 6))
				.map(|j| vocabulary[(i * 3 + j * 5) % vocabulary.len()].to_owned())
				.collect()
		})
		.collect();

	let mut sequential = MarkovModel::new();
	sequential.train_corpus(corpus.clone());
	let parallel = MarkovModel::from_corpus(corpus).unwrap();

	assert_eq!(parallel.len(), sequential.len());
	assert_eq!(parallel.start_words(), sequential.start_words());
	for t in vocabulary {
		let t = t.to_owned();
		assert_eq!(parallel.successors_of(&t), sequential.successors_of(&t));
	}
}

#[test]
fn parallel_training_of_empty_corpus() {
	let mc: MarkovModel<String> = MarkovModel::from_corpus(Vec::new()).unwrap();
	assert!(mc.is_empty());
	assert_eq!(mc.len(), 0);
}

#[test]
fn replayed_walks_are_reproducible() {
	let mut mc = MarkovModel::new();
	mc.train(words("the cat sat on the mat"));
	mc.train(words("the dog sat on the cat"));

	// start "the", then "cat", then END (sorted before "sat")
	let run = |mc: &mut MarkovModel<String>| {
		let mut source = ReplaySequence::new(vec![1, 0, 0]).unwrap();
		mc.reset(&mut source).unwrap();
		walk(mc, &mut source)
	};
	assert_eq!(run(&mut mc), words("the cat"));
	assert_eq!(run(&mut mc), words("the cat"));
}
