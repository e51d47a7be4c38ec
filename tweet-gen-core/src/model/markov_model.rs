use std::collections::BTreeMap;
use std::sync::mpsc;
use std::thread;

use log::debug;

use super::distribution::FrequencyDistribution;
use crate::error::ChainError;
use crate::random::RandomSource;

/// What may follow a token in a sentence: another token, or its end.
///
/// The declaration order matters: `End` sorts before every token, which makes
/// it the first candidate scanned when sampling a successor.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Outcome<T> {
	/// The sentence ends here.
	End,
	/// The sentence continues with this token.
	Token(T),
}

/// Position of the generation cursor.
#[derive(Clone, Debug, PartialEq, Eq)]
enum Cursor<T> {
	/// Never reset.
	Unset,
	/// The next call to `next` returns this token.
	At(T),
	/// The current sentence is over.
	End,
}

/// First-order Markov model over tokens.
///
/// The `MarkovModel` stores, for every token observed as a predecessor, the
/// distribution of the tokens that followed it (including the end of the
/// sentence), plus the distribution of the tokens that started a sentence.
///
/// # Responsibilities
/// - Train the model from sentences (counts accumulate across calls)
/// - Walk the chain with a cursor: `reset`, then `next` while `has_next`
/// - Merge with another model (parallel training support)
///
/// # Invariants
/// - Every successor distribution is non-empty
/// - A token has a successor distribution iff it was observed in training
/// - The cursor is only moved by `reset`, `reset_to`, `reset_to_end` and `next`
#[derive(Clone, Debug)]
pub struct MarkovModel<T> {
	/// Mapping from a token to the distribution of its successors.
	chain: BTreeMap<T, FrequencyDistribution<Outcome<T>>>,

	/// Tokens that started a training sentence.
	start_words: FrequencyDistribution<T>,

	cursor: Cursor<T>,
}

impl<T> Default for MarkovModel<T> {
	fn default() -> Self {
		Self { chain: BTreeMap::new(), start_words: FrequencyDistribution::default(), cursor: Cursor::Unset }
	}
}

impl<T: Ord + Clone> MarkovModel<T> {
	/// Creates an empty, untrained model.
	pub fn new() -> Self {
		Self::default()
	}

	/// Records that `successor` followed `predecessor` once.
	pub fn add_bigram(&mut self, predecessor: T, successor: Outcome<T>) {
		self.chain.entry(predecessor).or_default().record(successor);
	}

	/// Adds one sentence to the model.
	///
	/// # Behavior
	/// - Records the first token as a start word.
	/// - Records every adjacent pair `(a, b)` as a transition from `a` to `b`.
	/// - Records a transition from the last token to `Outcome::End`.
	///
	/// # Notes
	/// - An empty sentence leaves the model untouched.
	pub fn train<I>(&mut self, tokens: I)
	where
		I: IntoIterator<Item = T>,
	{
		let mut tokens = tokens.into_iter();
		let Some(first) = tokens.next() else {
			return;
		};

		self.start_words.record(first.clone());
		let mut previous = first;
		for token in tokens {
			self.add_bigram(previous, Outcome::Token(token.clone()));
			previous = token;
		}
		self.add_bigram(previous, Outcome::End);
	}

	/// Trains the model on every sentence of a corpus, in order.
	pub fn train_corpus<S, I>(&mut self, sentences: S)
	where
		S: IntoIterator<Item = I>,
		I: IntoIterator<Item = T>,
	{
		for sentence in sentences {
			self.train(sentence);
		}
	}

	/// Moves the cursor to a start word sampled from the start-word distribution.
	///
	/// # Errors
	/// - `EmptyDistribution` if the model was never trained; the cursor is
	///   left unchanged
	pub fn reset(&mut self, source: &mut dyn RandomSource) -> Result<(), ChainError> {
		let start = self.start_words.sample(source)?.clone();
		self.cursor = Cursor::At(start);
		Ok(())
	}

	/// Moves the cursor to `token`, whether or not it was ever observed.
	pub fn reset_to(&mut self, token: T) {
		self.cursor = Cursor::At(token);
	}

	/// Moves the cursor to the end of a sentence.
	pub fn reset_to_end(&mut self) {
		self.cursor = Cursor::End;
	}

	/// Returns `true` if the cursor is set and not at the end of a sentence.
	pub fn has_next(&self) -> bool {
		matches!(self.cursor, Cursor::At(_))
	}

	/// Returns the token under the cursor and advances to a sampled successor.
	///
	/// A token that was never observed as a predecessor (for instance a start
	/// forced with `reset_to`) is followed directly by the end of the sentence,
	/// without drawing from `source`.
	///
	/// # Errors
	/// - `NoSuchElement` if `has_next()` is false
	/// - any error raised by `source`; the cursor is left unchanged
	pub fn next(&mut self, source: &mut dyn RandomSource) -> Result<T, ChainError> {
		let returned = match &self.cursor {
			Cursor::At(token) => token.clone(),
			Cursor::Unset | Cursor::End => return Err(ChainError::NoSuchElement),
		};

		let successor = match self.chain.get(&returned) {
			Some(successors) => successors.sample(source)?.clone(),
			None => Outcome::End,
		};

		self.cursor = match successor {
			Outcome::Token(token) => Cursor::At(token),
			Outcome::End => Cursor::End,
		};
		Ok(returned)
	}

	/// Distribution of the successors of `token`, if it was ever observed.
	pub fn successors_of(&self, token: &T) -> Option<&FrequencyDistribution<Outcome<T>>> {
		self.chain.get(token)
	}

	/// Distribution of the tokens that started a training sentence.
	pub fn start_words(&self) -> &FrequencyDistribution<T> {
		&self.start_words
	}

	/// Number of distinct tokens with a successor distribution.
	pub fn len(&self) -> usize {
		self.chain.len()
	}

	/// Returns `true` if no sentence was ever trained.
	pub fn is_empty(&self) -> bool {
		self.start_words.is_empty()
	}

	/// Merges another model into this one.
	///
	/// # Notes
	/// - Existing distributions are merged; missing ones are cloned.
	/// - The cursor of `other` is ignored.
	pub fn merge(&mut self, other: &Self) {
		for (token, successors) in &other.chain {
			if let Some(existing) = self.chain.get_mut(token) {
				existing.merge(successors);
			} else {
				self.chain.insert(token.clone(), successors.clone());
			}
		}
		self.start_words.merge(&other.start_words);
	}
}

impl<T: Ord + Clone + Send + 'static> MarkovModel<T> {
	/// Builds a model from a large corpus, training chunks of it in parallel.
	///
	/// # Behavior
	/// - Splits the sentences into chunks (based on CPU cores * factor).
	/// - Spawns threads to build partial models for each chunk.
	/// - Merges all partial models sequentially.
	///
	/// # Notes
	/// - Counts are summed and sampling order depends only on token values,
	///   so the result is identical to `train_corpus` on the same sentences.
	/// - Uses MPSC channels to collect models from threads.
	///
	/// # Errors
	/// Returns `IncompleteTraining` if a worker died before sending its
	/// partial model.
	pub fn from_corpus(sentences: Vec<Vec<T>>) -> Result<Self, ChainError> {
		if sentences.is_empty() {
			return Ok(Self::default());
		}

		let cpus = num_cpus::get();
		let factor = 8;
		let chunks = cpus * factor;
		let chunk_size = sentences.len().div_ceil(chunks).max(1);

		let (tx, rx) = mpsc::channel();
		let mut spawned = 0;
		for chunk in sentences.chunks(chunk_size) {
			let tx = tx.clone();
			let chunk: Vec<Vec<T>> = chunk.to_vec();
			spawned += 1;

			thread::spawn(move || {
				let mut partial_model = MarkovModel::default();
				partial_model.train_corpus(chunk);
				// The receiver outlives every sender
				let _ = tx.send(partial_model);
			});
		}
		drop(tx);

		Self::merge_partials(rx.iter(), spawned, sentences.len())
	}

	/// Merges the partial models of `from_corpus`, checking none is missing.
	fn merge_partials<I>(partials: I, spawned: usize, sentences: usize) -> Result<Self, ChainError>
	where
		I: IntoIterator<Item = Self>,
	{
		let mut final_model = MarkovModel::default();
		let mut received = 0;
		for partial_model in partials {
			final_model.merge(&partial_model);
			received += 1;
		}
		if received != spawned {
			return Err(ChainError::IncompleteTraining { spawned, received });
		}

		debug!(
			"trained {} sentences in {} chunks: {} tokens, {} start words",
			sentences,
			spawned,
			final_model.len(),
			final_model.start_words.total()
		);
		Ok(final_model)
	}
}
