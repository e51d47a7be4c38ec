//! Error types for the tweet-gen-core crate.

use std::io;
use std::path::PathBuf;

/// Errors raised by the random sources, the Markov model and the synthesizer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChainError {
	/// Sampling was requested from a distribution whose total count is zero.
	#[error("cannot sample from an empty distribution (model has no data)")]
	EmptyDistribution,

	/// A replay sequence cannot answer a bounded draw.
	#[error("replay sequence has no value below {bound} (minimum is {minimum})")]
	ExhaustedSource {
		/// The requested exclusive upper bound.
		bound: usize,
		/// Smallest value of the replay sequence.
		minimum: usize,
	},

	/// `next` was called while the cursor is unset or at the end of a sentence.
	#[error("the chain has no next token")]
	NoSuchElement,

	/// The requested tweet length is outside `[1, max]`.
	#[error("length must be between 1 and {max}, got {length}")]
	InvalidLength {
		/// The rejected length.
		length: usize,
		/// Configured maximum length.
		max: usize,
	},

	/// A replay sequence was built from no values.
	#[error("replay sequence must contain at least one value")]
	EmptyReplaySequence,

	/// A bounded draw was requested with an empty range.
	#[error("bound must be positive, got {bound}")]
	InvalidBound {
		/// The rejected bound.
		bound: usize,
	},

	/// A parallel training worker died before returning its partial model.
	#[error("parallel training merged {received} of {spawned} partial models")]
	IncompleteTraining {
		/// Number of workers started.
		spawned: usize,
		/// Number of partial models merged.
		received: usize,
	},

	/// A synthesizer configuration failed validation.
	#[error("invalid configuration: {reason}")]
	InvalidConfig {
		/// Description of the problem.
		reason: String,
	},
}

/// Errors raised while reading a corpus.
#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
	/// The corpus file could not be opened or read.
	#[error("failed to read corpus {}: {source}", path.display())]
	Io {
		/// Path of the corpus file.
		path: PathBuf,
		/// Underlying I/O error.
		#[source]
		source: io::Error,
	},
}

/// Errors surfaced by [`crate::bot::TweetBot`].
#[derive(Debug, thiserror::Error)]
pub enum BotError {
	#[error(transparent)]
	Chain(#[from] ChainError),

	#[error(transparent)]
	Corpus(#[from] CorpusError),

	/// Generated tweets could not be written.
	#[error("failed to write tweets to {}: {source}", path.display())]
	Write {
		/// Destination file.
		path: PathBuf,
		/// Underlying I/O error.
		#[source]
		source: io::Error,
	},
}
