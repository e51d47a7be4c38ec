//! Markov-chain tweet generation library.
//!
//! This crate provides a small tweet generation system including:
//! - Pluggable randomness, including a replayable sequence for tests
//! - A first-order, word-level Markov model trained from sentences
//! - Length-bounded tweet synthesis with sentence-ending punctuation
//! - Tweet cleaning and CSV corpus loading
//!
//! # Quick start
//!
//! ```
//! use tweet_gen_core::bot::TweetBot;
//! use tweet_gen_core::random::UniformRandom;
//!
//! let sentences = vec![
//! 	vec!["the".to_owned(), "cat".to_owned(), "sat".to_owned()],
//! 	vec!["the".to_owned(), "dog".to_owned(), "ran".to_owned()],
//! ];
//! let mut bot = TweetBot::from_sentences(sentences, Box::new(UniformRandom::seeded(1)));
//! let tweet = bot.generate_tweet(20).unwrap();
//! assert!(tweet.starts_with("the "));
//! ```

/// Error types shared by the whole crate.
pub mod error;

/// Random sources (uniform PRNG and deterministic replay).
pub mod random;

/// Markov model and tweet generation logic.
pub mod model;

/// Corpus loading: tweet cleaning and token sources.
pub mod corpus;

/// High-level bot combining a corpus, a model and a synthesizer.
pub mod bot;

/// I/O utilities (line reading and writing, directory listing).
pub mod io;

pub use error::{BotError, ChainError, CorpusError};
