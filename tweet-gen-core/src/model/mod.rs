//! Top-level module for the Markov tweet generation system.
//!
//! This module provides:
//! - Weighted outcome counting and sampling (`FrequencyDistribution`)
//! - A first-order Markov model with a generation cursor (`MarkovModel`)
//! - Generation settings (`SynthConfig`)
//! - Length-bounded tweet generation (`Synthesizer`)

/// Weighted multiset of outcomes with reproducible cumulative sampling.
pub mod distribution;

/// First-order Markov model over tokens.
///
/// Handles sentence ingestion, transition counting, cursor-based walking
/// of the chain, model merging and parallel corpus training.
pub mod markov_model;

/// Length cap and punctuation scheme used by the synthesizer.
pub mod synth_config;

/// Length-bounded tweet generation on top of a trained model.
pub mod synthesizer;

pub use distribution::FrequencyDistribution;
pub use markov_model::{MarkovModel, Outcome};
pub use synth_config::{MAX_TWEET_LENGTH, SynthConfig};
pub use synthesizer::Synthesizer;
