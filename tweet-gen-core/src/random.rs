use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::ChainError;

/// A source of random integers used by the model and the synthesizer.
///
/// This abstraction allows plugging in a real random source, or a replayed
/// sequence of integers to make generation fully reproducible in tests.
///
/// # Example
/// ```
/// use tweet_gen_core::random::{RandomSource, ReplaySequence};
///
/// let mut source = ReplaySequence::new(vec![4, 1, 7]).unwrap();
/// assert_eq!(source.next_bounded(5).unwrap(), 4);
/// assert_eq!(source.next_bounded(5).unwrap(), 1);
/// // 7 is discarded, the sequence wraps around to 4
/// assert_eq!(source.next_bounded(5).unwrap(), 4);
/// ```
pub trait RandomSource {
	/// Returns the next raw integer.
	fn next(&mut self) -> usize;

	/// Returns the next integer in `[0, bound)`.
	fn next_bounded(&mut self, bound: usize) -> Result<usize, ChainError>;
}

/// A `RandomSource` drawing uniformly from a general-purpose PRNG.
#[derive(Debug, Clone)]
pub struct UniformRandom {
	rng: StdRng,
}

impl UniformRandom {
	/// Creates a source seeded from the operating system.
	pub fn new() -> Self {
		Self { rng: StdRng::from_os_rng() }
	}

	/// Creates a source with a fixed seed, for reproducible runs.
	pub fn seeded(seed: u64) -> Self {
		Self { rng: StdRng::seed_from_u64(seed) }
	}
}

impl Default for UniformRandom {
	fn default() -> Self {
		Self::new()
	}
}

impl RandomSource for UniformRandom {
	fn next(&mut self) -> usize {
		self.rng.random::<u32>() as usize
	}

	fn next_bounded(&mut self, bound: usize) -> Result<usize, ChainError> {
		if bound == 0 {
			return Err(ChainError::InvalidBound { bound });
		}
		Ok(self.rng.random_range(0..bound))
	}
}

/// A `RandomSource` replaying a fixed sequence of integers, cyclically.
///
/// Bounded draws discard every value `>= bound` until one qualifies.
///
/// # Invariants
/// - `values` is never empty
/// - `minimum` is the smallest element of `values`
/// - A bounded draw is only attempted when `bound > minimum`, which
///   guarantees the scan terminates. A bound equal to the minimum is rejected
///   as well, even though no value could qualify anyway.
#[derive(Debug, Clone)]
pub struct ReplaySequence {
	values: Vec<usize>,
	index: usize,
	minimum: usize,
}

impl ReplaySequence {
	/// Creates a replay source over `values`.
	///
	/// # Errors
	/// Returns `EmptyReplaySequence` if `values` is empty.
	pub fn new(values: impl Into<Vec<usize>>) -> Result<Self, ChainError> {
		let values = values.into();
		let minimum = *values.iter().min().ok_or(ChainError::EmptyReplaySequence)?;
		Ok(Self { values, index: 0, minimum })
	}

	/// Smallest value of the sequence.
	pub fn minimum(&self) -> usize {
		self.minimum
	}
}

impl RandomSource for ReplaySequence {
	fn next(&mut self) -> usize {
		let value = self.values[self.index];
		self.index = (self.index + 1) % self.values.len();
		value
	}

	fn next_bounded(&mut self, bound: usize) -> Result<usize, ChainError> {
		if bound <= self.minimum {
			return Err(ChainError::ExhaustedSource { bound, minimum: self.minimum });
		}

		loop {
			let value = self.next();
			if value < bound {
				return Ok(value);
			}
		}
	}
}
