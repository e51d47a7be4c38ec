use std::collections::BTreeMap;

use crate::error::ChainError;
use crate::random::RandomSource;

/// A weighted multiset of outcomes with cumulative-count sampling.
///
/// Conceptually, this is the set of outgoing edges of a node in a Markov
/// chain, each edge weighted by its number of observations.
///
/// ## Responsibilities:
/// - Accumulate outcome occurrences during training
/// - Sample an outcome proportionally to its count
/// - Merge with another distribution (parallel training support)
///
/// ## Invariants
/// - Each recorded count is strictly positive
/// - `total` is the sum of all counts and never shrinks
/// - Candidates are scanned in ascending order of their value, so a given
///   index always maps to the same outcome
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrequencyDistribution<T> {
	/// Occurrence count per outcome.
	/// Example: { "120" => 2, "160" => 1 }
	counts: BTreeMap<T, usize>,
	/// Sum of all counts.
	total: usize,
}

impl<T> Default for FrequencyDistribution<T> {
	fn default() -> Self {
		Self { counts: BTreeMap::new(), total: 0 }
	}
}

impl<T: Ord> FrequencyDistribution<T> {
	/// Creates an empty distribution.
	pub fn new() -> Self {
		Self::default()
	}

	/// Records one occurrence of `outcome`.
	///
	/// - If the outcome already exists, its count is increased.
	/// - Otherwise, it is created with a count of 1.
	pub fn record(&mut self, outcome: T) {
		*self.counts.entry(outcome).or_insert(0) += 1;
		self.total += 1;
	}

	/// Number of times `outcome` was recorded, 0 if never.
	pub fn count(&self, outcome: &T) -> usize {
		self.counts.get(outcome).copied().unwrap_or(0)
	}

	/// Sum of all counts.
	pub fn total(&self) -> usize {
		self.total
	}

	/// Number of distinct outcomes.
	pub fn len(&self) -> usize {
		self.counts.len()
	}

	pub fn is_empty(&self) -> bool {
		self.total == 0
	}

	/// Iterates over `(outcome, count)` pairs in sampling order.
	pub fn iter(&self) -> impl Iterator<Item = (&T, usize)> {
		self.counts.iter().map(|(outcome, count)| (outcome, *count))
	}

	/// Samples an outcome with probability proportional to its count.
	///
	/// Draws an index in `[0, total)` from `source` and returns the outcome
	/// whose cumulative range contains it:
	/// - an O(n) scan over the outcomes, in ascending order
	/// - a cumulative subtraction to select a bucket
	///
	/// # Errors
	/// - `EmptyDistribution` if nothing was ever recorded
	/// - any error raised by `source`
	pub fn sample(&self, source: &mut dyn RandomSource) -> Result<&T, ChainError> {
		if self.total == 0 {
			return Err(ChainError::EmptyDistribution);
		}

		let mut index = source.next_bounded(self.total)?;
		for (outcome, occurrence) in &self.counts {
			if index < *occurrence {
				return Ok(outcome);
			}
			index -= occurrence;
		}

		// Unreachable while `total` matches the counts
		self.counts.keys().next_back().ok_or(ChainError::EmptyDistribution)
	}
}

impl<T: Ord + Clone> FrequencyDistribution<T> {
	/// Merges another distribution into this one.
	///
	/// Counts of matching outcomes are summed, so merging the distributions
	/// of two disjoint training runs equals training on both.
	pub fn merge(&mut self, other: &Self) {
		for (outcome, occurrence) in &other.counts {
			*self.counts.entry(outcome.clone()).or_insert(0) += *occurrence;
		}
		self.total += other.total;
	}
}
