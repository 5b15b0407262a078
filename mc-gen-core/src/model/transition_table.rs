use indexmap::IndexMap;

use super::prefix::{Prefix, PrefixSize};
use super::suffix::Suffix;
use super::transition::Transition;
use crate::error::{Result, TextGenError};

/// Multi-valued mapping from fixed-size prefixes to the suffixes that
/// followed them in a corpus.
///
/// The table is the finite state machine walked by
/// [`RandomTextGenerator`](super::generator::RandomTextGenerator).
///
/// # Responsibilities
/// - Record every observed transition, duplicates included
/// - Look up the suffixes recorded for a prefix
/// - List the distinct prefixes in a stable order
///
/// # Invariants
/// - Every key has exactly `prefix_size` words
/// - Every stored suffix list is non-empty
/// - Prefixes keep their first-insertion order, and suffixes keep their
///   insertion order per prefix
///
/// Duplicated suffixes are kept on purpose: uniform sampling over the list
/// then favours transitions seen more often.
#[derive(Clone, Debug)]
pub struct TransitionTable {
	/// Number of words in every prefix of this table
	prefix_size: PrefixSize,

	/// Prefix -> suffixes, in insertion order
	transitions: IndexMap<Prefix, Vec<Suffix>>,

	/// Total number of recorded transitions
	count: usize,
}

impl TransitionTable {
	/// Creates an empty table accepting prefixes of `prefix_size` words.
	pub fn new(prefix_size: PrefixSize) -> Self {
		Self { prefix_size, transitions: IndexMap::new(), count: 0 }
	}

	pub fn prefix_size(&self) -> PrefixSize {
		self.prefix_size
	}

	/// Records a transition.
	///
	/// Appends the suffix to the list of its prefix, creating the entry if
	/// needed.
	///
	/// # Returns
	/// The total number of transitions after insertion.
	///
	/// # Errors
	/// Returns `InvalidPrefixSize` if the prefix length differs from the
	/// size fixed at construction. The table is left unchanged.
	pub fn insert(&mut self, transition: Transition) -> Result<usize> {
		let expected = self.prefix_size.get();
		let actual = transition.prefix().len();
		if actual != expected {
			return Err(TextGenError::InvalidPrefixSize { expected, actual });
		}

		let (prefix, suffix) = transition.into_parts();
		self.transitions.entry(prefix).or_default().push(suffix);
		self.count += 1;
		Ok(self.count)
	}

	/// Returns the suffixes recorded for `prefix`.
	///
	/// An unknown prefix is not an error; it yields an empty slice.
	pub fn suffixes_for(&self, prefix: &Prefix) -> &[Suffix] {
		self.transitions.get(prefix).map(Vec::as_slice).unwrap_or(&[])
	}

	/// Iterates over the distinct prefixes, in first-insertion order.
	pub fn prefixes(&self) -> impl ExactSizeIterator<Item = &Prefix> {
		self.transitions.keys()
	}

	/// Returns the `index`-th distinct prefix (see [`Self::prefixes`]).
	pub fn prefix_at(&self, index: usize) -> Option<&Prefix> {
		self.transitions.get_index(index).map(|(prefix, _)| prefix)
	}

	/// Number of distinct prefixes.
	pub fn prefix_count(&self) -> usize {
		self.transitions.len()
	}

	/// Number of recorded transitions (not distinct prefixes).
	pub fn count(&self) -> usize {
		self.count
	}

	pub fn is_empty(&self) -> bool {
		self.count == 0
	}
}
