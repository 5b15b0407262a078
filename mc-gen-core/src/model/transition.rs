use super::prefix::Prefix;
use super::suffix::Suffix;

/// A single observation: `suffix` followed `prefix` in the corpus.
///
/// Not stored as such; it is the unit handed to
/// [`TransitionTable::insert`](super::transition_table::TransitionTable::insert).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
	prefix: Prefix,
	suffix: Suffix,
}

impl Transition {
	pub fn new(prefix: Prefix, suffix: Suffix) -> Self {
		Self { prefix, suffix }
	}

	pub fn prefix(&self) -> &Prefix {
		&self.prefix
	}

	pub fn into_parts(self) -> (Prefix, Suffix) {
		(self.prefix, self.suffix)
	}
}
