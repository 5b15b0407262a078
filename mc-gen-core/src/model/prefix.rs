use std::fmt;

use crate::error::{Result, TextGenError};

/// Validated window size used to cut prefixes out of a corpus.
///
/// # Invariants
/// - The value is always strictly greater than 1
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PrefixSize(usize);

impl PrefixSize {
	/// Creates a new prefix size.
	///
	/// # Errors
	/// Returns `InvalidWindowSize` if `value <= 1`.
	pub fn new(value: usize) -> Result<Self> {
		if value <= 1 {
			return Err(TextGenError::InvalidWindowSize(value));
		}
		Ok(Self(value))
	}

	/// Returns the number of words in a prefix of this size.
	pub fn get(self) -> usize {
		self.0
	}
}

impl TryFrom<usize> for PrefixSize {
	type Error = TextGenError;

	fn try_from(value: usize) -> Result<Self> {
		Self::new(value)
	}
}

impl fmt::Display for PrefixSize {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

/// An ordered, fixed-length sequence of words used as a lookup key.
///
/// Equality and hashing are structural: two prefixes are equal when their
/// words are equal element-wise. A prefix is never modified in place;
/// moving the walk forward builds a new one with [`Prefix::rotate`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Prefix {
	words: Vec<String>,
}

impl Prefix {
	pub fn new(words: Vec<String>) -> Self {
		Self { words }
	}

	/// Number of words in the prefix.
	pub fn len(&self) -> usize {
		self.words.len()
	}

	pub fn is_empty(&self) -> bool {
		self.words.is_empty()
	}

	pub fn words(&self) -> &[String] {
		&self.words
	}

	/// Drops the first word and appends `next` at the end.
	///
	/// The length is preserved, so the result can be looked up in the same
	/// table as `self`.
	pub fn rotate(&self, next: &str) -> Self {
		let mut words = Vec::with_capacity(self.words.len());
		words.extend(self.words.iter().skip(1).cloned());
		words.push(next.to_owned());
		Self { words }
	}
}

impl<S: Into<String>> FromIterator<S> for Prefix {
	fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
		Self::new(iter.into_iter().map(Into::into).collect())
	}
}

/// Words joined with a single space.
///
/// A word carrying its own trailing `\n` is still followed by the space,
/// so `["test.\n", "With"]` renders as `"test.\n With"`.
impl fmt::Display for Prefix {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.words.join(" "))
	}
}
