use std::io;

use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, TextGenError>;

/// Errors raised while building a transition table.
///
/// Generation itself never fails: a dead end or an empty table simply
/// ends the output sequence.
#[derive(Error, Debug)]
pub enum TextGenError {
	/// The requested window (prefix) size is not strictly greater than 1.
	#[error("A prefix size has to be a positive number great than 1 (got {0})")]
	InvalidWindowSize(usize),

	/// A transition was inserted with a prefix that does not match the
	/// size fixed at table construction.
	#[error("Prefixes for this state machine are fixed to {expected}, the given prefix has size {actual}")]
	InvalidPrefixSize {
		expected: usize,
		actual: usize,
	},

	/// The corpus stream stopped before being consumed, or failed to close.
	#[error("{message}")]
	SourceReadError {
		message: String,
		#[source]
		source: Option<io::Error>,
	},
}

impl TextGenError {
	pub(crate) fn source_read(message: &str) -> Self {
		Self::SourceReadError { message: message.to_owned(), source: None }
	}

	pub(crate) fn source_read_with(message: &str, cause: io::Error) -> Self {
		Self::SourceReadError { message: message.to_owned(), source: Some(cause) }
	}
}
