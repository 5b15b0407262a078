//! Word sources feeding the transition table builder.
//!
//! A corpus is read one word at a time through [`CorpusStream`]. Words
//! ending a line carry a trailing `\n` so that generated text can restore
//! line breaks.

use std::io;

/// In-memory word list.
pub mod in_memory;

/// Line-oriented reader (files, uploads) split into words.
pub mod file;

/// Line splitting rules.
pub mod tokenizer;

pub use file::FileCorpusStream;
pub use in_memory::InMemoryCorpusStream;
pub use tokenizer::ExtraSpacesHandling;

/// A scoped, closable sequence of words.
///
/// # Contract
/// - `next_word` returns `None` once the stream is exhausted, and then
///   `consumed` returns `true`.
/// - `next_word` returning `None` while `consumed` is still `false` means
///   the underlying source failed. Consumers must treat it as a read error
///   rather than as the end of the corpus. The failure, when known, is
///   handed over once by `take_error`.
/// - `close` releases the underlying resource. It is called exactly once by
///   the builder.
pub trait CorpusStream {
	fn next_word(&mut self) -> Option<String>;

	fn consumed(&self) -> bool;

	fn close(&mut self) -> io::Result<()>;

	/// Takes the I/O error behind the last failed read, if any.
	fn take_error(&mut self) -> Option<io::Error> {
		None
	}
}

impl<S: CorpusStream + ?Sized> CorpusStream for Box<S> {
	fn next_word(&mut self) -> Option<String> {
		(**self).next_word()
	}

	fn consumed(&self) -> bool {
		(**self).consumed()
	}

	fn close(&mut self) -> io::Result<()> {
		(**self).close()
	}

	fn take_error(&mut self) -> Option<io::Error> {
		(**self).take_error()
	}
}
