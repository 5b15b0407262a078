use std::collections::VecDeque;

use log::{debug, error};

use super::prefix::{Prefix, PrefixSize};
use super::suffix::Suffix;
use super::transition::Transition;
use super::transition_table::TransitionTable;
use crate::corpus::{CorpusStream, InMemoryCorpusStream};
use crate::error::{Result, TextGenError};

/// Builds a [`TransitionTable`] from a corpus stream.
///
/// # Behavior
/// - Slides a window of `window_size` words over the corpus.
/// - Once the window is full, every new word is recorded as the suffix of
///   the window contents, before being pushed into the window.
/// - At the end of the corpus, a full window is recorded one last time with
///   [`Suffix::EndOfText`].
///
/// # Notes
/// - A corpus shorter than the window yields an empty table.
/// - A corpus of exactly `window_size` words yields a single end-of-text
///   transition.
pub struct TransitionTableBuilder;

impl TransitionTableBuilder {
	/// Reads the whole stream and returns the resulting table.
	///
	/// The stream is closed exactly once, whatever the outcome.
	///
	/// # Errors
	/// - `InvalidWindowSize` if `window_size <= 1` (nothing is read).
	/// - `SourceReadError` if the stream stopped yielding words before being
	///   consumed, or if closing it failed. A read error wins over a close
	///   error.
	pub fn build<S: CorpusStream>(mut stream: S, window_size: usize) -> Result<TransitionTable> {
		let scanned = PrefixSize::new(window_size).and_then(|size| Self::scan(&mut stream, size));
		let closed = stream.close();

		let table = scanned?;
		if let Err(e) = closed {
			error!("Failed to close the corpus stream: {e}");
			return Err(TextGenError::source_read_with(
				"An IO error occurred while closing the corpus stream source",
				e,
			));
		}

		debug!(
			"Transition table built: {} transitions over {} prefixes (prefix size {})",
			table.count(),
			table.prefix_count(),
			table.prefix_size()
		);
		Ok(table)
	}

	/// Builds a table from words already held in memory.
	pub fn build_from_words<I, S>(words: I, window_size: usize) -> Result<TransitionTable>
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self::build(words.into_iter().collect::<InMemoryCorpusStream>(), window_size)
	}

	fn scan<S: CorpusStream>(stream: &mut S, prefix_size: PrefixSize) -> Result<TransitionTable> {
		let mut table = TransitionTable::new(prefix_size);
		let mut window: VecDeque<String> = VecDeque::with_capacity(prefix_size.get());

		while let Some(word) = stream.next_word() {
			if let Some(prefix) = Self::full_window(&window, prefix_size) {
				table.insert(Transition::new(prefix, Suffix::word(word.as_str())))?;
				window.pop_front();
			}
			window.push_back(word);
		}

		if !stream.consumed() {
			error!("Corpus stream stopped yielding words before being consumed");
			let message = "Could not read next word from corpus, the stream is not consumed yet no word was returned";
			return Err(match stream.take_error() {
				Some(cause) => TextGenError::source_read_with(message, cause),
				None => TextGenError::source_read(message),
			});
		}

		if let Some(prefix) = Self::full_window(&window, prefix_size) {
			table.insert(Transition::new(prefix, Suffix::EndOfText))?;
		}

		Ok(table)
	}

	/// Returns the window contents as a prefix, if the window is full.
	fn full_window(window: &VecDeque<String>, prefix_size: PrefixSize) -> Option<Prefix> {
		if window.len() == prefix_size.get() {
			Some(window.iter().cloned().collect())
		} else {
			None
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::cell::Cell;
	use std::io;
	use std::rc::Rc;

	fn prefix(words: &[&str]) -> Prefix {
		words.iter().copied().collect()
	}

	/// Stream replaying a fixed script and counting `close` calls.
	struct ScriptedStream {
		words: Vec<&'static str>,
		consumed_at_end: bool,
		fail_close: bool,
		closes: Rc<Cell<usize>>,
	}

	impl ScriptedStream {
		fn new(words: Vec<&'static str>, closes: &Rc<Cell<usize>>) -> Self {
			Self { words, consumed_at_end: true, fail_close: false, closes: Rc::clone(closes) }
		}
	}

	impl CorpusStream for ScriptedStream {
		fn next_word(&mut self) -> Option<String> {
			if self.words.is_empty() {
				None
			} else {
				Some(self.words.remove(0).to_owned())
			}
		}

		fn consumed(&self) -> bool {
			self.words.is_empty() && self.consumed_at_end
		}

		fn close(&mut self) -> io::Result<()> {
			self.closes.set(self.closes.get() + 1);
			if self.fail_close {
				Err(io::Error::other("close failed"))
			} else {
				Ok(())
			}
		}
	}

	#[test]
	fn empty_corpus_gives_empty_table() {
		let table = TransitionTableBuilder::build_from_words(Vec::<String>::new(), 2).unwrap();
		assert_eq!(table.count(), 0);
		assert_eq!(table.prefix_count(), 0);
	}

	#[test]
	fn invalid_window_size_is_rejected_and_stream_closed() {
		let closes = Rc::new(Cell::new(0));
		let stream = ScriptedStream::new(vec!["a", "b", "c"], &closes);

		let err = TransitionTableBuilder::build(stream, 1).unwrap_err();
		assert!(matches!(err, TextGenError::InvalidWindowSize(1)));
		assert_eq!(closes.get(), 1);
	}

	#[test]
	fn short_corpus_gives_empty_table() {
		for len in 0..4 {
			let words = ["a", "b", "c"].into_iter().take(len);
			let table = TransitionTableBuilder::build_from_words(words, 4).unwrap();
			assert_eq!(table.count(), 0, "corpus of {len} words");
		}
	}

	#[test]
	fn corpus_of_window_size_gives_end_of_text() {
		let table = TransitionTableBuilder::build_from_words(["a", "b", "c"], 3).unwrap();
		assert_eq!(table.count(), 1);
		assert_eq!(table.suffixes_for(&prefix(&["a", "b", "c"])), [Suffix::EndOfText]);
	}

	#[test]
	fn table_with_two_transitions() {
		// (this, is, a) -> test
		// (is, a, test) -> EOF
		let table = TransitionTableBuilder::build_from_words(["this", "is", "a", "test"], 3).unwrap();
		assert_eq!(table.count(), 2);
		assert_eq!(table.suffixes_for(&prefix(&["this", "is", "a"])), [Suffix::word("test")]);
		assert_eq!(table.suffixes_for(&prefix(&["is", "a", "test"])), [Suffix::EndOfText]);
	}

	#[test]
	fn table_with_three_transitions() {
		let table = TransitionTableBuilder::build_from_words(["this", "is", "a", "test"], 2).unwrap();
		assert_eq!(table.count(), 3);
		assert_eq!(table.prefix_count(), 3);
	}

	#[test]
	fn repeated_prefixes_keep_every_suffix() {
		//   (A, is) -> father
		//   (is, father) -> [of, of]
		//   (father, of) -> [B., C.]
		//   (of, B.) -> B
		//   (B., B) -> is
		//   (B, is) -> father
		//   (of, C.) -> EOF
		let words = ["A", "is", "father", "of", "B.", "B", "is", "father", "of", "C."];
		let table = TransitionTableBuilder::build_from_words(words, 2).unwrap();

		assert_eq!(table.count(), 9);
		assert_eq!(table.prefix_count(), 7);
		assert_eq!(
			table.suffixes_for(&prefix(&["is", "father"])),
			[Suffix::word("of"), Suffix::word("of")]
		);
		assert_eq!(
			table.suffixes_for(&prefix(&["father", "of"])),
			[Suffix::word("B."), Suffix::word("C.")]
		);
		assert_eq!(table.suffixes_for(&prefix(&["of", "C."])), [Suffix::EndOfText]);
	}

	#[test]
	fn unconsumed_stream_is_a_read_error() {
		let closes = Rc::new(Cell::new(0));
		let mut stream = ScriptedStream::new(vec!["a", "b", "c", "d"], &closes);
		stream.consumed_at_end = false;

		let err = TransitionTableBuilder::build(stream, 2).unwrap_err();
		assert!(matches!(err, TextGenError::SourceReadError { source: None, .. }));
		assert_eq!(closes.get(), 1);
	}

	#[test]
	fn close_failure_is_a_read_error() {
		let closes = Rc::new(Cell::new(0));
		let mut stream = ScriptedStream::new(vec!["a", "b", "c"], &closes);
		stream.fail_close = true;

		let err = TransitionTableBuilder::build(stream, 2).unwrap_err();
		match err {
			TextGenError::SourceReadError { source: Some(cause), .. } => {
				assert_eq!(cause.to_string(), "close failed");
			}
			other => panic!("unexpected error: {other:?}"),
		}
		assert_eq!(closes.get(), 1);
	}

	#[test]
	fn successful_build_closes_once() {
		let closes = Rc::new(Cell::new(0));
		let stream = ScriptedStream::new(vec!["a", "b", "c"], &closes);

		TransitionTableBuilder::build(stream, 2).unwrap();
		assert_eq!(closes.get(), 1);
	}
}
