use std::collections::VecDeque;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use log::warn;

use super::CorpusStream;
use super::tokenizer::{ExtraSpacesHandling, split_words};
use crate::io::{open_buffered, read_line};

/// Corpus stream reading lines from any buffered reader.
///
/// Each line is split with [`split_words`] when its first word is
/// requested, so the whole input is never held in memory.
///
/// # Notes
/// - End of input marks the stream as consumed.
/// - A read failure is logged and reported as `None` without marking the
///   stream as consumed, which the builder turns into a `SourceReadError`
///   carrying the I/O error from [`CorpusStream::take_error`].
#[derive(Debug)]
pub struct FileCorpusStream<R> {
	reader: Option<R>,
	handling: ExtraSpacesHandling,
	consumed: bool,
	current_line: VecDeque<String>,
	error: Option<io::Error>,
}

impl FileCorpusStream<BufReader<File>> {
	/// Opens a text file as a corpus.
	///
	/// # Errors
	/// Returns an error if the file cannot be opened.
	pub fn open<P: AsRef<Path>>(path: P, handling: ExtraSpacesHandling) -> io::Result<Self> {
		Ok(Self::from_reader(open_buffered(path)?, handling))
	}
}

impl<R: BufRead> FileCorpusStream<R> {
	pub fn from_reader(reader: R, handling: ExtraSpacesHandling) -> Self {
		Self { reader: Some(reader), handling, consumed: false, current_line: VecDeque::new(), error: None }
	}
}

impl<R: BufRead> CorpusStream for FileCorpusStream<R> {
	fn next_word(&mut self) -> Option<String> {
		if self.current_line.is_empty() {
			let reader = self.reader.as_mut()?;
			match read_line(reader) {
				Ok(Some(line)) => self.current_line.extend(split_words(&line, self.handling)),
				Ok(None) => {
					self.consumed = true;
					return None;
				}
				Err(e) => {
					warn!("Could not read the next line from the corpus: {e}");
					self.error = Some(e);
					return None;
				}
			}
		}

		self.current_line.pop_front()
	}

	fn consumed(&self) -> bool {
		self.consumed
	}

	/// Drops the reader; further reads return `None`.
	fn close(&mut self) -> io::Result<()> {
		self.reader = None;
		self.current_line.clear();
		Ok(())
	}

	fn take_error(&mut self) -> Option<io::Error> {
		self.error.take()
	}
}
