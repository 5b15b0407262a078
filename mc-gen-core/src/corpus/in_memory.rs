use std::io;

use super::CorpusStream;

/// Corpus stream over a list of words already held in memory.
#[derive(Debug, Default)]
pub struct InMemoryCorpusStream {
	words: Vec<String>,
	position: usize,
}

impl InMemoryCorpusStream {
	pub fn new(words: Vec<String>) -> Self {
		Self { words, position: 0 }
	}
}

impl From<Vec<&str>> for InMemoryCorpusStream {
	fn from(words: Vec<&str>) -> Self {
		words.into_iter().collect()
	}
}

impl<S: Into<String>> FromIterator<S> for InMemoryCorpusStream {
	fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
		Self::new(iter.into_iter().map(Into::into).collect())
	}
}

impl CorpusStream for InMemoryCorpusStream {
	fn next_word(&mut self) -> Option<String> {
		let word = self.words.get(self.position)?.clone();
		self.position += 1;
		Some(word)
	}

	fn consumed(&self) -> bool {
		self.position >= self.words.len()
	}

	/// Forgets the words; the stream then reports itself consumed.
	fn close(&mut self) -> io::Result<()> {
		self.words.clear();
		self.position = 0;
		Ok(())
	}
}
