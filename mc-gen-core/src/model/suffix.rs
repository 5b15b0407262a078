/// A word that followed a prefix in the corpus, or the end of the corpus.
///
/// The end marker is a variant of its own rather than a reserved string,
/// so no input word can ever be mistaken for it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Suffix {
	Word(String),
	EndOfText,
}

impl Suffix {
	pub fn word(word: impl Into<String>) -> Self {
		Self::Word(word.into())
	}

	/// Text emitted for this suffix during a walk.
	///
	/// The end marker renders as an empty string.
	pub fn as_text(&self) -> &str {
		match self {
			Self::Word(word) => word,
			Self::EndOfText => "",
		}
	}
}
