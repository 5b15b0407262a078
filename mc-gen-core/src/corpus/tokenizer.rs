/// How runs of whitespace inside a line are turned into words.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExtraSpacesHandling {
	/// Any run of whitespace separates two words and is dropped.
	#[default]
	IgnoreExtraSpaces,
	/// A run of three or more whitespace characters becomes a word of its
	/// own, made of the run minus its first and last characters. Shorter
	/// runs only separate words.
	SpacesAsWords,
}

/// Splits one line (without its line terminator) into words.
///
/// The last word of the line is whatever remains once the line is read,
/// with `\n` appended. An empty line, or one ending in whitespace in
/// `IgnoreExtraSpaces` mode, therefore ends with a bare `"\n"` word.
///
/// # Examples
/// - `"1    2    3"` → `["1", "2", "3\n"]`
/// - `" 1     3    5"` with `SpacesAsWords` → `["1", "   ", "3", "  ", "5\n"]`
pub fn split_words(line: &str, handling: ExtraSpacesHandling) -> Vec<String> {
	let mut words = Vec::new();
	let mut buffer = String::with_capacity(line.len() + 1);

	match handling {
		ExtraSpacesHandling::IgnoreExtraSpaces => {
			for c in line.chars() {
				if is_separator(c) {
					if !buffer.is_empty() {
						words.push(std::mem::take(&mut buffer));
					}
				} else {
					buffer.push(c);
				}
			}
		}
		ExtraSpacesHandling::SpacesAsWords => {
			let mut in_spaces = false;
			for c in line.chars() {
				if is_separator(c) {
					// Flush the word preceding the run
					if !in_spaces && !buffer.is_empty() {
						words.push(std::mem::take(&mut buffer));
					}
					in_spaces = true;
					buffer.push(c);
				} else {
					if in_spaces {
						let run: Vec<char> = buffer.chars().collect();
						if run.len() > 2 {
							words.push(run[1..run.len() - 1].iter().collect());
						}
						buffer.clear();
					}
					in_spaces = false;
					buffer.push(c);
				}
			}
		}
	}

	buffer.push('\n');
	words.push(buffer);
	words
}

/// Whitespace that separates words.
///
/// Non-breaking spaces (U+00A0, U+2007, U+202F) and NEL (U+0085) stay inside
/// words; the information separators U+001C..=U+001F split them.
fn is_separator(c: char) -> bool {
	match c {
		'\u{00A0}' | '\u{2007}' | '\u{202F}' | '\u{0085}' => false,
		'\u{001C}'..='\u{001F}' => true,
		_ => c.is_whitespace(),
	}
}
