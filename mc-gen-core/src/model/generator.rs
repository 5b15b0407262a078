use log::debug;
use rand::Rng;
use rand::seq::IndexedRandom;

use super::prefix::Prefix;
use super::suffix::Suffix;
use super::transition_table::TransitionTable;

/// Strategy used to select the prefix a walk starts from.
///
/// # Variants
/// - `Random`: pick one of the table's prefixes uniformly.
/// - `Custom(Prefix)`: start from the given prefix. A prefix unknown to the
///   table produces an empty walk.
#[derive(Clone, Debug, PartialEq)]
pub enum StartSeed {
	Random,
	Custom(Prefix),
}

/// Random walk over a [`TransitionTable`], yielding text units.
///
/// # Behavior
/// - The first unit is the whole starting prefix, words joined by a space.
/// - Each following unit is the word chosen at that step, or an empty
///   string when the end of text is chosen.
/// - The walk stops on a prefix without suffixes, after the end of text,
///   or after `max_units` units if a limit was set.
///
/// The suffix consumed by the first step is never emitted: the first unit
/// already covers the prefix, and the next unit is the suffix of the
/// rotated prefix.
///
/// # Notes
/// - Randomness comes only from `rng`; with a seeded generator and the same
///   table the output is reproducible.
/// - The table is only borrowed, so any number of walks can share it.
/// - Once finished, the iterator keeps returning `None`.
pub struct RandomTextGenerator<'a, R> {
	table: &'a TransitionTable,
	rng: R,
	current: Option<Prefix>,
	started: bool,
	emitted: usize,
	max_units: Option<usize>,
}

impl<'a, R: Rng> RandomTextGenerator<'a, R> {
	/// Starts a walk from a random prefix of `table`.
	pub fn new(table: &'a TransitionTable, rng: R) -> Self {
		Self::from_seed(table, StartSeed::Random, rng)
	}

	/// Starts a walk according to `seed`.
	pub fn from_seed(table: &'a TransitionTable, seed: StartSeed, mut rng: R) -> Self {
		let current = match seed {
			StartSeed::Random if table.prefix_count() == 0 => None,
			StartSeed::Random => {
				let index = rng.random_range(0..table.prefix_count());
				table.prefix_at(index).cloned()
			}
			StartSeed::Custom(prefix) => Some(prefix),
		};

		if let Some(prefix) = &current {
			debug!("Starting random walk from ({})", prefix.words().join(", "));
		}

		Self { table, rng, current, started: false, emitted: 0, max_units: None }
	}

	/// Stops the walk after `max_units` units.
	///
	/// Cyclic tables never reach the end of text on their own; services
	/// should always bound the walk.
	pub fn with_max_units(mut self, max_units: usize) -> Self {
		self.max_units = Some(max_units);
		self
	}

	/// Runs the walk to its end and flattens it (see [`flatten_units`]).
	pub fn into_text(self) -> String {
		flatten_units(self)
	}
}

impl<R: Rng> Iterator for RandomTextGenerator<'_, R> {
	type Item = String;

	fn next(&mut self) -> Option<String> {
		if self.max_units.is_some_and(|max| self.emitted >= max) {
			self.current = None;
			return None;
		}

		let prefix = self.current.take()?;
		let suffix = self.table.suffixes_for(&prefix).choose(&mut self.rng)?;

		let unit = if self.started {
			suffix.as_text().to_owned()
		} else {
			self.started = true;
			prefix.to_string()
		};

		// The end of text is never rotated into a prefix
		if let Suffix::Word(word) = suffix {
			self.current = Some(prefix.rotate(word));
		}

		self.emitted += 1;
		Some(unit)
	}
}

impl<R: Rng> std::iter::FusedIterator for RandomTextGenerator<'_, R> {}

/// Concatenates text units into plain text.
///
/// Every unit not already ending with `\n` is followed by a single space.
pub fn flatten_units<I, S>(units: I) -> String
where
	I: IntoIterator<Item = S>,
	S: AsRef<str>,
{
	let mut text = String::new();
	for unit in units {
		let unit = unit.as_ref();
		text.push_str(unit);
		if !unit.ends_with('\n') {
			text.push(' ');
		}
	}
	text
}
