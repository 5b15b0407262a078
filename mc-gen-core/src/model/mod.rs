//! Top-level module for the word-level Markov chain.
//!
//! This module provides:
//! - Value types for prefixes and suffixes (`Prefix`, `PrefixSize`, `Suffix`)
//! - The prefix → suffixes transition table (`TransitionTable`)
//! - The sliding-window table builder (`TransitionTableBuilder`)
//! - The random walk producing text (`RandomTextGenerator`)

/// Random walk over a transition table.
///
/// Exposes the lazy unit-by-unit iterator and the flattening helper.
pub mod generator;

/// Sliding-window construction of a transition table from a corpus stream.
pub mod builder;

/// Multi-valued prefix → suffixes mapping with a fixed prefix size.
pub mod transition_table;

/// Fixed-length word sequences and their validated size.
pub mod prefix;

/// Words following a prefix, and the end-of-text marker.
pub mod suffix;

/// A single (prefix, suffix) observation.
pub mod transition;

pub use builder::TransitionTableBuilder;
pub use generator::{RandomTextGenerator, StartSeed, flatten_units};
pub use prefix::{Prefix, PrefixSize};
pub use suffix::Suffix;
pub use transition::Transition;
pub use transition_table::TransitionTable;
