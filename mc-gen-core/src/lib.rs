//! Word-level Markov chain text generation library.
//!
//! This crate provides:
//! - Corpus streams reading words from memory, files or uploads
//! - A fixed-order prefix → suffixes transition table built with a sliding window
//! - A random walk over the table emitting locally-coherent text
//!
//! The table is built once, then only read, so one table can serve any
//! number of concurrent walks.

/// Transition table, builder and random walk.
pub mod model;

/// Word sources and tokenization.
pub mod corpus;

/// Error type shared by the builder and the table.
pub mod error;

/// I/O utilities (file opening, line reading).
///
/// Not exposed
pub(crate) mod io;

pub use error::{Result, TextGenError};
