use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use mc_gen_core::corpus::{ExtraSpacesHandling, FileCorpusStream};
use mc_gen_core::model::{flatten_units, RandomTextGenerator, TransitionTableBuilder};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Generates random text from a local corpus file
#[derive(Debug, Parser)]
#[command(name = "mc-gen-exemple")]
struct Args {
	/// Corpus text file
	#[arg(short, long, default_value = "./data/corpus.txt")]
	file: PathBuf,

	/// Number of words in a prefix (must be greater than 1)
	#[arg(short, long, default_value = "2")]
	prefix_size: usize,

	/// Seed for reproducible output (random if missing)
	#[arg(short, long)]
	seed: Option<u64>,

	/// Treat runs of 3+ spaces as words instead of separators
	#[arg(long)]
	keep_extra_spaces: bool,

	/// Maximum number of text units to produce
	#[arg(long, default_value = "500")]
	max_units: usize,

	/// Print one generated unit per line instead of the flattened text
	#[arg(long)]
	units: bool,
}

fn main() -> Result<()> {
	env_logger::init();
	let args = Args::parse();

	// 'IgnoreExtraSpaces' collapses whitespace runs,
	// 'SpacesAsWords' keeps long runs as words of their own
	let handling = if args.keep_extra_spaces {
		ExtraSpacesHandling::SpacesAsWords
	} else {
		ExtraSpacesHandling::IgnoreExtraSpaces
	};

	// The stream is closed by the builder, whatever happens
	let stream = FileCorpusStream::open(&args.file, handling)
		.with_context(|| format!("Failed to open corpus {}", args.file.display()))?;
	let table = TransitionTableBuilder::build(stream, args.prefix_size)?;
	info!("{} transitions, {} distinct prefixes", table.count(), table.prefix_count());

	// A corpus shorter than the prefix size gives an empty table,
	// and so an empty text
	if table.is_empty() {
		println!("Corpus too short for a prefix size of {}", args.prefix_size);
		return Ok(());
	}

	let rng = match args.seed {
		Some(seed) => StdRng::seed_from_u64(seed),
		None => StdRng::from_os_rng(),
	};
	let generator = RandomTextGenerator::new(&table, rng).with_max_units(args.max_units);

	if args.units {
		// Lazy, unit by unit
		for (i, unit) in generator.enumerate() {
			println!("{}: {:?}", i + 1, unit);
		}
	} else {
		println!("{}", flatten_units(generator));
	}

	Ok(())
}
