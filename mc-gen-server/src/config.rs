use clap::Parser;

/// Configuration for the random text server
#[derive(Debug, Clone, Parser)]
#[command(name = "mc-gen-server")]
#[command(about = "REST server generating random text from uploaded corpora")]
pub struct Config {
	/// Address to bind
	#[arg(long, default_value = "127.0.0.1")]
	pub host: String,

	/// Port to listen on
	#[arg(short, long, default_value = "5000")]
	pub port: u16,

	/// Number of HTTP workers (default: number of CPUs)
	#[arg(short, long, default_value_t = num_cpus::get())]
	pub workers: usize,

	/// Maximum number of text units produced by a single generation
	#[arg(long, default_value = "10000")]
	pub max_units: usize,

	/// Maximum accepted corpus size, in bytes
	#[arg(long, default_value = "10485760")]
	pub max_upload_bytes: usize,

	/// Allow cross-origin requests from any origin
	#[arg(long)]
	pub cors: bool,

	/// Log level (trace, debug, info, warn, error)
	#[arg(long, default_value = "info")]
	pub log_level: String,
}

/// Generation limits shared with the request handlers.
#[derive(Debug, Clone, Copy)]
pub struct Limits {
	pub max_units: usize,
}

impl From<&Config> for Limits {
	fn from(config: &Config) -> Self {
		Self { max_units: config.max_units }
	}
}
