#![allow(missing_docs)]

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd;

#[derive(Parser)]
#[command(name = "capstruct", about = "Structure text inspection tools")]
struct Cli {
	/// Log at debug level unless `RUST_LOG` says otherwise.
	#[arg(long, short, global = true)]
	verbose: bool,
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Parse a structure and print its canonical text.
	Parse(cmd::parse::Args),
	/// Intersect two structures.
	Intersect(cmd::intersect::Args),
	/// Check whether one structure is a subset of another.
	Subset(cmd::subset::Args),
	/// Fixate one field, or every field, of a structure.
	Fixate(cmd::fixate::Args),
}

fn main() {
	let cli = Cli::parse();
	init_tracing(cli.verbose);

	if let Err(err) = run(cli.command) {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn init_tracing(verbose: bool) {
	let fallback = if verbose { "debug" } else { "warn" };
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
	tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn run(command: Commands) -> capstruct::structure::Result<()> {
	match command {
		Commands::Parse(args) => cmd::parse::run(args),
		Commands::Intersect(args) => cmd::intersect::run(args),
		Commands::Subset(args) => cmd::subset::run(args),
		Commands::Fixate(args) => cmd::fixate::run(args),
	}
}
