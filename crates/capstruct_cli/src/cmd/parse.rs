use crate::cmd::util::{print_structure, read_structure};

#[derive(clap::Args)]
pub struct Args {
	pub text: String,
	#[arg(long)]
	pub json: bool,
}

/// Parse structure text and print its canonical serialization.
pub fn run(args: Args) -> capstruct::structure::Result<()> {
	let Args { text, json } = args;
	let structure = read_structure(&text)?;
	print_structure(&structure, json);
	Ok(())
}

#[cfg(test)]
mod tests;
