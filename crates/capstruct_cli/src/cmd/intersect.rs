use crate::cmd::util::{print_structure, read_structure};

#[derive(clap::Args)]
pub struct Args {
	pub left: String,
	pub right: String,
	#[arg(long)]
	pub json: bool,
}

/// Print the field-wise intersection of two structures.
pub fn run(args: Args) -> capstruct::structure::Result<()> {
	let Args { left, right, json } = args;
	let left = read_structure(&left)?;
	let right = read_structure(&right)?;
	let both = left.intersect(&right)?;
	print_structure(&both, json);
	Ok(())
}
