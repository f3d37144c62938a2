use crate::cmd::util::{emit_json, read_structure};

#[derive(clap::Args)]
pub struct Args {
	pub subset: String,
	pub superset: String,
	#[arg(long)]
	pub json: bool,
}

#[derive(serde::Serialize)]
struct SubsetJson {
	subset: String,
	superset: String,
	is_subset: bool,
	can_intersect: bool,
}

/// Print whether the first structure is a subset of the second.
pub fn run(args: Args) -> capstruct::structure::Result<()> {
	let Args { subset, superset, json } = args;
	let subset = read_structure(&subset)?;
	let superset = read_structure(&superset)?;
	let is_subset = subset.is_subset(&superset);

	if json {
		emit_json(&SubsetJson {
			subset: subset.to_string(),
			superset: superset.to_string(),
			is_subset,
			can_intersect: subset.can_intersect(&superset),
		});
	} else {
		println!("{is_subset}");
	}
	Ok(())
}

#[cfg(test)]
mod tests;
