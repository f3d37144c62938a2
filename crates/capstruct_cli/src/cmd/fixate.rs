use capstruct::structure::{Result, Structure, StructureError, Value, ValueType};

use crate::cmd::util::{print_structure, read_structure};

#[derive(clap::Args)]
pub struct Args {
	pub text: String,
	#[arg(long)]
	pub field: Option<String>,
	#[arg(long, requires = "field", allow_hyphen_values = true)]
	pub target: Option<String>,
	#[arg(long)]
	pub json: bool,
}

/// Fixate one field (optionally toward a target) or the whole structure, then print it.
pub fn run(args: Args) -> Result<()> {
	let Args { text, field, target, json } = args;
	let mut structure = read_structure(&text)?;

	match (field, target) {
		(Some(field), Some(target)) => {
			let changed = fixate_toward(&mut structure, &field, &target)?;
			tracing::debug!(field = %field, changed, "fixated toward target");
		}
		(Some(field), None) => {
			let changed = structure.fixate_field(&field)?;
			tracing::debug!(field = %field, changed, "fixated field");
		}
		(None, _) => structure.fixate()?,
	}

	print_structure(&structure, json);
	Ok(())
}

/// Dispatch to the typed fixation matching the field's element kind.
fn fixate_toward(structure: &mut Structure, field: &str, target: &str) -> Result<bool> {
	let kind = match structure.get(field) {
		Some(Value::List(items)) => items.first().map(Value::value_type),
		Some(value) => Some(value.value_type()),
		None => return Err(StructureError::FieldNotFound { field: field.to_owned() }),
	};

	match kind {
		Some(ValueType::Int | ValueType::IntRange) => structure.fixate_field_nearest_int(field, parse_target(target, "target is not an int")?),
		Some(ValueType::Int64 | ValueType::Int64Range) => {
			structure.fixate_field_nearest_int64(field, parse_target(target, "target is not an int64")?)
		}
		Some(ValueType::Double | ValueType::DoubleRange) => {
			structure.fixate_field_nearest_double(field, parse_target(target, "target is not a double")?)
		}
		Some(ValueType::Bool) => structure.fixate_field_boolean(field, parse_target(target, "target is not a boolean")?),
		Some(ValueType::String) => structure.fixate_field_string(field, target),
		_ => structure.fixate_field(field),
	}
}

fn parse_target<T: std::str::FromStr>(target: &str, reason: &'static str) -> Result<T> {
	target.parse().map_err(|_| StructureError::Parse { at: 0, reason })
}
