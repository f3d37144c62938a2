use capstruct::structure::{Result, Structure};

/// JSON view of one structure.
#[derive(serde::Serialize)]
pub(crate) struct StructureJson {
	name: String,
	fixed: bool,
	fields: Vec<FieldJson>,
}

#[derive(serde::Serialize)]
struct FieldJson {
	name: String,
	#[serde(rename = "type")]
	kind: String,
	cast: String,
	value: String,
}

impl From<&Structure> for StructureJson {
	fn from(structure: &Structure) -> Self {
		Self {
			name: structure.name().to_owned(),
			fixed: structure.is_fixed(),
			fields: structure
				.iter()
				.map(|(name, value)| FieldJson {
					name: name.to_owned(),
					kind: value.value_type().name().to_owned(),
					cast: value.type_abbr().to_owned(),
					value: value.to_string(),
				})
				.collect(),
		}
	}
}

/// Parse command-line structure text; trailing text after the terminator is logged and ignored.
pub(crate) fn read_structure(text: &str) -> Result<Structure> {
	text.parse()
}

/// Print a structure as canonical text or as JSON.
pub(crate) fn print_structure(structure: &Structure, json: bool) {
	if json {
		emit_json(&StructureJson::from(structure));
	} else {
		println!("{structure}");
	}
}

/// Write `payload` to stdout as pretty JSON.
pub(crate) fn emit_json<T: serde::Serialize>(payload: &T) {
	match serde_json::to_string_pretty(payload) {
		Ok(text) => println!("{text}"),
		Err(err) => eprintln!("error: failed to encode json: {err}"),
	}
}
