use crate::cmd::test_support::{run_capstruct, run_capstruct_json, run_capstruct_stdout};

#[test]
fn parse_prints_canonical_text() {
	let out = run_capstruct_stdout(&["parse", "a-structure,x=1 , y=(string)hi"]);
	assert_eq!(out.trim_end(), "a-structure, x=(int)1, y=(string)hi;");
}

#[test]
fn parse_json_lists_fields_in_order() {
	let json = run_capstruct_json(&["parse", "caps, width=(int)[320, 640], format=(string){ I420, NV12 }", "--json"]);

	assert_eq!(json["name"], "caps");
	assert_eq!(json["fixed"], false);
	let fields = json["fields"].as_array().expect("fields array");
	assert_eq!(fields.len(), 2);
	assert_eq!(fields[0]["name"], "width");
	assert_eq!(fields[0]["type"], "int-range");
	assert_eq!(fields[0]["cast"], "int");
	assert_eq!(fields[0]["value"], "[ 320, 640 ]");
	assert_eq!(fields[1]["type"], "list");
	assert_eq!(fields[1]["cast"], "string");
}

#[test]
fn parse_failure_exits_nonzero() {
	let output = run_capstruct(&["parse", "a, x=(int)"]);
	assert!(!output.status.success());
	assert!(String::from_utf8_lossy(&output.stderr).contains("error: parse error"));
}
