use crate::cmd::test_support::{run_capstruct_json, run_capstruct_stdout};

#[test]
fn subset_prints_plain_boolean() {
	let out = run_capstruct_stdout(&["subset", "caps, width=(int)480, extra=true", "caps, width=(int)[320, 640]"]);
	assert_eq!(out.trim_end(), "true");

	let out = run_capstruct_stdout(&["subset", "caps, width=(int)[320, 640]", "caps, width=(int)480"]);
	assert_eq!(out.trim_end(), "false");
}

#[test]
fn subset_json_includes_intersection_check() {
	let json = run_capstruct_json(&["subset", "caps, width=(int)100", "caps, width=(int)[320, 640]", "--json"]);
	assert_eq!(json["is_subset"], false);
	assert_eq!(json["can_intersect"], false);
	assert_eq!(json["superset"], "caps, width=(int)[ 320, 640 ];");
}
