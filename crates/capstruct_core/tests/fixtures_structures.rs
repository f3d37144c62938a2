#![allow(missing_docs)]

use capstruct::structure::Structure;
use capstruct_testkit::{fixture_lines, init_tracing};

fn fixtures() -> Vec<(String, Structure)> {
	init_tracing();
	fixture_lines("structures.txt")
		.into_iter()
		.map(|line| {
			let parsed = line.parse::<Structure>().unwrap_or_else(|err| panic!("{line}: {err}"));
			(line, parsed)
		})
		.collect()
}

#[test]
fn fixture_lines_reserialize_verbatim() {
	for (line, parsed) in fixtures() {
		assert_eq!(parsed.to_string(), line);
	}
}

#[test]
fn fixture_round_trip_is_equal() {
	for (line, parsed) in fixtures() {
		let (back, end) = Structure::parse(&parsed.to_string()).unwrap_or_else(|err| panic!("{line}: {err}"));
		assert_eq!(end, line.len());
		assert!(back.is_equal(&parsed), "{line}");
	}
}

#[test]
fn copies_are_equal_and_independent() {
	for (line, parsed) in fixtures() {
		let mut copy = parsed.clone();
		assert!(copy.is_equal(&parsed), "{line}");
		copy.set_value("copy-marker", true).expect("copies are mutable");
		assert!(!parsed.has_field("copy-marker"), "{line}");
		assert!(!copy.is_equal(&parsed), "{line}");
	}
}

#[test]
fn subset_is_reflexive() {
	for (line, parsed) in fixtures() {
		assert!(parsed.is_subset(&parsed), "{line}");
	}
}

#[test]
fn self_intersection_is_identity() {
	for (line, parsed) in fixtures() {
		assert!(parsed.can_intersect(&parsed), "{line}");
		let both = parsed.intersect(&parsed).unwrap_or_else(|err| panic!("{line}: {err}"));
		assert!(both.is_equal(&parsed), "{line}");
	}
}

#[test]
fn full_fixation_yields_fixed_structures_that_stay_subsets() {
	for (line, parsed) in fixtures() {
		let mut fixed = parsed.clone();
		fixed.fixate().expect("copies are mutable");
		assert!(fixed.is_fixed(), "{line}");
		assert!(fixed.is_subset(&parsed), "{line} -> {fixed}");
	}
}

#[test]
fn set_field_overwrite_keeps_positions() {
	for (line, parsed) in fixtures() {
		let mut s = parsed.clone();
		let before: Vec<_> = s.iter().map(|(name, _)| name).collect();
		for name in &before {
			s.set_value(name, 0).expect("copies are mutable");
		}
		let after: Vec<_> = s.iter().map(|(name, _)| name).collect();
		assert_eq!(after, before, "{line}");
	}
}
