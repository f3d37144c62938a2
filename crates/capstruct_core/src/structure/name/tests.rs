use super::{is_name_char, validate_name};
use crate::structure::StructureError;

#[test]
fn media_type_names_are_valid() {
	for name in ["video/x-raw", "a-structure", "caps", "application/x-rtp+xml", "a.b:c_d"] {
		assert!(validate_name(name).is_ok(), "{name} should be valid");
	}
}

#[test]
fn leading_non_letter_is_rejected() {
	let err = validate_name("1abc").expect_err("digit first");
	assert_eq!(
		err,
		StructureError::InvalidName {
			name: "1abc".into(),
			offset: 0
		}
	);
}

#[test]
fn bad_offset_points_at_first_invalid_byte() {
	let err = validate_name("ab cd").expect_err("space inside");
	assert!(matches!(err, StructureError::InvalidName { offset: 2, .. }));
}

#[test]
fn empty_name_is_rejected() {
	assert!(validate_name("").is_err());
}

#[test]
fn delimiters_are_not_name_chars() {
	for byte in [b',', b';', b'=', b' ', b'"', b'(', b'{', b'<', b'['] {
		assert!(!is_name_char(byte));
	}
}
