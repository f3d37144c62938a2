use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, StructureError>;

/// Errors produced while building, mutating, combining, and parsing structures.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StructureError {
	/// Structure or field name violates the name charset.
	#[error("invalid name {name:?}: bad character at offset {offset}")]
	InvalidName {
		/// Offending name.
		name: String,
		/// Byte offset of the first bad character.
		offset: usize,
	},
	/// Mutation attempted while the parent refcount is shared.
	#[error("structure is not mutable (parent refcount is shared)")]
	NotMutable,
	/// Requested field is not present.
	#[error("field not found: {field}")]
	FieldNotFound {
		/// Requested field name.
		field: String,
	},
	/// Typed getter called on a field of another kind.
	#[error("type mismatch on field {field}: expected {expected}, got {got}")]
	TypeMismatch {
		/// Field name.
		field: String,
		/// Requested value kind.
		expected: &'static str,
		/// Actual value kind.
		got: &'static str,
	},
	/// Malformed structure text.
	#[error("parse error at byte {at}: {reason}")]
	Parse {
		/// Byte offset into the input where parsing failed.
		at: usize,
		/// Short description of what was expected.
		reason: &'static str,
	},
	/// Set operation between structures with different names.
	#[error("structure names differ: {left} vs {right}")]
	NameMismatch {
		/// Name of the left operand.
		left: String,
		/// Name of the right operand.
		right: String,
	},
	/// Shared field values admit no common value.
	#[error("field {field} values do not intersect")]
	NotIntersectable {
		/// Field whose values failed to intersect.
		field: String,
	},
	/// Range bounds or step are unusable.
	#[error("invalid range [{min}, {max}, step {step}]")]
	InvalidRange {
		/// Rendered lower bound.
		min: String,
		/// Rendered upper bound.
		max: String,
		/// Rendered step.
		step: String,
	},
	/// Parent refcount is already attached.
	#[error("structure already has a parent refcount")]
	GuardAlreadySet,
	/// Parent refcount clear requested on a structure without one.
	#[error("structure has no parent refcount to clear")]
	GuardNotSet,
}
