mod compare;
mod fixate;
mod range;

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use crate::structure::Structure;

pub use compare::ValueOrder;
pub use range::{DoubleRange, Int64Range, IntRange};

/// Dynamically typed field value.
#[derive(Debug, Clone)]
pub enum Value {
	/// Boolean scalar.
	Bool(bool),
	/// Signed 32-bit integer.
	Int(i32),
	/// Unsigned 32-bit integer.
	UInt(u32),
	/// Signed 64-bit integer.
	Int64(i64),
	/// Unsigned 64-bit integer.
	UInt64(u64),
	/// Double-precision float.
	Double(f64),
	/// UTF-8 string; `None` is the null string.
	String(Option<Box<str>>),
	/// Stepped range of 32-bit integers.
	IntRange(IntRange),
	/// Stepped range of 64-bit integers.
	Int64Range(Int64Range),
	/// Closed range of doubles.
	DoubleRange(DoubleRange),
	/// Unordered set of alternatives.
	List(Vec<Value>),
	/// Fixed ordered sequence.
	Array(Vec<Value>),
	/// Nested structure.
	Structure(Box<Structure>),
	/// Handle that cannot be serialized.
	Opaque(Opaque),
}

/// Kind tag of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
	/// [`Value::Bool`].
	Bool,
	/// [`Value::Int`].
	Int,
	/// [`Value::UInt`].
	UInt,
	/// [`Value::Int64`].
	Int64,
	/// [`Value::UInt64`].
	UInt64,
	/// [`Value::Double`].
	Double,
	/// [`Value::String`].
	String,
	/// [`Value::IntRange`].
	IntRange,
	/// [`Value::Int64Range`].
	Int64Range,
	/// [`Value::DoubleRange`].
	DoubleRange,
	/// [`Value::List`].
	List,
	/// [`Value::Array`].
	Array,
	/// [`Value::Structure`].
	Structure,
	/// [`Value::Opaque`].
	Opaque,
}

impl ValueType {
	/// Stable lowercase label used in diagnostics and JSON output.
	pub fn name(self) -> &'static str {
		match self {
			Self::Bool => "boolean",
			Self::Int => "int",
			Self::UInt => "uint",
			Self::Int64 => "int64",
			Self::UInt64 => "uint64",
			Self::Double => "double",
			Self::String => "string",
			Self::IntRange => "int-range",
			Self::Int64Range => "int64-range",
			Self::DoubleRange => "double-range",
			Self::List => "list",
			Self::Array => "array",
			Self::Structure => "structure",
			Self::Opaque => "opaque",
		}
	}

	/// Canonical cast written in structure text; ranges use their element type.
	pub const fn abbr(self) -> &'static str {
		match self {
			Self::Bool => "boolean",
			Self::Int | Self::IntRange => "int",
			Self::UInt => "uint",
			Self::Int64 | Self::Int64Range => "int64",
			Self::UInt64 => "uint64",
			Self::Double | Self::DoubleRange => "double",
			Self::String => "string",
			Self::List => "list",
			Self::Array => "array",
			Self::Structure => "structure",
			Self::Opaque => "pointer",
		}
	}

	/// Resolve a `(typename)` cast, accepting the short aliases.
	pub fn from_abbr(abbr: &str) -> Option<Self> {
		let kind = match abbr {
			"boolean" | "bool" | "b" => Self::Bool,
			"int" | "i" => Self::Int,
			"uint" | "u" => Self::UInt,
			"int64" | "i64" | "gint64" => Self::Int64,
			"uint64" | "u64" | "guint64" => Self::UInt64,
			"double" | "d" | "float" | "f" => Self::Double,
			"string" | "str" | "s" => Self::String,
			"structure" => Self::Structure,
			"list" => Self::List,
			"array" => Self::Array,
			_ => return None,
		};
		Some(kind)
	}
}

impl fmt::Display for ValueType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

/// Shared handle to data with no textual form.
///
/// Opaque values compare equal only to clones of the same handle.
#[derive(Clone)]
pub struct Opaque {
	label: &'static str,
	data: Arc<dyn Any + Send + Sync>,
}

impl Opaque {
	/// Wrap `data` under the `pointer` label.
	pub fn new<T: Any + Send + Sync>(data: T) -> Self {
		Self::labeled("pointer", data)
	}

	/// Wrap `data` under a custom type label used in serialized output.
	pub fn labeled<T: Any + Send + Sync>(label: &'static str, data: T) -> Self {
		Self { label, data: Arc::new(data) }
	}

	/// Type label written in front of the `NULL` placeholder.
	pub fn label(&self) -> &'static str {
		self.label
	}

	/// Borrow the payload as `T`.
	pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
		self.data.downcast_ref::<T>()
	}

	/// Whether both handles share one payload.
	pub fn same_handle(&self, other: &Self) -> bool {
		Arc::ptr_eq(&self.data, &other.data)
	}
}

impl fmt::Debug for Opaque {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Opaque({}@{:p})", self.label, Arc::as_ptr(&self.data))
	}
}

impl Value {
	/// The null string.
	pub fn null_string() -> Self {
		Self::String(None)
	}

	/// Build a list of alternatives.
	pub fn list<I, V>(items: I) -> Self
	where
		I: IntoIterator<Item = V>,
		V: Into<Value>,
	{
		Self::List(items.into_iter().map(Into::into).collect())
	}

	/// Build a fixed array.
	pub fn array<I, V>(items: I) -> Self
	where
		I: IntoIterator<Item = V>,
		V: Into<Value>,
	{
		Self::Array(items.into_iter().map(Into::into).collect())
	}

	/// Kind tag.
	pub fn value_type(&self) -> ValueType {
		match self {
			Self::Bool(_) => ValueType::Bool,
			Self::Int(_) => ValueType::Int,
			Self::UInt(_) => ValueType::UInt,
			Self::Int64(_) => ValueType::Int64,
			Self::UInt64(_) => ValueType::UInt64,
			Self::Double(_) => ValueType::Double,
			Self::String(_) => ValueType::String,
			Self::IntRange(_) => ValueType::IntRange,
			Self::Int64Range(_) => ValueType::Int64Range,
			Self::DoubleRange(_) => ValueType::DoubleRange,
			Self::List(_) => ValueType::List,
			Self::Array(_) => ValueType::Array,
			Self::Structure(_) => ValueType::Structure,
			Self::Opaque(_) => ValueType::Opaque,
		}
	}

	/// Whether the value denotes exactly one concrete value.
	pub fn is_fixed(&self) -> bool {
		match self {
			Self::IntRange(_) | Self::Int64Range(_) | Self::DoubleRange(_) | Self::List(_) => false,
			Self::Array(items) => items.iter().all(Value::is_fixed),
			Self::Structure(inner) => inner.is_fixed(),
			_ => true,
		}
	}

	/// String payload, if this is a non-null string.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Self::String(Some(text)) => Some(text),
			_ => None,
		}
	}
}

impl PartialEq for Value {
	fn eq(&self, other: &Self) -> bool {
		self.compare(other) == ValueOrder::Equal
	}
}

impl From<bool> for Value {
	fn from(value: bool) -> Self {
		Self::Bool(value)
	}
}

impl From<i32> for Value {
	fn from(value: i32) -> Self {
		Self::Int(value)
	}
}

impl From<u32> for Value {
	fn from(value: u32) -> Self {
		Self::UInt(value)
	}
}

impl From<i64> for Value {
	fn from(value: i64) -> Self {
		Self::Int64(value)
	}
}

impl From<u64> for Value {
	fn from(value: u64) -> Self {
		Self::UInt64(value)
	}
}

impl From<f64> for Value {
	fn from(value: f64) -> Self {
		Self::Double(value)
	}
}

impl From<&str> for Value {
	fn from(value: &str) -> Self {
		Self::String(Some(value.into()))
	}
}

impl From<String> for Value {
	fn from(value: String) -> Self {
		Self::String(Some(value.into_boxed_str()))
	}
}

impl From<Option<&str>> for Value {
	fn from(value: Option<&str>) -> Self {
		Self::String(value.map(Into::into))
	}
}

impl From<IntRange> for Value {
	fn from(value: IntRange) -> Self {
		Self::IntRange(value)
	}
}

impl From<Int64Range> for Value {
	fn from(value: Int64Range) -> Self {
		Self::Int64Range(value)
	}
}

impl From<DoubleRange> for Value {
	fn from(value: DoubleRange) -> Self {
		Self::DoubleRange(value)
	}
}

impl From<Structure> for Value {
	fn from(value: Structure) -> Self {
		Self::Structure(Box::new(value))
	}
}

impl From<Opaque> for Value {
	fn from(value: Opaque) -> Self {
		Self::Opaque(value)
	}
}
