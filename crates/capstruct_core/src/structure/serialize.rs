use std::fmt::{self, Write as _};

use crate::structure::name::is_name_char;
use crate::structure::{Structure, Value, ValueType};

/// Cast used for collections whose elements do not share one type.
const MIXED_LIST: &str = ValueType::List.abbr();
const MIXED_ARRAY: &str = ValueType::Array.abbr();

impl Value {
	/// Type cast written in front of this value in structure text.
	///
	/// Ranges use their element type and collections the type shared by every element (`int`
	/// when empty). Collections mixing element types use `list` or `array`, and each element then
	/// carries its own cast.
	pub fn type_abbr(&self) -> &'static str {
		match self {
			Value::Opaque(opaque) => opaque.label(),
			Value::List(items) => shared_abbr(items).unwrap_or(MIXED_LIST),
			Value::Array(items) => shared_abbr(items).unwrap_or(MIXED_ARRAY),
			other => other.value_type().abbr(),
		}
	}
}

fn shared_abbr(items: &[Value]) -> Option<&'static str> {
	let Some(first) = items.first() else {
		return Some("int");
	};
	let abbr = first.type_abbr();
	if abbr == MIXED_LIST || abbr == MIXED_ARRAY {
		return None;
	}
	items.iter().skip(1).all(|item| item.type_abbr() == abbr).then_some(abbr)
}

/// Write `text` to `out`, quoting and escaping it when it is not a bare token.
///
/// Printable ASCII outside the token charset is backslash-escaped; control and non-ASCII bytes
/// become three-digit octal escapes. Empty text and the literal `NULL` are always quoted.
pub(crate) fn wrap_string<W: fmt::Write>(text: &str, out: &mut W) -> fmt::Result {
	let bare = !text.is_empty() && text != "NULL" && text.bytes().all(is_name_char);
	if bare {
		return out.write_str(text);
	}

	out.write_char('"')?;
	for byte in text.bytes() {
		if is_name_char(byte) {
			out.write_char(byte as char)?;
		} else if !(0x20..0x7f).contains(&byte) {
			write!(out, "\\{:03o}", byte)?;
		} else {
			out.write_char('\\')?;
			out.write_char(byte as char)?;
		}
	}
	out.write_char('"')
}

fn write_value<W: fmt::Write>(value: &Value, out: &mut W) -> fmt::Result {
	match value {
		Value::Bool(v) => out.write_str(if *v { "true" } else { "false" }),
		Value::Int(v) => write!(out, "{v}"),
		Value::UInt(v) => write!(out, "{v}"),
		Value::Int64(v) => write!(out, "{v}"),
		Value::UInt64(v) => write!(out, "{v}"),
		Value::Double(v) => write_double(*v, out),
		Value::String(None) => out.write_str("NULL"),
		Value::String(Some(text)) => wrap_string(text, out),
		Value::IntRange(range) => write_stepped(range.min(), range.max(), range.step(), out),
		Value::Int64Range(range) => write_stepped(range.min(), range.max(), range.step(), out),
		Value::DoubleRange(range) => {
			out.write_str("[ ")?;
			write_double(range.min(), out)?;
			out.write_str(", ")?;
			write_double(range.max(), out)?;
			out.write_str(" ]")
		}
		Value::List(items) => write_collection(items, shared_abbr(items).is_none(), ('{', '}'), out),
		Value::Array(items) => write_collection(items, shared_abbr(items).is_none(), ('<', '>'), out),
		// Nested text is escaped once more; each extra level of nesting adds another layer.
		Value::Structure(inner) => wrap_string(&inner.to_string(), out),
		Value::Opaque(opaque) => {
			tracing::warn!(label = opaque.label(), "value has no textual form; writing NULL");
			out.write_str("NULL")
		}
	}
}

fn write_stepped<N, W>(min: N, max: N, step: N, out: &mut W) -> fmt::Result
where
	N: fmt::Display + PartialEq + From<i8>,
	W: fmt::Write,
{
	if step == N::from(1) {
		write!(out, "[ {min}, {max} ]")
	} else {
		write!(out, "[ {min}, {max}, {step} ]")
	}
}

fn write_double<W: fmt::Write>(value: f64, out: &mut W) -> fmt::Result {
	// Debug keeps a fractional part so the text re-lexes as a double.
	write!(out, "{value:?}")
}

fn write_collection<W: fmt::Write>(
	items: &[Value],
	cast_each: bool,
	(open, close): (char, char),
	out: &mut W,
) -> fmt::Result {
	out.write_char(open)?;
	out.write_char(' ')?;
	for (idx, item) in items.iter().enumerate() {
		if idx > 0 {
			out.write_str(", ")?;
		}
		if cast_each {
			write!(out, "({})", item.type_abbr())?;
		}
		write_value(item, out)?;
	}
	if !items.is_empty() {
		out.write_char(' ')?;
	}
	out.write_char(close)
}

impl fmt::Display for Value {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write_value(self, f)
	}
}

/// Renders `name, field=(type)value, ...;`.
impl fmt::Display for Structure {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())?;
		for field in self.fields() {
			write!(f, ", {}=({})", field.name(), field.value.type_abbr())?;
			write_value(&field.value, f)?;
		}
		f.write_char(';')
	}
}
