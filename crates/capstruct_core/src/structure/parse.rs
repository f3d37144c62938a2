use std::str::FromStr;

use crate::structure::name::{is_name_char, validate_name};
use crate::structure::store::Field;
use crate::structure::{DoubleRange, Int64Range, IntRange, Quark, Result, Structure, StructureError, Value, ValueType};

impl Structure {
	/// Parse structure text, returning the structure and the byte offset just past it.
	///
	/// The offset points after the `;` terminator, or at the end of `text` when the terminator is
	/// omitted. Later duplicates of a field overwrite earlier ones in place.
	pub fn parse(text: &str) -> Result<(Structure, usize)> {
		let mut cur = Cursor::new(text);
		cur.skip_ws_escaped();

		let start = cur.pos;
		let name = cur.simple_token();
		if name.is_empty() {
			return Err(cur.fail("expected structure name"));
		}
		if validate_name(name).is_err() {
			return Err(cur.fail_at(start, "invalid structure name"));
		}
		let mut out = Structure::new(name)?;

		loop {
			cur.skip_ws_escaped();
			match cur.peek() {
				None => return Ok((out, cur.pos)),
				Some(b';') => return Ok((out, cur.pos + 1)),
				Some(b',') => cur.pos += 1,
				Some(_) => return Err(cur.fail("expected ',' or ';'")),
			}
			cur.skip_ws_escaped();

			let field_start = cur.pos;
			let field_name = cur.simple_token();
			if field_name.is_empty() {
				return Err(cur.fail("expected field name"));
			}
			if validate_name(field_name).is_err() {
				return Err(cur.fail_at(field_start, "invalid field name"));
			}
			cur.skip_ws_escaped();
			if !cur.eat(b'=') {
				return Err(cur.fail("expected '='"));
			}

			let value = cur.value(None)?;
			tracing::trace!(field = field_name, kind = %value.value_type(), "parsed field");
			out.set_field(Field {
				name: Quark::intern(field_name),
				value,
			});
		}
	}
}

impl FromStr for Structure {
	type Err = StructureError;

	fn from_str(text: &str) -> Result<Self> {
		let (out, end) = Structure::parse(text)?;
		let rest = text[end..].trim_start();
		if !rest.is_empty() {
			tracing::warn!(name = out.name(), trailing = rest, "ignoring text after structure terminator");
		}
		Ok(out)
	}
}

/// Raw value token: a bare run of token characters, or a quoted string including its quotes.
struct Token<'a> {
	raw: &'a str,
	quoted: bool,
}

impl Token<'_> {
	/// Quoted content with every backslash dropped and the byte after it kept.
	fn unescaped(&self) -> String {
		if !self.quoted {
			return self.raw.to_owned();
		}
		let inner = &self.raw[1..self.raw.len() - 1];
		let mut out = String::with_capacity(inner.len());
		let mut chars = inner.chars();
		while let Some(ch) = chars.next() {
			if ch == '\\' {
				if let Some(next) = chars.next() {
					out.push(next);
				}
			} else {
				out.push(ch);
			}
		}
		out
	}

	/// Quoted content with `\ooo` octal escapes decoded; `None` on a malformed escape or bad UTF-8.
	fn unwrapped(&self) -> Option<String> {
		if !self.quoted {
			return Some(self.raw.to_owned());
		}
		let inner = self.raw[1..self.raw.len() - 1].as_bytes();
		let mut out = Vec::with_capacity(inner.len());
		let mut idx = 0_usize;
		while idx < inner.len() {
			let byte = inner[idx];
			if byte != b'\\' {
				out.push(byte);
				idx += 1;
				continue;
			}

			let lead = *inner.get(idx + 1)?;
			if (b'0'..=b'3').contains(&lead) {
				let mid = *inner.get(idx + 2)?;
				let low = *inner.get(idx + 3)?;
				if !is_octal(mid) || !is_octal(low) {
					return None;
				}
				out.push(((lead - b'0') << 6) | ((mid - b'0') << 3) | (low - b'0'));
				idx += 4;
			} else {
				out.push(lead);
				idx += 2;
			}
		}
		String::from_utf8(out).ok()
	}
}

fn is_octal(byte: u8) -> bool {
	(b'0'..=b'7').contains(&byte)
}

/// Hand-rolled recursive-descent reader over structure text.
struct Cursor<'a> {
	text: &'a str,
	bytes: &'a [u8],
	pos: usize,
}

impl<'a> Cursor<'a> {
	fn new(text: &'a str) -> Self {
		Self {
			text,
			bytes: text.as_bytes(),
			pos: 0,
		}
	}

	fn peek(&self) -> Option<u8> {
		self.bytes.get(self.pos).copied()
	}

	fn eat(&mut self, byte: u8) -> bool {
		if self.peek() == Some(byte) {
			self.pos += 1;
			true
		} else {
			false
		}
	}

	fn fail(&self, reason: &'static str) -> StructureError {
		self.fail_at(self.pos, reason)
	}

	fn fail_at(&self, at: usize, reason: &'static str) -> StructureError {
		tracing::debug!(at, reason, "structure parse failed");
		StructureError::Parse { at, reason }
	}

	fn skip_ws(&mut self) {
		while self.peek().is_some_and(|byte| byte.is_ascii_whitespace()) {
			self.pos += 1;
		}
	}

	/// Skip whitespace, including backslash-escaped whitespace.
	fn skip_ws_escaped(&mut self) {
		loop {
			match self.peek() {
				Some(byte) if byte.is_ascii_whitespace() => self.pos += 1,
				Some(b'\\') if self.bytes.get(self.pos + 1).is_some_and(|next| next.is_ascii_whitespace()) => self.pos += 2,
				_ => return,
			}
		}
	}

	fn simple_token(&mut self) -> &'a str {
		let start = self.pos;
		while self.peek().is_some_and(is_name_char) {
			self.pos += 1;
		}
		&self.text[start..self.pos]
	}

	fn token(&mut self) -> Result<Token<'a>> {
		if self.peek() != Some(b'"') {
			let raw = self.simple_token();
			if raw.is_empty() {
				return Err(self.fail("expected value"));
			}
			return Ok(Token { raw, quoted: false });
		}

		let start = self.pos;
		self.pos += 1;
		loop {
			match self.peek() {
				None => return Err(self.fail_at(start, "unterminated quoted string")),
				Some(b'"') => break,
				Some(b'\\') => {
					if self.bytes.get(self.pos + 1).is_none() {
						return Err(self.fail_at(start, "unterminated quoted string"));
					}
					self.pos += 2;
				}
				Some(_) => self.pos += 1,
			}
		}
		self.pos += 1;
		Ok(Token {
			raw: &self.text[start..self.pos],
			quoted: true,
		})
	}

	/// One value with an optional `(type)` cast; `default` applies when there is no cast.
	fn value(&mut self, default: Option<ValueType>) -> Result<Value> {
		self.skip_ws();
		let mut kind = default;
		if self.eat(b'(') {
			self.skip_ws();
			let start = self.pos;
			let abbr = self.simple_token();
			if abbr.is_empty() {
				return Err(self.fail("expected type name"));
			}
			self.skip_ws();
			if !self.eat(b')') {
				return Err(self.fail("expected ')'"));
			}
			match ValueType::from_abbr(abbr) {
				Some(cast) => kind = Some(cast),
				None => {
					tracing::warn!(abbr, "unknown type cast");
					return Err(self.fail_at(start, "unknown type name"));
				}
			}
		}

		self.skip_ws();
		let element = match kind {
			Some(ValueType::List | ValueType::Array) => None,
			other => other,
		};
		match self.peek() {
			Some(b'[') => self.range(kind),
			Some(b'{') => self.items(b'}', element).map(Value::List),
			Some(b'<') => self.items(b'>', element).map(Value::Array),
			_ => self.scalar(kind),
		}
	}

	fn items(&mut self, close: u8, kind: Option<ValueType>) -> Result<Vec<Value>> {
		self.pos += 1;
		let mut out = Vec::new();
		self.skip_ws();
		if self.eat(close) {
			return Ok(out);
		}
		loop {
			out.push(self.value(kind)?);
			self.skip_ws();
			if self.eat(close) {
				return Ok(out);
			}
			if !self.eat(b',') {
				return Err(self.fail("expected ',' or closing delimiter"));
			}
		}
	}

	fn range(&mut self, kind: Option<ValueType>) -> Result<Value> {
		let start = self.pos;
		self.pos += 1;
		let lo = self.value(kind)?;
		self.skip_ws();
		if !self.eat(b',') {
			return Err(self.fail("expected ',' in range"));
		}
		let hi = self.value(kind)?;
		self.skip_ws();
		let step = if self.eat(b',') { Some(self.value(kind)?) } else { None };
		self.skip_ws();
		if !self.eat(b']') {
			return Err(self.fail("expected ']'"));
		}

		let built = match (lo, hi, step) {
			(Value::Int(min), Value::Int(max), None) => IntRange::new(min, max).map(Value::from),
			(Value::Int(min), Value::Int(max), Some(Value::Int(step))) => IntRange::with_step(min, max, step).map(Value::from),
			(Value::Int64(min), Value::Int64(max), None) => Int64Range::new(min, max).map(Value::from),
			(Value::Int64(min), Value::Int64(max), Some(Value::Int64(step))) => {
				Int64Range::with_step(min, max, step).map(Value::from)
			}
			(Value::Double(min), Value::Double(max), None) => DoubleRange::new(min, max).map(Value::from),
			_ => return Err(self.fail_at(start, "range bounds must share an int, int64, or double type")),
		};
		built.map_err(|_| self.fail_at(start, "invalid range"))
	}

	fn scalar(&mut self, kind: Option<ValueType>) -> Result<Value> {
		let start = self.pos;
		let token = self.token()?;
		let parsed = match kind {
			None => Some(infer(&token)),
			Some(ValueType::String) => typed_string(&token),
			Some(ValueType::Structure) => Structure::parse(&token.unescaped()).ok().map(|(inner, _)| Value::from(inner)),
			Some(kind) => typed_scalar(kind, &token.unescaped()),
		};
		parsed.ok_or_else(|| self.fail_at(start, "value does not match its type"))
	}
}

/// Untyped tokens try int, double, boolean, then string. Quoted tokens are always strings.
fn infer(token: &Token<'_>) -> Value {
	if token.quoted {
		return match token.unwrapped() {
			Some(text) => Value::from(text),
			None => Value::from(token.unescaped()),
		};
	}

	let text = token.raw;
	if let Some(v) = parse_integer(text).and_then(|wide| i32::try_from(wide).ok()) {
		return Value::Int(v);
	}
	if let Ok(v) = text.parse::<f64>() {
		return Value::Double(v);
	}
	if let Some(v) = parse_bool(text) {
		return Value::Bool(v);
	}
	if text == "NULL" {
		return Value::null_string();
	}
	Value::from(text)
}

fn typed_string(token: &Token<'_>) -> Option<Value> {
	if !token.quoted && token.raw == "NULL" {
		return Some(Value::null_string());
	}
	token.unwrapped().map(Value::from)
}

fn typed_scalar(kind: ValueType, text: &str) -> Option<Value> {
	let value = match kind {
		ValueType::Bool => Value::Bool(parse_bool(text).or_else(|| match text {
			"1" => Some(true),
			"0" => Some(false),
			_ => None,
		})?),
		ValueType::Int => Value::Int(bounded(text, i32::MIN, i32::MAX).or_else(|| {
			i32::try_from(parse_integer(text)?).ok()
		})?),
		ValueType::UInt => Value::UInt(bounded(text, u32::MIN, u32::MAX).or_else(|| {
			u32::try_from(parse_integer(text)?).ok()
		})?),
		ValueType::Int64 => Value::Int64(bounded(text, i64::MIN, i64::MAX).or_else(|| {
			i64::try_from(parse_integer(text)?).ok()
		})?),
		ValueType::UInt64 => Value::UInt64(bounded(text, u64::MIN, u64::MAX).or_else(|| {
			u64::try_from(parse_integer(text)?).ok()
		})?),
		ValueType::Double => Value::Double(bounded(text, f64::MIN, f64::MAX).or_else(|| text.parse().ok())?),
		_ => return None,
	};
	Some(value)
}

/// `min` or `max` in any letter case.
fn bounded<T>(text: &str, min: T, max: T) -> Option<T> {
	if text.eq_ignore_ascii_case("min") {
		Some(min)
	} else if text.eq_ignore_ascii_case("max") {
		Some(max)
	} else {
		None
	}
}

/// Decimal or `0x` hexadecimal integer with an optional sign.
fn parse_integer(text: &str) -> Option<i128> {
	let (negative, digits) = match text.as_bytes().first()? {
		b'-' => (true, &text[1..]),
		b'+' => (false, &text[1..]),
		_ => (false, text),
	};
	let magnitude = match digits.strip_prefix("0x").or_else(|| digits.strip_prefix("0X")) {
		Some(hex) if !hex.is_empty() && hex.bytes().all(|byte| byte.is_ascii_hexdigit()) => i128::from_str_radix(hex, 16).ok()?,
		Some(_) => return None,
		None if !digits.is_empty() && digits.bytes().all(|byte| byte.is_ascii_digit()) => digits.parse::<i128>().ok()?,
		None => return None,
	};
	Some(if negative { -magnitude } else { magnitude })
}

fn parse_bool(text: &str) -> Option<bool> {
	const TRUE: [&str; 3] = ["true", "yes", "t"];
	const FALSE: [&str; 3] = ["false", "no", "f"];
	if TRUE.iter().any(|word| text.eq_ignore_ascii_case(word)) {
		Some(true)
	} else if FALSE.iter().any(|word| text.eq_ignore_ascii_case(word)) {
		Some(false)
	} else {
		None
	}
}
