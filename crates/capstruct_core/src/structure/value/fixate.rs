use super::Value;

impl Value {
	/// Canonical concrete representative of a non-fixed value.
	///
	/// Ranges pick their minimum and lists their first alternative. Returns `None` when the
	/// value is already fixed or is an empty list.
	pub fn fixate(&self) -> Option<Value> {
		match self {
			Value::IntRange(range) => Some(Value::Int(range.min())),
			Value::Int64Range(range) => Some(Value::Int64(range.min())),
			Value::DoubleRange(range) => Some(Value::Double(range.min())),
			Value::List(items) => {
				let first = items.first()?;
				Some(first.fixate().unwrap_or_else(|| first.clone()))
			}
			Value::Array(items) => {
				if items.iter().all(Value::is_fixed) {
					return None;
				}
				Some(Value::Array(items.iter().map(|item| item.fixate().unwrap_or_else(|| item.clone())).collect()))
			}
			Value::Structure(inner) => {
				if inner.is_fixed() {
					return None;
				}
				let mut kid = inner.copy();
				kid.fixate_owned();
				Some(Value::from(kid))
			}
			_ => None,
		}
	}
}
