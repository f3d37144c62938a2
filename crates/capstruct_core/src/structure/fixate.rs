use crate::structure::{Result, Structure, StructureError, Value};

impl Structure {
	/// Whether every field value denotes exactly one concrete value.
	pub fn is_fixed(&self) -> bool {
		self.fields().iter().all(|field| field.value.is_fixed())
	}

	/// Replace `name` by its canonical representative.
	///
	/// Returns `Ok(false)` when the value was already fixed or offers nothing to pick.
	pub fn fixate_field(&mut self, name: &str) -> Result<bool> {
		self.fixate_with(name, Value::fixate)
	}

	/// Fixate `name` to the integer closest to `target`.
	///
	/// Ranges clamp the target and snap it to their step (ties round up); lists pick the closest
	/// candidate, preferring the earliest on ties.
	pub fn fixate_field_nearest_int(&mut self, name: &str, target: i32) -> Result<bool> {
		self.fixate_with(name, |value| match value {
			Value::IntRange(range) => Some(Value::Int(range.nearest(target))),
			Value::List(items) => closest(items, |item| match item {
				Value::Int(v) => Some((Value::Int(*v), i64::from(*v).abs_diff(i64::from(target)))),
				Value::IntRange(range) => {
					let v = range.nearest(target);
					Some((Value::Int(v), i64::from(v).abs_diff(i64::from(target))))
				}
				_ => None,
			}),
			_ => None,
		})
	}

	/// Fixate `name` to the 64-bit integer closest to `target`.
	pub fn fixate_field_nearest_int64(&mut self, name: &str, target: i64) -> Result<bool> {
		self.fixate_with(name, |value| match value {
			Value::Int64Range(range) => Some(Value::Int64(range.nearest(target))),
			Value::List(items) => closest(items, |item| match item {
				Value::Int64(v) => Some((Value::Int64(*v), v.abs_diff(target))),
				Value::Int64Range(range) => {
					let v = range.nearest(target);
					Some((Value::Int64(v), v.abs_diff(target)))
				}
				_ => None,
			}),
			_ => None,
		})
	}

	/// Fixate `name` to the double closest to `target`.
	pub fn fixate_field_nearest_double(&mut self, name: &str, target: f64) -> Result<bool> {
		self.fixate_with(name, |value| match value {
			Value::DoubleRange(range) => Some(Value::Double(target.clamp(range.min(), range.max()))),
			Value::List(items) => closest_double(items, target),
			_ => None,
		})
	}

	/// Fixate a boolean list to `target` when it is offered, else to its first boolean.
	pub fn fixate_field_boolean(&mut self, name: &str, target: bool) -> Result<bool> {
		self.fixate_with(name, |value| match value {
			Value::List(items) => first_match_or_first(items, |item| match item {
				Value::Bool(v) => Some(*v == target),
				_ => None,
			}),
			_ => None,
		})
	}

	/// Fixate a string list to `target` when it is offered, else to its first string.
	pub fn fixate_field_string(&mut self, name: &str, target: &str) -> Result<bool> {
		self.fixate_with(name, |value| match value {
			Value::List(items) => first_match_or_first(items, |item| match item {
				Value::String(v) => Some(v.as_deref() == Some(target)),
				_ => None,
			}),
			_ => None,
		})
	}

	/// Fixate every field.
	pub fn fixate(&mut self) -> Result<()> {
		self.ensure_mutable()?;
		self.fixate_owned();
		Ok(())
	}

	/// Fixate every field without a guard check.
	pub(crate) fn fixate_owned(&mut self) {
		for field in self.fields_mut() {
			if let Some(fixed) = field.value.fixate() {
				field.value = fixed;
			}
		}
	}

	fn fixate_with<F>(&mut self, name: &str, pick: F) -> Result<bool>
	where
		F: FnOnce(&Value) -> Option<Value>,
	{
		self.ensure_mutable()?;
		let Some(value) = self.get(name) else {
			return Err(StructureError::FieldNotFound { field: name.to_owned() });
		};
		if value.is_fixed() {
			return Ok(false);
		}

		let Some(fixed) = pick(value) else {
			tracing::debug!(structure = self.name(), field = name, "no fixation candidate");
			return Ok(false);
		};
		tracing::trace!(structure = self.name(), field = name, %fixed, "fixated field");
		if let Some(slot) = self.fields_mut().iter_mut().find(|field| field.name() == name) {
			slot.value = fixed;
		}
		Ok(true)
	}
}

/// Candidate with the smallest distance; the earliest wins ties.
fn closest<F>(items: &[Value], mut score: F) -> Option<Value>
where
	F: FnMut(&Value) -> Option<(Value, u64)>,
{
	let mut best: Option<(Value, u64)> = None;
	for (candidate, distance) in items.iter().filter_map(&mut score) {
		if best.as_ref().is_none_or(|(_, kept)| distance < *kept) {
			best = Some((candidate, distance));
		}
	}
	best.map(|(value, _)| value)
}

fn closest_double(items: &[Value], target: f64) -> Option<Value> {
	let mut best: Option<(f64, f64)> = None;
	for item in items {
		let candidate = match item {
			Value::Double(v) => *v,
			Value::DoubleRange(range) => target.clamp(range.min(), range.max()),
			_ => continue,
		};
		let distance = (candidate - target).abs();
		if best.is_none_or(|(_, kept)| distance < kept) {
			best = Some((candidate, distance));
		}
	}
	best.map(|(value, _)| Value::Double(value))
}

/// First item for which `check` says `Some(true)`, else the first item it accepts at all.
fn first_match_or_first<F>(items: &[Value], mut check: F) -> Option<Value>
where
	F: FnMut(&Value) -> Option<bool>,
{
	let mut fallback = None;
	for item in items {
		match check(item) {
			Some(true) => return Some(item.clone()),
			Some(false) if fallback.is_none() => fallback = Some(item),
			_ => {}
		}
	}
	fallback.cloned()
}
