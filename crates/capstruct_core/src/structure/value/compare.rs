use std::cmp::Ordering;

use super::range::{Grid, GridOverlap};
use super::{DoubleRange, Int64Range, IntRange, Value, ValueType};

/// Largest int range that subset checks against a list will enumerate.
const MAX_ENUMERATED_MEMBERS: usize = 4096;

/// Result of comparing two values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueOrder {
	/// Left sorts first.
	Less,
	/// Both denote the same value.
	Equal,
	/// Left sorts last.
	Greater,
	/// No order exists between the two.
	Unordered,
}

impl ValueOrder {
	fn reverse(self) -> Self {
		match self {
			Self::Less => Self::Greater,
			Self::Greater => Self::Less,
			other => other,
		}
	}
}

impl From<Ordering> for ValueOrder {
	fn from(ordering: Ordering) -> Self {
		match ordering {
			Ordering::Less => Self::Less,
			Ordering::Equal => Self::Equal,
			Ordering::Greater => Self::Greater,
		}
	}
}

impl Value {
	/// Compare two values.
	///
	/// A list compared against a non-list equals it when it holds exactly the same member set
	/// (a single element, or the members of an integer range).
	pub fn compare(&self, other: &Value) -> ValueOrder {
		match (self, other) {
			(Value::List(items), rhs) if !matches!(rhs, Value::List(_)) => compare_list_with(items, rhs),
			(lhs, Value::List(items)) if !matches!(lhs, Value::List(_)) => compare_list_with(items, lhs).reverse(),
			_ => compare_nolist(self, other),
		}
	}

	/// Cheap check for whether [`Value::intersect`] has a rule for this pair.
	pub fn can_intersect(&self, other: &Value) -> bool {
		let (lhs, rhs) = (self.value_type(), other.value_type());
		if lhs == rhs || lhs == ValueType::List || rhs == ValueType::List {
			return true;
		}
		matches!(
			(lhs, rhs),
			(ValueType::Int, ValueType::IntRange)
				| (ValueType::IntRange, ValueType::Int)
				| (ValueType::Int64, ValueType::Int64Range)
				| (ValueType::Int64Range, ValueType::Int64)
				| (ValueType::Double, ValueType::DoubleRange)
				| (ValueType::DoubleRange, ValueType::Double)
		)
	}

	/// Values admitted by both sides, or `None` when they share nothing.
	pub fn intersect(&self, other: &Value) -> Option<Value> {
		if let Value::List(items) = self {
			return intersect_list(items, other);
		}
		if let Value::List(items) = other {
			return intersect_list(items, self);
		}

		if compare_nolist(self, other) == ValueOrder::Equal {
			return Some(self.clone());
		}

		match (self, other) {
			(Value::Int(v), Value::IntRange(range)) | (Value::IntRange(range), Value::Int(v)) => range.contains(*v).then_some(Value::Int(*v)),
			(Value::Int64(v), Value::Int64Range(range)) | (Value::Int64Range(range), Value::Int64(v)) => {
				range.contains(*v).then_some(Value::Int64(*v))
			}
			(Value::Double(v), Value::DoubleRange(range)) | (Value::DoubleRange(range), Value::Double(v)) => {
				range.contains(*v).then_some(Value::Double(*v))
			}
			(Value::IntRange(a), Value::IntRange(b)) => match a.grid().intersect(b.grid())? {
				// Points come from inside both ranges, so they fit the narrower width.
				GridOverlap::Point(v) => Some(Value::Int(v as i32)),
				GridOverlap::Span(grid) => IntRange::from_grid(grid).map(Value::IntRange),
			},
			(Value::Int64Range(a), Value::Int64Range(b)) => match a.grid().intersect(b.grid())? {
				GridOverlap::Point(v) => Some(Value::Int64(v as i64)),
				GridOverlap::Span(grid) => Int64Range::from_grid(grid).map(Value::Int64Range),
			},
			(Value::DoubleRange(a), Value::DoubleRange(b)) => {
				let min = a.min().max(b.min());
				let max = a.max().min(b.max());
				match min.partial_cmp(&max)? {
					Ordering::Less => DoubleRange::new(min, max).ok().map(Value::DoubleRange),
					Ordering::Equal => Some(Value::Double(min)),
					Ordering::Greater => None,
				}
			}
			(Value::Array(a), Value::Array(b)) => {
				if a.len() != b.len() {
					return None;
				}
				let items = a.iter().zip(b).map(|(lhs, rhs)| lhs.intersect(rhs)).collect::<Option<Vec<_>>>()?;
				Some(Value::Array(items))
			}
			(Value::Structure(a), Value::Structure(b)) => a.intersect(b).ok().map(Value::from),
			_ => None,
		}
	}

	/// Whether every value admitted by `self` is admitted by `superset`.
	pub fn is_subset(&self, superset: &Value) -> bool {
		if self.compare(superset) == ValueOrder::Equal {
			return true;
		}

		match (self, superset) {
			(Value::List(items), _) => items.iter().all(|item| item.is_subset(superset)),
			(_, Value::List(items)) => {
				items.iter().any(|item| self.is_subset(item))
					|| match self {
						Value::IntRange(range) => grid_members_in_list(range.grid(), items),
						Value::Int64Range(range) => grid_members_in_list(range.grid(), items),
						_ => false,
					}
			}
			(Value::Int(v), Value::IntRange(range)) => range.contains(*v),
			(Value::Int64(v), Value::Int64Range(range)) => range.contains(*v),
			(Value::Double(v), Value::DoubleRange(range)) => range.contains(*v),
			(Value::IntRange(a), Value::IntRange(b)) => a.grid().is_subset_of(b.grid()),
			(Value::Int64Range(a), Value::Int64Range(b)) => a.grid().is_subset_of(b.grid()),
			(Value::DoubleRange(a), Value::DoubleRange(b)) => a.min() >= b.min() && a.max() <= b.max(),
			(Value::Array(a), Value::Array(b)) => a.len() == b.len() && a.iter().zip(b).all(|(lhs, rhs)| lhs.is_subset(rhs)),
			(Value::Structure(a), Value::Structure(b)) => a.is_subset(b),
			_ => false,
		}
	}
}

fn compare_nolist(lhs: &Value, rhs: &Value) -> ValueOrder {
	match (lhs, rhs) {
		(Value::Bool(a), Value::Bool(b)) => {
			if a == b {
				ValueOrder::Equal
			} else {
				ValueOrder::Unordered
			}
		}
		(Value::Int(a), Value::Int(b)) => a.cmp(b).into(),
		(Value::UInt(a), Value::UInt(b)) => a.cmp(b).into(),
		(Value::Int64(a), Value::Int64(b)) => a.cmp(b).into(),
		(Value::UInt64(a), Value::UInt64(b)) => a.cmp(b).into(),
		(Value::Double(a), Value::Double(b)) => a.partial_cmp(b).map_or(ValueOrder::Unordered, ValueOrder::from),
		(Value::String(a), Value::String(b)) => match (a, b) {
			(None, None) => ValueOrder::Equal,
			(Some(a), Some(b)) => a.as_bytes().cmp(b.as_bytes()).into(),
			_ => ValueOrder::Unordered,
		},
		(Value::IntRange(a), Value::IntRange(b)) => equal_or_unordered(a == b),
		(Value::Int64Range(a), Value::Int64Range(b)) => equal_or_unordered(a == b),
		(Value::DoubleRange(a), Value::DoubleRange(b)) => equal_or_unordered(a == b),
		(Value::List(a), Value::List(b)) => compare_unordered_items(a, b),
		(Value::Array(a), Value::Array(b)) => {
			equal_or_unordered(a.len() == b.len() && a.iter().zip(b).all(|(lhs, rhs)| lhs.compare(rhs) == ValueOrder::Equal))
		}
		(Value::Structure(a), Value::Structure(b)) => equal_or_unordered(a.is_equal(b)),
		(Value::Opaque(a), Value::Opaque(b)) => equal_or_unordered(a.same_handle(b)),
		_ => ValueOrder::Unordered,
	}
}

fn equal_or_unordered(equal: bool) -> ValueOrder {
	if equal { ValueOrder::Equal } else { ValueOrder::Unordered }
}

/// Order-insensitive comparison: every item of `a` pairs with a distinct equal item of `b`.
fn compare_unordered_items(a: &[Value], b: &[Value]) -> ValueOrder {
	if a.len() != b.len() {
		return ValueOrder::Unordered;
	}

	let mut taken = vec![false; b.len()];
	for item in a {
		let slot = (0..b.len()).find(|&idx| !taken[idx] && item.compare(&b[idx]) == ValueOrder::Equal);
		match slot {
			Some(idx) => taken[idx] = true,
			None => return ValueOrder::Unordered,
		}
	}
	ValueOrder::Equal
}

fn compare_list_with(items: &[Value], other: &Value) -> ValueOrder {
	if list_equals_range(items, other) {
		return ValueOrder::Equal;
	}
	if items.is_empty() {
		return ValueOrder::Unordered;
	}

	for item in items {
		let order = item.compare(other);
		if order != ValueOrder::Equal {
			return if items.len() == 1 { order } else { ValueOrder::Unordered };
		}
	}
	ValueOrder::Equal
}

fn list_equals_range(items: &[Value], other: &Value) -> bool {
	let grid = match other {
		Value::IntRange(range) => range.grid(),
		Value::Int64Range(range) => range.grid(),
		_ => return false,
	};

	let mut members = Vec::with_capacity(items.len());
	for item in items {
		let value = match (item, other) {
			(Value::Int(v), Value::IntRange(_)) => i128::from(*v),
			(Value::Int64(v), Value::Int64Range(_)) => i128::from(*v),
			_ => return false,
		};
		if !grid.contains(value) {
			return false;
		}
		members.push(value);
	}
	members.sort_unstable();
	members.dedup();
	!members.is_empty() && members.len() as i128 == grid.len() && members.len() == items.len()
}

fn grid_members_in_list(grid: Grid, items: &[Value]) -> bool {
	let Some(members) = grid.members(MAX_ENUMERATED_MEMBERS) else {
		return false;
	};
	members.into_iter().all(|member| {
		items.iter().any(|item| match item {
			Value::Int(v) => i128::from(*v) == member,
			Value::Int64(v) => i128::from(*v) == member,
			Value::IntRange(range) => range.grid().contains(member),
			Value::Int64Range(range) => range.grid().contains(member),
			_ => false,
		})
	})
}

/// Intersect every alternative of a list with `other`, keeping distinct survivors.
fn intersect_list(items: &[Value], other: &Value) -> Option<Value> {
	let mut survivors: Vec<Value> = Vec::new();
	for item in items {
		let Some(hit) = item.intersect(other) else {
			continue;
		};
		let flattened = match hit {
			Value::List(inner) => inner,
			single => vec![single],
		};
		for candidate in flattened {
			if !survivors.iter().any(|kept| kept.compare(&candidate) == ValueOrder::Equal) {
				survivors.push(candidate);
			}
		}
	}

	match survivors.len() {
		0 => None,
		1 => survivors.pop(),
		_ => Some(Value::List(survivors)),
	}
}

#[cfg(test)]
mod tests;
