use crate::structure::guard::{MutabilityGuard, ParentRefcount};
use crate::structure::name::validate_name;
use crate::structure::{Quark, Result, StructureError, Value, ValueType};

/// Name used by tag-list structures; structures with this name get the taglist policy.
const TAGLIST_NAME: &str = "taglist";

/// One named value inside a [`Structure`].
#[derive(Debug, Clone)]
pub struct Field {
	/// Interned field name.
	pub name: Quark,
	/// Field value.
	pub value: Value,
}

impl Field {
	/// Field name text.
	pub fn name(&self) -> &'static str {
		self.name.as_str()
	}
}

/// Ordered, named collection of uniquely named typed fields.
///
/// Setting an existing field replaces its value in place, so field order is the order in which
/// names were first set.
#[derive(Debug)]
pub struct Structure {
	name: Quark,
	fields: Vec<Field>,
	guard: MutabilityGuard,
	taglist: bool,
}

impl Structure {
	/// Create an empty structure; `name` must be a letter followed by name characters.
	pub fn new(name: &str) -> Result<Self> {
		Self::with_capacity(name, 0)
	}

	/// Create an empty structure with room for `capacity` fields.
	pub fn with_capacity(name: &str, capacity: usize) -> Result<Self> {
		validate_name(name)?;
		let quark = Quark::intern(name);
		tracing::trace!(name, capacity, "created structure");
		Ok(Self {
			name: quark,
			fields: Vec::with_capacity(capacity),
			guard: MutabilityGuard::Owned,
			taglist: name == TAGLIST_NAME,
		})
	}

	/// Create an empty structure that rejects null and empty strings.
	pub fn new_taglist(name: &str) -> Result<Self> {
		let mut out = Self::new(name)?;
		out.taglist = true;
		Ok(out)
	}

	/// Structure name.
	pub fn name(&self) -> &'static str {
		self.name.as_str()
	}

	/// Interned structure name.
	pub fn name_quark(&self) -> Quark {
		self.name
	}

	/// Whether the structure is called `name`.
	pub fn has_name(&self, name: &str) -> bool {
		self.name.as_str() == name
	}

	/// Rename the structure.
	pub fn set_name(&mut self, name: &str) -> Result<()> {
		self.ensure_mutable()?;
		validate_name(name)?;
		self.name = Quark::intern(name);
		Ok(())
	}

	/// Whether null and empty strings are dropped on set.
	pub fn is_taglist(&self) -> bool {
		self.taglist
	}

	pub(crate) fn set_taglist(&mut self, taglist: bool) {
		self.taglist = taglist;
	}

	/// Current mutation policy.
	pub fn guard(&self) -> &MutabilityGuard {
		&self.guard
	}

	/// Whether in-place mutation is currently allowed.
	pub fn is_mutable(&self) -> bool {
		self.guard.allows_mutation()
	}

	/// Attach (`Some`) or detach (`None`) the parent refcount that gates mutation.
	///
	/// Attaching twice, or detaching when nothing is attached, fails and leaves the guard as is.
	pub fn set_parent_refcount(&mut self, parent: Option<&ParentRefcount>) -> Result<()> {
		let attached = matches!(self.guard, MutabilityGuard::SharedVia(_));
		match (parent, attached) {
			(Some(_), true) => Err(StructureError::GuardAlreadySet),
			(None, false) => Err(StructureError::GuardNotSet),
			(Some(parent), false) => {
				self.guard = MutabilityGuard::SharedVia(parent.downgrade());
				Ok(())
			}
			(None, true) => {
				self.guard = MutabilityGuard::Owned;
				Ok(())
			}
		}
	}

	/// Whether `parent` is the refcount currently attached.
	pub fn is_owned_by(&self, parent: &ParentRefcount) -> bool {
		self.guard.points_at(parent)
	}

	pub(crate) fn ensure_mutable(&self) -> Result<()> {
		if self.guard.allows_mutation() { Ok(()) } else { Err(StructureError::NotMutable) }
	}

	/// Deep copy with no parent refcount attached.
	pub fn copy(&self) -> Self {
		tracing::trace!(name = self.name(), fields = self.fields.len(), "copying structure");
		Self {
			name: self.name,
			fields: self.fields.clone(),
			guard: MutabilityGuard::Owned,
			taglist: self.taglist,
		}
	}

	/// Set `name` to `value`, replacing an existing field in place.
	///
	/// On taglist structures a null or empty string is dropped with a warning and any existing
	/// field keeps its old value.
	pub fn set_value(&mut self, name: &str, value: impl Into<Value>) -> Result<()> {
		self.ensure_mutable()?;
		validate_name(name)?;
		self.set_field(Field {
			name: Quark::intern(name),
			value: value.into(),
		});
		Ok(())
	}

	/// Chaining form of [`Structure::set_value`].
	pub fn with_field(mut self, name: &str, value: impl Into<Value>) -> Result<Self> {
		self.set_value(name, value)?;
		Ok(self)
	}

	/// Insert or replace without guard or name checks; callers have done both.
	pub(crate) fn set_field(&mut self, field: Field) {
		if self.taglist {
			match &field.value {
				Value::String(None) => {
					tracing::warn!(field = field.name(), "dropping null string on taglist field");
					return;
				}
				Value::String(Some(text)) if text.is_empty() => {
					tracing::warn!(field = field.name(), "dropping empty string on taglist field");
					return;
				}
				_ => {}
			}
		}

		match self.fields.iter_mut().find(|slot| slot.name == field.name) {
			Some(slot) => slot.value = field.value,
			None => self.fields.push(field),
		}
	}

	/// Borrow the value of `name`.
	pub fn get(&self, name: &str) -> Option<&Value> {
		let quark = Quark::lookup(name)?;
		self.get_by_quark(quark)
	}

	/// Borrow the value of an interned field name.
	pub fn get_by_quark(&self, name: Quark) -> Option<&Value> {
		self.fields.iter().find(|field| field.name == name).map(|field| &field.value)
	}

	fn require(&self, name: &str) -> Result<&Value> {
		self.get(name).ok_or_else(|| StructureError::FieldNotFound { field: name.to_owned() })
	}

	fn mismatch(name: &str, expected: ValueType, got: &Value) -> StructureError {
		StructureError::TypeMismatch {
			field: name.to_owned(),
			expected: expected.name(),
			got: got.value_type().name(),
		}
	}

	/// Boolean field value.
	pub fn get_bool(&self, name: &str) -> Result<bool> {
		match self.require(name)? {
			Value::Bool(v) => Ok(*v),
			other => Err(Self::mismatch(name, ValueType::Bool, other)),
		}
	}

	/// 32-bit signed field value; an `int64` that fits is accepted too.
	pub fn get_int(&self, name: &str) -> Result<i32> {
		match self.require(name)? {
			Value::Int(v) => Ok(*v),
			other @ Value::Int64(wide) => i32::try_from(*wide).map_err(|_| Self::mismatch(name, ValueType::Int, other)),
			other => Err(Self::mismatch(name, ValueType::Int, other)),
		}
	}

	/// 32-bit unsigned field value.
	pub fn get_uint(&self, name: &str) -> Result<u32> {
		match self.require(name)? {
			Value::UInt(v) => Ok(*v),
			other => Err(Self::mismatch(name, ValueType::UInt, other)),
		}
	}

	/// 64-bit signed field value.
	pub fn get_int64(&self, name: &str) -> Result<i64> {
		match self.require(name)? {
			Value::Int64(v) => Ok(*v),
			other => Err(Self::mismatch(name, ValueType::Int64, other)),
		}
	}

	/// 64-bit unsigned field value.
	pub fn get_uint64(&self, name: &str) -> Result<u64> {
		match self.require(name)? {
			Value::UInt64(v) => Ok(*v),
			other => Err(Self::mismatch(name, ValueType::UInt64, other)),
		}
	}

	/// Double field value; an `int` is accepted too since it converts exactly.
	pub fn get_double(&self, name: &str) -> Result<f64> {
		match self.require(name)? {
			Value::Double(v) => Ok(*v),
			Value::Int(v) => Ok(f64::from(*v)),
			other => Err(Self::mismatch(name, ValueType::Double, other)),
		}
	}

	/// String field value; `Ok(None)` for the null string.
	pub fn get_str(&self, name: &str) -> Result<Option<&str>> {
		match self.require(name)? {
			Value::String(v) => Ok(v.as_deref()),
			other => Err(Self::mismatch(name, ValueType::String, other)),
		}
	}

	/// Nested structure field value.
	pub fn get_structure(&self, name: &str) -> Result<&Structure> {
		match self.require(name)? {
			Value::Structure(v) => Ok(v),
			other => Err(Self::mismatch(name, ValueType::Structure, other)),
		}
	}

	/// List field alternatives.
	pub fn get_list(&self, name: &str) -> Result<&[Value]> {
		match self.require(name)? {
			Value::List(v) => Ok(v),
			other => Err(Self::mismatch(name, ValueType::List, other)),
		}
	}

	/// Array field elements.
	pub fn get_array(&self, name: &str) -> Result<&[Value]> {
		match self.require(name)? {
			Value::Array(v) => Ok(v),
			other => Err(Self::mismatch(name, ValueType::Array, other)),
		}
	}

	/// Remove `name` if present.
	pub fn remove_field(&mut self, name: &str) -> Result<()> {
		self.ensure_mutable()?;
		if let Some(quark) = Quark::lookup(name) {
			self.fields.retain(|field| field.name != quark);
		}
		Ok(())
	}

	/// Remove every listed name that is present.
	pub fn remove_fields(&mut self, names: &[&str]) -> Result<()> {
		self.ensure_mutable()?;
		let quarks: Vec<Quark> = names.iter().filter_map(|name| Quark::lookup(name)).collect();
		self.fields.retain(|field| !quarks.contains(&field.name));
		Ok(())
	}

	/// Remove all fields.
	pub fn remove_all_fields(&mut self) -> Result<()> {
		self.ensure_mutable()?;
		self.fields.clear();
		Ok(())
	}

	/// Whether `name` is present.
	pub fn has_field(&self, name: &str) -> bool {
		self.get(name).is_some()
	}

	/// Whether `name` is present with a value of kind `kind`.
	pub fn has_field_typed(&self, name: &str, kind: ValueType) -> bool {
		self.field_type(name) == Some(kind)
	}

	/// Kind of the value stored under `name`.
	pub fn field_type(&self, name: &str) -> Option<ValueType> {
		self.get(name).map(Value::value_type)
	}

	/// Number of fields.
	pub fn n_fields(&self) -> usize {
		self.fields.len()
	}

	/// Name of the field at `index`, if in bounds.
	pub fn nth_field_name(&self, index: usize) -> Option<&'static str> {
		self.fields.get(index).map(Field::name)
	}

	/// Fields in order.
	pub fn fields(&self) -> &[Field] {
		&self.fields
	}

	/// Iterate `(name, value)` pairs in order.
	pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Value)> + '_ {
		self.fields.iter().map(|field| (field.name(), &field.value))
	}

	/// Visit fields in order until `visit` returns false; returns whether every visit returned true.
	pub fn for_each<F>(&self, mut visit: F) -> bool
	where
		F: FnMut(&'static str, &Value) -> bool,
	{
		self.fields.iter().all(|field| visit(field.name(), &field.value))
	}

	/// Visit fields in order, letting `visit` rewrite each value.
	///
	/// Stops at the first false and returns `Ok(false)`. Not transactional: values rewritten before
	/// the failing field keep their new contents.
	pub fn map_in_place<F>(&mut self, mut visit: F) -> Result<bool>
	where
		F: FnMut(&'static str, &mut Value) -> bool,
	{
		self.ensure_mutable()?;
		for field in &mut self.fields {
			if !visit(field.name.as_str(), &mut field.value) {
				return Ok(false);
			}
		}
		Ok(true)
	}

	/// Visit every field, letting `visit` rewrite it; fields for which it returns false are removed.
	pub fn filter_map_in_place<F>(&mut self, mut visit: F) -> Result<()>
	where
		F: FnMut(&'static str, &mut Value) -> bool,
	{
		self.ensure_mutable()?;
		self.fields.retain_mut(|field| visit(field.name.as_str(), &mut field.value));
		Ok(())
	}

	pub(crate) fn fields_mut(&mut self) -> &mut [Field] {
		&mut self.fields
	}
}

impl Clone for Structure {
	fn clone(&self) -> Self {
		self.copy()
	}
}

impl Drop for Structure {
	fn drop(&mut self) {
		if self.guard.is_attached() {
			tracing::warn!(name = self.name(), "dropping structure still attached to a parent refcount");
		}
	}
}
