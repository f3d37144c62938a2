use crate::structure::store::Field;
use crate::structure::{Result, Structure, StructureError, ValueOrder};

impl Structure {
	/// Same name, same field count, and every field of `self` equal to the same-named field of `other`.
	///
	/// Field order does not matter.
	pub fn is_equal(&self, other: &Structure) -> bool {
		if std::ptr::eq(self, other) {
			return true;
		}
		if self.name_quark() != other.name_quark() || self.n_fields() != other.n_fields() {
			return false;
		}
		self.fields().iter().all(|field| {
			other
				.get_by_quark(field.name)
				.is_some_and(|value| field.value.compare(value) == ValueOrder::Equal)
		})
	}

	/// Field-wise intersection.
	///
	/// Shared fields carry the intersection of both values and fields found on one side only are
	/// copied through. The result holds `self`'s fields in order, then `other`'s remaining fields.
	/// Any shared field without a common value fails the whole operation.
	pub fn intersect(&self, other: &Structure) -> Result<Structure> {
		if self.name_quark() != other.name_quark() {
			return Err(StructureError::NameMismatch {
				left: self.name().to_owned(),
				right: other.name().to_owned(),
			});
		}

		let mut out = Structure::with_capacity(self.name(), self.n_fields().min(other.n_fields()))?;
		out.set_taglist(self.is_taglist());
		for field in self.fields() {
			let value = match other.get_by_quark(field.name) {
				Some(theirs) => field.value.intersect(theirs).ok_or_else(|| {
					tracing::debug!(structure = self.name(), field = field.name(), "field values do not intersect");
					StructureError::NotIntersectable {
						field: field.name().to_owned(),
					}
				})?,
				None => field.value.clone(),
			};
			out.set_field(Field { name: field.name, value });
		}
		for field in other.fields() {
			if self.get_by_quark(field.name).is_none() {
				out.set_field(field.clone());
			}
		}
		Ok(out)
	}

	/// Cheap check for whether [`Structure::intersect`] could succeed.
	pub fn can_intersect(&self, other: &Structure) -> bool {
		if self.name_quark() != other.name_quark() {
			return false;
		}
		self.fields().iter().all(|field| {
			let Some(theirs) = other.get_by_quark(field.name) else {
				return true;
			};
			match field.value.compare(theirs) {
				ValueOrder::Equal => true,
				ValueOrder::Unordered => field.value.can_intersect(theirs) && field.value.intersect(theirs).is_some(),
				ValueOrder::Less | ValueOrder::Greater => false,
			}
		})
	}

	/// Whether `self` describes a subset of `superset`.
	///
	/// Every field of `superset` must exist in `self` with an equal or narrower value. Fields only
	/// `self` carries are not considered.
	pub fn is_subset(&self, superset: &Structure) -> bool {
		if self.name_quark() != superset.name_quark() {
			return false;
		}
		superset.fields().iter().all(|wanted| {
			self.get_by_quark(wanted.name)
				.is_some_and(|mine| mine.is_subset(&wanted.value))
		})
	}
}

impl PartialEq for Structure {
	fn eq(&self, other: &Self) -> bool {
		self.is_equal(other)
	}
}
