use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Weak};

/// Reference counter owned by a parent container that aliases a structure.
///
/// The parent starts at a count of one and bumps it whenever it is shared.
/// Structures attached to it refuse in-place mutation while the count is not one.
#[derive(Debug, Clone)]
pub struct ParentRefcount(Arc<AtomicUsize>);

impl ParentRefcount {
	/// Create a counter held by exactly one owner.
	pub fn new() -> Self {
		Self(Arc::new(AtomicUsize::new(1)))
	}

	/// Register one more holder of the parent.
	pub fn acquire(&self) -> usize {
		self.0.fetch_add(1, Ordering::AcqRel) + 1
	}

	/// Drop one holder of the parent; saturates at zero.
	pub fn release(&self) -> usize {
		let prev = self.0.fetch_update(Ordering::AcqRel, Ordering::Acquire, |n| Some(n.saturating_sub(1)));
		prev.unwrap_or(0).saturating_sub(1)
	}

	/// Current holder count.
	pub fn count(&self) -> usize {
		self.0.load(Ordering::Acquire)
	}

	pub(crate) fn downgrade(&self) -> Weak<AtomicUsize> {
		Arc::downgrade(&self.0)
	}
}

impl Default for ParentRefcount {
	fn default() -> Self {
		Self::new()
	}
}

/// Mutation policy carried by a structure.
#[derive(Debug, Clone, Default)]
pub enum MutabilityGuard {
	/// Exclusively owned; always mutable.
	#[default]
	Owned,
	/// Aliased by a parent; mutable only while the parent count is one.
	SharedVia(Weak<AtomicUsize>),
}

impl MutabilityGuard {
	/// Whether in-place mutation is currently allowed.
	pub fn allows_mutation(&self) -> bool {
		match self {
			Self::Owned => true,
			// A parent that is gone no longer aliases us.
			Self::SharedVia(weak) => weak.upgrade().is_none_or(|count| count.load(Ordering::Acquire) == 1),
		}
	}

	/// Whether a parent refcount is attached and still alive.
	pub fn is_attached(&self) -> bool {
		match self {
			Self::Owned => false,
			Self::SharedVia(weak) => weak.strong_count() > 0,
		}
	}

	pub(crate) fn points_at(&self, parent: &ParentRefcount) -> bool {
		match self {
			Self::Owned => false,
			Self::SharedVia(weak) => weak.upgrade().is_some_and(|count| Arc::ptr_eq(&count, &parent.0)),
		}
	}
}
