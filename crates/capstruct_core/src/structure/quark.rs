use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::num::NonZeroU32;

use once_cell::sync::Lazy;
use parking_lot::Mutex;

/// Interned string handle; equal strings always intern to the same quark.
///
/// The handle carries its text, so reading a name never touches the intern table.
#[derive(Clone, Copy)]
pub struct Quark {
	id: NonZeroU32,
	name: &'static str,
}

static INTERNER: Lazy<Mutex<HashMap<&'static str, Quark>>> = Lazy::new(|| Mutex::new(HashMap::new()));

impl Quark {
	/// Intern `name`, allocating a new id on first sight.
	pub fn intern(name: &str) -> Self {
		let mut table = INTERNER.lock();
		if let Some(quark) = table.get(name) {
			return *quark;
		}

		// Interned strings live for the rest of the process.
		let leaked: &'static str = Box::leak(name.to_owned().into_boxed_str());
		let next = u32::try_from(table.len() + 1).expect("quark table exceeds u32 ids");
		let quark = Self {
			id: NonZeroU32::new(next).expect("quark ids start at 1"),
			name: leaked,
		};
		table.insert(leaked, quark);
		quark
	}

	/// Look up an already-interned name without allocating.
	pub fn lookup(name: &str) -> Option<Self> {
		INTERNER.lock().get(name).copied()
	}

	/// Interned text.
	pub fn as_str(self) -> &'static str {
		self.name
	}
}

// Ids and texts are one-to-one, so identity is the id alone.
impl PartialEq for Quark {
	fn eq(&self, other: &Self) -> bool {
		self.id == other.id
	}
}

impl Eq for Quark {}

impl Hash for Quark {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.id.hash(state);
	}
}

impl PartialOrd for Quark {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for Quark {
	fn cmp(&self, other: &Self) -> Ordering {
		self.id.cmp(&other.id)
	}
}

impl fmt::Debug for Quark {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Quark({}, {:?})", self.id, self.name)
	}
}

impl fmt::Display for Quark {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}
