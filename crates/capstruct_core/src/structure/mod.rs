mod algebra;
mod error;
mod fixate;
mod guard;
mod name;
mod parse;
mod quark;
mod serialize;
mod store;
mod value;

/// Error and result aliases.
pub use error::{Result, StructureError};
/// Parent refcount handle and the guard it installs on a structure.
pub use guard::{MutabilityGuard, ParentRefcount};
/// Name charset helpers shared by the store and the parser.
pub use name::{is_name_char, validate_name};
/// Interned string handles.
pub use quark::Quark;
/// Structure store and its field record.
pub use store::{Field, Structure};
/// Typed value model, comparison, intersection, subset, and fixation.
pub use value::{DoubleRange, Int64Range, IntRange, Opaque, Value, ValueOrder, ValueType};
